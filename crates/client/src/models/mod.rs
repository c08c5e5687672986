//! Backend records consumed by the client.

pub mod link;
pub mod user;

pub use link::ProfileLink;
pub use user::UserRecord;
