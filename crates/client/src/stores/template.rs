//! Currently selected profile template.

use serde::{Deserialize, Serialize};

use super::{Persisted, PersistedState};
use crate::storage::KeyValueStorage;
use crate::templates::TemplateConfig;

/// Persisted template selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateState {
    pub selected_template: Option<TemplateConfig>,
}

impl PersistedState for TemplateState {
    const KEY: &'static str = "template-storage";
    const VERSION: u32 = 0;
}

/// Single-slot holder for the selected template. There is no reset.
#[derive(Debug)]
pub struct TemplateStore<S> {
    inner: Persisted<TemplateState, S>,
}

impl<S: KeyValueStorage> TemplateStore<S> {
    /// Rehydrate the selection from `storage`.
    pub fn load(storage: S) -> Self {
        Self {
            inner: Persisted::load(storage),
        }
    }

    /// The selected template, if any.
    pub fn selected(&self) -> Option<&TemplateConfig> {
        self.inner.state().selected_template.as_ref()
    }

    /// Replace the selection unconditionally.
    pub fn set_selected_template(&mut self, config: TemplateConfig) {
        self.inner
            .update(|state| state.selected_template = Some(config));
    }

    /// Select the first catalog entry if nothing is selected yet.
    ///
    /// Meant to run once at application start. Returns whether it wrote.
    pub fn initialize(&mut self, catalog: &[TemplateConfig]) -> bool {
        if self.selected().is_some() {
            return false;
        }
        let Some(first) = catalog.first() else {
            return false;
        };
        self.set_selected_template(first.clone());
        true
    }
}
