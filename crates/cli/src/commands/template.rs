//! Template commands.

use linkpage_client::storage::{FileStorage, KeyValueStorage};
use linkpage_client::stores::TemplateStore;
use linkpage_client::templates::{TemplateConfig, builtin_catalog, find_template};

use super::{CommandError, print_json};

/// Print one line per built-in template, marking the selected one.
pub fn list(storage: &FileStorage) {
    let store = TemplateStore::load(storage);
    let selected = store.selected().and_then(TemplateConfig::id);

    for template in builtin_catalog() {
        let id = template.id().unwrap_or_default();
        let marker = if Some(id) == selected { '*' } else { ' ' };
        println!("{marker} {id}\t{}", template.name().unwrap_or(id));
    }
}

pub fn select(storage: &FileStorage, id: &str) -> Result<(), CommandError> {
    let catalog = builtin_catalog();
    let template = find_template(&catalog, id)
        .ok_or_else(|| CommandError::NotFound(format!("template {id}")))?;

    TemplateStore::load(storage).set_selected_template(template.clone());
    tracing::info!("Selected template {id}");
    Ok(())
}

pub fn show(storage: &FileStorage) -> Result<(), CommandError> {
    let store = TemplateStore::load(storage);
    print_json(&store.selected())
}

/// Select the first built-in template when nothing is selected yet.
///
/// Runs on every CLI start; returns whether a selection was made.
pub fn ensure_initialized(storage: impl KeyValueStorage) -> bool {
    let initialized = TemplateStore::load(storage).initialize(&builtin_catalog());
    if initialized {
        tracing::debug!("Selected the default template");
    }
    initialized
}

pub fn init(storage: &FileStorage) {
    if ensure_initialized(storage) {
        tracing::info!("Selected the default template");
    } else {
        tracing::info!("A template is already selected");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use linkpage_client::storage::MemoryStorage;

    use super::*;

    #[test]
    fn test_startup_selects_default_template() {
        let storage = MemoryStorage::new();
        assert!(ensure_initialized(&storage));

        let catalog = builtin_catalog();
        assert_eq!(TemplateStore::load(&storage).selected(), catalog.first());
    }

    #[test]
    fn test_startup_keeps_existing_selection() {
        let storage = MemoryStorage::new();
        let catalog = builtin_catalog();
        let chosen = catalog.last().unwrap().clone();
        TemplateStore::load(&storage).set_selected_template(chosen.clone());

        assert!(!ensure_initialized(&storage));
        assert_eq!(TemplateStore::load(&storage).selected(), Some(&chosen));
    }
}
