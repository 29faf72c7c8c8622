//! Deep-equality gate in front of a [`TemplateStore`].
//!
//! Every engine operation returns a newly allocated tree even when nothing
//! observably changed, so a naive auto-save would write on every
//! keystroke. [`Autosave`] compares the flattened snapshot against the
//! last persisted one and only calls the store on a real difference,
//! adopting the canonical snapshot the store returns so server-assigned
//! ids replace temporary ones.

use crate::error::Result;
use crate::grouping::group_template;
use crate::models::Template;
use crate::wire::{to_persisted, PersistedTemplate, TemplateStore};

/// Debouncing persistence wrapper.
pub struct Autosave<S: TemplateStore> {
    store: S,
    last_saved: Option<PersistedTemplate>,
}

impl<S: TemplateStore> Autosave<S> {
    /// Wraps a store with no baseline; the first save always writes.
    pub fn new(store: S) -> Self {
        Self {
            store,
            last_saved: None,
        }
    }

    /// Wraps a store with the snapshot that is already persisted, so an
    /// unchanged template is never re-written.
    pub fn with_baseline(store: S, baseline: PersistedTemplate) -> Self {
        Self {
            store,
            last_saved: Some(baseline),
        }
    }

    /// Persists the template if its flat snapshot differs from the last
    /// saved one.
    ///
    /// Returns `Ok(None)` when nothing changed. On a write, returns the
    /// canonical template reloaded from the store's response, regrouped
    /// for editing; the caller should adopt it to pick up server-assigned
    /// ids.
    pub fn save_if_changed(&mut self, template: &Template) -> Result<Option<Template>> {
        let snapshot = to_persisted(template);
        if self.last_saved.as_ref() == Some(&snapshot) {
            return Ok(None);
        }
        let canonical = self.store.save(&snapshot)?;
        let adopted = group_template(&canonical.clone().into_template());
        self.last_saved = Some(canonical);
        Ok(Some(adopted))
    }

    /// The last snapshot known to be persisted, if any.
    pub fn last_saved(&self) -> Option<&PersistedTemplate> {
        self.last_saved.as_ref()
    }
}
