//! Typed stand-in for the DOM: text fields, the registry that resolves them
//! by id, the Persian→English pair bindings, and action controls.
//!
//! Field values are the one piece of state shared between the operator and
//! the translation controller, so each field guards its state with a mutex
//! and exposes [`FieldHandle::fill_if_blank`] as a single check-and-write.

use crate::language::Language;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct FieldState {
    value: String,
    placeholder: String,
}

/// Shared handle to one text input.
#[derive(Debug, Clone, Default)]
pub struct FieldHandle {
    state: Arc<Mutex<FieldState>>,
}

impl FieldHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let handle = Self::new();
        handle.set_text(text);
        handle
    }

    pub fn text(&self) -> String {
        self.state.lock().unwrap().value.clone()
    }

    pub fn set_text(&self, text: &str) {
        self.state.lock().unwrap().value = text.to_string();
    }

    /// True if the trimmed value is empty.
    pub fn is_blank(&self) -> bool {
        self.state.lock().unwrap().value.trim().is_empty()
    }

    pub fn placeholder(&self) -> String {
        self.state.lock().unwrap().placeholder.clone()
    }

    pub fn set_placeholder(&self, text: &str) {
        self.state.lock().unwrap().placeholder = text.to_string();
    }

    pub fn clear_placeholder(&self) {
        self.state.lock().unwrap().placeholder.clear();
    }

    /// Write `text` only if the field is currently blank, as one atomic
    /// operation under the field lock. Returns whether the write happened.
    ///
    /// This is the auto-fill-if-empty check, evaluated at write time so a
    /// translation that completes after the operator has typed into the
    /// field is discarded instead of clobbering their text.
    pub fn fill_if_blank(&self, text: &str) -> bool {
        let mut state = self.state.lock().unwrap();
        if state.value.trim().is_empty() {
            state.value = text.to_string();
            true
        } else {
            false
        }
    }
}

/// Registry of live fields, built once at form initialization.
#[derive(Debug, Default)]
pub struct FieldRegistry {
    fields: HashMap<String, FieldHandle>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field and return its handle.
    pub fn insert(&mut self, id: &str) -> FieldHandle {
        let handle = FieldHandle::new();
        self.fields.insert(id.to_string(), handle.clone());
        handle
    }

    /// Resolve a field id to its handle, if the form rendered it.
    pub fn resolve(&self, id: &str) -> Option<FieldHandle> {
        self.fields.get(id).cloned()
    }

    /// Current text of a field, or empty if the form never rendered it.
    pub fn text(&self, id: &str) -> String {
        self.resolve(id).map(|f| f.text()).unwrap_or_default()
    }

    /// Checkbox-style fields store "true"/"false" as text.
    pub fn flag(&self, id: &str) -> bool {
        self.text(id).trim() == "true"
    }
}

/// A bound Persian→English field pair.
#[derive(Debug, Clone)]
pub struct FieldPair {
    pub source_id: String,
    pub target_id: String,
    pub source: FieldHandle,
    pub target: FieldHandle,
}

/// Resolve declared (source, target) id pairs against a registry.
///
/// Pairs whose source or target is missing are dropped silently: forms that
/// render only a subset of fields (or none, on the public site) are fine.
/// Degenerate pairs with identical ids are dropped too.
pub fn bind_pairs(registry: &FieldRegistry, declared: &[(String, String)]) -> Vec<FieldPair> {
    declared
        .iter()
        .filter(|(source_id, target_id)| source_id != target_id)
        .filter_map(|(source_id, target_id)| {
            let source = registry.resolve(source_id)?;
            let target = registry.resolve(target_id)?;
            Some(FieldPair {
                source_id: source_id.clone(),
                target_id: target_id.clone(),
                source,
                target,
            })
        })
        .collect()
}

/// Bilingual field bases of the post editor, in form order.
pub fn post_editor_pairs() -> Vec<(String, String)> {
    declared_pairs(&["post_title", "post_excerpt", "post_content", "post_category"])
}

/// Bilingual field bases of the personal-info editor, in form order.
pub fn profile_editor_pairs() -> Vec<(String, String)> {
    declared_pairs(&["name", "title", "about"])
}

fn declared_pairs(bases: &[&str]) -> Vec<(String, String)> {
    bases
        .iter()
        .map(|base| {
            (
                Language::Persian.field_id(base),
                Language::English.field_id(base),
            )
        })
        .collect()
}

#[derive(Debug)]
struct ControlState {
    label: String,
    idle_label: String,
    disabled: bool,
}

/// A button-like control that can be disabled with a busy label while an
/// operation is in flight, then restored.
#[derive(Debug, Clone)]
pub struct ActionControl {
    state: Arc<Mutex<ControlState>>,
}

impl ActionControl {
    pub fn new(label: &str) -> Self {
        Self {
            state: Arc::new(Mutex::new(ControlState {
                label: label.to_string(),
                idle_label: label.to_string(),
                disabled: false,
            })),
        }
    }

    /// Disable the control and show a busy label.
    pub fn begin_busy(&self, busy_label: &str) {
        let mut state = self.state.lock().unwrap();
        state.label = busy_label.to_string();
        state.disabled = true;
    }

    /// Re-enable the control and restore its idle label. Callers must reach
    /// this on every exit path, success or failure.
    pub fn restore(&self) {
        let mut state = self.state.lock().unwrap();
        state.label = state.idle_label.clone();
        state.disabled = false;
    }

    pub fn label(&self) -> String {
        self.state.lock().unwrap().label.clone()
    }

    pub fn is_disabled(&self) -> bool {
        self.state.lock().unwrap().disabled
    }
}
