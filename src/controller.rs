//! Translation trigger controller.
//!
//! Three trigger surfaces funnel through one rule, auto-fill-if-empty: a
//! completed translation is written into the English field only if that
//! field is still blank at write time. Blur and manual triggers are also
//! guarded by a per-target pending set so two rapid triggers for the same
//! field never put two requests in flight.

use crate::fields::{ActionControl, FieldPair};
use crate::notify::Notifier;
use crate::strings;
use crate::translator::Translator;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

pub struct TranslationController {
    translator: Translator,
    notifier: Notifier,
    pending: Arc<Mutex<HashSet<String>>>,
}

/// Clears the pending mark for a target field when dropped, so every exit
/// path of a trigger releases it.
struct PendingGuard {
    pending: Arc<Mutex<HashSet<String>>>,
    target_id: String,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.pending.lock().unwrap().remove(&self.target_id);
    }
}

impl TranslationController {
    pub fn new(translator: Translator, notifier: Notifier) -> Self {
        Self {
            translator,
            notifier,
            pending: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Whether a translation is in flight for this target field.
    pub fn is_pending(&self, target_id: &str) -> bool {
        self.pending.lock().unwrap().contains(target_id)
    }

    /// Mark a target Pending, or refuse if it already is. Re-entrant
    /// triggers are ignored, never queued.
    fn try_begin(&self, target_id: &str) -> Option<PendingGuard> {
        let mut pending = self.pending.lock().unwrap();
        if !pending.insert(target_id.to_string()) {
            debug!("{}: translation already pending, trigger ignored", target_id);
            return None;
        }
        Some(PendingGuard {
            pending: Arc::clone(&self.pending),
            target_id: target_id.to_string(),
        })
    }

    /// Blur trigger: the operator left the Persian field.
    ///
    /// Only fires when the Persian text is non-blank and the English field
    /// is blank; otherwise no remote call is made at all. While pending the
    /// English field's placeholder shows the translating indicator, cleared
    /// afterward on every outcome.
    pub async fn on_blur(&self, pair: &FieldPair) {
        if pair.source.is_blank() || !pair.target.is_blank() {
            return;
        }
        let Some(_guard) = self.try_begin(&pair.target_id) else {
            return;
        };

        pair.target.set_placeholder(strings::ui().translating_placeholder);
        let result = self.translator.translate(&pair.source.text()).await;
        pair.target.clear_placeholder();

        match result {
            Ok(translation) if !translation.is_empty() => {
                // Re-checked at write time: the operator may have typed into
                // the field while the request was in flight.
                if pair.target.fill_if_blank(&translation) {
                    self.notifier.notify(strings::ui().translated);
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("{}: blur translation failed: {}", pair.target_id, e);
            }
        }
    }

    /// Manual trigger: the operator pressed the translate button.
    ///
    /// Explicit intent overrides auto-fill-if-empty, so a successful
    /// translation overwrites the English field even if it had text. An
    /// empty Persian field gets a notice and no remote call. The control is
    /// disabled with a busy label while pending and restored on every exit
    /// path.
    pub async fn manual(&self, pair: &FieldPair, control: &ActionControl) {
        if pair.source.is_blank() {
            self.notifier.notify(strings::ui().empty_source);
            return;
        }
        let Some(_guard) = self.try_begin(&pair.target_id) else {
            return;
        };

        control.begin_busy(strings::ui().translate_button_busy);
        let result = self.translator.translate(&pair.source.text()).await;

        match result {
            Ok(translation) if !translation.is_empty() => {
                pair.target.set_text(&translation);
                self.notifier.notify(strings::ui().translated);
            }
            Ok(_) => {
                self.notifier.notify(strings::ui().translate_failed);
            }
            Err(e) => {
                warn!("{}: manual translation failed: {}", pair.target_id, e);
                self.notifier.notify(strings::ui().translate_failed);
            }
        }

        control.restore();
    }

    /// Pre-submit batch pass: fill every blank English field before the form
    /// is serialized.
    ///
    /// Pairs are awaited strictly in declared order, one at a time, so the
    /// form fills deterministically and at most one request is in flight. A
    /// failed pair is skipped; the pass itself never fails, and submission
    /// proceeds regardless.
    pub async fn pre_submit(&self, pairs: &[FieldPair]) {
        for pair in pairs {
            if pair.source.is_blank() || !pair.target.is_blank() {
                continue;
            }
            let Some(_guard) = self.try_begin(&pair.target_id) else {
                continue;
            };

            match self.translator.translate(&pair.source.text()).await {
                Ok(translation) if !translation.is_empty() => {
                    pair.target.fill_if_blank(&translation);
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(
                        "{}: pre-submit translation failed, field left as-is: {}",
                        pair.target_id, e
                    );
                }
            }
        }
    }
}
