//! Tracing integration for validation results.
//!
//! Emits the messages of a [`ValidationResult`] as `tracing` events so that
//! validation feedback ends up in the same place as the rest of an
//! application's diagnostics.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! validation-result = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use validation_result::tracing_ext::ValidationResultTracingExt;
//!
//! let result = validate(&config);
//! result.trace_messages_with(&|id: &str| i18n.lookup(id));
//! result.record_summary();
//! ```

use tracing::{debug, error, warn};

use crate::traits::{Translate, Untranslated};
use crate::types::ValidationResult;

/// Target used for every event emitted by this module.
pub const TRACING_TARGET: &str = "validation_result";

/// Extension trait emitting the contents of a validation result as tracing events.
pub trait ValidationResultTracingExt {
    /// Emits one `ERROR` event per error and one `WARN` event per warning.
    fn trace_messages(&self) {
        self.trace_messages_with(&Untranslated);
    }

    /// Same as [`trace_messages`](Self::trace_messages), translating each message first.
    fn trace_messages_with<T>(&self, translate: &T)
    where
        T: Translate + ?Sized;

    /// Emits a single `DEBUG` event carrying the error and warning counts.
    fn record_summary(&self);
}

impl ValidationResultTracingExt for ValidationResult {
    fn trace_messages_with<T>(&self, translate: &T)
    where
        T: Translate + ?Sized,
    {
        for message in self.iter_errors() {
            error!(target: TRACING_TARGET, "{}", translate.translate(message));
        }
        for message in self.iter_warnings() {
            warn!(target: TRACING_TARGET, "{}", translate.translate(message));
        }
    }

    fn record_summary(&self) {
        debug!(
            target: TRACING_TARGET,
            errors = self.error_count(),
            warnings = self.warning_count(),
            "validation finished"
        );
    }
}
