//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use validation_result::prelude::*;
//!
//! let mut result = ValidationResult::new();
//! result.add_error("bad_param");
//! assert_eq!(result.errors_concatenated_with(&Untranslated), "bad_param");
//! ```

// Core types
pub use crate::types::{MessageSet, RenderConfig, ValidationResult};

// Traits
pub use crate::traits::{Translate, TryTranslate, Untranslated};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::ValidationResultTracingExt;
