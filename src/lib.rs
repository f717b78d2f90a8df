//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `validation_result::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Collecting Feedback
//!
//! ```
//! use validation_result::ValidationResult;
//!
//! let mut result = ValidationResult::new();
//! result.add_error("first_layer_height_too_large");
//! result.add_warning("bridging_speed_high");
//!
//! assert!(!result.is_empty());
//! assert_eq!(
//!     result.errors_and_warnings_concatenated(),
//!     "first_layer_height_too_large\n\nbridging_speed_high"
//! );
//! ```
//!
//! ## Merging Results
//!
//! ```
//! use validation_result::ValidationResult;
//!
//! let print = ValidationResult::from_errors(["bed_temperature"]);
//! let filament = ValidationResult::from_errors(["bed_temperature", "retraction"]);
//!
//! let merged: ValidationResult = vec![print, filament].into_iter().collect();
//! assert_eq!(merged.error_count(), 2);
//! ```
//!
//! ## Translating Messages
//!
//! ```
//! use validation_result::ValidationResult;
//!
//! let result = ValidationResult::from_errors(["bad_param"]);
//! let translated = result.errors_concatenated_with(&|id: &str| id.to_uppercase());
//! assert_eq!(translated, "BAD_PARAM");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between ValidationResult and Result
pub mod convert;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Translation traits used by rendering
pub mod traits;
/// ValidationResult, MessageSet and rendering configuration
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::*;
pub use traits::*;
pub use types::{MessageSet, RenderConfig, ValidationResult};
