//! Message container types.
//!
//! This module provides [`ValidationResult`], the container that collects the
//! errors and warnings produced while validating a configuration, together with
//! [`RenderConfig`] for turning its contents into text.
//!
//! # Examples
//!
//! ```
//! use validation_result::ValidationResult;
//!
//! let mut result = ValidationResult::new()
//!     .with_error("layer height exceeds nozzle diameter")
//!     .with_warning("support material disabled");
//!
//! assert!(!result.is_empty());
//! println!("{}", result.errors_and_warnings_concatenated());
//!
//! result.clear();
//! assert!(result.is_empty());
//! ```
pub mod alloc_type;
pub mod render_config;
pub mod validation_result;

pub use render_config::*;
pub use validation_result::*;

/// Deduplicating, unordered collection of message strings.
///
/// Backed by a `HashSet` when the `std` feature is enabled and by a `BTreeSet`
/// otherwise. Iteration order is unspecified in either case.
#[cfg(feature = "std")]
pub type MessageSet = alloc_type::HashSet<alloc_type::String>;

/// Deduplicating, unordered collection of message strings.
///
/// Backed by a `HashSet` when the `std` feature is enabled and by a `BTreeSet`
/// otherwise. Iteration order is unspecified in either case.
#[cfg(not(feature = "std"))]
pub type MessageSet = alloc_type::BTreeSet<alloc_type::String>;
