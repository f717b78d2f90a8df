//! Collaborator traits used when rendering messages.
//!
//! - [`Translate`]: maps a message identifier to display text
//! - [`TryTranslate`]: fallible variant whose errors reach the caller unchanged
//!
//! # Examples
//!
//! ```
//! use validation_result::traits::Translate;
//! use validation_result::Untranslated;
//!
//! let shout = |message: &str| message.to_uppercase();
//! assert_eq!(shout.translate("bad_param"), "BAD_PARAM");
//! assert_eq!(Untranslated.translate("bad_param"), "bad_param");
//! ```

pub mod translate;

pub use translate::{Translate, TryTranslate, Untranslated};
