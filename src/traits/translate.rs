//! Translation of message identifiers into display text.
//!
//! Messages stored in a [`ValidationResult`](crate::ValidationResult) are expected
//! to be pre-translation identifiers. Rendering accepts any [`Translate`]
//! implementation to localize each message independently.
//!
//! # Implementations
//!
//! - `Fn(&str) -> String` - every plain closure or function
//! - [`Untranslated`] - identity, messages are rendered verbatim
//! - `Option<T>` - `None` behaves like [`Untranslated`]
//!
//! # Examples
//!
//! ```
//! use validation_result::ValidationResult;
//!
//! fn lookup(id: &str) -> String {
//!     match id {
//!         "infill_overlap" => "Infill overlaps the perimeters".to_string(),
//!         other => other.to_string(),
//!     }
//! }
//!
//! let result = ValidationResult::new().with_error("infill_overlap");
//! assert_eq!(result.errors_concatenated_with(&lookup), "Infill overlaps the perimeters");
//!
//! let none: Option<fn(&str) -> String> = None;
//! assert_eq!(result.errors_concatenated_with(&none), "infill_overlap");
//! ```
use crate::types::alloc_type::{Cow, String};
use core::convert::Infallible;

/// Maps a message identifier to the text shown to the user.
///
/// Implementations are invoked once per message, synchronously, in the
/// iteration order of the underlying set. A panicking implementation unwinds
/// through the rendering call unchanged.
pub trait Translate {
    /// Returns the display text for `message`.
    fn translate<'a>(&self, message: &'a str) -> Cow<'a, str>;
}

/// Fallible translation. The first error aborts rendering and is returned as is.
///
/// # Examples
///
/// ```
/// use validation_result::ValidationResult;
///
/// let result = ValidationResult::new().with_error("unknown_key");
/// let rendered = result.try_errors_concatenated_with(&mut |id: &str| {
///     if id.starts_with("unknown") {
///         Err(format!("no translation for {id}"))
///     } else {
///         Ok(id.to_string())
///     }
/// });
///
/// assert_eq!(rendered, Err("no translation for unknown_key".to_string()));
/// ```
pub trait TryTranslate {
    /// Error produced when a message cannot be translated.
    type Error;

    /// Returns the display text for `message`, or the reason it could not be produced.
    fn try_translate<'a>(&mut self, message: &'a str) -> Result<Cow<'a, str>, Self::Error>;
}

/// Identity translation: messages are rendered exactly as stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Untranslated;

impl Translate for Untranslated {
    #[inline]
    fn translate<'a>(&self, message: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(message)
    }
}

impl TryTranslate for Untranslated {
    type Error = Infallible;

    #[inline]
    fn try_translate<'a>(&mut self, message: &'a str) -> Result<Cow<'a, str>, Self::Error> {
        Ok(Cow::Borrowed(message))
    }
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    #[inline]
    fn translate<'a>(&self, message: &'a str) -> Cow<'a, str> {
        Cow::Owned(self(message))
    }
}

impl<F, E> TryTranslate for F
where
    F: FnMut(&str) -> Result<String, E>,
{
    type Error = E;

    #[inline]
    fn try_translate<'a>(&mut self, message: &'a str) -> Result<Cow<'a, str>, Self::Error> {
        self(message).map(Cow::Owned)
    }
}

impl<T: Translate> Translate for Option<T> {
    /// Delegates to the inner translation, or returns `message` verbatim when `None`.
    #[inline]
    fn translate<'a>(&self, message: &'a str) -> Cow<'a, str> {
        match self {
            Some(translate) => translate.translate(message),
            None => Cow::Borrowed(message),
        }
    }
}
