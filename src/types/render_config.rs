//! Text rendering of message sets.

use crate::traits::{Translate, TryTranslate};
use crate::types::alloc_type::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Separators used when rendering a [`ValidationResult`](crate::ValidationResult) as text.
///
/// The default places one newline between consecutive messages and one blank
/// line between the error block and the warning block.
///
/// # Examples
///
/// ```
/// use validation_result::{RenderConfig, Untranslated, ValidationResult};
///
/// let result = ValidationResult::new()
///     .with_error("E1")
///     .with_warning("W1");
///
/// assert_eq!(result.render(&RenderConfig::default(), &Untranslated), "E1\n\nW1");
/// assert_eq!(result.render(&RenderConfig::compact(), &Untranslated), "E1 | W1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    /// Placed between two consecutive messages of the same set.
    pub separator: String,
    /// Placed between the error block and the warning block when both are non-empty.
    pub section_separator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { separator: "\n".into(), section_separator: "\n\n".into() }
    }
}

impl RenderConfig {
    /// Single-line layout, suitable for status bars and log lines.
    #[inline]
    pub fn compact() -> Self {
        Self { separator: "; ".into(), section_separator: " | ".into() }
    }

    #[inline]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[inline]
    pub fn with_section_separator(mut self, section_separator: impl Into<String>) -> Self {
        self.section_separator = section_separator.into();
        self
    }
}

/// Joins `messages` with `separator`, passing each one through `translate` first.
///
/// No separator is emitted before the first or after the last message.
pub(crate) fn concatenate<'a, I, T>(messages: I, separator: &str, translate: &T) -> String
where
    I: IntoIterator<Item = &'a String>,
    T: Translate + ?Sized,
{
    let mut output = String::new();
    for (index, message) in messages.into_iter().enumerate() {
        if index > 0 {
            output.push_str(separator);
        }
        output.push_str(&translate.translate(message));
    }
    output
}

/// Fallible counterpart of [`concatenate`]; stops at the first translation error.
pub(crate) fn try_concatenate<'a, I, T>(
    messages: I,
    separator: &str,
    translate: &mut T,
) -> Result<String, T::Error>
where
    I: IntoIterator<Item = &'a String>,
    T: TryTranslate + ?Sized,
{
    let mut output = String::new();
    for (index, message) in messages.into_iter().enumerate() {
        if index > 0 {
            output.push_str(separator);
        }
        output.push_str(&translate.try_translate(message)?);
    }
    Ok(output)
}

/// Joins two rendered blocks, inserting `section_separator` only when both are present.
pub(crate) fn join_sections(
    mut errors: String,
    warnings: &str,
    has_both: bool,
    section_separator: &str,
) -> String {
    if has_both {
        errors.push_str(section_separator);
    }
    errors.push_str(warnings);
    errors
}
