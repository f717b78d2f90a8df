use crate::traits::{Translate, TryTranslate, Untranslated};
use crate::types::alloc_type::String;
use crate::types::render_config::{concatenate, join_sections, try_concatenate, RenderConfig};
use crate::types::MessageSet;
use core::fmt;
use core::ops::AddAssign;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors and warnings that result from validating a configuration.
///
/// Both collections are sets: inserting a message that is already present has
/// no effect, and iteration order is unspecified. Messages are expected to be
/// pre-translation identifiers which are run through a [`Translate`]
/// implementation when rendered.
///
/// # Serde Support
///
/// With the `serde` feature, a result serializes as
/// `{"errors": [...], "warnings": [...]}`. Missing fields deserialize as empty.
///
/// # Examples
///
/// ```
/// use validation_result::ValidationResult;
///
/// let mut result = ValidationResult::new();
/// result.add_error("bad_param");
/// result.add_error("bad_param");
/// result.add_warning("slow_print");
///
/// assert_eq!(result.error_count(), 1);
/// assert_eq!(result.errors_and_warnings_concatenated(), "bad_param\n\nslow_print");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationResult {
    /// Error message strings.
    ///
    /// Expected to be pre-translation strings that are run through translation later.
    pub errors: MessageSet,

    /// Warning message strings.
    ///
    /// Expected to be pre-translation strings that are run through translation later.
    pub warnings: MessageSet,
}

impl ValidationResult {
    /// Creates a result with no errors and no warnings.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a result from already collected message sets.
    #[must_use]
    #[inline]
    pub fn from_parts(errors: MessageSet, warnings: MessageSet) -> Self {
        Self { errors, warnings }
    }

    /// Creates a result holding only errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_result::ValidationResult;
    ///
    /// let result = ValidationResult::from_errors(["a", "b", "a"]);
    /// assert_eq!(result.error_count(), 2);
    /// assert!(!result.has_warnings());
    /// ```
    #[must_use]
    pub fn from_errors<I>(errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self { errors: errors.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    /// Creates a result holding only warnings.
    #[must_use]
    pub fn from_warnings<I>(warnings: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self { warnings: warnings.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    /// Splits the result into its `(errors, warnings)` sets.
    #[must_use]
    #[inline]
    pub fn into_parts(self) -> (MessageSet, MessageSet) {
        (self.errors, self.warnings)
    }

    /// Records an error. Returns `false` if the same message was already present.
    #[inline]
    pub fn add_error(&mut self, message: impl Into<String>) -> bool {
        self.errors.insert(message.into())
    }

    /// Records a warning. Returns `false` if the same message was already present.
    #[inline]
    pub fn add_warning(&mut self, message: impl Into<String>) -> bool {
        self.warnings.insert(message.into())
    }

    /// Builder-style variant of [`add_error`](Self::add_error).
    #[must_use]
    #[inline]
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.add_error(message);
        self
    }

    /// Builder-style variant of [`add_warning`](Self::add_warning).
    #[must_use]
    #[inline]
    pub fn with_warning(mut self, message: impl Into<String>) -> Self {
        self.add_warning(message);
        self
    }

    /// Returns `true` if there are neither errors nor warnings.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_result::ValidationResult;
    ///
    /// assert!(ValidationResult::new().is_empty());
    /// assert!(!ValidationResult::new().with_warning("w").is_empty());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    #[inline]
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Iterates over the error messages in unspecified order.
    #[inline]
    pub fn iter_errors(&self) -> impl Iterator<Item = &str> + '_ {
        self.errors.iter().map(String::as_str)
    }

    /// Iterates over the warning messages in unspecified order.
    #[inline]
    pub fn iter_warnings(&self) -> impl Iterator<Item = &str> + '_ {
        self.warnings.iter().map(String::as_str)
    }

    /// Removes all errors and warnings.
    #[inline]
    pub fn clear(&mut self) {
        self.errors.clear();
        self.warnings.clear();
    }

    /// Moves every message of `other` into `self`.
    ///
    /// Errors are merged into errors and warnings into warnings. Messages present
    /// in both results are kept once.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_result::ValidationResult;
    ///
    /// let mut printer = ValidationResult::from_errors(["bed_size", "nozzle"]);
    /// let filament = ValidationResult::from_errors(["nozzle"]).with_warning("cooling");
    ///
    /// printer.append(filament);
    /// assert_eq!(printer.error_count(), 2);
    /// assert_eq!(printer.warning_count(), 1);
    /// ```
    pub fn append(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Drains `other` into `self`, leaving `other` empty.
    pub fn append_from(&mut self, other: &mut ValidationResult) {
        self.append(core::mem::take(other));
    }

    /// Returns all errors separated by newlines, untranslated.
    #[must_use]
    pub fn errors_concatenated(&self) -> String {
        self.errors_concatenated_with(&Untranslated)
    }

    /// Returns all errors separated by newlines, each one passed through `translate`.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_result::ValidationResult;
    ///
    /// let result = ValidationResult::from_errors(["bad_param"]);
    /// assert_eq!(result.errors_concatenated_with(&|m: &str| m.to_uppercase()), "BAD_PARAM");
    /// ```
    #[must_use]
    pub fn errors_concatenated_with<T>(&self, translate: &T) -> String
    where
        T: Translate + ?Sized,
    {
        concatenate(&self.errors, "\n", translate)
    }

    /// Returns all warnings separated by newlines, untranslated.
    #[must_use]
    pub fn warnings_concatenated(&self) -> String {
        self.warnings_concatenated_with(&Untranslated)
    }

    /// Returns all warnings separated by newlines, each one passed through `translate`.
    #[must_use]
    pub fn warnings_concatenated_with<T>(&self, translate: &T) -> String
    where
        T: Translate + ?Sized,
    {
        concatenate(&self.warnings, "\n", translate)
    }

    /// Returns errors first, then warnings, untranslated.
    ///
    /// A blank line separates the two blocks only when both are non-empty.
    #[must_use]
    pub fn errors_and_warnings_concatenated(&self) -> String {
        self.errors_and_warnings_concatenated_with(&Untranslated)
    }

    /// Returns errors first, then warnings, each message passed through `translate`.
    #[must_use]
    pub fn errors_and_warnings_concatenated_with<T>(&self, translate: &T) -> String
    where
        T: Translate + ?Sized,
    {
        self.render(&RenderConfig::default(), translate)
    }

    /// Renders errors then warnings using the separators from `config`.
    #[must_use]
    pub fn render<T>(&self, config: &RenderConfig, translate: &T) -> String
    where
        T: Translate + ?Sized,
    {
        let errors = concatenate(&self.errors, &config.separator, translate);
        let warnings = concatenate(&self.warnings, &config.separator, translate);
        join_sections(errors, &warnings, self.has_both(), &config.section_separator)
    }

    /// Like [`errors_concatenated_with`](Self::errors_concatenated_with), but stops at
    /// the first translation failure and returns it.
    pub fn try_errors_concatenated_with<T>(&self, translate: &mut T) -> Result<String, T::Error>
    where
        T: TryTranslate + ?Sized,
    {
        try_concatenate(&self.errors, "\n", translate)
    }

    /// Like [`warnings_concatenated_with`](Self::warnings_concatenated_with), but stops
    /// at the first translation failure and returns it.
    pub fn try_warnings_concatenated_with<T>(&self, translate: &mut T) -> Result<String, T::Error>
    where
        T: TryTranslate + ?Sized,
    {
        try_concatenate(&self.warnings, "\n", translate)
    }

    /// Fallible variant of
    /// [`errors_and_warnings_concatenated_with`](Self::errors_and_warnings_concatenated_with).
    pub fn try_errors_and_warnings_concatenated_with<T>(
        &self,
        translate: &mut T,
    ) -> Result<String, T::Error>
    where
        T: TryTranslate + ?Sized,
    {
        self.try_render(&RenderConfig::default(), translate)
    }

    /// Fallible variant of [`render`](Self::render).
    pub fn try_render<T>(&self, config: &RenderConfig, translate: &mut T) -> Result<String, T::Error>
    where
        T: TryTranslate + ?Sized,
    {
        let errors = try_concatenate(&self.errors, &config.separator, translate)?;
        let warnings = try_concatenate(&self.warnings, &config.separator, translate)?;
        Ok(join_sections(errors, &warnings, self.has_both(), &config.section_separator))
    }

    #[inline]
    fn has_both(&self) -> bool {
        self.has_errors() && self.has_warnings()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.errors_and_warnings_concatenated())
    }
}

impl AddAssign for ValidationResult {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.append(other);
    }
}

impl Extend<ValidationResult> for ValidationResult {
    fn extend<I: IntoIterator<Item = ValidationResult>>(&mut self, iter: I) {
        for other in iter {
            self.append(other);
        }
    }
}

impl FromIterator<ValidationResult> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        let mut merged = Self::new();
        merged.extend(iter);
        merged
    }
}
