//! Conversion helpers between `ValidationResult` and `Result`.
//!
//! Errors block proceeding, warnings do not. These adapters let callers use `?`
//! at the boundary where a validation outcome decides whether to continue.
//!
//! # Examples
//!
//! ```
//! use validation_result::convert::*;
//! use validation_result::ValidationResult;
//!
//! let only_warnings = ValidationResult::from_warnings(["fan_speed_low"]);
//! let warnings = validation_to_result(only_warnings).unwrap();
//! assert_eq!(warnings.len(), 1);
//!
//! let failed = result_to_validation(Err::<(), _>("nozzle_too_small"));
//! assert!(failed.has_errors());
//! ```

use crate::types::alloc_type::String;
use crate::types::{MessageSet, ValidationResult};

/// Converts a `ValidationResult` into a `Result`.
///
/// # Returns
///
/// * `Ok(warnings)` if there are no errors
/// * `Err(result)` with the full result, warnings included, otherwise
#[inline]
pub fn validation_to_result(result: ValidationResult) -> Result<MessageSet, ValidationResult> {
    if result.has_errors() {
        Err(result)
    } else {
        Ok(result.warnings)
    }
}

/// Converts a `Result` into a `ValidationResult`.
///
/// # Returns
///
/// * An empty result if `result` is `Ok`
/// * A result holding the error's message as its only error if `result` is `Err`
#[inline]
pub fn result_to_validation<T, E>(result: Result<T, E>) -> ValidationResult
where
    E: Into<String>,
{
    match result {
        Ok(_) => ValidationResult::new(),
        Err(error) => ValidationResult::new().with_error(error),
    }
}

impl ValidationResult {
    /// Returns `Ok(warnings)` when there are no errors, or `Err(self)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_result::ValidationResult;
    ///
    /// fn slice(config: ValidationResult) -> Result<usize, ValidationResult> {
    ///     let warnings = config.into_result()?;
    ///     Ok(warnings.len())
    /// }
    ///
    /// assert_eq!(slice(ValidationResult::new().with_warning("w")), Ok(1));
    /// assert!(slice(ValidationResult::new().with_error("e")).is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<MessageSet, ValidationResult> {
        validation_to_result(self)
    }
}

impl From<ValidationResult> for Result<MessageSet, ValidationResult> {
    #[inline]
    fn from(result: ValidationResult) -> Self {
        validation_to_result(result)
    }
}

impl<T, E> From<Result<T, E>> for ValidationResult
where
    E: Into<String>,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result_to_validation(result)
    }
}
