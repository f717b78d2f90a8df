use validation_result::convert::{result_to_validation, validation_to_result};
use validation_result::{MessageSet, ValidationResult};

#[test]
fn result_without_errors_converts_to_ok_warnings() {
    let result = ValidationResult::from_warnings(["w1", "w2"]);
    let warnings = validation_to_result(result).unwrap();

    let expected: MessageSet = ["w1", "w2"].iter().map(|m| m.to_string()).collect();
    assert_eq!(warnings, expected);
}

#[test]
fn empty_result_converts_to_ok() {
    assert!(ValidationResult::new().into_result().unwrap().is_empty());
}

#[test]
fn errors_convert_to_err_with_full_result() {
    let result = ValidationResult::new().with_error("e").with_warning("w");
    let err = result.clone().into_result().unwrap_err();

    assert_eq!(err, result);
}

#[test]
fn from_impls_match_helpers() {
    let converted: Result<MessageSet, ValidationResult> = ValidationResult::new().with_error("e").into();
    assert!(converted.is_err());

    let from_err: ValidationResult = Err::<(), _>("bad_param").into();
    assert_eq!(from_err.errors_concatenated(), "bad_param");

    let from_ok: ValidationResult = Ok::<_, String>(42).into();
    assert!(from_ok.is_empty());
}

#[test]
fn result_to_validation_records_error_message() {
    let result = result_to_validation(Err::<u8, _>(String::from("nozzle_too_small")));
    assert!(result.has_errors());
    assert!(!result.has_warnings());
}

#[test]
fn question_mark_propagates_blocking_result() {
    fn slice(config: ValidationResult) -> Result<usize, ValidationResult> {
        let warnings = config.into_result()?;
        Ok(warnings.len())
    }

    assert_eq!(slice(ValidationResult::from_warnings(["w"])), Ok(1));
    assert!(slice(ValidationResult::from_errors(["e"])).is_err());
}
