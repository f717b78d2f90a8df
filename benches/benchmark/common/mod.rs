use criterion::Criterion;
use std::sync::OnceLock;
use std::time::Duration;
use validation_result::ValidationResult;

// ============================================================================
// Test Data
// ============================================================================

/// A result shaped like a full printer/filament/print profile check.
pub fn realistic_result() -> &'static ValidationResult {
    static INSTANCE: OnceLock<ValidationResult> = OnceLock::new();
    INSTANCE.get_or_init(|| sized_result(12, 30))
}

pub fn sized_result(errors: usize, warnings: usize) -> ValidationResult {
    let mut result = ValidationResult::new();
    for i in 0..errors {
        result.add_error(format!("error_parameter_out_of_range_{i}"));
    }
    for i in 0..warnings {
        result.add_warning(format!("warning_setting_may_degrade_quality_{i}"));
    }
    result
}

pub fn translate(message: &str) -> String {
    format!("Übersetzt: {message}")
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
