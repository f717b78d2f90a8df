use validation_result::traits::{Translate, TryTranslate};
use validation_result::{Untranslated, ValidationResult};

#[test]
fn untranslated_returns_message_verbatim() {
    assert_eq!(Untranslated.translate("bad_param"), "bad_param");
    assert_eq!(Untranslated.try_translate("bad_param").unwrap(), "bad_param");
}

#[test]
fn closures_and_functions_translate() {
    fn localize(message: &str) -> String {
        format!("[de] {message}")
    }

    let upper = |message: &str| message.to_uppercase();
    assert_eq!(upper.translate("abc"), "ABC");
    assert_eq!(localize.translate("abc"), "[de] abc");
}

#[test]
fn none_behaves_like_identity() {
    let result = ValidationResult::from_errors(["bad_param"]);

    let none: Option<fn(&str) -> String> = None;
    let some: Option<fn(&str) -> String> = Some(str::to_uppercase);

    assert_eq!(result.errors_concatenated_with(&none), "bad_param");
    assert_eq!(result.errors_concatenated_with(&some), "BAD_PARAM");
}

#[test]
fn trait_objects_can_be_passed_to_rendering() {
    let translate: Box<dyn Translate> = Box::new(|message: &str| format!("<{message}>"));
    let result = ValidationResult::from_warnings(["w"]);

    assert_eq!(result.warnings_concatenated_with(translate.as_ref()), "<w>");
}

#[test]
fn custom_translate_impl_can_borrow_a_catalog() {
    use std::borrow::Cow;
    use std::collections::HashMap;

    struct Catalog(HashMap<&'static str, &'static str>);

    impl Translate for Catalog {
        fn translate<'a>(&self, message: &'a str) -> Cow<'a, str> {
            match self.0.get(message) {
                Some(text) => Cow::Borrowed(*text),
                None => Cow::Borrowed(message),
            }
        }
    }

    let catalog = Catalog(HashMap::from([("nozzle", "Nozzle diameter too small")]));
    let result = ValidationResult::from_errors(["nozzle"]).with_warning("unknown");

    assert_eq!(
        result.errors_and_warnings_concatenated_with(&catalog),
        "Nozzle diameter too small\n\nunknown"
    );
}

#[test]
fn fallible_closure_surfaces_its_error_type() {
    #[derive(Debug, PartialEq)]
    struct Missing(String);

    let mut strict = |message: &str| -> Result<String, Missing> { Err(Missing(message.to_string())) };
    assert_eq!(strict.try_translate("key").unwrap_err(), Missing("key".to_string()));
}
