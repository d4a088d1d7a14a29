use super::*;

#[test]
fn display_names_failing_operation() {
    let err = Error::Dom { op: "querySelector", detail: "SyntaxError".into() };
    assert_eq!(err.to_string(), "dom operation `querySelector` failed: SyntaxError");
}

#[test]
fn display_storage_variants() {
    assert_eq!(Error::StorageUnavailable.to_string(), "local storage unavailable");
    let err = Error::Storage { op: "setItem", detail: "QuotaExceededError".into() };
    assert_eq!(err.to_string(), "storage operation `setItem` failed: QuotaExceededError");
}

#[test]
fn json_errors_become_config_errors() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = Error::from(parse);
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().starts_with("invalid config: "));
}
