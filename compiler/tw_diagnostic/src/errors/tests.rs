use super::*;

#[test]
fn every_code_is_documented() {
    for code in ErrorCode::ALL {
        let doc = ErrorDocs::get(*code).unwrap_or_default();
        assert!(!doc.is_empty(), "{code} has no documentation");
        assert!(
            doc.starts_with(&format!("# {code}")),
            "{code} docs should start with a `# {code}` heading"
        );
    }
}
