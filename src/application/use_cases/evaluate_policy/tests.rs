use super::*;
use crate::policy_engine::domain::{LicenseClaim, RiskCounts, Severity};
use crate::shared::error::ClearbomError;
use std::cell::RefCell;
use std::path::Path;

// Mock implementations for testing
struct MockSbomReader {
    components: Vec<Component>,
}

impl SbomReader for MockSbomReader {
    fn read_sbom(&self, _sbom_path: &Path) -> Result<Vec<Component>> {
        Ok(self.components.clone())
    }
}

struct FailingSbomReader;

impl SbomReader for FailingSbomReader {
    fn read_sbom(&self, sbom_path: &Path) -> Result<Vec<Component>> {
        Err(ClearbomError::SbomNotFound {
            path: sbom_path.to_path_buf(),
            suggestion: "generate one".to_string(),
        }
        .into())
    }
}

struct MockPolicyReader {
    yaml: Option<&'static str>,
}

impl PolicyReader for MockPolicyReader {
    fn load_policy(&self, policy_path: &Path) -> Result<Option<Policy>> {
        self.yaml
            .map(|yaml| {
                Policy::from_yaml_str(yaml).map_err(|e| e.with_path(policy_path.to_path_buf()))
            })
            .transpose()
            .map_err(Into::into)
    }
}

#[derive(Default)]
struct MockProgressReporter {
    infos: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }
    fn report_warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
    fn report_error(&self, _message: &str) {}
    fn report_success(&self, _message: &str) {}
}

fn component(name: &str, license: Option<&str>) -> Component {
    Component::new(
        name.to_string(),
        Some("1.0.0".to_string()),
        license.map(LicenseClaim::id).into_iter().collect(),
    )
}

fn sample_components() -> Vec<Component> {
    vec![
        component("left-pad", Some("MIT")),
        component("gpl-lib", Some("GPL-3.0")),
        component("lgpl-lib", Some("LGPL-3.0")),
        component("mystery", None),
    ]
}

fn use_case(
    components: Vec<Component>,
    policy_yaml: Option<&'static str>,
) -> EvaluatePolicyUseCase<MockSbomReader, MockPolicyReader, MockProgressReporter> {
    EvaluatePolicyUseCase::new(
        MockSbomReader { components },
        MockPolicyReader { yaml: policy_yaml },
        MockProgressReporter::default(),
    )
}

fn request() -> ScanRequest {
    ScanRequest::builder()
        .sbom_path("sbom.json")
        .policy_path(".clearbom.yml")
        .build()
        .unwrap()
}

#[test]
fn test_execute_with_policy() {
    let use_case = use_case(
        sample_components(),
        Some("version: 1\nlicenses:\n  warn: [LGPL-3.0]\n  deny: [GPL-3.0]\n  unknown_action: deny\n"),
    );

    let response = use_case.execute(request()).unwrap();

    assert!(response.policy_applied);
    assert!(response.has_blocking_violations());
    assert_eq!(response.excluded_count, 0);

    let summary = &response.summary;
    assert_eq!(summary.components, 4);
    assert_eq!(summary.licenses.permissive, 1);
    assert_eq!(summary.licenses.copyleft, 2);
    assert_eq!(summary.licenses.unknown, 1);
    assert_eq!(
        summary.risk,
        RiskCounts {
            red: 2,
            yellow: 1,
            green: 1
        }
    );

    let components: Vec<&str> = summary
        .violations
        .iter()
        .map(|v| v.component.as_str())
        .collect();
    assert_eq!(
        components,
        vec!["gpl-lib@1.0.0", "lgpl-lib@1.0.0", "mystery@1.0.0"]
    );
}

#[test]
fn test_execute_without_policy_file() {
    let use_case = use_case(sample_components(), None);

    let response = use_case.execute(request()).unwrap();

    assert!(!response.policy_applied);
    assert!(!response.has_blocking_violations());
    assert!(response.summary.violations.is_empty());
    assert_eq!(response.summary.risk.green, 4);
    assert_eq!(response.summary.licenses.total(), 4);
    assert!(use_case
        .progress_reporter
        .infos
        .borrow()
        .iter()
        .any(|m| m.contains("No policy file found")));
}

#[test]
fn test_execute_warnings_only_is_not_blocking() {
    let use_case = use_case(
        sample_components(),
        Some("licenses:\n  warn: [LGPL-3.0, GPL-3.0]\n  unknown_action: allow\n"),
    );

    let response = use_case.execute(request()).unwrap();

    assert!(!response.has_blocking_violations());
    assert_eq!(response.summary.warning_count(), 2);
    assert_eq!(response.summary.risk.yellow, 2);
}

#[test]
fn test_execute_propagates_sbom_errors() {
    let use_case = EvaluatePolicyUseCase::new(
        FailingSbomReader,
        MockPolicyReader { yaml: None },
        MockProgressReporter::default(),
    );

    let err = use_case.execute(request()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ClearbomError>(),
        Some(ClearbomError::SbomNotFound { .. })
    ));
}

#[test]
fn test_execute_propagates_invalid_policy() {
    let use_case = use_case(sample_components(), Some("licenses:\n  deny: GPL-3.0\n"));

    let err = use_case.execute(request()).unwrap_err();

    match err.downcast_ref::<ClearbomError>() {
        Some(ClearbomError::InvalidPolicy { path, .. }) => {
            assert_eq!(path, Path::new(".clearbom.yml"))
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_execute_warns_about_unknown_policy_fields() {
    let use_case = use_case(
        sample_components(),
        Some("owner: platform-team\nlicenses:\n  deny: [GPL-3.0]\n"),
    );

    use_case.execute(request()).unwrap();

    assert_eq!(
        *use_case.progress_reporter.warnings.borrow(),
        vec!["Unknown policy field 'owner' will be ignored.".to_string()]
    );
}

#[test]
fn test_execute_warns_about_unknown_nested_policy_fields() {
    let use_case = use_case(
        sample_components(),
        Some("version: 2\nlicenses:\n  deny: [GPL-3.0]\n  reveiw: [LGPL-3.0]\n"),
    );

    let response = use_case.execute(request()).unwrap();

    assert!(response.policy_applied);
    assert!(response.has_blocking_violations());
    assert_eq!(
        *use_case.progress_reporter.warnings.borrow(),
        vec!["Unknown policy field 'licenses.reveiw' will be ignored.".to_string()]
    );
}

#[test]
fn test_execute_exclude_pattern_with_spaces() {
    let components = vec![
        component("Microsoft Visual C++ 2019 Redistributable", None),
        component("left-pad", Some("MIT")),
    ];
    let use_case = use_case(
        components,
        Some("licenses:\n  unknown_action: deny\ncomponents:\n  exclude: [\"Microsoft Visual C++*\"]\n"),
    );

    let response = use_case.execute(request()).unwrap();

    assert_eq!(response.excluded_count, 1);
    assert_eq!(response.summary.components, 1);
    assert!(!response.has_blocking_violations());
}

#[test]
fn test_execute_excluded_components_are_not_evaluated_or_counted() {
    let use_case = use_case(
        sample_components(),
        Some("licenses:\n  deny: [GPL-3.0]\ncomponents:\n  exclude: [\"gpl-*\"]\n"),
    );

    let response = use_case.execute(request()).unwrap();

    assert_eq!(response.excluded_count, 1);
    assert_eq!(response.summary.components, 3);
    assert_eq!(response.summary.licenses.copyleft, 1);
    assert!(response
        .summary
        .violations
        .iter()
        .all(|v| v.component != "gpl-lib@1.0.0"));
    assert!(!response.has_blocking_violations());
}

// ===== Tests for extracted methods =====

#[test]
fn test_apply_exclusion_filters_without_patterns() {
    let use_case = use_case(vec![], None);

    let (kept, excluded) =
        use_case.apply_exclusion_filters(sample_components(), &Policy::unrestricted());

    assert_eq!(kept.len(), 4);
    assert_eq!(excluded, 0);
    assert!(use_case.progress_reporter.warnings.borrow().is_empty());
}

#[test]
fn test_apply_exclusion_filters_reports_unmatched_patterns() {
    let use_case = use_case(vec![], None);
    let policy =
        Policy::from_yaml_str("components:\n  exclude: [left-pad, \"nothing-*\"]\n").unwrap();

    let (kept, excluded) = use_case.apply_exclusion_filters(sample_components(), &policy);

    assert_eq!(excluded, 1);
    assert!(!kept.iter().any(|c| c.name() == "left-pad"));
    assert_eq!(
        *use_case.progress_reporter.warnings.borrow(),
        vec!["Exclude pattern 'nothing-*' did not match any component.".to_string()]
    );
}

#[test]
fn test_load_policy_absent_is_unrestricted() {
    let use_case = use_case(vec![], None);

    let (policy, applied) = use_case.load_policy(&request()).unwrap();

    assert!(!applied);
    assert_eq!(policy, Policy::unrestricted());
}

#[test]
fn test_violation_severity_reaches_response() {
    let use_case = use_case(
        vec![component("gpl-lib", Some("GPL-3.0"))],
        Some("licenses:\n  deny: [GPL-3.0]\n"),
    );

    let response = use_case.execute(request()).unwrap();

    assert_eq!(response.summary.violations[0].severity, Severity::Error);
}
