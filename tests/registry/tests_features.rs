//! Registry Tests - Features
//!
//! Version ordering and removal semantics of `<feature>` blocks.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use glspec::{Feature, Profile, RegistryError, SpecModel, Version};

use crate::helpers::registry_fixtures::mini_gl;

fn function_names(feature: &Feature, spec: &SpecModel) -> Vec<String> {
    feature
        .functions(spec.removed().unwrap())
        .map(|c| c.to_string())
        .collect()
}

fn enum_names(feature: &Feature, spec: &SpecModel) -> Vec<String> {
    feature
        .enums(spec.removed().unwrap())
        .map(|e| e.to_string())
        .collect()
}

#[test]
fn test_features_ordered_by_version() {
    let spec = mini_gl();
    let gl = spec.features().unwrap().api("gl").unwrap();
    let versions: Vec<_> = gl.keys().map(|v| v.to_string()).collect();
    assert_eq!(versions, vec!["1.0", "1.4", "2.0", "3.2"]);
}

#[test]
fn test_features_keyed_by_api() {
    let spec = mini_gl();
    let features = spec.features().unwrap();
    assert_eq!(features.apis().collect::<Vec<_>>(), vec!["gl", "gles2"]);
    let es = features.get("gles2", &Version::from([2, 0])).unwrap();
    assert_eq!(es.to_string(), "GL_ES_VERSION_2_0@2.0");
    assert_eq!(es.api, "gles2");
}

#[test]
fn test_compatibility_keeps_removed_entries() {
    let spec = mini_gl();
    let v1 = spec.features().unwrap().get("gl", &Version::from([1, 0])).unwrap();
    assert_eq!(
        function_names(v1, &spec),
        vec!["glBegin", "glEnd", "glGetString", "glFoo"]
    );
    assert!(spec.removed().unwrap().is_empty());
}

#[test]
fn test_core_removal_applies_to_earlier_features() {
    let mut spec = mini_gl();
    spec.set_profile("core").unwrap();

    let features = spec.features().unwrap();
    let v1 = features.get("gl", &Version::from([1, 0])).unwrap();
    assert_eq!(function_names(v1, &spec), vec!["glGetString"]);
    assert_eq!(enum_names(v1, &spec), vec!["GL_FALSE", "GL_TRUE"]);

    // The removing feature itself does not list the removed function.
    let v2 = features.get("gl", &Version::from([2, 0])).unwrap();
    assert!(v2.removals().iter().any(|r| r.name() == "glFoo"));
    assert_eq!(function_names(v2, &spec), Vec::<String>::new());
}

#[test]
fn test_removed_set_contents_under_core() {
    let mut spec = mini_gl();
    spec.set_profile_kind(Profile::Core);
    let mut names: Vec<_> = spec.removed().unwrap().iter().map(|r| r.name().to_string()).collect();
    names.sort();
    assert_eq!(names, vec!["GL_CURRENT_BIT", "glBegin", "glEnd", "glFoo"]);
}

#[test]
fn test_unresolved_require_is_dropped() {
    let spec = mini_gl();
    let v14 = spec.features().unwrap().get("gl", &Version::from([1, 4])).unwrap();
    assert_eq!(function_names(v14, &spec), vec!["glMultiDrawElements"]);
    assert_eq!(v14.unresolved().collect::<Vec<_>>(), vec!["glDoesNotExist"]);
}

#[test]
fn test_feature_without_number_is_fatal() {
    let spec = SpecModel::parse(
        r#"<registry><commands/><feature api="gl" name="GL_VERSION_1_0"><require/></feature></registry>"#,
    )
    .unwrap();
    assert!(matches!(
        spec.features(),
        Err(RegistryError::Missing { kind: "attribute", .. })
    ));
}

#[test]
fn test_removed_with_broken_feature_depends_on_profile() {
    let mut spec = SpecModel::parse(
        r#"<registry><commands/><feature api="gl" name="GL_VERSION_1_0"><require/></feature></registry>"#,
    )
    .unwrap();
    assert!(spec.removed().unwrap().is_empty());
    spec.set_profile_kind(Profile::Core);
    assert!(matches!(
        spec.removed(),
        Err(RegistryError::Missing { kind: "attribute", .. })
    ));
}

#[test]
fn test_removed_empty_under_compatibility_for_bare_registry() {
    let spec = SpecModel::parse("<registry/>").unwrap();
    assert_eq!(spec.profile(), Profile::Compatibility);
    assert!(spec.removed().unwrap().is_empty());
}

#[test]
fn test_feature_with_bad_number_is_invalid() {
    let spec = SpecModel::parse(
        r#"<registry><commands/><feature api="gl" name="GL_VERSION_X" number="one.0"/></registry>"#,
    )
    .unwrap();
    assert!(matches!(
        spec.features(),
        Err(RegistryError::Invalid { kind: "attribute", .. })
    ));
}
