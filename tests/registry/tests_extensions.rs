//! Registry Tests - Extensions

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use glspec::SpecModel;

use crate::helpers::registry_fixtures::mini_gl;

#[test]
fn test_extension_registered_per_supported_api() {
    let spec = mini_gl();
    let extensions = spec.extensions().unwrap();
    assert_eq!(
        extensions.keys().map(|k| k.as_str()).collect::<Vec<_>>(),
        vec!["gl", "glcore", "gles2"]
    );
    let gl = &extensions["gl"]["GL_ARB_multi_draw"];
    let core = &extensions["glcore"]["GL_ARB_multi_draw"];
    assert!(Arc::ptr_eq(gl, core));
}

#[test]
fn test_extension_views_split_by_kind() {
    let spec = mini_gl();
    let ext = &spec.extensions().unwrap()["gl"]["GL_ARB_multi_draw"];
    assert_eq!(ext.functions().map(|c| c.name()).collect::<Vec<_>>(), vec!["glMultiDrawElements"]);
    assert_eq!(ext.enums().map(|e| e.name.as_str()).collect::<Vec<_>>(), vec!["GL_DEPTH_BUFFER_BIT"]);
    let table = spec.commands().unwrap();
    assert!(Arc::ptr_eq(ext.functions().next().unwrap(), &table["glMultiDrawElements"]));
}

#[test]
fn test_extension_with_unknown_names_still_builds() {
    let spec = mini_gl();
    let ext = &spec.extensions().unwrap()["gles2"]["GL_EXT_phantom"];
    assert_eq!(ext.functions().count(), 0);
    assert_eq!(ext.enums().count(), 0);
    assert_eq!(ext.unresolved(), &["glPhantomEXT", "GL_PHANTOM_EXT"]);
}

#[test]
fn test_extension_without_supported_is_fatal() {
    let spec = SpecModel::parse(
        r#"<registry><commands/><extensions><extension name="GL_EXT_x"/></extensions></registry>"#,
    )
    .unwrap();
    assert!(spec.extensions().is_err());
}
