//! Registry Tests - Serialization of value types

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::helpers::registry_fixtures::mini_gl;

#[test]
fn test_enum_serializes_with_type_key() {
    let spec = mini_gl();
    let depth = &spec.enums().unwrap()["GL_DEPTH_BUFFER_BIT"];
    let json = serde_json::to_value(depth.as_ref()).unwrap();
    assert_eq!(json["name"], "GL_DEPTH_BUFFER_BIT");
    assert_eq!(json["type"], "bitmask");
    assert_eq!(json["value"], "0x00000100");
}

#[test]
fn test_command_serializes_signature() {
    let spec = mini_gl();
    let cmd = &spec.commands().unwrap()["glGetString"];
    let json = serde_json::to_value(cmd.as_ref()).unwrap();
    assert_eq!(json["proto"]["name"], "glGetString");
    assert_eq!(json["proto"]["ret"]["pointer"], 1);
    assert_eq!(json["params"][0]["type"]["name"], "GLenum");
}
