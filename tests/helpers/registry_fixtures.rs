//! Registry documents used across the integration suites.

use glspec::SpecModel;

/// A trimmed-down `gl.xml` covering every container the model reads.
pub const MINI_GL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<registry>
    <comment>
Copyright 2013-2020 The Khronos Group Inc.
    </comment>

    <types>
        <type>#include &lt;KHR/khrplatform.h&gt;</type>
        <type>typedef unsigned int <name>GLenum</name>;</type>
        <type>typedef unsigned int <name>GLuint</name>;</type>
    </types>

    <groups>
        <group name="Boolean">
            <enum name="GL_FALSE"/>
            <enum name="GL_TRUE"/>
        </group>
        <group name="StringName">
            <enum name="GL_VENDOR"/>
            <enum name="GL_EXTENSIONS"/>
        </group>
    </groups>

    <enums namespace="GL" group="Boolean" vendor="ARB">
        <enum value="0" name="GL_FALSE"/>
        <enum value="1" name="GL_TRUE"/>
    </enums>

    <enums namespace="GL" start="0x1F00" end="0x1F03" vendor="ARB" comment="String names">
        <enum value="0x1F00" name="GL_VENDOR"/>
        <enum value="0x1F03" name="GL_EXTENSIONS"/>
        <unused start="0x1F04" end="0x1F0F"/>
    </enums>

    <enums namespace="GL" type="bitmask" group="AttribMask">
        <enum value="0x00000100" name="GL_DEPTH_BUFFER_BIT"/>
        <enum value="0x00000001" name="GL_CURRENT_BIT"/>
        <enum value="0x1" name="GL_FOO"/>
    </enums>

    <commands namespace="GL">
        <command>
            <proto>void <name>glBegin</name></proto>
            <param group="PrimitiveType"><ptype>GLenum</ptype> <name>mode</name></param>
        </command>
        <command>
            <proto>void <name>glEnd</name></proto>
        </command>
        <command>
            <proto>const <ptype>GLubyte</ptype> *<name>glGetString</name></proto>
            <param group="StringName"><ptype>GLenum</ptype> <name>name</name></param>
        </command>
        <command>
            <proto>void <name>glMultiDrawElements</name></proto>
            <param group="PrimitiveType"><ptype>GLenum</ptype> <name>mode</name></param>
            <param len="drawcount">const <ptype>GLsizei</ptype> *<name>count</name></param>
            <param group="DrawElementsType"><ptype>GLenum</ptype> <name>type</name></param>
            <param len="drawcount">const void *const*<name>indices</name></param>
            <param><ptype>GLsizei</ptype> <name>drawcount</name></param>
        </command>
        <command>
            <proto>void <name>glFoo</name></proto>
        </command>
    </commands>

    <feature api="gl" name="GL_VERSION_1_0" number="1.0">
        <require>
            <type name="GLenum"/>
            <enum name="GL_FALSE"/>
            <enum name="GL_TRUE"/>
            <enum name="GL_CURRENT_BIT"/>
            <command name="glBegin"/>
            <command name="glEnd"/>
            <command name="glGetString"/>
            <command name="glFoo"/>
        </require>
    </feature>
    <feature api="gles2" name="GL_ES_VERSION_2_0" number="2.0">
        <require>
            <enum name="GL_FALSE"/>
            <command name="glGetString"/>
        </require>
    </feature>
    <feature api="gl" name="GL_VERSION_1_4" number="1.4">
        <require>
            <command name="glMultiDrawElements"/>
            <command name="glDoesNotExist"/>
        </require>
    </feature>
    <feature api="gl" name="GL_VERSION_3_2" number="3.2">
        <require>
            <enum name="GL_DEPTH_BUFFER_BIT"/>
        </require>
        <remove profile="core" comment="Compatibility-only GL 1.0 features removed from GL 3.2">
            <command name="glBegin"/>
            <command name="glEnd"/>
            <enum name="GL_CURRENT_BIT"/>
        </remove>
    </feature>
    <feature api="gl" name="GL_VERSION_2_0" number="2.0">
        <remove>
            <command name="glFoo"/>
        </remove>
    </feature>

    <extensions>
        <extension name="GL_ARB_multi_draw" supported="gl|glcore">
            <require>
                <command name="glMultiDrawElements"/>
                <enum name="GL_DEPTH_BUFFER_BIT"/>
            </require>
        </extension>
        <extension name="GL_EXT_phantom" supported="gles2">
            <require>
                <command name="glPhantomEXT"/>
                <enum name="GL_PHANTOM_EXT"/>
            </require>
        </extension>
    </extensions>
</registry>
"#;

/// Load [`MINI_GL`] into a fresh model.
pub fn mini_gl() -> SpecModel {
    SpecModel::parse(MINI_GL).expect("fixture registry should parse")
}
