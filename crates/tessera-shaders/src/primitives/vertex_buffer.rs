//! Arbitrary vertex buffers drawn with a flat fill.

use crate::bundle::InjectionBundle;
use crate::config::GeneratorConfig;
use crate::preamble::{FragmentConstants, VertexConstants};
use crate::primitive::PrimitiveKind;

use super::common::{self, FragmentBody, VertexBody, PREMULTIPLIED_FILL, STYLE_SETUP};

const KIND: PrimitiveKind = PrimitiveKind::VertexBuffer;

/// Buffers without normals get a zero normal.
const SETUP: &[&str] = &[
    "v_instance = c_instance;",
    "vec3 x_normal = vec3(0.0, 0.0, 0.0);",
    "vec3 x_position = a_position;",
];

const SETUP_WITH_NORMAL: &[&str] = &[
    "v_instance = c_instance;",
    "vec3 x_normal = a_normal;",
    "vec3 x_position = a_position;",
];

pub fn vertex_shader(config: &GeneratorConfig, bundle: &InjectionBundle) -> String {
    let setup = if bundle.declares_attribute("vec3 a_normal;") { SETUP_WITH_NORMAL } else { SETUP };
    common::vertex_shader(
        config,
        KIND,
        bundle,
        &VertexBody { constants: VertexConstants::default(), setup, after_transform: &[] },
    )
}

pub fn fragment_shader(config: &GeneratorConfig, bundle: &InjectionBundle) -> String {
    common::fragment_shader(
        config,
        KIND,
        bundle,
        &FragmentBody {
            constants: FragmentConstants::default().with_element("v_instance"),
            helpers: &[],
            setup: STYLE_SETUP,
            composite: PREMULTIPLIED_FILL,
        },
    )
}
