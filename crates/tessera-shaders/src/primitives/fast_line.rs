//! Hairlines drawn with the stroke color only.

use crate::bundle::InjectionBundle;
use crate::config::GeneratorConfig;
use crate::preamble::{FragmentConstants, VertexConstants};
use crate::primitive::PrimitiveKind;

use super::common::{self, FragmentBody, VertexBody, STYLE_SETUP};

const KIND: PrimitiveKind = PrimitiveKind::FastLine;

const VERTEX_SETUP: &[&str] = &[
    "v_instance = c_instance;",
    "vec3 x_normal = vec3(0.0, 0.0, 1.0);",
    "vec3 x_position = a_position;",
];

const COMPOSITE: &[&str] = &["o_color = x_stroke;", "o_color.rgb *= o_color.a;"];

pub fn vertex_shader(config: &GeneratorConfig, bundle: &InjectionBundle) -> String {
    common::vertex_shader(
        config,
        KIND,
        bundle,
        &VertexBody {
            constants: VertexConstants::default(),
            setup: VERTEX_SETUP,
            after_transform: &[],
        },
    )
}

pub fn fragment_shader(config: &GeneratorConfig, bundle: &InjectionBundle) -> String {
    common::fragment_shader(
        config,
        KIND,
        bundle,
        &FragmentBody {
            constants: FragmentConstants::default(),
            helpers: &[],
            setup: STYLE_SETUP,
            composite: COMPOSITE,
        },
    )
}
