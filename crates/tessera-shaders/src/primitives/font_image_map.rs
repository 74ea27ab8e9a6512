//! Glyph quads sampled from a single-channel font atlas.

use crate::bundle::InjectionBundle;
use crate::config::GeneratorConfig;
use crate::preamble::{FragmentConstants, VertexConstants};
use crate::primitive::PrimitiveKind;

use super::common::{self, FragmentBody, VertexBody, PREMULTIPLIED_FILL};

const KIND: PrimitiveKind = PrimitiveKind::FontImageMap;

/// `a_position.z` carries the glyph index.
const GLYPH_INDEX: &str = "int(a_position.z)";

const VERTEX_SETUP: &[&str] = &[
    "vec3 decodedPosition = vec3(a_position.xy, 0.0);",
    "v_instance = c_instance;",
    "vec3 x_normal = vec3(0.0, 0.0, 1.0);",
    "vec3 x_position = decodedPosition;",
];

const FRAGMENT_SETUP: &[&str] = &[
    "float imageMap = texture(image, va_texCoord0).r;",
    "vec4 x_fill = vec4(u_fill.rgb, u_fill.a * imageMap);",
    "vec4 x_stroke = u_stroke;",
];

pub fn vertex_shader(config: &GeneratorConfig, bundle: &InjectionBundle) -> String {
    common::vertex_shader(
        config,
        KIND,
        bundle,
        &VertexBody {
            constants: VertexConstants::default().with_instance(GLYPH_INDEX),
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
            constants: FragmentConstants::default()
                .with_instance("0")
                .with_element("v_instance")
                .with_bounds_position("vec3(va_bounds.xy, 0.0)")
                .with_bounds_size("vec3(va_bounds.zw, 0.0)"),
            helpers: &[],
            setup: FRAGMENT_SETUP,
            composite: PREMULTIPLIED_FILL,
        },
    )
}
