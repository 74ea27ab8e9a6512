//! Instanced axis-aligned boxes with an antialiased inner stroke.

use crate::bundle::InjectionBundle;
use crate::config::GeneratorConfig;
use crate::preamble::{FragmentConstants, VertexConstants};
use crate::primitive::PrimitiveKind;

use super::common::{self, FragmentBody, VertexBody, STYLE_SETUP};

const KIND: PrimitiveKind = PrimitiveKind::Rectangle;

const VERTEX_SETUP: &[&str] = &[
    "v_instance = c_instance;",
    "vec3 x_normal = vec3(0.0, 0.0, 1.0);",
    "vec3 x_position = a_position * vec3(i_dimensions, 1.0) + i_offset;",
    "v_boundsSize = vec3(i_dimensions, 1.0);",
];

// Each axis is softened independently over 2.5 screen pixels at the stroke
// inset; the product of both is the fill region. The stroke covers the
// complement and is blended over the premultiplied fill.
const COMPOSITE: &[&str] = &[
    "vec2 wd = fwidth(va_texCoord0 - vec2(0.5));",
    "vec2 d = abs((va_texCoord0 - vec2(0.5)) * 2.0);",
    "",
    "float irx = smoothstep(0.0, wd.x * 2.5, 1.0 - d.x - u_strokeWeight * 2.0 / vi_dimensions.x);",
    "float iry = smoothstep(0.0, wd.y * 2.5, 1.0 - d.y - u_strokeWeight * 2.0 / vi_dimensions.y);",
    "float ir = irx * iry;",
    "",
    "o_color.rgb = x_fill.rgb * x_fill.a;",
    "o_color.a = x_fill.a;",
    "",
    "float sa = (1.0 - ir) * x_stroke.a;",
    "o_color.rgb = o_color.rgb * (1.0 - sa) + x_stroke.rgb * sa;",
    "o_color.a = o_color.a * (1.0 - sa) + sa;",
];

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
            constants: FragmentConstants::default()
                .with_bounds_position("vec3(va_texCoord0, 0.0)")
                .with_bounds_size("v_boundsSize"),
            helpers: &[],
            setup: STYLE_SETUP,
            composite: COMPOSITE,
        },
    )
}
