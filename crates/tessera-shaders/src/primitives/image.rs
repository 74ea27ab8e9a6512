//! Textured quads with a color-matrix transform.

use crate::bundle::InjectionBundle;
use crate::config::GeneratorConfig;
use crate::preamble::{FragmentConstants, VertexConstants};
use crate::primitive::PrimitiveKind;

use super::common::{self, FragmentBody, VertexBody};

const KIND: PrimitiveKind = PrimitiveKind::Image;

/// `i_target` places the quad, `i_source` selects the texture region.
/// Texture rows are flipped unless `u_flipV` is set.
const VERTEX_SETUP: &[&str] = &[
    "v_instance = c_instance;",
    "vec3 x_normal = a_normal;",
    "vec3 x_position = a_position;",
    "x_position.xy = a_position.xy * i_target.zw + i_target.xy;",
    "v_boundsPosition = vec3(a_texCoord0.xy, 1.0);",
    "va_texCoord0.xy = a_texCoord0.xy * i_source.zw + i_source.xy;",
    "if (u_flipV == 0) {",
    "    va_texCoord0.y = 1.0 - va_texCoord0.y;",
    "}",
];

/// Indexed as `matrix[input * 5 + output]` over inputs (r, g, b, a, 1).
/// Output column 4 is unused.
const COLOR_TRANSFORM: &[&str] = &[
    "vec4 colorTransform(vec4 color, float[25] matrix) {",
    "    float r = color.r * matrix[0] + color.g * matrix[5] + color.b * matrix[10] + color.a * matrix[15] + matrix[20];",
    "    float g = color.r * matrix[1] + color.g * matrix[6] + color.b * matrix[11] + color.a * matrix[16] + matrix[21];",
    "    float b = color.r * matrix[2] + color.g * matrix[7] + color.b * matrix[12] + color.a * matrix[17] + matrix[22];",
    "    float a = color.r * matrix[3] + color.g * matrix[8] + color.b * matrix[13] + color.a * matrix[18] + matrix[23];",
    "    return vec4(r, g, b, a);",
    "}",
];

const FRAGMENT_SETUP: &[&str] = &[
    "vec4 x_fill = texture(image, va_texCoord0);",
    "vec4 x_stroke = u_stroke;",
];

/// The matrix works on straight alpha: un-premultiply (guarding a == 0),
/// transform, premultiply again.
const COMPOSITE: &[&str] = &[
    "float div = x_fill.a != 0.0 ? x_fill.a : 1.0;",
    "x_fill.rgb /= div;",
    "x_fill = colorTransform(x_fill, u_colorMatrix);",
    "x_fill.rgb *= x_fill.a;",
    "o_color = x_fill;",
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
            constants: FragmentConstants::default().with_bounds_position("v_boundsPosition"),
            helpers: COLOR_TRANSFORM,
            setup: FRAGMENT_SETUP,
            composite: COMPOSITE,
        },
    )
}
