//! Instanced discs with an antialiased stroke ring.

use crate::bundle::InjectionBundle;
use crate::config::GeneratorConfig;
use crate::preamble::{FragmentConstants, VertexConstants};
use crate::primitive::PrimitiveKind;

use super::common::{self, FragmentBody, VertexBody};

const KIND: PrimitiveKind = PrimitiveKind::Circle;

const VERTEX_SETUP: &[&str] = &[
    "v_instance = c_instance;",
    "v_boundsSize = vec3(i_radius, i_radius, 0.0);",
    "vec3 x_normal = a_normal;",
    "vec3 x_position = a_position * i_radius + i_offset;",
];

const AFTER_TRANSFORM: &[&str] = &["va_position = x_position;"];

const FRAGMENT_SETUP: &[&str] = &[
    "float smoothFactor = 3.0;",
    "vec4 x_fill = u_fill;",
    "vec4 x_stroke = u_stroke;",
];

// `d` is the normalized radial distance (1.0 on the rim). The outer mask
// fades over `smoothFactor` screen pixels at the rim; the inner mask does the
// same at the stroke inset `u_strokeWeight / vi_radius`. The ring between
// them carries the stroke, the inner disc carries the fill.
const COMPOSITE: &[&str] = &[
    "float wd = fwidth(length(va_texCoord0 - vec2(0.0)));",
    "float d = length(va_texCoord0 - vec2(0.5)) * 2.0;",
    "",
    "float outer = smoothstep(0.0, wd * smoothFactor, 1.0 - d);",
    "float inset = u_strokeWeight / vi_radius;",
    "float inner = smoothstep(0.0, wd * smoothFactor, 1.0 - inset - d);",
    "",
    "o_color.rgb = x_stroke.rgb;",
    "o_color.a = outer * (1.0 - inner) * x_stroke.a;",
    "o_color.rgb *= o_color.a;",
    "",
    "o_color.rgb += x_fill.rgb * inner * x_fill.a;",
    "o_color.a += inner * x_fill.a;",
];

pub fn vertex_shader(config: &GeneratorConfig, bundle: &InjectionBundle) -> String {
    common::vertex_shader(
        config,
        KIND,
        bundle,
        &VertexBody {
            constants: VertexConstants::default(),
            setup: VERTEX_SETUP,
            after_transform: AFTER_TRANSFORM,
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
            setup: FRAGMENT_SETUP,
            composite: COMPOSITE,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_scales_by_radius() {
        let vs = vertex_shader(&GeneratorConfig::default(), &InjectionBundle::new());
        assert!(vs.contains("vec3 x_position = a_position * i_radius + i_offset;"));
        assert!(vs.contains("out vec3 v_boundsSize;"));
    }

    #[test]
    fn local_position_exported_after_caller_transform() {
        let bundle = InjectionBundle::new().with_vertex_transform("x_position.x += 1.0;");
        let vs = vertex_shader(&GeneratorConfig::default(), &bundle);
        let injected = vs.find("x_position.x += 1.0;").unwrap();
        let export = vs.find("va_position = x_position;").unwrap();
        let post = vs.find("v_worldNormal = ").unwrap();
        assert!(injected < export && export < post);
    }

    #[test]
    fn fragment_uses_derivative_antialiasing() {
        let fs = fragment_shader(&GeneratorConfig::default(), &InjectionBundle::new());
        assert!(fs.contains("fwidth("));
        assert!(fs.contains("float inset = u_strokeWeight / vi_radius;"));
        assert!(fs.contains("o_color.a += inner * x_fill.a;"));
        assert!(fs.contains("vec3 c_boundsSize = v_boundsSize;"));
    }
}
