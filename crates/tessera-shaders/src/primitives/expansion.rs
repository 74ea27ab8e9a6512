//! Expanded path geometry (contour strokes and fills from a tessellator).

use crate::bundle::InjectionBundle;
use crate::config::GeneratorConfig;
use crate::preamble::{FragmentConstants, VertexConstants};
use crate::primitive::PrimitiveKind;

use super::common::{self, FragmentBody, VertexBody};

const KIND: PrimitiveKind = PrimitiveKind::Expansion;

const VERTEX_SETUP: &[&str] = &[
    "v_instance = 0;",
    "v_objectPosition = vec3(a_position, 0.0);",
    "v_ftcoord = a_texCoord0;",
    "vec3 x_position = vec3(a_position, 0.0);",
    "vec3 x_normal = vec3(0.0, 0.0, 1.0);",
];

/// `v_ftcoord.x` runs 0..1 across the stroke, `v_ftcoord.y` fades in along
/// its length; the cross-section falls off linearly towards both edges.
const STROKE_MASK: &[&str] = &[
    "float strokeMask() {",
    "    return min(1.0, (1.0 - abs(v_ftcoord.x * 2.0 - 1.0)) * strokeMult) * min(1.0, v_ftcoord.y);",
    "}",
];

const FRAGMENT_SETUP: &[&str] = &[
    "float strokeAlpha = strokeMask();",
    "vec4 x_stroke = u_stroke;",
    "vec4 x_fill = u_fill;",
];

const COMPOSITE: &[&str] = &[
    "vec4 color = mix(x_stroke, x_fill, strokeFillFactor) * vec4(1.0, 1.0, 1.0, strokeAlpha);",
    "if (strokeAlpha < strokeThr) {",
    "    discard;",
    "}",
    "o_color = color;",
    "o_color.rgb *= o_color.a;",
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
                .with_bounds_position("vec3(v_objectPosition.xy - bounds.xy, 0.0) / vec3(bounds.zw, 1.0)")
                .with_bounds_size("vec3(bounds.zw, 0.0)")
                .with_contour_position("va_vertexOffset"),
            helpers: STROKE_MASK,
            setup: FRAGMENT_SETUP,
            composite: COMPOSITE,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_uniforms_are_fragment_only() {
        let config = GeneratorConfig::default();
        let vs = vertex_shader(&config, &InjectionBundle::new());
        let fs = fragment_shader(&config, &InjectionBundle::new());
        for u in ["strokeMult", "strokeThr", "strokeFillFactor"] {
            assert!(fs.contains(&format!("uniform float {u};")), "{u}");
            assert!(!vs.contains(u), "{u}");
        }
    }

    #[test]
    fn discard_precedes_output() {
        let fs = fragment_shader(&GeneratorConfig::default(), &InjectionBundle::new());
        let discard = fs.find("discard;").unwrap();
        let output = fs.find("o_color = color;").unwrap();
        assert!(discard < output);
        assert!(fs.contains("if (strokeAlpha < strokeThr) {"));
    }

    #[test]
    fn mask_helper_declared_before_main() {
        let fs = fragment_shader(&GeneratorConfig::default(), &InjectionBundle::new());
        let helper = fs.find("float strokeMask() {").unwrap();
        let main = fs.find("void main(void) {").unwrap();
        assert!(helper < main);
        assert!(fs.contains("float c_contourPosition = va_vertexOffset;"));
    }

    #[test]
    fn vertex_carries_fold_coordinates() {
        let vs = vertex_shader(&GeneratorConfig::default(), &InjectionBundle::new());
        assert!(vs.contains("out vec2 v_ftcoord;"));
        assert!(vs.contains("v_ftcoord = a_texCoord0;"));
        assert!(vs.contains("v_objectPosition = vec3(a_position, 0.0);"));
    }
}
