//! Shared snippets emitted into every generated shader.
//!
//! Each function writes into a [`SourceBuilder`] at the builder's current
//! depth. None of them hold state: identical inputs always write identical
//! text.

use tessera_glsl::{SourceBuilder, StorageQualifier, Varying};

use crate::primitive::PrimitiveKind;

// ── primitive constants ───────────────────────────────────────────────────

/// Defines all seven `d_<kind>` tags and binds `d_primitive` to `active`,
/// so injected code can branch with `#if d_primitive == d_circle`.
pub fn primitive_constants(out: &mut SourceBuilder, active: PrimitiveKind) {
    for kind in PrimitiveKind::ALL {
        out.line(&format!("#define {} {}", kind.define(), kind.tag()));
    }
    out.line(&format!("#define d_primitive {}", active.tag()));
}

// ── per-invocation constants ──────────────────────────────────────────────

/// `c_instance` / `c_element` locals at the top of a vertex `main`.
///
/// Fields are GLSL expressions evaluated per invocation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VertexConstants<'a> {
    pub instance: &'a str,
    pub element: &'a str,
}

impl Default for VertexConstants<'_> {
    fn default() -> Self {
        Self { instance: "gl_InstanceID", element: "0" }
    }
}

impl<'a> VertexConstants<'a> {
    #[inline]
    pub fn with_instance(mut self, expr: &'a str) -> Self {
        self.instance = expr;
        self
    }

    #[inline]
    pub fn with_element(mut self, expr: &'a str) -> Self {
        self.element = expr;
        self
    }

    pub fn emit(&self, out: &mut SourceBuilder) {
        out.line(&format!("int c_instance = {};", self.instance));
        out.line(&format!("int c_element = {};", self.element));
    }
}

/// Per-fragment helper locals: instance/element indices, screen position,
/// contour position and normalized bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FragmentConstants<'a> {
    pub instance: &'a str,
    pub element: &'a str,
    pub screen_position: &'a str,
    pub contour_position: &'a str,
    pub bounds_position: &'a str,
    pub bounds_size: &'a str,
}

impl Default for FragmentConstants<'_> {
    fn default() -> Self {
        Self {
            instance: "v_instance",
            element: "0",
            screen_position: "gl_FragCoord.xy / u_contentScale",
            contour_position: "0",
            bounds_position: "vec3(0.0)",
            bounds_size: "vec3(0.0)",
        }
    }
}

impl<'a> FragmentConstants<'a> {
    #[inline]
    pub fn with_instance(mut self, expr: &'a str) -> Self {
        self.instance = expr;
        self
    }

    #[inline]
    pub fn with_element(mut self, expr: &'a str) -> Self {
        self.element = expr;
        self
    }

    #[inline]
    pub fn with_screen_position(mut self, expr: &'a str) -> Self {
        self.screen_position = expr;
        self
    }

    #[inline]
    pub fn with_contour_position(mut self, expr: &'a str) -> Self {
        self.contour_position = expr;
        self
    }

    #[inline]
    pub fn with_bounds_position(mut self, expr: &'a str) -> Self {
        self.bounds_position = expr;
        self
    }

    #[inline]
    pub fn with_bounds_size(mut self, expr: &'a str) -> Self {
        self.bounds_size = expr;
        self
    }

    pub fn emit(&self, out: &mut SourceBuilder) {
        out.line(&format!("int c_instance = {};", self.instance));
        out.line(&format!("int c_element = {};", self.element));
        out.line(&format!("vec2 c_screenPosition = {};", self.screen_position));
        out.line(&format!("float c_contourPosition = {};", self.contour_position));
        out.line(&format!("vec3 c_boundsPosition = {};", self.bounds_position));
        out.line(&format!("vec3 c_boundsSize = {};", self.bounds_size));
    }
}

// ── drawer uniforms ───────────────────────────────────────────────────────

/// `ContextBlock` and `StyleBlock`. Block names and member order are bound
/// by the GPU-side uniform upload code and must not change.
pub fn drawer_uniforms(out: &mut SourceBuilder) {
    out.open("layout(shared) uniform ContextBlock");
    out.lines(&[
        "uniform mat4 u_modelNormalMatrix;",
        "uniform mat4 u_modelMatrix;",
        "uniform mat4 u_viewNormalMatrix;",
        "uniform mat4 u_viewMatrix;",
        "uniform mat4 u_projectionMatrix;",
        "uniform float u_contentScale;",
        "uniform vec2 u_viewDimensions;",
    ]);
    out.close_with("};");
    out.blank();
    out.open("layout(shared) uniform StyleBlock");
    out.lines(&[
        "uniform vec4 u_fill;",
        "uniform vec4 u_stroke;",
        "uniform float u_strokeWeight;",
        "uniform float[25] u_colorMatrix;",
    ]);
    out.close_with("};");
}

// ── transform ─────────────────────────────────────────────────────────────

/// Varyings carrying the standard world/view/clip transform between stages.
pub const TRANSFORM_VARYINGS: [Varying<'static>; 5] = [
    Varying::new("v_worldNormal", "vec3"),
    Varying::new("v_viewNormal", "vec3"),
    Varying::new("v_worldPosition", "vec3"),
    Varying::new("v_viewPosition", "vec3"),
    Varying::new("v_clipPosition", "vec4"),
];

pub fn transform_varyings(out: &mut SourceBuilder, qualifier: StorageQualifier) {
    out.declare(qualifier, &TRANSFORM_VARYINGS);
}

/// Copies the uniform matrices into `x_*` locals the vertex transform
/// injection may rewrite.
pub fn pre_transform(out: &mut SourceBuilder) {
    out.lines(&[
        "mat4 x_modelMatrix = u_modelMatrix;",
        "mat4 x_viewMatrix = u_viewMatrix;",
        "mat4 x_modelNormalMatrix = u_modelNormalMatrix;",
        "mat4 x_viewNormalMatrix = u_viewNormalMatrix;",
        "mat4 x_projectionMatrix = u_projectionMatrix;",
    ]);
}

/// Derives the transform varyings from `x_position` / `x_normal` and writes
/// `gl_Position`. Both locals must be declared before this runs.
pub fn post_transform(out: &mut SourceBuilder) {
    out.lines(&[
        "v_worldNormal = (x_modelNormalMatrix * vec4(x_normal, 0.0)).xyz;",
        "v_viewNormal = (x_viewNormalMatrix * vec4(v_worldNormal, 0.0)).xyz;",
        "v_worldPosition = (x_modelMatrix * vec4(x_position, 1.0)).xyz;",
        "v_viewPosition = (x_viewMatrix * vec4(v_worldPosition, 1.0)).xyz;",
        "v_clipPosition = x_projectionMatrix * vec4(v_viewPosition, 1.0);",
        "gl_Position = v_clipPosition;",
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut SourceBuilder)) -> String {
        let mut b = SourceBuilder::new();
        f(&mut b);
        b.finish()
    }

    #[test]
    fn primitive_constants_define_every_kind() {
        let src = render(|b| primitive_constants(b, PrimitiveKind::Rectangle));
        assert_eq!(
            src,
            "#define d_vertex_buffer 0\n\
             #define d_image 1\n\
             #define d_circle 2\n\
             #define d_rectangle 3\n\
             #define d_font_image_map 4\n\
             #define d_expansion 5\n\
             #define d_fast_line 6\n\
             #define d_primitive 3\n"
        );
    }

    #[test]
    fn vertex_constants_defaults_and_override() {
        assert_eq!(
            render(|b| VertexConstants::default().emit(b)),
            "int c_instance = gl_InstanceID;\nint c_element = 0;\n"
        );
        assert_eq!(
            render(|b| VertexConstants::default().with_instance("int(a_position.z)").emit(b)),
            "int c_instance = int(a_position.z);\nint c_element = 0;\n"
        );
    }

    #[test]
    fn fragment_constants_defaults() {
        let src = render(|b| FragmentConstants::default().emit(b));
        assert!(src.contains("int c_instance = v_instance;\n"));
        assert!(src.contains("vec2 c_screenPosition = gl_FragCoord.xy / u_contentScale;\n"));
        assert!(src.contains("float c_contourPosition = 0;\n"));
        assert!(src.contains("vec3 c_boundsPosition = vec3(0.0);\n"));
        assert!(src.contains("vec3 c_boundsSize = vec3(0.0);\n"));
    }

    #[test]
    fn fragment_constants_overrides_apply_per_field() {
        let src = render(|b| {
            FragmentConstants::default()
                .with_bounds_size("v_boundsSize")
                .with_contour_position("va_vertexOffset")
                .emit(b)
        });
        assert!(src.contains("vec3 c_boundsSize = v_boundsSize;\n"));
        assert!(src.contains("float c_contourPosition = va_vertexOffset;\n"));
        assert!(src.contains("vec3 c_boundsPosition = vec3(0.0);\n"));
    }

    #[test]
    fn drawer_uniform_member_order() {
        let src = render(drawer_uniforms);
        let order = [
            "ContextBlock",
            "u_modelNormalMatrix",
            "u_modelMatrix",
            "u_viewNormalMatrix",
            "u_viewMatrix",
            "u_projectionMatrix",
            "u_contentScale",
            "u_viewDimensions",
            "StyleBlock",
            "u_fill",
            "u_stroke",
            "u_strokeWeight",
            "uniform float[25] u_colorMatrix;",
        ];
        let mut at = 0;
        for needle in order {
            let found = src[at..].find(needle).map(|i| i + at);
            assert!(found.is_some(), "{needle} missing or out of order");
            at = found.unwrap_or(at);
        }
        assert!(src.ends_with("};\n"));
    }

    #[test]
    fn transform_varyings_both_sides() {
        let out = render(|b| transform_varyings(b, StorageQualifier::Out));
        let inp = render(|b| transform_varyings(b, StorageQualifier::In));
        assert_eq!(out.lines().count(), 5);
        assert!(out.contains("out vec4 v_clipPosition;"));
        assert!(inp.contains("in vec3 v_worldNormal;"));
        assert_eq!(out.replace("out ", "in "), inp);
    }

    #[test]
    fn post_transform_ends_with_gl_position() {
        let src = render(post_transform);
        assert!(src.ends_with("gl_Position = v_clipPosition;\n"));
        assert!(src.starts_with("v_worldNormal = "));
    }
}
