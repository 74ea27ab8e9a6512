//! Caller-supplied GLSL fragments spliced into generated shaders.

use tessera_glsl::{declarations, StorageQualifier, Varying};

/// GLSL fragments injected verbatim at fixed slots of a generated shader.
///
/// Every slot is optional; an absent slot contributes nothing to the output.
/// The assembler never inspects the text: a malformed fragment surfaces as a
/// compile or link failure in the GPU driver.
///
/// Cross-stage invariant: `varying_out` (vertex stage) and `varying_in`
/// (fragment stage) must declare the same names and types when both stages
/// are generated for one program. [`with_shared_varyings`] fills both from a
/// single list.
///
/// [`with_shared_varyings`]: InjectionBundle::with_shared_varyings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectionBundle {
    uniforms: Option<String>,
    attributes: Option<String>,
    varying_out: Option<String>,
    varying_in: Option<String>,
    varying_bridge: Option<String>,
    vertex_preamble: Option<String>,
    fragment_preamble: Option<String>,
    vertex_transform: Option<String>,
    fragment_transform: Option<String>,
    outputs: Option<String>,
}

#[inline]
fn slot(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

impl InjectionBundle {
    pub fn new() -> Self {
        Self::default()
    }

    // ── builders ──────────────────────────────────────────────────────────

    /// Extra uniform declarations, emitted right after `StyleBlock` in both stages.
    pub fn with_uniforms(mut self, text: impl Into<String>) -> Self {
        self.uniforms = Some(text.into());
        self
    }

    /// Extra vertex attribute declarations.
    pub fn with_attributes(mut self, text: impl Into<String>) -> Self {
        self.attributes = Some(text.into());
        self
    }

    pub fn with_varying_out(mut self, text: impl Into<String>) -> Self {
        self.varying_out = Some(text.into());
        self
    }

    pub fn with_varying_in(mut self, text: impl Into<String>) -> Self {
        self.varying_in = Some(text.into());
        self
    }

    /// Declares `varyings` as `out` for the vertex stage and `in` for the
    /// fragment stage.
    pub fn with_shared_varyings(mut self, varyings: &[Varying<'_>]) -> Self {
        self.varying_out = Some(declarations(StorageQualifier::Out, varyings));
        self.varying_in = Some(declarations(StorageQualifier::In, varyings));
        self
    }

    /// Vertex-stage statements assigning caller varyings from attributes.
    pub fn with_varying_bridge(mut self, text: impl Into<String>) -> Self {
        self.varying_bridge = Some(text.into());
        self
    }

    pub fn with_vertex_preamble(mut self, text: impl Into<String>) -> Self {
        self.vertex_preamble = Some(text.into());
        self
    }

    pub fn with_fragment_preamble(mut self, text: impl Into<String>) -> Self {
        self.fragment_preamble = Some(text.into());
        self
    }

    /// Statements that may rewrite `x_position` / `x_normal` and the `x_*`
    /// matrices before the standard transform runs.
    pub fn with_vertex_transform(mut self, text: impl Into<String>) -> Self {
        self.vertex_transform = Some(text.into());
        self
    }

    /// Statements that may rewrite `x_fill` / `x_stroke` before compositing.
    pub fn with_fragment_transform(mut self, text: impl Into<String>) -> Self {
        self.fragment_transform = Some(text.into());
        self
    }

    /// Extra fragment output declarations.
    pub fn with_outputs(mut self, text: impl Into<String>) -> Self {
        self.outputs = Some(text.into());
        self
    }

    // ── slots ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn uniforms(&self) -> &str {
        slot(&self.uniforms)
    }

    #[inline]
    pub fn attributes(&self) -> &str {
        slot(&self.attributes)
    }

    #[inline]
    pub fn varying_out(&self) -> &str {
        slot(&self.varying_out)
    }

    #[inline]
    pub fn varying_in(&self) -> &str {
        slot(&self.varying_in)
    }

    #[inline]
    pub fn varying_bridge(&self) -> &str {
        slot(&self.varying_bridge)
    }

    #[inline]
    pub fn vertex_preamble(&self) -> &str {
        slot(&self.vertex_preamble)
    }

    #[inline]
    pub fn fragment_preamble(&self) -> &str {
        slot(&self.fragment_preamble)
    }

    #[inline]
    pub fn vertex_transform(&self) -> &str {
        slot(&self.vertex_transform)
    }

    #[inline]
    pub fn fragment_transform(&self) -> &str {
        slot(&self.fragment_transform)
    }

    #[inline]
    pub fn outputs(&self) -> &str {
        slot(&self.outputs)
    }

    /// True if the attribute slot contains `declaration` (e.g. `vec3 a_normal;`).
    pub fn declares_attribute(&self, declaration: &str) -> bool {
        self.attributes().contains(declaration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_slots_are_empty() {
        let b = InjectionBundle::new();
        for text in [
            b.uniforms(),
            b.attributes(),
            b.varying_out(),
            b.varying_in(),
            b.varying_bridge(),
            b.vertex_preamble(),
            b.fragment_preamble(),
            b.vertex_transform(),
            b.fragment_transform(),
            b.outputs(),
        ] {
            assert_eq!(text, "");
        }
    }

    #[test]
    fn builders_fill_their_own_slot() {
        let b = InjectionBundle::new()
            .with_uniforms("uniform float u_time;")
            .with_fragment_transform("x_fill.a *= 0.5;");
        assert_eq!(b.uniforms(), "uniform float u_time;");
        assert_eq!(b.fragment_transform(), "x_fill.a *= 0.5;");
        assert_eq!(b.vertex_transform(), "");
    }

    #[test]
    fn shared_varyings_match_across_stages() {
        let b = InjectionBundle::new().with_shared_varyings(&[
            Varying::new("va_texCoord0", "vec2"),
            Varying::flat("va_layer", "int"),
        ]);
        assert_eq!(b.varying_out(), "out vec2 va_texCoord0;\nflat out int va_layer;\n");
        assert_eq!(b.varying_in(), "in vec2 va_texCoord0;\nflat in int va_layer;\n");
    }

    #[test]
    fn attribute_lookup() {
        let b = InjectionBundle::new().with_attributes("in vec3 a_position;\nin vec3 a_normal;\n");
        assert!(b.declares_attribute("vec3 a_normal;"));
        assert!(!b.declares_attribute("vec2 a_texCoord0;"));
    }
}
