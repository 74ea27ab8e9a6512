//! Stage skeletons shared by all primitive generators.
//!
//! A primitive module only supplies the lines that differ between kinds
//! (local setup, core algorithm, helper functions, constant overrides). The
//! ordering of shared snippets, caller injections and kind bodies is fixed
//! here, once per stage.

use tessera_glsl::{SourceBuilder, StorageQualifier};

use crate::bundle::InjectionBundle;
use crate::config::GeneratorConfig;
use crate::preamble::{self, FragmentConstants, VertexConstants};
use crate::primitive::PrimitiveKind;

// ── vertex stage ──────────────────────────────────────────────────────────

/// Kind-specific parts of a vertex shader.
pub(super) struct VertexBody<'a> {
    pub constants: VertexConstants<'a>,
    /// Runs after the pre-transform; must declare `x_position` and `x_normal`.
    pub setup: &'a [&'a str],
    /// Runs after the caller's transform scope, before the post-transform.
    pub after_transform: &'a [&'a str],
}

pub(super) fn vertex_shader(
    config: &GeneratorConfig,
    kind: PrimitiveKind,
    bundle: &InjectionBundle,
    body: &VertexBody<'_>,
) -> String {
    let layout = kind.layout();
    let mut out = SourceBuilder::new();

    out.version(&config.glsl_version);
    preamble::primitive_constants(&mut out, kind);
    out.blank();

    preamble::drawer_uniforms(&mut out);
    out.inject(bundle.uniforms());
    out.lines(layout.vertex_uniforms);
    out.blank();

    out.inject(bundle.attributes());
    out.inject(bundle.varying_out());
    preamble::transform_varyings(&mut out, StorageQualifier::Out);
    out.declare(StorageQualifier::Out, layout.varyings);
    out.blank();

    out.inject(bundle.vertex_preamble());
    out.blank();

    out.open("void main()");
    body.constants.emit(&mut out);
    out.inject(bundle.varying_bridge());
    preamble::pre_transform(&mut out);
    out.lines(body.setup);
    out.scope(bundle.vertex_transform());
    out.lines(body.after_transform);
    preamble::post_transform(&mut out);
    out.close();

    out.finish()
}

// ── fragment stage ────────────────────────────────────────────────────────

/// Kind-specific parts of a fragment shader.
pub(super) struct FragmentBody<'a> {
    pub constants: FragmentConstants<'a>,
    /// Top-level functions emitted ahead of the caller preamble.
    pub helpers: &'a [&'a str],
    /// Must declare `x_fill` and `x_stroke`.
    pub setup: &'a [&'a str],
    /// Must assign `o_color` with premultiplied alpha.
    pub composite: &'a [&'a str],
}

pub(super) fn fragment_shader(
    config: &GeneratorConfig,
    kind: PrimitiveKind,
    bundle: &InjectionBundle,
    body: &FragmentBody<'_>,
) -> String {
    let layout = kind.layout();
    let mut out = SourceBuilder::new();

    out.version(&config.glsl_version);
    preamble::primitive_constants(&mut out, kind);
    out.blank();
    out.line("layout(origin_upper_left) in vec4 gl_FragCoord;");
    out.blank();

    preamble::drawer_uniforms(&mut out);
    out.inject(bundle.uniforms());
    out.lines(layout.fragment_uniforms);
    out.blank();

    out.inject(bundle.varying_in());
    out.inject(bundle.outputs());
    preamble::transform_varyings(&mut out, StorageQualifier::In);
    out.declare(StorageQualifier::In, layout.varyings);
    out.blank();
    out.line("out vec4 o_color;");
    out.blank();

    out.lines(body.helpers);
    out.blank();
    out.inject(bundle.fragment_preamble());
    out.blank();

    out.open("void main(void)");
    body.constants.emit(&mut out);
    out.lines(body.setup);
    out.scope(bundle.fragment_transform());
    out.lines(body.composite);
    out.close();

    out.finish()
}

// ── shared bodies ─────────────────────────────────────────────────────────

/// Fill and stroke straight from `StyleBlock`.
pub(super) const STYLE_SETUP: &[&str] = &["vec4 x_fill = u_fill;", "vec4 x_stroke = u_stroke;"];

/// Outputs the fill, premultiplied.
pub(super) const PREMULTIPLIED_FILL: &[&str] = &["o_color = x_fill;", "o_color.rgb *= o_color.a;"];
