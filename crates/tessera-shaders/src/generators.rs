//! Backend-facing generator surface.

use crate::bundle::InjectionBundle;
use crate::config::GeneratorConfig;
use crate::primitive::{PrimitiveKind, ShaderStage};
use crate::primitives;

// ── ShaderGenerators ──────────────────────────────────────────────────────

/// One source generator per (primitive, stage) pair.
///
/// A rendering backend implements this once per shading language. The
/// provided [`generate`](Self::generate) and [`program`](Self::program)
/// methods dispatch on a runtime kind.
pub trait ShaderGenerators {
    fn vertex_buffer_vertex_shader(&self, bundle: &InjectionBundle) -> String;
    fn vertex_buffer_fragment_shader(&self, bundle: &InjectionBundle) -> String;

    fn image_vertex_shader(&self, bundle: &InjectionBundle) -> String;
    fn image_fragment_shader(&self, bundle: &InjectionBundle) -> String;

    fn circle_vertex_shader(&self, bundle: &InjectionBundle) -> String;
    fn circle_fragment_shader(&self, bundle: &InjectionBundle) -> String;

    fn rectangle_vertex_shader(&self, bundle: &InjectionBundle) -> String;
    fn rectangle_fragment_shader(&self, bundle: &InjectionBundle) -> String;

    fn font_image_map_vertex_shader(&self, bundle: &InjectionBundle) -> String;
    fn font_image_map_fragment_shader(&self, bundle: &InjectionBundle) -> String;

    fn expansion_vertex_shader(&self, bundle: &InjectionBundle) -> String;
    fn expansion_fragment_shader(&self, bundle: &InjectionBundle) -> String;

    fn fast_line_vertex_shader(&self, bundle: &InjectionBundle) -> String;
    fn fast_line_fragment_shader(&self, bundle: &InjectionBundle) -> String;

    fn generate(&self, kind: PrimitiveKind, stage: ShaderStage, bundle: &InjectionBundle) -> String {
        use PrimitiveKind as K;
        use ShaderStage as S;

        match (kind, stage) {
            (K::VertexBuffer, S::Vertex) => self.vertex_buffer_vertex_shader(bundle),
            (K::VertexBuffer, S::Fragment) => self.vertex_buffer_fragment_shader(bundle),
            (K::Image, S::Vertex) => self.image_vertex_shader(bundle),
            (K::Image, S::Fragment) => self.image_fragment_shader(bundle),
            (K::Circle, S::Vertex) => self.circle_vertex_shader(bundle),
            (K::Circle, S::Fragment) => self.circle_fragment_shader(bundle),
            (K::Rectangle, S::Vertex) => self.rectangle_vertex_shader(bundle),
            (K::Rectangle, S::Fragment) => self.rectangle_fragment_shader(bundle),
            (K::FontImageMap, S::Vertex) => self.font_image_map_vertex_shader(bundle),
            (K::FontImageMap, S::Fragment) => self.font_image_map_fragment_shader(bundle),
            (K::Expansion, S::Vertex) => self.expansion_vertex_shader(bundle),
            (K::Expansion, S::Fragment) => self.expansion_fragment_shader(bundle),
            (K::FastLine, S::Vertex) => self.fast_line_vertex_shader(bundle),
            (K::FastLine, S::Fragment) => self.fast_line_fragment_shader(bundle),
        }
    }

    /// Generates both stages of one program from the same bundle.
    fn program(&self, kind: PrimitiveKind, bundle: &InjectionBundle) -> ProgramSource {
        ProgramSource {
            kind,
            vertex: self.generate(kind, ShaderStage::Vertex, bundle),
            fragment: self.generate(kind, ShaderStage::Fragment, bundle),
        }
    }
}

/// Vertex and fragment source meant to be linked into one program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSource {
    pub kind: PrimitiveKind,
    pub vertex: String,
    pub fragment: String,
}

impl ProgramSource {
    #[inline]
    pub fn stage(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }
}

// ── Gl3Generators ─────────────────────────────────────────────────────────

/// GLSL 330 core generators.
///
/// Holds no state besides its configuration; share one instance freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct Gl3Generators {
    config: GeneratorConfig,
}

impl Gl3Generators {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn emit(&self, kind: PrimitiveKind, stage: ShaderStage, bundle: &InjectionBundle) -> String {
        let source = primitives::generate(kind, stage, &self.config, bundle);
        log::trace!("generated {kind} {stage} shader ({} bytes)", source.len());
        if self.config.log_sources {
            log::debug!("{kind} {stage} shader source:\n{source}");
        }
        source
    }
}

impl ShaderGenerators for Gl3Generators {
    fn vertex_buffer_vertex_shader(&self, bundle: &InjectionBundle) -> String {
        self.emit(PrimitiveKind::VertexBuffer, ShaderStage::Vertex, bundle)
    }

    fn vertex_buffer_fragment_shader(&self, bundle: &InjectionBundle) -> String {
        self.emit(PrimitiveKind::VertexBuffer, ShaderStage::Fragment, bundle)
    }

    fn image_vertex_shader(&self, bundle: &InjectionBundle) -> String {
        self.emit(PrimitiveKind::Image, ShaderStage::Vertex, bundle)
    }

    fn image_fragment_shader(&self, bundle: &InjectionBundle) -> String {
        self.emit(PrimitiveKind::Image, ShaderStage::Fragment, bundle)
    }

    fn circle_vertex_shader(&self, bundle: &InjectionBundle) -> String {
        self.emit(PrimitiveKind::Circle, ShaderStage::Vertex, bundle)
    }

    fn circle_fragment_shader(&self, bundle: &InjectionBundle) -> String {
        self.emit(PrimitiveKind::Circle, ShaderStage::Fragment, bundle)
    }

    fn rectangle_vertex_shader(&self, bundle: &InjectionBundle) -> String {
        self.emit(PrimitiveKind::Rectangle, ShaderStage::Vertex, bundle)
    }

    fn rectangle_fragment_shader(&self, bundle: &InjectionBundle) -> String {
        self.emit(PrimitiveKind::Rectangle, ShaderStage::Fragment, bundle)
    }

    fn font_image_map_vertex_shader(&self, bundle: &InjectionBundle) -> String {
        self.emit(PrimitiveKind::FontImageMap, ShaderStage::Vertex, bundle)
    }

    fn font_image_map_fragment_shader(&self, bundle: &InjectionBundle) -> String {
        self.emit(PrimitiveKind::FontImageMap, ShaderStage::Fragment, bundle)
    }

    fn expansion_vertex_shader(&self, bundle: &InjectionBundle) -> String {
        self.emit(PrimitiveKind::Expansion, ShaderStage::Vertex, bundle)
    }

    fn expansion_fragment_shader(&self, bundle: &InjectionBundle) -> String {
        self.emit(PrimitiveKind::Expansion, ShaderStage::Fragment, bundle)
    }

    fn fast_line_vertex_shader(&self, bundle: &InjectionBundle) -> String {
        self.emit(PrimitiveKind::FastLine, ShaderStage::Vertex, bundle)
    }

    fn fast_line_fragment_shader(&self, bundle: &InjectionBundle) -> String {
        self.emit(PrimitiveKind::FastLine, ShaderStage::Fragment, bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_dispatch_matches_module_functions() {
        let generators = Gl3Generators::default();
        let bundle = InjectionBundle::new().with_uniforms("uniform float u_time;");
        for kind in PrimitiveKind::ALL {
            for stage in ShaderStage::ALL {
                assert_eq!(
                    generators.generate(kind, stage, &bundle),
                    primitives::generate(kind, stage, generators.config(), &bundle),
                    "{kind} {stage}"
                );
            }
        }
    }

    #[test]
    fn named_methods_route_to_their_kind() {
        let g = Gl3Generators::default();
        let b = InjectionBundle::new();
        assert!(g.circle_fragment_shader(&b).contains("#define d_primitive 2\n"));
        assert!(g.fast_line_vertex_shader(&b).contains("#define d_primitive 6\n"));
        assert!(g.font_image_map_fragment_shader(&b).contains("#define d_primitive 4\n"));
    }

    #[test]
    fn program_pairs_both_stages() {
        let g = Gl3Generators::default();
        let p = g.program(PrimitiveKind::Image, &InjectionBundle::new());
        assert_eq!(p.kind, PrimitiveKind::Image);
        assert!(p.stage(ShaderStage::Vertex).contains("void main() {"));
        assert!(p.stage(ShaderStage::Fragment).contains("out vec4 o_color;"));
    }

    #[test]
    fn configured_version_line() {
        let g = Gl3Generators::new(GeneratorConfig::default().with_glsl_version("410 core"));
        let src = g.rectangle_vertex_shader(&InjectionBundle::new());
        assert!(src.starts_with("#version 410 core\n"));
    }

    #[test]
    fn source_logging_does_not_change_output() {
        let quiet = Gl3Generators::default();
        let loud = Gl3Generators::new(GeneratorConfig::default().with_log_sources(true));
        let b = InjectionBundle::new();
        assert_eq!(quiet.expansion_fragment_shader(&b), loud.expansion_fragment_shader(&b));
    }
}
