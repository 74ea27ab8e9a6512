//! Per-primitive shader generators.
//!
//! Each module exposes a `vertex_shader` / `fragment_shader` pair for one
//! [`PrimitiveKind`]; both functions are pure.
//!
//! Adding a primitive:
//! - add a variant to `PrimitiveKind` and a descriptor in `layout`
//! - add a module here built on `common::{vertex_shader, fragment_shader}`
//! - route it in [`generate`] and in `ShaderGenerators`

mod common;

pub mod circle;
pub mod expansion;
pub mod fast_line;
pub mod font_image_map;
pub mod image;
pub mod rectangle;
pub mod vertex_buffer;

use crate::bundle::InjectionBundle;
use crate::config::GeneratorConfig;
use crate::primitive::{PrimitiveKind, ShaderStage};

/// Generates the `stage` source for `kind`.
pub fn generate(
    kind: PrimitiveKind,
    stage: ShaderStage,
    config: &GeneratorConfig,
    bundle: &InjectionBundle,
) -> String {
    use PrimitiveKind as K;
    use ShaderStage as S;

    match (kind, stage) {
        (K::VertexBuffer, S::Vertex) => vertex_buffer::vertex_shader(config, bundle),
        (K::VertexBuffer, S::Fragment) => vertex_buffer::fragment_shader(config, bundle),
        (K::Image, S::Vertex) => image::vertex_shader(config, bundle),
        (K::Image, S::Fragment) => image::fragment_shader(config, bundle),
        (K::Circle, S::Vertex) => circle::vertex_shader(config, bundle),
        (K::Circle, S::Fragment) => circle::fragment_shader(config, bundle),
        (K::Rectangle, S::Vertex) => rectangle::vertex_shader(config, bundle),
        (K::Rectangle, S::Fragment) => rectangle::fragment_shader(config, bundle),
        (K::FontImageMap, S::Vertex) => font_image_map::vertex_shader(config, bundle),
        (K::FontImageMap, S::Fragment) => font_image_map::fragment_shader(config, bundle),
        (K::Expansion, S::Vertex) => expansion::vertex_shader(config, bundle),
        (K::Expansion, S::Fragment) => expansion::fragment_shader(config, bundle),
        (K::FastLine, S::Vertex) => fast_line::vertex_shader(config, bundle),
        (K::FastLine, S::Fragment) => fast_line::fragment_shader(config, bundle),
    }
}
