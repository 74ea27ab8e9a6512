use std::fmt;
use std::str::FromStr;

use crate::layout::PrimitiveLayout;

// ── PrimitiveKind ─────────────────────────────────────────────────────────

/// Geometric primitive a shader pair is generated for.
///
/// Each kind owns one preprocessor tag (`d_<name>`, 0–6) and one
/// vertex/fragment generator pair. The discriminants are the tags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    VertexBuffer = 0,
    Image = 1,
    Circle = 2,
    Rectangle = 3,
    FontImageMap = 4,
    Expansion = 5,
    FastLine = 6,
}

impl PrimitiveKind {
    /// All kinds in tag order.
    pub const ALL: [PrimitiveKind; 7] = [
        PrimitiveKind::VertexBuffer,
        PrimitiveKind::Image,
        PrimitiveKind::Circle,
        PrimitiveKind::Rectangle,
        PrimitiveKind::FontImageMap,
        PrimitiveKind::Expansion,
        PrimitiveKind::FastLine,
    ];

    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Snake-case name, e.g. `font_image_map`.
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::VertexBuffer => "vertex_buffer",
            PrimitiveKind::Image => "image",
            PrimitiveKind::Circle => "circle",
            PrimitiveKind::Rectangle => "rectangle",
            PrimitiveKind::FontImageMap => "font_image_map",
            PrimitiveKind::Expansion => "expansion",
            PrimitiveKind::FastLine => "fast_line",
        }
    }

    /// Preprocessor constant naming this kind, e.g. `d_circle`.
    pub const fn define(self) -> &'static str {
        match self {
            PrimitiveKind::VertexBuffer => "d_vertex_buffer",
            PrimitiveKind::Image => "d_image",
            PrimitiveKind::Circle => "d_circle",
            PrimitiveKind::Rectangle => "d_rectangle",
            PrimitiveKind::FontImageMap => "d_font_image_map",
            PrimitiveKind::Expansion => "d_expansion",
            PrimitiveKind::FastLine => "d_fast_line",
        }
    }

    /// Stage-interface descriptor shared by this kind's two generators.
    #[inline]
    pub fn layout(self) -> &'static PrimitiveLayout {
        PrimitiveLayout::of(self)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown primitive name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPrimitive {
    pub name: String,
}

impl fmt::Display for UnknownPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown primitive kind `{}`", self.name)
    }
}

impl std::error::Error for UnknownPrimitive {}

impl FromStr for PrimitiveKind {
    type Err = UnknownPrimitive;

    /// Accepts the snake-case name or the `d_` define.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix("d_").unwrap_or(s);
        PrimitiveKind::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| UnknownPrimitive { name: s.to_string() })
    }
}

// ── ShaderStage ───────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub const ALL: [ShaderStage; 2] = [ShaderStage::Vertex, ShaderStage::Fragment];

    pub const fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_follow_declaration_order() {
        for (i, kind) in PrimitiveKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.tag() as usize, i);
        }
    }

    #[test]
    fn define_is_prefixed_name() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(kind.define(), format!("d_{}", kind.name()));
        }
    }

    #[test]
    fn parse_name_and_define() {
        assert_eq!("circle".parse::<PrimitiveKind>(), Ok(PrimitiveKind::Circle));
        assert_eq!("d_fast_line".parse::<PrimitiveKind>(), Ok(PrimitiveKind::FastLine));
        assert_eq!(
            "font_image_map".parse::<PrimitiveKind>(),
            Ok(PrimitiveKind::FontImageMap)
        );
    }

    #[test]
    fn parse_unknown() {
        let err = "triangle".parse::<PrimitiveKind>().unwrap_err();
        assert_eq!(err.name, "triangle");
        assert_eq!(err.to_string(), "unknown primitive kind `triangle`");
    }

    #[test]
    fn stage_display() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }
}
