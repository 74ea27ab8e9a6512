//! Per-primitive stage interface.
//!
//! Every kind lists its extra varyings and kind-specific uniforms exactly
//! once here. The vertex generator declares the varyings as `out`, the
//! fragment generator declares the same entries as `in`.

use tessera_glsl::Varying;

use crate::primitive::PrimitiveKind;

/// Stage-interface descriptor for one primitive kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveLayout {
    pub kind: PrimitiveKind,
    /// Varyings beyond the standard transform set, shared by both stages.
    pub varyings: &'static [Varying<'static>],
    /// Uniforms read only by the vertex stage.
    pub vertex_uniforms: &'static [&'static str],
    /// Uniforms and samplers read only by the fragment stage.
    pub fragment_uniforms: &'static [&'static str],
}

const INSTANCE: Varying<'static> = Varying::flat("v_instance", "int");

static VERTEX_BUFFER: PrimitiveLayout = PrimitiveLayout {
    kind: PrimitiveKind::VertexBuffer,
    varyings: &[INSTANCE],
    vertex_uniforms: &[],
    fragment_uniforms: &["uniform sampler2D image;"],
};

static IMAGE: PrimitiveLayout = PrimitiveLayout {
    kind: PrimitiveKind::Image,
    varyings: &[INSTANCE, Varying::new("v_boundsPosition", "vec3")],
    vertex_uniforms: &["uniform int u_flipV;"],
    fragment_uniforms: &["uniform sampler2D image;"],
};

static CIRCLE: PrimitiveLayout = PrimitiveLayout {
    kind: PrimitiveKind::Circle,
    varyings: &[INSTANCE, Varying::new("v_boundsSize", "vec3")],
    vertex_uniforms: &[],
    fragment_uniforms: &[],
};

static RECTANGLE: PrimitiveLayout = PrimitiveLayout {
    kind: PrimitiveKind::Rectangle,
    varyings: &[INSTANCE, Varying::new("v_boundsSize", "vec3")],
    vertex_uniforms: &[],
    fragment_uniforms: &[],
};

static FONT_IMAGE_MAP: PrimitiveLayout = PrimitiveLayout {
    kind: PrimitiveKind::FontImageMap,
    varyings: &[INSTANCE],
    vertex_uniforms: &[],
    fragment_uniforms: &["uniform sampler2D image;"],
};

static EXPANSION: PrimitiveLayout = PrimitiveLayout {
    kind: PrimitiveKind::Expansion,
    varyings: &[
        INSTANCE,
        Varying::new("v_objectPosition", "vec3"),
        Varying::new("v_ftcoord", "vec2"),
    ],
    vertex_uniforms: &[],
    fragment_uniforms: &[
        "uniform float strokeMult;",
        "uniform float strokeThr;",
        "uniform float strokeFillFactor;",
        "uniform sampler2D tex;",
        "uniform vec4 bounds;",
    ],
};

static FAST_LINE: PrimitiveLayout = PrimitiveLayout {
    kind: PrimitiveKind::FastLine,
    varyings: &[INSTANCE],
    vertex_uniforms: &[],
    fragment_uniforms: &["uniform sampler2D image;"],
};

impl PrimitiveLayout {
    pub fn of(kind: PrimitiveKind) -> &'static PrimitiveLayout {
        match kind {
            PrimitiveKind::VertexBuffer => &VERTEX_BUFFER,
            PrimitiveKind::Image => &IMAGE,
            PrimitiveKind::Circle => &CIRCLE,
            PrimitiveKind::Rectangle => &RECTANGLE,
            PrimitiveKind::FontImageMap => &FONT_IMAGE_MAP,
            PrimitiveKind::Expansion => &EXPANSION,
            PrimitiveKind::FastLine => &FAST_LINE,
        }
    }

    /// Names of the extra varyings, in declaration order.
    pub fn varying_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.varyings.iter().map(|v| v.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_kind_matches_lookup() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(PrimitiveLayout::of(kind).kind, kind);
        }
    }

    #[test]
    fn every_kind_carries_instance() {
        for kind in PrimitiveKind::ALL {
            assert!(kind.layout().varying_names().any(|n| n == "v_instance"), "{kind}");
        }
    }

    #[test]
    fn varying_names_are_unique_per_kind() {
        for kind in PrimitiveKind::ALL {
            let mut names: Vec<_> = kind.layout().varying_names().collect();
            let len = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), len, "{kind}");
        }
    }

    #[test]
    fn bounds_varyings() {
        let circle: Vec<_> = PrimitiveKind::Circle.layout().varying_names().collect();
        assert_eq!(circle, ["v_instance", "v_boundsSize"]);
        let vb: Vec<_> = PrimitiveKind::VertexBuffer.layout().varying_names().collect();
        assert_eq!(vb, ["v_instance"]);
    }
}
