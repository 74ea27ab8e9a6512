use std::fmt;

// ── qualifiers ────────────────────────────────────────────────────────────

/// Storage qualifier of an interface variable: which side of a stage
/// boundary the declaration sits on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StorageQualifier {
    /// Producer side (vertex stage `out`).
    Out,
    /// Consumer side (fragment stage `in`).
    In,
}

impl StorageQualifier {
    #[inline]
    pub const fn keyword(self) -> &'static str {
        match self {
            StorageQualifier::Out => "out",
            StorageQualifier::In => "in",
        }
    }
}

impl fmt::Display for StorageQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Interpolation qualifier. Integer varyings must be `Flat`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Interpolation {
    #[default]
    Smooth,
    Flat,
}

// ── Varying ───────────────────────────────────────────────────────────────

/// A stage-interface variable described once and declared on both sides.
///
/// The same `Varying` value renders as `out` in a vertex stage and as `in`
/// in the paired fragment stage, so name, type and interpolation cannot
/// drift apart between the two declarations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Varying<'a> {
    pub name: &'a str,
    pub ty: &'a str,
    pub interpolation: Interpolation,
}

impl<'a> Varying<'a> {
    #[inline]
    pub const fn new(name: &'a str, ty: &'a str) -> Self {
        Self { name, ty, interpolation: Interpolation::Smooth }
    }

    #[inline]
    pub const fn flat(name: &'a str, ty: &'a str) -> Self {
        Self { name, ty, interpolation: Interpolation::Flat }
    }

    #[inline]
    pub const fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Renders the declaration, e.g. `flat out int v_instance;`.
    pub fn declaration(&self, qualifier: StorageQualifier) -> String {
        match self.interpolation {
            Interpolation::Smooth => format!("{} {} {};", qualifier, self.ty, self.name),
            Interpolation::Flat => format!("flat {} {} {};", qualifier, self.ty, self.name),
        }
    }
}

/// Renders a declaration list, one per line, for the given side.
pub fn declarations(qualifier: StorageQualifier, varyings: &[Varying<'_>]) -> String {
    let mut out = String::new();
    for v in varyings {
        out.push_str(&v.declaration(qualifier));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooth_declaration() {
        let v = Varying::new("v_boundsSize", "vec3");
        assert_eq!(v.declaration(StorageQualifier::Out), "out vec3 v_boundsSize;");
        assert_eq!(v.declaration(StorageQualifier::In), "in vec3 v_boundsSize;");
    }

    #[test]
    fn flat_declaration() {
        let v = Varying::flat("v_instance", "int");
        assert_eq!(v.declaration(StorageQualifier::Out), "flat out int v_instance;");
        assert_eq!(v.declaration(StorageQualifier::In), "flat in int v_instance;");
    }

    #[test]
    fn declarations_pair_up() {
        let vs = [Varying::new("va_uv", "vec2"), Varying::flat("va_id", "int")];
        let out = declarations(StorageQualifier::Out, &vs);
        let inp = declarations(StorageQualifier::In, &vs);
        assert_eq!(out, "out vec2 va_uv;\nflat out int va_id;\n");
        assert_eq!(inp, "in vec2 va_uv;\nflat in int va_id;\n");
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert!(declarations(StorageQualifier::In, &[]).is_empty());
    }
}
