//! Generator configuration.

/// GLSL dialect emitted by default; downstream binding code relies on it.
pub const DEFAULT_GLSL_VERSION: &str = "330 core";

/// Settings shared by every generation call.
///
/// The default configuration produces the exact source contract expected by
/// the GL3 pipeline; override `glsl_version` only for drivers that need a
/// different `#version` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Text following `#version` on the first line of every shader.
    pub glsl_version: String,
    /// Emit every generated source at `debug` level.
    pub log_sources: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            glsl_version: DEFAULT_GLSL_VERSION.to_string(),
            log_sources: false,
        }
    }
}

impl GeneratorConfig {
    #[inline]
    pub fn with_glsl_version(mut self, version: impl Into<String>) -> Self {
        self.glsl_version = version.into();
        self
    }

    #[inline]
    pub fn with_log_sources(mut self, enabled: bool) -> Self {
        self.log_sources = enabled;
        self
    }
}
