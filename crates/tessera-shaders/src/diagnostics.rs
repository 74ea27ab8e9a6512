//! Reporting for shader compile failures raised by the GPU driver.
//!
//! Generation itself cannot fail. When the driver rejects a generated
//! source (usually a malformed injected fragment or mismatched varyings),
//! the backend wraps the driver log in a [`ShaderCompileError`] so the
//! failure names the primitive, the stage and the offending lines.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::primitive::{PrimitiveKind, ShaderStage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderCompileError {
    pub kind: PrimitiveKind,
    pub stage: ShaderStage,
    /// Source handed to the driver.
    pub source: String,
    /// Driver info log.
    pub log: String,
}

impl ShaderCompileError {
    pub fn new(
        kind: PrimitiveKind,
        stage: ShaderStage,
        source: impl Into<String>,
        log: impl Into<String>,
    ) -> Self {
        Self { kind, stage, source: source.into(), log: log.into() }
    }

    /// 1-based source lines referenced by the driver log, in log order.
    ///
    /// Understands the `0:LINE` (Mesa, AMD, Intel) and `0(LINE)` (NVIDIA)
    /// location prefixes; unrecognized log lines are skipped.
    pub fn referenced_lines(&self) -> Vec<usize> {
        let mut lines: Vec<usize> = self.log.lines().filter_map(source_line).collect();
        lines.dedup();
        lines
    }

    /// Line-numbered listing of the source, marking lines the log refers to.
    pub fn listing(&self) -> String {
        let marked = self.referenced_lines();
        let mut out = String::new();
        for (i, line) in self.source.lines().enumerate() {
            let n = i + 1;
            let marker = if marked.contains(&n) { ">>" } else { "  " };
            out.push_str(&format!("{marker}{n:>4} | {line}\n"));
        }
        out
    }

    /// Writes the failing source to `<dir>/<kind>-<stage>-error.glsl` and
    /// returns the path.
    pub fn write_report(&self, dir: impl AsRef<Path>) -> anyhow::Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("creating shader report directory {}", dir.display()))?;

        let path = dir.join(format!("{}-{}-error.glsl", self.kind, self.stage));
        fs::write(&path, &self.source)
            .with_context(|| format!("writing failing shader source to {}", path.display()))?;

        log::warn!("{} {} shader source written to {}", self.kind, self.stage, path.display());
        Ok(path)
    }
}

/// `{}` prints the summary and driver log; `{:#}` appends the listing.
impl fmt::Display for ShaderCompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} shader failed to compile", self.kind, self.stage)?;
        for line in self.log.lines().filter(|l| !l.trim().is_empty()) {
            write!(f, "\n  {}", line.trim_end())?;
        }
        if f.alternate() {
            write!(f, "\n\n{}", self.listing().trim_end())?;
        }
        Ok(())
    }
}

impl std::error::Error for ShaderCompileError {}

fn source_line(log_line: &str) -> Option<usize> {
    let s = log_line.trim_start();
    let s = s
        .strip_prefix("ERROR:")
        .or_else(|| s.strip_prefix("WARNING:"))
        .unwrap_or(s)
        .trim_start();

    // source-string index, then `:LINE` or `(LINE)`
    let index_len = s.find(|c: char| !c.is_ascii_digit())?;
    if index_len == 0 {
        return None;
    }
    let rest = &s[index_len..];
    let rest = rest.strip_prefix(':').or_else(|| rest.strip_prefix('('))?;
    let line_len = rest.find(|c: char| !c.is_ascii_digit())?;
    rest[..line_len].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "#version 330 core\nvoid main() {\n    x_fill = 1;\n}\n";

    fn err(log: &str) -> ShaderCompileError {
        ShaderCompileError::new(PrimitiveKind::Circle, ShaderStage::Fragment, SOURCE, log)
    }

    // ── log parsing ───────────────────────────────────────────────────────

    #[test]
    fn mesa_location() {
        assert_eq!(err("0:3(5): error: `x_fill' undeclared").referenced_lines(), [3]);
    }

    #[test]
    fn nvidia_location() {
        assert_eq!(err("0(3) : error C1008: undefined variable").referenced_lines(), [3]);
    }

    #[test]
    fn prefixed_location() {
        assert_eq!(err("ERROR: 0:2: syntax error").referenced_lines(), [2]);
    }

    #[test]
    fn unrecognized_lines_are_skipped() {
        let e = err("link failed\n\n0:3(1): error: bad\n0:3(9): error: worse\n");
        assert_eq!(e.referenced_lines(), [3]);
    }

    // ── rendering ─────────────────────────────────────────────────────────

    #[test]
    fn listing_marks_referenced_lines() {
        let listing = err("0:3(5): error").listing();
        assert!(listing.contains("     1 | #version 330 core\n"));
        assert!(listing.contains(">>   3 |     x_fill = 1;\n"));
    }

    #[test]
    fn display_summary_and_alternate_listing() {
        let e = err("0:3(5): error: `x_fill' undeclared\n");
        let short = e.to_string();
        assert_eq!(short, "circle fragment shader failed to compile\n  0:3(5): error: `x_fill' undeclared");
        let long = format!("{e:#}");
        assert!(long.starts_with(&short));
        assert!(long.ends_with(">>   3 |     x_fill = 1;\n     4 | }"));
    }

    #[test]
    fn report_written_to_named_file() {
        let dir = std::env::temp_dir().join(format!("tessera-report-{}", std::process::id()));
        let path = err("0:3: error").write_report(&dir).unwrap();
        assert_eq!(path.file_name().unwrap(), "circle-fragment-error.glsl");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), SOURCE);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
