use crate::decl::{StorageQualifier, Varying};

// ── SourceBuilder ─────────────────────────────────────────────────────────

/// Ordered, line-oriented GLSL text builder.
///
/// Owned lines (`line`, `open`, `close`) are indented to the current block
/// depth. Injected text (`inject`, `scope`) is copied verbatim: it is never
/// re-indented, trimmed or escaped, so callers can find it byte-for-byte in
/// the finished source.
#[derive(Debug, Clone)]
pub struct SourceBuilder {
    buffer: String,
    indent: usize,
    spaces_in_indent: usize,
}

impl Default for SourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceBuilder {
    pub fn new() -> Self {
        Self::with_indent_width(4)
    }

    pub fn with_indent_width(spaces_in_indent: usize) -> Self {
        Self { buffer: String::new(), indent: 0, spaces_in_indent }
    }

    /// Writes the `#version` directive. Must be the first thing written.
    pub fn version(&mut self, version: &str) -> &mut Self {
        debug_assert!(self.buffer.is_empty(), "#version must be the first directive");
        self.buffer.push_str("#version ");
        self.buffer.push_str(version);
        self.buffer.push('\n');
        self
    }

    /// Writes one line at the current indentation. An empty `text` yields an
    /// empty line without trailing spaces.
    pub fn line(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            self.write_indent();
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    /// Writes every entry of `lines` at the current indentation.
    pub fn lines(&mut self, lines: &[&str]) -> &mut Self {
        for l in lines {
            self.line(l);
        }
        self
    }

    /// Writes a single separating empty line; consecutive calls collapse.
    pub fn blank(&mut self) -> &mut Self {
        if !self.buffer.is_empty() && !self.buffer.ends_with("\n\n") {
            self.buffer.push('\n');
        }
        self
    }

    /// Copies `fragment` verbatim, terminating it with a newline if needed.
    /// An empty fragment writes nothing.
    pub fn inject(&mut self, fragment: &str) -> &mut Self {
        if fragment.is_empty() {
            return self;
        }
        self.buffer.push_str(fragment);
        if !fragment.ends_with('\n') {
            self.buffer.push('\n');
        }
        self
    }

    /// Opens a brace block: `header {` (or a bare `{` for an empty header).
    pub fn open(&mut self, header: &str) -> &mut Self {
        if header.is_empty() {
            self.line("{");
        } else {
            self.write_indent();
            self.buffer.push_str(header);
            self.buffer.push_str(" {\n");
        }
        self.indent += 1;
        self
    }

    /// Closes the innermost block with `}`.
    pub fn close(&mut self) -> &mut Self {
        self.close_with("}")
    }

    /// Closes the innermost block with a custom terminator such as `};`.
    pub fn close_with(&mut self, terminator: &str) -> &mut Self {
        debug_assert!(self.indent > 0, "close without matching open");
        self.indent = self.indent.saturating_sub(1);
        self.line(terminator)
    }

    /// Wraps verbatim `fragment` in its own `{ }` scope so declarations made
    /// inside it cannot leak into the surrounding block.
    pub fn scope(&mut self, fragment: &str) -> &mut Self {
        self.line("{");
        self.inject(fragment);
        self.line("}")
    }

    /// Declares each varying with the given storage qualifier.
    pub fn declare(&mut self, qualifier: StorageQualifier, varyings: &[Varying<'_>]) -> &mut Self {
        for v in varyings {
            self.line(&v.declaration(qualifier));
        }
        self
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.indent
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Returns the finished source. All opened blocks must have been closed.
    pub fn finish(self) -> String {
        debug_assert_eq!(self.indent, 0, "unclosed block in generated source");
        self.buffer
    }

    fn write_indent(&mut self) {
        let n = self.spaces_in_indent * self.indent;
        self.buffer.extend(std::iter::repeat_n(' ', n));
    }
}
