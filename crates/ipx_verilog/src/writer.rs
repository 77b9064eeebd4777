//! The [`Writer`] trait and the generic writers.

/// Something that appends a piece of generated text.
pub trait Writer {
    /// Appends this writer's text to `out`.
    fn write(&self, out: &mut String);
}

/// An ordered list of writers written one after another.
#[derive(Default)]
pub struct WriterGroup {
    writers: Vec<Box<dyn Writer>>,
}

impl WriterGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a writer.
    pub fn add(&mut self, writer: impl Writer + 'static) {
        self.writers.push(Box::new(writer));
    }

    /// Returns the number of child writers.
    pub fn len(&self) -> usize {
        self.writers.len()
    }

    /// Returns `true` if the group has no child writers.
    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }
}

impl Writer for WriterGroup {
    fn write(&self, out: &mut String) {
        for writer in &self.writers {
            writer.write(out);
        }
    }
}

/// Writes text as `//` line comments.
pub struct CommentWriter {
    text: String,
    indent: usize,
}

impl CommentWriter {
    /// Creates an unindented comment.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            indent: 0,
        }
    }

    /// Sets the number of spaces before each `//`.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

impl Writer for CommentWriter {
    fn write(&self, out: &mut String) {
        if self.text.is_empty() {
            return;
        }
        for line in self.text.lines() {
            out.push_str(&" ".repeat(self.indent));
            out.push_str("//");
            if !line.is_empty() {
                out.push(' ');
                out.push_str(line);
            }
            out.push('\n');
        }
    }
}

/// Writes text verbatim.
pub struct TextBodyWriter {
    text: String,
}

impl TextBodyWriter {
    /// Creates a writer for `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the text this writer emits.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Writer for TextBodyWriter {
    fn write(&self, out: &mut String) {
        out.push_str(&self.text);
    }
}
