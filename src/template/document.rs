//! Line-oriented template text.

/// An ordered sequence of template lines.
///
/// Each line keeps its own terminator (`\n`, `\r\n`, or none for a final
/// unterminated line), so rendering an unmodified template reproduces the
/// input byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    lines: Vec<String>,
}

impl Template {
    /// Split text into lines, keeping terminators.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub(crate) fn lines_mut(&mut self) -> &mut [String] {
        &mut self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join the lines back into a single string.
    pub fn render(&self) -> String {
        self.lines.concat()
    }
}

/// Split a line into its content and its terminator.
pub(crate) fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}
