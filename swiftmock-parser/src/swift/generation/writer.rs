//! Line-oriented writer for generated Swift

/// Accumulates indented lines
///
/// `open` writes a line and indents what follows, `close` dedents and writes a line.
/// Blank lines carry no indentation.
#[derive(Debug, Clone)]
pub struct SwiftWriter {
    indent_unit: String,
    level: usize,
    buffer: String,
}

impl SwiftWriter {
    pub fn new(indent_unit: &str) -> Self {
        SwiftWriter {
            indent_unit: indent_unit.to_string(),
            level: 0,
            buffer: String::new(),
        }
    }

    pub fn line(&mut self, text: &str) {
        for _ in 0..self.level {
            self.buffer.push_str(&self.indent_unit);
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    pub fn blank(&mut self) {
        self.buffer.push('\n');
    }

    pub fn open(&mut self, text: &str) {
        self.line(text);
        self.level += 1;
    }

    pub fn close(&mut self, text: &str) {
        self.level = self.level.saturating_sub(1);
        self.line(text);
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}
