/// Plain-text message panel shown next to the map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputPanel {
    lines: Vec<String>,
}

impl OutputPanel {
    pub fn replace(&mut self, line: impl Into<String>) {
        self.lines.clear();
        self.lines.push(line.into());
    }

    pub fn append(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}
