//! Builder for Markdown test documents.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

/// Builder for Markdown documents assembled block by block.
#[derive(Debug, Default, Clone)]
pub struct TestDoc {
    blocks: Vec<String>,
}

impl TestDoc {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an ATX heading.
    pub fn heading(mut self, level: usize, text: &str) -> Self {
        self.blocks.push(format!("{} {}", "#".repeat(level), text));
        self
    }

    /// Adds a paragraph.
    pub fn paragraph(mut self, text: &str) -> Self {
        self.blocks.push(text.to_string());
        self
    }

    /// Adds a pipe table with a header row.
    pub fn table(mut self, header: &[&str], rows: &[&[&str]]) -> Self {
        let mut lines = vec![
            format!("| {} |", header.join(" | ")),
            format!("|{}|", vec!["---"; header.len()].join("|")),
        ];
        lines.extend(rows.iter().map(|row| format!("| {} |", row.join(" | "))));
        self.blocks.push(lines.join("\n"));
        self
    }

    /// Adds a fenced code block.
    pub fn code(mut self, lang: &str, body: &str) -> Self {
        self.blocks.push(format!("```{lang}\n{body}\n```"));
        self
    }

    /// Adds a blockquote.
    pub fn quote(mut self, text: &str) -> Self {
        self.blocks.push(format!("> {text}"));
        self
    }

    /// Renders the Markdown source.
    pub fn build(&self) -> String {
        let mut out = self.blocks.join("\n\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_builds_blocks() {
        let doc = TestDoc::new()
            .heading(1, "Title")
            .table(&["a", "b"], &[&["1", "2"]])
            .build();

        assert_eq!(doc, "# Title\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
    }

    #[test]
    fn test_doc_code_and_quote() {
        let doc = TestDoc::new().code("sh", "ls").quote("note").build();

        assert_eq!(doc, "```sh\nls\n```\n\n> note\n");
    }
}
