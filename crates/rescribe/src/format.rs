//! Line-oriented output formatter.
//!
//! Accumulates trim-normalized text lines and re-indents them on output using
//! lexical heuristics over line boundaries — no parsing involved. This is an
//! approximation, not a layout engine: it assumes well-formed,
//! one-statement-per-line input as produced by the generators. Arbitrary
//! multi-statement text defeats the heuristics silently (the output is still
//! emitted, just oddly indented). Each formatter instance is owned by a
//! single generation call and discarded after [`JsFormatter::format`].

use regex::Regex;

/// One indentation unit.
const BASE_INDENT: &str = "  ";

/// Pattern for an unbraced control-flow header (`if (x)` with nothing after).
const CONTROL_FLOW_PATTERN: &str = r"^(for|while|if|try).*\(.*\)$";

/// Accumulates lines of generated code and renders them as one indented block.
#[derive(Debug, Clone, Default)]
pub struct JsFormatter {
    base_offset: String,
    lines: Vec<String>,
}

impl JsFormatter {
    /// Create a formatter with no base offset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter whose every line is prefixed with `offset` spaces.
    #[must_use]
    pub fn with_offset(offset: usize) -> Self {
        Self {
            base_offset: " ".repeat(offset),
            lines: Vec::new(),
        }
    }

    /// Append text, split on newlines with each line trimmed.
    pub fn add(&mut self, text: &str) {
        self.lines.extend(split_lines(text));
    }

    /// Insert text ahead of all pending lines.
    ///
    /// Used to splice a late-decided preamble (a `const [x] =` binding, say)
    /// before lines that are already buffered.
    pub fn prepend(&mut self, text: &str) {
        let mut lines = split_lines(text);
        lines.append(&mut self.lines);
        self.lines = lines;
    }

    /// Append one blank line. Blank lines are never indented.
    pub fn new_line(&mut self) {
        self.lines.push(String::new());
    }

    /// Render the pending lines as one indented block.
    ///
    /// Indentation is inferred per line: a closing bracket at the start of a
    /// line dedents before emission, an opening bracket at the end of a line
    /// indents what follows, an unbraced control-flow header indents exactly
    /// the next line, and a method-chain continuation line gets one extra
    /// unit. Blank lines pass through untouched and leave the previous-line
    /// memory alone.
    #[must_use]
    pub fn format(&self) -> String {
        let control_flow = Regex::new(CONTROL_FLOW_PATTERN).unwrap();
        let mut spaces = String::new();
        let mut previous_line = String::new();
        let mut out: Vec<String> = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            if line.is_empty() {
                out.push(String::new());
                continue;
            }
            if line.starts_with('}') || line.starts_with(']') {
                let dedented = spaces.len().saturating_sub(BASE_INDENT.len());
                spaces.truncate(dedented);
            }

            let extra = if control_flow.is_match(&previous_line) {
                BASE_INDENT
            } else {
                ""
            };
            previous_line.clone_from(line);

            let continuation = if line.starts_with('.') { BASE_INDENT } else { "" };
            let indented = format!("{spaces}{extra}{continuation}{line}");
            if indented.ends_with('{') || indented.ends_with('[') {
                spaces.push_str(BASE_INDENT);
            }
            out.push(format!("{}{indented}", self.base_offset));
        }
        out.join("\n")
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.trim()
        .split('\n')
        .map(|line| line.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn braces_indent_and_dedent() {
        let mut formatter = JsFormatter::new();
        formatter.add("if (x) {\ny();\n}");
        assert_eq!(formatter.format(), "if (x) {\n  y();\n}");
    }

    #[test]
    fn brackets_indent_and_dedent() {
        let mut formatter = JsFormatter::new();
        formatter.add("await Promise.all([\npage.waitForEvent('popup'),\n]);");
        assert_eq!(
            formatter.format(),
            "await Promise.all([\n  page.waitForEvent('popup'),\n]);"
        );
    }

    #[test]
    fn unbraced_control_flow_indents_next_line_only() {
        let mut formatter = JsFormatter::new();
        formatter.add("for (const x of xs)\nuse(x);\ndone();");
        assert_eq!(formatter.format(), "for (const x of xs)\n  use(x);\ndone();");
    }

    #[test]
    fn method_chain_continuation_indents() {
        let mut formatter = JsFormatter::new();
        formatter.add("widget\n.setLabel('ok');");
        assert_eq!(formatter.format(), "widget\n  .setLabel('ok');");
    }

    #[test]
    fn blank_lines_pass_through_unindented() {
        let mut formatter = JsFormatter::with_offset(2);
        formatter.add("a();");
        formatter.new_line();
        formatter.add("b();");
        assert_eq!(formatter.format(), "  a();\n\n  b();");
    }

    #[test]
    fn blank_line_preserves_previous_line_memory() {
        let mut formatter = JsFormatter::new();
        formatter.add("if (x) (y)");
        formatter.new_line();
        formatter.add("z();");
        // The control-flow heuristic still sees the `if` across the blank line.
        assert_eq!(formatter.format(), "if (x) (y)\n\n  z();");
    }

    #[test]
    fn base_offset_applies_to_every_nonblank_line() {
        let mut formatter = JsFormatter::with_offset(2);
        formatter.add("a();\nb();");
        assert_eq!(formatter.format(), "  a();\n  b();");
    }

    #[test]
    fn add_trims_each_line() {
        let mut formatter = JsFormatter::new();
        formatter.add("   a();   \n     b();");
        assert_eq!(formatter.format(), "a();\nb();");
    }

    #[test]
    fn prepend_inserts_before_pending_lines() {
        let mut formatter = JsFormatter::new();
        formatter.add("second();");
        formatter.prepend("first();");
        assert_eq!(formatter.format(), "first();\nsecond();");
    }

    #[test]
    fn format_is_idempotent() {
        let mut formatter = JsFormatter::new();
        formatter.add("if (x) {\ny();\n}");
        assert_eq!(formatter.format(), formatter.format());
    }
}
