//! Builder: fluent HTML elements.

use crate::config::PatternsConfig;
use crate::error::{require_non_blank, Result};
use std::fmt;
use std::io::Write;

const INDENT_SIZE: usize = 2;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HtmlElement {
    pub name: String,
    pub text: String,
    pub elements: Vec<HtmlElement>,
}

impl HtmlElement {
    pub fn new(name: &str, text: &str) -> Self {
        Self {
            name: name.to_string(),
            text: text.to_string(),
            elements: Vec::new(),
        }
    }

    fn render(&self, buf: &mut String, indent: usize) {
        let pad = " ".repeat(INDENT_SIZE * indent);
        buf.push_str(&format!("{pad}<{}>\n", self.name));
        if !self.text.trim().is_empty() {
            buf.push_str(&" ".repeat(INDENT_SIZE * (indent + 1)));
            buf.push_str(&self.text);
            buf.push('\n');
        }
        for element in &self.elements {
            element.render(buf, indent + 1);
        }
        buf.push_str(&format!("{pad}</{}>\n", self.name));
    }
}

impl fmt::Display for HtmlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.render(&mut buf, 0);
        f.write_str(&buf)
    }
}

pub struct HtmlBuilder {
    root_name: String,
    root: HtmlElement,
}

impl HtmlBuilder {
    pub fn new(root_name: &str) -> Result<Self> {
        require_non_blank("root_name", root_name)?;
        Ok(Self {
            root_name: root_name.to_string(),
            root: HtmlElement::new(root_name, ""),
        })
    }

    /// Plain, non-chainable step.
    pub fn add_child(&mut self, name: &str, text: &str) {
        self.root.elements.push(HtmlElement::new(name, text));
    }

    pub fn add_child_fluent(&mut self, name: &str, text: &str) -> &mut Self {
        self.add_child(name, text);
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.root = HtmlElement::new(&self.root_name, "");
        self
    }

    pub fn build(&self) -> HtmlElement {
        self.root.clone()
    }
}

impl fmt::Display for HtmlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    // By hand first.
    let mut sb = String::new();
    sb.push_str("<p>hello</p>");
    writeln!(out, "{sb}")?;

    sb.clear();
    sb.push_str("<ul>");
    for word in ["hello", "world"] {
        sb.push_str(&format!("<li>{word}</li>"));
    }
    sb.push_str("</ul>");
    writeln!(out, "{sb}")?;

    let mut builder = HtmlBuilder::new("ul")?;
    builder.add_child("li", "hello");
    builder.add_child("li", "world");
    writeln!(out, "{builder}")?;

    builder
        .clear()
        .add_child_fluent("h1", "I am h1 text content!")
        .add_child_fluent("h2", "I am h2 text content!")
        .clear()
        .add_child_fluent("li", "hello")
        .add_child_fluent("li", "world");
    writeln!(out, "{builder}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_indents_children() {
        let mut builder = HtmlBuilder::new("ul").unwrap();
        builder.add_child_fluent("li", "hello").add_child_fluent("li", "world");
        assert_eq!(
            builder.to_string(),
            "<ul>\n  <li>\n    hello\n  </li>\n  <li>\n    world\n  </li>\n</ul>\n"
        );
    }

    #[test]
    fn test_clear_keeps_root_name() {
        let mut builder = HtmlBuilder::new("ol").unwrap();
        builder.add_child("li", "x");
        builder.clear();
        assert_eq!(builder.build(), HtmlElement::new("ol", ""));
        assert_eq!(builder.to_string(), "<ol>\n</ol>\n");
    }

    #[test]
    fn test_blank_text_is_skipped() {
        let element = HtmlElement::new("br", "  ");
        assert_eq!(element.to_string(), "<br>\n</br>\n");
    }

    #[test]
    fn test_blank_root_rejected() {
        assert!(HtmlBuilder::new("").is_err());
    }
}
