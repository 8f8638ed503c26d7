//! Strategy: list rendering
//!
//! Markdown or HTML, chosen at runtime or fixed by a type parameter.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Html,
}

pub trait ListStrategy {
    fn start(&self, _buf: &mut String) {}
    fn end(&self, _buf: &mut String) {}
    fn add_list_item(&self, buf: &mut String, item: &str);
}

#[derive(Debug, Default)]
pub struct MarkdownListStrategy;

impl ListStrategy for MarkdownListStrategy {
    fn add_list_item(&self, buf: &mut String, item: &str) {
        buf.push_str(&format!(" * {item}\n"));
    }
}

#[derive(Debug, Default)]
pub struct HtmlListStrategy;

impl ListStrategy for HtmlListStrategy {
    fn start(&self, buf: &mut String) {
        buf.push_str("<ul>\n");
    }

    fn end(&self, buf: &mut String) {
        buf.push_str("</ul>\n");
    }

    fn add_list_item(&self, buf: &mut String, item: &str) {
        buf.push_str(&format!("  <li>{}</li>\n", html_escape::encode_text(item)));
    }
}

fn append_list<I, S>(strategy: &dyn ListStrategy, buf: &mut String, items: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    strategy.start(buf);
    for item in items {
        strategy.add_list_item(buf, item.as_ref());
    }
    strategy.end(buf);
}

/// Text processor whose list strategy can be swapped at runtime.
pub struct TextProcessor {
    buf: String,
    strategy: Box<dyn ListStrategy>,
}

impl TextProcessor {
    pub fn new(format: OutputFormat) -> Self {
        let mut processor = Self {
            buf: String::new(),
            strategy: Box::new(MarkdownListStrategy),
        };
        processor.set_output_format(format);
        processor
    }

    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.strategy = match format {
            OutputFormat::Markdown => Box::new(MarkdownListStrategy),
            OutputFormat::Html => Box::new(HtmlListStrategy),
        };
        tracing::debug!("Output format set to {:?}", format);
    }

    pub fn append_list<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        append_list(self.strategy.as_ref(), &mut self.buf, items);
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl fmt::Display for TextProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

/// Same processor with the strategy fixed by a type parameter.
#[derive(Default)]
pub struct StaticTextProcessor<L: ListStrategy + Default> {
    buf: String,
    strategy: L,
}

impl<L: ListStrategy + Default> StaticTextProcessor<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_list<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        append_list(&self.strategy, &mut self.buf, items);
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl<L: ListStrategy + Default> fmt::Display for StaticTextProcessor<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let items = ["foo", "bar", "baz"];

    let mut tp = TextProcessor::new(OutputFormat::Markdown);
    tp.append_list(items);
    writeln!(out, "{tp}")?;

    tp.clear();
    tp.set_output_format(OutputFormat::Html);
    tp.append_list(items);
    writeln!(out, "{tp}")?;

    let mut fixed = StaticTextProcessor::<HtmlListStrategy>::new();
    fixed.append_list(["fish & chips"]);
    writeln!(out, "{fixed}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown() {
        let mut tp = TextProcessor::new(OutputFormat::Markdown);
        tp.append_list(["foo", "bar"]);
        assert_eq!(tp.to_string(), " * foo\n * bar\n");
    }

    #[test]
    fn test_switch_to_html_after_clear() {
        let mut tp = TextProcessor::new(OutputFormat::Markdown);
        tp.append_list(["foo"]);
        tp.clear();
        tp.set_output_format(OutputFormat::Html);
        tp.append_list(vec!["foo".to_string(), "bar".to_string()]);
        assert_eq!(tp.to_string(), "<ul>\n  <li>foo</li>\n  <li>bar</li>\n</ul>\n");
    }

    #[test]
    fn test_html_items_are_escaped() {
        let mut tp = StaticTextProcessor::<HtmlListStrategy>::new();
        tp.append_list(["<b>bold</b>"]);
        assert_eq!(tp.to_string(), "<ul>\n  <li>&lt;b&gt;bold&lt;/b&gt;</li>\n</ul>\n");
    }

    #[test]
    fn test_empty_list_keeps_frame() {
        let mut tp = StaticTextProcessor::<HtmlListStrategy>::new();
        tp.append_list(Vec::<&str>::new());
        assert_eq!(tp.to_string(), "<ul>\n</ul>\n");

        let mut md = StaticTextProcessor::<MarkdownListStrategy>::new();
        md.append_list(Vec::<&str>::new());
        assert_eq!(md.to_string(), "");
    }
}
