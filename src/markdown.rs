use pulldown_cmark::{Options, Parser, html};

/// Markdown to HTML fragment conversion.
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> String;
}

/// Plain CommonMark via pulldown-cmark. Raw HTML blocks pass through as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommonMark;

impl MarkdownRenderer for CommonMark {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Options::empty());
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}
