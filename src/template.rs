use crate::config::Config;

/// Page-break rule appended to stylesheets that don't define one.
const PAGE_BREAK_RULE: &str = ".page-break { page-break-before: always; }";

/// Static HTML shell around the rendered Markdown
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub title: String,
    pub stylesheet: String,
}

impl Default for Template {
    fn default() -> Self {
        Self::from_config(&Config::compiled_default())
    }
}

impl Template {
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.document.title.clone(),
            stylesheet: config.stylesheet(),
        }
    }

    /// Build a complete, self-contained HTML document around `body`.
    pub fn wrap(&self, body: &str) -> String {
        let mut out = String::with_capacity(body.len() + self.stylesheet.len() + 256);

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<title>");
        out.push_str(&html_escape::encode_text(&self.title));
        out.push_str("</title>\n");

        out.push_str("<style>\n");
        out.push_str(self.stylesheet.trim_end());
        out.push('\n');
        if !self.stylesheet.contains(".page-break") {
            out.push_str(PAGE_BREAK_RULE);
            out.push('\n');
        }
        out.push_str("</style>\n</head>\n<body>\n");

        out.push_str(body);
        if !body.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("</body>\n</html>\n");

        out
    }
}
