//! Page template filling.

use staticmd_config::TemplateConfig;
use staticmd_core::{Result, StaticmdError};
use std::path::Path;

/// An HTML page template with title and content placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
    placeholders: TemplateConfig,
}

impl Template {
    /// Create a template from its text.
    ///
    /// Fails with [`StaticmdError::Template`] if the content placeholder
    /// does not appear in `text`. The title placeholder is optional.
    pub fn new(text: impl Into<String>, placeholders: TemplateConfig) -> Result<Self> {
        let text = text.into();
        if !text.contains(&placeholders.content) {
            return Err(StaticmdError::Template(format!(
                "template has no {} placeholder",
                placeholders.content
            )));
        }
        Ok(Self { text, placeholders })
    }

    /// Read a template file.
    pub fn load(path: &Path, placeholders: TemplateConfig) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::new(text, placeholders).map_err(|e| match e {
            StaticmdError::Template(msg) => {
                StaticmdError::Template(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Fill in a page and point root-relative links at `base_path`.
    ///
    /// Every `src="/` and `href="/` in the result, whether from the
    /// template or from the page content, is rewritten to start with
    /// `base_path` instead of `/`.
    pub fn render(&self, title: &str, content: &str, base_path: &str) -> String {
        self.fill(title, content)
            .replace("src=\"/", &format!("src=\"{}", base_path))
            .replace("href=\"/", &format!("href=\"{}", base_path))
    }

    /// Substitute both placeholders in one left-to-right pass, so text
    /// inserted for one is never searched for the other.
    fn fill(&self, title: &str, content: &str) -> String {
        let fills = [
            (self.placeholders.title.as_str(), title),
            (self.placeholders.content.as_str(), content),
        ];
        let mut out = String::with_capacity(self.text.len() + title.len() + content.len());
        let mut rest = self.text.as_str();

        loop {
            let next = fills
                .iter()
                .filter(|(placeholder, _)| !placeholder.is_empty())
                .filter_map(|&(placeholder, value)| {
                    rest.find(placeholder).map(|at| (at, placeholder, value))
                })
                .min_by_key(|&(at, _, _)| at);

            match next {
                Some((at, placeholder, value)) => {
                    out.push_str(&rest[..at]);
                    out.push_str(value);
                    rest = &rest[at + placeholder.len()..];
                }
                None => {
                    out.push_str(rest);
                    return out;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<title>{{ Title }}</title><link href=\"/index.css\"><body>{{ Content }}</body>";

    #[test]
    fn test_render() {
        let template = Template::new(PAGE, TemplateConfig::default()).unwrap();
        assert_eq!(
            template.render("Home", "<div><p>hi</p></div>", "/"),
            "<title>Home</title><link href=\"/index.css\"><body><div><p>hi</p></div></body>"
        );
    }

    #[test]
    fn test_render_rewrites_base_path() {
        let template = Template::new(PAGE, TemplateConfig::default()).unwrap();
        let html = template.render(
            "Home",
            "<div><img src=\"/images/a.png\" alt=\"a\"><a href=\"/blog\">b</a><a href=\"https://x.dev\">x</a></div>",
            "/site/",
        );
        assert!(html.contains("<link href=\"/site/index.css\">"));
        assert!(html.contains("src=\"/site/images/a.png\""));
        assert!(html.contains("href=\"/site/blog\""));
        assert!(html.contains("href=\"https://x.dev\""));
    }

    #[test]
    fn test_custom_placeholders() {
        let placeholders = TemplateConfig {
            title: "%T%".to_string(),
            content: "%C%".to_string(),
        };
        let template = Template::new("<h1>%T%</h1>%C%", placeholders).unwrap();
        assert_eq!(template.render("A", "B", "/"), "<h1>A</h1>B");
    }

    #[test]
    fn test_missing_content_placeholder() {
        let err = Template::new("<title>{{ Title }}</title>", TemplateConfig::default()).unwrap_err();
        assert!(matches!(err, StaticmdError::Template(_)));
    }

    #[test]
    fn test_title_containing_content_placeholder() {
        let template = Template::new(PAGE, TemplateConfig::default()).unwrap();
        let html = template.render("About {{ Content }}", "<div>body</div>", "/");
        assert_eq!(
            html,
            "<title>About {{ Content }}</title><link href=\"/index.css\"><body><div>body</div></body>"
        );
    }

    #[test]
    fn test_content_containing_title_placeholder() {
        let template = Template::new(PAGE, TemplateConfig::default()).unwrap();
        let html = template.render("Home", "<p>{{ Title }}</p>", "/");
        assert!(html.ends_with("<body><p>{{ Title }}</p></body>"));
    }

    #[test]
    fn test_repeated_placeholders() {
        let template = Template::new("{{ Title }}|{{ Content }}|{{ Title }}", TemplateConfig::default()).unwrap();
        assert_eq!(template.render("T", "C", "/"), "T|C|T");
    }
}
