//! Site layout configuration.
//!
//! This module contains the `SiteConfig` struct which holds the
//! directories and paths a site build reads from and writes to.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Site layout configuration.
///
/// Relative paths are resolved against the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SiteConfig {
    /// Directory holding the markdown sources.
    /// Default: "content"
    #[serde(default = "default_content")]
    pub content: PathBuf,

    /// Directory of static files copied verbatim into the output.
    /// Default: "static"
    #[serde(default = "default_static", rename = "Static")]
    pub static_dir: PathBuf,

    /// Output directory, deleted and recreated on every build.
    /// Default: "docs"
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// HTML template every page is rendered into.
    /// Default: "template.html"
    #[serde(default = "default_template")]
    pub template: PathBuf,

    /// Prefix substituted for root-relative `src="/` and `href="/` links.
    /// Default: "/"
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content: default_content(),
            static_dir: default_static(),
            output: default_output(),
            template: default_template(),
            base_path: default_base_path(),
        }
    }
}

impl SiteConfig {
    /// Merge an override into this config.
    ///
    /// Only keys present in `other` replace the current values.
    pub fn merge(&mut self, other: &PartialSiteConfig) {
        if let Some(ref content) = other.content {
            self.content = content.clone();
        }
        if let Some(ref static_dir) = other.static_dir {
            self.static_dir = static_dir.clone();
        }
        if let Some(ref output) = other.output {
            self.output = output.clone();
        }
        if let Some(ref template) = other.template {
            self.template = template.clone();
        }
        if let Some(ref base_path) = other.base_path {
            self.base_path = base_path.clone();
        }
    }
}

/// A `[site]` section where every key is optional, as read from an override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartialSiteConfig {
    #[serde(default)]
    pub content: Option<PathBuf>,
    #[serde(default, rename = "Static")]
    pub static_dir: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub template: Option<PathBuf>,
    #[serde(default)]
    pub base_path: Option<String>,
}

fn default_content() -> PathBuf {
    PathBuf::from("content")
}

fn default_static() -> PathBuf {
    PathBuf::from("static")
}

fn default_output() -> PathBuf {
    PathBuf::from("docs")
}

fn default_template() -> PathBuf {
    PathBuf::from("template.html")
}

fn default_base_path() -> String {
    "/".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let site = SiteConfig::default();
        assert_eq!(site.content, PathBuf::from("content"));
        assert_eq!(site.static_dir, PathBuf::from("static"));
        assert_eq!(site.output, PathBuf::from("docs"));
        assert_eq!(site.template, PathBuf::from("template.html"));
        assert_eq!(site.base_path, "/");
    }

    #[test]
    fn test_serde_pascal_case() {
        let toml_str = r#"
            Content = "pages"
            Static = "assets"
            Output = "public"
            Template = "layout.html"
            BasePath = "/blog/"
        "#;

        let site: SiteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(site.content, PathBuf::from("pages"));
        assert_eq!(site.static_dir, PathBuf::from("assets"));
        assert_eq!(site.output, PathBuf::from("public"));
        assert_eq!(site.template, PathBuf::from("layout.html"));
        assert_eq!(site.base_path, "/blog/");
    }

    #[test]
    fn test_partial_uses_defaults() {
        let site: SiteConfig = toml::from_str(r#"Output = "out""#).unwrap();
        assert_eq!(site.output, PathBuf::from("out"));
        assert_eq!(site.content, PathBuf::from("content"));
    }

    #[test]
    fn test_merge_only_set_keys() {
        let mut site = SiteConfig {
            content: PathBuf::from("pages"),
            output: PathBuf::from("public"),
            ..SiteConfig::default()
        };
        let partial: PartialSiteConfig = toml::from_str(r#"BasePath = "/x/""#).unwrap();
        assert_eq!(partial.content, None);

        site.merge(&partial);
        assert_eq!(site.content, PathBuf::from("pages"));
        assert_eq!(site.output, PathBuf::from("public"));
        assert_eq!(site.base_path, "/x/");
    }
}
