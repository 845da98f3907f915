//! Template placeholder configuration.

use serde::{Deserialize, Serialize};

/// Placeholders replaced when a page is rendered into the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateConfig {
    /// Replaced by the page title.
    /// Default: "{{ Title }}"
    #[serde(default = "default_title")]
    pub title: String,

    /// Replaced by the converted page body. Must appear in the template.
    /// Default: "{{ Content }}"
    #[serde(default = "default_content")]
    pub content: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            content: default_content(),
        }
    }
}

impl TemplateConfig {
    /// Merge an override into this config, keeping keys it leaves unset.
    pub fn merge(&mut self, other: &PartialTemplateConfig) {
        if let Some(ref title) = other.title {
            self.title = title.clone();
        }
        if let Some(ref content) = other.content {
            self.content = content.clone();
        }
    }
}

/// A `[template]` section where every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartialTemplateConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

fn default_title() -> String {
    "{{ Title }}".to_string()
}

fn default_content() -> String {
    "{{ Content }}".to_string()
}
