//! Staticmd Site
//!
//! Turns a content tree of markdown files into a directory of HTML pages:
//! the output directory is cleared, static files are copied in, and each
//! markdown file is rendered through the page template.
//!
//! # Example
//!
//! ```no_run
//! use staticmd_config::Config;
//! use staticmd_site::build_site;
//!
//! let report = build_site(&Config::default()).unwrap();
//! println!("{} pages, {} static files", report.pages, report.static_files);
//! ```

pub mod copy;
pub mod page;
pub mod template;

pub use copy::copy_dir_recursive;
pub use page::{generate_page, generate_pages_recursive};
pub use template::Template;

use log::{info, warn};
use staticmd_config::Config;
use staticmd_config::SiteConfig;
use staticmd_core::{Result, StaticmdError};
use std::fs;

/// Counts from a finished site build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// HTML pages written
    pub pages: usize,
    /// Static files copied
    pub static_files: usize,
}

/// Build the whole site described by `config`.
///
/// A missing static directory is skipped with a warning; a missing content
/// directory or template is an error.
pub fn build_site(config: &Config) -> Result<BuildReport> {
    let site = &config.site;

    if site.output.exists() {
        ensure_output_holds_no_sources(site)?;
        info!("Deleting output directory {}", site.output.display());
        fs::remove_dir_all(&site.output)?;
    }

    let static_files = if site.static_dir.is_dir() {
        info!(
            "Copying static files from {} to {}",
            site.static_dir.display(),
            site.output.display()
        );
        copy_dir_recursive(&site.static_dir, &site.output)?
    } else {
        warn!(
            "Static directory {} not found, skipping",
            site.static_dir.display()
        );
        fs::create_dir_all(&site.output)?;
        0
    };

    let template = Template::load(&site.template, config.template.clone())?;
    info!(
        "Generating pages from {} using {}",
        site.content.display(),
        site.template.display()
    );
    let pages = generate_pages_recursive(&site.content, &template, &site.output, &site.base_path)?;

    Ok(BuildReport {
        pages,
        static_files,
    })
}

/// Refuse to clear an output directory that is, or contains, one of the
/// build's own inputs.
fn ensure_output_holds_no_sources(site: &SiteConfig) -> Result<()> {
    let output = fs::canonicalize(&site.output)?;
    for source in [&site.content, &site.static_dir, &site.template] {
        if !source.exists() {
            continue;
        }
        if fs::canonicalize(source)?.starts_with(&output) {
            return Err(StaticmdError::Config(format!(
                "output directory {} contains {}, refusing to delete it",
                site.output.display(),
                source.display()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(root: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.site.content = root.join("content");
        config.site.static_dir = root.join("static");
        config.site.output = root.join("docs");
        config.site.template = root.join("template.html");
        config
    }

    #[test]
    fn test_build_site() {
        let root = tempfile::tempdir().unwrap();
        let config = config_in(root.path());
        fs::create_dir_all(&config.site.content).unwrap();
        fs::create_dir_all(&config.site.static_dir).unwrap();
        fs::write(config.site.content.join("index.md"), "# Home").unwrap();
        fs::write(config.site.static_dir.join("index.css"), "p {}").unwrap();
        fs::write(&config.site.template, "{{ Title }}|{{ Content }}").unwrap();
        fs::create_dir_all(&config.site.output).unwrap();
        fs::write(config.site.output.join("stale.html"), "old").unwrap();

        let report = build_site(&config).unwrap();

        assert_eq!(report, BuildReport { pages: 1, static_files: 1 });
        assert!(!config.site.output.join("stale.html").exists());
        assert_eq!(
            fs::read_to_string(config.site.output.join("index.html")).unwrap(),
            "Home|<div><h1>Home</h1></div>"
        );
    }

    #[test]
    fn test_build_site_without_static_dir() {
        let root = tempfile::tempdir().unwrap();
        let config = config_in(root.path());
        fs::create_dir_all(&config.site.content).unwrap();
        fs::write(config.site.content.join("index.md"), "# Home").unwrap();
        fs::write(&config.site.template, "{{ Content }}").unwrap();

        let report = build_site(&config).unwrap();
        assert_eq!(report.static_files, 0);
        assert_eq!(report.pages, 1);
    }

    #[test]
    fn test_build_site_missing_template() {
        let root = tempfile::tempdir().unwrap();
        let config = config_in(root.path());
        fs::create_dir_all(&config.site.content).unwrap();
        assert!(build_site(&config).is_err());
    }

    #[test]
    fn test_build_site_refuses_output_containing_sources() {
        let root = tempfile::tempdir().unwrap();
        let mut config = config_in(root.path());
        fs::create_dir_all(&config.site.content).unwrap();
        fs::write(config.site.content.join("index.md"), "# Home").unwrap();
        fs::write(&config.site.template, "{{ Content }}").unwrap();
        config.site.output = root.path().to_path_buf();

        let err = build_site(&config).unwrap_err();
        assert!(matches!(err, StaticmdError::Config(_)));
        assert!(config.site.content.join("index.md").exists());
        assert!(config.site.template.exists());
    }

    #[test]
    fn test_build_site_refuses_output_equal_to_content() {
        let root = tempfile::tempdir().unwrap();
        let mut config = config_in(root.path());
        fs::create_dir_all(&config.site.content).unwrap();
        fs::write(config.site.content.join("index.md"), "# Home").unwrap();
        fs::write(&config.site.template, "{{ Content }}").unwrap();
        config.site.output = config.site.content.clone();

        assert!(build_site(&config).is_err());
        assert!(config.site.content.join("index.md").exists());
    }
}
