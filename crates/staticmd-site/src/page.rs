//! Page generation.
//!
//! Each markdown file becomes one HTML page: the document is converted,
//! its first level-1 heading becomes the title, and both are filled into
//! the shared template.

use crate::copy::sorted_entries;
use crate::template::Template;
use log::{debug, error};
use staticmd_core::Result;
use staticmd_html::{convert_document, extract_title};
use std::fs;
use std::path::Path;

/// Convert one markdown file into an HTML page at `dest`.
///
/// The destination's parent directory is created if needed. Nothing is
/// written when conversion or title extraction fails.
pub fn generate_page(from: &Path, template: &Template, dest: &Path, base_path: &str) -> Result<()> {
    debug!("Generating page from {} to {}", from.display(), dest.display());

    let markdown = fs::read_to_string(from)?;
    let content = convert_document(&markdown)?;
    let title = extract_title(&markdown)?;
    let page = template.render(&title, &content, base_path);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, page)?;
    Ok(())
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// Generate a page for every markdown file under `content_dir`.
///
/// The directory structure is mirrored under `dest_dir`, with `name.md`
/// becoming `name.html`. Files that are not markdown are skipped. Returns
/// the number of pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Template,
    dest_dir: &Path,
    base_path: &str,
) -> Result<usize> {
    debug!(
        "Generating pages from {} into {}",
        content_dir.display(),
        dest_dir.display()
    );

    let mut generated = 0;
    for path in sorted_entries(content_dir)? {
        let Some(name) = path.file_name() else {
            continue;
        };

        if path.is_dir() {
            generated += generate_pages_recursive(&path, template, &dest_dir.join(name), base_path)?;
        } else if is_markdown(&path) {
            let dest = dest_dir.join(name).with_extension("html");
            if let Err(e) = generate_page(&path, template, &dest, base_path) {
                error!("Failed to generate {}: {}", path.display(), e);
                return Err(e);
            }
            generated += 1;
        } else {
            debug!("Skipping non-markdown file {}", path.display());
        }
    }
    Ok(generated)
}
