//! Command-line interface for staticmd.

use clap::Parser;
use std::path::PathBuf;

/// Staticmd - converts a tree of markdown documents into static HTML pages.
///
/// Every markdown file under the content directory is rendered through a
/// shared HTML template; static files are copied alongside.
#[derive(Parser, Debug)]
#[command(
    name = "staticmd",
    author = "Staticmd Contributors",
    version,
    about = "Converts a tree of markdown documents into static HTML pages",
    after_help = "Examples:\n  \
                  staticmd\n  \
                  staticmd /my-repo/\n  \
                  staticmd --content pages --output public\n  \
                  staticmd -c custom.toml"
)]
pub struct Cli {
    /// Prefix for root-relative links (e.g. "/my-repo/")
    #[arg(value_name = "BASEPATH")]
    pub base_path: Option<String>,

    /// Directory holding the markdown sources
    #[arg(long = "content", value_name = "DIR")]
    pub content: Option<PathBuf>,

    /// Directory of static files copied into the output
    #[arg(long = "static", value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    /// Output directory (deleted and recreated)
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// HTML template file
    #[arg(short = 't', long = "template", value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "info")]
    pub log_level: String,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

/// Print the configuration file locations.
pub fn show_paths() {
    println!("Local config:    {}", staticmd_config::LOCAL_CONFIG_FILE);
    match staticmd_config::Config::config_path() {
        Some(path) => println!("Platform config: {}", path.display()),
        None => println!("Platform config: (unavailable)"),
    }
}
