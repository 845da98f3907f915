//! Staticmd - converts a tree of markdown documents into static HTML pages.
//!
//! This binary provides the CLI interface to the staticmd libraries.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::io::Write;

use staticmd_config::Config;
use staticmd_core::Result;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("Staticmd v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    debug!("Effective config: {:?}", config);

    let report = staticmd_site::build_site(&config)?;
    info!(
        "Generated {} pages and copied {} static files into {}",
        report.pages,
        report.static_files,
        config.site.output.display()
    );
    Ok(())
}

/// Load configuration, then apply command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_with_override(cli.config.as_deref())?;
    apply_overrides(&mut config, cli);
    Ok(config)
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ref base_path) = cli.base_path {
        config.site.base_path = base_path.clone();
    }
    if let Some(ref content) = cli.content {
        config.site.content = content.clone();
    }
    if let Some(ref static_dir) = cli.static_dir {
        config.site.static_dir = static_dir.clone();
    }
    if let Some(ref output) = cli.output {
        config.site.output = output.clone();
    }
    if let Some(ref template) = cli.template {
        config.site.template = template.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_apply_overrides() {
        let cli = Cli::parse_from(["staticmd", "/repo/", "--output", "public"]);
        let mut config = Config::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config.site.base_path, "/repo/");
        assert_eq!(config.site.output, PathBuf::from("public"));
        assert_eq!(config.site.content, PathBuf::from("content"));
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let cli = Cli::parse_from(["staticmd"]);
        let mut config = Config::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config, Config::default());
    }
}
