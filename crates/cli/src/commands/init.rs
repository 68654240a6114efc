use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::debug;
use tslint_runner_core::TsLintOptions;
use tslint_runner_core::config::CONFIG_FILE_NAMES;

/// Options written by `init`: machine-readable output over the whole project.
pub fn default_options() -> TsLintOptions {
    TsLintOptions::new()
        .with_config_file("tslint.json")
        .with_format("json")
        .with_exclude(vec!["node_modules/**"])
}

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let dir = match cwd {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    if !dir.is_dir() {
        anyhow::bail!("Directory does not exist: {}", dir.display());
    }

    let config_path = dir.join(CONFIG_FILE_NAMES[0]);
    debug!("Options file path: {}", config_path.display());

    if config_path.exists() && !force {
        println!("❌ Options file already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    default_options()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("✅ Created options file: {}", config_path.display());
    println!("\n📌 Add the files to lint under \"paths\" or pass them on the command line");
    Ok(())
}
