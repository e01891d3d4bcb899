//! `reqd init` - write a default config and create the data dir

use crate::models::config::CONFIG_FILE;
use crate::models::ReqdConfig;
use crate::Result;
use colored::Colorize;
use std::path::Path;

pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE);
    if config_path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", CONFIG_FILE);
    }

    let config = ReqdConfig::default();
    config.save(config_path)?;
    std::fs::create_dir_all(&config.storage.data_dir)?;

    println!("{} Wrote {}", "✓".green(), CONFIG_FILE);
    println!(
        "{} Created data dir {}",
        "✓".green(),
        config.storage.data_dir.display()
    );
    println!("\nNext: set REQD_API_KEY to enable AI analysis, then run `reqd serve`");
    Ok(())
}
