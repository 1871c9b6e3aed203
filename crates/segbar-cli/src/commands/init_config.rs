use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

use segbar_core::AppConfig;

pub async fn run(path: &Path, force: bool) -> Result<()> {
    write_default(path, force)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

fn write_default(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists.\nUse --force to overwrite it.",
            path.display()
        );
    }

    AppConfig::default().save_to(path)?;
    info!("Saved default configuration to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_loadable_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        write_default(&path, false).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.control.segments.len(), 4);
        assert_eq!(loaded.keymap.first, "gg");
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[control]\ninitial_index = 1\n").unwrap();

        assert!(write_default(&path, false).is_err());
        let kept = AppConfig::load_from(&path).unwrap();
        assert_eq!(kept.control.initial_index, 1);

        write_default(&path, true).unwrap();
        let replaced = AppConfig::load_from(&path).unwrap();
        assert_eq!(replaced.control.initial_index, 0);
    }
}
