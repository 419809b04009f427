//! Handler for the `init` command.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};

/// Starter configuration written by `corpwatch init`.
pub const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Write the starter config to `path`, refusing to overwrite unless `force`.
pub fn execute(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "path",
            reason: format!("{} already exists; pass --force to overwrite", path.display()),
        }
        .into());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, CONFIG_TEMPLATE)?;

    output::success(&format!("Wrote {}", path.display()));
    output::hint("add instruments under [[watchlist.entries]] or point watchlist.file at a JSON list");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::settings::Config;

    #[test]
    fn template_is_a_valid_config() {
        let config = Config::parse_toml(CONFIG_TEMPLATE).expect("template parses");
        assert!(!config.watchlist().is_empty());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "existing").expect("seed file");

        assert!(execute(&path, false).is_err());
        assert_eq!(fs::read_to_string(&path).expect("read"), "existing");

        execute(&path, true).expect("forced write");
        assert_eq!(fs::read_to_string(&path).expect("read"), CONFIG_TEMPLATE);
    }
}
