//! Config loading shared by the CLI handlers.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::settings::Config;

/// Load and validate the config at `path`, hinting at `init` when it is missing.
pub fn load(path: &Path) -> Result<Config> {
    match Config::load(path) {
        Err(Error::Config(ConfigError::ReadFile(e))) if e.kind() == std::io::ErrorKind::NotFound => {
            output::hint(&format!(
                "no config at {}; run `corpwatch init` to create one",
                path.display()
            ));
            Err(ConfigError::ReadFile(e).into())
        }
        other => other,
    }
}
