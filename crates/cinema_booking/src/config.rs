use crate::{
    error::{BookingError, Result},
    venue::VenueSpec,
};
use serde::Deserialize;
use std::{
    env,
    path::{Path, PathBuf},
};

pub const ENV_VENUE: &str = "CINEMA_VENUE";
pub const ENV_REPORT_DIR: &str = "CINEMA_REPORT_DIR";

/// Runtime settings. Every field is optional; an unset venue means the shell
/// asks the operator for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub venue: Option<VenueSpec>,
    pub report_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Config {
    /// Reads a TOML config file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BookingError::ReadConfig {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| BookingError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Overrides fields from `CINEMA_VENUE` / `CINEMA_REPORT_DIR`.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(line) = lookup(ENV_VENUE)
            && !line.trim().is_empty()
        {
            let spec = VenueSpec::parse(&line).map_err(|e| {
                BookingError::InvalidConfiguration(format!("{ENV_VENUE}: {e}"))
            })?;
            self.venue = Some(spec);
        }

        if let Some(dir) = lookup(ENV_REPORT_DIR)
            && !dir.trim().is_empty()
        {
            self.report_dir = Some(PathBuf::from(dir));
        }

        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(venue) = &self.venue {
            venue
                .validate()
                .map_err(|e| BookingError::InvalidConfiguration(format!("venue: {e}")))?;
        }

        // If the path already exists but is not a directory, reject early.
        if let Some(dir) = &self.report_dir
            && dir.exists()
            && !dir.is_dir()
        {
            return Err(BookingError::InvalidConfiguration(format!(
                "Report path is not a directory: {}",
                dir.display()
            )));
        }
        Ok(())
    }
}
