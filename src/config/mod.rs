use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding record files, `users.txt`, `reminders.txt` and the log.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Where `sleep_data.csv` / `weight_data.csv` are written.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    /// Program used to chart exported CSV files.
    #[serde(default = "default_renderer")]
    pub renderer: String,
    #[serde(default = "default_users_file")]
    pub users_file: String,
    #[serde(default = "default_reminders_file")]
    pub reminders_file: String,
}

fn default_data_dir() -> String {
    Config::config_dir()
        .join("data")
        .to_string_lossy()
        .to_string()
}
fn default_export_dir() -> String {
    ".".to_string()
}
fn default_renderer() -> String {
    "gnuplot".to_string()
}
fn default_users_file() -> String {
    "users.txt".to_string()
}
fn default_reminders_file() -> String {
    "reminders.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            export_dir: default_export_dir(),
            renderer: default_renderer(),
            users_file: default_users_file(),
            reminders_file: default_reminders_file(),
        }
    }
}

impl Config {
    /// `~/.healthdash` (falls back to the working directory without a home).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".healthdash")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("healthdash.conf")
    }

    /// Load the configuration file, or defaults if there is none.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("cannot parse {}: {e}", path.display()))
        })
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn export_path(&self) -> PathBuf {
        expand_tilde(&self.export_dir)
    }

    /// Relative file names live inside the data directory.
    pub fn users_path(&self) -> PathBuf {
        self.in_data_dir(&self.users_file)
    }

    pub fn reminders_path(&self) -> PathBuf {
        self.in_data_dir(&self.reminders_file)
    }

    fn in_data_dir(&self, name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            self.data_path().join(p)
        }
    }

    /// Create the config directory, the config file (unless `is_test`) and
    /// the data directory.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;

        if !is_test {
            self.save_to(&Self::config_file())?;
        }

        fs::create_dir_all(self.data_path())?;
        Ok(())
    }
}
