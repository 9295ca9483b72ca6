use crate::error::ConfigError;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseSettings,
    pub report: ReportSettings,
}

/// The database driver, selected by the scheme of the connection URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    Postgres,
    Sqlite,
}

/// How tables are written to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Fixed-width, 25-character columns.
    #[default]
    Fixed,
    /// Box-drawn table with auto-sized columns.
    Boxed,
}

/// The connection descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub driver: Driver,
    pub host: String,
    pub port: u16,
    /// Database name for postgres, file path for sqlite.
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// A complete connection URL. When present, every other field is ignored.
    pub url: Option<String>,
}

impl DatabaseSettings {
    /// Builds the URL handed to the database driver.
    ///
    /// User name, password and database name are percent-encoded, so any
    /// character may appear in them.
    pub fn connection_url(&self) -> Result<String, ConfigError> {
        if let Some(url) = &self.url {
            return Ok(url.clone());
        }
        let name = self.name.as_deref().ok_or_else(|| {
            ConfigError::ValidationError(
                "either database.url or database.name must be set".to_string(),
            )
        })?;

        let url = match self.driver {
            Driver::Postgres => {
                let credentials = match (&self.username, &self.password) {
                    (Some(user), Some(password)) => {
                        format!("{}:{}@", encode(user), encode(password))
                    }
                    (Some(user), None) => format!("{}@", encode(user)),
                    _ => String::new(),
                };
                format!(
                    "postgres://{credentials}{}:{}/{}",
                    self.host,
                    self.port,
                    encode(name)
                )
            }
            Driver::Sqlite => format!("sqlite://{name}"),
        };
        Ok(url)
    }
}

fn encode(part: &str) -> String {
    utf8_percent_encode(part, NON_ALPHANUMERIC).to_string()
}

/// Defaults for the command-line entry point.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    /// How many countries the "top countries" report lists.
    pub top_n: u32,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        self.database.connection_url()?;
        if self.report.top_n == 0 {
            return Err(ConfigError::ValidationError(
                "report.top_n must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
