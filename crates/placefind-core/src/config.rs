//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars.
//! Provides helpers to expand `~` and `${VAR}` and to resolve relative paths
//! against a known base directory.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::types::TypePriority;

/// Knobs for the search facade. The ranking functions themselves take plain
/// parameters and never read these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Normalized queries shorter than this return nothing.
    pub min_query_chars: usize,
    /// Cap while the user is typing in a picker.
    pub interactive_limit: usize,
    /// Cap on the dedicated search screen.
    pub screen_limit: usize,
    pub popular_limit: usize,
    pub priority: TypePriority,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            min_query_chars: 2,
            interactive_limit: 15,
            screen_limit: 20,
            popular_limit: 10,
            priority: TypePriority::CityFirst,
        }
    }
}

impl SearchSettings {
    pub fn validate(&self) -> Result<(), Error> {
        if self.min_query_chars == 0 {
            return Err(Error::InvalidConfig(
                "search.min_query_chars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self::from_figment(figment);
        config.validate_for_env(&env_name)?;
        Ok(config)
    }

    pub fn from_figment(figment: Figment) -> Self {
        Self { figment }
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// The `[search]` table layered over `SearchSettings::default()`.
    pub fn search_settings(&self) -> anyhow::Result<SearchSettings> {
        let defaults = Serialized::defaults(SearchSettings::default());
        let settings: SearchSettings = Figment::from(defaults)
            .merge(self.figment.focus("search"))
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to read search settings: {}", e))?;
        settings.validate()?;
        Ok(settings)
    }

    /// `data.locations_file`, expanded and resolved against the working directory.
    pub fn locations_file(&self) -> anyhow::Result<PathBuf> {
        let raw: String = self.get("data.locations_file")?;
        let base = env::current_dir()?;
        Ok(resolve_with_base(&base, raw))
    }

    fn validate_for_env(&self, env: &str) -> anyhow::Result<()> {
        let is_prod = matches!(env, "prod" | "production");
        if is_prod && self.get::<String>("data.locations_file").is_err() {
            anyhow::bail!(Error::InvalidConfig(
                "data.locations_file is required in production".to_string()
            ));
        }
        self.search_settings().map(|_| ())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
