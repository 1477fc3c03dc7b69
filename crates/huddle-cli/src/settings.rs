//! Layered configuration: defaults, then an optional TOML file, then
//! `HUDDLE_*` environment variables. Command-line flags are applied on top
//! by the caller.

use std::path::Path;

use anyhow::Context as _;
use huddle_client::ApiConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
  pub base_url:     String,
  pub token:        String,
  pub timeout_secs: u64,
  /// Company slug prefixed to every rendered path.
  pub company:      String,
}

impl Default for Settings {
  fn default() -> Self {
    let api = ApiConfig::default();
    Self {
      base_url:     api.base_url,
      token:        api.token,
      timeout_secs: api.timeout_secs,
      company:      "company".to_string(),
    }
  }
}

impl Settings {
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    Self::load_with_env(path, config::Environment::with_prefix("HUDDLE"))
  }

  fn load_with_env(path: &Path, env: config::Environment) -> anyhow::Result<Self> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(env)
      .build()
      .with_context(|| format!("failed to read config file {}", path.display()))?
      .try_deserialize()
      .context("failed to deserialise settings")
  }

  pub fn api(&self) -> ApiConfig {
    ApiConfig {
      base_url:     self.base_url.clone(),
      token:        self.token.clone(),
      timeout_secs: self.timeout_secs,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn env(vars: &[(&str, &str)]) -> config::Environment {
    let vars = vars
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect::<config::Map<_, _>>();
    config::Environment::with_prefix("HUDDLE").source(Some(vars))
  }

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let settings = Settings::load_with_env(Path::new("does-not-exist.toml"), env(&[])).unwrap();
    assert_eq!(settings.timeout_secs, 30);
    assert_eq!(settings.base_url, ApiConfig::default().base_url);
    assert_eq!(settings.company, "company");
  }

  #[test]
  fn environment_overrides_defaults() {
    let settings = Settings::load_with_env(
      Path::new("does-not-exist.toml"),
      env(&[("HUDDLE_COMPANY", "acme"), ("HUDDLE_TIMEOUT_SECS", "5")]),
    )
    .unwrap();
    assert_eq!(settings.company, "acme");
    assert_eq!(settings.timeout_secs, 5);
  }
}
