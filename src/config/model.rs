//! Configuration data model.
//!
//! All structs derive `Deserialize` and are read from the TOML config file.
//! Every field has a sensible default so the application works out of the box.

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// IBGE localities API endpoint settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base of the localities API; `estados` and `municipios` paths are
    /// appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value of the `orderBy` query parameter sent with both requests.
    #[serde(default = "default_order_by")]
    pub order_by: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            order_by: default_order_by(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Texts shown on the picker screen.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_state_placeholder")]
    pub state_placeholder: String,
    #[serde(default = "default_city_placeholder")]
    pub city_placeholder: String,
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            state_placeholder: default_state_placeholder(),
            city_placeholder: default_city_placeholder(),
            submit_label: default_submit_label(),
        }
    }
}

/// Selection behavior settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BehaviorConfig {
    /// Reset the selected city whenever the selected state changes. When
    /// `false` only the city list is cleared and the old city name stays
    /// selected until a new one is chosen.
    #[serde(default = "default_true")]
    pub reset_city_on_state_change: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            reset_city_on_state_change: true,
        }
    }
}

/// Diagnostics log settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` filter directive, overridden by `RUST_LOG` when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "https://servicodados.ibge.gov.br/api/v1/localidades".to_string()
}
fn default_order_by() -> String {
    "nome".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_title() -> String {
    "Seu marketplace de coleta de resíduos".to_string()
}
fn default_description() -> String {
    "Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente".to_string()
}
fn default_state_placeholder() -> String {
    "Selecione um Estado...".to_string()
}
fn default_city_placeholder() -> String {
    "Selecione uma Cidade...".to_string()
}
fn default_submit_label() -> String {
    "Entrar".to_string()
}
fn default_true() -> bool {
    true
}
fn default_log_dir() -> String {
    "~/.local/share/ecoleta/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.api.base_url, default_base_url());
        assert_eq!(cfg.api.order_by, "nome");
        assert_eq!(cfg.api.timeout_secs, 10);
        assert_eq!(cfg.ui.submit_label, "Entrar");
        assert!(cfg.behavior.reset_city_on_state_change);
        assert!(!cfg.logging.enabled);
    }

    #[test]
    fn test_partial_sections_keep_remaining_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [api]
            timeout_secs = 3

            [behavior]
            reset_city_on_state_change = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.api.timeout_secs, 3);
        assert_eq!(cfg.api.base_url, default_base_url());
        assert!(!cfg.behavior.reset_city_on_state_change);
        assert_eq!(cfg.ui.state_placeholder, "Selecione um Estado...");
    }
}
