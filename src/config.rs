use serde::Deserialize;
use std::collections::BTreeMap;

const DEFAULTS: &str = include_str!("../config/default.toml");

/// Utility class token to style declaration fragment.
pub type TokenTable = BTreeMap<String, String>;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rewrite: RewriteConfig,
    #[serde(default)]
    pub tokens: TokenTable,
}

#[derive(Debug, Deserialize)]
pub struct RewriteConfig {
    /// Width and height given to every icon component matched by shape.
    pub icon_size: String,
    /// Rem per step of a `space-y-N` form class.
    pub spacing_scale: f64,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            icon_size: "1rem".to_string(),
            spacing_scale: 0.25,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse built-in rewrite data: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parses the rewrite data compiled into the binary.
pub fn load_defaults() -> Result<Config, ConfigError> {
    parse_raw(DEFAULTS)
}

pub fn parse_raw(raw: &str) -> Result<Config, ConfigError> {
    let cfg: Config = toml::from_str(raw)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::{load_defaults, parse_raw};

    #[test]
    fn defaults_parse() {
        let cfg = load_defaults().unwrap();
        assert_eq!(cfg.rewrite.icon_size, "1rem");
        assert_eq!(cfg.rewrite.spacing_scale, 0.25);
        assert_eq!(cfg.tokens.len(), 42);
    }

    #[test]
    fn defaults_cover_every_family() {
        let cfg = load_defaults().unwrap();
        let lookup = |token: &str| cfg.tokens.get(token).map(String::as_str);
        assert_eq!(lookup("flex"), Some(r#"display: "flex""#));
        assert_eq!(lookup("gap-6"), Some("gap: 6"));
        assert_eq!(
            lookup("space-y-4"),
            Some(r#"display: "flex", flexDirection: "column", gap: 4"#)
        );
        assert_eq!(lookup("max-w-md"), Some(r#"maxWidth: "28rem""#));
        assert_eq!(lookup("mr-2"), Some(r#"marginRight: "0.5rem""#));
        assert_eq!(
            lookup("font-bold"),
            Some("fontWeight: theme => theme.typography.fontWeightBold")
        );
        assert_eq!(lookup("gap-5"), None);
        assert_eq!(lookup("space-y-5"), None);
    }

    #[test]
    fn missing_sections_fall_back() {
        let cfg = parse_raw("").unwrap();
        assert!(cfg.tokens.is_empty());
        assert_eq!(cfg.rewrite.spacing_scale, 0.25);
    }

    #[test]
    fn malformed_data_is_rejected() {
        assert!(parse_raw("[tokens\nflex = ").is_err());
    }
}
