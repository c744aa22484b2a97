use std::path::PathBuf;

use anyhow::Context;
use derive_builder::Builder;

use crate::render::{LayoutOptions, LayoutOptionsBuilder};

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ServerConfig {
    /// JSON snapshot of the page data
    data_path: PathBuf,
    #[builder(default = "\"127.0.0.1\".to_string()")]
    host: String,
    #[builder(default = "8080")]
    port: u16,
    #[builder(default = "\"http://localhost:3000\".to_string()")]
    allowed_origin: String,
    #[builder(default)]
    layout: LayoutOptions,
}

impl ServerConfig {
    /// Read configuration from the environment; only `PAGE_DATA_PATH` is required.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut builder = ServerConfigBuilder::default();
        builder.data_path(get("PAGE_DATA_PATH").context("PAGE_DATA_PATH env not found")?);

        if let Some(host) = get("SERVER_HOST") {
            builder.host(host);
        }
        if let Some(port) = get("SERVER_PORT") {
            let port: u16 = port
                .parse()
                .with_context(|| format!("invalid SERVER_PORT {port}"))?;
            builder.port(port);
        }
        if let Some(origin) = get("ALLOWED_ORIGIN") {
            builder.allowed_origin(origin);
        }

        let mut layout = LayoutOptionsBuilder::default();
        if let Some(title) = get("SITE_TITLE") {
            layout.site_title(title);
        }
        if let Some(stylesheet) = get("STYLESHEET_URL") {
            layout.stylesheet(stylesheet);
        }
        builder.layout(layout.build()?);

        Ok(builder.build()?)
    }

    pub fn data_path(&self) -> &PathBuf {
        &self.data_path
    }

    pub fn addr(&self) -> (&str, u16) {
        (&self.host, self.port)
    }

    pub fn allowed_origin(&self) -> &str {
        &self.allowed_origin
    }

    pub fn layout(&self) -> &LayoutOptions {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| env.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("PAGE_DATA_PATH", "site.json")])).unwrap();
        assert_eq!(config.data_path(), &PathBuf::from("site.json"));
        assert_eq!(config.addr(), ("127.0.0.1", 8080));
        assert_eq!(config.allowed_origin(), "http://localhost:3000");
        assert_eq!(config.layout().site_title, "Restaurant App");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PAGE_DATA_PATH", "/srv/data.json"),
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "9000"),
            ("SITE_TITLE", "Food Guide"),
            ("STYLESHEET_URL", "/static/site.css"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), ("0.0.0.0", 9000));
        assert_eq!(config.layout().site_title, "Food Guide");
        assert_eq!(config.layout().stylesheet, "/static/site.css");
    }

    #[test]
    fn test_invalid_config() {
        assert!(ServerConfig::from_lookup(lookup(&[])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[
            ("PAGE_DATA_PATH", "site.json"),
            ("SERVER_PORT", "eighty"),
        ]))
        .is_err());
    }
}
