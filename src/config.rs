// config.rs
use crate::data::DataSource;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Where the dashboard dataset lives unless overridden.
pub const DEFAULT_DATA_URL: &str =
    "https://drive.google.com/uc?export=download&id=https://limewire.com/d/WmWYP#lscaC0eejP";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub workers: usize,
    pub data_url: String,
    /// Local CSV used instead of `data_url` when set.
    pub data_file: Option<PathBuf>,
    pub fetch_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            workers: 8,
            data_url: DEFAULT_DATA_URL.to_string(),
            data_file: None,
            fetch_timeout: Duration::from_secs(120),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_vars(std::env::vars().collect())
    }

    /// Builds the config from a set of `RENT_DASH_*` variables, falling back
    /// to defaults for anything unset or empty.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, String> {
        let get = |key: &str| vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());
        let mut config = AppConfig::default();

        if let Some(addr) = get("RENT_DASH_ADDR") {
            config.addr = addr
                .parse()
                .map_err(|e| format!("RENT_DASH_ADDR '{addr}' is not a socket address: {e}"))?;
        }

        if let Some(workers) = get("RENT_DASH_WORKERS") {
            config.workers = workers
                .parse()
                .ok()
                .filter(|n: &usize| *n > 0)
                .ok_or_else(|| format!("RENT_DASH_WORKERS '{workers}' must be a positive integer"))?;
        }

        if let Some(url) = get("RENT_DASH_DATA_URL") {
            config.data_url = url.to_string();
        }

        config.data_file = get("RENT_DASH_DATA_FILE").map(PathBuf::from);

        if let Some(secs) = get("RENT_DASH_FETCH_TIMEOUT") {
            let secs: u64 = secs
                .parse()
                .map_err(|_| format!("RENT_DASH_FETCH_TIMEOUT '{secs}' must be a number of seconds"))?;
            config.fetch_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn data_source(&self) -> DataSource {
        match &self.data_file {
            Some(path) => DataSource::File(path.clone()),
            None => DataSource::Http {
                url: self.data_url.clone(),
                timeout: self.fetch_timeout,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_vars(HashMap::new()).unwrap();

        assert_eq!(config.addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.workers, 8);
        assert!(matches!(config.data_source(), DataSource::Http { ref url, .. } if url == DEFAULT_DATA_URL));
    }

    #[test]
    fn data_file_overrides_url() {
        let config = AppConfig::from_vars(vars(&[
            ("RENT_DASH_DATA_URL", "https://example.com/rent.csv"),
            ("RENT_DASH_DATA_FILE", "/tmp/immo.csv"),
            ("RENT_DASH_ADDR", "0.0.0.0:8080"),
            ("RENT_DASH_FETCH_TIMEOUT", "5"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.fetch_timeout, Duration::from_secs(5));
        assert!(matches!(config.data_source(), DataSource::File(p) if p == PathBuf::from("/tmp/immo.csv")));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(AppConfig::from_vars(vars(&[("RENT_DASH_ADDR", "localhost")])).is_err());
        assert!(AppConfig::from_vars(vars(&[("RENT_DASH_WORKERS", "0")])).is_err());
        assert!(AppConfig::from_vars(vars(&[("RENT_DASH_FETCH_TIMEOUT", "soon")])).is_err());
    }
}
