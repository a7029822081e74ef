//! Client configuration (environment-driven).

use std::path::PathBuf;

use taskprime_core::ClientId;

use crate::source::FileSource;

pub const DEFAULT_API_URL: &str = "https://taskprime.app/api";
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL endpoint paths are resolved against.
    pub api_url: String,
    /// Directory holding saved responses for [`FileSource`].
    pub data_dir: PathBuf,
    /// Client id reports are scoped by.
    pub client_id: Option<ClientId>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            client_id: None,
        }
    }
}

impl ClientConfig {
    /// Read `TASKPRIME_API_URL`, `TASKPRIME_DATA_DIR` and `TASKPRIME_CLIENT_ID`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (unset and blank values use defaults).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let api_url = var("TASKPRIME_API_URL").unwrap_or_else(|| {
            tracing::debug!("TASKPRIME_API_URL not set; using {}", DEFAULT_API_URL);
            defaults.api_url
        });
        let data_dir = var("TASKPRIME_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let client_id = var("TASKPRIME_CLIENT_ID").and_then(|raw| match raw.parse::<ClientId>() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring TASKPRIME_CLIENT_ID");
                None
            }
        });

        Self { api_url, data_dir, client_id }
    }

    pub fn file_source(&self) -> FileSource {
        FileSource::new(self.data_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_variables_fall_back_to_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[("TASKPRIME_DATA_DIR", "  ")]));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("TASKPRIME_API_URL", "http://localhost:8000/api"),
            ("TASKPRIME_DATA_DIR", "/var/lib/taskprime"),
            ("TASKPRIME_CLIENT_ID", "SYSMAC"),
        ]));
        assert_eq!(config.api_url, "http://localhost:8000/api");
        assert_eq!(config.file_source().root(), std::path::Path::new("/var/lib/taskprime"));
        assert_eq!(config.client_id.map(|c| c.to_string()).as_deref(), Some("SYSMAC"));
    }
}
