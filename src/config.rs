//! Client configuration: credentials and the API root.

use std::env;

use url::Url;

use crate::domain::ValidationError;

/// Production API root.
pub const DEFAULT_API_URL: &str = "https://api.smartpings.com/api/";

pub const CLIENT_ID_VAR: &str = "SMARTPINGS_CLIENT_ID";
pub const SECRET_ID_VAR: &str = "SMARTPINGS_SECRET_ID";
pub const API_URL_VAR: &str = "SMARTPINGS_API_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {var} is not set")]
    MissingVar { var: &'static str },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Clone, PartialEq, Eq)]
/// Credentials and API root for one [`SmartpingsClient`](crate::SmartpingsClient).
///
/// Credentials are passed through as-is; SmartPings is the one that rejects bad ones.
pub struct ClientConfig {
    base_url: String,
    client_id: String,
    secret_id: String,
}

impl ClientConfig {
    /// Config pointing at [`DEFAULT_API_URL`].
    pub fn new(client_id: impl Into<String>, secret_id: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_owned(),
            client_id: client_id.into(),
            secret_id: secret_id.into(),
        }
    }

    /// Override the API root. A trailing `/` is appended when missing.
    pub fn with_api_url(mut self, api_url: impl AsRef<str>) -> Result<Self, ValidationError> {
        self.base_url = normalize_base_url(api_url.as_ref())?;
        Ok(self)
    }

    /// Read `SMARTPINGS_CLIENT_ID`, `SMARTPINGS_SECRET_ID` and optionally `SMARTPINGS_API_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`ClientConfig::from_env`], but reads variables through `lookup`.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &'static str| lookup(var).filter(|value| !value.trim().is_empty());

        let client_id = read(CLIENT_ID_VAR).ok_or(ConfigError::MissingVar { var: CLIENT_ID_VAR })?;
        let secret_id = read(SECRET_ID_VAR).ok_or(ConfigError::MissingVar { var: SECRET_ID_VAR })?;

        let config = Self::new(client_id, secret_id);
        match read(API_URL_VAR) {
            Some(api_url) => Ok(config.with_api_url(api_url)?),
            None => Ok(config),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn secret_id(&self) -> &str {
        &self.secret_id
    }

    /// Resolve an endpoint path (e.g. `v1/ping/verify`) against the API root.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ValidationError> {
        let full = format!("{}{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&full).map_err(|err| ValidationError::InvalidUrl {
            input: full,
            reason: err.to_string(),
        })
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("secret_id", &"<redacted>")
            .finish()
    }
}

fn normalize_base_url(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    let url = Url::parse(trimmed).map_err(|err| ValidationError::InvalidUrl {
        input: trimmed.to_owned(),
        reason: err.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ValidationError::InvalidUrl {
            input: trimmed.to_owned(),
            reason: "URL cannot be used as a base".to_owned(),
        });
    }
    // Endpoint paths are appended to the text, so the base must end at its path.
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ValidationError::InvalidUrl {
            input: trimmed.to_owned(),
            reason: "API URL must not contain a query or fragment".to_owned(),
        });
    }

    let mut base = url.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Ok(base)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect::<HashMap<_, _>>();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn new_uses_default_api_url() {
        let config = ClientConfig::new("id", "secret");
        assert_eq!(config.base_url(), DEFAULT_API_URL);
        assert_eq!(config.client_id(), "id");
        assert_eq!(config.secret_id(), "secret");
    }

    #[test]
    fn api_url_gets_trailing_slash() {
        let config = ClientConfig::new("id", "secret")
            .with_api_url("https://example.com/api")
            .unwrap();
        assert_eq!(config.base_url(), "https://example.com/api/");

        let config = ClientConfig::new("id", "secret")
            .with_api_url("https://example.com")
            .unwrap();
        assert_eq!(config.base_url(), "https://example.com/");
    }

    #[test]
    fn api_url_rejects_garbage() {
        let err = ClientConfig::new("id", "secret")
            .with_api_url("not a url")
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUrl { .. }));

        let err = ClientConfig::new("id", "secret")
            .with_api_url("mailto:someone@example.com")
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUrl { .. }));
    }

    #[test]
    fn api_url_rejects_query_and_fragment() {
        for input in [
            "https://api.example.test/?tenant=1",
            "https://api.example.test/base?",
            "https://api.example.test/#frag",
        ] {
            let err = ClientConfig::new("id", "secret")
                .with_api_url(input)
                .unwrap_err();
            assert!(
                matches!(&err, ValidationError::InvalidUrl { reason, .. } if reason.contains("query or fragment")),
                "{input}: {err:?}"
            );
        }
    }

    #[test]
    fn endpoint_appends_path_to_base() {
        let config = ClientConfig::new("id", "secret")
            .with_api_url("https://example.com/api")
            .unwrap();
        assert_eq!(
            config.endpoint("v1/ping/verify").unwrap().as_str(),
            "https://example.com/api/v1/ping/verify"
        );
        assert_eq!(
            config.endpoint("/v1/ping/message").unwrap().as_str(),
            "https://example.com/api/v1/ping/message"
        );
    }

    #[test]
    fn from_lookup_reads_all_variables() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (CLIENT_ID_VAR, "id"),
            (SECRET_ID_VAR, "secret"),
            (API_URL_VAR, "https://staging.example.com/api"),
        ]))
        .unwrap();
        assert_eq!(config.client_id(), "id");
        assert_eq!(config.secret_id(), "secret");
        assert_eq!(config.base_url(), "https://staging.example.com/api/");
    }

    #[test]
    fn from_lookup_defaults_api_url_and_requires_credentials() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (CLIENT_ID_VAR, "id"),
            (SECRET_ID_VAR, "secret"),
            (API_URL_VAR, "  "),
        ]))
        .unwrap();
        assert_eq!(config.base_url(), DEFAULT_API_URL);

        let err = ClientConfig::from_lookup(lookup_from(&[(CLIENT_ID_VAR, "id")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingVar { var: SECRET_ID_VAR }
        ));
    }

    #[test]
    fn from_env_reads_process_environment() {
        temp_env::with_vars(
            [
                (CLIENT_ID_VAR, Some("env-id")),
                (SECRET_ID_VAR, Some("env-secret")),
                (API_URL_VAR, None),
            ],
            || {
                let config = ClientConfig::from_env().unwrap();
                assert_eq!(config.client_id(), "env-id");
                assert_eq!(config.secret_id(), "env-secret");
                assert_eq!(config.base_url(), DEFAULT_API_URL);
            },
        );

        temp_env::with_vars_unset([CLIENT_ID_VAR, SECRET_ID_VAR], || {
            let err = ClientConfig::from_env().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::MissingVar { var: CLIENT_ID_VAR }
            ));
        });
    }

    #[test]
    fn debug_redacts_secret() {
        let rendered = format!("{:?}", ClientConfig::new("id", "top-secret"));
        assert!(rendered.contains("id"));
        assert!(!rendered.contains("top-secret"));
    }
}
