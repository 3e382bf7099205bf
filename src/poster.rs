use crate::client::{create_http_client, Config};
use crate::error::{PinboardError, Result};
use crate::pin::Pin;
use crate::response::ApiResult;
use crate::token::{ApiToken, TokenSource};
use log::{debug, error, trace, warn};
use reqwest::blocking::Client;
use std::borrow::Cow;
use std::path::PathBuf;
use url::Url;

/// Query parameter carrying the API token
pub const AUTH_TOKEN_PARAM: &str = "auth_token";

/// Client for posting and deleting Pinboard bookmarks.
///
/// The poster holds a resolved token, the endpoint configuration and a
/// pooled HTTP client, and nothing else; every call is an independent
/// request/response round trip, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct PinboardPoster {
    /// HTTP client
    client: Client,
    /// Endpoint and timeout configuration
    config: Config,
    /// Where the token came from, kept for diagnostics
    source: TokenSource,
    /// Token resolved at construction; checked on first use
    token: Option<ApiToken>,
}

impl PinboardPoster {
    /// Create a poster with an explicit `user:TOKEN` credential
    pub fn new(token: impl Into<String>) -> Self {
        Self::from_source(TokenSource::Token(token.into()))
    }

    /// Create a poster reading the token from a properties file,
    /// falling back to the `PINBOARD_API_TOKEN` environment variable
    pub fn from_properties(path: impl Into<PathBuf>) -> Self {
        Self::from_source(TokenSource::PropertiesFile(path.into()))
    }

    /// Create a poster reading the token from the
    /// `PINBOARD_API_TOKEN` environment variable
    pub fn from_env() -> Self {
        Self::from_source(TokenSource::Environment)
    }

    /// Create a poster from any token source.
    ///
    /// The token is resolved here, once; a source that yields nothing
    /// does not fail construction, the failure surfaces on the first
    /// request.
    pub fn from_source(source: TokenSource) -> Self {
        let config = Config::default();
        let token = source.resolve();
        PinboardPoster {
            client: create_http_client(&config),
            config,
            source,
            token,
        }
    }

    /// Replace the configuration, rebuilding the HTTP client so new
    /// timeouts take effect
    pub fn with_config(mut self, config: Config) -> Self {
        self.client = create_http_client(&config);
        self.config = config;
        self
    }

    /// Override the API endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Add a bookmark.
    ///
    /// Returns `true` when the API reports `done`. Every failure
    /// (missing token, invalid fields, network trouble, an API error)
    /// is logged and answered with `false`; nothing is propagated.
    pub fn add_pin(&self, pin: &Pin) -> bool {
        match self.try_add_pin(pin) {
            Ok(()) => true,
            Err(err) => {
                log_failure("posts/add", &err);
                false
            }
        }
    }

    /// Add a bookmark, reporting the failure kind on error
    pub fn try_add_pin(&self, pin: &Pin) -> Result<()> {
        let token = self.checked_token()?;
        validate_bookmark_url(&pin.url)?;
        if pin.description.trim().is_empty() {
            return Err(PinboardError::validation(
                "please specify a valid description",
            ));
        }

        let mut url = self.method_url("posts/add")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("url", &pin.url);
            query.append_pair("description", &pin.description);
            if let Some(extended) = pin.extended.as_deref() {
                query.append_pair("extended", extended);
            }
            if !pin.tags.is_empty() {
                query.append_pair("tags", &pin.tags_param());
            }
            if let Some(dt) = &pin.dt {
                query.append_pair("dt", &dt.to_api_format());
            }
            query.append_pair("replace", yes_no(pin.replace));
            query.append_pair("shared", yes_no(pin.shared));
            query.append_pair("toread", yes_no(pin.toread));
            query.append_pair(AUTH_TOKEN_PARAM, token.as_str());
        }

        self.execute(url)
    }

    /// Delete the bookmark with the given URL.
    ///
    /// Same contract as [`add_pin`](Self::add_pin): `true` on `done`,
    /// `false` plus a log record on any failure.
    pub fn delete_pin(&self, url: &str) -> bool {
        match self.try_delete_pin(url) {
            Ok(()) => true,
            Err(err) => {
                log_failure("posts/delete", &err);
                false
            }
        }
    }

    /// Delete a bookmark, reporting the failure kind on error
    pub fn try_delete_pin(&self, url: &str) -> Result<()> {
        let token = self.checked_token()?;
        validate_bookmark_url(url)?;

        let mut api_url = self.method_url("posts/delete")?;
        {
            let mut query = api_url.query_pairs_mut();
            query.append_pair("url", url);
            query.append_pair(AUTH_TOKEN_PARAM, token.as_str());
        }

        self.execute(api_url)
    }

    /// The resolved token, or the configuration error deferred from
    /// construction
    fn checked_token(&self) -> Result<&ApiToken> {
        let token = self.token.as_ref().ok_or_else(|| {
            PinboardError::config(format!(
                "no API token available from {}",
                self.source.describe()
            ))
        })?;
        if !token.is_well_formed() {
            return Err(PinboardError::config(format!(
                "malformed API token {} (expected user:TOKEN)",
                token.redacted()
            )));
        }
        Ok(token)
    }

    /// Build the URL for an API method under the configured endpoint
    fn method_url(&self, method: &str) -> Result<Url> {
        let base = Url::parse(&self.config.endpoint_base()).map_err(|err| {
            PinboardError::config(format!(
                "invalid API endpoint {}: {err}",
                self.config.endpoint
            ))
        })?;
        Ok(base.join(method)?)
    }

    /// One GET round trip: transport errors, non-2xx statuses and
    /// non-`done` result codes all come back as typed errors
    fn execute(&self, url: Url) -> Result<()> {
        debug!("GET {}", redact_auth_token(&url));

        let response = self.client.get(url).send()?;
        let status = response.status();
        let body = response.text()?;

        trace!("HTTP {}: {}", status.as_u16(), body.trim_end());

        if !status.is_success() {
            return Err(PinboardError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let result = ApiResult::parse(&body)?;
        if result.is_done() {
            Ok(())
        } else {
            Err(PinboardError::Api { code: result.code })
        }
    }
}

impl Default for PinboardPoster {
    fn default() -> Self {
        Self::from_env()
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// A bookmark URL must be non-blank and parse as an absolute URL
fn validate_bookmark_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(PinboardError::validation("please specify a URL to pin"));
    }
    if let Err(err) = Url::parse(url) {
        return Err(PinboardError::validation(format!(
            "invalid URL {url}: {err}"
        )));
    }
    Ok(())
}

/// Copy of the request URL with the token value masked, for logging
fn redact_auth_token(url: &Url) -> Url {
    let mut redacted = url.clone();
    redacted
        .query_pairs_mut()
        .clear()
        .extend_pairs(url.query_pairs().map(|(key, value)| {
            if key == AUTH_TOKEN_PARAM {
                (key, Cow::Borrowed("********"))
            } else {
                (key, value)
            }
        }));
    redacted
}

fn log_failure(method: &str, err: &PinboardError) {
    match err {
        PinboardError::Transport(_) => warn!("{method}: {err}"),
        PinboardError::Http { .. } | PinboardError::Api { .. } => warn!("{method}: {err}"),
        _ => error!("{method}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::API_ENDPOINT;

    #[test]
    fn test_poster_creation() {
        let poster = PinboardPoster::new("user:TOKEN");
        assert_eq!(poster.config().endpoint, API_ENDPOINT);
    }

    #[test]
    fn test_poster_with_endpoint() {
        let poster = PinboardPoster::new("user:TOKEN").with_endpoint("http://localhost:8080/v1/");
        assert_eq!(poster.config().endpoint, "http://localhost:8080/v1/");
    }

    #[test]
    fn test_blank_token_defers_to_first_use() {
        let poster = PinboardPoster::new("");
        let err = poster.checked_token().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_malformed_token_is_a_config_error() {
        let poster = PinboardPoster::new("missingcolon");
        let err = poster.checked_token().unwrap_err();
        assert!(err.is_config());
        assert!(!err.to_string().contains("missingcolon"));
    }

    #[test]
    fn test_invalid_endpoint_is_a_config_error() {
        let poster = PinboardPoster::new("user:TOKEN").with_endpoint("not an endpoint");
        let pin = Pin::new("http://www.example.com/", "Example").build();
        let err = poster.try_add_pin(&pin).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_validate_bookmark_url() {
        assert!(validate_bookmark_url("http://www.example.com/").is_ok());
        assert!(validate_bookmark_url("").unwrap_err().is_validation());
        assert!(validate_bookmark_url("   ").unwrap_err().is_validation());
        // relative URLs are not pins
        assert!(validate_bookmark_url("foo.com").unwrap_err().is_validation());
    }

    #[test]
    fn test_add_pin_validation_short_circuits() {
        let poster = PinboardPoster::new("user:TOKEN");

        let pin = Pin::new("", "Example").build();
        assert!(poster.try_add_pin(&pin).unwrap_err().is_validation());
        assert!(!poster.add_pin(&pin));

        let pin = Pin::new("http://www.example.com/", "  ").build();
        assert!(poster.try_add_pin(&pin).unwrap_err().is_validation());
        assert!(!poster.add_pin(&pin));
    }

    #[test]
    fn test_delete_pin_validation_short_circuits() {
        let poster = PinboardPoster::new("user:TOKEN");
        assert!(poster.try_delete_pin("").unwrap_err().is_validation());
        assert!(!poster.delete_pin("foo.com"));
    }

    #[test]
    fn test_redact_auth_token() {
        let url = Url::parse(
            "https://api.pinboard.in/v1/posts/delete?url=http%3A%2F%2Fexample.com&auth_token=user%3ASECRET",
        )
        .unwrap();
        let redacted = redact_auth_token(&url);
        let rendered = redacted.to_string();
        assert!(!rendered.contains("SECRET"));
        assert!(rendered.contains("auth_token=********"));
        assert!(rendered.contains("url=http%3A%2F%2Fexample.com"));
    }
}
