use log::debug;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable consulted for the API token
pub const TOKEN_ENV_VAR: &str = "PINBOARD_API_TOKEN";

/// Properties file key holding the API token (matched case-insensitively)
pub const TOKEN_PROPERTY_KEY: &str = "pinboard_api_token";

/// ApiToken represents the `user:TOKEN` credential authenticating
/// every Pinboard API request.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Create a new ApiToken from its raw string form
    pub fn new(raw: impl Into<String>) -> Self {
        ApiToken(raw.into())
    }

    /// Get the raw token string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the user part of the token, if present
    pub fn username(&self) -> Option<&str> {
        self.0.split_once(':').map(|(user, _)| user)
    }

    /// Check that the token looks like `user:TOKEN`
    pub fn is_well_formed(&self) -> bool {
        !self.0.trim().is_empty() && self.0.contains(':')
    }

    /// The token with its secret part masked, safe for logging
    pub fn redacted(&self) -> String {
        mask(&self.0)
    }
}

fn mask(raw: &str) -> String {
    match raw.split_once(':') {
        Some((user, _)) => format!("{user}:********"),
        None => "********".to_string(),
    }
}

// Debug never exposes the secret part of the token
impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiToken({})", self.redacted())
    }
}

/// Where the API token comes from.
///
/// Resolution happens once, at client construction, and never fails
/// there; a source that yields nothing surfaces as a configuration
/// error on the first request.
#[derive(Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// An explicit token value, used verbatim
    Token(String),
    /// A local properties file holding the token under
    /// [`TOKEN_PROPERTY_KEY`], falling back to the environment when the
    /// file or the key is missing
    PropertiesFile(PathBuf),
    /// The [`TOKEN_ENV_VAR`] environment variable only
    Environment,
}

// Debug never exposes an explicit token value
impl fmt::Debug for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSource::Token(raw) => write!(f, "Token({})", mask(raw)),
            TokenSource::PropertiesFile(path) => {
                f.debug_tuple("PropertiesFile").field(path).finish()
            }
            TokenSource::Environment => write!(f, "Environment"),
        }
    }
}

impl TokenSource {
    /// Resolve the token from this source, if available
    pub fn resolve(&self) -> Option<ApiToken> {
        match self {
            TokenSource::Token(raw) => {
                if raw.trim().is_empty() {
                    None
                } else {
                    Some(ApiToken::new(raw.clone()))
                }
            }
            TokenSource::PropertiesFile(path) => token_from_properties(path)
                .or_else(token_from_env)
                .map(ApiToken::new),
            TokenSource::Environment => token_from_env().map(ApiToken::new),
        }
    }

    /// Human-readable description of the source, for error messages
    pub(crate) fn describe(&self) -> String {
        match self {
            TokenSource::Token(_) => "the provided token".to_string(),
            TokenSource::PropertiesFile(path) => {
                format!("{} or ${}", path.display(), TOKEN_ENV_VAR)
            }
            TokenSource::Environment => format!("${}", TOKEN_ENV_VAR),
        }
    }
}

fn token_from_env() -> Option<String> {
    env::var(TOKEN_ENV_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// Look the token up in a Java-style properties file: `key=value` or
/// `key: value` lines, `#`/`!` comments, first match wins.
fn token_from_properties(path: &Path) -> Option<String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            debug!("cannot read properties file {}: {err}", path.display());
            return None;
        }
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let Some(separator) = line.find(['=', ':']) else {
            continue;
        };
        let key = line[..separator].trim();
        let value = line[separator + 1..].trim();
        if key.eq_ignore_ascii_case(TOKEN_PROPERTY_KEY) && !value.is_empty() {
            return Some(value.to_string());
        }
    }

    debug!(
        "no {} entry in properties file {}",
        TOKEN_PROPERTY_KEY,
        path.display()
    );
    None
}
