//! The API key used to authenticate, as described in [the documentation](https://1fichier.com/api.html).

use reqwest::header::{HeaderValue, InvalidHeaderValue};

/// Name of the environment variable holding the API key
pub const API_KEY_ENV: &str = "ONEFICHIER_API_KEY";

/// The API key sent as a bearer token with every request
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"********")
            .finish()
    }
}

impl Credentials {
    pub fn api_key<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Creates a credential based on the environment variables
    ///
    /// When `ONEFICHIER_API_KEY` is set, a `Some(Credentials)` will be created, otherwise `None` is returned.
    ///
    /// ```rust
    /// use onefichier::Credentials;
    ///
    /// match Credentials::from_env() {
    ///     Some(_) => println!("uses an api key"),
    ///     None => eprintln!("no credentials provided"),
    /// }
    /// ```
    pub fn from_env() -> Option<Self> {
        std::env::var(API_KEY_ENV).ok().map(Self::api_key)
    }

    /// Value of the `Authorization` header, flagged as sensitive so it doesn't show in logs.
    pub(crate) fn authorization(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.api_key))?;
        value.set_sensitive(true);
        Ok(value)
    }
}
