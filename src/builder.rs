use std::borrow::Cow;
use std::time::Duration;

/// Name of the environment variable overriding the API root
pub const BASE_URL_ENV: &str = "ONEFICHIER_BASE_URL";
/// Name of the environment variable holding the request timeout, in milliseconds
pub const TIMEOUT_ENV: &str = "ONEFICHIER_TIMEOUT";

/// Errors that may occur during client configuration and building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when no API key was provided.
    #[error("no api key provided")]
    MissingCredentials,
    /// Returned when the API key cannot be sent as a header value.
    #[error("invalid api key")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),
    /// Returned when the underlying HTTP client could not be built.
    #[error("unable to build reqwest client")]
    Reqwest(#[from] reqwest::Error),
}

/// Builder for constructing a [`Client`](crate::Client) with custom configuration.
///
/// ```
/// use onefichier::{ClientBuilder, Credentials};
/// use std::time::Duration;
///
/// let _client = ClientBuilder::default()
///    .with_credentials(Credentials::api_key("my-api-key"))
///    .with_timeout(Duration::from_secs(30))
///    .build()
///    .expect("unable to build http client");
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Cow<'static, str>,
    client_builder: Option<reqwest::ClientBuilder>,
    credentials: Option<crate::Credentials>,
    timeout: Option<Duration>,
}

impl Default for ClientBuilder {
    /// Creates a new `ClientBuilder` targeting the production API, without credentials.
    fn default() -> Self {
        Self {
            base_url: Cow::Borrowed(crate::DEFAULT_BASE_URL),
            client_builder: None,
            credentials: None,
            timeout: None,
        }
    }
}

fn timeout_from_env() -> Option<Duration> {
    let value = std::env::var(TIMEOUT_ENV).ok()?;
    match value.parse::<u64>() {
        Ok(millis) => Some(Duration::from_millis(millis)),
        Err(err) => {
            tracing::warn!("ignoring invalid value {value:?} for {TIMEOUT_ENV}: {err}");
            None
        }
    }
}

impl ClientBuilder {
    /// Creates a builder pre-configured using environment variables.
    ///
    /// - Uses `ONEFICHIER_API_KEY` for the credentials.
    /// - Uses `ONEFICHIER_BASE_URL` for the endpoint, falling back to the production API.
    /// - Uses `ONEFICHIER_TIMEOUT`, in milliseconds, for the request timeout.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .map(Cow::Owned)
            .unwrap_or(Cow::Borrowed(crate::DEFAULT_BASE_URL));

        Self {
            base_url,
            client_builder: None,
            credentials: crate::Credentials::from_env(),
            timeout: timeout_from_env(),
        }
    }

    /// Sets a custom base URL.
    pub fn set_base_url(&mut self, base_url: impl Into<Cow<'static, str>>) {
        self.base_url = base_url.into();
    }

    /// Sets a custom base URL and returns the modified builder.
    pub fn with_base_url(mut self, base_url: impl Into<Cow<'static, str>>) -> Self {
        self.set_base_url(base_url);
        self
    }

    /// Sets a custom `reqwest::ClientBuilder`.
    pub fn set_client_builder(&mut self, client_builder: reqwest::ClientBuilder) {
        self.client_builder = Some(client_builder);
    }

    /// Sets a custom `reqwest::ClientBuilder` and returns the modified builder.
    pub fn with_client_builder(mut self, client_builder: reqwest::ClientBuilder) -> Self {
        self.set_client_builder(client_builder);
        self
    }

    /// Sets the credentials for API authentication.
    pub fn set_credentials(&mut self, credentials: crate::Credentials) {
        self.credentials = Some(credentials);
    }

    /// Sets the credentials and returns the modified builder.
    pub fn with_credentials(mut self, credentials: crate::Credentials) -> Self {
        self.set_credentials(credentials);
        self
    }

    /// Sets the timeout applied to every request.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    /// Sets the timeout applied to every request and returns the modified builder.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.set_timeout(timeout);
        self
    }

    /// Builds the [`Client`](crate::Client) with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredentials`] if no credentials were set.
    /// Returns [`Error::InvalidApiKey`] if the API key contains forbidden characters.
    /// Returns [`Error::Reqwest`] if the HTTP client could not be built.
    pub fn build(self) -> Result<crate::Client, Error> {
        let credentials = self.credentials.ok_or(Error::MissingCredentials)?;
        let mut builder = self
            .client_builder
            .unwrap_or_default()
            .user_agent(crate::USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let base_url = match self.base_url {
            Cow::Borrowed(value) => Cow::Borrowed(value.trim_end_matches('/')),
            Cow::Owned(value) => Cow::Owned(value.trim_end_matches('/').to_string()),
        };
        Ok(crate::Client {
            base_url,
            authorization: credentials.authorization()?,
            options: crate::RequestOptions::default(),
            inner: builder.build()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientBuilder, Error};
    use crate::Credentials;

    #[test]
    fn should_fail_without_credentials() {
        let err = ClientBuilder::default().build().unwrap_err();
        assert!(matches!(err, Error::MissingCredentials));
    }

    #[test]
    fn should_fail_with_invalid_key() {
        let err = ClientBuilder::default()
            .with_credentials(Credentials::api_key("new\nline"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidApiKey(_)));
    }

    #[test]
    fn should_trim_trailing_slash() {
        let client = ClientBuilder::default()
            .with_base_url("http://localhost:3000/v1/")
            .with_credentials(Credentials::api_key("api-key"))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/v1");
    }
}
