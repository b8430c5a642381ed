//! Client for the [1fichier.com API](https://1fichier.com/api.html).
//!
//! Every method of [`Client`] issues a single request and returns the decoded
//! JSON body. Application level failures are not turned into errors: the
//! `status` field of each response is passed through and should be checked
//! by the caller.
//!
//! ```rust,no_run
//! use onefichier::{Client, Credentials};
//!
//! # tokio_test::block_on(async {
//! let client = Client::new(Credentials::api_key("my-api-key")).unwrap();
//! let info = client.get_user_info(None).await.unwrap();
//! if info.status == "OK" {
//!     println!("logged in as {}", info.email);
//! }
//! # })
//! ```

use std::borrow::Cow;

pub mod builder;
mod credentials;
pub mod download;
pub mod file;
pub mod folder;
pub mod remote;
mod request;
pub mod upload;
pub mod user;
pub mod voucher;

pub use builder::ClientBuilder;
pub use credentials::Credentials;
pub use request::RequestOptions;

/// Root of the production API
pub const DEFAULT_BASE_URL: &str = "https://api.1fichier.com/v1";

/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// All the possible errors returned by the client
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network, TLS, timeout or non successful http status
    #[error("network error")]
    Reqwest(#[from] reqwest::Error),
    /// Unable to parse a JSON response
    #[error("unable to decode json")]
    SerdeJson(#[from] serde_json::Error),
    /// Redirection that could not be followed
    #[error("unable to follow redirection {0}")]
    Redirect(reqwest::StatusCode),
    /// Error while reading a file to upload
    #[error("unable to read upload content")]
    Upload(#[source] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Client for the 1fichier REST API
///
/// The handle is never mutated after being built, it can be cloned and shared
/// between tasks, the clones reuse the same connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Cow<'static, str>,
    authorization: reqwest::header::HeaderValue,
    options: RequestOptions,
    inner: reqwest::Client,
}

impl Client {
    /// Creates a client targeting the production API.
    pub fn new(credentials: Credentials) -> Result<Self, builder::Error> {
        ClientBuilder::default()
            .with_credentials(credentials)
            .build()
    }

    /// Creates a client targeting a custom API root.
    pub fn with_base_url(
        base_url: impl Into<Cow<'static, str>>,
        credentials: Credentials,
    ) -> Result<Self, builder::Error> {
        ClientBuilder::default()
            .with_base_url(base_url)
            .with_credentials(credentials)
            .build()
    }

    /// Returns a handle sharing the same connection pool and credentials, whose
    /// requests are sent with the given options.
    ///
    /// ```rust,no_run
    /// use onefichier::{Client, Credentials, RequestOptions};
    /// use std::time::Duration;
    ///
    /// # tokio_test::block_on(async {
    /// let client = Client::new(Credentials::api_key("my-api-key")).unwrap();
    /// let result = client
    ///     .with_options(RequestOptions::default().with_timeout(Duration::from_secs(5)))
    ///     .list_vouchers()
    ///     .await;
    /// # })
    /// ```
    pub fn with_options(&self, options: RequestOptions) -> Self {
        Self {
            base_url: self.base_url.clone(),
            authorization: self.authorization.clone(),
            options,
            inner: self.inner.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
