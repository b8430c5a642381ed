//! Request helpers shared by all the endpoints.

use std::time::Duration;

use reqwest::header::{HeaderMap, AUTHORIZATION, LOCATION};
use reqwest::StatusCode;

use crate::Error;

/// Same limit as the default redirect policy of reqwest
const MAX_REDIRECTS: usize = 10;

/// Transport settings applied to the requests of a [`Client`](crate::Client).
///
/// Headers set here are applied last: they replace any header with the same
/// name set by the client, including `Authorization` and `Content-Type`, and
/// leave the other ones untouched.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn set_headers(&mut self, headers: HeaderMap) {
        self.headers = headers;
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.set_headers(headers);
        self
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    /// Overrides the client timeout for each request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.set_timeout(timeout);
        self
    }

    fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder.headers(self.headers.clone());
        match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }
}

async fn read_body(res: reqwest::Response) -> Result<bytes::Bytes, Error> {
    let status = res.status();
    tracing::debug!("responded with status {status:?}");
    let body = res.error_for_status()?.bytes().await?;
    Ok(body)
}

/// Target of a 307 or 308 answer, which reqwest doesn't follow with a streamed body.
fn redirect_location(res: &reqwest::Response) -> Option<String> {
    if !matches!(
        res.status(),
        StatusCode::TEMPORARY_REDIRECT | StatusCode::PERMANENT_REDIRECT
    ) {
        return None;
    }
    let location = res.headers().get(LOCATION)?.to_str().ok()?;
    res.url().join(location).ok().map(String::from)
}

async fn read_response<T: serde::de::DeserializeOwned>(res: reqwest::Response) -> Result<T, Error> {
    let body = read_body(res).await?;
    serde_json::from_slice(&body).map_err(Error::from)
}

impl crate::Client {
    pub(crate) fn build_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    fn prepare(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        self.options
            .apply(builder.header(AUTHORIZATION, self.authorization.clone()))
    }

    #[tracing::instrument(name = "post", skip(self, params))]
    pub(crate) async fn post_request<T: serde::de::DeserializeOwned, P: serde::Serialize>(
        &self,
        method: &str,
        params: &P,
    ) -> Result<T, Error> {
        let uri = self.build_url(method);
        let res = self
            .prepare(self.inner.post(uri).json(params))
            .send()
            .await?;
        read_response(res).await
    }

    /// Posts without any body nor content type.
    #[tracing::instrument(name = "post", skip(self))]
    pub(crate) async fn post_empty_request<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
    ) -> Result<T, Error> {
        let uri = self.build_url(method);
        let res = self.prepare(self.inner.post(uri)).send().await?;
        read_response(res).await
    }

    #[tracing::instrument(name = "get", skip(self, params))]
    pub(crate) async fn get_request<T: serde::de::DeserializeOwned, P: serde::Serialize>(
        &self,
        method: &str,
        params: &P,
    ) -> Result<T, Error> {
        let uri = self.build_url(method);
        let res = self
            .prepare(self.inner.get(uri).query(params))
            .send()
            .await?;
        read_response(res).await
    }

    /// Posts a multipart form, an empty response body gives `None`.
    ///
    /// The form is rebuilt for each 307 or 308 redirection, which is sent
    /// as is, without the query parameters.
    #[tracing::instrument(name = "post", skip(self, params, form))]
    pub(crate) async fn post_request_multipart<T, P, F>(
        &self,
        uri: String,
        params: &P,
        form: F,
    ) -> Result<Option<T>, Error>
    where
        T: serde::de::DeserializeOwned,
        P: serde::Serialize,
        F: Fn() -> reqwest::multipart::Form,
    {
        let mut builder = self.inner.post(uri).query(params);
        let mut redirects = 0;
        let res = loop {
            let res = self.prepare(builder.multipart(form())).send().await?;
            match redirect_location(&res) {
                Some(location) if redirects < MAX_REDIRECTS => {
                    tracing::debug!("redirected to {location}");
                    redirects += 1;
                    builder = self.inner.post(location);
                }
                _ => break res,
            }
        };
        if res.status().is_redirection() {
            return Err(Error::Redirect(res.status()));
        }
        let body = read_body(res).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        serde_json::from_slice(&body).map(Some).map_err(Error::from)
    }
}

pub(crate) fn is_zero(value: &Option<u8>) -> bool {
    matches!(value, None | Some(0))
}
