//! Resources needed to let the servers download files from other websites

use std::borrow::Cow;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RemoteUpload {
    pub id: u64,
    pub request_date: String,
    pub execution_date: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RemoteUploadListResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Vec<RemoteUpload>,
}

/// Outcome of one of the links of a remote upload
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RemoteUploadLink {
    pub status: String,
    pub url: String,
    pub download_link: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RemoteUploadInfoResponse {
    pub id: u64,
    pub request_date: String,
    pub execution_date: String,
    pub links: Vec<String>,
    pub result: Vec<RemoteUploadLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RemoteUploadRequestResponse {
    pub id: u64,
    pub date: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub urls: Vec<String>,
    pub headers: BTreeMap<String, String>,
}

#[derive(serde::Serialize)]
struct RemoteUploadInfoParams<'a> {
    id: &'a str,
}

/// Parameters used to request a remote upload
#[derive(Debug, serde::Serialize)]
pub struct RemoteUploadParams<'a> {
    pub urls: Vec<Cow<'a, str>>,
    /// Folder receiving the files, the root folder by default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<u64>,
    /// Headers sent when downloading the urls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
}

impl<'a> RemoteUploadParams<'a> {
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'a, str>>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            folder_id: None,
            headers: None,
        }
    }

    pub fn with_folder_id(mut self, value: u64) -> Self {
        self.folder_id = Some(value);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }
}

impl crate::Client {
    /// Lists the remote uploads of the account.
    pub async fn list_remote_uploads(&self) -> crate::Result<RemoteUploadListResponse> {
        self.post_empty_request("remote/ls.cgi").await
    }

    pub async fn get_remote_upload_info(
        &self,
        id: &str,
    ) -> crate::Result<RemoteUploadInfoResponse> {
        self.post_request("remote/info.cgi", &RemoteUploadInfoParams { id })
            .await
    }

    /// Asks the servers to download the given urls into the account.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &onefichier::Client) -> Result<(), onefichier::Error> {
    /// use onefichier::remote::RemoteUploadParams;
    ///
    /// let params = RemoteUploadParams::new(["https://example.com/archive.zip"])
    ///     .with_header("Cookie", "session=abcd");
    /// let request = client.request_remote_upload(&params).await?;
    /// let info = client.get_remote_upload_info(&request.id.to_string()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn request_remote_upload(
        &self,
        params: &RemoteUploadParams<'_>,
    ) -> crate::Result<RemoteUploadRequestResponse> {
        self.post_request("remote/request.cgi", params).await
    }
}
