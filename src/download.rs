//! Resources needed to generate download links

use std::borrow::Cow;

/// Parameters of a download token request
#[derive(Debug, Default, serde::Serialize)]
pub struct DownloadTokenParams<'a> {
    pub url: Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdn: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_ip: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_ssl: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharing_user: Option<Cow<'a, str>>,
}

impl<'a> DownloadTokenParams<'a> {
    pub fn new(url: impl Into<Cow<'a, str>>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Serve the file inline instead of as an attachment.
    pub fn with_inline(mut self, value: u8) -> Self {
        self.inline = Some(value);
        self
    }

    pub fn with_cdn(mut self, value: u8) -> Self {
        self.cdn = Some(value);
        self
    }

    /// Restrict the link to the ip address of the caller.
    pub fn with_restrict_ip(mut self, value: u8) -> Self {
        self.restrict_ip = Some(value);
        self
    }

    /// Make the link usable only once.
    pub fn with_single(mut self, value: u8) -> Self {
        self.single = Some(value);
        self
    }

    pub fn with_pass(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.pass = Some(value.into());
        self
    }

    pub fn with_no_ssl(mut self, value: u8) -> Self {
        self.no_ssl = Some(value);
        self
    }

    pub fn with_folder_id(mut self, value: u64) -> Self {
        self.folder_id = Some(value);
        self
    }

    pub fn with_filename(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.filename = Some(value.into());
        self
    }

    pub fn with_sharing_user(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.sharing_user = Some(value.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct DownloadTokenResponse {
    pub url: String,
    pub status: String,
    pub message: String,
}

impl crate::Client {
    /// Generates a download link for a file.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &onefichier::Client) -> Result<(), onefichier::Error> {
    /// use onefichier::download::DownloadTokenParams;
    ///
    /// let params = DownloadTokenParams::new("https://1fichier.com/?abcdefghij").with_single(1);
    /// let token = client.get_download_token(&params).await?;
    /// println!("download from {}", token.url);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_download_token(
        &self,
        params: &DownloadTokenParams<'_>,
    ) -> crate::Result<DownloadTokenResponse> {
        self.post_request("download/get_token.cgi", params).await
    }
}
