use std::borrow::Cow;

/// A file to remove
#[derive(Clone, Debug, serde::Serialize)]
pub struct RemoveFile<'a> {
    pub url: Cow<'a, str>,
    /// Removal code, needed for files that don't belong to the account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Cow<'a, str>>,
}

impl<'a> RemoveFile<'a> {
    pub fn new(url: impl Into<Cow<'a, str>>) -> Self {
        Self {
            url: url.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<Cow<'a, str>>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl<'a> From<&'a str> for RemoveFile<'a> {
    fn from(value: &'a str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RemoveFile<'_> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(serde::Serialize)]
struct FileRemoveParams<'a, 'b> {
    files: &'b [RemoveFile<'a>],
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RemoveFilesResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub removed: u64,
    pub urls: Vec<String>,
}

impl crate::Client {
    /// Removes files.
    ///
    /// The response describes the whole batch, the client doesn't check each file.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &onefichier::Client) -> Result<(), onefichier::Error> {
    /// use onefichier::file::delete::RemoveFile;
    ///
    /// let files = [
    ///     RemoveFile::new("https://1fichier.com/?abcdefghij"),
    ///     RemoveFile::new("https://1fichier.com/?klmnopqrst").with_code("hxXbF"),
    /// ];
    /// let result = client.remove_files(&files).await?;
    /// println!("removed {} files", result.removed);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn remove_files(
        &self,
        files: &[RemoveFile<'_>],
    ) -> crate::Result<RemoveFilesResponse> {
        self.post_request("file/rm.cgi", &FileRemoveParams { files })
            .await
    }
}
