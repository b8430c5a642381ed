use std::borrow::Cow;

/// A file and its new name.
#[derive(Clone, Debug, serde::Serialize)]
pub struct RenameFile<'a> {
    pub url: Cow<'a, str>,
    pub filename: Cow<'a, str>,
}

impl<'a> RenameFile<'a> {
    pub fn new(url: impl Into<Cow<'a, str>>, filename: impl Into<Cow<'a, str>>) -> Self {
        Self {
            url: url.into(),
            filename: filename.into(),
        }
    }
}

/// Parameters used to rename files.
///
/// This structure is serialized for the `file/rename.cgi` endpoint.
#[derive(serde::Serialize)]
struct FileRenameParams<'a, 'b> {
    urls: &'b [RenameFile<'a>],
    #[serde(skip_serializing_if = "Option::is_none")]
    pretty: Option<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RenamedFile {
    pub url: String,
    pub old_filename: String,
    pub new_filename: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RenameFilesResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub renamed: u64,
    pub urls: Vec<RenamedFile>,
}

impl crate::Client {
    /// Renames files.
    ///
    /// # Arguments
    ///
    /// * `urls` - The files to rename, with their new name.
    /// * `pretty` - Set to 1 for a pretty printed response.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &onefichier::Client) -> Result<(), onefichier::Error> {
    /// use onefichier::file::rename::RenameFile;
    ///
    /// let files = [RenameFile::new("https://1fichier.com/?abcdefghij", "new_name.txt")];
    /// let result = client.rename_files(&files, None).await?;
    /// for item in result.urls {
    ///     println!("{} => {}", item.old_filename, item.new_filename);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn rename_files(
        &self,
        urls: &[RenameFile<'_>],
        pretty: Option<u8>,
    ) -> crate::Result<RenameFilesResponse> {
        self.post_request("file/rename.cgi", &FileRenameParams { urls, pretty })
            .await
    }
}
