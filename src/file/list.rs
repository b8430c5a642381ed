//! Resources needed to list the files of a folder

use std::borrow::Cow;

use super::FileListItem;

/// Filters of a file listing
///
/// Without any filter, the files of the root folder are listed.
#[derive(Debug, Default, serde::Serialize)]
pub struct FileListParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharing_user: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_before: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_after: Option<Cow<'a, str>>,
}

impl<'a> FileListParams<'a> {
    pub fn set_folder_id(&mut self, value: u64) {
        self.folder_id = Some(value);
    }

    pub fn with_folder_id(mut self, value: u64) -> Self {
        self.set_folder_id(value);
        self
    }

    /// List the files of a folder shared by this user.
    pub fn set_sharing_user(&mut self, value: impl Into<Cow<'a, str>>) {
        self.sharing_user = Some(value.into());
    }

    /// List the files of a folder shared by this user.
    pub fn with_sharing_user(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.set_sharing_user(value);
        self
    }

    pub fn set_sent_before(&mut self, value: impl Into<Cow<'a, str>>) {
        self.sent_before = Some(value.into());
    }

    pub fn with_sent_before(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.set_sent_before(value);
        self
    }

    pub fn set_sent_after(&mut self, value: impl Into<Cow<'a, str>>) {
        self.sent_after = Some(value.into());
    }

    pub fn with_sent_after(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.set_sent_after(value);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FileListResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub count: u64,
    pub items: Vec<FileListItem>,
}

impl crate::Client {
    /// Lists the files of a folder.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &onefichier::Client) -> Result<(), onefichier::Error> {
    /// use onefichier::file::list::FileListParams;
    ///
    /// let result = client
    ///     .list_files(&FileListParams::default().with_folder_id(42))
    ///     .await?;
    /// for item in result.items {
    ///     println!("{} ({} bytes)", item.filename, item.size);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_files(
        &self,
        params: &FileListParams<'_>,
    ) -> crate::Result<FileListResponse> {
        self.post_request("file/ls.cgi", params).await
    }
}
