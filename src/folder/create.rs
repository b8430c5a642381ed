use std::borrow::Cow;

/// Parameters used to create a folder
#[derive(Debug, serde::Serialize)]
pub struct FolderCreateParams<'a> {
    pub name: Cow<'a, str>,
    /// Parent folder, the root folder by default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharing_user: Option<Cow<'a, str>>,
}

impl<'a> FolderCreateParams<'a> {
    pub fn new(name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            name: name.into(),
            folder_id: None,
            sharing_user: None,
        }
    }

    pub fn with_folder_id(mut self, value: u64) -> Self {
        self.folder_id = Some(value);
        self
    }

    pub fn with_sharing_user(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.sharing_user = Some(value.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct CreateFolderResponse {
    pub status: String,
    pub folder_id: u64,
    pub name: String,
    pub message: String,
}

impl crate::Client {
    /// Creates a folder
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &onefichier::Client) -> Result<(), onefichier::Error> {
    /// use onefichier::folder::create::FolderCreateParams;
    ///
    /// let created = client
    ///     .create_folder(&FolderCreateParams::new("photos").with_folder_id(onefichier::folder::ROOT))
    ///     .await?;
    /// println!("created folder {}", created.folder_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_folder(
        &self,
        params: &FolderCreateParams<'_>,
    ) -> crate::Result<CreateFolderResponse> {
        self.post_request("folder/mkdir.cgi", params).await
    }
}
