use std::borrow::Cow;

/// Parameters used to move files into another folder.
#[derive(Debug, serde::Serialize)]
pub struct FileMoveParams<'a> {
    pub urls: Vec<Cow<'a, str>>,
    pub destination_folder_id: u64,
    /// Account receiving the files, when moving into a shared folder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_user: Option<Cow<'a, str>>,
    /// New name, when moving a single file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename: Option<Cow<'a, str>>,
}

impl<'a> FileMoveParams<'a> {
    pub fn new<I, S>(urls: I, destination_folder_id: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'a, str>>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            destination_folder_id,
            destination_user: None,
            rename: None,
        }
    }

    pub fn with_destination_user(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.destination_user = Some(value.into());
        self
    }

    pub fn with_rename(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.rename = Some(value.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct MoveFilesResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub moved: u64,
    pub urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl crate::Client {
    pub async fn move_files(&self, params: &FileMoveParams<'_>) -> crate::Result<MoveFilesResponse> {
        self.post_request("file/mv.cgi", params).await
    }
}
