//! Resources needed to list the content of a folder

use std::borrow::Cow;

use super::FolderInfo;

/// Parameters used to list a folder
///
/// Without any parameter, the root folder is listed.
#[derive(Debug, Default, serde::Serialize)]
pub struct FolderListParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharing_user: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<u8>,
}

impl<'a> FolderListParams<'a> {
    pub fn set_folder_id(&mut self, value: u64) {
        self.folder_id = Some(value);
    }

    pub fn with_folder_id(mut self, value: u64) -> Self {
        self.set_folder_id(value);
        self
    }

    pub fn set_sharing_user(&mut self, value: impl Into<Cow<'a, str>>) {
        self.sharing_user = Some(value.into());
    }

    pub fn with_sharing_user(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.set_sharing_user(value);
        self
    }

    /// If is set, the files of the folder are listed in `items`.
    pub fn set_files(&mut self, value: u8) {
        self.files = Some(value);
    }

    /// If is set, the files of the folder are listed in `items`.
    pub fn with_files(mut self, value: u8) -> Self {
        self.set_files(value);
        self
    }
}

impl crate::Client {
    /// Lists the sub folders, and optionally the files, of a folder.
    ///
    /// The tree is returned as deep as the server sends it.
    pub async fn list_folders(&self, params: &FolderListParams<'_>) -> crate::Result<FolderInfo> {
        self.post_request("folder/ls.cgi", params).await
    }
}
