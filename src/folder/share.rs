use std::borrow::Cow;

use super::Share;

/// Parameters used to share a folder
#[derive(Debug, serde::Serialize)]
pub struct FolderShareParams<'a> {
    pub folder_id: u64,
    /// 1 to share publicly, 0 to stop sharing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares: Option<Vec<Share>>,
}

impl<'a> FolderShareParams<'a> {
    pub fn new(folder_id: u64) -> Self {
        Self {
            folder_id,
            share: None,
            pass: None,
            shares: None,
        }
    }

    pub fn with_share(mut self, value: u8) -> Self {
        self.share = Some(value);
        self
    }

    pub fn with_pass(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.pass = Some(value.into());
        self
    }

    /// Adds an account to share the folder with.
    pub fn with_user(mut self, value: Share) -> Self {
        self.shares.get_or_insert_with(Vec::new).push(value);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ShareFolderResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub message: String,
}

impl crate::Client {
    pub async fn share_folder(
        &self,
        params: &FolderShareParams<'_>,
    ) -> crate::Result<ShareFolderResponse> {
        self.post_request("folder/share.cgi", params).await
    }
}
