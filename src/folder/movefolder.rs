use std::borrow::Cow;

/// Parameters used to move a folder
#[derive(Debug, serde::Serialize)]
pub struct FolderMoveParams<'a> {
    pub folder_id: u64,
    pub destination_folder_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_user: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename: Option<Cow<'a, str>>,
}

impl<'a> FolderMoveParams<'a> {
    pub fn new(folder_id: u64, destination_folder_id: u64) -> Self {
        Self {
            folder_id,
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
pub struct MoveFolderResponse {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
}

impl crate::Client {
    pub async fn move_folder(
        &self,
        params: &FolderMoveParams<'_>,
    ) -> crate::Result<MoveFolderResponse> {
        self.post_request("folder/mv.cgi", params).await
    }
}

#[cfg(test)]
mod tests {
    use super::FolderMoveParams;
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/folder/mv.cgi")
            .match_header("authorization", "Bearer api-key")
            .match_body(Matcher::Json(serde_json::json!({
                "folder_id": 42,
                "destination_folder_id": 0,
            })))
            .with_status(200)
            .with_body(r#"{ "status": "OK", "message": "Folder moved" }"#)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let result = client
            .move_folder(&FolderMoveParams::new(42, crate::folder::ROOT))
            .await
            .unwrap();
        assert_eq!(result.message, "Folder moved");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn with_rename() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/folder/mv.cgi")
            .match_body(Matcher::Json(serde_json::json!({
                "folder_id": 42,
                "destination_folder_id": 7,
                "rename": "archives",
            })))
            .with_status(200)
            .with_body(
                r#"{ "status": "OK", "message": "Folder moved", "old_name": "photos", "new_name": "archives" }"#,
            )
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let result = client
            .move_folder(&FolderMoveParams::new(42, 7).with_rename("archives"))
            .await
            .unwrap();
        assert_eq!(result.old_name.as_deref(), Some("photos"));
        assert_eq!(result.new_name.as_deref(), Some("archives"));
        m.assert_async().await;
    }
}
