#[derive(serde::Serialize)]
struct FolderRemoveParams {
    folder_id: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RemoveFolderResponse {
    pub status: String,
    pub message: String,
}

impl crate::Client {
    /// Removes a folder
    ///
    /// # Arguments
    ///
    /// * `folder_id` - ID of the folder to remove.
    pub async fn remove_folder(&self, folder_id: u64) -> crate::Result<RemoveFolderResponse> {
        self.post_request("folder/rm.cgi", &FolderRemoveParams { folder_id })
            .await
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/folder/rm.cgi")
            .match_header("authorization", "Bearer api-key")
            .match_body(Matcher::Exact(r#"{"folder_id":5}"#.into()))
            .with_status(200)
            .with_body(r#"{ "status": "OK", "message": "Folder removed" }"#)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let result = client.remove_folder(5).await.unwrap();
        assert_eq!(result.status, "OK");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn error() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/folder/rm.cgi")
            .with_status(200)
            .with_body(r#"{ "status": "KO", "message": "Folder not empty" }"#)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let result = client.remove_folder(5).await.unwrap();
        assert_eq!(result.status, "KO");
        assert_eq!(result.message, "Folder not empty");
        m.assert_async().await;
    }
}
