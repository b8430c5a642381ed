use std::borrow::Cow;

/// Parameters used to copy files.
///
/// Files of other accounts can be copied when their download link is known.
#[derive(Debug, serde::Serialize)]
pub struct FileCopyParams<'a> {
    pub urls: Vec<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharing_user: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename: Option<Cow<'a, str>>,
}

impl<'a> FileCopyParams<'a> {
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'a, str>>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            folder_id: None,
            pass: None,
            sharing_user: None,
            rename: None,
        }
    }

    /// Destination folder, the root folder by default.
    pub fn with_folder_id(mut self, value: u64) -> Self {
        self.folder_id = Some(value);
        self
    }

    pub fn with_pass(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.pass = Some(value.into());
        self
    }

    pub fn with_sharing_user(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.sharing_user = Some(value.into());
        self
    }

    pub fn with_rename(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.rename = Some(value.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct CopiedFile {
    pub from_url: String,
    pub to_url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct CopyFilesResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub copied: u64,
    pub urls: Vec<CopiedFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl crate::Client {
    pub async fn copy_files(&self, params: &FileCopyParams<'_>) -> crate::Result<CopyFilesResponse> {
        self.post_request("file/cp.cgi", params).await
    }
}

#[cfg(test)]
mod tests {
    use super::FileCopyParams;
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/file/cp.cgi")
            .match_header("authorization", "Bearer api-key")
            .match_body(Matcher::Json(serde_json::json!({ "urls": ["test"] })))
            .with_status(200)
            .with_body(
                r#"{
    "status": "OK",
    "copied": 1,
    "urls": [
        { "from_url": "test", "to_url": "https://1fichier.com/?klmnopqrst" }
    ]
}"#,
            )
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let result = client
            .copy_files(&FileCopyParams::new(["test"]))
            .await
            .unwrap();
        assert_eq!(result.copied, 1);
        assert_eq!(result.urls[0].to_url, "https://1fichier.com/?klmnopqrst");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn with_options() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/file/cp.cgi")
            .match_body(Matcher::Json(serde_json::json!({
                "urls": ["test"],
                "folder_id": 3,
                "pass": "secret",
                "rename": "copy.txt",
            })))
            .with_status(200)
            .with_body(r#"{ "status": "OK", "copied": 1, "urls": [], "filename": "copy.txt" }"#)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let params = FileCopyParams::new(["test"])
            .with_folder_id(3)
            .with_pass("secret")
            .with_rename("copy.txt");
        let result = client.copy_files(&params).await.unwrap();
        assert_eq!(result.filename.as_deref(), Some("copy.txt"));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn failure() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/file/cp.cgi")
            .with_status(200)
            .with_body(r#"{ "status": "KO", "message": "File not found" }"#)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let result = client
            .copy_files(&FileCopyParams::new(["u"]))
            .await
            .unwrap();
        assert_eq!(result.status, "KO");
        assert_eq!(result.message.as_deref(), Some("File not found"));
        m.assert_async().await;
    }
}
