use std::borrow::Cow;

use super::FileInfo;

/// Parameters used to describe a file.
#[derive(Debug, Default, serde::Serialize)]
pub struct FileInfoParams<'a> {
    /// Download link of the file
    pub url: Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharing_user: Option<Cow<'a, str>>,
}

impl<'a> FileInfoParams<'a> {
    pub fn new(url: impl Into<Cow<'a, str>>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_pass(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.pass = Some(value.into());
        self
    }

    pub fn with_folder_id(mut self, value: u64) -> Self {
        self.folder_id = Some(value);
        self
    }

    pub fn with_filename(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.filename = Some(value.into());
        self
    }

    pub fn with_sharing_user(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.sharing_user = Some(value.into());
        self
    }
}

impl crate::Client {
    /// Gets the metadata of a file.
    ///
    /// # Arguments
    ///
    /// * `params` - The download link of the file and how to access it.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &onefichier::Client) -> Result<(), onefichier::Error> {
    /// use onefichier::file::get_info::FileInfoParams;
    ///
    /// let info = client
    ///     .get_file_info(&FileInfoParams::new("https://1fichier.com/?abcdefghij"))
    ///     .await?;
    /// println!("{} is {} bytes", info.filename, info.size);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_file_info(&self, params: &FileInfoParams<'_>) -> crate::Result<FileInfo> {
        self.post_request("file/info.cgi", params).await
    }
}

#[cfg(test)]
mod tests {
    use super::FileInfoParams;
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/file/info.cgi")
            .match_header("authorization", "Bearer api-key")
            .match_body(Matcher::Json(serde_json::json!({ "url": "test" })))
            .with_status(200)
            .with_body(
                r#"{
    "url": "https://1fichier.com/?abcdefghij",
    "filename": "hello.txt",
    "size": 12,
    "date": "2024-01-02 03:04:05",
    "folder_id": 0,
    "path": "/",
    "checksum": "6f5902ac237024bdd0c176cb93063dc4",
    "content_type": "text/plain",
    "description": "greetings",
    "pass": 0,
    "no_ssl": 0,
    "inline": 1,
    "cdn": 0,
    "acl": {}
}"#,
            )
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let result = client
            .get_file_info(&FileInfoParams::new("test"))
            .await
            .unwrap();
        assert_eq!(result.filename, "hello.txt");
        assert_eq!(result.description, "greetings");
        assert_eq!(result.inline, 1);
        assert!(result.status.is_none());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn error() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/file/info.cgi")
            .match_body(Matcher::Json(serde_json::json!({
                "url": "test",
                "pass": "secret",
                "sharing_user": "friend@example.com",
            })))
            .with_status(200)
            .with_body(r#"{ "status": "KO", "message": "Resource not allowed #631" }"#)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let params = FileInfoParams::new("test")
            .with_pass("secret")
            .with_sharing_user("friend@example.com");
        let result = client.get_file_info(&params).await.unwrap();
        assert_eq!(result.status.as_deref(), Some("KO"));
        assert_eq!(result.message.as_deref(), Some("Resource not allowed #631"));
        m.assert_async().await;
    }
}
