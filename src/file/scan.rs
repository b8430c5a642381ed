#[derive(serde::Serialize)]
struct FileScanParams<'a> {
    url: &'a str,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ScanFileResponse {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl crate::Client {
    /// Requests an antivirus scan of a file.
    pub async fn scan_file(&self, url: &str) -> crate::Result<ScanFileResponse> {
        self.post_request("file/scan.cgi", &FileScanParams { url })
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
            .mock("POST", "/file/scan.cgi")
            .match_header("authorization", "Bearer api-key")
            .match_body(Matcher::Json(serde_json::json!({ "url": "test" })))
            .with_status(200)
            .with_body(
                r#"{ "status": "OK", "message": "No virus found", "date": "2024-01-02 03:04:05" }"#,
            )
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let result = client.scan_file("test").await.unwrap();
        assert_eq!(result.message, "No virus found");
        assert_eq!(result.date.as_deref(), Some("2024-01-02 03:04:05"));
        m.assert_async().await;
    }
}
