use std::borrow::Cow;

use super::Acl;

/// Parameters used to change the attributes of files.
///
/// Only the attributes that are set are sent.
#[derive(Debug, serde::Serialize)]
pub struct FileAttributesParams<'a> {
    pub urls: Vec<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_ssl: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdn: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl: Option<Acl>,
}

impl<'a> FileAttributesParams<'a> {
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'a, str>>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            filename: None,
            description: None,
            pass: None,
            no_ssl: None,
            inline: None,
            cdn: None,
            acl: None,
        }
    }

    pub fn with_filename(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.filename = Some(value.into());
        self
    }

    pub fn with_description(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn with_pass(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.pass = Some(value.into());
        self
    }

    pub fn with_no_ssl(mut self, value: u8) -> Self {
        self.no_ssl = Some(value);
        self
    }

    pub fn with_inline(mut self, value: u8) -> Self {
        self.inline = Some(value);
        self
    }

    pub fn with_cdn(mut self, value: u8) -> Self {
        self.cdn = Some(value);
        self
    }

    pub fn with_acl(mut self, value: Acl) -> Self {
        self.acl = Some(value);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ChangeAttrResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub updated: u64,
    pub urls: Vec<String>,
}

impl crate::Client {
    pub async fn change_file_attributes(
        &self,
        params: &FileAttributesParams<'_>,
    ) -> crate::Result<ChangeAttrResponse> {
        self.post_request("file/chattr.cgi", params).await
    }
}

#[cfg(test)]
mod tests {
    use super::FileAttributesParams;
    use crate::file::Acl;
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/file/chattr.cgi")
            .match_header("authorization", "Bearer api-key")
            .match_body(Matcher::Json(serde_json::json!({ "urls": ["test"] })))
            .with_status(200)
            .with_body(r#"{ "status": "OK", "updated": 1, "urls": ["test"] }"#)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let result = client
            .change_file_attributes(&FileAttributesParams::new(["test"]))
            .await
            .unwrap();
        assert_eq!(result.updated, 1);
        m.assert_async().await;
    }

    #[tokio::test]
    async fn with_acl() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/file/chattr.cgi")
            .match_body(Matcher::Json(serde_json::json!({
                "urls": ["test"],
                "description": "holidays",
                "cdn": 1,
                "acl": { "country": ["FR", "BE"], "premium": 1 },
            })))
            .with_status(200)
            .with_body(r#"{ "status": "OK", "updated": 1, "urls": ["test"] }"#)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let params = FileAttributesParams::new(["test"])
            .with_description("holidays")
            .with_cdn(1)
            .with_acl(Acl::default().with_country(["FR", "BE"]).with_premium(1));
        client.change_file_attributes(&params).await.unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn failure() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/file/chattr.cgi")
            .with_status(200)
            .with_body(r#"{ "status": "KO", "message": "Invalid filename" }"#)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let result = client
            .change_file_attributes(&FileAttributesParams::new(["u"]))
            .await
            .unwrap();
        assert_eq!(result.status, "KO");
        assert_eq!(result.message.as_deref(), Some("Invalid filename"));
        m.assert_async().await;
    }
}
