//! Resources needed to read and update the account settings

/// Settings to update, the ones left unset are not changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct UserSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ftp_mode: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ftp_did: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ftp_report: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ru_report: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_domain: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_port_files: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_cdn: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_menu: Option<u8>,
}

impl UserSettings {
    pub fn with_ftp_mode(mut self, value: u8) -> Self {
        self.ftp_mode = Some(value);
        self
    }

    /// Folder receiving the files uploaded through ftp.
    pub fn with_ftp_did(mut self, value: u64) -> Self {
        self.ftp_did = Some(value);
        self
    }

    pub fn with_ftp_report(mut self, value: u8) -> Self {
        self.ftp_report = Some(value);
        self
    }

    pub fn with_ru_report(mut self, value: u8) -> Self {
        self.ru_report = Some(value);
        self
    }

    pub fn with_default_domain(mut self, value: u8) -> Self {
        self.default_domain = Some(value);
        self
    }

    pub fn with_page_limit(mut self, value: u64) -> Self {
        self.page_limit = Some(value);
        self
    }

    pub fn with_default_port(mut self, value: u16) -> Self {
        self.default_port = Some(value);
        self
    }

    pub fn with_default_port_files(mut self, value: u16) -> Self {
        self.default_port_files = Some(value);
        self
    }

    pub fn with_use_cdn(mut self, value: u8) -> Self {
        self.use_cdn = Some(value);
        self
    }

    pub fn with_download_menu(mut self, value: u8) -> Self {
        self.download_menu = Some(value);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct UserInfoResponse {
    pub status: String,
    pub message: String,
    pub email: String,
    pub offer: u8,
    #[serde(rename = "2fa")]
    pub two_factor: u8,
    pub mail_rm: u8,
    pub ftp_mode: u8,
    pub ftp_did: u64,
    pub ftp_report: u8,
    pub ru_report: u8,
    pub default_domain: u8,
    pub page_limit: u64,
    pub default_port: u16,
    pub default_port_files: u16,
    pub cdn: u8,
    pub download_menu: u8,
    pub use_cdn: u8,
    pub subscription_end: String,
    pub default_quota: u64,
    pub default_cold_storage_quota: u64,
    pub hot_storage: u64,
    pub cold_storage: u64,
    pub stats_date: String,
    pub allowed_cold_storage: u64,
    pub available_storage: u64,
    pub available_cold_storage: u64,
    pub extended_quota: u64,
    pub extended_quota_end: String,
    pub overquota: u8,
    pub upload_forbidden: u8,
}

impl crate::Client {
    /// Reads the account information, updating the given settings first.
    ///
    /// Without settings, an empty object is sent.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &onefichier::Client) -> Result<(), onefichier::Error> {
    /// use onefichier::user::UserSettings;
    ///
    /// let info = client.get_user_info(None).await?;
    /// println!("{} uses {} bytes", info.email, info.hot_storage);
    /// let settings = UserSettings::default().with_use_cdn(1);
    /// client.get_user_info(Some(&settings)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_user_info(
        &self,
        settings: Option<&UserSettings>,
    ) -> crate::Result<UserInfoResponse> {
        let empty = UserSettings::default();
        self.post_request("user/info.cgi", settings.unwrap_or(&empty))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::{UserInfoResponse, UserSettings};
    use mockito::Matcher;

    const BODY: &str = r#"{
    "status": "OK",
    "message": "",
    "email": "me@example.com",
    "offer": 1,
    "2fa": 1,
    "mail_rm": 0,
    "ftp_mode": 0,
    "ftp_did": 0,
    "ftp_report": 0,
    "ru_report": 1,
    "default_domain": 0,
    "page_limit": 1000,
    "default_port": 443,
    "default_port_files": 443,
    "cdn": 0,
    "download_menu": 1,
    "use_cdn": 0,
    "subscription_end": "2025-01-01 00:00:00",
    "default_quota": 107374182400,
    "default_cold_storage_quota": 2199023255552,
    "hot_storage": 1073741824,
    "cold_storage": 0,
    "stats_date": "2024-01-02 00:00:00",
    "allowed_cold_storage": 2199023255552,
    "available_storage": 106300440576,
    "available_cold_storage": 2199023255552,
    "extended_quota": 0,
    "extended_quota_end": "",
    "overquota": 0,
    "upload_forbidden": 0
}"#;

    #[tokio::test]
    async fn without_settings() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/user/info.cgi")
            .match_header("authorization", "Bearer api-key")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Exact("{}".into()))
            .with_status(200)
            .with_body(BODY)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let result = client.get_user_info(None).await.unwrap();
        assert_eq!(result.email, "me@example.com");
        assert_eq!(result.two_factor, 1);
        assert_eq!(result.default_quota, 107374182400);
        m.assert_async().await;
    }

    #[tokio::test]
    async fn with_settings() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/user/info.cgi")
            .match_body(Matcher::Json(serde_json::json!({
                "use_cdn": 1,
                "page_limit": 500,
            })))
            .with_status(200)
            .with_body(BODY)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let settings = UserSettings::default()
            .with_use_cdn(1)
            .with_page_limit(500);
        client.get_user_info(Some(&settings)).await.unwrap();
        m.assert_async().await;
    }

    #[test]
    fn roundtrip_keeps_2fa() {
        let value: serde_json::Value = serde_json::from_str(BODY).unwrap();
        let info: UserInfoResponse = serde_json::from_value(value.clone()).unwrap();
        let output = serde_json::to_value(&info).unwrap();
        assert_eq!(output["2fa"], 1);
        assert_eq!(output, value);
    }
}
