//! Resources needed to manage the vouchers

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Voucher {
    pub voucher: String,
    pub service: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct VoucherListResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub count: u64,
    pub data: Vec<Voucher>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct VoucherCheckResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub service: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct VoucherUseResponse {
    pub status: String,
    pub message: String,
}

#[derive(serde::Serialize)]
struct VoucherParams<'a> {
    voucher: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_email: Option<&'a str>,
}

impl crate::Client {
    /// Lists the unused vouchers of the account.
    pub async fn list_vouchers(&self) -> crate::Result<VoucherListResponse> {
        self.post_empty_request("vouchers/ls.cgi").await
    }

    pub async fn check_voucher(&self, voucher: &str) -> crate::Result<VoucherCheckResponse> {
        let params = VoucherParams {
            voucher,
            user_email: None,
        };
        self.post_request("vouchers/check.cgi", &params).await
    }

    /// Applies a voucher to the account with the given email.
    pub async fn use_voucher(
        &self,
        voucher: &str,
        user_email: &str,
    ) -> crate::Result<VoucherUseResponse> {
        let params = VoucherParams {
            voucher,
            user_email: Some(user_email),
        };
        self.post_request("vouchers/use.cgi", &params).await
    }
}
