//! Resources needed to manage files

pub mod attributes;
pub mod copy;
pub mod delete;
pub mod get_info;
pub mod list;
pub mod movefile;
pub mod rename;
pub mod scan;

/// Access restrictions of a file
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Acl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium: Option<u8>,
}

impl Acl {
    pub fn with_ip<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ip = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_country<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.country = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_email<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.email = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_premium(mut self, value: u8) -> Self {
        self.premium = Some(value);
        self
    }
}

/// A file as described in the listings
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FileListItem {
    pub url: String,
    pub filename: String,
    pub size: u64,
    pub date: String,
    pub checksum: String,
    #[serde(rename = "content-type")]
    pub content_type: String,
    pub pass: u8,
    pub acl: u8,
    pub cdn: u8,
}

/// Detailed description of a file
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FileInfo {
    pub url: String,
    pub filename: String,
    pub size: u64,
    pub date: String,
    pub folder_id: u64,
    pub path: String,
    pub checksum: String,
    pub content_type: String,
    pub description: String,
    pub pass: u8,
    pub no_ssl: u8,
    pub inline: u8,
    pub cdn: u8,
    pub acl: Acl,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
