//! Resources needed to manage folders

pub mod create;
pub mod delete;
pub mod list;
pub mod movefolder;
pub mod share;

/// Identifier of the root folder
pub const ROOT: u64 = 0;

/// Permissions given to an account on a shared folder
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Share {
    pub email: String,
    /// 1 when the account can write in the folder
    pub rw: u8,
    /// 1 when the download links are hidden to the account
    pub hide_links: u8,
}

impl Share {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn with_rw(mut self, value: u8) -> Self {
        self.rw = value;
        self
    }

    pub fn with_hide_links(mut self, value: u8) -> Self {
        self.hide_links = value;
        self
    }
}

/// A structure representing a folder and, depending on the request, its content
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FolderInfo {
    pub folder_id: u64,
    pub name: String,
    pub create_date: String,
    pub shared: String,
    pub pass: u8,
    pub shares: Vec<Share>,
    pub user: String,
    pub rw: u8,
    pub hide_links: u8,
    pub files: u64,
    pub size: u64,
    pub sub_folders: Vec<FolderInfo>,
    pub items: Vec<crate::file::FileListItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FolderInfo {
    pub fn find_folder(&self, name: &str) -> Option<&FolderInfo> {
        self.sub_folders.iter().find(|item| item.name == name)
    }

    pub fn find_file(&self, filename: &str) -> Option<&crate::file::FileListItem> {
        self.items.iter().find(|item| item.filename == filename)
    }
}
