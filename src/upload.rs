//! Resources needed to upload files
//!
//! An upload goes through three requests:
//!
//! 1. [`get_upload_server`](crate::Client::get_upload_server) allocates an upload node and an emission id,
//! 2. [`upload_files_to`](crate::Client::upload_files_to) posts the files to that node,
//! 3. [`get_upload_result`](crate::Client::get_upload_result) fetches the resulting links.

use std::borrow::Cow;
use std::path::Path;

use reqwest::multipart::{Form, Part};

/// Name of the form field holding the files
pub const FILE_FIELD: &str = "file[]";

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct UploadServerResponse {
    /// Host name of the upload node
    pub url: String,
    /// Emission id to use when posting the files
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl UploadServerResponse {
    /// Address of the upload endpoint of the node.
    pub fn upload_url(&self) -> String {
        let root = self.url.trim_end_matches('/');
        if root.starts_with("http://") || root.starts_with("https://") {
            format!("{root}/upload.cgi")
        } else {
            format!("https://{root}/upload.cgi")
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct UploadedLink {
    pub download: String,
    pub filename: String,
    pub remove: String,
    pub size: String,
    pub whirlpool: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct UploadResult {
    pub incoming: u64,
    pub links: Vec<UploadedLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Multipart content of an upload
///
/// Files are sent under the [`FILE_FIELD`] field, extra fields are sent as text.
///
/// ```rust
/// use onefichier::upload::UploadForm;
///
/// let form = UploadForm::default()
///     .file("hello.txt", "hello world!")
///     .text("did", "0");
/// assert_eq!(form.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UploadForm {
    files: Vec<(String, bytes::Bytes)>,
    fields: Vec<(Cow<'static, str>, String)>,
}

impl UploadForm {
    pub fn file(mut self, filename: impl Into<String>, content: impl Into<bytes::Bytes>) -> Self {
        self.files.push((filename.into(), content.into()));
        self
    }

    /// Reads a local file and adds it to the form, using its file name.
    ///
    /// The whole file is read in memory with a blocking call, from an async
    /// context wrap it in `spawn_blocking` when the file is large.
    pub fn file_from_path(self, path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content = std::fs::read(path).map_err(crate::Error::Upload)?;
        Ok(self.file(filename, content))
    }

    pub fn text(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.files.len() + self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.fields.is_empty()
    }

    /// Builds a new multipart body, the content is shared and not copied.
    fn to_form(&self) -> Form {
        let form = self
            .fields
            .iter()
            .fold(Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            });
        self.files.iter().fold(form, |form, (filename, content)| {
            let part = Part::stream_with_length(content.clone(), content.len() as u64)
                .file_name(filename.clone());
            form.part(FILE_FIELD, part)
        })
    }
}

#[derive(serde::Serialize)]
struct UploadServerParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pretty: Option<u8>,
}

#[derive(serde::Serialize)]
struct UploadParams<'a> {
    id: &'a str,
}

#[derive(serde::Serialize)]
struct UploadResultParams<'a> {
    xid: &'a str,
    #[serde(rename = "Export", skip_serializing_if = "crate::request::is_zero")]
    export: Option<u8>,
    #[serde(rename = "JSON", skip_serializing_if = "crate::request::is_zero")]
    json: Option<u8>,
}

impl crate::Client {
    /// Allocates an upload node.
    ///
    /// The returned id has to be given to [`upload_files_to`](crate::Client::upload_files_to)
    /// or [`upload_files`](crate::Client::upload_files).
    pub async fn get_upload_server(
        &self,
        pretty: Option<u8>,
    ) -> crate::Result<UploadServerResponse> {
        self.post_request("upload/get_upload_server.cgi", &UploadServerParams { pretty })
            .await
    }

    /// Posts a multipart form to `upload.cgi` relative to the API root.
    ///
    /// The server may answer with a redirection, which is followed, or directly with
    /// the upload result. An empty body gives `None`.
    pub async fn upload_files(
        &self,
        id: &str,
        form: UploadForm,
    ) -> crate::Result<Option<UploadResult>> {
        let uri = self.build_url("upload.cgi");
        self.post_request_multipart(uri, &UploadParams { id }, || form.to_form())
            .await
    }

    /// Posts a multipart form to the upload node allocated by [`get_upload_server`](crate::Client::get_upload_server).
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &onefichier::Client) -> Result<(), onefichier::Error> {
    /// use onefichier::upload::UploadForm;
    ///
    /// let server = client.get_upload_server(None).await?;
    /// let form = UploadForm::default().file_from_path("./Cargo.toml")?;
    /// client.upload_files_to(&server, form).await?;
    /// let result = client.get_upload_result(&server.id, None, Some(1)).await?;
    /// for link in result.links {
    ///     println!("{} => {}", link.filename, link.download);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn upload_files_to(
        &self,
        server: &UploadServerResponse,
        form: UploadForm,
    ) -> crate::Result<Option<UploadResult>> {
        let params = UploadParams {
            id: server.id.as_str(),
        };
        self.post_request_multipart(server.upload_url(), &params, || form.to_form())
            .await
    }

    /// Fetches the links of a finished upload.
    ///
    /// `export` and `json` are only sent when set to a non zero value.
    pub async fn get_upload_result(
        &self,
        xid: &str,
        export: Option<u8>,
        json: Option<u8>,
    ) -> crate::Result<UploadResult> {
        self.get_request("end.pl", &UploadResultParams { xid, export, json })
            .await
    }
}
