#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Transdesk translation API.
//!
//! The remote API is owned by another team and is loose about field names
//! (`clientId` vs `user`, `translated` vs `translatedUrl`). Decoding is
//! therefore lenient: every record type goes through a raw shape that accepts
//! the known spellings and is normalised into one canonical struct.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status label the API assigns once a translation is attached.
pub const STATUS_COMPLETED: &str = "Completed";
/// Status label the API assigns to freshly uploaded source files.
pub const STATUS_UPLOADED: &str = "Uploaded";
/// Mime type reported when the picker did not detect one.
pub const UNKNOWN_MIME_TYPE: &str = "unknown";

/// Failure to decode a response body.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The body was not valid JSON for the expected shape.
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode a JSON body into `T`.
///
/// # Errors
///
/// Returns [`PayloadError::Malformed`] when the body does not match `T`.
pub fn parse_json<T: for<'de> Deserialize<'de>>(body: &str) -> Result<T, PayloadError> {
    Ok(serde_json::from_str(body)?)
}

/// Account role; selects endpoints, storage keys and views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// End user uploading source documents.
    Client,
    /// Operator attaching translated documents.
    Admin,
}

impl Role {
    /// Both roles, client first.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Client, Self::Admin]
    }

    /// Lowercase identifier used in API paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Admin => "admin",
        }
    }

    /// Display label ("Client" / "Admin").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Admin => "Admin",
        }
    }

    /// The other role.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Client => Self::Admin,
            Self::Admin => Self::Client,
        }
    }

    /// `POST` path for signing in.
    #[must_use]
    pub const fn signin_path(self) -> &'static str {
        match self {
            Self::Client => "/api/client/signin",
            Self::Admin => "/api/admin/signin",
        }
    }

    /// `POST` path for creating an account.
    #[must_use]
    pub const fn signup_path(self) -> &'static str {
        match self {
            Self::Client => "/api/client/signup",
            Self::Admin => "/api/admin/signup",
        }
    }
}

/// `GET` path listing the files of one client.
#[must_use]
pub fn client_files_path(client_id: &str) -> String {
    format!("/api/file/{client_id}")
}

/// `GET` path listing every file (admin only).
pub const ADMIN_FILES_PATH: &str = "/api/file/admin/files";

/// `POST` path registering a picker upload.
pub const UPLOAD_PATH: &str = "/api/file/upload";

/// `POST` path attaching a translated file to a record.
#[must_use]
pub fn admin_upload_path(file_id: &str) -> String {
    format!("/api/file/admin/upload/{file_id}")
}

/// `GET` path streaming a stored file.
#[must_use]
pub fn download_path(id: &str) -> String {
    format!("/api/file/download/{id}")
}

/// Credentials sent to a signin endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Account details sent to a signup endpoint. Never carries the password
/// confirmation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Error body shape used by the API: either `{error: {message}}` or
/// `{message}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    /// Nested error object.
    #[serde(default)]
    pub error: Option<ErrorDetail>,
    /// Top-level message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Nested error object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    /// Server-provided error message.
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Best message the server provided, preferring the nested error.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(|detail| detail.message.as_deref())
            .or(self.message.as_deref())
            .filter(|msg| !msg.trim().is_empty())
    }

    /// Parse an error body, falling back to an empty one on garbage.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

/// Profile of the signed-in user as returned in the signin `data` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Server identifier.
    #[serde(alias = "_id", deserialize_with = "lenient_id")]
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Account email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Raw signin response `{token, data}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SigninResponse {
    /// Bearer token.
    #[serde(default)]
    pub token: Option<String>,
    /// User payload.
    #[serde(default)]
    pub data: Option<Value>,
}

/// Signin result once both `token` and `data` are present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSession {
    /// Bearer token to persist.
    pub token: String,
    /// Profile decoded from `data`, when it has an identifier.
    pub user: Option<UserProfile>,
}

impl SigninResponse {
    /// Promote the response into a session when it carries a non-empty token
    /// and a non-null data payload.
    #[must_use]
    pub fn into_session(self) -> Option<AuthSession> {
        let token = self.token.filter(|token| !token.is_empty())?;
        let data = self.data.filter(|data| !data.is_null())?;
        let user = serde_json::from_value::<UserProfile>(data)
            .ok()
            .filter(|user| !user.id.is_empty());
        Some(AuthSession { token, user })
    }
}

/// Raw signup response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SignupResponse {
    /// Confirmation message.
    #[serde(default)]
    pub message: Option<String>,
    /// Error object some deployments return with a 2xx status.
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

/// One uploaded document and its translation state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawFileRecord")]
pub struct FileRecord {
    /// Record identifier.
    pub id: String,
    /// Identifier of the owning client.
    pub owner_id: String,
    /// Owner display name, when the list carries it.
    pub owner_name: Option<String>,
    /// Location of the source document.
    pub original_file_url: Option<String>,
    /// Location of the translated document, once attached.
    pub translated_file_url: Option<String>,
    /// Server status label.
    pub status: String,
    /// Source document mime type.
    pub mime_type: Option<String>,
}

impl FileRecord {
    /// A record with a translated file is complete whatever its status says.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.translated_file_url.is_some()
    }

    /// Status text to display.
    #[must_use]
    pub fn status_label(&self) -> &str {
        if !self.status.is_empty() {
            &self.status
        } else if self.is_complete() {
            STATUS_COMPLETED
        } else {
            STATUS_UPLOADED
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFileRecord {
    #[serde(default, deserialize_with = "lenient_opt_id")]
    id: Option<String>,
    #[serde(default, rename = "_id", deserialize_with = "lenient_opt_id")]
    object_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_id")]
    owner_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_id")]
    client_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_id")]
    user: Option<String>,
    #[serde(default)]
    owner_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    original_file_url: Option<String>,
    #[serde(default)]
    file_url: Option<String>,
    #[serde(default)]
    translated_file_url: Option<String>,
    #[serde(default)]
    translated: Option<String>,
    #[serde(default)]
    translated_url: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    mime_type: Option<String>,
    #[serde(default)]
    file_type: Option<String>,
}

impl From<RawFileRecord> for FileRecord {
    fn from(raw: RawFileRecord) -> Self {
        Self {
            id: raw.id.or(raw.object_id).unwrap_or_default(),
            owner_id: raw
                .owner_id
                .or(raw.client_id)
                .or(raw.user)
                .unwrap_or_default(),
            owner_name: non_empty(raw.owner_name.or(raw.name)),
            original_file_url: non_empty(raw.original_file_url.or(raw.file_url)),
            translated_file_url: non_empty(
                raw.translated_file_url
                    .or(raw.translated)
                    .or(raw.translated_url),
            ),
            status: raw.status.unwrap_or_default(),
            mime_type: non_empty(raw.mime_type.or(raw.file_type)),
        }
    }
}

#[derive(Deserialize)]
struct FileListEnvelope {
    #[serde(default)]
    data: Option<Vec<Value>>,
}

/// Decode a `{data: [...]}` list body. Missing or malformed payloads yield an
/// empty list; individual entries that fail to decode are skipped.
#[must_use]
pub fn parse_file_list(body: &str) -> Vec<FileRecord> {
    let Ok(envelope) = serde_json::from_str::<FileListEnvelope>(body) else {
        return Vec::new();
    };
    envelope
        .data
        .unwrap_or_default()
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<FileRecord>(entry).ok())
        .collect()
}

/// Acknowledgement of a translated-file upload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TranslatedUploadAck {
    /// Location of the stored translation.
    #[serde(default, rename = "translatedUrl", alias = "translated")]
    pub translated_url: Option<String>,
}

/// Form fields posted after a picker upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUploadForm {
    /// CDN location reported by the picker.
    pub file_url: String,
    /// Detected mime type.
    pub file_type: String,
}

impl FileUploadForm {
    /// Field name/value pairs in the order the API expects.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 2] {
        [("fileUrl", &self.file_url), ("fileType", &self.file_type)]
    }
}

/// Completion payload of the hosted picker widget.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerResult {
    /// Files the widget stored.
    #[serde(default)]
    pub files_uploaded: Vec<PickedFile>,
}

/// One file stored by the picker.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PickedFile {
    /// CDN location.
    pub url: String,
    /// Detected mime type.
    #[serde(default)]
    pub mimetype: Option<String>,
}

impl PickerResult {
    /// Upload form for the first stored file, if any.
    #[must_use]
    pub fn first_upload(&self) -> Option<FileUploadForm> {
        let file = self.files_uploaded.first()?;
        Some(FileUploadForm {
            file_url: file.url.clone(),
            file_type: file
                .mimetype
                .clone()
                .filter(|mime| !mime.is_empty())
                .unwrap_or_else(|| UNKNOWN_MIME_TYPE.to_string()),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn id_from_value(value: Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        Value::Number(number) => Ok(Some(number.to_string())),
        Value::Object(mut map) => {
            let nested = map
                .remove("id")
                .or_else(|| map.remove("_id"))
                .unwrap_or(Value::Null);
            match nested {
                Value::Object(_) => Err("nested id object".to_string()),
                other => id_from_value(other),
            }
        }
        other => Err(format!("unexpected id value: {other}")),
    }
}

fn lenient_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    id_from_value(value).map_err(de::Error::custom)
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_opt_id(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_paths_are_namespaced() {
        assert_eq!(Role::Client.signin_path(), "/api/client/signin");
        assert_eq!(Role::Admin.signup_path(), "/api/admin/signup");
        assert_eq!(Role::Client.other(), Role::Admin);
        assert_eq!(admin_upload_path("f1"), "/api/file/admin/upload/f1");
        assert_eq!(download_path("42"), "/api/file/download/42");
        assert_eq!(client_files_path("c9"), "/api/file/c9");
    }

    #[test]
    fn signup_request_omits_confirmation() {
        let body = serde_json::to_value(SignupRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "secret1".into(),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"name": "Ada", "email": "ada@example.com", "password": "secret1"})
        );
    }

    #[test]
    fn error_body_prefers_nested_message() {
        let body = ErrorBody::from_body(r#"{"error":{"message":"bad creds"},"message":"top"}"#);
        assert_eq!(body.message(), Some("bad creds"));
        assert!(body.error.is_some());
        let top = ErrorBody::from_body(r#"{"message":"top"}"#);
        assert_eq!(top.message(), Some("top"));
        assert_eq!(ErrorBody::from_body("<html>").message(), None);
        assert_eq!(ErrorBody::from_body(r#"{"message":"  "}"#).message(), None);
    }

    #[test]
    fn signin_requires_token_and_data() {
        let full: SigninResponse =
            parse_json(r#"{"token":"t1","data":{"_id":"u1","name":"Ada"}}"#).unwrap();
        let session = full.into_session().unwrap();
        assert_eq!(session.token, "t1");
        assert_eq!(session.user.unwrap().id, "u1");

        let no_data: SigninResponse = parse_json(r#"{"token":"t1"}"#).unwrap();
        assert!(no_data.into_session().is_none());
        let null_data: SigninResponse = parse_json(r#"{"token":"t1","data":null}"#).unwrap();
        assert!(null_data.into_session().is_none());
        let no_token: SigninResponse = parse_json(r#"{"data":{"id":1}}"#).unwrap();
        assert!(no_token.into_session().is_none());
        let empty_token: SigninResponse = parse_json(r#"{"token":"","data":{}}"#).unwrap();
        assert!(empty_token.into_session().is_none());
    }

    #[test]
    fn signin_data_without_id_keeps_token() {
        let response: SigninResponse = parse_json(r#"{"token":"t","data":true}"#).unwrap();
        let session = response.into_session().unwrap();
        assert_eq!(session.token, "t");
        assert!(session.user.is_none());
    }

    #[test]
    fn file_record_accepts_client_spelling() {
        let record: FileRecord = serde_json::from_value(json!({
            "id": 7,
            "clientId": 3,
            "fileUrl": "https://cdn/a.pdf",
            "fileType": "application/pdf",
            "status": "Uploaded",
            "translated": ""
        }))
        .unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.owner_id, "3");
        assert_eq!(record.original_file_url.as_deref(), Some("https://cdn/a.pdf"));
        assert_eq!(record.mime_type.as_deref(), Some("application/pdf"));
        assert!(!record.is_complete());
    }

    #[test]
    fn file_record_accepts_admin_spelling() {
        let record: FileRecord = serde_json::from_value(json!({
            "_id": "abc",
            "user": {"_id": "owner-1"},
            "name": "Ada",
            "translated": "https://cdn/a-ar.pdf",
            "status": "Uploaded"
        }))
        .unwrap();
        assert_eq!(record.id, "abc");
        assert_eq!(record.owner_id, "owner-1");
        assert_eq!(record.owner_name.as_deref(), Some("Ada"));
        assert!(record.is_complete());
        assert_eq!(record.status_label(), "Uploaded");
    }

    #[test]
    fn status_label_falls_back_on_completion() {
        let pending = FileRecord::default();
        assert_eq!(pending.status_label(), STATUS_UPLOADED);
        let done = FileRecord {
            translated_file_url: Some("u".into()),
            ..FileRecord::default()
        };
        assert_eq!(done.status_label(), STATUS_COMPLETED);
    }

    #[test]
    fn file_list_tolerates_bad_payloads() {
        assert!(parse_file_list("").is_empty());
        assert!(parse_file_list("{}").is_empty());
        assert!(parse_file_list(r#"{"data":null}"#).is_empty());
        assert!(parse_file_list(r#"{"data":"nope"}"#).is_empty());
        let list = parse_file_list(r#"{"data":[{"id":"a","clientId":"c"},{"id":[1]}]}"#);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "a");
    }

    #[test]
    fn picker_result_defaults_mime_type() {
        let result: PickerResult = parse_json(
            r#"{"filesUploaded":[{"url":"https://cdn/x","mimetype":null}],"filesFailed":[]}"#,
        )
        .unwrap();
        let form = result.first_upload().unwrap();
        assert_eq!(form.file_url, "https://cdn/x");
        assert_eq!(form.file_type, UNKNOWN_MIME_TYPE);
        assert_eq!(
            form.fields(),
            [("fileUrl", "https://cdn/x"), ("fileType", UNKNOWN_MIME_TYPE)]
        );
        assert!(PickerResult::default().first_upload().is_none());
    }

    #[test]
    fn translated_ack_reads_url() {
        let ack: TranslatedUploadAck = parse_json(r#"{"translatedUrl":"https://cdn/t"}"#).unwrap();
        assert_eq!(ack.translated_url.as_deref(), Some("https://cdn/t"));
        assert!(parse_json::<TranslatedUploadAck>("not json").is_err());
    }
}
