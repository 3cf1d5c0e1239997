//! HTTP client helpers (REST).
//!
//! Every call returns an [`ApiOutcome`]; transport failures are logged to the
//! console and folded into [`ApiOutcome::ServerError`] with a generic message.

use crate::core::config::UiConfig;
use crate::core::outcome::{
    ApiOutcome, LOGIN_ERROR, SIGNUP_ERROR, UPLOAD_RETRY, classify_file_list, classify_signin,
    classify_signup, classify_translated_upload, classify_upload, settle,
};
use anyhow::anyhow;
use gloo::console;
use gloo_net::http::Request;
use transdesk_api_models::{
    ADMIN_FILES_PATH, AuthSession, FileRecord, FileUploadForm, LoginRequest, Role, SignupRequest,
    TranslatedUploadAck, UPLOAD_PATH, admin_upload_path, client_files_path, download_path,
};
use web_sys::{AbortSignal, File, FormData};

const UNEXPECTED_ERROR: &str = "Request failed, please try again.";

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    config: UiConfig,
}

impl ApiClient {
    pub(crate) const fn new(config: UiConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    async fn send(request: Request) -> anyhow::Result<(u16, String)> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }

    async fn exchange<T>(
        operation: &'static str,
        request: anyhow::Result<Request>,
        generic: &str,
        classify: impl FnOnce(u16, &str) -> ApiOutcome<T>,
    ) -> ApiOutcome<T> {
        let sent = match request {
            Ok(request) => Self::send(request).await,
            Err(err) => Err(err),
        };
        settle(sent, generic, classify, |err| {
            console::error!("request failed", operation, err.to_string());
        })
    }

    pub(crate) async fn signin(&self, role: Role, body: &LoginRequest) -> ApiOutcome<AuthSession> {
        let request = Request::post(&self.url(role.signin_path()))
            .json(body)
            .map_err(anyhow::Error::from);
        Self::exchange("signin", request, LOGIN_ERROR, classify_signin)
            .await
    }

    pub(crate) async fn signup(&self, role: Role, body: &SignupRequest) -> ApiOutcome<String> {
        let request = Request::post(&self.url(role.signup_path()))
            .json(body)
            .map_err(anyhow::Error::from);
        Self::exchange("signup", request, SIGNUP_ERROR, classify_signup)
            .await
    }

    /// Files visible to the client `client_id`.
    pub(crate) async fn client_files(
        &self,
        token: &str,
        client_id: &str,
        signal: Option<&AbortSignal>,
    ) -> ApiOutcome<Vec<FileRecord>> {
        let request = Request::get(&self.url(&client_files_path(client_id)))
            .header("Authorization", &bearer(token))
            .abort_signal(signal);
        Self::exchange("client_files", Ok(request), UNEXPECTED_ERROR, classify_file_list)
            .await
    }

    /// Every file, for administrators.
    pub(crate) async fn admin_files(
        &self,
        token: &str,
        signal: Option<&AbortSignal>,
    ) -> ApiOutcome<Vec<FileRecord>> {
        let request = Request::get(&self.url(ADMIN_FILES_PATH))
            .header("Authorization", &bearer(token))
            .abort_signal(signal);
        Self::exchange("admin_files", Ok(request), UNEXPECTED_ERROR, classify_file_list)
            .await
    }

    /// Register a picker upload. Sends the CDN URL and mime type, not the bytes.
    pub(crate) async fn register_upload(
        &self,
        token: &str,
        upload: &FileUploadForm,
        signal: Option<&AbortSignal>,
    ) -> ApiOutcome<()> {
        let request = form_data(|form| {
            for (name, value) in upload.fields() {
                form.append_with_str(name, value)
                    .map_err(|err| anyhow!("append {name}: {err:?}"))?;
            }
            Ok(())
        })
        .map(|form| {
            Request::post(&self.url(UPLOAD_PATH))
                .header("Authorization", &bearer(token))
                .abort_signal(signal)
                .body(form)
        });
        Self::exchange("register_upload", request, UPLOAD_RETRY, classify_upload)
            .await
    }

    /// Attach a translated file to record `file_id`.
    pub(crate) async fn upload_translated(
        &self,
        token: &str,
        file_id: &str,
        file: &File,
        signal: Option<&AbortSignal>,
    ) -> ApiOutcome<TranslatedUploadAck> {
        let request = form_data(|form| {
            form.append_with_blob_and_filename("file", file, &file.name())
                .map_err(|err| anyhow!("attach file: {err:?}"))
        })
        .map(|form| {
            Request::post(&self.url(&admin_upload_path(file_id)))
                .header("Authorization", &bearer(token))
                .abort_signal(signal)
                .body(form)
        });
        Self::exchange(
            "upload_translated",
            request,
            UNEXPECTED_ERROR,
            classify_translated_upload,
        )
        .await
    }

    /// Raw bytes of a stored file.
    pub(crate) async fn download(&self, token: &str, id: &str) -> anyhow::Result<Vec<u8>> {
        let response = Request::get(&self.url(&download_path(id)))
            .header("Authorization", &bearer(token))
            .send()
            .await?;
        if !response.ok() {
            return Err(anyhow!("download failed with status {}", response.status()));
        }
        Ok(response.binary().await?)
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn form_data(fill: impl FnOnce(&FormData) -> anyhow::Result<()>) -> anyhow::Result<FormData> {
    let form = FormData::new().map_err(|_| anyhow!("form-data failed"))?;
    fill(&form)?;
    Ok(form)
}
