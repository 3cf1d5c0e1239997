//! Discriminated results for remote calls.
//!
//! # Design
//! - Every API wrapper returns [`ApiOutcome`]; callers branch on it instead of sniffing payloads.
//! - Classification is pure over `(status, body)` so it is tested without a network.
//! - Well-formed 2xx bodies missing the expected fields are [`ApiOutcome::AuthFailed`].

use transdesk_api_models::{
    AuthSession, ErrorBody, FileRecord, SigninResponse, SignupResponse, TranslatedUploadAck,
    parse_file_list, parse_json,
};

/// Fallback when a failed login carries no message.
pub const LOGIN_FAILED: &str = "Login failed";
/// Soft failure for a 2xx login without token or data.
pub const USER_NOT_FOUND: &str = "User not found";
/// Generic message for login transport failures.
pub const LOGIN_ERROR: &str = "An error occurred during login";
/// Fallback when a failed signup carries no message.
pub const SIGNUP_FAILED: &str = "Signup failed";
/// Generic message for signup transport failures.
pub const SIGNUP_ERROR: &str = "An error occurred during signup";
/// Prefix for rejected client uploads.
pub const UPLOAD_FAILED: &str = "Upload failed";
/// Generic message for client upload transport failures.
pub const UPLOAD_RETRY: &str = "Upload failed, please try again.";
/// Confirmation shown after a client upload was registered.
pub const UPLOAD_SUCCESS: &str = "File uploaded successfully!";
/// Picker completed without any file.
pub const NO_FILE_UPLOADED: &str = "No file uploaded!";
/// Picker reported an error.
pub const PICKER_ERROR: &str = "Upload error";
/// Message for rejected bearer tokens.
pub const NOT_AUTHORIZED: &str = "Not authorized";

/// Result of one remote call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiOutcome<T> {
    /// Expected payload.
    Ok(T),
    /// Credentials rejected, or the payload lacked what the call promised.
    AuthFailed,
    /// Transport failure or non-2xx response, with a displayable message.
    ServerError(String),
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

const fn is_auth_rejection(status: u16) -> bool {
    matches!(status, 401 | 403)
}

fn server_error<T>(body: &str, fallback: &str) -> ApiOutcome<T> {
    let parsed = ErrorBody::from_body(body);
    ApiOutcome::ServerError(parsed.message().unwrap_or(fallback).to_string())
}

/// Classify a signin response.
#[must_use]
pub fn classify_signin(status: u16, body: &str) -> ApiOutcome<AuthSession> {
    if !is_success(status) {
        return server_error(body, LOGIN_FAILED);
    }
    parse_json::<SigninResponse>(body)
        .ok()
        .and_then(SigninResponse::into_session)
        .map_or(ApiOutcome::AuthFailed, ApiOutcome::Ok)
}

/// Whether a 2xx signup message confirms the account was created.
fn reports_created(message: &str) -> bool {
    message.to_lowercase().contains("successfully")
}

/// Classify a signup response; success carries the confirmation message.
///
/// A 2xx body only counts as success when its message confirms creation. Any
/// other 2xx message is a rejection so callers can map it like a 4xx.
#[must_use]
pub fn classify_signup(status: u16, body: &str) -> ApiOutcome<String> {
    let parsed = parse_json::<SignupResponse>(body).unwrap_or_default();
    if !is_success(status) || parsed.error.is_some() {
        return server_error(body, SIGNUP_FAILED);
    }
    match parsed.message {
        Some(message) if reports_created(&message) => ApiOutcome::Ok(message),
        Some(message) if !message.trim().is_empty() => ApiOutcome::ServerError(message),
        _ => ApiOutcome::AuthFailed,
    }
}

/// Classify a file list response. Malformed 2xx bodies yield an empty list.
#[must_use]
pub fn classify_file_list(status: u16, body: &str) -> ApiOutcome<Vec<FileRecord>> {
    if is_auth_rejection(status) {
        return ApiOutcome::AuthFailed;
    }
    if !is_success(status) {
        return server_error(body, "Failed to fetch files");
    }
    ApiOutcome::Ok(parse_file_list(body))
}

/// Classify the client upload acknowledgement. Rejections carry the full
/// `"Upload failed: <reason>"` text shown to the user.
#[must_use]
pub fn classify_upload(status: u16, body: &str) -> ApiOutcome<()> {
    if is_auth_rejection(status) {
        return ApiOutcome::AuthFailed;
    }
    if !is_success(status) {
        let parsed = ErrorBody::from_body(body);
        let reason = parsed.message().unwrap_or("unknown error");
        return ApiOutcome::ServerError(format!("{UPLOAD_FAILED}: {reason}"));
    }
    ApiOutcome::Ok(())
}

/// Classify the admin translated-file acknowledgement.
#[must_use]
pub fn classify_translated_upload(status: u16, body: &str) -> ApiOutcome<TranslatedUploadAck> {
    if is_auth_rejection(status) {
        return ApiOutcome::AuthFailed;
    }
    if !is_success(status) {
        return server_error(body, "Failed to upload translated file");
    }
    ApiOutcome::Ok(parse_json::<TranslatedUploadAck>(body).unwrap_or_default())
}

/// Fold a transport result into an outcome.
///
/// A failed send or an unreadable body is handed to `report` and becomes
/// `generic`; only a fully read response reaches `classify`.
#[must_use]
pub fn settle<T, E>(
    sent: Result<(u16, String), E>,
    generic: &str,
    classify: impl FnOnce(u16, &str) -> ApiOutcome<T>,
    report: impl FnOnce(E),
) -> ApiOutcome<T> {
    match sent {
        Ok((status, body)) => classify(status, &body),
        Err(err) => {
            report(err);
            ApiOutcome::ServerError(generic.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signin_success_needs_token_and_data() {
        let ApiOutcome::Ok(session) = classify_signin(200, r#"{"token":"t","data":{"id":"u"}}"#)
        else {
            panic!("signin with token and data should succeed");
        };
        assert_eq!(session.token, "t");
        assert_eq!(
            classify_signin(200, r#"{"token":"t"}"#),
            ApiOutcome::AuthFailed
        );
        assert_eq!(classify_signin(200, "not json"), ApiOutcome::AuthFailed);
    }

    #[test]
    fn signin_failure_surfaces_server_message() {
        assert_eq!(
            classify_signin(401, r#"{"error":{"message":"Wrong password"}}"#),
            ApiOutcome::ServerError("Wrong password".to_string())
        );
        assert_eq!(
            classify_signin(500, ""),
            ApiOutcome::ServerError(LOGIN_FAILED.to_string())
        );
    }

    #[test]
    fn signup_error_in_2xx_body_is_a_failure() {
        assert_eq!(
            classify_signup(200, r#"{"error":{"message":"Email already in use"}}"#),
            ApiOutcome::ServerError("Email already in use".to_string())
        );
        assert_eq!(
            classify_signup(400, r#"{"message":"bad"}"#),
            ApiOutcome::ServerError("bad".to_string())
        );
        assert_eq!(
            classify_signup(201, r#"{"message":"User created successfully"}"#),
            ApiOutcome::Ok("User created successfully".to_string())
        );
        assert_eq!(classify_signup(200, "{}"), ApiOutcome::AuthFailed);
    }

    #[test]
    fn signup_2xx_without_confirmation_is_a_rejection() {
        assert_eq!(
            classify_signup(200, r#"{"message":"Email already in use"}"#),
            ApiOutcome::ServerError("Email already in use".to_string())
        );
        assert_eq!(
            classify_signup(200, r#"{"message":"Validation failed"}"#),
            ApiOutcome::ServerError("Validation failed".to_string())
        );
        assert_eq!(
            classify_signup(200, r#"{"message":"Admin Created SUCCESSFULLY"}"#),
            ApiOutcome::Ok("Admin Created SUCCESSFULLY".to_string())
        );
        assert_eq!(
            classify_signup(200, r#"{"message":"  "}"#),
            ApiOutcome::AuthFailed
        );
    }

    #[test]
    fn file_list_rejections_and_garbage() {
        assert_eq!(classify_file_list(401, ""), ApiOutcome::AuthFailed);
        assert_eq!(classify_file_list(200, "<html>"), ApiOutcome::Ok(Vec::new()));
        let ApiOutcome::Ok(rows) = classify_file_list(200, r#"{"data":[{"id":"1","clientId":"c"}]}"#)
        else {
            panic!("well-formed list should classify as ok");
        };
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn file_list_server_failure_carries_message() {
        assert_eq!(
            classify_file_list(500, ""),
            ApiOutcome::ServerError("Failed to fetch files".to_string())
        );
        assert_eq!(
            classify_file_list(503, r#"{"message":"maintenance"}"#),
            ApiOutcome::ServerError("maintenance".to_string())
        );
    }

    #[test]
    fn uploads_classify_status() {
        assert_eq!(classify_upload(200, "{}"), ApiOutcome::Ok(()));
        assert_eq!(
            classify_upload(413, r#"{"message":"too large"}"#),
            ApiOutcome::ServerError("Upload failed: too large".to_string())
        );
        assert_eq!(
            classify_upload(500, ""),
            ApiOutcome::ServerError("Upload failed: unknown error".to_string())
        );
        assert_eq!(
            classify_translated_upload(200, r#"{"translatedUrl":"u"}"#),
            ApiOutcome::Ok(TranslatedUploadAck {
                translated_url: Some("u".to_string()),
            })
        );
        assert_eq!(classify_translated_upload(403, ""), ApiOutcome::AuthFailed);
    }

    #[test]
    fn unreadable_body_is_a_transport_error() {
        let mut reported = None;
        let outcome = settle(
            Err("body stream closed"),
            LOGIN_ERROR,
            classify_signin,
            |err| reported = Some(err),
        );
        assert_eq!(outcome, ApiOutcome::ServerError(LOGIN_ERROR.to_string()));
        assert_eq!(reported, Some("body stream closed"));

        let empty = settle(
            Ok::<_, &str>((200, String::new())),
            LOGIN_ERROR,
            classify_signin,
            |_| panic!("a read body is not a transport error"),
        );
        assert_eq!(empty, ApiOutcome::AuthFailed);
    }
}
