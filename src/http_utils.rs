use crate::storage::LedgerError;
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn to_http_error(err: LedgerError) -> (StatusCode, Json<ErrorBody>) {
    let status = match err {
        LedgerError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        LedgerError::UserNotFound | LedgerError::RecipientNotFound => StatusCode::NOT_FOUND,
        LedgerError::InsufficientBalance => StatusCode::BAD_REQUEST,
    };
    (status, Json(ErrorBody { error: err.to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_per_error() {
        let (status, body) = to_http_error(LedgerError::InvalidCredentials);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "Invalid Credentials");

        let (status, body) = to_http_error(LedgerError::UserNotFound);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "User not found");

        let (status, body) = to_http_error(LedgerError::RecipientNotFound);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Recipient not found");

        let (status, body) = to_http_error(LedgerError::InsufficientBalance);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Insufficient balance");
    }
}
