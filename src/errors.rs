use axum::http::StatusCode;

/// Validation failure reported back to an edit dialog. Persistence faults
/// never reach this type: the sync layer logs and swallows them as
/// `StoreError`, so a rejected form input is the only user-visible error.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn bad_request_responds_with_400_and_message() {
        let response = AppError::bad_request("streak must be between 0 and 30").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
