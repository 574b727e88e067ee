use std::borrow::Cow;

/// Errors raised by the compliance slice.
#[regscope_derive::regscope_error]
pub enum ComplianceError {
    /// The request is well-formed JSON but semantically invalid.
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The risk analyst could not produce a verdict.
    #[error("Risk analyst failure{}: {message}", format_context(.context))]
    Analyst { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[cfg(feature = "server")]
    #[error("Compliance state error{}: {source}", format_context(.context))]
    State {
        source: regscope_kernel::prelude::ApiStateError,
        context: Option<Cow<'static, str>>,
    },
    #[error("Verdict serialization error{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },
    #[error("Internal compliance error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ComplianceError {
    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation { message: message.into(), context: None }
    }

    pub fn analyst(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Analyst { message: message.into(), context: None }
    }
}

#[cfg(feature = "server")]
mod response {
    use super::ComplianceError;
    use axum::Json;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use serde::Serialize;

    /// Error body: `{"detail": "..."}`.
    #[derive(Debug, Serialize)]
    struct ErrorBody {
        detail: String,
    }

    impl ComplianceError {
        #[must_use]
        pub fn status(&self) -> StatusCode {
            match self {
                Self::Validation { .. } => StatusCode::BAD_REQUEST,
                Self::Analyst { .. } => StatusCode::BAD_GATEWAY,
                Self::State { .. } | Self::Serialize { .. } | Self::Internal { .. } => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        }
    }

    impl IntoResponse for ComplianceError {
        fn into_response(self) -> Response {
            let status = self.status();

            let detail = if status.is_server_error() {
                tracing::error!(error = %self, "Compliance request failed");
                match &self {
                    Self::Analyst { .. } => "Risk analysis is temporarily unavailable".to_owned(),
                    _ => "An internal error occurred".to_owned(),
                }
            } else {
                tracing::warn!(error = %self, "Compliance request rejected");
                self.to_string()
            };

            (status, Json(ErrorBody { detail })).into_response()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn statuses_follow_variant() {
            assert_eq!(ComplianceError::validation("x").status(), StatusCode::BAD_REQUEST);
            assert_eq!(ComplianceError::analyst("x").status(), StatusCode::BAD_GATEWAY);
            assert_eq!(
                ComplianceError::from("boom").status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }
}
