use actix_web::{
    HttpRequest, HttpResponse, ResponseError,
    error::{JsonPayloadError, PathError},
    http::StatusCode,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Failure of a request, rendered as [`ErrorBody`].
#[derive(Debug, Display)]
pub enum AppError {
    #[display(fmt = "{}", _0)]
    NotFound(String),
    #[display(fmt = "{}", _0)]
    Validation(String),
    #[display(fmt = "{}", _0)]
    Forbidden(String),
    /// The store rejected a statement. The detail is logged where it
    /// happened and never sent to the caller.
    #[display(fmt = "storage error: {}", source)]
    Storage {
        status: StatusCode,
        source: sqlx::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = 404)]
    pub status: u16,
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Usuario con ID 7 no encontrado")]
    pub message: String,
}

impl AppError {
    fn public_message(&self) -> String {
        match self {
            AppError::NotFound(msg) | AppError::Validation(msg) | AppError::Forbidden(msg) => {
                msg.clone()
            }
            AppError::Storage { status, .. } if status.is_client_error() => {
                "La solicitud no pudo procesarse".to_string()
            }
            AppError::Storage { .. } => "Error interno del servidor".to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Storage { status, .. } => *status,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorBody {
            status: status.as_u16(),
            success: false,
            message: self.public_message(),
        })
    }
}

/// Body extraction failures (missing field, wrong type, bad JSON) share the
/// validation error shape.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(format!("Cuerpo de la solicitud inválido: {err}")).into()
}

/// A path segment that does not parse (e.g. `/user/abc`) names no record.
pub fn path_error_handler(_err: PathError, req: &HttpRequest) -> actix_web::Error {
    AppError::NotFound(format!("Recurso {} no encontrado", req.path())).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(err: AppError) -> ErrorBody {
        let resp = err.error_response();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn not_found_keeps_its_message() {
        let err = AppError::NotFound("Evento no encontrado".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let body = body_of(err).await;
        assert_eq!(body.status, 404);
        assert!(!body.success);
        assert_eq!(body.message, "Evento no encontrado");
    }

    #[actix_web::test]
    async fn storage_detail_is_not_exposed() {
        let err = AppError::Storage {
            status: StatusCode::BAD_REQUEST,
            source: sqlx::Error::Protocol("near \"FROM\": syntax error".into()),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = body_of(err).await;
        assert_eq!(body.status, 400);
        assert!(!body.message.contains("syntax"));
    }

    #[actix_web::test]
    async fn server_side_storage_failure() {
        let err = AppError::Storage {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            source: sqlx::Error::PoolClosed,
        };
        let body = body_of(err).await;
        assert_eq!(body.status, 500);
        assert_eq!(body.message, "Error interno del servidor");
    }
}
