use crate::error::AppError;
use crate::model::{role::Role, user::UserSummary};
use crate::store::{StoreError, users};
use actix_web::middleware::Next;
use actix_web::{
    Error, HttpMessage, ResponseError,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web::Data,
};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

pub const EMAIL_HEADER: &str = "X-User-Email";
pub const PASSWORD_HEADER: &str = "X-User-Password";

fn header(req: &ServiceRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|h| h.to_str().ok())
        .map(str::to_owned)
}

fn forbidden(req: ServiceRequest, required: Role) -> ServiceResponse<BoxBody> {
    let err = AppError::Forbidden(format!(
        "No tiene permisos de {required} para acceder a este recurso"
    ));
    req.into_response(err.error_response())
}

/// Lets the request through only when the credentials in the
/// `X-User-Email`/`X-User-Password` headers belong to a user with the
/// `required` role. Anonymous callers are denied like any other role.
///
/// Compose with `from_fn(|req, next| require_role(Role::Profesor, req, next))`.
/// The caller's [`UserSummary`] is left in the request extensions.
pub async fn require_role(
    required: Role,
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let (Some(email), Some(password)) = (header(&req, EMAIL_HEADER), header(&req, PASSWORD_HEADER))
    else {
        debug!(%required, "Anonymous caller denied");
        return Ok(forbidden(req, required));
    };

    let pool = req
        .app_data::<Data<SqlitePool>>()
        .cloned()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Database pool missing"))?;

    let caller: UserSummary = match users::authenticate(pool.get_ref(), &email, &password).await {
        Ok(summary) => summary,
        Err(StoreError::NotFound) => {
            info!(%required, "Caller credentials rejected");
            return Ok(forbidden(req, required));
        }
        Err(e) => {
            return Err(e.fail(StatusCode::INTERNAL_SERVER_ERROR).into());
        }
    };

    if Role::from_str(&caller.role).ok() != Some(required) {
        info!(user_id = caller.id, role = %caller.role, %required, "Role check failed");
        return Ok(forbidden(req, required));
    }

    req.extensions_mut().insert(caller);
    next.call(req).await
}
