use crate::model::user::UserSummary;
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::debug;

/// Teacher-only resource
///
/// Reached only through the `profesor` role gate.
#[utoipa::path(
    get,
    path = "/profesor/resource",
    params(
        ("X-User-Email" = String, Header, description = "Caller email"),
        ("X-User-Password" = String, Header, description = "Caller password")
    ),
    responses(
        (status = 200, description = "Caller is a teacher", body = Object, example = json!({
            "status": 200, "success": true, "message": "Bienvenido profesor"
        })),
        (status = 403, description = "Caller is not a teacher", body = ErrorBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    ),
    tag = "Teacher"
)]
pub async fn resource(caller: web::ReqData<UserSummary>) -> impl Responder {
    debug!(user_id = caller.id, "Teacher resource served");
    HttpResponse::Ok().json(json!({
        "status": 200,
        "success": true,
        "message": "Bienvenido profesor"
    }))
}
