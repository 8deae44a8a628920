use crate::error::AppError;
use crate::model::attendance::{AttendanceEntry, NewAttendance, StatusUpdate};
use crate::store::attendance;
use actix_web::{HttpResponse, http::StatusCode, web};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;

const ENTRY_NOT_FOUND: &str = "Asistencia no encontrada";

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AttendanceRecorded {
    #[schema(example = "Asistencia registrada correctamente")]
    pub message: String,
    pub asistencia: AttendanceEntry,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AttendanceList {
    pub asistencias: Vec<AttendanceEntry>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AttendanceUpdated {
    #[schema(example = "Asistencia actualizada correctamente")]
    pub message: String,
    #[serde(rename = "updatedID")]
    pub updated_id: i64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AttendanceDeleted {
    #[schema(example = "Asistencia eliminada correctamente")]
    pub message: String,
    #[serde(rename = "deletedID")]
    pub deleted_id: i64,
}

/// Record attendance
///
/// Name and class are stored as sent; they are not read from the user.
#[utoipa::path(
    post,
    path = "/asistencia",
    request_body = NewAttendance,
    responses(
        (status = 201, description = "Attendance recorded", body = AttendanceRecorded),
        (status = 400, description = "Missing field or insertion rejected", body = ErrorBody)
    ),
    tag = "Attendance"
)]
pub async fn record_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<NewAttendance>,
) -> Result<HttpResponse, AppError> {
    let asistencia = attendance::record(pool.get_ref(), payload.into_inner())
        .await
        .map_err(|e| e.respond(StatusCode::BAD_REQUEST, ENTRY_NOT_FOUND))?;

    Ok(HttpResponse::Created().json(AttendanceRecorded {
        message: "Asistencia registrada correctamente".into(),
        asistencia,
    }))
}

/// List attendance entries
#[utoipa::path(
    get,
    path = "/asistencias",
    responses(
        (status = 200, description = "All entries, possibly none", body = AttendanceList),
        (status = 400, description = "Query rejected", body = ErrorBody)
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let asistencias = attendance::list(pool.get_ref())
        .await
        .map_err(|e| e.respond(StatusCode::BAD_REQUEST, ENTRY_NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(AttendanceList { asistencias }))
}

/// Change attendance status
#[utoipa::path(
    put,
    path = "/asistencia/{id}",
    params(("id" = i64, Path, description = "Attendance entry id")),
    request_body = StatusUpdate,
    responses(
        (status = 200, description = "Status updated", body = AttendanceUpdated),
        (status = 400, description = "Status missing or update rejected", body = ErrorBody),
        (status = 404, description = "Entry not found", body = ErrorBody)
    ),
    tag = "Attendance"
)]
pub async fn update_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<StatusUpdate>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    attendance::update_status(pool.get_ref(), id, payload.status.as_deref())
        .await
        .map_err(|e| e.respond(StatusCode::BAD_REQUEST, ENTRY_NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(AttendanceUpdated {
        message: "Asistencia actualizada correctamente".into(),
        updated_id: id,
    }))
}

/// Delete attendance entry
#[utoipa::path(
    delete,
    path = "/asistencia/{id}",
    params(("id" = i64, Path, description = "Attendance entry id")),
    responses(
        (status = 200, description = "Entry deleted", body = AttendanceDeleted),
        (status = 400, description = "Delete rejected", body = ErrorBody),
        (status = 404, description = "Entry not found", body = ErrorBody)
    ),
    tag = "Attendance"
)]
pub async fn delete_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    attendance::delete(pool.get_ref(), id)
        .await
        .map_err(|e| e.respond(StatusCode::BAD_REQUEST, ENTRY_NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(AttendanceDeleted {
        message: "Asistencia eliminada correctamente".into(),
        deleted_id: id,
    }))
}
