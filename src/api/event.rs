use crate::error::AppError;
use crate::model::event::{Event, EventFields};
use crate::store::events;
use actix_web::{HttpResponse, http::StatusCode, web};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;

const EVENT_NOT_FOUND: &str = "Evento no encontrado";

#[derive(Serialize, Deserialize, ToSchema)]
pub struct EventCreated {
    #[schema(example = "Evento creado correctamente")]
    pub message: String,
    pub evento: Event,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct EventList {
    pub eventos: Vec<Event>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct EventUpdated {
    #[schema(example = "Evento actualizado correctamente")]
    pub message: String,
    #[serde(rename = "updatedID")]
    pub updated_id: i64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct EventDeleted {
    #[schema(example = "Evento eliminado correctamente")]
    pub message: String,
    #[serde(rename = "deletedID")]
    pub deleted_id: i64,
}

/// Create event
#[utoipa::path(
    post,
    path = "/evento",
    request_body = EventFields,
    responses(
        (status = 201, description = "Event created", body = EventCreated),
        (status = 400, description = "Missing field or insertion rejected", body = ErrorBody)
    ),
    tag = "Event"
)]
pub async fn create_event(
    pool: web::Data<SqlitePool>,
    payload: web::Json<EventFields>,
) -> Result<HttpResponse, AppError> {
    let evento = events::create(pool.get_ref(), payload.into_inner())
        .await
        .map_err(|e| e.respond(StatusCode::BAD_REQUEST, EVENT_NOT_FOUND))?;

    Ok(HttpResponse::Created().json(EventCreated {
        message: "Evento creado correctamente".into(),
        evento,
    }))
}

/// List events
#[utoipa::path(
    get,
    path = "/eventos",
    responses(
        (status = 200, description = "All events, possibly none", body = EventList),
        (status = 400, description = "Query rejected", body = ErrorBody)
    ),
    tag = "Event"
)]
pub async fn list_events(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let eventos = events::list(pool.get_ref())
        .await
        .map_err(|e| e.respond(StatusCode::BAD_REQUEST, EVENT_NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(EventList { eventos }))
}

/// Replace event
#[utoipa::path(
    put,
    path = "/eventos/{id}",
    params(("id" = i64, Path, description = "Event id")),
    request_body = EventFields,
    responses(
        (status = 200, description = "Event updated", body = EventUpdated),
        (status = 400, description = "Missing field or update rejected", body = ErrorBody),
        (status = 404, description = "Event not found", body = ErrorBody)
    ),
    tag = "Event"
)]
pub async fn update_event(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<EventFields>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    events::update(pool.get_ref(), id, &payload)
        .await
        .map_err(|e| e.respond(StatusCode::BAD_REQUEST, EVENT_NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(EventUpdated {
        message: "Evento actualizado correctamente".into(),
        updated_id: id,
    }))
}

/// Delete event
///
/// Attendance entries are not linked to events and stay untouched.
#[utoipa::path(
    delete,
    path = "/eventos/{id}",
    params(("id" = i64, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event deleted", body = EventDeleted),
        (status = 400, description = "Delete rejected", body = ErrorBody),
        (status = 404, description = "Event not found", body = ErrorBody)
    ),
    tag = "Event"
)]
pub async fn delete_event(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    events::delete(pool.get_ref(), id)
        .await
        .map_err(|e| e.respond(StatusCode::BAD_REQUEST, EVENT_NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(EventDeleted {
        message: "Evento eliminado correctamente".into(),
        deleted_id: id,
    }))
}
