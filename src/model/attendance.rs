use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `asistencias` row. Name and class are copies taken when the entry was
/// recorded and do not follow later edits to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceEntry {
    #[serde(rename = "id_asistencia")]
    #[sqlx(rename = "id_asistencia")]
    #[schema(example = 1)]
    pub id: i64,

    #[serde(rename = "id_usuario")]
    #[sqlx(rename = "id_usuario")]
    #[schema(example = 1)]
    pub user_id: i64,

    #[serde(rename = "nombre_usuario")]
    #[sqlx(rename = "nombre_usuario")]
    #[schema(example = "Ana")]
    pub first_name: String,

    #[serde(rename = "apellido")]
    #[sqlx(rename = "apellido")]
    #[schema(example = "Ruiz")]
    pub last_name: String,

    #[serde(rename = "clase")]
    #[sqlx(rename = "clase")]
    #[schema(example = "10A")]
    pub class: String,

    #[serde(rename = "fecha_actual")]
    #[sqlx(rename = "fecha_actual")]
    #[schema(example = "2024-05-10")]
    pub date: String,

    #[serde(rename = "estado_asistencia")]
    #[sqlx(rename = "estado_asistencia")]
    #[schema(example = "presente")]
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct NewAttendance {
    #[serde(rename = "id_usuario")]
    #[schema(example = 1)]
    pub user_id: i64,
    #[serde(rename = "nombre_usuario")]
    #[schema(example = "Ana")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    #[schema(example = "Ruiz")]
    pub last_name: String,
    #[serde(rename = "clase")]
    #[schema(example = "10A")]
    pub class: String,
    #[serde(rename = "fecha_actual")]
    #[schema(example = "2024-05-10")]
    pub date: String,
    #[serde(rename = "estado_asistencia")]
    #[schema(example = "presente")]
    pub status: String,
}

impl NewAttendance {
    pub fn into_entry(self, id: i64) -> AttendanceEntry {
        AttendanceEntry {
            id,
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            class: self.class,
            date: self.date,
            status: self.status,
        }
    }
}

/// Body of a status change. The field is optional so that a missing value
/// reaches the ledger's own validation instead of failing deserialization.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct StatusUpdate {
    #[serde(rename = "estado_asistencia", default)]
    #[schema(example = "ausente", nullable = true)]
    pub status: Option<String>,
}
