use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `eventos` row. Timestamps are kept as the text the caller supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id_evento": 1,
        "nombre_evento": "Feria de ciencias",
        "descripcion": "Exposición anual",
        "tipo_evento": "academico",
        "ubicacion": "Gimnasio",
        "fecha_hora_inicio": "2024-05-10 08:00:00",
        "fecha_hora_final": "2024-05-10 12:00:00"
    })
)]
pub struct Event {
    #[serde(rename = "id_evento")]
    #[sqlx(rename = "id_evento")]
    pub id: i64,

    #[serde(rename = "nombre_evento")]
    #[sqlx(rename = "nombre_evento")]
    pub name: String,

    #[serde(rename = "descripcion")]
    #[sqlx(rename = "descripcion")]
    #[schema(nullable = true)]
    pub description: Option<String>,

    #[serde(rename = "tipo_evento")]
    #[sqlx(rename = "tipo_evento")]
    pub kind: String,

    #[serde(rename = "ubicacion")]
    #[sqlx(rename = "ubicacion")]
    pub location: String,

    #[serde(rename = "fecha_hora_inicio")]
    #[sqlx(rename = "fecha_hora_inicio")]
    pub starts_at: String,

    #[serde(rename = "fecha_hora_final")]
    #[sqlx(rename = "fecha_hora_final")]
    pub ends_at: String,
}

/// Writable event fields. No check that the start precedes the end.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EventFields {
    #[serde(rename = "nombre_evento")]
    #[schema(example = "Feria de ciencias")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    #[schema(example = "Exposición anual", nullable = true)]
    pub description: Option<String>,
    #[serde(rename = "tipo_evento")]
    #[schema(example = "academico")]
    pub kind: String,
    #[serde(rename = "ubicacion")]
    #[schema(example = "Gimnasio")]
    pub location: String,
    #[serde(rename = "fecha_hora_inicio")]
    #[schema(example = "2024-05-10 08:00:00")]
    pub starts_at: String,
    #[serde(rename = "fecha_hora_final")]
    #[schema(example = "2024-05-10 12:00:00")]
    pub ends_at: String,
}

impl EventFields {
    pub fn into_event(self, id: i64) -> Event {
        Event {
            id,
            name: self.name,
            description: self.description,
            kind: self.kind,
            location: self.location,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
        }
    }
}
