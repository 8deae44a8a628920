use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full `usuarios` row. The password is stored and returned as plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct User {
    #[serde(rename = "id_usuario")]
    #[sqlx(rename = "id_usuario")]
    #[schema(example = 1)]
    pub id: i64,

    #[serde(rename = "nombre")]
    #[sqlx(rename = "nombre")]
    #[schema(example = "Ana")]
    pub first_name: String,

    #[serde(rename = "apellido")]
    #[sqlx(rename = "apellido")]
    #[schema(example = "Ruiz")]
    pub last_name: String,

    #[serde(rename = "gmail")]
    #[sqlx(rename = "gmail")]
    #[schema(example = "a@x.com")]
    pub email: String,

    #[serde(rename = "contraseña")]
    #[sqlx(rename = "contraseña")]
    #[schema(example = "p1")]
    pub password: String,

    #[serde(rename = "roll")]
    #[sqlx(rename = "roll")]
    #[schema(example = "estudiante")]
    pub role: String,

    #[serde(rename = "clase")]
    #[sqlx(rename = "clase")]
    #[schema(example = "10A")]
    pub class: String,
}

/// Public fields returned by a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct UserSummary {
    #[serde(rename = "id_usuario")]
    #[sqlx(rename = "id_usuario")]
    pub id: i64,
    #[serde(rename = "nombre")]
    #[sqlx(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    #[sqlx(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "gmail")]
    #[sqlx(rename = "gmail")]
    pub email: String,
    #[serde(rename = "roll")]
    #[sqlx(rename = "roll")]
    pub role: String,
}

/// Writable user fields, used for both insert and full replace.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UserFields {
    #[serde(rename = "nombre")]
    #[schema(example = "Ana")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    #[schema(example = "Ruiz")]
    pub last_name: String,
    #[serde(rename = "gmail")]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[serde(rename = "contraseña")]
    #[schema(example = "p1")]
    pub password: String,
    #[serde(rename = "roll")]
    #[schema(example = "estudiante")]
    pub role: String,
    #[serde(rename = "clase")]
    #[schema(example = "10A")]
    pub class: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct Credentials {
    #[serde(rename = "gmail")]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[serde(rename = "contraseña")]
    #[schema(example = "p1")]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct StudentName {
    #[serde(rename = "nombre")]
    #[sqlx(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    #[sqlx(rename = "apellido")]
    pub last_name: String,
}
