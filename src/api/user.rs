use crate::error::AppError;
use crate::model::user::{Credentials, StudentName, UserFields};
use crate::store::users;
use actix_web::{HttpResponse, http::StatusCode, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::{info, instrument};
use utoipa::ToSchema;

/// `{status, success, data}` envelope used by the user endpoints.
#[derive(Serialize, Deserialize)]
pub struct UserResponse<T> {
    pub status: u16,
    pub success: bool,
    pub data: T,
}

impl<T> UserResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            status: 200,
            success: true,
            data,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreatedUser {
    #[schema(example = 201)]
    pub status: u16,
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = 1)]
    pub id: i64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StudentList {
    pub estudiantes: Vec<StudentName>,
}

fn user_not_found(id: i64) -> String {
    format!("Usuario con ID {id} no encontrado")
}

fn done(status: StatusCode, message: Option<&str>) -> HttpResponse {
    let mut body = json!({ "status": status.as_u16(), "success": true });
    if let Some(message) = message {
        body["message"] = json!(message);
    }
    HttpResponse::build(status).json(body)
}

/// Login with email and password
#[utoipa::path(
    post,
    path = "/user/login",
    request_body = Credentials,
    responses(
        (status = 200, description = "Credentials match a user", body = Object, example = json!({
            "status": 200,
            "success": true,
            "data": { "id_usuario": 1, "nombre": "Ana", "apellido": "Ruiz", "gmail": "a@x.com", "roll": "estudiante" }
        })),
        (status = 404, description = "Wrong email or password", body = ErrorBody),
        (status = 429, description = "Too many login attempts"),
        (status = 500, description = "Storage error", body = ErrorBody)
    ),
    tag = "User"
)]
#[instrument(name = "user_login", skip(pool, credentials), fields(gmail = %credentials.email))]
pub async fn login(
    pool: web::Data<SqlitePool>,
    credentials: web::Json<Credentials>,
) -> Result<HttpResponse, AppError> {
    let summary = users::authenticate(pool.get_ref(), &credentials.email, &credentials.password)
        .await
        .map_err(|e| {
            e.respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Correo o contraseña incorrectos",
            )
        })?;

    info!(user_id = summary.id, "Login successful");
    Ok(HttpResponse::Ok().json(UserResponse::ok(summary)))
}

/// Create user
#[utoipa::path(
    post,
    path = "/user",
    request_body = UserFields,
    responses(
        (status = 201, description = "User created", body = CreatedUser),
        (status = 400, description = "Missing field or insertion rejected", body = ErrorBody)
    ),
    tag = "User"
)]
pub async fn create_user(
    pool: web::Data<SqlitePool>,
    payload: web::Json<UserFields>,
) -> Result<HttpResponse, AppError> {
    let id = users::create(pool.get_ref(), &payload)
        .await
        .map_err(|e| e.fail(StatusCode::BAD_REQUEST))?;

    Ok(HttpResponse::Created().json(CreatedUser {
        status: 201,
        success: true,
        id,
    }))
}

/// Check whether an email is registered
#[utoipa::path(
    get,
    path = "/user/check-email/{email}",
    params(("email" = String, Path, description = "Email to look for")),
    responses(
        (status = 200, description = "Email found", body = Object, example = json!({
            "status": 200, "success": true, "message": "Correo encontrado"
        })),
        (status = 404, description = "Email not found", body = ErrorBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    ),
    tag = "User"
)]
pub async fn check_email(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let email = path.into_inner();
    let exists = users::email_exists(pool.get_ref(), &email)
        .await
        .map_err(|e| e.respond(StatusCode::INTERNAL_SERVER_ERROR, "Correo no encontrado"))?;

    if !exists {
        return Err(AppError::NotFound("Correo no encontrado".into()));
    }
    Ok(done(StatusCode::OK, Some("Correo encontrado")))
}

/// List all users
///
/// An empty directory answers 404.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = Object, example = json!({
            "status": 200,
            "success": true,
            "data": [{ "id_usuario": 1, "nombre": "Ana", "apellido": "Ruiz", "gmail": "a@x.com", "contraseña": "p1", "roll": "estudiante", "clase": "10A" }]
        })),
        (status = 404, description = "No users stored", body = ErrorBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    ),
    tag = "User"
)]
pub async fn list_users(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let all = users::list(pool.get_ref())
        .await
        .map_err(|e| {
            e.respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                "No se encontraron usuarios",
            )
        })?;

    Ok(HttpResponse::Ok().json(UserResponse::ok(all)))
}

/// Names of all students
#[utoipa::path(
    get,
    path = "/usuarios/estudiantes",
    responses(
        (status = 200, description = "Students (possibly none)", body = StudentList),
        (status = 500, description = "Storage error", body = ErrorBody)
    ),
    tag = "User"
)]
pub async fn list_students(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let estudiantes = users::list_students(pool.get_ref())
        .await
        .map_err(|e| e.respond(StatusCode::INTERNAL_SERVER_ERROR, "Sin estudiantes"))?;

    Ok(HttpResponse::Ok().json(StudentList { estudiantes }))
}

/// Get user by id
#[utoipa::path(
    get,
    path = "/user/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = Object, example = json!({
            "status": 200,
            "success": true,
            "data": { "id_usuario": 1, "nombre": "Ana", "apellido": "Ruiz", "gmail": "a@x.com", "contraseña": "p1", "roll": "estudiante", "clase": "10A" }
        })),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    ),
    tag = "User"
)]
pub async fn get_user(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let user = users::get(pool.get_ref(), id)
        .await
        .map_err(|e| e.respond(StatusCode::INTERNAL_SERVER_ERROR, user_not_found(id)))?;

    Ok(HttpResponse::Ok().json(UserResponse::ok(user)))
}

/// Replace user
#[utoipa::path(
    put,
    path = "/user/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserFields,
    responses(
        (status = 200, description = "User updated", body = Object, example = json!({
            "status": 200, "success": true
        })),
        (status = 400, description = "Missing field or update rejected", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    tag = "User"
)]
pub async fn update_user(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<UserFields>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    users::update(pool.get_ref(), id, &payload)
        .await
        .map_err(|e| e.respond(StatusCode::BAD_REQUEST, user_not_found(id)))?;

    Ok(done(StatusCode::OK, None))
}

/// Delete user
///
/// Attendance entries of the user are kept.
#[utoipa::path(
    delete,
    path = "/user/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = Object, example = json!({
            "status": 200, "success": true
        })),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    ),
    tag = "User"
)]
pub async fn delete_user(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    users::delete(pool.get_ref(), id)
        .await
        .map_err(|e| e.respond(StatusCode::INTERNAL_SERVER_ERROR, user_not_found(id)))?;

    Ok(done(StatusCode::OK, None))
}
