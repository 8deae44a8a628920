use super::{StoreError, affected};
use crate::model::user::{StudentName, User, UserFields, UserSummary};
use sqlx::SqlitePool;
use tracing::{debug, error, info};

/// Matches on email and password together, so a wrong email and a wrong
/// password are both just `NotFound`. Passwords are compared as stored
/// (plain text).
pub async fn authenticate(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<UserSummary, StoreError> {
    let row = sqlx::query_as::<_, UserSummary>(
        r#"
        SELECT id_usuario, nombre, apellido, gmail, roll
        FROM usuarios
        WHERE gmail = ? AND contraseña = ?
        "#,
    )
    .bind(email)
    .bind(password)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to look up user credentials");
        StoreError::from(e)
    })?;

    row.ok_or(StoreError::NotFound)
}

pub async fn email_exists(pool: &SqlitePool, email: &str) -> Result<bool, StoreError> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM usuarios WHERE gmail = ? LIMIT 1)")
        .bind(email)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to check email");
            StoreError::from(e)
        })
}

/// Inserts unconditionally; duplicate emails are accepted.
pub async fn create(pool: &SqlitePool, fields: &UserFields) -> Result<i64, StoreError> {
    let result = sqlx::query(
        r#"
        INSERT INTO usuarios (nombre, apellido, gmail, contraseña, roll, clase)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&fields.first_name)
    .bind(&fields.last_name)
    .bind(&fields.email)
    .bind(&fields.password)
    .bind(&fields.role)
    .bind(&fields.class)
    .execute(pool)
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to insert user");
        StoreError::from(e)
    })?;

    let id = result.last_insert_rowid();
    info!(user_id = id, "User created");
    Ok(id)
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<User, StoreError> {
    debug!(user_id = id, "Fetching user");

    sqlx::query_as::<_, User>("SELECT * FROM usuarios WHERE id_usuario = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = id, "Failed to fetch user");
            StoreError::from(e)
        })?
        .ok_or(StoreError::NotFound)
}

/// An empty directory is reported as `NotFound` rather than an empty list;
/// existing clients treat the 404 as "no users yet".
pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, StoreError> {
    let users = sqlx::query_as::<_, User>("SELECT * FROM usuarios ORDER BY id_usuario")
        .fetch_all(pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to list users");
            StoreError::from(e)
        })?;

    if users.is_empty() {
        return Err(StoreError::NotFound);
    }
    Ok(users)
}

pub async fn list_students(pool: &SqlitePool) -> Result<Vec<StudentName>, StoreError> {
    sqlx::query_as::<_, StudentName>(
        "SELECT nombre, apellido FROM usuarios WHERE roll = 'estudiante' ORDER BY id_usuario",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to list students");
        StoreError::from(e)
    })
}

/// Replaces every writable field of the user.
pub async fn update(pool: &SqlitePool, id: i64, fields: &UserFields) -> Result<(), StoreError> {
    let result = sqlx::query(
        r#"
        UPDATE usuarios
        SET nombre = ?, apellido = ?, gmail = ?, contraseña = ?, roll = ?, clase = ?
        WHERE id_usuario = ?
        "#,
    )
    .bind(&fields.first_name)
    .bind(&fields.last_name)
    .bind(&fields.email)
    .bind(&fields.password)
    .bind(&fields.role)
    .bind(&fields.class)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| {
        error!(error = %e, user_id = id, "Failed to update user");
        StoreError::from(e)
    })?;

    affected(result.rows_affected())?;
    info!(user_id = id, "User updated");
    Ok(())
}

/// Attendance rows pointing at the user are left in place.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM usuarios WHERE id_usuario = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = id, "Failed to delete user");
            StoreError::from(e)
        })?;

    affected(result.rows_affected())?;
    info!(user_id = id, "User deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing;

    fn ana() -> UserFields {
        UserFields {
            first_name: "Ana".into(),
            last_name: "Ruiz".into(),
            email: "a@x.com".into(),
            password: "p1".into(),
            role: "estudiante".into(),
            class: "10A".into(),
        }
    }

    #[actix_web::test]
    async fn created_user_resolves_by_id() {
        let pool = testing::pool().await;
        let id = create(&pool, &ana()).await.unwrap();

        let user = get(&pool, id).await.unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.first_name, "Ana");
        assert_eq!(user.last_name, "Ruiz");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.password, "p1");
        assert_eq!(user.role, "estudiante");
        assert_eq!(user.class, "10A");
    }

    #[actix_web::test]
    async fn authenticate_requires_both_fields_to_match() {
        let pool = testing::pool().await;
        let id = create(&pool, &ana()).await.unwrap();

        let summary = authenticate(&pool, "a@x.com", "p1").await.unwrap();
        assert_eq!(summary.id, id);
        assert_eq!(summary.role, "estudiante");

        assert!(matches!(
            authenticate(&pool, "a@x.com", "wrong").await,
            Err(StoreError::NotFound)
        ));
        assert!(matches!(
            authenticate(&pool, "b@x.com", "p1").await,
            Err(StoreError::NotFound)
        ));
    }

    #[actix_web::test]
    async fn email_existence_check() {
        let pool = testing::pool().await;
        assert!(!email_exists(&pool, "a@x.com").await.unwrap());
        create(&pool, &ana()).await.unwrap();
        assert!(email_exists(&pool, "a@x.com").await.unwrap());
    }

    #[actix_web::test]
    async fn duplicate_emails_are_accepted() {
        let pool = testing::pool().await;
        let first = create(&pool, &ana()).await.unwrap();
        let second = create(&pool, &ana()).await.unwrap();
        assert_ne!(first, second);
        assert_eq!(list(&pool).await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn empty_directory_lists_as_not_found() {
        let pool = testing::pool().await;
        assert!(matches!(list(&pool).await, Err(StoreError::NotFound)));
    }

    #[actix_web::test]
    async fn update_replaces_all_fields() {
        let pool = testing::pool().await;
        let id = create(&pool, &ana()).await.unwrap();

        let mut changed = ana();
        changed.role = "profesor".into();
        changed.class = "11B".into();
        update(&pool, id, &changed).await.unwrap();

        let user = get(&pool, id).await.unwrap();
        assert_eq!(user.role, "profesor");
        assert_eq!(user.class, "11B");
    }

    #[actix_web::test]
    async fn writes_to_missing_user_are_not_found() {
        let pool = testing::pool().await;
        assert!(matches!(update(&pool, 42, &ana()).await, Err(StoreError::NotFound)));
        assert!(matches!(delete(&pool, 42).await, Err(StoreError::NotFound)));
        assert!(matches!(get(&pool, 42).await, Err(StoreError::NotFound)));
    }

    #[actix_web::test]
    async fn delete_twice() {
        let pool = testing::pool().await;
        let id = create(&pool, &ana()).await.unwrap();
        delete(&pool, id).await.unwrap();
        assert!(matches!(delete(&pool, id).await, Err(StoreError::NotFound)));
    }

    #[actix_web::test]
    async fn students_exclude_teachers() {
        let pool = testing::pool().await;
        create(&pool, &ana()).await.unwrap();
        let mut teacher = ana();
        teacher.first_name = "Luis".into();
        teacher.role = "profesor".into();
        create(&pool, &teacher).await.unwrap();

        let students = list_students(&pool).await.unwrap();
        assert_eq!(
            students,
            vec![StudentName {
                first_name: "Ana".into(),
                last_name: "Ruiz".into()
            }]
        );
    }
}
