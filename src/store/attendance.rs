use super::{StoreError, affected};
use crate::model::attendance::{AttendanceEntry, NewAttendance};
use sqlx::SqlitePool;
use tracing::{error, info};

pub const STATUS_MISSING: &str = "Estado de asistencia no proporcionado";

/// Records an entry with the caller's copy of the user's name and class.
/// `id_usuario` is not checked against `usuarios`.
pub async fn record(pool: &SqlitePool, entry: NewAttendance) -> Result<AttendanceEntry, StoreError> {
    let result = sqlx::query(
        r#"
        INSERT INTO asistencias
        (id_usuario, nombre_usuario, apellido, clase, fecha_actual, estado_asistencia)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(entry.user_id)
    .bind(&entry.first_name)
    .bind(&entry.last_name)
    .bind(&entry.class)
    .bind(&entry.date)
    .bind(&entry.status)
    .execute(pool)
    .await
    .map_err(|e| {
        error!(error = %e, user_id = entry.user_id, "Failed to record attendance");
        StoreError::from(e)
    })?;

    let id = result.last_insert_rowid();
    info!(attendance_id = id, user_id = entry.user_id, "Attendance recorded");
    Ok(entry.into_entry(id))
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<AttendanceEntry>, StoreError> {
    sqlx::query_as::<_, AttendanceEntry>("SELECT * FROM asistencias ORDER BY id_asistencia")
        .fetch_all(pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to list attendance");
            StoreError::from(e)
        })
}

/// Sets the status of one entry. Any non-empty text is a valid status and
/// any status may follow any other.
pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    status: Option<&str>,
) -> Result<(), StoreError> {
    let status = match status {
        Some(s) if !s.is_empty() => s,
        _ => return Err(StoreError::Validation(STATUS_MISSING)),
    };

    let result = sqlx::query("UPDATE asistencias SET estado_asistencia = ? WHERE id_asistencia = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| {
            error!(error = %e, attendance_id = id, "Failed to update attendance");
            StoreError::from(e)
        })?;

    affected(result.rows_affected())?;
    info!(attendance_id = id, status, "Attendance status updated");
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM asistencias WHERE id_asistencia = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| {
            error!(error = %e, attendance_id = id, "Failed to delete attendance");
            StoreError::from(e)
        })?;

    affected(result.rows_affected())?;
    info!(attendance_id = id, "Attendance deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::UserFields;
    use crate::store::{testing, users};

    fn present(user_id: i64) -> NewAttendance {
        NewAttendance {
            user_id,
            first_name: "Ana".into(),
            last_name: "Ruiz".into(),
            class: "10A".into(),
            date: "2024-05-10".into(),
            status: "presente".into(),
        }
    }

    #[actix_web::test]
    async fn recorded_entry_is_listed() {
        let pool = testing::pool().await;
        let entry = record(&pool, present(1)).await.unwrap();
        assert_eq!(list(&pool).await.unwrap(), vec![entry]);
    }

    #[actix_web::test]
    async fn identifiers_are_not_reused() {
        let pool = testing::pool().await;
        let first = record(&pool, present(1)).await.unwrap();
        let second = record(&pool, present(1)).await.unwrap();
        assert!(second.id > first.id);

        delete(&pool, second.id).await.unwrap();
        let third = record(&pool, present(1)).await.unwrap();
        assert!(third.id > second.id);
    }

    #[actix_web::test]
    async fn unknown_user_is_accepted() {
        let pool = testing::pool().await;
        let entry = record(&pool, present(999)).await.unwrap();
        assert_eq!(entry.user_id, 999);
    }

    #[actix_web::test]
    async fn status_can_flip_back_and_forth() {
        let pool = testing::pool().await;
        let entry = record(&pool, present(1)).await.unwrap();

        update_status(&pool, entry.id, Some("ausente")).await.unwrap();
        assert_eq!(list(&pool).await.unwrap()[0].status, "ausente");

        update_status(&pool, entry.id, Some("presente")).await.unwrap();
        assert_eq!(list(&pool).await.unwrap()[0].status, "presente");
    }

    #[actix_web::test]
    async fn missing_status_is_rejected_without_touching_rows() {
        let pool = testing::pool().await;
        let entry = record(&pool, present(1)).await.unwrap();

        for status in [None, Some("")] {
            let err = update_status(&pool, entry.id, status).await.unwrap_err();
            assert!(matches!(err, StoreError::Validation(STATUS_MISSING)));
        }
        // Validation also wins over a missing row.
        assert!(matches!(
            update_status(&pool, 777, None).await,
            Err(StoreError::Validation(_))
        ));

        assert_eq!(list(&pool).await.unwrap(), vec![entry]);
    }

    #[actix_web::test]
    async fn writes_to_missing_entry_are_not_found() {
        let pool = testing::pool().await;
        assert!(matches!(
            update_status(&pool, 5, Some("ausente")).await,
            Err(StoreError::NotFound)
        ));
        assert!(matches!(delete(&pool, 5).await, Err(StoreError::NotFound)));
    }

    #[actix_web::test]
    async fn deleting_user_keeps_entries_and_their_copied_names() {
        let pool = testing::pool().await;
        let fields = UserFields {
            first_name: "Ana".into(),
            last_name: "Ruiz".into(),
            email: "a@x.com".into(),
            password: "p1".into(),
            role: "estudiante".into(),
            class: "10A".into(),
        };
        let user_id = users::create(&pool, &fields).await.unwrap();
        let entry = record(&pool, present(user_id)).await.unwrap();

        let mut renamed = fields.clone();
        renamed.first_name = "Anita".into();
        users::update(&pool, user_id, &renamed).await.unwrap();
        assert_eq!(list(&pool).await.unwrap()[0].first_name, "Ana");

        users::delete(&pool, user_id).await.unwrap();
        assert_eq!(list(&pool).await.unwrap(), vec![entry]);
    }
}
