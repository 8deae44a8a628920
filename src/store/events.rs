use super::{StoreError, affected};
use crate::model::event::{Event, EventFields};
use sqlx::SqlitePool;
use tracing::{error, info};

/// Stores the event as given; timestamps are not parsed or ordered.
pub async fn create(pool: &SqlitePool, fields: EventFields) -> Result<Event, StoreError> {
    let result = sqlx::query(
        r#"
        INSERT INTO eventos
        (nombre_evento, descripcion, tipo_evento, ubicacion, fecha_hora_inicio, fecha_hora_final)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.description)
    .bind(&fields.kind)
    .bind(&fields.location)
    .bind(&fields.starts_at)
    .bind(&fields.ends_at)
    .execute(pool)
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to create event");
        StoreError::from(e)
    })?;

    let id = result.last_insert_rowid();
    info!(event_id = id, "Event created");
    Ok(fields.into_event(id))
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Event>, StoreError> {
    sqlx::query_as::<_, Event>("SELECT * FROM eventos ORDER BY id_evento")
        .fetch_all(pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to list events");
            StoreError::from(e)
        })
}

pub async fn update(pool: &SqlitePool, id: i64, fields: &EventFields) -> Result<(), StoreError> {
    let result = sqlx::query(
        r#"
        UPDATE eventos
        SET nombre_evento = ?, descripcion = ?, tipo_evento = ?, ubicacion = ?,
            fecha_hora_inicio = ?, fecha_hora_final = ?
        WHERE id_evento = ?
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.description)
    .bind(&fields.kind)
    .bind(&fields.location)
    .bind(&fields.starts_at)
    .bind(&fields.ends_at)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| {
        error!(error = %e, event_id = id, "Failed to update event");
        StoreError::from(e)
    })?;

    affected(result.rows_affected())?;
    info!(event_id = id, "Event updated");
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM eventos WHERE id_evento = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| {
            error!(error = %e, event_id = id, "Failed to delete event");
            StoreError::from(e)
        })?;

    affected(result.rows_affected())?;
    info!(event_id = id, "Event deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing;

    fn fair() -> EventFields {
        EventFields {
            name: "Feria de ciencias".into(),
            description: Some("Exposición anual".into()),
            kind: "academico".into(),
            location: "Gimnasio".into(),
            starts_at: "2024-05-10 08:00:00".into(),
            ends_at: "2024-05-10 12:00:00".into(),
        }
    }

    #[actix_web::test]
    async fn created_event_is_listed() {
        let pool = testing::pool().await;
        let event = create(&pool, fair()).await.unwrap();

        let events = list(&pool).await.unwrap();
        assert_eq!(events, vec![event]);
    }

    #[actix_web::test]
    async fn empty_catalog_lists_as_empty() {
        let pool = testing::pool().await;
        assert!(list(&pool).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn end_before_start_is_accepted() {
        let pool = testing::pool().await;
        let mut fields = fair();
        fields.starts_at = "2024-05-10 12:00:00".into();
        fields.ends_at = "2024-05-10 08:00:00".into();
        let event = create(&pool, fields).await.unwrap();
        assert_eq!(event.ends_at, "2024-05-10 08:00:00");
    }

    #[actix_web::test]
    async fn description_is_optional() {
        let pool = testing::pool().await;
        let mut fields = fair();
        fields.description = None;
        create(&pool, fields).await.unwrap();
        assert_eq!(list(&pool).await.unwrap()[0].description, None);
    }

    #[actix_web::test]
    async fn update_replaces_fields() {
        let pool = testing::pool().await;
        let event = create(&pool, fair()).await.unwrap();

        let mut changed = fair();
        changed.location = "Auditorio".into();
        update(&pool, event.id, &changed).await.unwrap();

        assert_eq!(list(&pool).await.unwrap()[0].location, "Auditorio");
    }

    #[actix_web::test]
    async fn writes_to_missing_event_are_not_found() {
        let pool = testing::pool().await;
        assert!(matches!(update(&pool, 9, &fair()).await, Err(StoreError::NotFound)));
        assert!(matches!(delete(&pool, 9).await, Err(StoreError::NotFound)));
    }

    #[actix_web::test]
    async fn delete_removes_event() {
        let pool = testing::pool().await;
        let event = create(&pool, fair()).await.unwrap();
        delete(&pool, event.id).await.unwrap();
        assert!(list(&pool).await.unwrap().is_empty());
    }
}
