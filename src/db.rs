use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tracing::{error, info};

pub async fn init_db(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    // asistencias.id_usuario references usuarios but is not enforced:
    // attendance rows may point at users that were never created or have
    // since been deleted.
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(false);

    // No idle reaping: an in-memory database lives only as long as a
    // connection to it stays open.
    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await
}

const CREATE_TABLES: [(&str, &str); 3] = [
    (
        "usuarios",
        r#"
        CREATE TABLE IF NOT EXISTS usuarios (
            id_usuario INTEGER PRIMARY KEY,
            nombre TEXT,
            apellido TEXT,
            gmail TEXT,
            contraseña TEXT,
            roll TEXT,
            clase TEXT
        )
        "#,
    ),
    (
        "eventos",
        r#"
        CREATE TABLE IF NOT EXISTS eventos (
            id_evento INTEGER PRIMARY KEY,
            nombre_evento TEXT,
            descripcion TEXT,
            tipo_evento TEXT,
            ubicacion TEXT,
            fecha_hora_inicio TEXT,
            fecha_hora_final TEXT
        )
        "#,
    ),
    (
        "asistencias",
        r#"
        CREATE TABLE IF NOT EXISTS asistencias (
            id_asistencia INTEGER PRIMARY KEY AUTOINCREMENT,
            id_usuario INTEGER NOT NULL,
            nombre_usuario TEXT NOT NULL,
            apellido TEXT NOT NULL,
            clase TEXT NOT NULL,
            fecha_actual TEXT NOT NULL,
            estado_asistencia TEXT NOT NULL,
            FOREIGN KEY (id_usuario) REFERENCES usuarios (id_usuario)
        )
        "#,
    ),
];

/// Creates the three tables if they are missing. Statements run one after
/// another, each on its own; there is no migration history.
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for (table, sql) in CREATE_TABLES {
        sqlx::query(sql).execute(pool).await.map_err(|e| {
            error!(error = %e, table, "Failed to create table");
            e
        })?;
        info!(table, "Table created or already present");
    }
    Ok(())
}

pub async fn close_db(pool: SqlitePool) {
    pool.close().await;
    info!("Database connections closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn create_tables_is_idempotent() {
        let pool = init_db("sqlite::memory:", 1).await.unwrap();
        create_tables(&pool).await.unwrap();
        create_tables(&pool).await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(tables, vec!["asistencias", "eventos", "usuarios"]);
    }

    #[actix_web::test]
    async fn foreign_keys_are_not_enforced() {
        let pool = init_db("sqlite::memory:", 1).await.unwrap();
        let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(enabled, 0);
    }
}
