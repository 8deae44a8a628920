use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::{Context, anyhow};
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use yamix::config::Config;
use yamix::db::{close_db, create_tables, init_db};
use yamix::docs::ApiDoc;
use yamix::routes;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    info!(addr = %config.server_addr, "Server starting...");

    let pool = init_db(&config.database_url, config.db_max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;
    create_tables(&pool)
        .await
        .context("Failed to create tables")?;

    let login_limit = routes::login_limit(config.rate_login_per_min)
        .ok_or_else(|| anyhow!("Invalid RATE_LOGIN_PER_MIN: {}", config.rate_login_per_min))?;

    let app_pool = pool.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // wildcard matches the JS/CSS assets
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(Data::new(app_pool.clone()))
            .configure(|cfg| routes::configure(cfg, &login_limit))
    })
    .bind(&config.server_addr)
    .with_context(|| format!("Failed to bind {}", config.server_addr))?
    .run()
    .await?;

    info!("Server stopped");
    close_db(pool).await;
    Ok(())
}
