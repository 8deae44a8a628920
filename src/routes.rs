use crate::{
    api::{attendance, event, teacher, user},
    auth::guard::require_role,
    error::{json_error_handler, path_error_handler},
    model::role::Role,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};

pub type LoginLimit = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limiter for the login route. `None` only if the builder rejects
/// the settings.
pub fn login_limit(requests_per_min: u32) -> Option<LoginLimit> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / requests_per_min as u64).max(1);

    GovernorConfigBuilder::default()
        .milliseconds_per_request(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig, login_limit: &LoginLimit) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler));

    // User directory. /user/login must come before /user/{id}.
    cfg.service(
        web::resource("/user/login")
            .wrap(Governor::new(login_limit))
            .route(web::post().to(user::login)),
    )
    .service(web::resource("/user").route(web::post().to(user::create_user)))
    .service(web::resource("/user/check-email/{email}").route(web::get().to(user::check_email)))
    .service(web::resource("/users").route(web::get().to(user::list_users)))
    .service(web::resource("/usuarios/estudiantes").route(web::get().to(user::list_students)))
    .service(
        web::resource("/user/{id}")
            .route(web::get().to(user::get_user))
            .route(web::put().to(user::update_user))
            .route(web::delete().to(user::delete_user)),
    );

    // Teacher-only
    cfg.service(
        web::resource("/profesor/resource")
            .wrap(from_fn(|req, next| require_role(Role::Profesor, req, next)))
            .route(web::get().to(teacher::resource)),
    );

    // Event catalog
    cfg.service(web::resource("/evento").route(web::post().to(event::create_event)))
        .service(web::resource("/eventos").route(web::get().to(event::list_events)))
        .service(
            web::resource("/eventos/{id}")
                .route(web::put().to(event::update_event))
                .route(web::delete().to(event::delete_event)),
        );

    // Attendance ledger
    cfg.service(web::resource("/asistencia").route(web::post().to(attendance::record_attendance)))
        .service(web::resource("/asistencias").route(web::get().to(attendance::list_attendance)))
        .service(
            web::resource("/asistencia/{id}")
                .route(web::put().to(attendance::update_attendance))
                .route(web::delete().to(attendance::delete_attendance)),
        );
}
