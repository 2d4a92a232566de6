use actix_cors::Cors;
use actix_web::web::{self, Data, JsonConfig, PathConfig, ServiceConfig};
use actix_web::{App, HttpServer};
use tracing::info;
use tracing_actix_web::TracingLogger;

pub mod ack;
pub mod admin;
pub mod camp;
pub mod config;
pub mod database;
pub mod error;
mod fields;
pub mod health;
pub mod participant;
pub mod typedid;

pub use config::Config;
pub use database::{Database, MongoDatabase};
pub use error::Error;

/// Registers every route plus the extractor error formatting. The caller
/// provides the `Data<Box<dyn Database>>` app data.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.app_data(JsonConfig::default().error_handler(|err, _req| {
        // format json errors with custom format
        Error::InvalidJson(err).into()
    }))
    .app_data(PathConfig::default().error_handler(|err, _req| {
        // format path errors with custom format
        Error::InvalidPath(err).into()
    }))
    .service(health::liveness)
    .service(camp::endpoints::get_camps)
    .service(camp::endpoints::get_camp_by_id)
    .service(camp::endpoints::create_camp)
    .service(camp::endpoints::update_camp)
    .service(camp::endpoints::delete_camp)
    .service(camp::endpoints::register_participant_in_camp)
    .service(participant::endpoints::create_participant)
    .service(participant::endpoints::get_participants)
    .service(participant::endpoints::get_participants_by_email)
    .service(participant::endpoints::update_participant_confirmation_status)
    .service(participant::endpoints::delete_participant)
    .service(admin::endpoints::upsert_admin)
    .default_service(web::to(path_not_found));
}

async fn path_not_found() -> Result<&'static str, Error> {
    Err(Error::PathNotFound)
}

/// Connects to the database once and serves until the process is stopped.
pub async fn run(config: Config) -> Result<(), Error> {
    info!("starting with config: {}", config);

    let db = MongoDatabase::connect(&config).await?;
    let db = Data::new(Box::new(db) as Box<dyn Database>);

    let address = config.bind_address();
    info!("listening on {}:{}", address.0, address.1);

    HttpServer::new(move || {
        App::new()
            .app_data(db.clone())
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .configure(configure)
    })
    .bind(address)?
    .run()
    .await?;

    Ok(())
}
