use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use oasis::config::AppConfig;
use oasis::data::{ArticleSource, InMemorySource};
use oasis::handlers;
use oasis::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    // Load the dataset once; it stays read-only for the life of the process
    let source = match &config.data_file {
        Some(path) => {
            log::info!("Loading articles from {}", path.display());
            InMemorySource::load_file(path).await
        }
        None => InMemorySource::builtin(),
    };
    let source = match source {
        Ok(s) => s,
        Err(e) => {
            log::error!("Failed to load dataset: {e}");
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    log::info!(
        "Loaded {} articles from {} institutions",
        source.articles().len(),
        source.institutions().len()
    );
    if config.demo_mode {
        log::warn!("Demo mode enabled: empty chart selections show random placeholder data");
    }

    // Session key from SESSION_KEY so filter selections survive restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set, generating random key (filters reset on restart)");
            Key::generate()
        }
    };

    let bind = config.bind.clone();
    let state = AppState::new(config, Arc::new(source));

    log::info!("Starting server at http://{bind}");

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(bind)?
    .run()
    .await
}
