//! Helpdesk JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use helpdesk_app::context::AppContext;

use crate::{
    config::{ServerConfig, logging::LogFormat},
    state::State,
};

mod chat;
mod config;
mod customers;
mod extensions;
mod healthcheck;
mod meta;
mod shutdown;
mod state;
mod tickets;
#[cfg(test)]
mod test_helpers;

/// Helpdesk JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    let subscriber = tracing_subscriber::fmt().with_env_filter(
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level)),
    );

    match config.logging.log_format {
        LogFormat::Compact => subscriber.compact().init(),
        LogFormat::Json => subscriber.json().init(),
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let app = match AppContext::from_database_url(
        &config.database.database_url,
        config.chat.completions_config(),
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("api/v1")
                .push(
                    Router::with_path("customers")
                        .get(customers::index::handler)
                        .post(customers::create::handler)
                        .push(
                            Router::with_path("{customer}")
                                .get(customers::get::handler)
                                .put(customers::update::handler)
                                .delete(customers::delete::handler)
                                .push(
                                    Router::with_path("approve").post(customers::approve::handler),
                                ),
                        ),
                )
                .push(
                    Router::with_path("tickets")
                        .get(tickets::index::handler)
                        .post(tickets::create::handler)
                        .push(
                            Router::with_path("{ticket}")
                                .get(tickets::get::handler)
                                .put(tickets::update::handler),
                        ),
                )
                .push(Router::with_path("chat").post(chat::create::handler)),
        );

    let doc = OpenApi::new("Helpdesk API", "0.1.0").merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
