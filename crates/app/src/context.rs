//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    chat::{ChatCompletionsConfig, ChatService, HttpChatClient},
    database::{self, Db},
    domain::{
        customers::{CustomersService, PgCustomersService},
        tickets::{PgTicketsService, TicketsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub customers: Arc<dyn CustomersService>,
    pub tickets: Arc<dyn TicketsService>,
    pub chat: Arc<dyn ChatService>,
}

impl AppContext {
    /// Build application context from a database URL and chat configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        chat: ChatCompletionsConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url).await.map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            customers: Arc::new(PgCustomersService::new(db.clone())),
            tickets: Arc::new(PgTicketsService::new(db)),
            chat: Arc::new(HttpChatClient::new(chat)),
        })
    }
}
