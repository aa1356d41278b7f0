use crate::commands::Commands;
use crate::document_commands::DocumentCommands;
use crate::error::Result as CliErrorResult;

use std::sync::Arc;

use log::debug;
use serde_json::{Value, json};
use tt_client::{ClientFactory, search_clients};
use tt_config::Config;
use tt_core::{ClientDirectory, CoreError, MeetingSchedule};
use tt_session::{FileStore, KeyValueStore, Session, SessionStore, SignatureLog};

/// Everything a command needs, wired from one store.
pub struct App {
    factory: ClientFactory,
    session: Session,
    signatures: SignatureLog,
    clients: ClientDirectory,
    meetings: MeetingSchedule,
}

impl App {
    pub fn new(factory: ClientFactory, store: Arc<dyn KeyValueStore>) -> Self {
        let session = Session::new(
            Arc::new(factory.public()),
            SessionStore::new(store.clone()),
        );

        Self {
            factory,
            session,
            signatures: SignatureLog::new(store),
            clients: ClientDirectory::default(),
            meetings: MeetingSchedule::default(),
        }
    }

    /// Session file under the config directory, HTTP client from `[api]`.
    pub fn from_config(config: &Config) -> CliErrorResult<Self> {
        let factory = ClientFactory::from_config(&config.api)?;
        let store_path = config.storage_path()?;
        debug!("Session store: {}", store_path.display());

        Ok(Self::new(factory, Arc::new(FileStore::new(store_path))))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn run(&self, command: Commands) -> CliErrorResult<Value> {
        self.session.restore().await;

        match command {
            Commands::Login { username, password } => {
                let user = self.session.login(&username, &password).await?;
                Ok(json!({
                    "loggedIn": true,
                    "displayName": user.display_name(),
                    "user": user,
                }))
            }
            Commands::Logout => {
                self.session.logout().await;
                Ok(json!({ "loggedOut": true }))
            }
            Commands::Whoami => {
                let state = self.session.state().await;
                Ok(json!({
                    "state": state.as_str(),
                    "user": state.user(),
                }))
            }
            Commands::Search { query } => {
                let client = self
                    .factory
                    .authenticated(Arc::new(self.session.store().clone()));
                Ok(search_clients(&client, &query).await?)
            }
            Commands::Clients { query } => {
                let records = self.clients.search(query.as_deref().unwrap_or_default());
                Ok(serde_json::to_value(records)?)
            }
            Commands::Meetings { query } => {
                let meetings = self.meetings.search(query.as_deref().unwrap_or_default());
                Ok(serde_json::to_value(meetings)?)
            }
            Commands::Documents { action } => self.run_documents(action).await,
        }
    }

    async fn run_documents(&self, action: DocumentCommands) -> CliErrorResult<Value> {
        let mut book = self.signatures.load_book().await?;

        match action {
            DocumentCommands::List => Ok(serde_json::to_value(book.all())?),
            DocumentCommands::Pending => Ok(serde_json::to_value(book.pending())?),
            DocumentCommands::Signed => Ok(serde_json::to_value(book.signed())?),
            DocumentCommands::Show { id } => {
                let document = book
                    .find(&id)
                    .ok_or_else(|| CoreError::document_not_found(&id))?;
                Ok(serde_json::to_value(document)?)
            }
            DocumentCommands::Sign { id } => {
                self.signatures.sign(&mut book, &id).await?;
                let document = book
                    .find(&id)
                    .ok_or_else(|| CoreError::document_not_found(&id))?;
                Ok(serde_json::to_value(document)?)
            }
        }
    }
}
