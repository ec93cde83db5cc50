//! Application state - shared by every command.

use std::sync::Arc;

use quill_core::listing::CategoryChangePolicy;
use quill_core::ports::{CommentRepository, KeyValueStore, PostRepository};
use quill_core::{BlogReader, PostEditor, SessionManager};
use quill_infra::{
    DemoAuthenticator, FileStore, InMemoryCommentRepository, InMemoryPostRepository, InMemoryStore,
};

use crate::config::{AppConfig, StorageKind};
use crate::error::AppResult;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SessionManager>,
    pub reader: Arc<BlogReader>,
    pub editor: Arc<PostEditor>,
    pub category_policy: CategoryChangePolicy,
}

impl AppState {
    /// Build the application state from configuration.
    ///
    /// Posts and comments always start from the seed data. The session is
    /// restored from durable storage; if that storage cannot be read the
    /// session falls back to memory for this run.
    pub async fn new(config: &AppConfig) -> AppResult<Self> {
        let posts: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::seeded());
        let comments: Arc<dyn CommentRepository> = Arc::new(InMemoryCommentRepository::seeded());
        let authenticator = Arc::new(DemoAuthenticator::new(config.auth_latency));

        let session = match config.storage {
            StorageKind::File => {
                let store = FileStore::in_dir(&config.data_dir);
                tracing::debug!(path = %store.path().display(), "Using file session storage");
                let storage: Arc<dyn KeyValueStore> = Arc::new(store);
                match SessionManager::restore(authenticator.clone(), storage).await {
                    Ok(session) => session,
                    Err(e) => {
                        tracing::error!(
                            "Failed to restore session: {}. Using in-memory fallback.",
                            e
                        );
                        SessionManager::restore(authenticator, Arc::new(InMemoryStore::new()))
                            .await?
                    }
                }
            }
            StorageKind::Memory => {
                tracing::info!("Session storage is in memory; logins end with the process");
                SessionManager::restore(authenticator, Arc::new(InMemoryStore::new())).await?
            }
        };

        tracing::debug!("Application state initialized");

        Ok(Self {
            session: Arc::new(session),
            reader: Arc::new(BlogReader::new(posts.clone(), comments.clone())),
            editor: Arc::new(PostEditor::new(posts, comments)),
            category_policy: config.category_policy,
        })
    }
}
