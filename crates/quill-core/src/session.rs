//! Session manager - who is logged in, mirrored to durable storage.
//!
//! ```text
//! anonymous --login/register--> pending --ok--> authenticated
//!                                  \--invalid credentials--> anonymous
//! authenticated --logout--> anonymous
//! ```
//!
//! The stored copy under [`SESSION_KEY`] is written before the in-memory
//! identity changes, so both always name the same user once an operation
//! has settled.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use crate::domain::{User, mask_email};
use crate::ports::{AuthError, Authenticator, KeyValueStore};

/// Storage key holding the serialized session user.
pub const SESSION_KEY: &str = "blogUser";

/// Externally visible session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    /// A login or register call is in flight.
    Pending,
    Authenticated(User),
}

/// Raw session data published to subscribers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    user: Option<User>,
    in_flight: usize,
}

impl SessionSnapshot {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn state(&self) -> SessionState {
        match (&self.user, self.in_flight) {
            (_, n) if n > 0 => SessionState::Pending,
            (Some(user), _) => SessionState::Authenticated(user.clone()),
            (None, _) => SessionState::Anonymous,
        }
    }
}

/// Holds at most one authenticated user.
///
/// Build it once at startup with [`SessionManager::restore`] and share it
/// behind an `Arc`; all methods take `&self`.
pub struct SessionManager {
    authenticator: Arc<dyn Authenticator>,
    storage: Arc<dyn KeyValueStore>,
    snapshot: watch::Sender<SessionSnapshot>,
    commit: Mutex<()>,
}

impl SessionManager {
    /// Start from whatever user durable storage holds.
    ///
    /// The stored user is trusted as-is; credentials are not checked again.
    /// A blob that does not parse is removed and the session starts anonymous.
    pub async fn restore(
        authenticator: Arc<dyn Authenticator>,
        storage: Arc<dyn KeyValueStore>,
    ) -> Result<Self, AuthError> {
        let user = match storage.get(SESSION_KEY).await? {
            None => None,
            Some(blob) => match serde_json::from_str::<User>(&blob) {
                Ok(user) => {
                    tracing::info!(user_id = %user.id, "Session restored from storage");
                    Some(user)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding unreadable stored session");
                    storage.remove(SESSION_KEY).await?;
                    None
                }
            },
        };

        let (snapshot, _) = watch::channel(SessionSnapshot { user, in_flight: 0 });

        Ok(Self {
            authenticator,
            storage,
            snapshot,
            commit: Mutex::new(()),
        })
    }

    pub fn state(&self) -> SessionState {
        self.snapshot.borrow().state()
    }

    pub fn current_user(&self) -> Option<User> {
        self.snapshot.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot.borrow().user.is_some()
    }

    /// `true` while a login or register call is in flight.
    pub fn is_loading(&self) -> bool {
        self.snapshot.borrow().in_flight > 0
    }

    /// Watch session changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot.subscribe()
    }

    /// Log in with an email/password pair.
    ///
    /// On `InvalidCredentials` the previous identity (usually none) is kept.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        tracing::info!(email = %mask_email(email), "Login started");
        let in_flight = self.begin();
        let outcome = self.authenticator.authenticate(email, password).await;
        self.settle(in_flight, outcome).await
    }

    /// Register a new account and log it in.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        tracing::info!(email = %mask_email(email), "Registration started");
        let in_flight = self.begin();
        let outcome = self.authenticator.register(name, email, password).await;
        self.settle(in_flight, outcome).await
    }

    /// Forget the session user and clear durable storage.
    ///
    /// Logging out an anonymous session is a no-op.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let _guard = self.commit.lock().await;
        self.storage.remove(SESSION_KEY).await?;

        let previous = self.snapshot.borrow().user.clone();
        self.snapshot.send_modify(|s| s.user = None);

        match previous {
            Some(user) => tracing::info!(user_id = %user.id, "Logged out"),
            None => tracing::debug!("Logout without a session"),
        }
        Ok(())
    }

    fn begin(&self) -> InFlight<'_> {
        self.snapshot.send_modify(|s| s.in_flight += 1);
        InFlight {
            snapshot: &self.snapshot,
            user: None,
        }
    }

    async fn settle(
        &self,
        mut in_flight: InFlight<'_>,
        outcome: Result<User, AuthError>,
    ) -> Result<User, AuthError> {
        let _guard = self.commit.lock().await;

        let result = match outcome {
            Ok(user) => self.persist(&user).await.map(|()| user),
            Err(e) => Err(e),
        };

        match &result {
            Ok(user) => {
                tracing::info!(
                    user_id = %user.id,
                    email = %user.masked_email(),
                    "Session authenticated"
                );
                in_flight.user = Some(user.clone());
            }
            Err(e) => tracing::warn!(error = %e, "Authentication failed"),
        }
        drop(in_flight);
        result
    }

    async fn persist(&self, user: &User) -> Result<(), AuthError> {
        let blob =
            serde_json::to_string(user).map_err(|e| AuthError::Serialization(e.to_string()))?;
        self.storage.set(SESSION_KEY, &blob).await?;
        Ok(())
    }
}

/// One login or register call in flight.
///
/// Dropping it leaves the pending state, whether the call settled or its
/// future was dropped mid-delay. `user` is installed in the same update.
struct InFlight<'a> {
    snapshot: &'a watch::Sender<SessionSnapshot>,
    user: Option<User>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let user = self.user.take();
        self.snapshot.send_modify(|s| {
            if let Some(user) = user {
                s.user = Some(user);
            }
            s.in_flight -= 1;
        });
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use super::*;
    use crate::ports::StorageError;

    const LATENCY: Duration = Duration::from_millis(1000);

    fn demo_user() -> User {
        User::new("1", "John Doe", "john@example.com").with_avatar("https://img/john.jpg")
    }

    struct FixedAuthenticator;

    #[async_trait]
    impl Authenticator for FixedAuthenticator {
        async fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
            tokio::time::sleep(LATENCY).await;
            if email == "demo@example.com" && password == "password" {
                Ok(demo_user())
            } else {
                Err(AuthError::InvalidCredentials)
            }
        }

        async fn register(
            &self,
            name: &str,
            email: &str,
            _password: &str,
        ) -> Result<User, AuthError> {
            tokio::time::sleep(LATENCY).await;
            Ok(User {
                name: name.to_string(),
                email: email.to_string(),
                ..demo_user()
            })
        }
    }

    #[derive(Default)]
    struct MapStore {
        map: RwLock<HashMap<String, String>>,
        fail_writes: bool,
    }

    #[async_trait]
    impl KeyValueStore for MapStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.map.read().await.get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Io("disk full".to_string()));
            }
            self.map.write().await.insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.map.write().await.remove(key);
            Ok(())
        }
    }

    async fn manager_with(store: Arc<MapStore>) -> SessionManager {
        SessionManager::restore(Arc::new(FixedAuthenticator), store)
            .await
            .unwrap()
    }

    async fn stored_user(store: &MapStore) -> Option<User> {
        store
            .get(SESSION_KEY)
            .await
            .unwrap()
            .map(|blob| serde_json::from_str(&blob).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn test_starts_anonymous_with_empty_storage() {
        let manager = manager_with(Arc::new(MapStore::default())).await;
        assert_eq!(manager.state(), SessionState::Anonymous);
        assert!(!manager.is_authenticated());
        assert!(manager.current_user().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_login_authenticates_and_persists() {
        let store = Arc::new(MapStore::default());
        let manager = manager_with(store.clone()).await;

        let user = manager.login("demo@example.com", "password").await.unwrap();

        assert_eq!(user, demo_user());
        assert_eq!(manager.state(), SessionState::Authenticated(demo_user()));
        assert_eq!(stored_user(&store).await, Some(demo_user()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_credentials_stay_anonymous() {
        let store = Arc::new(MapStore::default());
        let manager = manager_with(store.clone()).await;

        for (email, password) in [
            ("demo@example.com", "wrong"),
            ("john@example.com", "password"),
            ("", ""),
        ] {
            let err = manager.login(email, password).await.unwrap_err();
            assert!(matches!(err, AuthError::InvalidCredentials));
            assert_eq!(manager.state(), SessionState::Anonymous);
        }
        assert_eq!(stored_user(&store).await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_login_keeps_existing_session() {
        let manager = manager_with(Arc::new(MapStore::default())).await;
        manager.login("demo@example.com", "password").await.unwrap();

        assert!(manager.login("demo@example.com", "nope").await.is_err());
        assert_eq!(manager.state(), SessionState::Authenticated(demo_user()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_always_succeeds_with_given_profile() {
        let store = Arc::new(MapStore::default());
        let manager = manager_with(store.clone()).await;

        let user = manager
            .register("Ada Lovelace", "ada@example.com", "whatever")
            .await
            .unwrap();

        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(manager.current_user(), Some(user.clone()));
        assert_eq!(stored_user(&store).await, Some(user));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_while_login_in_flight() {
        let manager = Arc::new(manager_with(Arc::new(MapStore::default())).await);
        let mut updates = manager.subscribe();

        let task = tokio::spawn({
            let manager = manager.clone();
            async move { manager.login("demo@example.com", "password").await }
        });

        updates.changed().await.unwrap();
        assert_eq!(updates.borrow_and_update().state(), SessionState::Pending);
        assert!(manager.is_loading());

        // Other work proceeds while the login waits.
        tokio::time::sleep(LATENCY / 2).await;
        assert_eq!(manager.state(), SessionState::Pending);

        task.await.unwrap().unwrap();
        assert!(!manager.is_loading());
        assert_eq!(manager.state(), SessionState::Authenticated(demo_user()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_for_simulated_latency() {
        let manager = manager_with(Arc::new(MapStore::default())).await;
        let started = tokio::time::Instant::now();

        manager.login("demo@example.com", "password").await.unwrap();

        assert!(started.elapsed() >= LATENCY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_clears_storage_and_is_idempotent() {
        let store = Arc::new(MapStore::default());
        let manager = manager_with(store.clone()).await;
        manager.login("demo@example.com", "password").await.unwrap();

        manager.logout().await.unwrap();
        assert_eq!(manager.state(), SessionState::Anonymous);
        assert_eq!(stored_user(&store).await, None);

        manager.logout().await.unwrap();
        assert_eq!(manager.state(), SessionState::Anonymous);
        assert_eq!(stored_user(&store).await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restore_trusts_stored_user() {
        let store = Arc::new(MapStore::default());
        let stranger = User::new("42", "Mallory", "mallory@example.com");
        store
            .set(SESSION_KEY, &serde_json::to_string(&stranger).unwrap())
            .await
            .unwrap();

        let manager = manager_with(store).await;
        assert_eq!(manager.state(), SessionState::Authenticated(stranger));
    }

    #[tokio::test(start_paused = true)]
    async fn test_restore_discards_corrupt_blob() {
        let store = Arc::new(MapStore::default());
        store.set(SESSION_KEY, "{not json").await.unwrap();

        let manager = manager_with(store.clone()).await;
        assert_eq!(manager.state(), SessionState::Anonymous);
        assert_eq!(store.get(SESSION_KEY).await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_storage_failure_leaves_session_unchanged() {
        let store = Arc::new(MapStore {
            fail_writes: true,
            ..MapStore::default()
        });
        let manager = manager_with(store).await;

        let err = manager.login("demo@example.com", "password").await.unwrap_err();
        assert!(matches!(err, AuthError::Storage(_)));
        assert_eq!(manager.state(), SessionState::Anonymous);
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_survives_restart() {
        let store = Arc::new(MapStore::default());
        let first = manager_with(store.clone()).await;
        first.login("demo@example.com", "password").await.unwrap();
        drop(first);

        let second = manager_with(store).await;
        assert_eq!(second.current_user(), Some(demo_user()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_login_leaves_pending() {
        let store = Arc::new(MapStore::default());
        let manager = manager_with(store.clone()).await;

        let attempt = tokio::time::timeout(
            Duration::from_millis(10),
            manager.login("demo@example.com", "password"),
        )
        .await;
        assert!(attempt.is_err());

        tokio::time::sleep(LATENCY * 2).await;
        assert!(!manager.is_loading());
        assert_eq!(manager.state(), SessionState::Anonymous);
        assert_eq!(stored_user(&store).await, None);

        manager.login("demo@example.com", "password").await.unwrap();
        manager.logout().await.unwrap();
        assert_eq!(manager.state(), SessionState::Anonymous);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_register_keeps_existing_session() {
        let manager = manager_with(Arc::new(MapStore::default())).await;
        manager.login("demo@example.com", "password").await.unwrap();

        let attempt = tokio::time::timeout(
            Duration::from_millis(10),
            manager.register("Ada", "ada@example.com", "secret1"),
        )
        .await;
        assert!(attempt.is_err());

        assert_eq!(manager.state(), SessionState::Authenticated(demo_user()));
    }
}
