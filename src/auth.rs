//! Identity boundary.
//!
//! The board only needs to know who is signed in and whether that is still
//! being determined. Providers publish [`AuthState`] over a `watch` channel.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::Result;
use crate::types::User;

/// Who is signed in, if anyone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_loading: bool,
}

impl AuthState {
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            is_loading: false,
        }
    }

    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
        }
    }
}

/// Which top-level screen the app shows for an auth state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    SignIn,
    Board,
}

impl From<&AuthState> for Screen {
    fn from(state: &AuthState) -> Self {
        if state.is_loading {
            Screen::Loading
        } else if state.user.is_some() {
            Screen::Board
        } else {
            Screen::SignIn
        }
    }
}

pub trait AuthProvider: Send + Sync + 'static {
    /// Begin signing in
    fn login(&self) -> impl Future<Output = Result<()>> + Send;

    /// End the session
    fn logout(&self) -> impl Future<Output = Result<()>> + Send;

    /// Receiver that sees every state change
    fn subscribe(&self) -> watch::Receiver<AuthState>;
}

/// Signs in as the user described in the `auth` config section.
#[derive(Clone)]
pub struct LocalAuthProvider {
    inner: Arc<LocalAuthInner>,
}

struct LocalAuthInner {
    config: AuthConfig,
    user_id: String,
    tx: watch::Sender<AuthState>,
}

impl LocalAuthProvider {
    /// Starts in the loading state; call [`Self::restore`] to resolve it
    pub fn new(config: AuthConfig) -> Self {
        let (tx, _rx) = watch::channel(AuthState::loading());
        Self {
            inner: Arc::new(LocalAuthInner {
                config,
                user_id: Uuid::new_v4().to_string(),
                tx,
            }),
        }
    }

    pub fn state(&self) -> AuthState {
        self.inner.tx.borrow().clone()
    }

    /// Resolve the startup loading state. Signs straight in when `auto_login`
    /// is set, otherwise lands on the sign-in screen.
    pub async fn restore(&self) {
        tokio::time::sleep(self.delay()).await;
        let state = if self.inner.config.auto_login {
            AuthState::signed_in(self.user())
        } else {
            AuthState::signed_out()
        };
        tracing::debug!(signed_in = state.user.is_some(), "restored session");
        self.inner.tx.send_replace(state);
    }

    fn delay(&self) -> Duration {
        Duration::from_millis(self.inner.config.login_delay_ms)
    }

    fn user(&self) -> User {
        let config = &self.inner.config;
        User {
            id: self.inner.user_id.clone(),
            email: config.email.clone(),
            display_name: config.display_name.clone(),
            profile_picture: config.profile_picture.clone(),
        }
    }
}

impl AuthProvider for LocalAuthProvider {
    async fn login(&self) -> Result<()> {
        self.inner.tx.send_replace(AuthState::loading());
        tokio::time::sleep(self.delay()).await;
        let user = self.user();
        tracing::info!(email = %user.email, "signed in");
        self.inner.tx.send_replace(AuthState::signed_in(user));
        Ok(())
    }

    async fn logout(&self) -> Result<()> {
        tracing::info!("signed out");
        self.inner.tx.send_replace(AuthState::signed_out());
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.inner.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AuthConfig {
        AuthConfig {
            display_name: Some("Dev".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_screen_for_state() {
        assert_eq!(Screen::from(&AuthState::loading()), Screen::Loading);
        assert_eq!(Screen::from(&AuthState::signed_out()), Screen::SignIn);
    }

    #[tokio::test(start_paused = true)]
    async fn test_starts_loading_then_signed_out() {
        let auth = LocalAuthProvider::new(config());
        assert!(auth.state().is_loading);
        auth.restore().await;
        assert_eq!(auth.state(), AuthState::signed_out());
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_login() {
        let auth = LocalAuthProvider::new(AuthConfig {
            auto_login: true,
            ..config()
        });
        auth.restore().await;
        assert_eq!(auth.state().user.unwrap().name(), "Dev");
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_logout_notify_subscribers() {
        let auth = LocalAuthProvider::new(config());
        auth.restore().await;
        let mut rx = auth.subscribe();

        auth.login().await.unwrap();
        assert!(rx.has_changed().unwrap());
        let user = rx.borrow_and_update().user.clone().unwrap();
        assert_eq!(user.email, "developer@example.com");
        assert_eq!(Screen::from(&auth.state()), Screen::Board);

        auth.logout().await.unwrap();
        assert!(rx.borrow_and_update().user.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_user_id_is_stable_across_logins() {
        let auth = LocalAuthProvider::new(config());
        auth.login().await.unwrap();
        let first = auth.state().user.unwrap().id;
        auth.logout().await.unwrap();
        auth.login().await.unwrap();
        assert_eq!(auth.state().user.unwrap().id, first);
    }
}
