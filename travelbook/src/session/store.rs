//! The client session: a bearer token plus the cached user profile.

use tracing::warn;

use crate::models::User;

use super::LocalStorage;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Token/user pair held by the API client and mirrored to local storage.
///
/// Storage failures never fail a session operation; they are traced and the
/// in-memory state stays authoritative for the rest of the process.
#[derive(Debug)]
pub struct Session {
    token: Option<String>,
    storage: LocalStorage,
}

impl Session {
    /// Restore whatever token was persisted by a previous run.
    pub fn restore(storage: LocalStorage) -> Self {
        let token = match storage.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!("Could not read stored session: {e:#}");
                None
            }
        };
        Self { token, storage }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn set_token(&mut self, token: String) {
        if let Err(e) = self.storage.set(TOKEN_KEY, &token) {
            warn!("Could not persist token: {e:#}");
        }
        self.token = Some(token);
    }

    pub fn cache_user(&self, user: &User) {
        let result = serde_json::to_string(user)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.storage.set(USER_KEY, &json));
        if let Err(e) = result {
            warn!("Could not cache user: {e:#}");
        }
    }

    /// Forget the token and the cached user.
    pub fn clear(&mut self) {
        self.token = None;
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove(key) {
                warn!("Could not remove {key} from storage: {e:#}");
            }
        }
    }
}
