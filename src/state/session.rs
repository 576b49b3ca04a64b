//! Session State
//!
//! The client-held record of the authenticated user and bearer token,
//! persisted to local storage so a page reload restores the session
//! without re-authenticating.

use leptos::*;

/// Local storage key for the bearer token.
const TOKEN_KEY: &str = "token";
/// Local storage key for the JSON-serialized user profile.
const USER_KEY: &str = "user";

/// User profile as returned by `GET /api/v1/users/me`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Current session: user profile plus bearer token, or anonymous.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// True iff the signed-in user is a superuser.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_superuser).unwrap_or(false)
    }

    /// Authorization header for authenticated API calls.
    ///
    /// Callers request this immediately before each request; there is no
    /// centralized interceptor.
    pub fn auth_header(&self) -> Option<(String, String)> {
        self.token
            .as_ref()
            .map(|t| ("Authorization".to_string(), format!("Bearer {}", t)))
    }

    /// Restore the session from local storage.
    ///
    /// Corrupted persisted user data is treated as "no session" and the
    /// stored values are discarded.
    pub fn load() -> Self {
        let Some(storage) = local_storage() else {
            return Self::default();
        };

        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let user_json = storage.get_item(USER_KEY).ok().flatten();
        let had_any = token.is_some() || user_json.is_some();

        match decode_stored(token, user_json) {
            Some((token, user)) => Self {
                user: Some(user),
                token: Some(token),
            },
            None => {
                // Partial or corrupt persisted state; drop whatever is left
                if had_any {
                    let _ = storage.remove_item(TOKEN_KEY);
                    let _ = storage.remove_item(USER_KEY);
                }
                Self::default()
            }
        }
    }

    /// Persist a freshly established session (exactly two keys).
    pub fn store(token: &str, user: &UserProfile) -> Self {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
            if let Ok(json) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &json);
            }
        }
        Self {
            user: Some(user.clone()),
            token: Some(token.to_string()),
        }
    }

    /// Remove both persisted keys and reset to anonymous.
    pub fn clear() -> Self {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
        Self::default()
    }
}

/// Decode the persisted key pair. Both keys must be present and the user
/// JSON must parse; anything else is treated as no session.
fn decode_stored(
    token: Option<String>,
    user_json: Option<String>,
) -> Option<(String, UserProfile)> {
    let token = token?;
    let user = serde_json::from_str(&user_json?).ok()?;
    Some((token, user))
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Provide the session to the component tree.
///
/// The session is restored from local storage exactly once at application
/// start; logout replaces it with [`Session::clear`]. Components consume it
/// via [`use_session`] instead of reaching for a global.
pub fn provide_session() {
    let session = create_rw_signal(Session::load());
    provide_context(session);
}

/// Consume the session signal from context.
pub fn use_session() -> RwSignal<Session> {
    use_context::<RwSignal<Session>>().expect("Session not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(is_superuser: bool) -> UserProfile {
        UserProfile {
            id: 7,
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            is_superuser,
            is_active: true,
        }
    }

    #[test]
    fn test_anonymous_session() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
        assert!(session.auth_header().is_none());
    }

    #[test]
    fn test_admin_iff_superuser() {
        let admin = Session {
            user: Some(profile(true)),
            token: Some("t".to_string()),
        };
        let user = Session {
            user: Some(profile(false)),
            token: Some("t".to_string()),
        };
        assert!(admin.is_admin());
        assert!(!user.is_admin());
        assert!(user.is_authenticated());
    }

    #[test]
    fn test_auth_header_format() {
        let session = Session {
            user: Some(profile(false)),
            token: Some("abc123".to_string()),
        };
        let (name, value) = session.auth_header().unwrap();
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Bearer abc123");
    }

    #[test]
    fn test_stored_state_requires_both_keys() {
        let json = serde_json::to_string(&profile(false)).unwrap();

        assert!(decode_stored(Some("t".to_string()), Some(json.clone())).is_some());
        // A token without a profile (or vice versa) is stale, not a session
        assert!(decode_stored(Some("t".to_string()), None).is_none());
        assert!(decode_stored(None, Some(json)).is_none());
        assert!(decode_stored(None, None).is_none());
    }

    #[test]
    fn test_corrupt_stored_user_discarded() {
        let broken = decode_stored(Some("t".to_string()), Some("{not json".to_string()));
        assert!(broken.is_none());
    }

    #[test]
    fn test_profile_roundtrip() {
        let json = r#"{"id":7,"email":"ada@example.com","name":"Ada","is_superuser":true,"is_active":true}"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert!(user.is_superuser);
        let back = serde_json::to_string(&user).unwrap();
        let again: UserProfile = serde_json::from_str(&back).unwrap();
        assert_eq!(user, again);
    }

    #[test]
    fn test_profile_defaults() {
        // Older API responses omit name and is_active
        let json = r#"{"id":1,"email":"x@example.com","is_superuser":false}"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "");
        assert!(user.is_active);
    }
}
