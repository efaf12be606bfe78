use gloo::storage::{LocalStorage, Storage};

use crate::types::{Session, User};

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Persisted session, kept in `localStorage` under the same keys the original
/// web client used: `token` holds the raw bearer string, `user` the profile as
/// a JSON object. The two keys are always written and removed together.
pub struct SessionStore;

impl SessionStore {
    /// Read the persisted session. Anything short of a token plus a parsable
    /// user object counts as no session; whatever half-written state was found
    /// is removed so the next startup reads clean.
    pub fn load() -> Option<Session> {
        let storage = LocalStorage::raw();
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let user_json = storage.get_item(USER_KEY).ok().flatten();
        let found_any = token.is_some() || user_json.is_some();

        match decode(token, user_json) {
            Some(session) => {
                log::info!("sessão restaurada para {}", session.user.nome);
                Some(session)
            }
            None => {
                if found_any {
                    log::warn!("dados de sessão ilegíveis no storage, descartando");
                    Self::clear();
                }
                None
            }
        }
    }

    pub fn save(session: &Session) {
        let storage = LocalStorage::raw();
        if let Ok(user_json) = serde_json::to_string(&session.user) {
            let _ = storage.set_item(TOKEN_KEY, &session.token);
            let _ = storage.set_item(USER_KEY, &user_json);
        }
    }

    pub fn clear() {
        let storage = LocalStorage::raw();
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

/// A session exists only when both halves are present and the user decodes.
fn decode(token: Option<String>, user_json: Option<String>) -> Option<Session> {
    let token = token?;
    let user: User = serde_json::from_str(&user_json?).ok()?;
    Some(Session { token, user })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_with_both_halves() {
        let session = decode(
            Some("abc".to_string()),
            Some(r#"{"id":1,"nome":"Ana","email":"ana@example.com"}"#.to_string()),
        )
        .unwrap();

        assert_eq!(session.token, "abc");
        assert_eq!(session.user.nome, "Ana");
    }

    #[test]
    fn missing_token_is_no_session() {
        assert!(decode(None, Some(r#"{"nome":"Ana"}"#.to_string())).is_none());
    }

    #[test]
    fn missing_user_is_no_session() {
        assert!(decode(Some("abc".to_string()), None).is_none());
    }

    #[test]
    fn unparsable_user_is_no_session() {
        assert!(decode(Some("abc".to_string()), Some("{not json".to_string())).is_none());
    }
}
