use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::api::types::Role;

pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";
pub const EMAIL_KEY: &str = "email";
pub const ROLE_KEY: &str = "role";

const SESSION_KEYS: [&str; 4] = [TOKEN_KEY, USERNAME_KEY, EMAIL_KEY, ROLE_KEY];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub email: Option<String>,
    pub role: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn can_view_audit(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Manager)
    }
}

/// String key/value persistence for the session fields.
pub trait SessionStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Backed by `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl LocalSessionStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalSessionStore {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, session field {} not saved", key);
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("failed to persist session field {}", key);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: &Session) -> Self {
        let store = Self::default();
        save_session(&store, session);
        store
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

pub fn default_session_store() -> Rc<dyn SessionStore> {
    if cfg!(target_arch = "wasm32") {
        Rc::new(LocalSessionStore)
    } else {
        Rc::new(MemorySessionStore::new())
    }
}

pub fn get_token(store: &dyn SessionStore) -> Option<String> {
    store.read(TOKEN_KEY).filter(|token| !token.is_empty())
}

pub fn get_role(store: &dyn SessionStore) -> Option<Role> {
    store.read(ROLE_KEY)?.parse().ok()
}

/// A session exists only when both token and a recognised role are stored.
pub fn load_session(store: &dyn SessionStore) -> Option<Session> {
    Some(Session {
        token: get_token(store)?,
        username: store.read(USERNAME_KEY).unwrap_or_default(),
        email: store.read(EMAIL_KEY).filter(|email| !email.is_empty()),
        role: get_role(store)?,
    })
}

pub fn save_session(store: &dyn SessionStore, session: &Session) {
    store.write(TOKEN_KEY, &session.token);
    store.write(USERNAME_KEY, &session.username);
    match &session.email {
        Some(email) => store.write(EMAIL_KEY, email),
        None => store.remove(EMAIL_KEY),
    }
    store.write(ROLE_KEY, session.role.as_str());
}

pub fn clear_session(store: &dyn SessionStore) {
    for key in SESSION_KEYS {
        store.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Session {
        Session {
            token: "jwt-token".into(),
            username: "admin".into(),
            email: Some("admin@securedoc.io".into()),
            role: Role::Admin,
        }
    }

    #[test]
    fn session_round_trips_through_store() {
        let store = MemorySessionStore::with_session(&admin());
        assert_eq!(load_session(&store), Some(admin()));
        assert_eq!(get_token(&store).as_deref(), Some("jwt-token"));
        assert_eq!(get_role(&store), Some(Role::Admin));
    }

    #[test]
    fn clear_removes_every_field() {
        let store = MemorySessionStore::with_session(&admin());
        clear_session(&store);
        assert!(store.is_empty());
        assert_eq!(load_session(&store), None);
    }

    #[test]
    fn unknown_role_yields_no_session() {
        let store = MemorySessionStore::with_session(&admin());
        store.write(ROLE_KEY, "SUPERUSER");
        assert_eq!(get_role(&store), None);
        assert_eq!(load_session(&store), None);
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let store = MemorySessionStore::new();
        store.write(TOKEN_KEY, "");
        store.write(ROLE_KEY, "USER");
        assert_eq!(get_token(&store), None);
        assert_eq!(load_session(&store), None);
    }

    #[test]
    fn manager_can_view_audit_but_is_not_admin() {
        let manager = Session {
            role: Role::Manager,
            ..admin()
        };
        assert!(manager.can_view_audit());
        assert!(!manager.is_admin());
    }
}
