use std::collections::HashMap;

use chrono::{Duration, Local, NaiveDateTime};
use rand::distributions::{Alphanumeric, DistString};
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::{config::{ConfigError, SessionConfig}, data::UserID, db::DB, error::JackutError};

/// Live sessions, keyed by token. Never persisted.
pub struct Auth {
    sessions: HashMap<SessionID, (UserID, NaiveDateTime)>,
    token_length: usize,
    max_age: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionID(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStore {
    pub salt: String,
    pub hashed: String,
}

impl PasswordStore {
    pub fn secure(password: &str) -> Self {
        let salt = Alphanumeric.sample_string(&mut rand::thread_rng(), 16);
        let hashed = Self::hash(password, &salt);
        Self { salt, hashed }
    }

    pub fn matches(&self, password: &str) -> bool {
        Self::hash(password, &self.salt) == self.hashed
    }

    fn hash(password: &str, salt: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(password.to_string() + salt);
        format!("{:x}", hasher.finalize())
    }
}

impl Auth {
    pub fn init(config: &SessionConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            sessions: HashMap::new(),
            token_length: config.token_length.max(1),
            max_age: config.max_age()?,
        })
    }

    fn gen_session_id(&self) -> SessionID {
        let id = SessionID(Alphanumeric.sample_string(&mut rand::thread_rng(), self.token_length));
        if self.sessions.contains_key(&id) {
            self.gen_session_id()
        } else {
            id
        }
    }

    fn create_session(&mut self, user: UserID) -> SessionID {
        let session_id = self.gen_session_id();
        self.sessions.insert(session_id.clone(), (user, Local::now().naive_local()));
        session_id
    }

    pub fn signup(&mut self, login: &str, password: &str, name: &str, db: &mut DB) -> Result<UserID, JackutError> {
        if db.get_user(&UserID(login.to_string())).is_some() {
            Err(JackutError::LoginAlreadyUsed)
        } else if login.is_empty() {
            Err(JackutError::InvalidLogin)
        } else if password.is_empty() {
            Err(JackutError::InvalidPassword)
        } else {
            let id = db.create_new_user(login, PasswordStore::secure(password), name)?;
            info!(login, "user created");
            Ok(id)
        }
    }

    pub fn login(&mut self, login: &str, password: &str, db: &DB) -> Result<(UserID, SessionID), JackutError> {
        let id = match db.login_check(login, password) {
            Ok(id) => id,
            Err(e) => {
                warn!(login, "rejected login attempt");
                return Err(e);
            }
        };
        let session_id = self.create_session(id.clone());
        info!(login, "session opened");
        Ok((id, session_id))
    }

    pub fn logout(&mut self, session_id: &SessionID) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    /// Drops every session bound to `user`.
    pub fn logout_user(&mut self, user: &UserID) {
        self.sessions.retain(|_, (owner, _)| owner != user)
    }

    pub fn session_is_online(&self, session_id: &SessionID) -> bool {
        match self.sessions.get(session_id) {
            Some((_, last_use)) => !self.is_expired(last_use),
            None => false,
        }
    }

    /// Resolves a session and refreshes its last-use time. Expired sessions are dropped.
    pub fn get_user_for_session_id(&mut self, session_id: &SessionID) -> Option<&UserID> {
        let expired = match self.sessions.get(session_id) {
            Some((_, last_use)) => self.is_expired(last_use),
            None => return None,
        };
        if expired {
            debug!("session expired");
            self.sessions.remove(session_id);
            return None;
        }
        self.sessions.get_mut(session_id).map(|(user, last_use)| {
            *last_use = Local::now().naive_local();
            &*user
        })
    }

    pub fn session_user(&mut self, session_id: &str) -> Result<UserID, JackutError> {
        self.get_user_for_session_id(&SessionID(session_id.to_string()))
            .cloned()
            .ok_or(JackutError::UserNotRegistered)
    }

    pub fn delete_sessions_older_than(&mut self, age: &Duration) {
        let now = Local::now().naive_local();
        self.sessions.retain(|_, (_, last_use)| now.signed_duration_since(*last_use) <= *age)
    }

    pub fn clear_sessions(&mut self) {
        self.sessions.clear();
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn is_expired(&self, last_use: &NaiveDateTime) -> bool {
        match &self.max_age {
            Some(max_age) => Local::now().naive_local().signed_duration_since(*last_use) > *max_age,
            None => false,
        }
    }
}
