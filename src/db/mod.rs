use std::{collections::HashMap, path::Path};

use tracing::info;

use crate::{data::{Community, CommunityID, User, UserID}, auth::PasswordStore, error::JackutError};

use self::store::StoreError;

pub mod community;
pub mod messages;
pub mod relations;
pub mod removal;
pub mod store;

/// All persistent state: users keyed by login and communities keyed by name.
#[derive(Default)]
pub struct DB {
    users: HashMap<UserID, User>,
    communities: HashMap<CommunityID, Community>,
}

impl DB {
    pub fn load(dir: &Path) -> Result<Self, StoreError> {
        let mut l = Self::default();
        l.reload(dir)?;
        Ok(l)
    }

    pub fn reload(&mut self, dir: &Path) -> Result<(), StoreError> {
        self.users = store::load_users(dir)?;
        self.communities = store::load_communities(dir)?;
        info!(
            users = self.users.len(),
            communities = self.communities.len(),
            dir = %dir.display(),
            "state loaded"
        );
        Ok(())
    }

    pub fn save(&self, dir: &Path) -> Result<(), StoreError> {
        store::store_users(dir, &self.users)?;
        store::store_communities(dir, &self.communities)?;
        info!(
            users = self.users.len(),
            communities = self.communities.len(),
            dir = %dir.display(),
            "state saved"
        );
        Ok(())
    }

    /// Empties memory. Persisted files are left alone.
    pub fn clear(&mut self) {
        self.users.clear();
        self.communities.clear();
    }

    pub fn get_user(&self, id: &UserID) -> Option<&User> {
        self.users.get(id)
    }

    pub fn user(&self, id: &UserID) -> Result<&User, JackutError> {
        self.users.get(id).ok_or(JackutError::UserNotRegistered)
    }

    pub(crate) fn user_mut(&mut self, id: &UserID) -> Result<&mut User, JackutError> {
        self.users.get_mut(id).ok_or(JackutError::UserNotRegistered)
    }

    pub fn community(&self, id: &CommunityID) -> Result<&Community, JackutError> {
        self.communities.get(id).ok_or(JackutError::CommunityNotExist)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn community_count(&self) -> usize {
        self.communities.len()
    }
}

impl DB {
    pub fn create_new_user(&mut self, login: &str, password: PasswordStore, name: &str) -> Result<UserID, JackutError> {
        let id = UserID(login.to_string());
        if self.users.contains_key(&id) {
            Err(JackutError::LoginAlreadyUsed)
        } else {
            self.users.insert(id.clone(), User::new(password, name));
            Ok(id)
        }
    }

    pub fn login_check(&self, login: &str, password: &str) -> Result<UserID, JackutError> {
        if login.is_empty() || password.is_empty() {
            return Err(JackutError::InvalidLoginOrPassword);
        }
        let id = UserID(login.to_string());
        match self.users.get(&id) {
            Some(user) if user.password.matches(password) => Ok(id),
            _ => Err(JackutError::InvalidLoginOrPassword),
        }
    }

    pub fn update_user_attribute(&mut self, id: &UserID, key: &str, value: &str) -> Result<(), JackutError> {
        self.user_mut(id)?.update_attribute(key, value);
        Ok(())
    }
}
