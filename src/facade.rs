use tracing::info;

use crate::{
    auth::{Auth, SessionID},
    config::Config,
    data::{CommunityID, UserID},
    db::{store::clear_store, DB},
    error::JackutError,
};

/// Flat entry point to the network. Arguments are plain strings: logins,
/// session tokens, attribute keys and community names.
pub struct Facade {
    auth: Auth,
    db: DB,
    config: Config,
}

fn user_id(login: &str) -> UserID {
    UserID(login.to_string())
}

fn community_id(name: &str) -> CommunityID {
    CommunityID(name.to_string())
}

impl Facade {
    /// Starts the system, restoring whatever was saved by the last close.
    pub fn open(config: Config) -> Result<Self, JackutError> {
        let auth = Auth::init(&config.session)?;
        let db = DB::load(&config.store.path)?;
        Ok(Self { auth, db, config })
    }

    /// Wipes persisted files and memory.
    pub fn reset_system(&mut self) -> Result<(), JackutError> {
        clear_store(&self.config.store.path)?;
        self.db.clear();
        self.auth.clear_sessions();
        info!("system reset");
        Ok(())
    }

    /// Saves state to disk, then empties memory and drops every session.
    pub fn close_system(&mut self) -> Result<(), JackutError> {
        self.db.save(&self.config.store.path)?;
        self.db.clear();
        self.auth.clear_sessions();
        info!("system closed");
        Ok(())
    }

    pub fn create_user(&mut self, login: &str, password: &str, name: &str) -> Result<(), JackutError> {
        self.auth.signup(login, password, name, &mut self.db)?;
        Ok(())
    }

    pub fn open_session(&mut self, login: &str, password: &str) -> Result<String, JackutError> {
        let (_, session_id) = self.auth.login(login, password, &self.db)?;
        Ok(session_id.0)
    }

    pub fn close_session(&mut self, session: &str) -> Result<(), JackutError> {
        if self.auth.logout(&SessionID(session.to_string())) {
            Ok(())
        } else {
            Err(JackutError::UserNotRegistered)
        }
    }

    pub fn session_is_online(&self, session: &str) -> bool {
        self.auth.session_is_online(&SessionID(session.to_string()))
    }

    pub fn get_user_attribute(&self, login: &str, attribute: &str) -> Result<String, JackutError> {
        Ok(self.db.user(&user_id(login))?.attribute(attribute)?.to_string())
    }

    pub fn edit_profile(&mut self, session: &str, attribute: &str, value: &str) -> Result<(), JackutError> {
        let user = self.auth.session_user(session)?;
        self.db.update_user_attribute(&user, attribute, value)
    }

    pub fn add_friend(&mut self, session: &str, friend: &str) -> Result<(), JackutError> {
        let user = self.auth.session_user(session)?;
        self.db.add_friend(&user, &user_id(friend))
    }

    pub fn is_friend(&self, login: &str, friend: &str) -> Result<bool, JackutError> {
        self.db.is_friend(&user_id(login), &user_id(friend))
    }

    pub fn get_friends(&self, login: &str) -> Result<String, JackutError> {
        self.db.friends_of(&user_id(login))
    }

    pub fn send_message(&mut self, session: &str, recipient: &str, message: &str) -> Result<(), JackutError> {
        let user = self.auth.session_user(session)?;
        self.db.send_private_message(&user, &user_id(recipient), message)
    }

    pub fn read_message(&mut self, session: &str) -> Result<String, JackutError> {
        let user = self.auth.session_user(session)?;
        self.db.read_private_message(&user)
    }

    pub fn create_community(&mut self, session: &str, name: &str, description: &str) -> Result<(), JackutError> {
        let user = self.auth.session_user(session)?;
        self.db.create_community(&user, &community_id(name), description)
    }

    pub fn get_community_description(&self, name: &str) -> Result<String, JackutError> {
        Ok(self.db.community(&community_id(name))?.description.clone())
    }

    pub fn get_community_owner(&self, name: &str) -> Result<String, JackutError> {
        Ok(self.db.community(&community_id(name))?.owner.0.clone())
    }

    pub fn get_community_members(&self, name: &str) -> Result<String, JackutError> {
        self.db.community_members(&community_id(name))
    }

    pub fn get_communities(&self, login: &str) -> Result<String, JackutError> {
        self.db.communities_of(&user_id(login))
    }

    pub fn join_community(&mut self, session: &str, name: &str) -> Result<(), JackutError> {
        let community = community_id(name);
        self.db.community(&community)?;
        let user = self.auth.session_user(session)?;
        self.db.join_community(&user, &community)
    }

    pub fn send_community_message(&mut self, session: &str, community: &str, message: &str) -> Result<(), JackutError> {
        let user = self.auth.session_user(session)?;
        self.db.send_community_message(&user, &community_id(community), message)
    }

    pub fn read_community_message(&mut self, session: &str) -> Result<String, JackutError> {
        let user = self.auth.session_user(session)?;
        self.db.read_community_message(&user)
    }

    pub fn add_idol(&mut self, session: &str, idol: &str) -> Result<(), JackutError> {
        let user = self.auth.session_user(session)?;
        self.db.add_idol(&user, &user_id(idol))
    }

    pub fn is_fan(&self, login: &str, idol: &str) -> Result<bool, JackutError> {
        self.db.is_fan(&user_id(login), &user_id(idol))
    }

    pub fn get_fans(&self, login: &str) -> Result<String, JackutError> {
        self.db.fans_of(&user_id(login))
    }

    pub fn add_crush(&mut self, session: &str, crush: &str) -> Result<(), JackutError> {
        let user = self.auth.session_user(session)?;
        self.db.add_crush(&user, &user_id(crush))
    }

    pub fn is_crush(&mut self, session: &str, crush: &str) -> Result<bool, JackutError> {
        let user = self.auth.session_user(session)?;
        self.db.is_crush(&user, &user_id(crush))
    }

    pub fn get_crushes(&mut self, session: &str) -> Result<String, JackutError> {
        let user = self.auth.session_user(session)?;
        self.db.crushes_of(&user)
    }

    pub fn add_enemy(&mut self, session: &str, enemy: &str) -> Result<(), JackutError> {
        let user = self.auth.session_user(session)?;
        self.db.add_enemy(&user, &user_id(enemy))
    }

    /// Deletes the account behind `session` along with every trace of it.
    pub fn remove_user(&mut self, session: &str) -> Result<(), JackutError> {
        let user = self.auth.session_user(session)?;
        self.db.remove_user(&user)?;
        self.auth.logout_user(&user);
        Ok(())
    }

    pub fn user_count(&self) -> usize {
        self.db.user_count()
    }

    pub fn session_count(&self) -> usize {
        self.auth.len()
    }
}
