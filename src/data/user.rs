use std::collections::BTreeMap;

use crate::{auth::PasswordStore, error::JackutError};

use super::{CommunityID, Inbox, UserID};

/// Profile attribute holding the display name given at signup. Stored under
/// the English key `name` rather than the Portuguese `nome` Jackut uses.
pub const NAME_ATTRIBUTE: &str = "name";

pub struct User {
    pub password: PasswordStore,
    pub attributes: BTreeMap<String, String>,
    pub friends: Vec<UserID>,
    /// Logins that asked to befriend this user and are still waiting.
    pub friend_requests: Vec<UserID>,
    pub fans: Vec<UserID>,
    pub crushes: Vec<UserID>,
    pub enemies: Vec<UserID>,
    pub communities: Vec<CommunityID>,
    pub private_inbox: Inbox,
    pub community_inbox: Inbox,
}

impl User {
    pub fn new(password: PasswordStore, name: &str) -> Self {
        let mut user = Self {
            password,
            attributes: BTreeMap::new(),
            friends: vec![],
            friend_requests: vec![],
            fans: vec![],
            crushes: vec![],
            enemies: vec![],
            communities: vec![],
            private_inbox: Inbox::default(),
            community_inbox: Inbox::default(),
        };
        user.update_attribute(NAME_ATTRIBUTE, name);
        user
    }

    pub fn attribute(&self, key: &str) -> Result<&str, JackutError> {
        self.attributes.get(key)
            .map(|x| x.as_str())
            .ok_or(JackutError::AttributeNotFilled)
    }

    pub fn update_attribute(&mut self, key: &str, value: &str) {
        self.attributes.insert(key.to_string(), value.to_string());
    }

    pub fn name(&self) -> Result<&str, JackutError> {
        self.attribute(NAME_ATTRIBUTE)
    }

    pub fn is_friend(&self, user: &UserID) -> bool {
        self.friends.contains(user)
    }

    pub fn has_friend_request_from(&self, user: &UserID) -> bool {
        self.friend_requests.contains(user)
    }

    pub fn receive_friend_request(&mut self, from: &UserID) {
        if !self.has_friend_request_from(from) {
            self.friend_requests.push(from.clone());
        }
    }

    /// Records `user` as a friend and drops any request still pending from them.
    pub fn confirm_friend(&mut self, user: &UserID) {
        if !self.is_friend(user) {
            self.friends.push(user.clone());
        }
        self.friend_requests.retain(|x| x != user);
    }

    pub fn is_fan(&self, user: &UserID) -> bool {
        self.fans.contains(user)
    }

    pub fn has_crush_on(&self, user: &UserID) -> bool {
        self.crushes.contains(user)
    }

    pub fn is_enemy(&self, user: &UserID) -> bool {
        self.enemies.contains(user)
    }

    pub fn read_private_message(&mut self) -> Result<String, JackutError> {
        self.private_inbox.read()
            .map(|m| m.content)
            .ok_or(JackutError::NoMessage)
    }

    pub fn read_community_message(&mut self) -> Result<String, JackutError> {
        self.community_inbox.read()
            .map(|m| m.content)
            .ok_or(JackutError::NoCommunityMessage)
    }

    pub fn leave_community(&mut self, community: &CommunityID) {
        self.communities.retain(|x| x != community)
    }

    /// Forgets every relation and message that points at `user`.
    pub fn forget(&mut self, user: &UserID) {
        for list in [
            &mut self.friends,
            &mut self.friend_requests,
            &mut self.fans,
            &mut self.crushes,
            &mut self.enemies,
        ] {
            list.retain(|x| x != user);
        }
        self.private_inbox.remove_from(user);
        self.community_inbox.remove_from(user);
    }
}
