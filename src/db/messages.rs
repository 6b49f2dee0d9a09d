use tracing::debug;

use super::DB;

use crate::{data::{CommunityID, Message, UserID}, error::JackutError};

impl DB {
    pub fn send_private_message(&mut self, sender: &UserID, receiver: &UserID, content: &str) -> Result<(), JackutError> {
        self.user(sender)?;
        self.user(receiver)?;
        if sender == receiver {
            return Err(JackutError::YourselfMessage);
        }
        self.ensure_not_enemy(sender, receiver)?;
        self.user_mut(receiver)?.private_inbox.receive(Message::new(sender, content));
        debug!(sender = %sender.0, receiver = %receiver.0, "private message delivered");
        Ok(())
    }

    pub fn read_private_message(&mut self, user: &UserID) -> Result<String, JackutError> {
        self.user_mut(user)?.read_private_message()
    }

    /// Delivers to every member, the sender included.
    pub fn send_community_message(&mut self, sender: &UserID, community: &CommunityID, content: &str) -> Result<(), JackutError> {
        self.user(sender)?;
        let members = self.community(community)?.members.clone();
        let message = Message::new(sender, content);
        for member in &members {
            if let Some(user) = self.users.get_mut(member) {
                user.community_inbox.receive(message.clone());
            }
        }
        debug!(sender = %sender.0, community = %community.0, recipients = members.len(), "community message delivered");
        Ok(())
    }

    pub fn read_community_message(&mut self, user: &UserID) -> Result<String, JackutError> {
        self.user_mut(user)?.read_community_message()
    }
}
