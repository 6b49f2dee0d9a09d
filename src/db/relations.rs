use tracing::debug;

use super::DB;

use crate::{data::{Message, UserID}, error::JackutError, format::format_list};

impl DB {
    /// Fails when `target` has declared `user` an enemy.
    pub(super) fn ensure_not_enemy(&self, user: &UserID, target: &UserID) -> Result<(), JackutError> {
        let target = self.user(target)?;
        if target.is_enemy(user) {
            Err(JackutError::EnemyFunction { name: target.name()?.to_string() })
        } else {
            Ok(())
        }
    }

    /// Sends a friend request, or confirms the friendship when `receiver` already asked.
    pub fn add_friend(&mut self, sender: &UserID, receiver: &UserID) -> Result<(), JackutError> {
        let sender_user = self.user(sender)?;
        let receiver_user = self.user(receiver)?;
        if sender == receiver {
            return Err(JackutError::YourselfFriendRequest);
        }
        if sender_user.is_friend(receiver) {
            return Err(JackutError::UserAlreadyAdded);
        }
        if receiver_user.has_friend_request_from(sender) {
            return Err(JackutError::FriendRequestAlreadySent);
        }
        self.ensure_not_enemy(sender, receiver)?;
        if self.user(sender)?.has_friend_request_from(receiver) {
            self.user_mut(sender)?.confirm_friend(receiver);
            self.user_mut(receiver)?.confirm_friend(sender);
            debug!(sender = %sender.0, receiver = %receiver.0, "friendship confirmed");
        } else {
            self.user_mut(receiver)?.receive_friend_request(sender);
            debug!(sender = %sender.0, receiver = %receiver.0, "friend request sent");
        }
        Ok(())
    }

    pub fn is_friend(&self, user: &UserID, friend: &UserID) -> Result<bool, JackutError> {
        self.user(friend)?;
        Ok(self.user(user)?.is_friend(friend))
    }

    pub fn friends_of(&self, user: &UserID) -> Result<String, JackutError> {
        Ok(format_list(self.user(user)?.friends.iter().map(|x| x.0.as_str())))
    }

    pub fn add_idol(&mut self, fan: &UserID, idol: &UserID) -> Result<(), JackutError> {
        let idol_user = self.user(idol)?;
        self.user(fan)?;
        if fan == idol {
            return Err(JackutError::YourselfFan);
        }
        if idol_user.is_fan(fan) {
            return Err(JackutError::UserAlreadyIdol);
        }
        self.ensure_not_enemy(fan, idol)?;
        self.user_mut(idol)?.fans.push(fan.clone());
        debug!(fan = %fan.0, idol = %idol.0, "idol added");
        Ok(())
    }

    pub fn is_fan(&self, fan: &UserID, idol: &UserID) -> Result<bool, JackutError> {
        self.user(fan)?;
        Ok(self.user(idol)?.is_fan(fan))
    }

    pub fn fans_of(&self, idol: &UserID) -> Result<String, JackutError> {
        Ok(format_list(self.user(idol)?.fans.iter().map(|x| x.0.as_str())))
    }

    /// Adds a crush. Once the feeling is mutual both sides get a note from the other.
    pub fn add_crush(&mut self, user: &UserID, crush: &UserID) -> Result<(), JackutError> {
        let user_entry = self.user(user)?;
        self.user(crush)?;
        if user == crush {
            return Err(JackutError::YourselfCrush);
        }
        if user_entry.has_crush_on(crush) {
            return Err(JackutError::CrushAlreadyAdded);
        }
        self.ensure_not_enemy(user, crush)?;
        self.user_mut(user)?.crushes.push(crush.clone());
        debug!(user = %user.0, crush = %crush.0, "crush added");

        if self.user(crush)?.has_crush_on(user) {
            let user_name = self.user(user)?.name()?.to_string();
            let crush_name = self.user(crush)?.name()?.to_string();
            self.user_mut(user)?.private_inbox
                .receive(Message::new(crush, &crush_note(&crush_name)));
            self.user_mut(crush)?.private_inbox
                .receive(Message::new(user, &crush_note(&user_name)));
            debug!(user = %user.0, crush = %crush.0, "crush is mutual");
        }
        Ok(())
    }

    pub fn is_crush(&self, user: &UserID, crush: &UserID) -> Result<bool, JackutError> {
        self.user(crush)?;
        Ok(self.user(user)?.has_crush_on(crush))
    }

    pub fn crushes_of(&self, user: &UserID) -> Result<String, JackutError> {
        Ok(format_list(self.user(user)?.crushes.iter().map(|x| x.0.as_str())))
    }

    pub fn add_enemy(&mut self, user: &UserID, enemy: &UserID) -> Result<(), JackutError> {
        let user_entry = self.user(user)?;
        self.user(enemy)?;
        if user == enemy {
            return Err(JackutError::YourselfEnemy);
        }
        if user_entry.is_enemy(enemy) {
            return Err(JackutError::EnemyAlreadyDeclared);
        }
        self.user_mut(user)?.enemies.push(enemy.clone());
        debug!(user = %user.0, enemy = %enemy.0, "enemy declared");
        Ok(())
    }
}

fn crush_note(name: &str) -> String {
    format!("{name} is your crush - Jackut note.")
}
