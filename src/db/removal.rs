use tracing::info;

use super::DB;

use crate::{data::UserID, error::JackutError};

impl DB {
    /// Removes an account. Owned communities are dissolved, memberships dropped,
    /// and every message or relation pointing at the user is forgotten.
    pub fn remove_user(&mut self, id: &UserID) -> Result<(), JackutError> {
        let communities = self.user(id)?.communities.clone();
        for community_id in &communities {
            let Some(community) = self.communities.get_mut(community_id) else {
                continue;
            };
            if &community.owner == id {
                let Some(community) = self.communities.remove(community_id) else {
                    continue;
                };
                for member in community.members.iter().filter(|m| *m != id) {
                    if let Some(user) = self.users.get_mut(member) {
                        user.leave_community(community_id);
                    }
                }
            } else {
                community.remove_member(id);
            }
        }
        self.users.remove(id);
        for user in self.users.values_mut() {
            user.forget(id);
        }
        info!(login = %id.0, communities = communities.len(), "user removed");
        Ok(())
    }
}
