use tracing::debug;

use super::DB;

use crate::{data::{Community, CommunityID, UserID}, error::JackutError, format::format_list};

impl DB {
    pub fn create_community(&mut self, owner: &UserID, id: &CommunityID, description: &str) -> Result<(), JackutError> {
        self.user(owner)?;
        if self.communities.contains_key(id) {
            return Err(JackutError::CommunityAlreadyExists);
        }
        self.communities.insert(id.clone(), Community::new(owner, description));
        self.user_mut(owner)?.communities.push(id.clone());
        debug!(owner = %owner.0, community = %id.0, "community created");
        Ok(())
    }

    pub fn join_community(&mut self, user: &UserID, id: &CommunityID) -> Result<(), JackutError> {
        let community = self.community(id)?;
        self.user(user)?;
        if community.is_member(user) {
            return Err(JackutError::UserAlreadyJoinedCommunity);
        }
        if let Some(community) = self.communities.get_mut(id) {
            community.add_member(user);
        }
        self.user_mut(user)?.communities.push(id.clone());
        debug!(user = %user.0, community = %id.0, "community joined");
        Ok(())
    }

    pub fn community_members(&self, id: &CommunityID) -> Result<String, JackutError> {
        Ok(format_list(self.community(id)?.members.iter().map(|x| x.0.as_str())))
    }

    pub fn communities_of(&self, user: &UserID) -> Result<String, JackutError> {
        Ok(format_list(self.user(user)?.communities.iter().map(|x| x.0.as_str())))
    }
}
