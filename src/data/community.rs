use super::UserID;

pub struct Community {
    pub description: String,
    pub owner: UserID,
    pub members: Vec<UserID>,
}

impl Community {
    pub fn new(owner: &UserID, description: &str) -> Self {
        Self {
            description: description.to_string(),
            owner: owner.clone(),
            members: vec![owner.clone()],
        }
    }

    pub fn is_member(&self, user: &UserID) -> bool {
        self.members.contains(user)
    }

    pub fn add_member(&mut self, user: &UserID) {
        if !self.is_member(user) {
            self.members.push(user.clone());
        }
    }

    pub fn remove_member(&mut self, user: &UserID) {
        self.members.retain(|m| m != user)
    }
}
