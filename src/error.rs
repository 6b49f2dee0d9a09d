use crate::{config::ConfigError, db::store::StoreError};

#[derive(thiserror::Error, Debug)]
pub enum JackutError {
    #[error("Invalid login.")]
    InvalidLogin,
    #[error("Invalid password.")]
    InvalidPassword,
    #[error("Invalid login or password.")]
    InvalidLoginOrPassword,
    #[error("An account with this login already exists.")]
    LoginAlreadyUsed,
    #[error("User not registered.")]
    UserNotRegistered,
    #[error("Attribute not filled.")]
    AttributeNotFilled,

    #[error("User already added as friend, waiting for the invitation to be accepted.")]
    FriendRequestAlreadySent,
    #[error("User already added as friend.")]
    UserAlreadyAdded,
    #[error("User cannot add themself as a friend.")]
    YourselfFriendRequest,
    #[error("User cannot be a fan of themself.")]
    YourselfFan,
    #[error("User already added as idol.")]
    UserAlreadyIdol,
    #[error("User cannot be their own crush.")]
    YourselfCrush,
    #[error("User already added as crush.")]
    CrushAlreadyAdded,
    #[error("User cannot be their own enemy.")]
    YourselfEnemy,
    #[error("User already added as enemy.")]
    EnemyAlreadyDeclared,
    #[error("Invalid operation: {name} is your enemy.")]
    EnemyFunction { name: String },

    #[error("User cannot send a message to themself.")]
    YourselfMessage,
    #[error("There are no messages.")]
    NoMessage,
    #[error("There are no community messages.")]
    NoCommunityMessage,

    #[error("A community with this name already exists.")]
    CommunityAlreadyExists,
    #[error("Community does not exist.")]
    CommunityNotExist,
    #[error("User is already a member of this community.")]
    UserAlreadyJoinedCommunity,

    #[error("Storage failure: {0}")]
    Store(#[from] StoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
