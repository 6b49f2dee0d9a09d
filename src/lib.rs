//! A small social network kept in memory and saved to flat JSON files:
//! accounts, sessions, profiles, friends, fans, crushes, enemies,
//! communities and message inboxes, all reached through [`Facade`].

pub mod auth;
pub mod config;
pub mod data;
pub mod db;
pub mod error;
pub mod facade;
pub mod format;

pub use config::{Config, ConfigError};
pub use error::JackutError;
pub use facade::Facade;
