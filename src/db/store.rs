use std::{collections::{BTreeMap, HashMap}, fs::{create_dir_all, read_to_string}, io, path::Path};

use chrono::{DateTime, Utc};
use json::{JsonValue, object};

use crate::{data::{Community, CommunityID, Inbox, Message, User, UserID}, auth::PasswordStore};

pub(super) const USERS_FILE: &str = "users.json";
pub(super) const COMMUNITIES_FILE: &str = "communities.json";

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] json::Error),
    #[error("Malformed record \"{record}\" in {file}: {reason}")]
    Malformed { file: &'static str, record: String, reason: String },
}

/// Reads a store file. Missing or blank files count as an empty store.
fn read_store(dir: &Path, file: &'static str) -> Result<Option<JsonValue>, StoreError> {
    match read_to_string(dir.join(file)) {
        Ok(content) if content.trim().is_empty() => Ok(None),
        Ok(content) => Ok(Some(json::parse(&content)?)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn write_store(dir: &Path, file: &str, json: JsonValue) -> Result<(), StoreError> {
    create_dir_all(dir)?;
    std::fs::write(dir.join(file), json.pretty(2))?;
    Ok(())
}

fn malformed(file: &'static str, record: &str, reason: impl Into<String>) -> StoreError {
    StoreError::Malformed {
        file,
        record: record.to_string(),
        reason: reason.into(),
    }
}

/// The object of records under `key`. Anything else is a broken store.
fn records<'a>(json: &'a JsonValue, key: &str, file: &'static str) -> Result<&'a JsonValue, StoreError> {
    if !json.is_object() {
        return Err(malformed(file, key, "top level is not an object"));
    }
    match &json[key] {
        x if x.is_object() => Ok(x),
        _ => Err(malformed(file, key, format!("\"{key}\" is not an object"))),
    }
}

fn string_field(json: &JsonValue, key: &str, file: &'static str, record: &str) -> Result<String, StoreError> {
    json[key].as_str()
        .map(|x| x.to_string())
        .ok_or_else(|| malformed(file, record, format!("missing \"{key}\"")))
}

fn id_list<T>(json: &JsonValue, key: &str, wrap: fn(String) -> T, file: &'static str, record: &str) -> Result<Vec<T>, StoreError> {
    let JsonValue::Array(ids) = &json[key] else {
        return Err(malformed(file, record, format!("\"{key}\" is not a list")));
    };
    ids.iter()
        .map(|x| x.as_str()
            .map(|x| wrap(x.to_string()))
            .ok_or_else(|| malformed(file, record, format!("\"{key}\" holds a non-string entry"))))
        .collect()
}

fn attributes_from_json(json: &JsonValue, record: &str) -> Result<BTreeMap<String, String>, StoreError> {
    if !json.is_object() {
        return Err(malformed(USERS_FILE, record, "\"attributes\" is not an object"));
    }
    json.entries()
        .map(|(k, v)| match v.as_str() {
            Some(v) => Ok((k.to_string(), v.to_string())),
            None => Err(malformed(USERS_FILE, record, format!("attribute \"{k}\" is not a string"))),
        })
        .collect()
}

fn inbox_to_json(inbox: &Inbox) -> JsonValue {
    JsonValue::Array(inbox.iter().map(|m| object! {
        sent: m.sent.to_rfc3339(),
        sender: m.sender.0.as_str(),
        content: m.content.as_str(),
    }).collect())
}

fn inbox_from_json(json: &JsonValue, key: &str, record: &str) -> Result<Inbox, StoreError> {
    let JsonValue::Array(messages) = &json[key] else {
        return Err(malformed(USERS_FILE, record, format!("\"{key}\" is not a list")));
    };
    messages.iter().map(|m| -> Result<Message, StoreError> {
        let sent = m["sent"].as_str()
            .and_then(|x| DateTime::parse_from_rfc3339(x).ok())
            .map(|x| x.with_timezone(&Utc))
            .ok_or_else(|| malformed(USERS_FILE, record, "message without a valid \"sent\" time"))?;
        Ok(Message {
            sent,
            sender: UserID(string_field(m, "sender", USERS_FILE, record)?),
            content: string_field(m, "content", USERS_FILE, record)?,
        })
    }).collect()
}

pub(super) fn load_users(dir: &Path) -> Result<HashMap<UserID, User>, StoreError> {
    let Some(json) = read_store(dir, USERS_FILE)? else {
        return Ok(HashMap::new());
    };
    records(&json, "users", USERS_FILE)?.entries().map(|(login, json)| -> Result<(UserID, User), StoreError> {
        if !json.is_object() {
            return Err(malformed(USERS_FILE, login, "record is not an object"));
        }
        let password = PasswordStore {
            salt: string_field(&json["password"], "salt", USERS_FILE, login)?,
            hashed: string_field(&json["password"], "hashed", USERS_FILE, login)?,
        };
        let user = User {
            password,
            attributes: attributes_from_json(&json["attributes"], login)?,
            friends: id_list(json, "friends", UserID, USERS_FILE, login)?,
            friend_requests: id_list(json, "friend-requests", UserID, USERS_FILE, login)?,
            fans: id_list(json, "fans", UserID, USERS_FILE, login)?,
            crushes: id_list(json, "crushes", UserID, USERS_FILE, login)?,
            enemies: id_list(json, "enemies", UserID, USERS_FILE, login)?,
            communities: id_list(json, "communities", CommunityID, USERS_FILE, login)?,
            private_inbox: inbox_from_json(json, "private-messages", login)?,
            community_inbox: inbox_from_json(json, "community-messages", login)?,
        };
        Ok((UserID(login.to_string()), user))
    }).collect()
}

pub(super) fn load_communities(dir: &Path) -> Result<HashMap<CommunityID, Community>, StoreError> {
    let Some(json) = read_store(dir, COMMUNITIES_FILE)? else {
        return Ok(HashMap::new());
    };
    records(&json, "communities", COMMUNITIES_FILE)?.entries().map(|(name, json)| -> Result<(CommunityID, Community), StoreError> {
        if !json.is_object() {
            return Err(malformed(COMMUNITIES_FILE, name, "record is not an object"));
        }
        let community = Community {
            description: string_field(json, "description", COMMUNITIES_FILE, name)?,
            owner: UserID(string_field(json, "owner", COMMUNITIES_FILE, name)?),
            members: id_list(json, "members", UserID, COMMUNITIES_FILE, name)?,
        };
        Ok((CommunityID(name.to_string()), community))
    }).collect()
}

pub(super) fn store_users(dir: &Path, users: &HashMap<UserID, User>) -> Result<(), StoreError> {
    let mut records = JsonValue::new_object();
    for (id, user) in users {
        let mut attributes = JsonValue::new_object();
        for (key, value) in &user.attributes {
            attributes[key.as_str()] = value.as_str().into();
        }
        records[id.0.as_str()] = object! {
            password: object! {
                salt: user.password.salt.as_str(),
                hashed: user.password.hashed.as_str(),
            },
            attributes: attributes,
            friends: user.friends.iter().map(|x| x.0.as_str()).collect::<Vec<_>>(),
            "friend-requests": user.friend_requests.iter().map(|x| x.0.as_str()).collect::<Vec<_>>(),
            fans: user.fans.iter().map(|x| x.0.as_str()).collect::<Vec<_>>(),
            crushes: user.crushes.iter().map(|x| x.0.as_str()).collect::<Vec<_>>(),
            enemies: user.enemies.iter().map(|x| x.0.as_str()).collect::<Vec<_>>(),
            communities: user.communities.iter().map(|x| x.0.as_str()).collect::<Vec<_>>(),
            "private-messages": inbox_to_json(&user.private_inbox),
            "community-messages": inbox_to_json(&user.community_inbox),
        };
    }
    write_store(dir, USERS_FILE, object! { users: records })
}

pub(super) fn store_communities(dir: &Path, communities: &HashMap<CommunityID, Community>) -> Result<(), StoreError> {
    let mut records = JsonValue::new_object();
    for (id, community) in communities {
        records[id.0.as_str()] = object! {
            description: community.description.as_str(),
            owner: community.owner.0.as_str(),
            members: community.members.iter().map(|x| x.0.as_str()).collect::<Vec<_>>(),
        };
    }
    write_store(dir, COMMUNITIES_FILE, object! { communities: records })
}

/// Deletes every persisted store file under `dir`.
pub fn clear_store(dir: &Path) -> Result<(), StoreError> {
    for file in [USERS_FILE, COMMUNITIES_FILE] {
        match std::fs::remove_file(dir.join(file)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e.into()),
            _ => {}
        }
    }
    Ok(())
}
