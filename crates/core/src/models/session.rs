//! Session identity model

use serde::{Deserialize, Serialize};

/// Account type as reported by the server (0 = normal, 1 = superuser)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum UserType {
    #[default]
    Normal = 0,
    Superuser = 1,
}

impl UserType {
    pub fn is_superuser(self) -> bool {
        self == UserType::Superuser
    }
}

impl TryFrom<u8> for UserType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(UserType::Normal),
            1 => Ok(UserType::Superuser),
            other => Err(format!("unknown user_type {other}")),
        }
    }
}

impl From<UserType> for u8 {
    fn from(value: UserType) -> Self {
        value as u8
    }
}

/// Identity of the connected user, fixed for the lifetime of a connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub user_type: UserType,
}

impl Session {
    pub fn new(user_id: i64, username: impl Into<String>, user_type: UserType) -> Self {
        Self {
            user_id,
            username: username.into(),
            user_type,
        }
    }

    /// Session built from the legacy username-only lookup.
    ///
    /// The id is unknown (0), so ownership falls back to username matching.
    pub fn from_username(username: impl Into<String>) -> Self {
        Self::new(0, username, UserType::Normal)
    }

    pub fn is_superuser(&self) -> bool {
        self.user_type.is_superuser()
    }

    /// Whether this session wrote a message with the given author fields
    pub fn is_author(&self, author_id: i64, author_username: &str) -> bool {
        if self.user_id != 0 && author_id != 0 {
            self.user_id == author_id
        } else {
            self.username == author_username
        }
    }
}
