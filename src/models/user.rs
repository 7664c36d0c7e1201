//! Sample user directory backing the `get_user_list` tool and the
//! `data://users` resource.

use serde::Serialize;

/// A single user record. Transient value object: constructed fresh per
/// call, no identity, no mutation after construction.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserInfo {
    /// Numeric user id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role label (`admin`, `moderator`, `user`).
    pub role: String,
    /// Whether the user is active.
    pub active: bool,
}

/// A list of users with a total count, as returned by `get_user_list`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserList {
    /// Number of users in `users`.
    pub total: usize,
    /// The user records.
    pub users: Vec<UserInfo>,
}

impl UserInfo {
    fn new(id: u32, name: &str, email: &str, role: &str, active: bool) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
            active,
        }
    }
}

impl UserList {
    /// Assemble the user list from the sample directory, filtering out
    /// inactive users unless `include_inactive` is set.
    #[must_use]
    pub fn assemble(include_inactive: bool) -> Self {
        let users: Vec<UserInfo> = sample_directory()
            .into_iter()
            .filter(|user| include_inactive || user.active)
            .collect();

        Self {
            total: users.len(),
            users,
        }
    }
}

/// The fixed five-user sample directory.
#[must_use]
pub fn sample_directory() -> Vec<UserInfo> {
    vec![
        UserInfo::new(1, "Alice Smith", "alice@example.com", "admin", true),
        UserInfo::new(2, "Bob Johnson", "bob@example.com", "user", true),
        UserInfo::new(3, "Charlie Brown", "charlie@example.com", "user", true),
        UserInfo::new(4, "Diana Prince", "diana@example.com", "moderator", false),
        UserInfo::new(5, "Eve Davis", "eve@example.com", "user", false),
    ]
}
