use serde::{Deserialize, Serialize};

/// The requesting party. `public` marks public-link access, which maps to the
/// synthetic public channel role instead of a stored membership.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i64,
    #[serde(default)]
    pub service_admin: bool,
    #[serde(default)]
    pub public: bool,
}

impl Principal {
    pub fn user(user_id: i64) -> Self {
        Self { user_id, ..Default::default() }
    }

    pub fn service_admin(user_id: i64) -> Self {
        Self { user_id, service_admin: true, ..Default::default() }
    }

    pub fn public(user_id: i64) -> Self {
        Self { user_id, public: true, ..Default::default() }
    }
}
