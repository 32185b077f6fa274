use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domains::users::models::{Role, User};

/// Public API representation of a user (no password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}
