use serde::{Deserialize, Serialize};

/// Account record. Present in the schema but not exposed by any route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl NewUser {
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
        }
    }
}
