use serde::{Deserialize, Serialize};

use crate::users::repo_types::User;

/// Form body for the registration page.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
}

/// Public part of the user rendered into pages.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i32,
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
        }
    }
}
