use serde::{Deserialize, Serialize};

/// A username/password pair taken from one `<user>` element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl<U: Into<String>, P: Into<String>> From<(U, P)> for Credential {
    fn from((username, password): (U, P)) -> Self {
        Self::new(username, password)
    }
}

impl From<Credential> for (String, String) {
    fn from(value: Credential) -> Self {
        (value.username, value.password)
    }
}
