use serde::{Deserialize, Serialize};

use crate::utils::is_email;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl Comment {
    pub fn comment_id(&self) -> i32 {
        self.id
    }

    pub fn author(&self) -> &str {
        &self.name
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Payload of `POST /comments`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub post_id: i32,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Email is not valid")]
    EmailMalformed,

    #[error("Enter some text")]
    BodyRequired,
}

impl NewComment {
    pub fn new(post_id: i32, name: &str, email: &str, body: &str) -> Self {
        NewComment {
            post_id,
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            body: body.trim().to_string(),
        }
    }

    /// Every failed check, in field order. Empty when the comment can be sent.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = vec![];
        if self.name.is_empty() {
            errors.push(ValidationError::NameRequired);
        }
        if self.email.is_empty() {
            errors.push(ValidationError::EmailRequired);
        } else if !is_email(&self.email) {
            errors.push(ValidationError::EmailMalformed);
        }
        if self.body.is_empty() {
            errors.push(ValidationError::BodyRequired);
        }
        errors
    }
}
