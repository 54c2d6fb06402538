use postview_types::comment::{NewComment, ValidationError};

/// Draft of a new comment plus the errors of its last submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentForm {
    pub name: String,
    pub email: String,
    pub body: String,
    errors: Vec<ValidationError>,
    submitting: bool,
}

impl CommentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
        self.errors.retain(|e| *e != ValidationError::NameRequired);
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
        self.errors
            .retain(|e| !matches!(e, ValidationError::EmailRequired | ValidationError::EmailMalformed));
    }

    pub fn set_body(&mut self, body: &str) {
        self.body = body.to_string();
        self.errors.retain(|e| *e != ValidationError::BodyRequired);
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub(crate) fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    /// Builds the payload for `post_id`, or records why it cannot be sent.
    pub(crate) fn prepare(&mut self, post_id: i32) -> Option<NewComment> {
        let new_comment = NewComment::new(post_id, &self.name, &self.email, &self.body);
        self.errors = new_comment.validate();
        if self.errors.is_empty() {
            Some(new_comment)
        } else {
            None
        }
    }

    /// Keeps the author for the next comment.
    pub(crate) fn reset_body(&mut self) {
        self.body.clear();
        self.errors.clear();
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.body.clear();
        self.errors.clear();
    }
}
