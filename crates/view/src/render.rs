use askama::Template;
use postview_types::comment::{Comment, ValidationError};

use super::{details::PostDetails, error::Error, form::CommentForm, state::Notice};

const UNDEFINED: &str = "undefined";

/// Whole post-details block. Text fields are escaped by the template.
#[derive(Template)]
#[template(path = "post_details.html")]
pub struct PostDetailsTemplate<'a> {
    heading: String,
    body: &'a str,
    loading: bool,
    error: bool,
    loaded: bool,
    comments: Vec<CommentView<'a>>,
    form_visible: bool,
    fields: Vec<FieldView<'a>>,
    submitting: bool,
}

struct CommentView<'a> {
    id: i32,
    mailto: String,
    author: &'a str,
    body: &'a str,
    delete_failed: bool,
}

struct FieldView<'a> {
    cy: &'static str,
    id: &'static str,
    label: &'static str,
    name: &'static str,
    placeholder: &'static str,
    value: &'a str,
    /// Empty when the field is fine.
    error: String,
    multiline: bool,
}

impl<'a> PostDetailsTemplate<'a> {
    pub fn new(details: &'a PostDetails) -> Self {
        // An unselected post still renders its placeholders.
        let (heading, body) = match details.post() {
            Some(post) => (post.heading(), post.body.as_str()),
            None => (format!("#{}: {}", UNDEFINED, UNDEFINED), UNDEFINED),
        };
        let notice = details.notice();
        let comments = details.comments().comments();
        PostDetailsTemplate {
            heading,
            body,
            loading: details.comments().is_loading(),
            error: details.has_error(),
            loaded: comments.is_some(),
            comments: comments
                .unwrap_or_default()
                .iter()
                .map(|c| CommentView::new(c, notice))
                .collect(),
            form_visible: details.is_form_visible(),
            fields: details.form().map(FieldView::for_form).unwrap_or_default(),
            submitting: details.form().is_some_and(CommentForm::is_submitting),
        }
    }
}

impl<'a> CommentView<'a> {
    fn new(comment: &'a Comment, notice: Option<Notice>) -> Self {
        CommentView {
            id: comment.comment_id(),
            mailto: comment.mailto(),
            author: comment.author(),
            body: &comment.body,
            delete_failed: notice == Some(Notice::DeleteFailed(comment.comment_id())),
        }
    }
}

impl<'a> FieldView<'a> {
    fn for_form(form: &'a CommentForm) -> Vec<Self> {
        vec![
            FieldView {
                cy: "NameField",
                id: "comment-author-name",
                label: "Author Name",
                name: "name",
                placeholder: "Name Surname",
                value: &form.name,
                error: field_error(form, &[ValidationError::NameRequired]),
                multiline: false,
            },
            FieldView {
                cy: "EmailField",
                id: "comment-author-email",
                label: "Author Email",
                name: "email",
                placeholder: "email@test.com",
                value: &form.email,
                error: field_error(
                    form,
                    &[ValidationError::EmailRequired, ValidationError::EmailMalformed],
                ),
                multiline: false,
            },
            FieldView {
                cy: "BodyField",
                id: "comment-body",
                label: "Comment Text",
                name: "body",
                placeholder: "Type comment here",
                value: &form.body,
                error: field_error(form, &[ValidationError::BodyRequired]),
                multiline: true,
            },
        ]
    }
}

fn field_error(form: &CommentForm, kinds: &[ValidationError]) -> String {
    form.errors()
        .iter()
        .find(|e| kinds.contains(e))
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// Markup of the whole post-details block for the current state.
pub fn render(details: &PostDetails) -> Result<String, Error> {
    Ok(PostDetailsTemplate::new(details).render()?)
}
