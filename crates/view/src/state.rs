use postview_types::comment::Comment;

/// Lifecycle of the comment list of the selected post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CommentsState {
    /// No post selected, nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Comment>),
    Failed,
}

impl CommentsState {
    pub fn comments(&self) -> Option<&[Comment]> {
        match self {
            CommentsState::Loaded(comments) => Some(comments),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CommentsState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, CommentsState::Failed)
    }

    /// Drops the comment with `id` from a loaded list. Returns whether one was removed.
    pub fn remove(&mut self, id: i32) -> bool {
        match self {
            CommentsState::Loaded(comments) => {
                let before = comments.len();
                comments.retain(|c| c.comment_id() != id);
                comments.len() != before
            }
            _ => false,
        }
    }

    /// A fetched list plus the comments created while the fetch was in flight.
    /// Those the server already returned are not added twice.
    pub fn loaded_with(mut comments: Vec<Comment>, created: Vec<Comment>) -> Self {
        for comment in created {
            if !comments.iter().any(|c| c.comment_id() == comment.comment_id()) {
                comments.push(comment);
            }
        }
        CommentsState::Loaded(comments)
    }

    /// Appends to a loaded list; `Idle` and `Failed` become a list holding just `comment`.
    /// A `Loading` state cannot take it, use [`CommentsState::loaded_with`] once the fetch lands.
    pub fn append(&mut self, comment: Comment) {
        match self {
            CommentsState::Loaded(comments) => comments.push(comment),
            CommentsState::Loading => {}
            _ => *self = CommentsState::Loaded(vec![comment]),
        }
    }
}

/// A failed delete or create, shown next to whatever the list currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    DeleteFailed(i32),
    CreateFailed,
}
