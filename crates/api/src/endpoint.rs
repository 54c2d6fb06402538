use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Endpoint {
    /// All comments attached to a post.
    Comments(i32),
    /// A single comment by id.
    Comment(i32),
    /// The comment collection, target of creates.
    NewComment,
}

impl Endpoint {
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self)
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Comments(post_id) => write!(f, "/comments?postId={}", post_id),
            Endpoint::Comment(id) => write!(f, "/comments/{}", id),
            Endpoint::NewComment => write!(f, "/comments"),
        }
    }
}
