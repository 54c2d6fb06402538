use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn post_id(&self) -> i32 {
        self.id
    }

    /// Heading shown above the post body, e.g. `#7: Some title`.
    pub fn heading(&self) -> String {
        format!("#{}: {}", self.id, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_post() {
        let json = r#"{"id":7,"userId":2,"title":"qui est esse","body":"est rerum tempore"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.post_id(), 7);
        assert_eq!(post.user_id, 2);
        assert_eq!(post.heading(), "#7: qui est esse");
    }
}
