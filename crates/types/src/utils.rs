use std::sync::OnceLock;

use regex::Regex;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

pub fn is_email(input: &str) -> bool {
    email_re().is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tracing_test::traced_test]
    #[test]
    fn test_is_email() {
        assert!(is_email("Eliseo@gardner.biz"));
        assert!(is_email("a.b+c@mail.example.org"));
        assert!(!is_email("Eliseo"));
        assert!(!is_email("eliseo@gardner"));
        assert!(!is_email("eli seo@gardner.biz"));
        assert!(!is_email(""));
    }
}
