//! Leading-slash normalization for endpoint and media paths.

use std::borrow::Cow;

/// Returns `path` with exactly one leading `/`.
///
/// Repeated leading slashes collapse to one so the join with a base URL never
/// produces `//`. Slashes after the first non-slash character are untouched.
pub fn with_leading_slash(path: &str) -> Cow<'_, str> {
    let rest = path.trim_start_matches('/');
    if rest.len() + 1 == path.len() {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{rest}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_missing_slash() {
        assert_eq!(with_leading_slash("users"), "/users");
        assert_eq!(with_leading_slash("a/b"), "/a/b");
    }

    #[test]
    fn keeps_single_slash_borrowed() {
        assert!(matches!(with_leading_slash("/users"), Cow::Borrowed("/users")));
    }

    #[test]
    fn collapses_repeated_slashes() {
        assert_eq!(with_leading_slash("//users"), "/users");
        assert_eq!(with_leading_slash("///a//b"), "/a//b");
    }

    #[test]
    fn empty_becomes_root() {
        assert_eq!(with_leading_slash(""), "/");
        assert_eq!(with_leading_slash("/"), "/");
    }
}
