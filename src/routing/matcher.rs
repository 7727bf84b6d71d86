//! Location normalization for route matching.
//!
//! # Responsibilities
//! - Strip query string and fragment from a raw location
//! - Collapse trailing slashes
//! - Join parent and child paths into full paths at compile time
//!
//! # Design Decisions
//! - Matching is exact and case-sensitive on the normalized path
//! - Query and fragment never participate in matching
//! - `/` stands alone (the options parent lives there)

/// Normalize a raw location into a matchable path.
pub fn normalize(location: &str) -> String {
    let path = location
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or("");
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Join a parent full path with a relative child path.
pub fn join(parent: &str, child: &str) -> String {
    if child.is_empty() {
        return parent.to_string();
    }
    if parent.ends_with('/') {
        format!("{parent}{child}")
    } else {
        format!("{parent}/{child}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_query_and_fragment() {
        assert_eq!(normalize("/illust-history?page=2"), "/illust-history");
        assert_eq!(normalize("/subscribes#top"), "/subscribes");
        assert_eq!(normalize("/?tab=general"), "/");
    }

    #[test]
    fn normalize_collapses_trailing_slashes() {
        assert_eq!(normalize("/sponsors/"), "/sponsors");
        assert_eq!(normalize("/sponsors//"), "/sponsors");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize(""), "/");
    }

    #[test]
    fn join_handles_the_root_parent() {
        assert_eq!(join("/", "ugoira-extend"), "/ugoira-extend");
        assert_eq!(join("/options", "rename-manga"), "/options/rename-manga");
        assert_eq!(join("/options", ""), "/options");
    }
}
