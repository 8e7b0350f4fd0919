//! Tag delimiter and tag-string building.

/// Character separating tags in a stored tag string.
///
/// Owned by the storage layer; a single tag may never contain it.
pub const DELIM: char = ',';

/// Join tags into one delimiter-separated string, keeping input order.
///
/// Surrounding whitespace is trimmed and blank entries are dropped.
pub fn join_tags<I, S>(tags: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|tag| {
            let tag = tag.as_ref().trim();
            (!tag.is_empty()).then(|| tag.to_string())
        })
        .collect::<Vec<_>>()
        .join(&DELIM.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_preserves_order() {
        assert_eq!(join_tags(["b", "a"]), "b,a");
        assert_eq!(join_tags(vec!["a".to_string(), "b".to_string()]), "a,b");
    }

    #[test]
    fn test_join_trims_and_drops_blank() {
        assert_eq!(join_tags([" rust ", "", "  ", "web"]), "rust,web");
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(join_tags(Vec::<String>::new()), "");
    }
}
