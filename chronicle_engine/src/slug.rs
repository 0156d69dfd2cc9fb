/// Slug used when a name has no usable characters.
const FALLBACK_SLUG: &str = "adventurer";

/// Normalize a character name into a filesystem-safe slug.
///
/// Letters and digits are lowercased, runs of whitespace or punctuation become a
/// single dash, and leading or trailing separators are dropped.
pub fn sanitize_slug(raw: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    for ch in raw.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else if ch == '-' || ch == '_' {
            if !slug.is_empty() {
                slug.push(ch);
            }
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    let trimmed = slug.trim_matches(&['-', '_'][..]);
    if trimmed.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_become_lowercase_dashed_slugs() {
        assert_eq!(sanitize_slug("Sir Lancelot"), "sir-lancelot");
        assert_eq!(sanitize_slug("  Zed!! the   Bold "), "zed-the-bold");
        assert_eq!(sanitize_slug("ember_mage"), "ember_mage");
    }

    #[test]
    fn unusable_names_fall_back() {
        assert_eq!(sanitize_slug(""), FALLBACK_SLUG);
        assert_eq!(sanitize_slug("???"), FALLBACK_SLUG);
        assert_eq!(sanitize_slug("--"), FALLBACK_SLUG);
    }
}
