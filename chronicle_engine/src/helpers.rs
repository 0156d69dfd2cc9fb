//! Helpers Module
//!
//! Helper / simplifier functions that don't clearly belong in another module.

/// "s" unless the count is exactly one.
pub fn plural_s(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Group repeated ids, keeping the order in which each first appears.
pub fn count_in_order(ids: &[String]) -> Vec<(&str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for id in ids {
        if let Some(entry) = counts.iter_mut().find(|(seen, _)| *seen == id.as_str()) {
            entry.1 += 1;
        } else {
            counts.push((id.as_str(), 1));
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_suffix() {
        assert_eq!(plural_s(0), "s");
        assert_eq!(plural_s(1), "");
        assert_eq!(plural_s(3), "s");
    }

    #[test]
    fn counts_keep_first_seen_order() {
        let ids: Vec<String> = ["potion", "sword", "potion"].iter().map(|s| s.to_string()).collect();
        assert_eq!(count_in_order(&ids), [("potion", 2), ("sword", 1)]);
    }
}
