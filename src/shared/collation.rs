use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};

thread_local! {
    /// Root collation at secondary strength, the in-process twin of the
    /// `category_name` database collation
    static NAME_COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Secondary);
        Collator::try_new(&Default::default(), options).ok()
    };
}

/// Locale-aware name order: case is ignored, accents count
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    })
}

/// True when two names collide under `compare_names`
pub fn names_match(a: &str, b: &str) -> bool {
    compare_names(a, b) == Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_is_ignored() {
        assert!(names_match("Books", "books"));
        assert!(names_match("BOOKS", "books"));
        assert!(!names_match("Book", "books"));
    }

    #[test]
    fn test_accents_are_significant() {
        assert!(!names_match("Éclair", "eclair"));
    }

    #[test]
    fn test_accented_letters_sort_with_their_base_letter() {
        let mut names = vec!["zebra", "Éclair", "apple", "Ölkanne", "orange"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["apple", "Éclair", "Ölkanne", "orange", "zebra"]);
    }
}
