//! Size Lists
//!
//! An order-preserving list of size labels attached to a catalog product.

use smallvec::SmallVec;

/// An ordered list of size labels (e.g. "S", "M", "L").
///
/// Unlike a tag set, display order matters here: sizes are shown on the
/// product card in the order the catalog defines them, so duplicates are
/// dropped but nothing is sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeList {
    sizes: SmallVec<[String; 5]>,
}

impl SizeList {
    /// Create a size list, preserving order and dropping later duplicates.
    #[must_use]
    pub fn new(sizes: SmallVec<[String; 5]>) -> Self {
        let mut deduped: SmallVec<[String; 5]> = SmallVec::with_capacity(sizes.len());

        for size in sizes {
            if !deduped.contains(&size) {
                deduped.push(size);
            }
        }

        Self { sizes: deduped }
    }

    /// Create a size list from string slices.
    pub fn from_strs(sizes: &[&str]) -> Self {
        Self::new(sizes.iter().map(ToString::to_string).collect())
    }

    /// An empty size list.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            sizes: SmallVec::new(),
        }
    }

    /// Whether the list contains the given size label (exact match).
    #[must_use]
    pub fn contains(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Iterate over the size labels in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sizes.iter().map(String::as_str)
    }

    /// Number of sizes in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Join the size labels for display (e.g. "S, M, L").
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.sizes.join(separator)
    }
}

impl<'a> FromIterator<&'a str> for SizeList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(ToString::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_declaration_order() {
        let sizes = SizeList::from_strs(&["XL", "S", "M"]);

        let labels: Vec<&str> = sizes.iter().collect();

        assert_eq!(labels, vec!["XL", "S", "M"]);
    }

    #[test]
    fn drops_later_duplicates() {
        let sizes = SizeList::from_strs(&["S", "M", "S"]);

        assert_eq!(sizes.len(), 2);
        assert_eq!(sizes.join(", "), "S, M");
    }

    #[test]
    fn contains_is_exact_match() {
        let sizes = SizeList::from_strs(&["S", "M"]);

        assert!(sizes.contains("M"));
        assert!(!sizes.contains("m"));
        assert!(!sizes.contains("XL"));
    }

    #[test]
    fn empty_list_contains_nothing() {
        let sizes = SizeList::empty();

        assert!(sizes.is_empty());
        assert!(!sizes.contains("S"));
    }
}
