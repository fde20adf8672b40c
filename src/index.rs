/*!
# Index Store

The token → document mapping. Each entry is a postings list of document ids
in insertion order; a document appears once per occurrence of the token, so
repeated words produce repeated postings.

The store is append-only: inserting never removes or rewrites an existing
posting, and lookups never fail. Tokens are kept sorted so that iteration
is deterministic and prefix scans are a range query.
*/
use std::collections::BTreeMap;
use std::ops::Bound;

use crate::tokenizer::normalize;
use crate::walker::DocId;

/// Maps normalized tokens to the ids of the documents containing them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InvertedIndex {
    postings: BTreeMap<String, Vec<DocId>>,
    /// Total postings across all tokens.
    posting_count: usize,
}

impl InvertedIndex {
    /// Construct an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `doc` to the postings of `token`, creating the entry if absent.
    pub fn insert(&mut self, token: &str, doc: DocId) {
        let token = normalize(token);
        self.postings.entry(token).or_default().push(doc);
        self.posting_count += 1;
    }

    /// Postings for `token`, or an empty slice if it was never indexed.
    ///
    /// ```
    /// use jsonindex::index::InvertedIndex;
    ///
    /// let mut index = InvertedIndex::new();
    /// index.insert("plan", 0);
    /// assert_eq!(index.lookup("PLAN"), &[0]);
    /// assert!(index.lookup("missing").is_empty());
    /// ```
    #[must_use]
    pub fn lookup(&self, token: &str) -> &[DocId] {
        self.postings
            .get(normalize(token).as_str())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `token` has at least one posting.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        !self.lookup(token).is_empty()
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of postings across all tokens.
    #[must_use]
    pub const fn posting_count(&self) -> usize {
        self.posting_count
    }

    /// Whether nothing has been indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// All indexed tokens in lexicographic order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Indexed tokens starting with `prefix`, in lexicographic order.
    pub fn completions(&self, prefix: &str) -> impl Iterator<Item = &str> {
        let prefix = normalize(prefix);
        self.postings
            .range::<str, _>((
                Bound::Included(prefix.as_str()),
                Bound::Unbounded,
            ))
            .map(|(token, _)| token.as_str())
            .take_while(move |token| token.starts_with(&prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InvertedIndex {
        let mut index = InvertedIndex::new();
        for (token, doc) in [
            ("plan", 0),
            ("family", 0),
            ("plan", 1),
            ("planet", 2),
            ("plan", 1),
        ] {
            index.insert(token, doc);
        }
        index
    }

    #[test]
    fn empty_index_misses_everything() {
        let index = InvertedIndex::new();
        assert!(index.is_empty());
        assert!(index.lookup("anything").is_empty());
        assert!(index.lookup("").is_empty());
        assert_eq!(index.completions("a").count(), 0);
    }

    #[test]
    fn postings_keep_insertion_order_and_repeats() {
        let index = sample();
        assert_eq!(index.lookup("plan"), &[0, 1, 1]);
        assert_eq!(index.lookup("family"), &[0]);
        assert_eq!(index.term_count(), 3);
        assert_eq!(index.posting_count(), 5);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut index = sample();
        index.insert("Gold", 4);
        assert_eq!(index.lookup("Plan"), index.lookup("plan"));
        assert_eq!(index.lookup("GOLD"), &[4]);
        assert!(index.contains("gold"));
    }

    #[test]
    fn terms_are_sorted() {
        let index = sample();
        assert_eq!(
            index.terms().collect::<Vec<_>>(),
            vec!["family", "plan", "planet"]
        );
    }

    #[test]
    fn completions_scan_only_the_prefix_range() {
        let index = sample();
        assert_eq!(
            index.completions("PLA").collect::<Vec<_>>(),
            vec!["plan", "planet"]
        );
        assert_eq!(
            index.completions("planet").collect::<Vec<_>>(),
            vec!["planet"]
        );
        assert_eq!(index.completions("z").count(), 0);
    }
}
