/*!
# Query Service

[`JsonIndex`] pairs an [`InvertedIndex`] with the documents it was built
from and answers exact-token searches with whole documents.

The documents are borrowed, not copied, so they must outlive the index. The
index is immutable once built and can be shared freely between readers.
*/
use serde_json::Value;

use crate::builder::{IndexBuilder, documents};
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::tokenizer::normalize;
use crate::walker::DocId;

/// A searchable view over a borrowed collection of JSON documents.
#[derive(Debug, Clone)]
pub struct JsonIndex<'a> {
    documents: &'a [Value],
    index: InvertedIndex,
}

impl<'a> JsonIndex<'a> {
    /// Index `documents` with the default tokenizer.
    ///
    /// # Errors
    ///
    /// Fails if any element of `documents` is not an object.
    pub fn build(documents: &'a [Value]) -> Result<Self> {
        Self::build_with(IndexBuilder::default(), documents)
    }

    /// Index `documents` with the given builder.
    ///
    /// # Errors
    ///
    /// Fails if any element of `documents` is not an object.
    pub fn build_with(
        builder: IndexBuilder,
        documents: &'a [Value],
    ) -> Result<Self> {
        let index = builder.build(documents)?;
        Ok(Self { documents, index })
    }

    /// Index the elements of a decoded root value.
    ///
    /// ```
    /// use jsonindex::JsonIndex;
    /// use serde_json::json;
    ///
    /// let root = json!([
    ///     { "name": "Family Plan", "tags": ["Basic"] },
    ///     { "name": "Solo Plan", "notes": { "desc": "Basic coverage" } }
    /// ]);
    /// let index = JsonIndex::from_root(&root).unwrap();
    /// assert_eq!(index.search_ids("Basic"), vec![0, 1]);
    /// assert_eq!(index.search("family"), vec![&root[0]]);
    /// ```
    ///
    /// # Errors
    ///
    /// Fails if `root` is not an array of objects.
    pub fn from_root(root: &'a Value) -> Result<Self> {
        Self::from_root_with(IndexBuilder::default(), root)
    }

    /// Index the elements of a decoded root value with the given builder.
    ///
    /// # Errors
    ///
    /// Fails if `root` is not an array of objects.
    pub fn from_root_with(
        builder: IndexBuilder,
        root: &'a Value,
    ) -> Result<Self> {
        Self::build_with(builder, documents(root)?)
    }

    /// Documents containing `term`, each once, in document order.
    ///
    /// The term is lowercased and looked up as a single token; it is not
    /// split, so a multi-word term only matches if indexed verbatim.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&'a Value> {
        let documents = self.documents;
        self.search_ids(term)
            .into_iter()
            .map(|doc| &documents[doc])
            .collect()
    }

    /// Ids of the documents containing `term`, each once, ascending.
    #[must_use]
    pub fn search_ids(&self, term: &str) -> Vec<DocId> {
        let mut ids = self.index.lookup(&normalize(term)).to_vec();
        // postings arrive in build order, so repeats are adjacent
        ids.dedup();
        ids
    }

    /// The smallest indexed token that extends `prefix`, if any.
    #[must_use]
    pub fn suggest(&self, prefix: &str) -> Option<&str> {
        let prefix = normalize(prefix);
        self.index
            .completions(&prefix)
            .find(|token| *token != prefix)
    }

    /// The document with the given id.
    #[must_use]
    pub fn document(&self, doc: DocId) -> Option<&'a Value> {
        self.documents.get(doc)
    }

    /// All indexed documents.
    #[must_use]
    pub const fn documents(&self) -> &'a [Value] {
        self.documents
    }

    /// The underlying token store.
    #[must_use]
    pub const fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Number of indexed documents.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
