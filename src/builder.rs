/*!
# Index Builder

Drives the [walker](crate::walker) and [tokenizer](crate::tokenizer) over a
document array and fills an [`InvertedIndex`].

Building is all-or-nothing: the shape of the whole collection is checked
before the first token is inserted, so a malformed element anywhere yields
an error and no index at all.
*/
use log::{debug, trace};
use serde_json::Value;

use crate::error::{IndexError, Result, kind_of};
use crate::index::InvertedIndex;
use crate::tokenizer::Tokenizer;
use crate::walker::{DocId, LeafVisitor, walk};

/// Builds an index with a configurable tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexBuilder {
    tokenizer: Tokenizer,
}

impl IndexBuilder {
    /// Construct a builder that tokenizes string leaves with `tokenizer`.
    #[must_use]
    pub const fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// The tokenizer used for string leaves.
    #[must_use]
    pub const fn tokenizer(&self) -> Tokenizer {
        self.tokenizer
    }

    /// Index every document in `documents`, identifying each by its position.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::NotAnObject`] if any element is not an object.
    pub fn build(&self, documents: &[Value]) -> Result<InvertedIndex> {
        validate_documents(documents)?;

        let mut sink = TokenSink {
            tokenizer: self.tokenizer,
            index: InvertedIndex::new(),
        };
        for (doc, document) in documents.iter().enumerate() {
            trace!("indexing document {doc}");
            walk(document, doc, &mut sink);
        }

        let index = sink.index;
        debug!(
            "indexed {} documents: {} terms, {} postings",
            documents.len(),
            index.term_count(),
            index.posting_count()
        );
        Ok(index)
    }

    /// Index the elements of a decoded root value, which must be an array.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::NotAnArray`] if `root` is not an array, or
    /// [`IndexError::NotAnObject`] if any element is not an object.
    pub fn build_from_root(&self, root: &Value) -> Result<InvertedIndex> {
        self.build(documents(root)?)
    }
}

/// Index `documents` with the default tokenizer.
///
/// ```
/// use serde_json::json;
///
/// let docs = json!([{ "name": "Family Plan" }, { "name": "Solo Plan" }]);
/// let index = jsonindex::build_index(docs.as_array().unwrap()).unwrap();
/// assert_eq!(index.lookup("plan"), &[0, 1]);
/// ```
///
/// # Errors
///
/// Returns [`IndexError::NotAnObject`] if any element is not an object.
pub fn build_index(documents: &[Value]) -> Result<InvertedIndex> {
    IndexBuilder::default().build(documents)
}

/// Borrow the document array of `root` after checking its shape.
///
/// # Errors
///
/// Returns [`IndexError::NotAnArray`] if `root` is not an array, or
/// [`IndexError::NotAnObject`] if any element is not an object.
pub fn documents(root: &Value) -> Result<&[Value]> {
    let documents = root
        .as_array()
        .ok_or(IndexError::NotAnArray { found: kind_of(root) })?;
    validate_documents(documents)?;
    Ok(documents)
}

fn validate_documents(documents: &[Value]) -> Result<()> {
    match documents.iter().position(|doc| !doc.is_object()) {
        Some(position) => Err(IndexError::NotAnObject {
            position,
            found: kind_of(&documents[position]),
        }),
        None => Ok(()),
    }
}

/// Tokenizes string leaves straight into the index.
struct TokenSink {
    tokenizer: Tokenizer,
    index: InvertedIndex,
}

impl LeafVisitor<'_> for TokenSink {
    fn visit_str(&mut self, doc: DocId, text: &str) {
        for token in self.tokenizer.tokenize(text) {
            self.index.insert(&token, doc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::WordChars;
    use serde_json::json;

    fn plans() -> Value {
        json!([
            { "name": "Family Plan", "tags": ["Basic"] },
            { "name": "Solo Plan", "notes": { "desc": "Basic coverage" } }
        ])
    }

    #[test]
    fn two_plan_scenario() {
        let index = IndexBuilder::default().build_from_root(&plans()).unwrap();

        assert_eq!(index.lookup("plan"), &[0, 1]);
        assert_eq!(index.lookup("basic"), &[0, 1]);
        assert_eq!(index.lookup("family"), &[0]);
        assert_eq!(index.lookup("coverage"), &[1]);
        assert!(index.lookup("nonexistent").is_empty());
    }

    #[test]
    fn empty_collection_builds_empty_index() {
        let index = build_index(&[]).unwrap();
        assert!(index.is_empty());
        assert!(index.lookup("plan").is_empty());
    }

    #[test]
    fn documents_without_strings_contribute_nothing() {
        let docs = json!([
            { "price": 12, "active": true, "extra": null },
            { "name": "x" }
        ]);
        let index = build_index(docs.as_array().unwrap()).unwrap();
        assert_eq!(index.term_count(), 1);
        assert_eq!(index.lookup("x"), &[1]);
    }

    #[test]
    fn deeply_nested_string_is_attributed_to_its_document() {
        let docs = json!([
            { "other": "nothing here" },
            { "a": [{ "b": { "c": ["needle"] } }] }
        ]);
        let index = build_index(docs.as_array().unwrap()).unwrap();
        assert_eq!(index.lookup("needle"), &[1]);
    }

    #[test]
    fn repeated_words_repeat_postings() {
        let docs = json!([{ "a": "plan plan", "b": ["Plan"] }]);
        let index = build_index(docs.as_array().unwrap()).unwrap();
        assert_eq!(index.lookup("plan"), &[0, 0, 0]);
    }

    #[test]
    fn root_must_be_an_array() {
        let err = documents(&json!({ "name": "Plan" })).unwrap_err();
        assert!(matches!(err, IndexError::NotAnArray { found: "object" }));
    }

    #[test]
    fn malformed_element_fails_the_whole_build() {
        let docs = json!([{ "name": "ok" }, "stray", { "name": "also ok" }]);
        let err = build_index(docs.as_array().unwrap()).unwrap_err();
        assert!(matches!(
            err,
            IndexError::NotAnObject {
                position: 1,
                found: "string"
            }
        ));
    }

    #[test]
    fn unicode_builder_keeps_accented_tokens() {
        let docs = json!([{ "name": "Crème brûlée" }]);
        let builder = IndexBuilder::new(Tokenizer::new(WordChars::Unicode));
        let index = builder.build(docs.as_array().unwrap()).unwrap();
        assert_eq!(index.lookup("CRÈME"), &[0]);
        assert_eq!(index.lookup("brûlée"), &[0]);
    }
}
