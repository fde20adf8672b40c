/*!
# `jsonindex` Library

Word-level inverted index over a collection of JSON documents supplied as a
single top-level array. Every string value reachable from a document, at any
depth, is lowercased and split into word tokens; searching for a token
returns the documents that contain it.

```
use jsonindex::JsonIndex;
use serde_json::json;

let root = json!([
    { "name": "Family Plan", "tags": ["Basic"] },
    { "name": "Solo Plan", "notes": { "desc": "Basic coverage" } }
]);
let index = JsonIndex::from_root(&root)?;

assert_eq!(index.search_ids("plan"), vec![0, 1]);
assert_eq!(index.search_ids("family"), vec![0]);
assert!(index.search("nonexistent").is_empty());
# Ok::<(), jsonindex::IndexError>(())
```
*/

pub mod builder;
pub mod commands;
pub mod display;
pub mod error;
pub mod index;
pub mod loader;
pub mod search;
pub mod tokenizer;
pub mod walker;

// Re-exports
pub use builder::{IndexBuilder, build_index};
pub use error::{IndexError, Result};
pub use index::InvertedIndex;
pub use search::JsonIndex;
pub use tokenizer::{Tokenizer, WordChars, tokenize};
pub use walker::DocId;
