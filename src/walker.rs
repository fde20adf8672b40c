/*!
# JSON Tree Walker

Recursive descent over a decoded JSON document that reports every string
leaf together with the id of the top-level document that owns it.

Object members are visited regardless of key and array elements in order;
numbers, booleans, and `null` contribute nothing. Recursion depth follows
the nesting depth of the value. Values decoded by [`crate::loader`] are at
most 128 levels deep, since `serde_json` rejects deeper input; values built
in code carry no such bound.
*/
use serde_json::Value;

/// Zero-based position of a document within the top-level array.
pub type DocId = usize;

/// Receives the string leaves found while walking a document.
pub trait LeafVisitor<'a> {
    /// Called once per string leaf reachable from document `doc`.
    fn visit_str(&mut self, doc: DocId, text: &'a str);
}

impl<'a, F> LeafVisitor<'a> for F
where
    F: FnMut(DocId, &'a str),
{
    fn visit_str(&mut self, doc: DocId, text: &'a str) {
        self(doc, text);
    }
}

/// Walks `value`, handing every string leaf to `visitor` tagged with `doc`.
pub fn walk<'a, V>(value: &'a Value, doc: DocId, visitor: &mut V)
where
    V: LeafVisitor<'a> + ?Sized,
{
    match value {
        Value::String(text) => visitor.visit_str(doc, text),
        Value::Object(map) => {
            for child in map.values() {
                walk(child, doc, visitor);
            }
        }
        Value::Array(items) => {
            for child in items {
                walk(child, doc, visitor);
            }
        }
        Value::Number(_) | Value::Bool(_) | Value::Null => {}
    }
}

/// Collects the string leaves of `value` in traversal order.
#[must_use]
pub fn string_leaves<'a>(value: &'a Value) -> Vec<&'a str> {
    let mut leaves = Vec::new();
    walk(value, 0, &mut |_: DocId, text: &'a str| leaves.push(text));
    leaves
}
