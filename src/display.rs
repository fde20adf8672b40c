//! Rendering matched documents for the terminal.

use anyhow::Context as _;
use colored::Colorize;
use serde_json::Value;
use std::io::Write;
use std::io::{self, ErrorKind};

use crate::walker::DocId;

/// Output options for rendered documents.
#[derive(Debug, Clone, Default)]
pub struct DisplayOptions {
    /// Indent nested values across multiple lines.
    pub pretty: bool,
    /// Object members with these keys are omitted, as are array elements
    /// that are objects containing one of them.
    pub skip_keys: Vec<String>,
}

impl DisplayOptions {
    fn skips(&self, key: &str) -> bool {
        self.skip_keys.iter().any(|skip| skip == key)
    }

    fn skips_element(&self, value: &Value) -> bool {
        value
            .as_object()
            .is_some_and(|map| map.keys().any(|key| self.skips(key)))
    }
}

/// Write one matched document (id header + colorized JSON) to `writer`.
/// Silently returns `Ok(())` on broken pipe so that piping to tools like
/// `less` or `head` exits cleanly.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_document<W: Write>(
    writer: &mut W,
    doc: DocId,
    value: &Value,
    options: &DisplayOptions,
) -> anyhow::Result<()> {
    let result = (|| -> io::Result<()> {
        writeln!(writer, "{}", format!("#{doc}").bold().magenta())?;
        write_colored_json(writer, value, 0, options)?;
        writeln!(writer)?;
        Ok(())
    })();

    match result {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err).context("write document to stdout"),
    }
}

/// Recursively write a JSON value with syntax highlighting.
fn write_colored_json<W: Write>(
    writer: &mut W,
    value: &Value,
    indent: usize,
    options: &DisplayOptions,
) -> io::Result<()> {
    let next_indent = indent + 2;

    match value {
        Value::Null => write!(writer, "{}", "null".red().dimmed()),
        Value::Bool(b) => {
            write!(writer, "{}", b.to_string().yellow().bold())
        }
        Value::Number(n) => write!(writer, "{}", n.to_string().yellow()),
        Value::String(s) => {
            // Re-serialize to get proper JSON escaping and quoting.
            let quoted = serde_json::to_string(s).map_err(io::Error::other)?;
            write!(writer, "{}", quoted.green())
        }
        Value::Array(arr) => {
            let items: Vec<&Value> = arr
                .iter()
                .filter(|item| !options.skips_element(item))
                .collect();
            write!(writer, "[")?;
            for (i, item) in items.iter().enumerate() {
                if options.pretty {
                    writeln!(writer)?;
                    write!(writer, "{:width$}", "", width = next_indent)?;
                }
                write_colored_json(writer, item, next_indent, options)?;
                if i + 1 < items.len() {
                    write!(writer, ",")?;
                }
            }
            if options.pretty && !items.is_empty() {
                writeln!(writer)?;
                write!(writer, "{:width$}", "", width = indent)?;
            }
            write!(writer, "]")
        }
        Value::Object(obj) => {
            let entries: Vec<_> =
                obj.iter().filter(|(key, _)| !options.skips(key)).collect();
            write!(writer, "{{")?;
            for (i, (key, val)) in entries.iter().enumerate() {
                if options.pretty {
                    writeln!(writer)?;
                    write!(writer, "{:width$}", "", width = next_indent)?;
                }
                let quoted_key =
                    serde_json::to_string(key).map_err(io::Error::other)?;
                write!(writer, "{}", quoted_key.cyan())?;
                if options.pretty {
                    write!(writer, ": ")?;
                } else {
                    write!(writer, ":")?;
                }
                write_colored_json(writer, val, next_indent, options)?;
                if i + 1 < entries.len() {
                    write!(writer, ",")?;
                }
            }
            if options.pretty && !entries.is_empty() {
                writeln!(writer)?;
                write!(writer, "{:width$}", "", width = indent)?;
            }
            write!(writer, "}}")
        }
    }
}
