//! Tree rendering of arbitrary documents
//!
//! Every node becomes one indented label line:
//!
//! ```text
//! key=                   nested object, children one level deeper
//! key (array):           array header, elements one level deeper
//!     element - string
//! key: value - integer   scalar leaf with its type label
//! ```

use serde_json::{Map, Value, map};

use crate::document::{ValueKind, value_text};

/// Indentation unit used when none is configured.
pub const DEFAULT_INDENT: &str = "    ";

/// Lazy iterator over the rendered lines of a document.
///
/// Depth is carried by an explicit stack of object iterators, one frame per
/// nesting level, so the prefix for any line is `indent * depth`.
pub struct TreeLines<'a> {
    indent: String,
    stack: Vec<map::Iter<'a>>,
    elements: Option<(std::slice::Iter<'a, Value>, usize)>,
}

impl<'a> TreeLines<'a> {
    pub fn new(root: &'a Map<String, Value>, indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
            stack: vec![root.iter()],
            elements: None,
        }
    }

    fn prefix(&self, depth: usize) -> String {
        self.indent.repeat(depth)
    }

    fn element_line(&self, depth: usize, element: &Value) -> String {
        format!(
            "{}{} - {}",
            self.prefix(depth + 1),
            value_text(element),
            ValueKind::of(element)
        )
    }
}

impl Iterator for TreeLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some((elements, depth)) = self.elements.as_mut() {
                if let Some(element) = elements.next() {
                    let depth = *depth;
                    return Some(self.element_line(depth, element));
                }
            }
            self.elements = None;

            let depth = self.stack.len().checked_sub(1)?;
            let Some((key, value)) = self.stack.last_mut()?.next() else {
                self.stack.pop();
                continue;
            };

            let prefix = self.prefix(depth);
            let line = match value {
                Value::Object(children) => {
                    self.stack.push(children.iter());
                    format!("{prefix}{key}=")
                }
                Value::Array(elements) => {
                    self.elements = Some((elements.iter(), depth));
                    format!("{prefix}{key} (array):")
                }
                scalar => format!(
                    "{prefix}{key}: {} - {}",
                    value_text(scalar),
                    ValueKind::of(scalar)
                ),
            };
            return Some(line);
        }
    }
}

/// Render the whole document, one newline-terminated line per node.
pub fn render_tree(root: &Map<String, Value>, indent: &str) -> String {
    let mut out = String::new();
    for line in TreeLines::new(root, indent) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
