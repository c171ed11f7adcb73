//! Markup serialization.
//!
//! Output layout:
//!
//! - the [`HEADER`] declaration and comment
//! - an optional `<?xml-stylesheet ...?>` line
//! - the root element and everything below it, one tab per nesting level
//!
//! Elements with neither children nor text are self-closing. Attributes are
//! written in lexicographic order. Serialization never mutates the tree.

use std::io::{self, Write};

use log::trace;

use crate::tree::{NodeId, Tree};

/// Prologue written before the root element.
pub const HEADER: &str = "<?xml version=\"1.0\"?>\n<!-- Generated by vellum -->\n";

impl Tree {
    /// Writes the whole document to `w`.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(HEADER.as_bytes())?;
        if let Some(href) = self.stylesheet() {
            writeln!(
                w,
                "<?xml-stylesheet type=\"text/css\" href=\"{}\" ?>",
                escape_attribute(href)
            )?;
        }
        self.write_node(self.root(), w)?;
        w.flush()
    }

    /// Writes `node` and its subtree, without the document prologue.
    pub fn write_node<W: Write>(&self, node: NodeId, w: &mut W) -> io::Result<()> {
        self.write_element(node, 0, w)
    }

    /// Renders the whole document into a string.
    pub fn to_svg_string(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec<u8> does not fail.
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn write_element<W: Write>(&self, node: NodeId, depth: usize, w: &mut W) -> io::Result<()> {
        let Some(element) = self.get(node) else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("node {node} does not belong to this tree"),
            ));
        };
        trace!(node:% = node, tag = element.tag(), depth; "Writing element");

        let tabs = "\t".repeat(depth);

        for comment in element.comments() {
            writeln!(w, "{tabs}<!--{}-->", escape_comment(comment))?;
        }

        write!(w, "{tabs}<{}", element.tag())?;
        for (key, value) in element.attributes().iter() {
            write!(w, " {key}=\"{}\"", escape_attribute(&value.to_string()))?;
        }

        if !element.children().is_empty() {
            writeln!(w, ">")?;
            for &child in element.children() {
                self.write_element(child, depth + 1, w)?;
            }
            writeln!(w, "{tabs}</{}>", element.tag())
        } else if element.is_text_leaf() {
            writeln!(w, ">{}</{}>", escape_text(element.text()), element.tag())
        } else {
            writeln!(w, " />")
        }
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Spaces out `--` and a trailing `-`, neither of which may appear inside
/// a comment.
fn escape_comment(comment: &str) -> String {
    let mut out = comment.to_string();
    while out.contains("--") {
        out = out.replace("--", "- -");
    }
    if out.ends_with('-') {
        out.push(' ');
    }
    out
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
