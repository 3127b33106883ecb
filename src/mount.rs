//! Mounted component trees.
//!
//! Mounting a component resolves every slot against its overrides and
//! produces a tree of [`Mounted`] nodes. The tree is plain data: hosts
//! walk it to drive their own rendering, and tests assert on it directly.

use std::fmt;

use crate::overrides::Resolved;
use crate::props::{PropValue, Props};
use crate::renderable::Renderable;

/// One node of a mounted tree: a renderable, its final props, children.
#[derive(Clone, Debug, PartialEq)]
pub struct Mounted {
    renderable: Renderable,
    props: Props,
    children: Vec<Child>,
}

/// A child of a mounted node.
#[derive(Clone, Debug, PartialEq)]
pub enum Child {
    Node(Mounted),
    Text(String),
}

impl Mounted {
    /// Creates a leaf node.
    pub fn new(renderable: impl Into<Renderable>, props: Props) -> Self {
        Self {
            renderable: renderable.into(),
            props,
            children: Vec::new(),
        }
    }

    /// Appends a child node, returning the updated node for chaining.
    pub fn child(mut self, node: Mounted) -> Self {
        self.children.push(Child::Node(node));
        self
    }

    /// Appends a text child.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    pub fn renderable(&self) -> &Renderable {
        &self.renderable
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Finds the first node named `name`, depth-first, starting with self.
    pub fn find(&self, name: &str) -> Option<&Mounted> {
        if self.renderable.name() == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Child::Node(node) => node.find(name),
            Child::Text(_) => None,
        })
    }

    /// Collects every node named `name`, depth-first.
    pub fn find_all(&self, name: &str) -> Vec<&Mounted> {
        let mut out = Vec::new();
        self.collect_named(name, &mut out);
        out
    }

    fn collect_named<'a>(&'a self, name: &str, out: &mut Vec<&'a Mounted>) {
        if self.renderable.name() == name {
            out.push(self);
        }
        for child in &self.children {
            if let Child::Node(node) = child {
                node.collect_named(name, out);
            }
        }
    }

    /// Concatenates all descendant text, depth-first.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Child::Node(node) => node.collect_text(out),
                Child::Text(text) => out.push_str(text),
            }
        }
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        write!(f, "{}<{}", pad, self.renderable.name())?;
        for (name, value) in self.props.iter() {
            write!(f, " {}={}", name, format_prop(value))?;
        }
        if self.children.is_empty() {
            return writeln!(f, " />");
        }
        writeln!(f, ">")?;
        for child in &self.children {
            match child {
                Child::Node(node) => node.fmt_node(f, depth + 1)?,
                Child::Text(text) => writeln!(f, "{}  {:?}", pad, text)?,
            }
        }
        writeln!(f, "{}</{}>", pad, self.renderable.name())
    }
}

impl From<Resolved> for Mounted {
    fn from(resolved: Resolved) -> Self {
        let (renderable, props) = resolved.into_parts();
        Mounted::new(renderable, props)
    }
}

impl fmt::Display for Mounted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, 0)
    }
}

fn format_prop(value: &PropValue) -> String {
    match value {
        PropValue::Data(data) => data.to_string(),
        PropValue::Style(style) => {
            let entries: Vec<String> = style
                .iter()
                .map(|(property, value)| format!("{}: {}", property, value))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        PropValue::Handler(name) => format!("@{}", name),
    }
}
