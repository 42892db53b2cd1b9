//! Display text that is either a plain string or a small tree of inline markup.
//!
//! Titles and descriptions on the landing page are mostly plain strings, but some copy needs
//! emphasis, a link or a bulleted list. Instead of carrying raw HTML around, such copy is
//! described with [`Node`]s and rendered through maud, so every piece of text is escaped.
use std::fmt::{self, Display, Formatter};

use maud::{Markup, Render, html};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Text {
    Plain(String),
    Rich(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Strong(Vec<Node>),
    Emphasis(Vec<Node>),
    Link { href: String, children: Vec<Node> },
    LineBreak,
    /// An unordered list, one entry per item.
    List(Vec<Vec<Node>>),
}

impl Text {
    pub fn plain(text: impl Into<String>) -> Self {
        Text::Plain(text.into())
    }

    pub fn rich(nodes: Vec<Node>) -> Self {
        Text::Rich(nodes)
    }

    /// Returns `true` if the text has no visible characters once flattened.
    pub fn is_blank(&self) -> bool {
        self.to_string().trim().is_empty()
    }

    /// Returns `true` if the text can be placed inside a `<p>` element, i.e. it contains no lists.
    pub fn is_inline(&self) -> bool {
        match self {
            Text::Plain(_) => true,
            Text::Rich(nodes) => nodes.iter().all(Node::is_inline),
        }
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn link(href: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Link {
            href: href.into(),
            children,
        }
    }

    fn is_inline(&self) -> bool {
        match self {
            Node::Text(_) | Node::LineBreak => true,
            Node::Strong(children) | Node::Emphasis(children) => {
                children.iter().all(Node::is_inline)
            }
            Node::Link { children, .. } => children.iter().all(Node::is_inline),
            Node::List(_) => false,
        }
    }

    fn write_plain(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(text) => f.write_str(text),
            Node::Strong(children) | Node::Emphasis(children) | Node::Link { children, .. } => {
                children.iter().try_for_each(|child| child.write_plain(f))
            }
            Node::LineBreak => f.write_str(" "),
            Node::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(" ")?;
                    }
                    item.iter().try_for_each(|child| child.write_plain(f))?;
                }
                Ok(())
            }
        }
    }
}

/// Flattens the text, dropping all markup. Used wherever only a string fits, like `alt` attributes.
impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Text::Plain(text) => f.write_str(text),
            Text::Rich(nodes) => nodes.iter().try_for_each(|node| node.write_plain(f)),
        }
    }
}

impl Render for Text {
    fn render(&self) -> Markup {
        match self {
            Text::Plain(text) => html! { (text) },
            Text::Rich(nodes) => html! { @for node in nodes { (node) } },
        }
    }
}

impl Render for Node {
    fn render(&self) -> Markup {
        match self {
            Node::Text(text) => html! { (text) },
            Node::Strong(children) => html! { strong { @for child in children { (child) } } },
            Node::Emphasis(children) => html! { em { @for child in children { (child) } } },
            Node::Link { href, children } => {
                html! { a href=(href) { @for child in children { (child) } } }
            }
            Node::LineBreak => html! { br; },
            Node::List(items) => html! {
                ul {
                    @for item in items {
                        li { @for child in item { (child) } }
                    }
                }
            },
        }
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Text::Plain(text.to_string())
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Text::Plain(text)
    }
}

impl From<Vec<Node>> for Text {
    fn from(nodes: Vec<Node>) -> Self {
        Text::Rich(nodes)
    }
}
