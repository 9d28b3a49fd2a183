// ABOUTME: Recursive token tree with ordered branches and typed leaves
// ABOUTME: Dot-path addressing and leaf walks used by the synchronizer and validators

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A terminal token value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Null,
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl TokenValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// True for `Null`, `""` and `[]`.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Number(_) => false,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::List(_) => "list",
        }
    }
}

impl std::fmt::Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => write!(f, "{text:?}"),
            Self::List(items) => write!(f, "{items:?}"),
        }
    }
}

/// A node of the token tree: either a leaf value or an ordered map of children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenNode {
    Leaf(TokenValue),
    Branch(IndexMap<String, TokenNode>),
}

/// A leaf reached by a walk, with the keys that lead to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenLeaf<'a> {
    pub segments: &'a [&'a str],
    pub value: &'a TokenValue,
}

impl TokenLeaf<'_> {
    pub fn path(&self) -> String {
        self.segments.join(".")
    }
}

impl TokenNode {
    pub fn empty_branch() -> Self {
        Self::Branch(IndexMap::new())
    }

    pub fn as_branch(&self) -> Option<&IndexMap<String, TokenNode>> {
        match self {
            Self::Branch(children) => Some(children),
            Self::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&TokenValue> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Branch(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_leaf().and_then(TokenValue::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&TokenNode> {
        self.as_branch()?.get(key)
    }

    /// Resolve a dot-separated path such as `surface.DEFAULT`.
    ///
    /// An empty path resolves to `self`.
    pub fn get_path(&self, path: &str) -> Option<&TokenNode> {
        if path.is_empty() {
            return Some(self);
        }
        path.split('.').try_fold(self, |node, key| node.get(key))
    }

    /// Visit every leaf depth-first in insertion order.
    pub fn walk_leaves<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(TokenLeaf<'_>),
    {
        let mut segments: Vec<&'a str> = Vec::new();
        self.walk_inner(&mut segments, &mut visit);
    }

    fn walk_inner<'a, F>(&'a self, segments: &mut Vec<&'a str>, visit: &mut F)
    where
        F: FnMut(TokenLeaf<'_>),
    {
        match self {
            Self::Leaf(value) => visit(TokenLeaf {
                segments: segments.as_slice(),
                value,
            }),
            Self::Branch(children) => {
                for (key, child) in children {
                    segments.push(key.as_str());
                    child.walk_inner(segments, visit);
                    segments.pop();
                }
            }
        }
    }

    /// Dot paths of every leaf paired with its value, in insertion order.
    pub fn leaves(&self) -> Vec<(String, &TokenValue)> {
        let mut out = Vec::new();
        self.collect_leaves(String::new(), &mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, prefix: String, out: &mut Vec<(String, &'a TokenValue)>) {
        match self {
            Self::Leaf(value) => out.push((prefix, value)),
            Self::Branch(children) => {
                for (key, child) in children {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    child.collect_leaves(path, out);
                }
            }
        }
    }

    /// Sorted set of leaf dot paths; the basis of parity checks.
    pub fn dot_paths(&self) -> BTreeSet<String> {
        self.leaves().into_iter().map(|(path, _)| path).collect()
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(children) => children.values().map(TokenNode::leaf_count).sum(),
        }
    }
}

impl From<&str> for TokenNode {
    fn from(value: &str) -> Self {
        Self::Leaf(TokenValue::Text(value.to_string()))
    }
}

impl From<String> for TokenNode {
    fn from(value: String) -> Self {
        Self::Leaf(TokenValue::Text(value))
    }
}

impl From<f64> for TokenNode {
    fn from(value: f64) -> Self {
        Self::Leaf(TokenValue::Number(value))
    }
}

impl From<Vec<String>> for TokenNode {
    fn from(items: Vec<String>) -> Self {
        Self::Leaf(TokenValue::List(items))
    }
}

impl<K: Into<String>> FromIterator<(K, TokenNode)> for TokenNode {
    fn from_iter<I: IntoIterator<Item = (K, TokenNode)>>(iter: I) -> Self {
        Self::Branch(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Build a [`TokenNode`] from a JSON-like literal.
///
/// ```
/// use glow_tokens::{TokenNode, tokens};
///
/// let tree = tokens!({
///     "surface": { "DEFAULT": "#151719", "hover": "#1C1F23" },
///     "spacing": { "base": 4.0 },
///     "fonts": ["Satoshi", "sans-serif"],
/// });
/// assert_eq!(tree.get_path("surface.hover").and_then(TokenNode::as_str), Some("#1C1F23"));
/// ```
#[macro_export]
macro_rules! tokens {
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut children = $crate::IndexMap::new();
        $( children.insert(::std::string::String::from($key), $crate::tokens!($value)); )*
        $crate::TokenNode::Branch(children)
    }};
    ([ $($item:literal),* $(,)? ]) => {
        $crate::TokenNode::from(::std::vec![$(::std::string::String::from($item)),*])
    };
    ($value:literal) => {
        $crate::TokenNode::from($value)
    };
}
