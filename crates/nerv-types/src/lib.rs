//! Virtual node tree for the Nerv server renderer.
//!
//! This crate defines the input side of server-side rendering: the [`Node`]
//! sum type, element [`Props`] and [`Children`], the [`Context`] threaded
//! down the tree, and the [`Component`] trait composite components implement.
//!
//! Trees are plain immutable values. They are `Send + Sync`, so a tree built
//! once can be rendered from several request handlers at the same time.

mod children;
mod component;
mod context;
mod node;
mod props;
mod value;

pub use children::{Child, Children};
pub use component::{Component, ComponentConstructor, StatelessFn};
pub use context::{Context, State};
pub use node::{
	CompositeNode, ElementNode, IntoNode, Node, NodeKind, StatelessNode, TextNode,
};
pub use props::{Props, RESERVED_PROPS, is_reserved_prop};
pub use value::{PropMap, PropValue};
