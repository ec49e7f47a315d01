//! # Tachyon Style - utility classes for element trees
//!
//! `tachyon-style` compiles a set of scale tables (spacing, sizing,
//! typography, colors, ...) into a flat stylesheet keyed by short tokens, then
//! rewrites element trees so that every node carrying a class string such as
//! `"pa2 bg-red f4"` receives the matching style objects on its style prop.
//!
//! ## Quick start
//!
//! ```rust
//! use tachyon_style::{build, recursive_style, Config};
//! use tachyon_style::tree::{Element, Node};
//! use serde_json::json;
//!
//! build(Config::new().rem(16.0).color("red", "#ff0000")).unwrap();
//!
//! let tree = Node::from(
//!     Element::new("View")
//!         .prop("cls", "pa2 bg-red")
//!         .child(Element::new("Text").prop("cls", "f4 red").child("hi")),
//! );
//!
//! let styled = recursive_style(&tree);
//! let root = styled.as_element().unwrap();
//! assert_eq!(
//!     root.get("style"),
//!     Some(&json!([{"padding": 8.0}, {"backgroundColor": "#ff0000"}]))
//! );
//! ```
//!
//! ## Concepts
//!
//! - **Tokens** are looked up in the compiled [`Stylesheet`]. Hyphens and
//!   underscores are interchangeable: `bg-red` and `bg_red` are the same token.
//! - **Transform functions** handle tokens without a stylesheet entry. A token
//!   like `tint_ff0000` calls the `tint` function with `"ff0000"`. The
//!   built-ins are `bg`, `b_` and `tint`; more can be registered through
//!   [`Config::transform`].
//! - **Class/style prop pairs**: `cls` fills `style`, and any prop ending in
//!   `Cls` fills the matching `Style` prop (`containerCls` →
//!   `containerStyle`).
//!
//! ## Shared state
//!
//! The free functions ([`build`], [`styles`], [`recursive_style`], [`wrap`],
//! ...) operate on one process-wide [`StyleEngine`]. Applications that prefer
//! explicit state can create and pass their own `StyleEngine` instead.
//!
//! Each build replaces the stylesheet entirely but merges into the options
//! and sizes, so colors, fonts and transform functions registered earlier
//! stay available.
//!
//! ## Logging
//!
//! Unresolved tokens are reported at warn level through `tracing`; compiles
//! are logged at debug level. No subscriber is installed by this crate.

pub mod compiler;
pub mod engine;
pub mod error;
pub mod global;
pub mod options;
pub mod resolve;
pub mod scale;
pub mod style;
pub mod tables;
pub mod tree;
pub mod wrap;

pub use compiler::{Sizes, Stylesheet};
pub use engine::StyleEngine;
pub use error::{ConfigError, UnresolvedToken};
pub use global::{
    build, build_with, options, recursive_style, reset, resolve, sizes, styles, transform_style,
    with_engine,
};
pub use options::{Config, Options, TransformFn, TransformRegistry};
pub use resolve::Resolution;
pub use style::{StyleObject, StyleTable};
pub use tree::{Element, Node};
pub use wrap::{wrap, wrap_component, Component, Styled};
