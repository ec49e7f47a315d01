//! Process-wide style engine.
//!
//! Most applications compile one stylesheet at startup (and again on theme
//! changes) and style every render against it. This module holds that
//! shared [`StyleEngine`] behind a reader-writer lock:
//!
//! - [`build`] takes the write lock, so it waits for in-flight render passes
//!   and blocks new ones until it finishes.
//! - Everything else takes the read lock and may run concurrently.
//!
//! Transform functions run while the read lock is held and must not call
//! any function in this module. [`build`] would wait on its own reader, and
//! a second read (such as [`sizes`] or [`resolve`]) blocks behind any
//! pending [`build`]. Capture what a transform needs when registering it.
//!
//! # Example
//!
//! ```rust
//! use tachyon_style::{build, recursive_style, styles, Config};
//! use tachyon_style::tree::{Element, Node};
//!
//! build(Config::new().color("ink", "#111")).unwrap();
//! assert!(styles().contains("bg-ink"));
//!
//! let out = recursive_style(&Node::from(Element::new("Text").prop("cls", "ink")));
//! assert!(out.as_element().unwrap().get("style").is_some());
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::compiler::{Sizes, Stylesheet};
use crate::engine::StyleEngine;
use crate::error::ConfigError;
use crate::options::{Config, Options};
use crate::resolve::Resolution;
use crate::style::StyleObject;
use crate::tree::{Element, Node};

static ENGINE: Lazy<RwLock<StyleEngine>> = Lazy::new(|| RwLock::new(StyleEngine::new()));

/// Runs `f` with read access to the shared engine.
pub fn with_engine<R>(f: impl FnOnce(&StyleEngine) -> R) -> R {
    let guard = ENGINE.read().unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

/// Compiles `config` into the shared engine.
///
/// # Errors
///
/// See [`StyleEngine::build`]. On error the shared state is unchanged.
pub fn build(config: Config) -> Result<(), ConfigError> {
    build_with(config, |styles| styles)
}

/// Compiles `config` into the shared engine through a style factory.
///
/// # Errors
///
/// See [`StyleEngine::build`].
pub fn build_with<F>(config: Config, factory: F) -> Result<(), ConfigError>
where
    F: FnOnce(HashMap<String, StyleObject>) -> HashMap<String, StyleObject>,
{
    let mut guard = ENGINE.write().unwrap_or_else(PoisonError::into_inner);
    guard.build_with(config, factory)
}

/// Replaces the shared engine with a fresh, uncompiled one.
pub fn reset() {
    let mut guard = ENGINE.write().unwrap_or_else(PoisonError::into_inner);
    *guard = StyleEngine::new();
}

/// A snapshot of the compiled stylesheet.
pub fn styles() -> Stylesheet {
    with_engine(|engine| engine.stylesheet().clone())
}

/// A snapshot of the accumulated sizes.
pub fn sizes() -> Sizes {
    with_engine(|engine| engine.sizes().clone())
}

/// A snapshot of the current options.
pub fn options() -> Options {
    with_engine(|engine| engine.options().clone())
}

/// Resolves a class string against the shared engine.
pub fn resolve(class_string: &str, element: &Element) -> Resolution {
    with_engine(|engine| engine.resolve(class_string, element))
}

/// Computes a style prop value against the shared engine.
pub fn transform_style(
    element: &Element,
    existing: Option<&Value>,
    source: Option<&Value>,
) -> Option<Vec<Value>> {
    with_engine(|engine| engine.transform_style(element, existing, source))
}

/// Transforms a tree against the shared engine.
pub fn recursive_style(node: &Node) -> Node {
    with_engine(|engine| engine.recursive_style(node))
}
