//! Render wrappers.
//!
//! Wrapping a render function or a component routes its output through the
//! tree transformer before the caller sees it. Nothing else about the call
//! changes: arguments are forwarded as-is and component names are kept for
//! diagnostics.
//!
//! ```rust
//! use tachyon_style::{build, wrap, Config};
//! use tachyon_style::tree::{Element, Node};
//!
//! build(Config::new()).unwrap();
//!
//! let label = wrap(|text: &str| -> Node {
//!     Element::new("Text").prop("cls", "f4 b").child(text).into()
//! });
//!
//! let out = label("hello");
//! assert!(out.as_element().unwrap().get("style").is_some());
//! ```

use crate::engine::StyleEngine;
use crate::global;
use crate::tree::Node;

/// Something that renders an element tree.
pub trait Component {
    /// Produces the component's output.
    fn render(&self) -> Node;

    /// Name used in diagnostics.
    fn display_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A component whose output is styled by the shared engine.
#[derive(Debug, Clone)]
pub struct Styled<C> {
    inner: C,
}

impl<C: Component> Styled<C> {
    /// The wrapped component.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwraps the component.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Component> Component for Styled<C> {
    fn render(&self) -> Node {
        global::recursive_style(&self.inner.render())
    }

    fn display_name(&self) -> &str {
        self.inner.display_name()
    }
}

/// Wraps a component so its output is styled.
pub fn wrap_component<C: Component>(component: C) -> Styled<C> {
    Styled { inner: component }
}

/// Wraps a render function so its return value is styled by the shared
/// engine.
pub fn wrap<A, F>(render: F) -> impl Fn(A) -> Node
where
    F: Fn(A) -> Node,
{
    move |args| global::recursive_style(&render(args))
}

impl StyleEngine {
    /// Wraps a render function so its return value is styled by this engine.
    pub fn wrap<'a, A, F>(&'a self, render: F) -> impl Fn(A) -> Node + 'a
    where
        F: Fn(A) -> Node + 'a,
    {
        move |args| self.recursive_style(&render(args))
    }
}
