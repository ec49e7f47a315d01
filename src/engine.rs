//! The style engine: compiled state plus the tree transformer.
//!
//! A [`StyleEngine`] owns the current [`Options`], the compiled
//! [`Stylesheet`] and the accumulated [`Sizes`]. [`StyleEngine::build`] is
//! the only mutator; everything else reads.
//!
//! # Compile semantics
//!
//! - The stylesheet is replaced wholesale by every build.
//! - Options and sizes merge forward, so earlier settings persist.
//! - A failed build publishes nothing.
//!
//! # Tree transformation
//!
//! [`StyleEngine::recursive_style`] walks an element tree and resolves every
//! class/style prop pair it finds. Untouched subtrees come back as the same
//! `Arc`, so consumers can skip work for them.
//!
//! ```rust
//! use tachyon_style::{Config, StyleEngine};
//! use tachyon_style::tree::{Element, Node};
//!
//! let mut engine = StyleEngine::new();
//! engine.build(Config::new().color("red", "#ff0000")).unwrap();
//!
//! let tree = Node::from(Element::new("Text").prop("cls", "red f5"));
//! let styled = engine.recursive_style(&tree);
//!
//! let style = styled.as_element().unwrap().get("style").unwrap();
//! assert_eq!(style[0]["color"], "#ff0000");
//! assert_eq!(style[1]["fontSize"], 16.0);
//! ```

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::compiler::{compile, Sizes, Stylesheet};
use crate::error::ConfigError;
use crate::options::{Config, Options};
use crate::resolve::{Resolution, Resolver};
use crate::style::StyleObject;
use crate::tree::{Element, Node, Props};

/// Style prop filled by the primary class prop.
pub const STYLE_PROP: &str = "style";

/// Suffix of style props paired with suffix-matched class props.
pub const STYLE_PROP_SUFFIX: &str = "Style";

/// Compiled styles, options and sizes, plus the operations that read them.
#[derive(Debug, Clone, Default)]
pub struct StyleEngine {
    options: Options,
    stylesheet: Stylesheet,
    sizes: Sizes,
}

impl StyleEngine {
    /// Creates an engine with default options and an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine and compiles `config` into it.
    ///
    /// # Errors
    ///
    /// See [`StyleEngine::build`].
    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        let mut engine = Self::new();
        engine.build(config)?;
        Ok(engine)
    }

    /// Compiles `config` and publishes the result.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a unit size is invalid or a scale table
    /// holds a non-numeric value. The engine is left unchanged.
    pub fn build(&mut self, config: Config) -> Result<(), ConfigError> {
        self.build_with(config, |styles| styles)
    }

    /// Like [`build`](Self::build), passing the compiled map through a style
    /// factory before it is stored.
    ///
    /// # Errors
    ///
    /// See [`StyleEngine::build`].
    pub fn build_with<F>(&mut self, config: Config, factory: F) -> Result<(), ConfigError>
    where
        F: FnOnce(HashMap<String, StyleObject>) -> HashMap<String, StyleObject>,
    {
        config.validate()?;

        let mut options = self.options.clone();
        options.merge(&config);
        let compiled = compile(&options)?;

        debug!(
            styles = compiled.styles.len(),
            sizes = compiled.sizes.len(),
            rem = options.rem,
            "compiled stylesheet"
        );

        self.stylesheet = Stylesheet::from(factory(compiled.styles));
        self.sizes.merge(compiled.sizes);
        self.options = options;
        Ok(())
    }

    /// The current options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The compiled stylesheet.
    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Sizes accumulated over all builds.
    pub fn sizes(&self) -> &Sizes {
        &self.sizes
    }

    /// A resolver over the current state.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.stylesheet, &self.options.transforms)
    }

    /// Resolves a class string in the context of `element`.
    pub fn resolve(&self, class_string: &str, element: &Element) -> Resolution {
        self.resolver().resolve(class_string, element)
    }

    /// Computes the new style prop value for one class/style prop pair.
    ///
    /// See [`Resolver::transform_style`].
    pub fn transform_style(
        &self,
        element: &Element,
        existing: Option<&Value>,
        source: Option<&Value>,
    ) -> Option<Vec<Value>> {
        self.resolver().transform_style(element, existing, source)
    }

    /// Transforms a tree, returning the input unchanged (same `Arc`) when
    /// nothing needed translation.
    pub fn recursive_style(&self, node: &Node) -> Node {
        self.restyle_node(node).unwrap_or_else(|| node.clone())
    }

    /// Transforms an element and its descendants.
    ///
    /// Returns `None` if nothing changed.
    pub fn restyle_element(&self, element: &Element) -> Option<Element> {
        let resolver = self.resolver();
        let mut updates = Props::new();

        for (cls_prop, style_prop) in self.prop_pairs(element) {
            let styles = resolver.transform_style(
                element,
                element.get(&style_prop),
                element.get(&cls_prop),
            );
            if let Some(styles) = styles {
                updates.insert(style_prop, Value::Array(styles));
            }
        }

        let children = match element.children() {
            Some(Node::List(items)) => self.restyle_children(items),
            Some(child) => self.restyle_node(child),
            None => None,
        };

        if updates.is_empty() && children.is_none() {
            return None;
        }
        Some(element.clone_with(updates, children))
    }

    fn restyle_node(&self, node: &Node) -> Option<Node> {
        match node {
            Node::Element(element) => self.restyle_element(element).map(Node::Element),
            _ => None,
        }
    }

    fn restyle_children(&self, items: &[Node]) -> Option<Node> {
        let mut flat = Node::List(items.to_vec()).flatten();
        let mut changed = false;

        for child in flat.iter_mut() {
            if let Some(restyled) = self.restyle_node(child) {
                *child = restyled;
                changed = true;
            }
        }

        changed.then_some(Node::List(flat))
    }

    /// The `(class prop, style prop)` pairs to examine on `element`.
    ///
    /// Explicit `cls_map` pairs come first, then the primary pair, then one
    /// pair per prop ending in the capitalized class prop name
    /// (`containerCls` → `containerStyle`). A class prop appears once; the
    /// primary and suffix pairs replace a `cls_map` target for the same prop
    /// but keep its position.
    pub fn prop_pairs(&self, element: &Element) -> Vec<(String, String)> {
        let options = &self.options;
        let mut pairs: Vec<(String, String)> = options
            .cls_map
            .iter()
            .map(|(cls, style)| (cls.clone(), style.clone()))
            .collect();

        let mut push = |cls: String, style: String| {
            match pairs.iter_mut().find(|(existing, _)| *existing == cls) {
                Some(pair) => pair.1 = style,
                None => pairs.push((cls, style)),
            }
        };

        if !options.cls_prop_name.is_empty() {
            push(options.cls_prop_name.clone(), STYLE_PROP.to_string());

            let suffix = options.cls_prop_name_cap.as_str();
            if !suffix.is_empty() {
                for name in element.props().keys() {
                    if let Some(prefix) = name.strip_suffix(suffix) {
                        push(name.clone(), format!("{prefix}{STYLE_PROP_SUFFIX}"));
                    }
                }
            }
        }

        pairs
    }
}
