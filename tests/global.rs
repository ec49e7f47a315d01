//! Integration tests for the process-wide engine.
//!
//! These tests share global state and run serially.

use std::io;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use serial_test::serial;
use tachyon_style::style::{flatten, style_object};
use tachyon_style::tree::{Element, Node};
use tachyon_style::{
    build, build_with, options, recursive_style, reset, resolve, sizes, styles, transform_style,
    wrap, wrap_component, Component, Config, ConfigError,
};

fn style_of(node: &Node) -> Option<&Value> {
    node.as_element().and_then(|el| el.get("style"))
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).lines().map(str::to_string).collect()
    }
}

/// Runs `f` with a WARN-level subscriber writing into a buffer.
fn capture_warnings<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, buffer.lines())
}

#[test]
#[serial]
fn test_unit_scaling() {
    reset();
    build(Config::new().rem(16.0)).unwrap();

    let sheet = styles();
    assert_eq!(
        sheet.get("lh_title").cloned().map(Value::Object),
        Some(json!({"lineHeight": 20.0}))
    );
    assert_eq!(sizes().get("lh-title"), Some(20.0));
}

#[test]
#[serial]
fn test_color_synthesis() {
    reset();
    build(Config::new().color("red", "#ff0000")).unwrap();

    let sheet = styles();
    let tokens = ["bg-red", "red", "b--red", "tint-red"];
    let entries: Vec<_> = tokens.iter().map(|t| sheet.get(t).cloned()).collect();
    assert!(entries.iter().all(Option::is_some));
    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[serial]
fn test_hyphen_and_underscore_resolve_alike() {
    reset();
    build(Config::new().color("red", "#ff0000")).unwrap();

    let el = Element::new("View");
    assert_eq!(resolve("bg-red", &el).styles, resolve("bg_red", &el).styles);
}

#[test]
#[serial]
fn test_custom_override_precedence() {
    reset();
    build(Config::new().custom_style("pa2", style_object([("padding", 3)]))).unwrap();

    let res = resolve("pa2", &Element::new("View"));
    assert_eq!(res.styles, vec![json!({"padding": 3})]);
}

#[test]
#[serial]
fn test_order_preserved_after_existing() {
    reset();
    build(Config::new()).unwrap();

    let el = Element::new("View");
    let out = transform_style(&el, Some(&json!({"margin": 1})), Some(&json!("pa1 h1 w1"))).unwrap();
    assert_eq!(
        out,
        vec![
            json!({"margin": 1}),
            json!({"padding": 4.0}),
            json!({"height": 16.0}),
            json!({"width": 16.0}),
        ]
    );
}

#[test]
#[serial]
fn test_later_tokens_win_when_flattened() {
    reset();
    build(Config::new().color("red", "#f00").color("blue", "#00f")).unwrap();

    let el = Element::new("Text");
    let out = transform_style(&el, Some(&json!({"color": "black"})), Some(&json!("red blue"))).unwrap();
    assert_eq!(flatten(&out)["color"], "#00f");
}

#[test]
#[serial]
fn test_unresolved_token_is_non_fatal() {
    reset();
    build(Config::new()).unwrap();

    let (res, lines) = capture_warnings(|| resolve("h1 unknown_xyz w1", &Element::new("View")));
    assert_eq!(res.styles, vec![json!({"height": 16.0}), json!({"width": 16.0})]);
    assert_eq!(res.unresolved.len(), 1);
    assert_eq!(res.unresolved[0].token, "unknown_xyz");

    let warnings: Vec<_> = lines.iter().filter(|line| line.contains("WARN")).collect();
    assert_eq!(warnings.len(), 1, "{lines:?}");
    assert!(warnings[0].contains("style 'unknown_xyz' not found"));
}

#[test]
#[serial]
fn test_resolved_tokens_emit_no_warning() {
    reset();
    build(Config::new().color("red", "#f00")).unwrap();

    let (_, lines) = capture_warnings(|| resolve("pa2 red tint_abc", &Element::new("Text")));
    assert!(lines.is_empty(), "{lines:?}");
}

#[test]
#[serial]
fn test_function_token_dispatch() {
    reset();
    build(Config::new()).unwrap();

    let res = resolve("tint_ff0000 bg_blue b__green", &Element::new("Image"));
    assert_eq!(
        res.styles,
        vec![
            json!({"tintColor": "ff0000"}),
            json!({"backgroundColor": "blue"}),
            json!({"borderColor": "green"}),
        ]
    );
}

#[test]
#[serial]
fn test_resolution_is_deterministic() {
    reset();
    build(Config::new().color("red", "#f00")).unwrap();

    let el = Element::new("View");
    let first = transform_style(&el, None, Some(&json!("pa2 red tint_abc")));
    let second = transform_style(&el, None, Some(&json!("pa2 red tint_abc")));
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
#[serial]
fn test_tree_identity_preserved() {
    reset();
    build(Config::new()).unwrap();

    let root = Element::new("View")
        .child(Element::new("Text").child("a"))
        .child(Element::new("View").child(Element::new("Image")));
    let node = Node::from(root.clone());

    let out = recursive_style(&node);
    assert!(Element::ptr_eq(out.as_element().unwrap(), &root));
}

#[test]
#[serial]
fn test_stylesheet_replaced_options_and_sizes_merged() {
    reset();
    build(Config::new().rem(16.0).color("red", "#f00")).unwrap();
    let mut gaps = tachyon_style::StyleTable::new();
    gaps.insert("gap-1".into(), style_object([("gap", 1)]));
    build(Config::new().scale("gaps", gaps)).unwrap();

    let opts = options();
    assert_eq!(opts.rem, 16.0);
    assert_eq!(opts.colors["red"], "#f00");
    assert!(styles().contains("bg-red"));
    assert_eq!(sizes().get("gap-1"), Some(16.0));

    build(Config::new().rem(8.0)).unwrap();
    assert_eq!(sizes().get("h1"), Some(8.0));
    assert_eq!(
        styles().get("h1").cloned().map(Value::Object),
        Some(json!({"height": 8.0}))
    );
}

#[test]
#[serial]
fn test_invalid_config_leaves_state_untouched() {
    reset();
    build(Config::new().color("red", "#f00")).unwrap();
    let before = styles();

    let err = build(Config::new().font_rem(0.0)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUnit { field: "fontRem", .. }));
    assert_eq!(styles(), before);
}

#[test]
#[serial]
fn test_build_with_factory_output_is_published() {
    reset();
    build_with(Config::new(), |mut styles| {
        styles.insert("extra".into(), style_object([("zIndex", 2)]));
        styles
    })
    .unwrap();

    assert!(styles().contains("extra"));
}

#[test]
#[serial]
fn test_config_from_yaml_builds() {
    reset();
    let config = Config::from_yaml(
        r##"
rem: 10
colors:
  brand: "#123456"
customStyles:
  card:
    borderRadius: 4
"##,
    )
    .unwrap();
    build(config).unwrap();

    let out = recursive_style(&Element::new("View").prop("cls", "pa3 bg-brand card").into());
    assert_eq!(
        style_of(&out),
        Some(&json!([
            {"padding": 10.0},
            {"backgroundColor": "#123456"},
            {"borderRadius": 4}
        ]))
    );
}

#[test]
#[serial]
fn test_custom_cls_prop_name() {
    reset();
    build(Config::new().cls_prop_name("tw")).unwrap();

    let el = Element::new("View")
        .prop("tw", "pa1")
        .prop("cls", "pa2")
        .prop("headerTw", "h1");
    let out = recursive_style(&el.into());
    let el = out.as_element().unwrap();

    assert_eq!(el.get("style"), Some(&json!([{"padding": 4.0}])));
    assert_eq!(el.get("headerStyle"), Some(&json!([{"height": 16.0}])));
}

#[test]
#[serial]
fn test_wrap_function() {
    reset();
    build(Config::new().color("red", "#f00")).unwrap();

    let render = wrap(|label: String| -> Node {
        Element::new("Text").prop("cls", "red").child(label).into()
    });
    let out = render("hi".to_string());

    assert_eq!(style_of(&out), Some(&json!([{"color": "#f00"}])));
}

struct Badge {
    label: &'static str,
}

impl Component for Badge {
    fn render(&self) -> Node {
        Element::new("View")
            .prop("cls", "pa1 br2")
            .child(Element::new("Text").child(self.label))
            .into()
    }

    fn display_name(&self) -> &str {
        "Badge"
    }
}

#[test]
#[serial]
fn test_wrap_component() {
    reset();
    build(Config::new()).unwrap();

    let badge = wrap_component(Badge { label: "new" });
    assert_eq!(badge.display_name(), "Badge");
    assert_eq!(
        style_of(&badge.render()),
        Some(&json!([{"padding": 4.0}, {"borderRadius": 4.0}]))
    );
}
