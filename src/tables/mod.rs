//! Built-in utility tables.
//!
//! Two kinds of tables live here:
//!
//! - **Static groups** hold final values and are merged as-is.
//! - **Rem-scaled tables** hold multipliers of the base unit and go through
//!   the [scale expander](crate::scale) at compile time.
//!
//! Keys are authored with hyphens; the compiler normalizes them.

mod borders;
mod layout;
mod sizing;
mod spacing;
mod typography;

use serde_json::Value;

use crate::style::{style_object, StyleTable};

pub use layout::absolute;

/// Static groups in merge order: borders, flexbox, font weights, images,
/// text, opacity.
pub fn static_groups() -> Vec<StyleTable> {
    vec![
        borders::styles(),
        layout::flexbox(),
        typography::font_weights(),
        layout::images(),
        typography::text(),
        layout::opacity(),
    ]
}

/// Rem-scaled tables in merge order.
pub fn rem_scaled() -> Vec<StyleTable> {
    vec![
        sizing::heights(),
        sizing::min_heights(),
        sizing::max_heights(),
        sizing::widths(),
        sizing::min_widths(),
        sizing::max_widths(),
        spacing::spacing(),
        typography::type_scale(),
        borders::radii(),
        typography::line_height(),
        typography::tracked(),
    ]
}

/// One property per token, each token with its own value.
fn keyed<V>(property: &str, steps: &[(&str, V)]) -> StyleTable
where
    V: Into<Value> + Copy,
{
    steps
        .iter()
        .map(|&(token, value)| (token.to_string(), style_object([(property, value)])))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rem_scaled_values_are_numeric() {
        for table in rem_scaled() {
            for (token, obj) in &table {
                for (prop, value) in obj {
                    assert!(value.is_number(), "{token}.{prop} is not numeric");
                }
            }
        }
    }

    #[test]
    fn test_static_groups_not_empty() {
        assert!(static_groups().iter().all(|g| !g.is_empty()));
    }

    #[test]
    fn test_line_height_table() {
        let lh = typography::line_height();
        assert_eq!(lh["lh-title"]["lineHeight"], 1.25);
        assert_eq!(lh.len(), 3);
    }
}
