//! Heights and widths.

use crate::style::{style_object, StyleTable};

const STEPS: [f64; 5] = [1.0, 2.0, 4.0, 8.0, 16.0];

/// `{prefix}1`..`{prefix}5`.
fn sized(prefix: &str, property: &str) -> StyleTable {
    STEPS
        .iter()
        .enumerate()
        .map(|(i, &v)| (format!("{}{}", prefix, i + 1), style_object([(property, v)])))
        .collect()
}

pub(super) fn heights() -> StyleTable {
    sized("h", "height")
}

pub(super) fn min_heights() -> StyleTable {
    sized("min-h", "minHeight")
}

pub(super) fn max_heights() -> StyleTable {
    sized("max-h", "maxHeight")
}

pub(super) fn widths() -> StyleTable {
    sized("w", "width")
}

pub(super) fn min_widths() -> StyleTable {
    sized("min-w", "minWidth")
}

pub(super) fn max_widths() -> StyleTable {
    sized("max-w", "maxWidth")
}
