//! Font sizes, line heights, tracking, weights and text helpers.

use crate::style::StyleTable;

use super::keyed;

pub(super) fn type_scale() -> StyleTable {
    keyed(
        "fontSize",
        &[
            ("f-headline", 6.0),
            ("f-subheadline", 5.0),
            ("f1", 3.0),
            ("f2", 2.25),
            ("f3", 1.5),
            ("f4", 1.25),
            ("f5", 1.0),
            ("f6", 0.875),
        ],
    )
}

pub(super) fn line_height() -> StyleTable {
    keyed(
        "lineHeight",
        &[("lh-solid", 1.0), ("lh-title", 1.25), ("lh-copy", 1.5)],
    )
}

pub(super) fn tracked() -> StyleTable {
    keyed(
        "letterSpacing",
        &[
            ("tracked", 0.1),
            ("tracked-tight", -0.05),
            ("tracked-mega", 0.25),
        ],
    )
}

pub(super) fn font_weights() -> StyleTable {
    keyed(
        "fontWeight",
        &[
            ("normal", "normal"),
            ("b", "bold"),
            ("fw1", "100"),
            ("fw2", "200"),
            ("fw3", "300"),
            ("fw4", "400"),
            ("fw5", "500"),
            ("fw6", "600"),
            ("fw7", "700"),
            ("fw8", "800"),
            ("fw9", "900"),
        ],
    )
}

pub(super) fn text() -> StyleTable {
    let mut table = keyed(
        "textAlign",
        &[
            ("tl", "left"),
            ("tc", "center"),
            ("tr", "right"),
            ("tj", "justify"),
        ],
    );
    table.extend(keyed("fontStyle", &[("i", "italic"), ("fs-normal", "normal")]));
    table.extend(keyed(
        "textTransform",
        &[
            ("ttc", "capitalize"),
            ("ttl", "lowercase"),
            ("ttu", "uppercase"),
            ("ttn", "none"),
        ],
    ));
    table.extend(keyed(
        "textDecorationLine",
        &[
            ("strike", "line-through"),
            ("underline", "underline"),
            ("no-underline", "none"),
        ],
    ));
    table
}
