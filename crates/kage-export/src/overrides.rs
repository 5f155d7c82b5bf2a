//! JS `overrides` literal serializer.
//!
//! Converts per-sprite hitbox outlines into the source-code fragment
//! the game's renderer embeds verbatim:
//!
//! ```text
//!         const overrides = {
//!         '00': [
//!             { x: -0.5, y: -0.5 }, { x: 0.5, y: -0.5 },
//!         ],
//!         };
//! ```
//!
//! The fragment is meant to be copy-pasted into the renderer's source,
//! so the indentation (8 spaces for structure, 12 for point rows) and
//! the 5-points-per-row layout match the surrounding code it lands in.
//! It is never parsed back by this program.
//!
//! Numbers are printed with Rust's shortest round-trip `Display`; the
//! pipeline has already rounded them to 3 decimal digits, so no
//! additional padding or truncation happens here.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use std::fmt::Write;

use kage_pipeline::NormalizedPoint;

/// Points emitted per source row before wrapping.
const POINTS_PER_ROW: usize = 5;

/// One sprite's entry in the overrides literal.
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideEntry {
    /// Object key, quoted in the output (the sprite's numeric stem,
    /// e.g. `"07"`).
    pub key: String,

    /// The normalized silhouette outline.
    pub outline: Vec<NormalizedPoint>,
}

/// Serialize hitbox entries into the JS `overrides` object literal.
///
/// Entries are emitted in slice order; an empty slice produces an
/// empty (but syntactically complete) object.
#[must_use]
pub fn to_overrides(entries: &[OverrideEntry]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "        const overrides = {{");
    for entry in entries {
        let _ = writeln!(out, "        '{}': [", entry.key);
        for row in entry.outline.chunks(POINTS_PER_ROW) {
            let _ = write!(out, "            ");
            for point in row {
                let _ = write!(out, "{{ x: {}, y: {} }}, ", point.x, point.y);
            }
            // Drop the trailing space; the trailing comma stays.
            out.pop();
            out.push('\n');
        }
        let _ = writeln!(out, "        ],");
    }
    let _ = writeln!(out, "        }};");

    out
}
