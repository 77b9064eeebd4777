//! Range and bit-select formatting shared by the writers.

use ipx_model::Bounds;

/// Formats a declaration range (`[7:0] `), or nothing for a scalar.
pub(crate) fn range(bounds: Option<&Bounds>) -> String {
    match bounds {
        Some(b) if !b.is_empty() => format!("[{}:{}] ", b.left.trim(), b.right.trim()),
        _ => String::new(),
    }
}

/// Formats a part-select (`[7:0]`) or bit-select (`[3]`), or nothing.
pub(crate) fn select(bounds: Option<&Bounds>) -> String {
    match bounds {
        Some(b) if !b.is_empty() => {
            let (left, right) = (b.left.trim(), b.right.trim());
            if left == right || right.is_empty() {
                format!("[{left}]")
            } else if left.is_empty() {
                format!("[{right}]")
            } else {
                format!("[{left}:{right}]")
            }
        }
        _ => String::new(),
    }
}
