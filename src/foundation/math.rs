use crate::foundation::core::Point;

/// Length and direction (radians) of the segment `a -> b`.
pub(crate) fn segment_between(a: Point, b: Point) -> (f64, f64) {
    let d = b - a;
    (d.hypot(), d.atan2())
}

/// Format a float for SVG attributes: fixed precision, no trailing zeros, no `-0`.
pub(crate) fn fmt_num(v: f64) -> String {
    let mut s = format!("{v:.4}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
