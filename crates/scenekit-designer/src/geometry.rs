//! Geometry utilities: rotation-aware transforms, aspect-ratio math, and
//! bounding-box intersection for marquee selection.
//!
//! Rotation is encoded inside an element's `transform` style string as
//! `rotate(<deg>deg)`. The functions here are the only code that parses or
//! rewrites that token; everything else goes through them so other
//! transform functions sharing the string are never clobbered.

use scenekit_core::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, IMAGE_PLACEMENT_FRACTION, MAX_SCALE_PERCENT, MIN_SCALE_PERCENT,
};

use crate::model::{Element, Point, Size, StyleValue};

/// Parses the rotation in degrees out of a transform string.
///
/// Returns 0.0 when the string has no `rotate(...)` token or the token
/// does not parse. Pure, total function.
pub fn rotation_of(transform: &str) -> f64 {
    let Some(start) = transform.find("rotate(") else {
        return 0.0;
    };
    let rest = &transform[start + "rotate(".len()..];
    let Some(end) = rest.find(')') else {
        return 0.0;
    };
    rest[..end]
        .trim()
        .trim_end_matches("deg")
        .trim()
        .parse()
        .unwrap_or(0.0)
}

/// Replaces the `rotate(...)` token in a transform string, or appends one
/// when absent. Every other transform function call is preserved verbatim.
pub fn with_rotation(transform: &str, degrees: f64) -> String {
    let token = format!("rotate({degrees}deg)");
    let Some(start) = transform.find("rotate(") else {
        return if transform.trim().is_empty() {
            token
        } else {
            format!("{} {}", transform.trim_end(), token)
        };
    };
    match transform[start..].find(')') {
        Some(rel_end) => {
            let end = start + rel_end + 1;
            format!("{}{}{}", &transform[..start], token, &transform[end..])
        }
        // Malformed token (no closing paren): rewrite from the token on.
        None => format!("{}{}", &transform[..start], token),
    }
}

/// Rotation of an element in degrees, derived from its style.
pub fn get_rotation(element: &Element) -> f64 {
    element.transform().map(rotation_of).unwrap_or(0.0)
}

/// Writes the element's rotation back into its transform style entry,
/// preserving any other transform functions present.
pub fn apply_rotation(element: &mut Element, degrees: f64) {
    let updated = with_rotation(element.transform().unwrap_or(""), degrees);
    element
        .style
        .insert("transform".to_string(), StyleValue::Text(updated));
}

/// Converts a client-space pointer position to canvas units.
///
/// Every gesture controller goes through this so that zoom is transparent
/// to stored coordinates: the model only ever sees un-scaled canvas units.
pub fn to_canvas_coordinates(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
    scale: f64,
) -> Point {
    Point::new((client_x - rect_left) / scale, (client_y - rect_top) / scale)
}

/// Whether two axis-aligned boxes `(x1, y1, x2, y2)` intersect.
/// Boundary contact counts as intersecting.
pub fn rects_intersect(a: (f64, f64, f64, f64), b: (f64, f64, f64, f64)) -> bool {
    !(a.2 < b.0 || a.0 > b.2 || a.3 < b.1 || a.1 > b.3)
}

/// Initial placement size for an image with the given natural size:
/// fits within [`IMAGE_PLACEMENT_FRACTION`] of the canvas in both
/// dimensions, preserving aspect ratio, and never upscales.
pub fn image_placement_size(original: Size) -> Size {
    if original.width <= 0.0 || original.height <= 0.0 {
        return original;
    }
    let max_w = CANVAS_WIDTH * IMAGE_PLACEMENT_FRACTION;
    let max_h = CANVAS_HEIGHT * IMAGE_PLACEMENT_FRACTION;
    let factor = (max_w / original.width)
        .min(max_h / original.height)
        .min(1.0);
    Size::new(
        (original.width * factor).round(),
        (original.height * factor).round(),
    )
}

/// Size at a scale percentage of the original, both dimensions scaled by
/// the same factor. The percentage is clamped to the slider's 10-200 range.
pub fn scaled_size(original: Size, percent: f64) -> Size {
    let p = percent.clamp(MIN_SCALE_PERCENT, MAX_SCALE_PERCENT);
    Size::new(
        (original.width * p / 100.0).round(),
        (original.height * p / 100.0).round(),
    )
}

/// Normalizes an angle delta into [-180, 180] degrees.
///
/// Consecutive pointer samples during a rotate gesture can straddle the
/// +/-180 wrap boundary; deltas must be normalized before accumulating or
/// the rotation jumps by a full turn.
pub fn normalize_angle_delta(delta: f64) -> f64 {
    let mut d = delta % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d < -180.0 {
        d += 360.0;
    }
    d
}

/// Angle in degrees from `center` to `point`, via `atan2`.
pub fn pointer_angle(center: Point, point: Point) -> f64 {
    (point.y - center.y).atan2(point.x - center.x).to_degrees()
}
