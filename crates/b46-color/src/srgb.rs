//! Pure sRGB math — linearization, WCAG luminance and contrast, blending.
//!
//! Everything here is stateless f64 arithmetic over [`Rgb`] values. The
//! readability math follows WCAG 2.1: contrast is defined on relative
//! luminance, and relative luminance is defined on *linear* light, so the
//! sRGB gamma curve must be removed before the weighted sum.

use crate::rgb::Rgb;

/// Convert a single sRGB component (0.0–1.0) to linear light.
///
/// The standard piecewise sRGB transfer function: a linear segment near
/// black, a 2.4 power curve elsewhere.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Linearizes each channel, then combines as
/// `0.2126 * R + 0.7152 * G + 0.0722 * B`.
///
/// Returns a value in [0.0, 1.0]: 0 for black, 1 for white.
#[must_use]
pub fn luminance(color: Rgb) -> f64 {
    let r = srgb_to_linear(f64::from(color.r) / 255.0);
    let g = srgb_to_linear(f64::from(color.g) / 255.0);
    let b = srgb_to_linear(f64::from(color.b) / 255.0);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)` — always in [1.0, 21.0] and
/// symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = luminance(a);
    let lb = luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Linearly interpolate between two colors.
///
/// `t` = 0.0 returns `a`, `t` = 1.0 returns `b`. Each channel is
/// interpolated independently, rounded to the nearest integer, and
/// clamped to 0–255.
#[must_use]
pub fn blend(a: Rgb, b: Rgb, t: f64) -> Rgb {
    Rgb::new(
        blend_channel(a.r, b.r, t),
        blend_channel(a.g, b.g, t),
        blend_channel(a.b, b.b, t),
    )
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend_channel(a: u8, b: u8, t: f64) -> u8 {
    let a = f64::from(a);
    let b = f64::from(b);
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (b - a).mul_add(t, a).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
