//! Contrast-driven diff-background adjustment.
//!
//! Diff backgrounds come straight from theme palettes, and especially in
//! light themes they can leave the default foreground barely readable.
//! Rather than snapping to the editor background (losing the green/red
//! hue that makes a diff legible at a glance), the adjuster walks the
//! candidate toward the background only as far as the contrast target
//! requires.

use b46_color::{Rgb, blend, contrast_ratio};
use tracing::warn;

/// How many times the blend-factor search halves its interval. Twenty
/// halvings resolve `t` to ~1e-6, far below 8-bit channel quantization.
const SEARCH_ITERATIONS: u32 = 20;

/// Adjust `candidate` until `foreground` reads against it at `target`
/// contrast, deviating from `candidate` as little as possible.
///
/// Policy, in order:
///
/// 1. Candidate already meets the target — returned unchanged.
/// 2. Even `fallback` (the editor background) fails the target — the
///    target is unreachable along this line; `fallback` is returned as
///    the best available approximation. Never an error, never a loop.
/// 3. Otherwise binary-search the smallest blend factor `t` for which
///    `blend(candidate, fallback, t)` passes, and return that blend.
///
/// The search keeps the invariant that `low` fails the target and
/// `high` meets it; steps 1 and 2 establish it for `t = 0` / `t = 1`.
#[must_use]
pub fn adjust_background(candidate: Rgb, foreground: Rgb, fallback: Rgb, target: f64) -> Rgb {
    if contrast_ratio(candidate, foreground) >= target {
        return candidate;
    }

    if contrast_ratio(fallback, foreground) < target {
        warn!(
            %candidate,
            %fallback,
            target,
            "contrast target unreachable, using theme background"
        );
        return fallback;
    }

    let mut low = 0.0f64;
    let mut high = 1.0f64;
    for _ in 0..SEARCH_ITERATIONS {
        let mid = (low + high) / 2.0;
        if contrast_ratio(blend(candidate, fallback, mid), foreground) >= target {
            high = mid;
        } else {
            low = mid;
        }
    }

    blend(candidate, fallback, high)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
