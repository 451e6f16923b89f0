// SPDX-License-Identifier: MIT
//
// b46-color — 24-bit sRGB color primitives for the base46 theme importer.
//
// Theme sources author colors as 6-digit hex values, so unlike a rendering
// pipeline there is no perceptual color space here: a color IS its three
// 8-bit channels, equality is bitwise, and all derived math (luminance,
// contrast, blending) happens on demand in f64.

//! 24-bit sRGB colors and the pure math the theme importer needs:
//! hex parsing, `u32` packing, WCAG relative luminance and contrast
//! ratio, and per-channel linear blending.

// Single-character variable names (r, g, b, t) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]

mod rgb;
mod srgb;

pub use rgb::Rgb;
pub use srgb::{blend, contrast_ratio, luminance, srgb_to_linear};
