//! Colors of the game screen.
//!
//! Colors are kept as RGB triples so alpha can be blended against the
//! background before handing a [`Color`] to ratatui.

use ratatui::style::Color;

/// An RGB triple.
pub type Rgb = (u8, u8, u8);

/// Screen background.
pub const BACKGROUND: Rgb = (18, 18, 26);
/// Cell borders.
pub const GRID: Rgb = (80, 80, 104);
/// Border of the cell under the keyboard cursor.
pub const CURSOR: Rgb = (230, 196, 84);
/// The X glyph.
pub const CROSS: Rgb = (86, 164, 255);
/// The O glyph.
pub const CIRCLE: Rgb = (255, 104, 104);
/// Result text.
pub const RESULT: Rgb = (244, 244, 244);
/// Header and footer text.
pub const MUTED: Rgb = (140, 140, 160);
/// Color the dimmer darkens toward.
pub const DIM: Rgb = (0, 0, 0);
/// Strength of the dimmer at full alpha.
pub const DIM_STRENGTH: f32 = 0.6;

/// Converts a triple to a ratatui color.
pub fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

/// Mixes `fg` over `bg` with the given alpha.
pub fn blend(fg: Rgb, bg: Rgb, alpha: f32) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (b as f32 + (f as f32 - b as f32) * a).round() as u8;
    Color::Rgb(mix(fg.0, bg.0), mix(fg.1, bg.1), mix(fg.2, bg.2))
}

/// Extracts the triple of an RGB color, falling back to `fallback`.
pub fn to_rgb(color: Color, fallback: Rgb) -> Rgb {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => fallback,
    }
}
