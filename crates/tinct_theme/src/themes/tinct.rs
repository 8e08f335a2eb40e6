//! Default Tinct palettes
//!
//! Sky-blue brand scale over slate neutrals. The dark palette mirrors both
//! scales so `primary-500` keeps roughly the same intensity in either mode.
//! Status colors are shared between modes for recognition.

use tinct_core::Color;

use crate::tokens::{ColorScale, PaletteTokens};

/// Sky scale, 50..900
pub const SKY: [u32; 10] = [
    0xF0F9FF, 0xE0F2FE, 0xBAE6FD, 0x7DD3FC, 0x38BDF8, 0x0EA5E9, 0x0284C7, 0x0369A1, 0x075985,
    0x0C4A6E,
];

/// Slate scale, 50..900
pub const SLATE: [u32; 10] = [
    0xF8FAFC, 0xF1F5F9, 0xE2E8F0, 0xCBD5E1, 0x94A3B8, 0x64748B, 0x475569, 0x334155, 0x1E293B,
    0x0F172A,
];

const SUCCESS: u32 = 0x10B981;
const WARNING: u32 = 0xF59E0B;
const ERROR: u32 = 0xEF4444;

/// Default Tinct palettes
pub struct TinctTheme;

impl TinctTheme {
    /// Light palette
    pub fn light() -> PaletteTokens {
        PaletteTokens {
            primary: ColorScale::from_hex(SKY),
            neutral: ColorScale::from_hex(SLATE),
            success: Color::from_hex(SUCCESS),
            warning: Color::from_hex(WARNING),
            error: Color::from_hex(ERROR),
            background: Color::WHITE,
            surface: Color::from_hex(0xF8FAFC),
            text_primary: Color::from_hex(0x0F172A),
            text_secondary: Color::from_hex(0x475569),
            text_disabled: Color::from_hex(0x94A3B8),
        }
    }

    /// Dark palette
    pub fn dark() -> PaletteTokens {
        PaletteTokens {
            primary: ColorScale::from_hex(SKY).mirrored(),
            neutral: ColorScale::from_hex(SLATE).mirrored(),
            success: Color::from_hex(SUCCESS),
            warning: Color::from_hex(WARNING),
            error: Color::from_hex(ERROR),
            background: Color::from_hex(0x0F172A),
            surface: Color::from_hex(0x1E293B),
            text_primary: Color::from_hex(0xF1F5F9),
            text_secondary: Color::from_hex(0xCBD5E1),
            text_disabled: Color::from_hex(0x64748B),
        }
    }
}
