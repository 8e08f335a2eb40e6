//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the palette:
//! - Brand and neutral color scales
//! - Status colors
//! - Surface and text roles

mod color;

pub use color::*;
