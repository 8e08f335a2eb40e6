//! Built-in palettes

mod tinct;

pub use tinct::{TinctTheme, SKY, SLATE};
