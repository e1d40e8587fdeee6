//! mdtheme generates Material Design 3 CSS custom-property palettes from a
//! single seed color.
//!
//! All perceptual color math (HCT, tonal palettes, dynamic scheme
//! derivation) is delegated to the `material-colors` crate; this crate reads
//! the named color roles out of the derived schemes and formats them as CSS
//! rule blocks for light and dark mode.
//!
//! ```rust
//! use mdtheme::SeedTheme;
//!
//! let theme = SeedTheme::new("#C09A76").unwrap();
//! assert!(theme.light_css().starts_with(":root:not(.dark).light {"));
//! assert!(theme.dark_css().starts_with(":root.dark {"));
//! ```

#![deny(missing_docs)]

mod css;
mod error;
mod palette;
pub mod preview;
mod role;
mod theme;

pub use css::{DARK_SELECTOR, LIGHT_SELECTOR};
pub use error::Error;
pub use palette::{hex, Palette, PREFIX};
pub use role::Role;
pub use theme::SeedTheme;
