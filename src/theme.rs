//! A [`SeedTheme`] holds the dynamic schemes derived from one seed color.

use std::str::FromStr;

use material_colors::color::Argb;
use material_colors::dynamic_color::DynamicScheme;
use material_colors::hct::Hct;
use material_colors::scheme::variant::{SchemeNeutral, SchemeTonalSpot};

use crate::error::Error;

/// The schemes derived from a single seed color.
///
/// All four scheme variants (two algorithmic styles crossed with light and
/// dark mode) are precomputed at construction time; nothing is mutated
/// afterwards. The light CSS output reads from the neutral scheme, the dark
/// output from the tonal-spot scheme.
pub struct SeedTheme {
    /// The seed color as it was given.
    pub seed: String,
    /// The seed color as a packed ARGB pixel.
    pub seed_argb: Argb,
    /// The seed color in the HCT color space.
    pub source: Hct,
    /// Tonal-spot scheme, light mode.
    pub tonal_spot_light: DynamicScheme,
    /// Tonal-spot scheme, dark mode.
    pub tonal_spot_dark: DynamicScheme,
    /// Neutral scheme, light mode.
    pub neutral_light: DynamicScheme,
    /// Neutral scheme, dark mode.
    pub neutral_dark: DynamicScheme,
}

impl SeedTheme {
    /// Derive all schemes from the given seed color, e.g. `"#C09A76"`.
    ///
    /// Parsing the seed is the only fallible step; scheme derivation itself
    /// cannot fail.
    pub fn new(seed: &str) -> Result<Self, Error> {
        let seed_argb =
            Argb::from_str(seed).map_err(|_| Error::InvalidSeed(seed.to_string()))?;
        // Conversion goes through the `From<Argb>` impl; `Hct::from` names an
        // inherent constructor taking hue, chroma and tone.
        let source: Hct = seed_argb.into();
        Ok(Self {
            seed: seed.to_string(),
            seed_argb,
            source,
            tonal_spot_light: SchemeTonalSpot::new(source, false, None).scheme,
            tonal_spot_dark: SchemeTonalSpot::new(source, true, None).scheme,
            neutral_light: SchemeNeutral::new(source, false, None).scheme,
            neutral_dark: SchemeNeutral::new(source, true, None).scheme,
        })
    }
}
