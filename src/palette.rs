//! Reading the full role palette out of one dynamic scheme.

use material_colors::color::Argb;
use material_colors::dynamic_color::DynamicScheme;

use crate::role::Role;

/// Prefix shared by every emitted CSS custom property.
pub const PREFIX: &str = "--md-sys-color-";

/// Format a packed ARGB color as a lowercase 6-digit CSS hex color.
///
/// The alpha channel is dropped; every scheme color is fully opaque.
pub fn hex(color: Argb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// An ordered mapping from CSS custom-property names to hex color values,
/// read out of a single dynamic scheme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<(String, String)>,
}

impl Palette {
    /// Read every [`Role`] out of the given scheme, in emission order,
    /// renaming each role to `--md-sys-color-<kebab-case-name>`.
    pub fn from_scheme(scheme: &DynamicScheme) -> Self {
        let entries = Role::ALL
            .iter()
            .map(|role| {
                let property = format!("{PREFIX}{}", role.token());
                (property, hex(role.resolve(scheme)))
            })
            .collect();
        Self { entries }
    }

    /// The `(property, value)` pairs in emission order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::SeedTheme;

    #[test]
    fn hex_drops_alpha_and_is_lowercase() {
        assert_eq!(hex(Argb::new(0xff, 0x12, 0xab, 0x05)), "#12ab05");
        assert_eq!(hex(Argb::new(0x00, 0xc0, 0x9a, 0x76)), "#c09a76");
        assert_eq!(hex(Argb::new(0xff, 0x00, 0x00, 0x00)), "#000000");
    }

    #[test]
    fn entries_are_prefixed_hex_pairs() {
        let theme = SeedTheme::new("#C09A76").unwrap();
        let palette = Palette::from_scheme(&theme.neutral_light);
        assert_eq!(palette.entries().len(), Role::ALL.len());
        for (property, value) in palette.entries() {
            assert!(property.starts_with(PREFIX), "{property}");
            assert_eq!(value.len(), 7, "{value}");
            assert!(value.starts_with('#'), "{value}");
            assert!(
                value[1..]
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
                "{value}"
            );
        }
    }

    #[test]
    fn first_and_last_entries_follow_role_order() {
        let theme = SeedTheme::new("#785a0b").unwrap();
        let palette = Palette::from_scheme(&theme.tonal_spot_dark);
        let entries = palette.entries();
        assert_eq!(entries[0].0, "--md-sys-color-background");
        assert_eq!(
            entries[entries.len() - 1].0,
            "--md-sys-color-on-tertiary-fixed-variant"
        );
    }
}
