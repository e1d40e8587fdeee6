//! Serializing palettes into CSS rule blocks.

use crate::palette::Palette;
use crate::theme::SeedTheme;

/// Selector of the light-mode rule block.
pub const LIGHT_SELECTOR: &str = ":root:not(.dark).light";

/// Selector of the dark-mode rule block.
pub const DARK_SELECTOR: &str = ":root.dark";

impl Palette {
    /// Serialize the palette as one CSS rule block under the given
    /// selector, one custom property declaration per line.
    pub fn to_css_rule(&self, selector: &str) -> String {
        let mut lines = Vec::with_capacity(self.entries().len() + 2);
        lines.push(format!("{selector} {{"));
        for (property, value) in self.entries() {
            lines.push(format!("  {property}: {value};"));
        }
        lines.push("}".to_string());
        lines.join("\n")
    }
}

impl SeedTheme {
    /// The light palette as a CSS rule block, read from the neutral scheme.
    pub fn light_css(&self) -> String {
        Palette::from_scheme(&self.neutral_light).to_css_rule(LIGHT_SELECTOR)
    }

    /// The dark palette as a CSS rule block, read from the tonal-spot
    /// scheme.
    pub fn dark_css(&self) -> String {
        Palette::from_scheme(&self.tonal_spot_dark).to_css_rule(DARK_SELECTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    #[test]
    fn blocks_open_with_the_exact_selectors() {
        let theme = SeedTheme::new("#C09A76").unwrap();
        let light = theme.light_css();
        let dark = theme.dark_css();
        assert!(light.starts_with(":root:not(.dark).light {\n"), "{light}");
        assert!(dark.starts_with(":root.dark {\n"), "{dark}");
        assert!(light.ends_with("\n}"));
        assert!(dark.ends_with("\n}"));
    }

    #[test]
    fn one_declaration_line_per_role() {
        let theme = SeedTheme::new("#C09A76").unwrap();
        let dark = theme.dark_css();
        assert_eq!(dark.lines().count(), Role::ALL.len() + 2);
        for line in dark.lines().skip(1).take(Role::ALL.len()) {
            assert!(line.starts_with("  --md-sys-color-"), "{line}");
            assert!(line.contains(": #"), "{line}");
            assert!(line.ends_with(';'), "{line}");
        }
    }

    #[test]
    fn output_is_deterministic_for_a_fixed_seed() {
        let a = SeedTheme::new("#785a0b").unwrap();
        let b = SeedTheme::new("#785a0b").unwrap();
        assert_eq!(a.light_css(), b.light_css());
        assert_eq!(a.dark_css(), b.dark_css());
    }

    #[test]
    fn light_and_dark_blocks_differ() {
        let theme = SeedTheme::new("#FF0000").unwrap();
        assert_ne!(theme.light_css(), theme.dark_css());
    }
}
