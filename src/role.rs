//! The fixed set of color roles read out of every dynamic scheme.

use convert_case::{Case, Casing};
use material_colors::color::Argb;
use material_colors::dynamic_color::{DynamicScheme, MaterialDynamicColors};

/// A named color role of a Material dynamic scheme.
///
/// The variants are listed in the emission order of the generated CSS
/// blocks: surfaces first, then the primary/secondary/tertiary groups, the
/// error group, and finally the fixed variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Default background.
    Background,
    /// Text and icons against the background.
    OnBackground,
    /// Default surface for components.
    Surface,
    /// Dimmest surface in light mode.
    SurfaceDim,
    /// Brightest surface in dark mode.
    SurfaceBright,
    /// Lowest-emphasis container surface.
    SurfaceContainerLowest,
    /// Low-emphasis container surface.
    SurfaceContainerLow,
    /// Default container surface.
    SurfaceContainer,
    /// High-emphasis container surface.
    SurfaceContainerHigh,
    /// Highest-emphasis container surface.
    SurfaceContainerHighest,
    /// Text and icons against a surface.
    OnSurface,
    /// Alternate surface with some tint.
    SurfaceVariant,
    /// Lower-emphasis text against a surface.
    OnSurfaceVariant,
    /// Surface for inverted components.
    InverseSurface,
    /// Text and icons against an inverse surface.
    InverseOnSurface,
    /// Borders and dividers.
    Outline,
    /// Decorative borders.
    OutlineVariant,
    /// Shadow color.
    Shadow,
    /// Scrim color.
    Scrim,
    /// Elevation tint applied to surfaces.
    SurfaceTintColor,
    /// Primary accent.
    Primary,
    /// Text and icons against primary.
    OnPrimary,
    /// Container filled with primary.
    PrimaryContainer,
    /// Text and icons against a primary container.
    OnPrimaryContainer,
    /// Primary against an inverse surface.
    InversePrimary,
    /// Secondary accent.
    Secondary,
    /// Container filled with secondary.
    SecondaryContainer,
    /// Text and icons against a secondary container.
    OnSecondaryContainer,
    /// Tertiary accent.
    Tertiary,
    /// Text and icons against tertiary.
    OnTertiary,
    /// Container filled with tertiary.
    TertiaryContainer,
    /// Text and icons against a tertiary container.
    OnTertiaryContainer,
    /// Error accent.
    Error,
    /// Text and icons against error.
    OnError,
    /// Container filled with error.
    ErrorContainer,
    /// Text and icons against an error container.
    OnErrorContainer,
    /// Primary that keeps the same tone in both modes.
    PrimaryFixed,
    /// Dimmer fixed primary.
    PrimaryFixedDim,
    /// Text and icons against fixed primary.
    OnPrimaryFixed,
    /// Lower-emphasis text against fixed primary.
    OnPrimaryFixedVariant,
    /// Secondary that keeps the same tone in both modes.
    SecondaryFixed,
    /// Dimmer fixed secondary.
    SecondaryFixedDim,
    /// Text and icons against fixed secondary.
    OnSecondaryFixed,
    /// Lower-emphasis text against fixed secondary.
    OnSecondaryFixedVariant,
    /// Tertiary that keeps the same tone in both modes.
    TertiaryFixed,
    /// Dimmer fixed tertiary.
    TertiaryFixedDim,
    /// Text and icons against fixed tertiary.
    OnTertiaryFixed,
    /// Lower-emphasis text against fixed tertiary.
    OnTertiaryFixedVariant,
}

impl Role {
    /// All roles, in emission order.
    pub const ALL: [Role; 48] = [
        Role::Background,
        Role::OnBackground,
        Role::Surface,
        Role::SurfaceDim,
        Role::SurfaceBright,
        Role::SurfaceContainerLowest,
        Role::SurfaceContainerLow,
        Role::SurfaceContainer,
        Role::SurfaceContainerHigh,
        Role::SurfaceContainerHighest,
        Role::OnSurface,
        Role::SurfaceVariant,
        Role::OnSurfaceVariant,
        Role::InverseSurface,
        Role::InverseOnSurface,
        Role::Outline,
        Role::OutlineVariant,
        Role::Shadow,
        Role::Scrim,
        Role::SurfaceTintColor,
        Role::Primary,
        Role::OnPrimary,
        Role::PrimaryContainer,
        Role::OnPrimaryContainer,
        Role::InversePrimary,
        Role::Secondary,
        Role::SecondaryContainer,
        Role::OnSecondaryContainer,
        Role::Tertiary,
        Role::OnTertiary,
        Role::TertiaryContainer,
        Role::OnTertiaryContainer,
        Role::Error,
        Role::OnError,
        Role::ErrorContainer,
        Role::OnErrorContainer,
        Role::PrimaryFixed,
        Role::PrimaryFixedDim,
        Role::OnPrimaryFixed,
        Role::OnPrimaryFixedVariant,
        Role::SecondaryFixed,
        Role::SecondaryFixedDim,
        Role::OnSecondaryFixed,
        Role::OnSecondaryFixedVariant,
        Role::TertiaryFixed,
        Role::TertiaryFixedDim,
        Role::OnTertiaryFixed,
        Role::OnTertiaryFixedVariant,
    ];

    /// The role's semantic name, spelled the way the scheme vocabulary
    /// spells it.
    pub fn name(&self) -> &'static str {
        match self {
            Role::Background => "background",
            Role::OnBackground => "onBackground",
            Role::Surface => "surface",
            Role::SurfaceDim => "surfaceDim",
            Role::SurfaceBright => "surfaceBright",
            Role::SurfaceContainerLowest => "surfaceContainerLowest",
            Role::SurfaceContainerLow => "surfaceContainerLow",
            Role::SurfaceContainer => "surfaceContainer",
            Role::SurfaceContainerHigh => "surfaceContainerHigh",
            Role::SurfaceContainerHighest => "surfaceContainerHighest",
            Role::OnSurface => "onSurface",
            Role::SurfaceVariant => "surfaceVariant",
            Role::OnSurfaceVariant => "onSurfaceVariant",
            Role::InverseSurface => "inverseSurface",
            Role::InverseOnSurface => "inverseOnSurface",
            Role::Outline => "outline",
            Role::OutlineVariant => "outlineVariant",
            Role::Shadow => "shadow",
            Role::Scrim => "scrim",
            Role::SurfaceTintColor => "surfaceTintColor",
            Role::Primary => "primary",
            Role::OnPrimary => "onPrimary",
            Role::PrimaryContainer => "primaryContainer",
            Role::OnPrimaryContainer => "onPrimaryContainer",
            Role::InversePrimary => "inversePrimary",
            Role::Secondary => "secondary",
            Role::SecondaryContainer => "secondaryContainer",
            Role::OnSecondaryContainer => "onSecondaryContainer",
            Role::Tertiary => "tertiary",
            Role::OnTertiary => "onTertiary",
            Role::TertiaryContainer => "tertiaryContainer",
            Role::OnTertiaryContainer => "onTertiaryContainer",
            Role::Error => "error",
            Role::OnError => "onError",
            Role::ErrorContainer => "errorContainer",
            Role::OnErrorContainer => "onErrorContainer",
            Role::PrimaryFixed => "primaryFixed",
            Role::PrimaryFixedDim => "primaryFixedDim",
            Role::OnPrimaryFixed => "onPrimaryFixed",
            Role::OnPrimaryFixedVariant => "onPrimaryFixedVariant",
            Role::SecondaryFixed => "secondaryFixed",
            Role::SecondaryFixedDim => "secondaryFixedDim",
            Role::OnSecondaryFixed => "onSecondaryFixed",
            Role::OnSecondaryFixedVariant => "onSecondaryFixedVariant",
            Role::TertiaryFixed => "tertiaryFixed",
            Role::TertiaryFixedDim => "tertiaryFixedDim",
            Role::OnTertiaryFixed => "onTertiaryFixed",
            Role::OnTertiaryFixedVariant => "onTertiaryFixedVariant",
        }
    }

    /// The role's name as a kebab-case CSS token.
    pub fn token(&self) -> String {
        self.name().to_case(Case::Kebab)
    }

    /// Fetch this role's color from the given scheme.
    ///
    /// The `surfaceTintColor` role reads the scheme's surface tint; the
    /// emitted variable keeps the longer name.
    pub fn resolve(&self, scheme: &DynamicScheme) -> Argb {
        // `get_argb` caches on the dynamic color, so the binding is mutable.
        let mut color = match self {
            Role::Background => MaterialDynamicColors::background(),
            Role::OnBackground => MaterialDynamicColors::on_background(),
            Role::Surface => MaterialDynamicColors::surface(),
            Role::SurfaceDim => MaterialDynamicColors::surface_dim(),
            Role::SurfaceBright => MaterialDynamicColors::surface_bright(),
            Role::SurfaceContainerLowest => MaterialDynamicColors::surface_container_lowest(),
            Role::SurfaceContainerLow => MaterialDynamicColors::surface_container_low(),
            Role::SurfaceContainer => MaterialDynamicColors::surface_container(),
            Role::SurfaceContainerHigh => MaterialDynamicColors::surface_container_high(),
            Role::SurfaceContainerHighest => MaterialDynamicColors::surface_container_highest(),
            Role::OnSurface => MaterialDynamicColors::on_surface(),
            Role::SurfaceVariant => MaterialDynamicColors::surface_variant(),
            Role::OnSurfaceVariant => MaterialDynamicColors::on_surface_variant(),
            Role::InverseSurface => MaterialDynamicColors::inverse_surface(),
            Role::InverseOnSurface => MaterialDynamicColors::inverse_on_surface(),
            Role::Outline => MaterialDynamicColors::outline(),
            Role::OutlineVariant => MaterialDynamicColors::outline_variant(),
            Role::Shadow => MaterialDynamicColors::shadow(),
            Role::Scrim => MaterialDynamicColors::scrim(),
            Role::SurfaceTintColor => MaterialDynamicColors::surface_tint(),
            Role::Primary => MaterialDynamicColors::primary(),
            Role::OnPrimary => MaterialDynamicColors::on_primary(),
            Role::PrimaryContainer => MaterialDynamicColors::primary_container(),
            Role::OnPrimaryContainer => MaterialDynamicColors::on_primary_container(),
            Role::InversePrimary => MaterialDynamicColors::inverse_primary(),
            Role::Secondary => MaterialDynamicColors::secondary(),
            Role::SecondaryContainer => MaterialDynamicColors::secondary_container(),
            Role::OnSecondaryContainer => MaterialDynamicColors::on_secondary_container(),
            Role::Tertiary => MaterialDynamicColors::tertiary(),
            Role::OnTertiary => MaterialDynamicColors::on_tertiary(),
            Role::TertiaryContainer => MaterialDynamicColors::tertiary_container(),
            Role::OnTertiaryContainer => MaterialDynamicColors::on_tertiary_container(),
            Role::Error => MaterialDynamicColors::error(),
            Role::OnError => MaterialDynamicColors::on_error(),
            Role::ErrorContainer => MaterialDynamicColors::error_container(),
            Role::OnErrorContainer => MaterialDynamicColors::on_error_container(),
            Role::PrimaryFixed => MaterialDynamicColors::primary_fixed(),
            Role::PrimaryFixedDim => MaterialDynamicColors::primary_fixed_dim(),
            Role::OnPrimaryFixed => MaterialDynamicColors::on_primary_fixed(),
            Role::OnPrimaryFixedVariant => MaterialDynamicColors::on_primary_fixed_variant(),
            Role::SecondaryFixed => MaterialDynamicColors::secondary_fixed(),
            Role::SecondaryFixedDim => MaterialDynamicColors::secondary_fixed_dim(),
            Role::OnSecondaryFixed => MaterialDynamicColors::on_secondary_fixed(),
            Role::OnSecondaryFixedVariant => MaterialDynamicColors::on_secondary_fixed_variant(),
            Role::TertiaryFixed => MaterialDynamicColors::tertiary_fixed(),
            Role::TertiaryFixedDim => MaterialDynamicColors::tertiary_fixed_dim(),
            Role::OnTertiaryFixed => MaterialDynamicColors::on_tertiary_fixed(),
            Role::OnTertiaryFixedVariant => MaterialDynamicColors::on_tertiary_fixed_variant(),
        };
        color.get_argb(scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::hex;
    use crate::theme::SeedTheme;

    #[test]
    fn roles_are_listed_in_emission_order() {
        assert_eq!(Role::ALL.len(), 48);
        assert_eq!(Role::ALL[0], Role::Background);
        assert_eq!(Role::ALL[19], Role::SurfaceTintColor);
        assert_eq!(Role::ALL[47], Role::OnTertiaryFixedVariant);
    }

    #[test]
    fn tokens_are_kebab_case() {
        for role in Role::ALL {
            let token = role.token();
            assert!(!token.is_empty());
            assert!(!token.starts_with('-') && !token.ends_with('-'), "{token}");
            assert!(!token.contains("--"), "{token}");
            assert!(
                token.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
                "unexpected character in {token}"
            );
        }
    }

    #[test]
    fn surface_tint_resolves_through_the_scheme() {
        let theme = SeedTheme::new("#C09A76").unwrap();
        let tint = hex(Role::SurfaceTintColor.resolve(&theme.neutral_light));
        assert_eq!(tint, "#6e5b49");
    }

    #[test]
    fn token_spot_checks() {
        assert_eq!(Role::Background.token(), "background");
        assert_eq!(
            Role::SurfaceContainerLowest.token(),
            "surface-container-lowest"
        );
        assert_eq!(Role::SurfaceTintColor.token(), "surface-tint-color");
        assert_eq!(
            Role::OnPrimaryFixedVariant.token(),
            "on-primary-fixed-variant"
        );
    }
}
