//! Rendering both palettes as an HTML preview fragment.

use crate::theme::SeedTheme;

/// Render the light and dark palettes as an HTML fragment.
///
/// The CSS text is placed literally inside a `white-space: pre-line` code
/// block so the rules stay readable when the fragment is viewed in a
/// browser.
pub fn render(theme: &SeedTheme) -> String {
    let parts = [
        "<h3>LIGHT PALETTE</h3>".to_string(),
        format!("<div>{}</div>", theme.light_css()),
        "<h3>DARK PALETTE</h3>".to_string(),
        format!("<div>{}</div>", theme.dark_css()),
    ];
    format!(
        "<code style=\"white-space: pre-line;\">{}</code>",
        parts.concat()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_contains_both_palettes() {
        let theme = SeedTheme::new("#C09A76").unwrap();
        let html = render(&theme);
        assert!(html.starts_with("<code style=\"white-space: pre-line;\">"));
        assert!(html.ends_with("</code>"));
        assert!(html.contains("<h3>LIGHT PALETTE</h3>"));
        assert!(html.contains("<h3>DARK PALETTE</h3>"));
        assert!(html.contains(&format!("<div>{}</div>", theme.light_css())));
        assert!(html.contains(&format!("<div>{}</div>", theme.dark_css())));
    }
}
