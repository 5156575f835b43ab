//! Page-level metadata and the display font.

/// Title, description and icon for the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    pub title: &'static str,
    pub description: &'static str,
    /// Favicon path, relative to the assets directory
    pub icon: &'static str,
    pub lang: &'static str,
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self {
            title: "Do Minh Quang",
            description: "Trang bio cá nhân của DO MINH QUANG",
            icon: "img/logo.png",
            lang: "vi",
        }
    }
}

/// A variable-weight web font exposed to descendants as a CSS variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub family: &'static str,
    /// CSS custom property name, including the leading `--`
    pub variable: &'static str,
    pub weights: &'static [u16],
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Outfit",
            variable: "--font-outfit",
            weights: &[300, 400, 500, 600, 700],
        }
    }
}

impl FontSpec {
    /// Google Fonts CSS2 stylesheet URL for this family and weights.
    pub fn stylesheet_href(&self) -> String {
        let weights = self
            .weights
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(";");
        format!(
            "https://fonts.googleapis.com/css2?family={}:wght@{}&display=swap",
            self.family.replace(' ', "+"),
            weights
        )
    }

    /// Declaration binding the CSS variable to the family.
    pub fn css_variable(&self) -> String {
        format!("{}: '{}', sans-serif;", self.variable, self.family)
    }
}
