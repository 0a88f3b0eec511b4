use serde::{Deserialize, Serialize};

/// One color treatment of a composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorVariant {
    /// Appended to the base file name, e.g. `"-white"`. Empty for the brand color.
    pub suffix: String,
    /// Fill value written into the markup.
    pub fill: String,
    pub description: String,
}

impl ColorVariant {
    pub fn new(suffix: &str, fill: &str, description: &str) -> Self {
        Self {
            suffix: suffix.to_string(),
            fill: fill.to_string(),
            description: description.to_string(),
        }
    }

    /// Brand color, white, black. The order is the emission order.
    pub fn standard_set() -> Vec<ColorVariant> {
        vec![
            ColorVariant::new("", "#556B2F", "Dark Olive"),
            ColorVariant::new("-white", "#FFFFFF", "White (for dark backgrounds)"),
            ColorVariant::new("-black", "#000000", "Black (for light backgrounds)"),
        ]
    }
}

/// A finished output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub filename: String,
    pub markup: String,
}

impl Artifact {
    pub fn new(filename: String, markup: String) -> Self {
        Self { filename, markup }
    }
}

/// Markup that can be rendered once per color variant.
pub trait VariantTemplate {
    type Error;

    /// File name without variant suffix or extension.
    fn base_name(&self) -> &str;

    fn extension(&self) -> &str {
        "svg"
    }

    fn render(&self, variant: &ColorVariant) -> Result<String, Self::Error>;

    fn filename(&self, variant: &ColorVariant) -> String {
        format!("{}{}.{}", self.base_name(), variant.suffix, self.extension())
    }
}

/// Renders `template` for every variant, preserving the order of `variants`.
pub fn expand<T: VariantTemplate>(
    template: &T,
    variants: &[ColorVariant],
) -> Result<Vec<Artifact>, T::Error> {
    variants
        .iter()
        .map(|variant| {
            let markup = template.render(variant)?;
            Ok(Artifact::new(template.filename(variant), markup))
        })
        .collect()
}
