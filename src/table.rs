use comfy_table::presets;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Boxed cells, `=` rule under the header.
    #[default]
    Grid,
    /// Same cells without the outer border.
    Simple,
}

impl TableFormat {
    pub fn preset(self) -> &'static str {
        match self {
            TableFormat::Grid => presets::ASCII_FULL,
            TableFormat::Simple => presets::ASCII_NO_BORDERS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_differ() {
        assert_eq!(TableFormat::default(), TableFormat::Grid);
        assert_eq!(TableFormat::Grid.preset(), presets::ASCII_FULL);
        assert_ne!(TableFormat::Grid.preset(), TableFormat::Simple.preset());
    }
}
