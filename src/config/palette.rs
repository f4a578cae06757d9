use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{WheelError, WheelResult};

/// Named list of segment fill colors, applied cyclically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    pub colors: Vec<String>,
}

impl Palette {
    pub fn new(name: impl Into<String>, colors: Vec<String>) -> WheelResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(WheelError::InvalidData(
                "palette name must not be empty".to_owned(),
            ));
        }
        if colors.is_empty() {
            return Err(WheelError::InvalidData(
                "palette must contain at least one color".to_owned(),
            ));
        }
        Ok(Self { name, colors })
    }

    /// Color for the segment at `index`, wrapping around the palette.
    #[must_use]
    pub fn color_for(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }
}

fn palette(name: &str, colors: &[&str]) -> Palette {
    Palette {
        name: name.to_owned(),
        colors: colors.iter().map(|&color| color.to_owned()).collect(),
    }
}

/// Built-in palettes shipped with every profile. Insertion order is
/// presentation order.
#[must_use]
pub fn builtin_palettes() -> IndexMap<String, Palette> {
    [
        palette(
            "Ocean",
            &["#3066BE", "#119DA4", "#6D9DC5", "#80DED9", "#AEECEF"],
        ),
        palette(
            "Fire",
            &["#FF6B35", "#F7931E", "#FFD23F", "#FF8C42", "#FF6B35"],
        ),
        palette(
            "Pastel",
            &["#FFB3BA", "#FFDFBA", "#FFFFBA", "#BAFFBA", "#BAE1FF"],
        ),
        palette(
            "Forest",
            &["#2D5016", "#4A7C59", "#7CB342", "#AED581", "#DCEDC8"],
        ),
        palette(
            "Sunset",
            &["#FF6B6B", "#FFE66D", "#FF8E53", "#FF6B9D", "#C06C84"],
        ),
    ]
    .into_iter()
    .map(|palette| (palette.name.clone(), palette))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::{Palette, builtin_palettes};

    #[test]
    fn builtin_registry_keeps_presentation_order() {
        let palettes = builtin_palettes();
        let names: Vec<&str> = palettes.keys().map(String::as_str).collect();
        assert_eq!(names, ["Ocean", "Fire", "Pastel", "Forest", "Sunset"]);
    }

    #[test]
    fn color_for_wraps_around() {
        let palette = Palette::new("Duo", vec!["#111111".into(), "#222222".into()]).expect("valid");
        assert_eq!(palette.color_for(0), "#111111");
        assert_eq!(palette.color_for(3), "#222222");
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(Palette::new("Empty", Vec::new()).is_err());
        assert!(Palette::new("", vec!["#000000".into()]).is_err());
    }
}
