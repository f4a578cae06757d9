use serde::{Deserialize, Serialize};

/// Which visual content a segment shows at its center angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayContent {
    Text,
    Image,
    Both,
}

/// One selectable wedge of the wheel.
///
/// `color` is an opaque color encoding owned by the host (hex string, CSS
/// color, theme token); the engine never validates or interprets it.
/// Label uniqueness is enforced by the configuration store, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub label: String,
    pub color: String,
    #[serde(default)]
    pub image: Option<String>,
    pub display: DisplayContent,
    pub enabled: bool,
}

impl Segment {
    #[must_use]
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            image: None,
            display: DisplayContent::Text,
            enabled: true,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>, display: DisplayContent) -> Self {
        self.image = Some(image.into());
        self.display = display;
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Iterator over the working set: only enabled segments take part in
/// layout and spin resolution.
pub fn enabled_segments(segments: &[Segment]) -> impl Iterator<Item = &Segment> {
    segments.iter().filter(|segment| segment.enabled)
}

#[cfg(test)]
mod tests {
    use super::{Segment, enabled_segments};

    #[test]
    fn enabled_filter_skips_disabled_segments() {
        let segments = vec![
            Segment::new("a", "#3066be"),
            Segment::new("b", "#119da4").disabled(),
            Segment::new("c", "#6d9dc5"),
        ];
        let labels: Vec<&str> = enabled_segments(&segments)
            .map(|segment| segment.label.as_str())
            .collect();
        assert_eq!(labels, ["a", "c"]);
    }
}
