use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::palette::{Palette, builtin_palettes};
use crate::core::segment::{Segment, enabled_segments};
use crate::error::{WheelError, WheelResult};

/// Pointer skin: either a solid color or an image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skin {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Skin {
    #[must_use]
    pub fn solid(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: Some(color.into()),
            image: None,
        }
    }

    #[must_use]
    pub fn image(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
            image: Some(image.into()),
        }
    }
}

/// User-owned wheel configuration: segments, palettes, skins and visual
/// preferences.
///
/// This is the configuration collaborator of the spin engine. It owns
/// label uniqueness and list ordering; the engine consumes a read-only
/// snapshot of `segments()`. Built-in palettes are not serialized, they
/// are reattached on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelProfile {
    segments: Vec<Segment>,
    #[serde(skip, default = "builtin_palettes")]
    builtin_palettes: IndexMap<String, Palette>,
    custom_palettes: IndexMap<String, Palette>,
    selected_palette: String,
    use_custom_colors: bool,
    skins: Vec<Skin>,
    active_skin_index: usize,
    pointer_rotation_deg: f64,
    background_color: String,
    custom_background_color: Option<String>,
}

impl Default for WheelProfile {
    fn default() -> Self {
        let builtins = builtin_palettes();
        let ocean = &builtins["Ocean"];
        let segments = ["North", "East", "South", "West"]
            .into_iter()
            .enumerate()
            .map(|(index, label)| Segment::new(label, ocean.color_for(index)))
            .collect();

        Self {
            segments,
            builtin_palettes: builtins,
            custom_palettes: IndexMap::new(),
            selected_palette: "Ocean".to_owned(),
            use_custom_colors: false,
            skins: vec![
                Skin::solid("Red", "#FF0000"),
                Skin::solid("Blue", "#3066BE"),
                Skin::solid("Teal", "#119DA4"),
                Skin::solid("Purple", "#AB87FF"),
            ],
            active_skin_index: 0,
            pointer_rotation_deg: 0.0,
            background_color: "#FAFAFA".to_owned(),
            custom_background_color: None,
        }
    }
}

impl WheelProfile {
    // --- segments ---

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The working set a spin engine should receive.
    pub fn enabled_segments(&self) -> impl Iterator<Item = &Segment> {
        enabled_segments(&self.segments)
    }

    #[must_use]
    pub fn enabled_segment_count(&self) -> usize {
        self.enabled_segments().count()
    }

    pub fn add_segment(&mut self, segment: Segment) -> WheelResult<()> {
        self.ensure_unique_label(&segment.label, None)?;
        debug!(label = %segment.label, "add segment");
        self.segments.push(segment);
        Ok(())
    }

    /// Removes the segment at `index`; `Ok(false)` when out of range.
    pub fn remove_segment(&mut self, index: usize) -> WheelResult<bool> {
        if index >= self.segments.len() {
            return Ok(false);
        }
        self.segments.remove(index);
        Ok(true)
    }

    /// Replaces the segment at `index` wholesale, keeping labels unique.
    pub fn replace_segment(&mut self, index: usize, segment: Segment) -> WheelResult<bool> {
        if index >= self.segments.len() {
            return Ok(false);
        }
        self.ensure_unique_label(&segment.label, Some(index))?;
        self.segments[index] = segment;
        Ok(true)
    }

    pub fn set_segment_enabled(&mut self, index: usize, enabled: bool) -> bool {
        match self.segments.get_mut(index) {
            Some(segment) => {
                segment.enabled = enabled;
                true
            }
            None => false,
        }
    }

    fn ensure_unique_label(&self, label: &str, skip_index: Option<usize>) -> WheelResult<()> {
        let collision = self
            .segments
            .iter()
            .enumerate()
            .any(|(index, segment)| Some(index) != skip_index && segment.label == label);
        if collision {
            return Err(WheelError::DuplicateLabel {
                label: label.to_owned(),
            });
        }
        Ok(())
    }

    // --- palettes ---

    /// Built-in palettes followed by custom ones, in insertion order.
    pub fn palettes(&self) -> impl Iterator<Item = &Palette> {
        self.builtin_palettes
            .values()
            .chain(self.custom_palettes.values())
    }

    #[must_use]
    pub fn palette(&self, name: &str) -> Option<&Palette> {
        self.builtin_palettes
            .get(name)
            .or_else(|| self.custom_palettes.get(name))
    }

    #[must_use]
    pub fn selected_palette(&self) -> &str {
        &self.selected_palette
    }

    #[must_use]
    pub fn use_custom_colors(&self) -> bool {
        self.use_custom_colors
    }

    pub fn set_use_custom_colors(&mut self, use_custom: bool) {
        self.use_custom_colors = use_custom;
    }

    pub fn add_custom_palette(&mut self, palette: Palette) -> WheelResult<()> {
        if palette.colors.is_empty() {
            return Err(WheelError::InvalidData(
                "palette must contain at least one color".to_owned(),
            ));
        }
        self.custom_palettes.insert(palette.name.clone(), palette);
        Ok(())
    }

    /// Removes a custom palette; built-ins cannot be removed.
    pub fn remove_custom_palette(&mut self, name: &str) -> bool {
        self.custom_palettes.shift_remove(name).is_some()
    }

    pub fn select_palette(&mut self, name: &str) -> WheelResult<()> {
        if self.palette(name).is_none() {
            return Err(WheelError::UnknownPalette {
                name: name.to_owned(),
            });
        }
        self.selected_palette = name.to_owned();
        Ok(())
    }

    /// Recolors every segment from the palette, cycling when the wheel has
    /// more segments than the palette has colors.
    pub fn apply_palette(&mut self, name: &str) -> WheelResult<()> {
        let palette = self
            .palette(name)
            .ok_or_else(|| WheelError::UnknownPalette {
                name: name.to_owned(),
            })?
            .clone();
        debug!(palette = %palette.name, segments = self.segments.len(), "apply palette");
        for (index, segment) in self.segments.iter_mut().enumerate() {
            segment.color = palette.color_for(index).to_owned();
        }
        self.selected_palette = palette.name;
        Ok(())
    }

    // --- skins & pointer ---

    #[must_use]
    pub fn skins(&self) -> &[Skin] {
        &self.skins
    }

    #[must_use]
    pub fn active_skin(&self) -> &Skin {
        &self.skins[self.active_skin_index]
    }

    pub fn add_skin(&mut self, skin: Skin) {
        self.skins.push(skin);
    }

    pub fn set_active_skin(&mut self, index: usize) -> WheelResult<()> {
        if index >= self.skins.len() {
            return Err(WheelError::InvalidData(format!(
                "skin index {index} out of range for {} skins",
                self.skins.len()
            )));
        }
        self.active_skin_index = index;
        Ok(())
    }

    #[must_use]
    pub fn pointer_rotation_deg(&self) -> f64 {
        self.pointer_rotation_deg
    }

    pub fn set_pointer_rotation_deg(&mut self, rotation_deg: f64) -> WheelResult<()> {
        if !rotation_deg.is_finite() {
            return Err(WheelError::InvalidData(
                "pointer rotation must be finite".to_owned(),
            ));
        }
        self.pointer_rotation_deg = rotation_deg;
        Ok(())
    }

    // --- background ---

    #[must_use]
    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    /// Custom override wins over the preset when present.
    #[must_use]
    pub fn effective_background_color(&self) -> &str {
        self.custom_background_color
            .as_deref()
            .unwrap_or(&self.background_color)
    }

    pub fn set_background_color(&mut self, color: impl Into<String>) {
        self.background_color = color.into();
    }

    pub fn set_custom_background_color(&mut self, color: Option<String>) {
        self.custom_background_color = color;
    }
}
