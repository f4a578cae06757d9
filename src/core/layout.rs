use smallvec::SmallVec;

use crate::core::angle::{center_angle_deg, segment_angle_deg};
use crate::core::segment::{DisplayContent, Segment, enabled_segments};

/// Typical wheels carry a handful of segments; keep per-frame layout
/// output off the heap for those.
const INLINE_SEGMENTS: usize = 12;

/// One `(color, start, end)` triple of the circular partition, measured
/// clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentArc {
    pub color: String,
    pub start_deg: f64,
    pub end_deg: f64,
}

/// Where and what to place at a segment's center angle.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentPlacement {
    pub label: String,
    pub image: Option<String>,
    pub display: DisplayContent,
    pub center_deg: f64,
}

/// Angular partition of the wheel for one render pass.
///
/// Arcs and placements are derived from the same `segment_angle_deg`, so
/// the visible partition boundaries and the content positions cannot
/// desynchronize. An empty layout (no enabled segments) carries no arcs
/// and stands for a uniform neutral fill; rendering it is the host's
/// empty-state concern, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelLayout {
    segment_angle_deg: f64,
    arcs: SmallVec<[SegmentArc; INLINE_SEGMENTS]>,
    placements: SmallVec<[ContentPlacement; INLINE_SEGMENTS]>,
}

impl WheelLayout {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            segment_angle_deg: 0.0,
            arcs: SmallVec::new(),
            placements: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.arcs.len()
    }

    /// Span of one arc; `0.0` for the empty layout.
    #[must_use]
    pub fn segment_angle_deg(&self) -> f64 {
        self.segment_angle_deg
    }

    #[must_use]
    pub fn arcs(&self) -> &[SegmentArc] {
        &self.arcs
    }

    #[must_use]
    pub fn placements(&self) -> &[ContentPlacement] {
        &self.placements
    }
}

/// Maps the enabled subset of `segments`, in input order, onto the circle.
///
/// Disabled segments are filtered here so callers can hand over their
/// stored list as-is. Pure and deterministic; safe to call on every
/// render tick.
#[must_use]
pub fn compute_layout(segments: &[Segment]) -> WheelLayout {
    let enabled: SmallVec<[&Segment; INLINE_SEGMENTS]> = enabled_segments(segments).collect();
    if enabled.is_empty() {
        return WheelLayout::empty();
    }

    let count = enabled.len();
    let segment_angle = segment_angle_deg(count);

    let mut arcs = SmallVec::with_capacity(count);
    let mut placements = SmallVec::with_capacity(count);
    for (index, segment) in enabled.iter().enumerate() {
        arcs.push(SegmentArc {
            color: segment.color.clone(),
            start_deg: index as f64 * segment_angle,
            end_deg: (index + 1) as f64 * segment_angle,
        });
        placements.push(ContentPlacement {
            label: segment.label.clone(),
            image: segment.image.clone(),
            display: segment.display,
            center_deg: center_angle_deg(index, count),
        });
    }

    WheelLayout {
        segment_angle_deg: segment_angle,
        arcs,
        placements,
    }
}

#[cfg(test)]
mod tests {
    use super::compute_layout;
    use crate::core::segment::Segment;

    #[test]
    fn empty_input_yields_neutral_layout() {
        let layout = compute_layout(&[]);
        assert!(layout.is_empty());
        assert_eq!(layout.segment_count(), 0);
        assert_eq!(layout.segment_angle_deg(), 0.0);
    }

    #[test]
    fn single_segment_covers_the_full_circle() {
        let layout = compute_layout(&[Segment::new("only", "#3066be")]);
        assert_eq!(layout.segment_count(), 1);
        let arc = &layout.arcs()[0];
        assert!((arc.start_deg - 0.0).abs() <= 1e-12);
        assert!((arc.end_deg - 360.0).abs() <= 1e-12);
        assert!((layout.placements()[0].center_deg - 180.0).abs() <= 1e-12);
    }

    #[test]
    fn disabled_segments_do_not_occupy_arcs() {
        let segments = vec![
            Segment::new("a", "#3066be"),
            Segment::new("b", "#119da4").disabled(),
            Segment::new("c", "#6d9dc5"),
        ];
        let layout = compute_layout(&segments);
        assert_eq!(layout.segment_count(), 2);
        assert!((layout.segment_angle_deg() - 180.0).abs() <= 1e-12);
        assert_eq!(layout.placements()[1].label, "c");
    }
}
