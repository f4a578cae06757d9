pub mod angle;
pub mod layout;
pub mod random;
pub mod rotation;
pub mod segment;

pub use angle::{FULL_TURN_DEG, center_angle_deg, normalize_deg, segment_angle_deg};
pub use layout::{ContentPlacement, SegmentArc, WheelLayout, compute_layout};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use rotation::{SpinPlan, plan_spin};
pub use segment::{DisplayContent, Segment, enabled_segments};
