mod frame;
mod null_renderer;

pub use frame::WheelFrame;
pub use null_renderer::NullRenderer;

use crate::error::WheelResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `WheelFrame` so
/// drawing code remains isolated from spin resolution and interaction
/// logic. The engine never animates; backends interpolate toward the
/// frame's rotation over the spin intent's duration.
pub trait Renderer {
    fn render(&mut self, frame: &WheelFrame) -> WheelResult<()>;
}
