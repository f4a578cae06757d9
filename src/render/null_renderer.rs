use crate::error::WheelResult;
use crate::render::{Renderer, WheelFrame};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_frame: Option<WheelFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &WheelFrame) -> WheelResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
