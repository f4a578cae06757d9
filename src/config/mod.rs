mod document;
mod palette;
mod profile;

pub use document::{PROFILE_FORMAT_VERSION, ProfileDocument};
pub use palette::{Palette, builtin_palettes};
pub use profile::{Skin, WheelProfile};
