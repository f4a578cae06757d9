mod observers;

pub use observers::{ObserverContext, WheelEvent, WheelObserver};
