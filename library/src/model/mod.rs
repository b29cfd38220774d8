pub mod clip;
pub mod effect;
pub mod source;
pub mod timeline;

pub use clip::Clip;
pub use effect::{Effect, Transition};
pub use source::MediaRef;
pub use timeline::{Timeline, TimelineObserver};
