pub mod editor_service;
pub mod export;
pub mod handlers;
pub mod session;
pub mod timecode;

pub use editor_service::{DEFAULT_SOURCE_DURATION_MS, EditorService};
pub use export::{RenderClip, RenderRequest};
pub use session::{EditOp, SessionScript};
