pub mod timeline_handler;

pub use timeline_handler::TimelineHandler;
