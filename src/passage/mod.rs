pub mod source;
pub mod typing;

pub use source::TextSource;
pub use typing::TypingTracker;
