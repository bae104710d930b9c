pub mod file;
pub mod traits;

// Re-export
pub use file::FileEventRepository;
pub use traits::EventRepository;
