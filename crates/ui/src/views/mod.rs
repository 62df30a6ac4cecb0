mod library;
mod study;

pub use library::LibraryView;
pub use study::StudyView;
