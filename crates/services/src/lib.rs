#![forbid(unsafe_code)]

pub mod error;
pub mod library;
pub mod practice;
pub mod review;
pub mod study;

pub use error::PracticeError;
pub use library::Library;
pub use practice::{PracticeConfig, PracticeRun, PracticeSession};
pub use review::{ReviewPhase, ReviewSession};
pub use study::StudyMode;
