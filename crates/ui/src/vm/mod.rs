mod card_vm;
mod practice_vm;
mod rating_vm;

pub use card_vm::{card_html, sanitize_html};
pub use practice_vm::{pool_label, progress_label};
pub use rating_vm::{RatingButtonVm, rating_buttons};
