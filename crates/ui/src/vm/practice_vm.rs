use recall_core::model::PracticePool;
use services::PracticeRun;

/// Form label for a practice pool option.
#[must_use]
pub fn pool_label(pool: PracticePool) -> &'static str {
    match pool {
        PracticePool::DueRecent => "Due + recent",
        PracticePool::All => "All cards in deck",
        PracticePool::NewOnly => "Only new cards",
    }
}

/// Progress line for the practice walkthrough.
#[must_use]
pub fn progress_label(run: &PracticeRun) -> String {
    format!("Card {} of {}", run.position(), run.total())
}
