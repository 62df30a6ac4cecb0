use crate::practice::PracticeRun;

/// Top-level switch between the live review surface and a practice run.
///
/// The two modes are mutually exclusive by construction: entering
/// practice carries the frozen run with it, and leaving practice returns
/// to review. There is no state in which both could be active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StudyMode {
    #[default]
    Review,
    Practice(PracticeRun),
}

impl StudyMode {
    #[must_use]
    pub fn is_practice(&self) -> bool {
        matches!(self, Self::Practice(_))
    }

    /// Discard any practice run and return to the live review surface.
    ///
    /// No server-side schedule state is touched.
    pub fn exit_practice(&mut self) {
        *self = Self::Review;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::PracticeRun;
    use recall_core::model::{CardId, DeckId, StudyCard};

    #[test]
    fn exit_discards_the_run() {
        let run = PracticeRun::new(
            "Deck".to_string(),
            vec![StudyCard {
                card_id: CardId::new(1),
                deck_id: DeckId::new(1),
                front: "Q".to_string(),
                back: "A".to_string(),
            }],
        )
        .unwrap();

        let mut mode = StudyMode::Practice(run);
        assert!(mode.is_practice());
        mode.exit_practice();
        assert_eq!(mode, StudyMode::Review);
    }
}
