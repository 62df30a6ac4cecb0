use recall_core::model::Rating;

/// One rating button of the review surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatingButtonVm {
    pub rating: Rating,
    pub label: &'static str,
    pub class: &'static str,
}

/// The four rating buttons, in ascending recall-confidence order.
///
/// Again gets the danger accent and Good the primary accent; the other
/// two stay neutral.
#[must_use]
pub fn rating_buttons() -> [RatingButtonVm; 4] {
    [
        RatingButtonVm {
            rating: Rating::Again,
            label: "Again",
            class: "button small danger",
        },
        RatingButtonVm {
            rating: Rating::Hard,
            label: "Hard",
            class: "button small",
        },
        RatingButtonVm {
            rating: Rating::Good,
            label: "Good",
            class: "button small primary",
        },
        RatingButtonVm {
            rating: Rating::Easy,
            label: "Easy",
            class: "button small",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_follow_the_wire_order() {
        let values: Vec<u8> = rating_buttons()
            .iter()
            .map(|button| button.rating.value())
            .collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn accents_mark_the_failure_and_default_choices() {
        let buttons = rating_buttons();
        assert!(buttons[0].class.contains("danger"));
        assert!(buttons[2].class.contains("primary"));
        assert!(!buttons[1].class.contains("danger"));
        assert!(!buttons[3].class.contains("primary"));
    }
}
