use dioxus::prelude::*;

use recall_core::model::{
    Deck, DeckId, PracticePool, Rating, PRACTICE_LIMIT_MAX, PRACTICE_LIMIT_MIN,
};
use services::{PracticeConfig, PracticeSession, ReviewPhase, ReviewSession, StudyMode};

use crate::context::AppContext;
use crate::vm::{card_html, pool_label, progress_label, rating_buttons};

/// The study surface: the live review loop, with practice mode layered on
/// top as an exclusive alternative.
#[component]
pub fn StudyView() -> Element {
    let ctx = use_context::<AppContext>();

    // Controllers are taken out of their signal for the duration of an
    // async call and put back afterwards, so no two remote operations on
    // the same controller can overlap. An empty signal renders as loading.
    let review = use_signal(|| Some(ReviewSession::new()));
    let practice = use_signal(|| Some(PracticeSession::new()));
    let mode = use_signal(StudyMode::default);
    let show_config = use_signal(|| false);
    // Last known due count, kept readable while the session is in flight.
    let due_count = use_signal(|| None::<u32>);

    // First due-count snapshot on mount. Nothing is fetched beyond the
    // summary until the user starts a pass.
    {
        let service = ctx.card_service();
        use_future(move || {
            let service = service.clone();
            let mut review = review;
            let mut due_count = due_count;
            async move {
                let Some(mut session) = review.write().take() else {
                    return;
                };
                session.refresh_summary(service.as_ref()).await;
                due_count.set(session.due_count());
                review.write().replace(session);
            }
        });
    }

    let load_next = {
        let service = ctx.card_service();
        use_callback(move |()| {
            let service = service.clone();
            let mut review = review;
            let mut due_count = due_count;
            spawn(async move {
                let Some(mut session) = review.write().take() else {
                    return;
                };
                session.load_next_card(service.as_ref()).await;
                due_count.set(session.due_count());
                review.write().replace(session);
            });
        })
    };

    let reveal = use_callback(move |()| {
        let mut review = review;
        if let Some(session) = review.write().as_mut() {
            session.reveal();
        }
    });

    let submit_rating = {
        let service = ctx.card_service();
        use_callback(move |rating: Rating| {
            let service = service.clone();
            let mut review = review;
            let mut due_count = due_count;
            spawn(async move {
                let Some(mut session) = review.write().take() else {
                    return;
                };
                session.submit_rating(service.as_ref(), rating).await;
                due_count.set(session.due_count());
                review.write().replace(session);
            });
        })
    };

    let dismiss_notice = use_callback(move |()| {
        let mut review = review;
        if let Some(session) = review.write().as_mut() {
            session.dismiss_notice();
        }
    });

    let open_config = {
        let service = ctx.card_service();
        use_callback(move |()| {
            let mut show_config = show_config;
            show_config.set(true);
            let service = service.clone();
            let mut practice = practice;
            spawn(async move {
                let Some(mut session) = practice.write().take() else {
                    return;
                };
                session.open(service.as_ref()).await;
                practice.write().replace(session);
            });
        })
    };

    let select_practice_deck = use_callback(move |deck_id: Option<DeckId>| {
        let mut practice = practice;
        if let Some(session) = practice.write().as_mut() {
            session.select_deck(deck_id);
        }
    });

    let select_practice_pool = use_callback(move |pool: PracticePool| {
        let mut practice = practice;
        if let Some(session) = practice.write().as_mut() {
            session.select_pool(pool);
        }
    });

    let set_practice_limit = use_callback(move |limit: u32| {
        let mut practice = practice;
        if let Some(session) = practice.write().as_mut() {
            session.set_limit(limit);
        }
    });

    let dismiss_practice_error = use_callback(move |()| {
        let mut practice = practice;
        if let Some(session) = practice.write().as_mut() {
            session.dismiss_error();
        }
    });

    let cancel_config = use_callback(move |()| {
        let mut show_config = show_config;
        show_config.set(false);
    });

    let start_practice = {
        let service = ctx.card_service();
        use_callback(move |()| {
            let service = service.clone();
            let mut practice = practice;
            let mut mode = mode;
            let mut show_config = show_config;
            spawn(async move {
                let Some(mut session) = practice.write().take() else {
                    return;
                };
                let run = session.start(service.as_ref()).await;
                practice.write().replace(session);
                if let Some(run) = run {
                    mode.set(StudyMode::Practice(run));
                    show_config.set(false);
                }
            });
        })
    };

    let practice_reveal = use_callback(move |()| {
        let mut mode = mode;
        if let StudyMode::Practice(run) = &mut *mode.write() {
            run.reveal();
        }
    });

    let practice_advance = use_callback(move |()| {
        let mut mode = mode;
        if let StudyMode::Practice(run) = &mut *mode.write() {
            run.advance();
        }
    });

    let exit_practice = use_callback(move |()| {
        let mut mode = mode;
        mode.write().exit_practice();
    });

    // Practice mode replaces the review surface entirely while a run is
    // active.
    {
        let mode_guard = mode.read();
        if let StudyMode::Practice(run) = &*mode_guard {
            let deck_name = run.deck_name().to_string();
            let progress = progress_label(run);
            let finished = run.is_finished();
            let revealed = run.is_revealed();
            let front_html = run.current_card().map(|card| card_html(&card.front));
            let back_html = run.current_card().map(|card| card_html(&card.back));
            drop(mode_guard);
            return rsx! {
                PracticePanel {
                    deck_name,
                    progress,
                    finished,
                    revealed,
                    front_html,
                    back_html,
                    on_reveal: practice_reveal,
                    on_advance: practice_advance,
                    on_exit: exit_practice,
                }
            };
        }
    }

    let review_guard = review.read();
    let session = review_guard.as_ref();
    let busy = session.is_none();
    let phase = session.map(|session| session.phase().clone());
    let notice = session.and_then(|session| session.notice().map(str::to_string));
    let nothing_due = session.is_some_and(ReviewSession::nothing_due);
    drop(review_guard);

    let due_label = due_count().map_or_else(|| "loading...".to_string(), |count| count.to_string());
    let has_due = matches!(due_count(), Some(count) if count > 0);
    let has_card = matches!(&phase, Some(ReviewPhase::Presenting { .. }));
    let start_label = if has_card { "Next card" } else { "Start review" };

    let practice_guard = practice.read();
    let practice_session = practice_guard.as_ref();
    let practice_busy = practice_session.is_none();
    let practice_decks = practice_session.map(|session| session.decks().to_vec());
    let practice_config = practice_session.map(|session| *session.config());
    let practice_error =
        practice_session.and_then(|session| session.error().map(str::to_string));
    drop(practice_guard);

    rsx! {
        div { class: "page",
            div { class: "card",
                h2 { "Today" }
                p {
                    "Due cards: "
                    strong { "{due_label}" }
                }
                div { class: "button-row",
                    button {
                        class: "button primary",
                        disabled: busy,
                        onclick: move |_| load_next.call(()),
                        "{start_label}"
                    }
                    button {
                        class: "button",
                        disabled: busy,
                        onclick: move |_| open_config.call(()),
                        "Practice a deck"
                    }
                }

                if let Some(notice) = notice {
                    p { class: "error-text",
                        "{notice} "
                        button {
                            class: "button small",
                            onclick: move |_| dismiss_notice.call(()),
                            "Dismiss"
                        }
                    }
                }

                match phase {
                    None | Some(ReviewPhase::Loading) => rsx! {
                        p { "Loading card..." }
                    },
                    Some(ReviewPhase::Idle) => rsx! {
                        if nothing_due {
                            p { "Nothing due right now. You are done for today." }
                        } else if has_due {
                            p { "Click “Start review” to begin." }
                        }
                    },
                    Some(ReviewPhase::Failed { message }) => rsx! {
                        p { class: "error-text", "{message}" }
                    },
                    Some(ReviewPhase::Presenting { card, revealed }) => {
                        let front_html = card_html(&card.front);
                        let back_html = revealed.then(|| card_html(&card.back));
                        rsx! {
                            CardPanel {
                                deck_id: card.deck_id.value(),
                                card_id: card.card_id.value(),
                                front_html,
                                back_html,
                            }
                            if revealed {
                                RatingButtons { on_rate: submit_rating }
                            } else {
                                div { class: "button-row",
                                    button {
                                        class: "button primary",
                                        onclick: move |_| reveal.call(()),
                                        "Show answer"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if show_config() {
                PracticeConfigModal {
                    decks: practice_decks.unwrap_or_default(),
                    config: practice_config.unwrap_or_default(),
                    error: practice_error,
                    busy: practice_busy,
                    on_select_deck: select_practice_deck,
                    on_select_pool: select_practice_pool,
                    on_limit: set_practice_limit,
                    on_dismiss_error: dismiss_practice_error,
                    on_cancel: cancel_config,
                    on_start: start_practice,
                }
            }
        }
    }
}

#[component]
fn CardPanel(
    deck_id: u64,
    card_id: u64,
    front_html: String,
    back_html: Option<String>,
) -> Element {
    rsx! {
        div { class: "card-panel",
            div { class: "badge", "Deck {deck_id} · Card {card_id}" }
            h3 { "Front" }
            div { class: "card-text", dangerous_inner_html: "{front_html}" }
            if let Some(back_html) = back_html {
                h3 { "Back" }
                div { class: "card-text", dangerous_inner_html: "{back_html}" }
            }
        }
    }
}

#[component]
fn RatingButtons(on_rate: EventHandler<Rating>) -> Element {
    let buttons = rating_buttons().into_iter().map(|button| {
        rsx! {
            button {
                key: "{button.label}",
                class: "{button.class}",
                onclick: move |_| on_rate.call(button.rating),
                "{button.label}"
            }
        }
    });
    rsx! {
        p { class: "remember", "How well did you remember?" }
        div { class: "button-row",
            {buttons}
        }
    }
}

#[component]
fn PracticeConfigModal(
    decks: Vec<Deck>,
    config: PracticeConfig,
    error: Option<String>,
    busy: bool,
    on_select_deck: EventHandler<Option<DeckId>>,
    on_select_pool: EventHandler<PracticePool>,
    on_limit: EventHandler<u32>,
    on_dismiss_error: EventHandler<()>,
    on_cancel: EventHandler<()>,
    on_start: EventHandler<()>,
) -> Element {
    let selected_value = config
        .deck_id
        .map_or_else(String::new, |deck_id| deck_id.to_string());
    let deck_options = decks.iter().map(|deck| {
        rsx! {
            option { key: "{deck.id}", value: "{deck.id}", "{deck.name}" }
        }
    });
    let pool_options = PracticePool::ALL.into_iter().map(|pool| {
        rsx! {
            option { key: "{pool}", value: "{pool}", {pool_label(pool)} }
        }
    });
    let no_deck_selected = config.deck_id.is_none();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                h3 { "Practice session" }

                div { class: "field",
                    label { "Deck" }
                    select {
                        class: "input",
                        value: "{selected_value}",
                        onchange: move |evt| {
                            on_select_deck.call(evt.value().parse::<DeckId>().ok());
                        },
                        option { value: "", "Select deck..." }
                        {deck_options}
                    }
                }

                div { class: "field",
                    label { "Card pool" }
                    select {
                        class: "input",
                        value: "{config.pool}",
                        onchange: move |evt| {
                            if let Ok(pool) = evt.value().parse::<PracticePool>() {
                                on_select_pool.call(pool);
                            }
                        },
                        {pool_options}
                    }
                }

                div { class: "field",
                    label { "Number of cards" }
                    input {
                        r#type: "number",
                        class: "input",
                        min: "{PRACTICE_LIMIT_MIN}",
                        max: "{PRACTICE_LIMIT_MAX}",
                        value: "{config.limit}",
                        oninput: move |evt| {
                            if let Ok(limit) = evt.value().parse::<u32>() {
                                on_limit.call(limit);
                            }
                        },
                    }
                }

                if let Some(error) = error {
                    p { class: "error-text",
                        "{error} "
                        button {
                            class: "button small",
                            onclick: move |_| on_dismiss_error.call(()),
                            "Dismiss"
                        }
                    }
                }

                p { class: "hint",
                    "Practice mode does not change your spaced repetition schedule."
                }

                div { class: "button-row",
                    button {
                        class: "button small",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "button small primary",
                        disabled: busy || no_deck_selected,
                        onclick: move |_| on_start.call(()),
                        "Start practice"
                    }
                }
            }
        }
    }
}

#[component]
fn PracticePanel(
    deck_name: String,
    progress: String,
    finished: bool,
    revealed: bool,
    front_html: Option<String>,
    back_html: Option<String>,
    on_reveal: EventHandler<()>,
    on_advance: EventHandler<()>,
    on_exit: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "page",
            div { class: "card",
                h2 { "Practice: {deck_name}" }
                p { class: "badge", "{progress}" }
                if finished {
                    p { "Practice complete. Nice work." }
                    div { class: "button-row",
                        button {
                            class: "button primary",
                            onclick: move |_| on_exit.call(()),
                            "Back to review"
                        }
                    }
                } else {
                    if let Some(front_html) = front_html {
                        div { class: "card-panel",
                            h3 { "Front" }
                            div { class: "card-text", dangerous_inner_html: "{front_html}" }
                            if revealed {
                                if let Some(back_html) = back_html {
                                    h3 { "Back" }
                                    div { class: "card-text", dangerous_inner_html: "{back_html}" }
                                }
                            }
                        }
                    }
                    div { class: "button-row",
                        if revealed {
                            button {
                                class: "button primary",
                                onclick: move |_| on_advance.call(()),
                                "Next card"
                            }
                        } else {
                            button {
                                class: "button primary",
                                onclick: move |_| on_reveal.call(()),
                                "Show answer"
                            }
                        }
                        button {
                            class: "button",
                            onclick: move |_| on_exit.call(()),
                            "Exit practice"
                        }
                    }
                }
                p { class: "hint",
                    "Practice mode does not change your spaced repetition schedule."
                }
            }
        }
    }
}
