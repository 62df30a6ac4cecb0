use dioxus::prelude::*;

use recall_core::model::{Card, CardId, DeckId};
use services::Library;

use crate::context::AppContext;

/// Deck and card management: list, create and delete decks, list and
/// delete cards.
#[component]
pub fn LibraryView() -> Element {
    let ctx = use_context::<AppContext>();

    // Same take-out/put-back discipline as the study surface: the
    // controller leaves its signal while a remote call is in flight.
    let library = use_signal(|| Some(Library::new()));
    let mut new_deck_name = use_signal(String::new);

    {
        let service = ctx.card_service();
        use_future(move || {
            let service = service.clone();
            let mut library = library;
            async move {
                let Some(mut lib) = library.write().take() else {
                    return;
                };
                lib.load(service.as_ref()).await;
                library.write().replace(lib);
            }
        });
    }

    let select_deck = {
        let service = ctx.card_service();
        use_callback(move |deck_id: Option<DeckId>| {
            let service = service.clone();
            let mut library = library;
            spawn(async move {
                let Some(mut lib) = library.write().take() else {
                    return;
                };
                lib.select_deck(service.as_ref(), deck_id).await;
                library.write().replace(lib);
            });
        })
    };

    let create_deck = {
        let service = ctx.card_service();
        use_callback(move |()| {
            let service = service.clone();
            let mut library = library;
            let mut new_deck_name = new_deck_name;
            spawn(async move {
                let Some(mut lib) = library.write().take() else {
                    return;
                };
                lib.create_deck(service.as_ref(), &new_deck_name()).await;
                let created = lib.error().is_none();
                library.write().replace(lib);
                if created {
                    new_deck_name.set(String::new());
                }
            });
        })
    };

    let delete_deck = {
        let service = ctx.card_service();
        use_callback(move |()| {
            let service = service.clone();
            let mut library = library;
            spawn(async move {
                let Some(mut lib) = library.write().take() else {
                    return;
                };
                lib.delete_deck(service.as_ref()).await;
                library.write().replace(lib);
            });
        })
    };

    let delete_card = {
        let service = ctx.card_service();
        use_callback(move |card_id: CardId| {
            let service = service.clone();
            let mut library = library;
            spawn(async move {
                let Some(mut lib) = library.write().take() else {
                    return;
                };
                lib.delete_card(service.as_ref(), card_id).await;
                library.write().replace(lib);
            });
        })
    };

    let guard = library.read();
    let lib = guard.as_ref();
    let busy = lib.is_none();
    let decks = lib.map(|lib| lib.decks().to_vec()).unwrap_or_default();
    let selected = lib.and_then(Library::selected);
    let cards = lib.map(|lib| lib.cards().to_vec()).unwrap_or_default();
    let error = lib.and_then(|lib| lib.error().map(str::to_string));
    let message = lib.and_then(|lib| lib.message().map(str::to_string));
    drop(guard);

    let selected_value = selected.map_or_else(String::new, |deck_id| deck_id.to_string());
    let deck_options = decks.iter().map(|deck| {
        rsx! {
            option { key: "{deck.id}", value: "{deck.id}", "{deck.name}" }
        }
    });
    let card_rows = cards.iter().cloned().map(|card| {
        rsx! {
            CardRow { key: "{card.id}", card, on_delete: delete_card }
        }
    });
    let no_cards = !busy && cards.is_empty() && selected.is_some();

    rsx! {
        div { class: "page",
            div { class: "card",
                h2 { "Cards" }
                div { class: "library-controls",
                    div { class: "field",
                        label { "Deck" }
                        select {
                            class: "select",
                            value: "{selected_value}",
                            onchange: move |evt| {
                                select_deck.call(evt.value().parse::<DeckId>().ok());
                            },
                            option { value: "", "Select deck" }
                            {deck_options}
                        }
                    }
                    button {
                        class: "button small danger",
                        disabled: busy || selected.is_none(),
                        onclick: move |_| delete_deck.call(()),
                        "Delete deck"
                    }
                    div { class: "field",
                        label { "New deck" }
                        input {
                            r#type: "text",
                            class: "input",
                            placeholder: "Deck name",
                            value: "{new_deck_name()}",
                            oninput: move |evt| new_deck_name.set(evt.value()),
                        }
                    }
                    button {
                        class: "button small",
                        disabled: busy,
                        onclick: move |_| create_deck.call(()),
                        "Create deck"
                    }
                }

                if busy {
                    p { "Loading cards..." }
                }
                if let Some(error) = error {
                    p { class: "error-text", "{error}" }
                }
                if let Some(message) = message {
                    p { class: "message-text", "{message}" }
                }

                if no_cards {
                    p { "This deck currently has no cards." }
                }
                div { class: "list",
                    {card_rows}
                }
            }
        }
    }
}

#[component]
fn CardRow(card: Card, on_delete: EventHandler<CardId>) -> Element {
    let card_id = card.id;
    rsx! {
        div { class: "list-row",
            div { class: "list-row-header",
                span { class: "badge", "Card {card.id} · Deck {card.deck_id}" }
                button {
                    class: "button small danger",
                    onclick: move |_| on_delete.call(card_id),
                    "Delete"
                }
            }
            div { class: "list-row-text",
                strong { "Front: " }
                span { "{card.front}" }
            }
            div { class: "list-row-text",
                strong { "Back: " }
                span { "{card.back}" }
            }
        }
    }
}
