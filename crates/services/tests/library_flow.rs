use client::{CardService, InMemoryCardService};
use recall_core::model::DeckId;
use services::Library;

async fn seeded_service() -> InMemoryCardService {
    let service = InMemoryCardService::new();
    let algebra = service.create_deck("Algebra").await.unwrap();
    let zoology = service.create_deck("Zoology").await.unwrap();
    service.seed_due_card(algebra.id, "a+a", "2a").unwrap();
    service.seed_due_card(zoology.id, "cat", "felis").unwrap();
    service.seed_due_card(zoology.id, "dog", "canis").unwrap();
    service
}

#[tokio::test]
async fn load_selects_the_first_deck_and_its_cards() {
    let service = seeded_service().await;
    let mut library = Library::new();
    library.load(&service).await;

    assert_eq!(library.decks().len(), 2);
    assert_eq!(library.decks()[0].name, "Algebra");
    assert_eq!(library.selected(), Some(library.decks()[0].id));
    assert_eq!(library.cards().len(), 1);
    assert_eq!(library.cards()[0].front, "a+a");
}

#[tokio::test]
async fn selecting_none_clears_the_card_list() {
    let service = seeded_service().await;
    let mut library = Library::new();
    library.load(&service).await;

    library.select_deck(&service, None).await;
    assert_eq!(library.selected(), None);
    assert!(library.cards().is_empty());
}

#[tokio::test]
async fn blank_deck_name_is_rejected_locally() {
    let service = seeded_service().await;
    let mut library = Library::new();
    library.load(&service).await;
    let decks_before = library.decks().len();

    library.create_deck(&service, "   ").await;

    assert_eq!(library.error(), Some("Please enter a deck name."));
    assert_eq!(library.decks().len(), decks_before);
}

#[tokio::test]
async fn created_deck_is_inserted_in_name_order_and_selected() {
    let service = seeded_service().await;
    let mut library = Library::new();
    library.load(&service).await;

    library.create_deck(&service, "  Music  ").await;

    let names: Vec<&str> = library.decks().iter().map(|deck| deck.name.as_str()).collect();
    assert_eq!(names, vec!["Algebra", "Music", "Zoology"]);
    let music = library.decks()[1].id;
    assert_eq!(library.selected(), Some(music));
    assert!(library.cards().is_empty());
    assert_eq!(library.message(), Some("Created deck \"Music\"."));
}

#[tokio::test]
async fn duplicate_deck_name_is_surfaced_as_an_error() {
    let service = seeded_service().await;
    let mut library = Library::new();
    library.load(&service).await;

    library.create_deck(&service, "Algebra").await;
    assert!(library.error().unwrap().starts_with("Failed to create deck"));
}

#[tokio::test]
async fn deleting_the_selected_deck_moves_selection_to_the_next() {
    let service = seeded_service().await;
    let mut library = Library::new();
    library.load(&service).await;

    // Algebra is selected; deleting it should land on Zoology.
    library.delete_deck(&service).await;

    assert_eq!(library.decks().len(), 1);
    assert_eq!(library.decks()[0].name, "Zoology");
    assert_eq!(library.selected(), Some(library.decks()[0].id));
    assert_eq!(library.cards().len(), 2);
    assert_eq!(library.message(), Some("Deleted deck \"Algebra\"."));
}

#[tokio::test]
async fn deleting_the_last_deck_leaves_nothing_selected() {
    let service = InMemoryCardService::new();
    service.create_deck("Only").await.unwrap();
    let mut library = Library::new();
    library.load(&service).await;

    library.delete_deck(&service).await;

    assert!(library.decks().is_empty());
    assert_eq!(library.selected(), None);
    assert!(library.cards().is_empty());
}

#[tokio::test]
async fn delete_without_selection_is_a_validation_error() {
    let service = InMemoryCardService::new();
    let mut library = Library::new();
    library.load(&service).await;

    library.delete_deck(&service).await;
    assert_eq!(library.error(), Some("Please select a deck to delete."));
}

#[tokio::test]
async fn deleting_a_card_removes_it_from_the_list() {
    let service = seeded_service().await;
    let mut library = Library::new();
    library.load(&service).await;
    let zoology = library
        .decks()
        .iter()
        .find(|deck| deck.name == "Zoology")
        .map(|deck| deck.id)
        .unwrap();

    library.select_deck(&service, Some(zoology)).await;
    assert_eq!(library.cards().len(), 2);
    let card_id = library.cards()[0].id;

    library.delete_card(&service, card_id).await;
    assert_eq!(library.cards().len(), 1);
    assert_eq!(library.message(), Some(format!("Deleted card {card_id}.").as_str()));
}

#[tokio::test]
async fn selecting_a_missing_deck_reports_and_clears() {
    let service = seeded_service().await;
    let mut library = Library::new();
    library.load(&service).await;

    library.select_deck(&service, Some(DeckId::new(99))).await;
    // The in-memory service returns an empty list for an unknown deck,
    // so selection simply shows no cards.
    assert!(library.cards().is_empty());
}
