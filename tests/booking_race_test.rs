mod common;

use common::TestApp;
use tokio::task::JoinSet;

// Ten concurrent claims on the same slot: the conditional update must let
// exactly one through.
#[tokio::test]
async fn test_concurrent_bookings_yield_a_single_winner() {
    let app = TestApp::new().await;
    let management_id = app.create_management("Jane Smith", None).await;
    app.create_slots(&management_id, "2024-03-04", "09:00", "09:10", 10).await;

    let slots = app.list_slots(&management_id).await;
    let slot_id = slots[0]["id"].as_str().unwrap().to_string();

    let mut tasks = JoinSet::new();
    for i in 0..10 {
        let repo = app.state.slot_repo.clone();
        let slot_id = slot_id.clone();
        tasks.spawn(async move {
            let email = format!("visitor{}@test.local", i);
            let outcome = repo.book(&slot_id, &email, None).await.unwrap();
            (email, outcome)
        });
    }

    let mut winners = Vec::new();
    while let Some(result) = tasks.join_next().await {
        let (email, outcome) = result.unwrap();
        if let Some(slot) = outcome {
            assert_eq!(slot.booked_by.as_deref(), Some(email.as_str()));
            winners.push(email);
        }
    }

    assert_eq!(winners.len(), 1, "exactly one booking must win the race");

    let slot = app.state.slot_repo.find_by_id(&slot_id).await.unwrap().unwrap();
    assert!(slot.is_booked);
    assert_eq!(slot.booked_by.as_deref(), Some(winners[0].as_str()));
}
