use anyhow::Result;
use api_smoke::core::cards;
use api_smoke::{DeckClient, DeckFlow, FlowSequence, UserCrudFlow, UsersClient};
use httpmock::prelude::*;
use serde_json::json;

const DECK_ID: &str = "8xfyhrp5msol";

fn mount_user_mocks(server: &MockServer) {
    server.mock(|when, then| {
        when.method(POST).path("/api/users/1");
        then.status(201)
            .json_body(json!({"name": "test123", "hobby": "Building toy models"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/users/1");
        then.status(200).json_body(json!({"data": {"id": 1}}));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/users/1");
        then.status(200)
            .json_body(json!({"name": "test123", "hobby": "Automating stuff"}));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/users/1");
        then.status(204);
    });
}

fn mount_deck_mocks(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/api/deck/new/shuffle/");
        then.status(200)
            .json_body(json!({"success": true, "deck_id": DECK_ID, "remaining": 52}));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/api/deck/{}/draw/", DECK_ID))
            .query_param("count", "52");
        then.status(200)
            .json_body(json!({"success": true, "deck_id": DECK_ID, "remaining": 0}));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/api/deck/{}/return/", DECK_ID))
            .query_param("cards", cards::join_codes(&cards::full_deck()));
        then.status(200)
            .json_body(json!({"success": true, "deck_id": DECK_ID, "remaining": 52}));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/api/deck/{}/pile/pile1/add/", DECK_ID));
        then.status(200).json_body(json!({
            "success": true, "deck_id": DECK_ID, "remaining": 47,
            "piles": {"pile1": {"remaining": 5}}
        }));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/api/deck/{}/pile/pile2/add/", DECK_ID));
        then.status(200).json_body(json!({
            "success": true, "deck_id": DECK_ID, "remaining": 42,
            "piles": {"pile1": {"remaining": 5}, "pile2": {"remaining": 5}}
        }));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/api/deck/{}/pile/pile1/shuffle/", DECK_ID));
        then.status(200).json_body(json!({
            "success": true, "deck_id": DECK_ID, "remaining": 42,
            "piles": {"pile1": {"remaining": 5}, "pile2": {"remaining": 5}}
        }));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/api/deck/{}/pile/pile1/draw/random/", DECK_ID))
            .query_param("count", "3");
        then.status(200).json_body(json!({
            "success": true, "deck_id": DECK_ID, "remaining": 42,
            "piles": {"pile1": {"remaining": 2}, "pile2": {"remaining": 5}}
        }));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/api/deck/{}/pile/pile2/draw/random/", DECK_ID))
            .query_param("count", "2");
        then.status(200).json_body(json!({
            "success": true, "deck_id": DECK_ID, "remaining": 42,
            "piles": {"pile1": {"remaining": 2}, "pile2": {"remaining": 3}}
        }));
    });
}

#[tokio::test]
async fn test_full_suite_runs_both_flows_in_order() -> Result<()> {
    let users_server = MockServer::start();
    let deck_server = MockServer::start();
    mount_user_mocks(&users_server);
    mount_deck_mocks(&deck_server);

    let mut sequence = FlowSequence::new("suite-test".to_string());
    sequence.add_flow(Box::new(UserCrudFlow::new(UsersClient::new(
        users_server.base_url(),
    ))));
    sequence.add_flow(Box::new(DeckFlow::new(DeckClient::new(
        deck_server.base_url(),
    ))));

    let reports = sequence.execute_all().await?;

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].flow_name, "user-crud");
    assert_eq!(reports[1].flow_name, "deck");
    assert_eq!(reports[0].steps.len(), 4);
    assert_eq!(reports[1].steps.len(), 8);

    let summary = FlowSequence::execution_summary(&reports);
    assert_eq!(
        summary.get("total_flows").unwrap(),
        &serde_json::Value::Number(2.into())
    );
    assert_eq!(
        summary.get("total_steps").unwrap(),
        &serde_json::Value::Number(12.into())
    );

    Ok(())
}

#[tokio::test]
async fn test_failing_first_flow_stops_the_suite() -> Result<()> {
    let users_server = MockServer::start();
    let deck_server = MockServer::start();

    // Create fails outright; nothing else should be contacted.
    users_server.mock(|when, then| {
        when.method(POST).path("/api/users/1");
        then.status(500).json_body(json!({"error": "boom"}));
    });
    let deck_create_mock = deck_server.mock(|when, then| {
        when.method(GET).path("/api/deck/new/shuffle/");
        then.status(200)
            .json_body(json!({"success": true, "deck_id": DECK_ID, "remaining": 52}));
    });

    let mut sequence = FlowSequence::new("suite-test".to_string());
    sequence.add_flow(Box::new(UserCrudFlow::new(UsersClient::new(
        users_server.base_url(),
    ))));
    sequence.add_flow(Box::new(DeckFlow::new(DeckClient::new(
        deck_server.base_url(),
    ))));

    let result = sequence.execute_all().await;

    assert!(result.is_err());
    deck_create_mock.assert_hits(0);

    Ok(())
}
