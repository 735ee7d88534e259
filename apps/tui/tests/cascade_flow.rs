use httpmock::prelude::*;
use lightsched_tui::cascade::{CascadeClient, CascadeController, Completion, Level, SelectionForm};
use lightsched_tui::http::{ReqwestTransport, SharedTransport};
use lightsched_tui::Locator;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use url::Url;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn locator_for(server: &MockServer) -> Result<Locator, Box<dyn std::error::Error>> {
    let transport: SharedTransport = Arc::new(ReqwestTransport::new(Duration::from_secs(5))?);
    Ok(Locator::new(transport, Url::parse(&server.url("/url"))?))
}

async fn next(
    completions: &mut UnboundedReceiver<Completion>,
) -> Result<Completion, Box<dyn std::error::Error>> {
    let completion = tokio::time::timeout(Duration::from_secs(5), completions.recv())
        .await?
        .ok_or("controller dropped")?;
    Ok(completion)
}

#[tokio::test]
async fn walks_from_provinces_to_a_rendered_schedule() -> TestResult {
    let server = MockServer::start_async().await;
    let api = server.url("/api");

    let discovery = server
        .mock_async(|when, then| {
            when.method(GET).path("/url/places");
            then.status(200).json_body(json!(api));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/url/schedule");
            then.status(200).json_body(json!(server.url("/schedules")));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/provinces");
            then.status(200)
                .json_body(json!([{ "name": "Gauteng" }, { "name": "Limpopo" }]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/municipalities/Limpopo");
            then.status(200).json_body(json!([{ "name": "Polokwane" }]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/places/municipality/Polokwane");
            then.status(200)
                .json_body(json!([{ "name": "Seshego", "id": 7 }, { "name": "Mankweng", "id": 8 }]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/schedules/Limpopo/Mankweng");
            then.status(200).json_body(json!({
                "startDate": [2024, 2, 28],
                "days": [
                    { "slots": [{ "start": [0, 0], "end": [2, 30] }, { "start": [16, 0], "end": [18, 30] }] },
                    { "slots": [] },
                    { "slots": [{ "start": [8, 0], "end": [10, 30] }] }
                ]
            }));
        })
        .await;

    let client = CascadeClient::new(locator_for(&server)?);
    let (controller, mut completions) = CascadeController::new(client);
    let mut form = SelectionForm::new("%Y-%m-%d");

    controller.dispatch(form.init());
    form.complete(next(&mut completions).await?);
    assert_eq!(form.dropdown(Level::Province).options().len(), 3);

    let request = form.choose(Level::Province, 2).ok_or("no municipality request")?;
    controller.dispatch(request);
    form.complete(next(&mut completions).await?);

    let request = form.choose(Level::Municipality, 1).ok_or("no place request")?;
    controller.dispatch(request);
    form.complete(next(&mut completions).await?);
    assert_eq!(form.dropdown(Level::Place).options()[2].label, "Mankweng");

    let request = form.choose(Level::Place, 2).ok_or("no schedule request")?;
    controller.dispatch(request);
    form.complete(next(&mut completions).await?);

    let rows = form.schedule().rows();
    let labels: Vec<&str> = rows.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(labels, vec!["2024-02-28", "2024-02-29", "2024-03-01"]);
    assert_eq!(rows[0].slots, vec!["00:00-02:30", "16:00-18:30"]);
    assert!(rows[1].slots.is_empty());
    assert_eq!(rows[2].slots, vec!["08:00-10:30"]);

    // nothing is cached: every step asked discovery again
    discovery.assert_hits_async(3).await;
    Ok(())
}

#[tokio::test]
async fn rejected_discovery_leaves_the_provinces_empty() -> TestResult {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/url/places");
            then.status(500);
        })
        .await;

    let client = CascadeClient::new(locator_for(&server)?);
    let (controller, mut completions) = CascadeController::new(client);
    let mut form = SelectionForm::new("%Y-%m-%d");

    controller.dispatch(form.init());
    let completion = next(&mut completions).await?;
    let view = completion
        .result
        .as_ref()
        .err()
        .and_then(|e| e.error_view())
        .ok_or("expected a rejection")?;
    assert_eq!(view.to_string(), "Error 500: Internal Server Error");

    form.complete(completion);
    assert!(form.dropdown(Level::Province).is_empty());
    assert!(!form.dropdown(Level::Province).is_bound());
    Ok(())
}

#[tokio::test]
async fn undecodable_listings_are_failures_not_panics() -> TestResult {
    let server = MockServer::start_async().await;
    let api = server.url("/api");
    server
        .mock_async(|when, then| {
            when.method(GET).path("/url/places");
            then.status(200).json_body(json!(api));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/provinces");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let client = CascadeClient::new(locator_for(&server)?);
    let result = client.provinces().await;
    assert!(result.is_err());
    Ok(())
}
