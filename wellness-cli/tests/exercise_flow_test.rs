use anyhow::Result;
use mockito::{Matcher, Server};
use serde_json::json;
use wellness_cli::api::ApiClient;
use wellness_cli::chart::ChartView;
use wellness_cli::config::Config;
use wellness_cli::form::Outcome;
use wellness_cli::screens::ExerciseScreen;

fn client_for(server: &Server) -> Result<ApiClient> {
    let mut config = Config::default();
    config.api.base_url = server.url();
    ApiClient::new(&config)
}

#[tokio::test]
async fn test_logged_exercise_is_posted_with_calories_and_list_refreshed() -> Result<()> {
    let mut server = Server::new_async().await;

    let create = server
        .mock("POST", "/api/exercises")
        .match_body(Matcher::Json(json!({
            "exerciseType": "Cycling",
            "duration": 30.0,
            "distance": 5.0,
            "caloriesBurned": 240.0
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"_id":"abc"}"#)
        .expect(1)
        .create_async()
        .await;

    let list = server
        .mock("GET", "/api/exercises")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{
                "exerciseType": "Cycling",
                "duration": 30,
                "distance": 5,
                "caloriesBurned": 240
            }])
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server)?;
    let mut screen = ExerciseScreen::new();
    screen.form.set_field("exerciseType", "Cycling")?;
    screen.form.set_field("duration", "30")?;
    screen.form.set_field("distance", "5")?;

    let outcome = screen.submit(&client).await;

    assert!(outcome.is_saved());
    create.assert_async().await;
    list.assert_async().await;

    assert_eq!(screen.logs.len(), 1);
    assert_eq!(
        screen.form.notifications().message(),
        Some("Exercise logged successfully!")
    );
    // Form is back to its defaults
    assert_eq!(screen.form.form().value("duration"), Some("0"));

    let chart = screen.chart();
    assert_eq!(chart.as_chart().map(|c| c.labels.clone()), Some(vec!["Cycling".to_string()]));

    Ok(())
}

#[tokio::test]
async fn test_invalid_exercise_makes_no_request() -> Result<()> {
    let mut server = Server::new_async().await;

    let create = server
        .mock("POST", "/api/exercises")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server)?;
    let mut screen = ExerciseScreen::new();
    screen.form.set_field("duration", "-5")?;

    let outcome = screen.submit(&client).await;

    assert_eq!(outcome, Outcome::Failed);
    create.assert_async().await;

    let notification = screen.form.notifications().current().expect("error shown");
    assert!(notification.is_error());
    assert_eq!(
        notification.message,
        "Invalid input! Duration must be positive and distance cannot be negative."
    );

    Ok(())
}

#[tokio::test]
async fn test_rejected_exercise_keeps_inputs() -> Result<()> {
    let mut server = Server::new_async().await;

    let create = server
        .mock("POST", "/api/exercises")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;
    let list = server
        .mock("GET", "/api/exercises")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server)?;
    let mut screen = ExerciseScreen::new();
    screen.form.set_field("duration", "20")?;

    let outcome = screen.submit(&client).await;

    assert_eq!(outcome, Outcome::Failed);
    create.assert_async().await;
    list.assert_async().await;
    assert_eq!(screen.form.form().value("duration"), Some("20"));
    assert_eq!(
        screen.form.notifications().message(),
        Some("Failed to log exercise!")
    );

    Ok(())
}

#[tokio::test]
async fn test_empty_log_shows_placeholder() -> Result<()> {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/api/exercises")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server)?;
    let mut screen = ExerciseScreen::new();
    screen.refresh(&client).await;

    assert!(screen.logs.is_empty());
    assert_eq!(screen.chart(), ChartView::Placeholder("No logs to display."));
    assert!(!screen.form.notifications().is_visible());

    Ok(())
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_logs() -> Result<()> {
    let mut server = Server::new_async().await;

    let ok = server
        .mock("GET", "/api/exercises")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"exerciseType":"Running","duration":10,"distance":2,"caloriesBurned":100}]"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server)?;
    let mut screen = ExerciseScreen::new();
    screen.refresh(&client).await;
    ok.assert_async().await;
    ok.remove_async().await;

    server
        .mock("GET", "/api/exercises")
        .with_status(503)
        .create_async()
        .await;

    screen.refresh(&client).await;

    assert_eq!(screen.logs.len(), 1);
    assert_eq!(
        screen.form.notifications().message(),
        Some("Error fetching exercise logs")
    );

    Ok(())
}
