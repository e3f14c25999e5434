use anyhow::Result;
use mockito::{Matcher, Server};
use serde_json::json;
use wellness_cli::api::ApiClient;
use wellness_cli::config::Config;
use wellness_cli::form::Outcome;
use wellness_cli::screens::ProfileScreen;

fn client_for(server: &Server, token: Option<&str>) -> Result<ApiClient> {
    let mut config = Config::default();
    config.api.base_url = server.url();
    if let Some(token) = token {
        config.set_token(token.to_string());
    }
    ApiClient::new(&config)
}

async fn mock_profile(server: &mut Server) -> mockito::Mock {
    server
        .mock("GET", "/api/user/profile")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "preferences": {"unit": "imperial", "goal": "gain"}
            })
            .to_string(),
        )
        .create_async()
        .await
}

#[tokio::test]
async fn test_load_fetches_profile_and_history() -> Result<()> {
    let mut server = Server::new_async().await;
    let profile = mock_profile(&mut server).await;
    let history = server
        .mock("GET", "/api/user/tracking")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{
                "date": "2024-05-01",
                "exercise": "Running",
                "calories": 320,
                "nutrition": "Balanced"
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server, Some("test-token"))?;
    let mut screen = ProfileScreen::new();
    screen.load(&client).await;

    profile.assert_async().await;
    history.assert_async().await;

    assert_eq!(screen.form.form().value("name"), Some("Ada"));
    assert_eq!(screen.form.form().value("preferences.unit"), Some("imperial"));
    assert_eq!(screen.history.len(), 1);
    assert_eq!(screen.history.items()[0].calories, Some(320.0));
    assert!(!screen.is_editing());

    Ok(())
}

#[tokio::test]
async fn test_successful_update_leaves_edit_mode() -> Result<()> {
    let mut server = Server::new_async().await;
    mock_profile(&mut server).await;

    let update = server
        .mock("PUT", "/api/user/profile")
        .match_header("authorization", "Bearer test-token")
        .match_body(Matcher::PartialJson(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "preferences": {"unit": "imperial", "goal": "gain"}
        })))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, Some("test-token"))?;
    let mut screen = ProfileScreen::new();
    assert!(screen.apply_profile(client.fetch_profile().await));

    screen.toggle_editing();
    screen.form.set_field("name", "Ada Lovelace")?;

    let outcome = screen.submit(&client).await;

    update.assert_async().await;
    assert!(outcome.is_saved());
    assert!(!screen.is_editing());
    assert_eq!(screen.form.form().value("name"), Some("Ada Lovelace"));
    assert_eq!(
        screen.form.notifications().message(),
        Some("Profile updated successfully!")
    );

    Ok(())
}

#[tokio::test]
async fn test_failed_update_stays_in_edit_mode() -> Result<()> {
    let mut server = Server::new_async().await;

    let update = server
        .mock("PUT", "/api/user/profile")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, Some("test-token"))?;
    let mut screen = ProfileScreen::new();
    screen.set_editing(true);
    screen.form.set_field("email", "new@example.com")?;

    let outcome = screen.submit(&client).await;

    update.assert_async().await;
    assert_eq!(outcome, Outcome::Failed);
    assert!(screen.is_editing());
    assert_eq!(screen.form.form().value("email"), Some("new@example.com"));
    assert_eq!(
        screen.form.notifications().message(),
        Some("Failed to update profile!")
    );

    Ok(())
}

#[tokio::test]
async fn test_save_outside_edit_mode_sends_nothing() -> Result<()> {
    let mut server = Server::new_async().await;
    let update = server
        .mock("PUT", "/api/user/profile")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server, Some("test-token"))?;
    let mut screen = ProfileScreen::new();

    let outcome = screen.submit(&client).await;

    update.assert_async().await;
    assert_eq!(outcome, Outcome::Failed);

    Ok(())
}

#[tokio::test]
async fn test_missing_session_fails_without_request() -> Result<()> {
    let mut server = Server::new_async().await;
    let profile = server
        .mock("GET", "/api/user/profile")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server, None)?;
    let mut screen = ProfileScreen::new();
    screen.load(&client).await;

    profile.assert_async().await;
    assert_eq!(
        screen.form.notifications().message(),
        Some("Please log in first.")
    );

    Ok(())
}
