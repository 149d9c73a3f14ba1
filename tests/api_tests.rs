//! WeatherClient against a mock OpenWeather server

use pretty_assertions::assert_eq;
use serde_json::json;
use weather_panel::api::WeatherClient;
use weather_panel::config::PanelConfig;
use weather_panel::error::SearchError;
use weather_panel::icons::WeatherIcon;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> WeatherClient {
    WeatherClient::new(PanelConfig::new("test-key").with_base_url(server.uri()))
}

fn kolkata_body() -> serde_json::Value {
    json!({
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04n"}],
        "timezone": 19800,
        "main": {"temp": -0.4, "feels_like": -3.2, "humidity": 64},
        "wind": {"speed": 3.6},
        "visibility": 10000,
        "sys": {"sunrise": 1700000000, "sunset": 1700040000},
        "name": "Kolkata",
        "cod": 200
    })
}

#[tokio::test]
async fn test_current_weather_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Kolkata"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kolkata_body()))
        .expect(1)
        .mount(&server)
        .await;

    let weather = client_for(&server)
        .current_weather("  Kolkata ")
        .await
        .expect("weather should load");

    assert_eq!(weather.location, "Kolkata");
    assert_eq!(weather.temperature, -1);
    assert_eq!(weather.feels_like, -4);
    assert_eq!(weather.humidity, 64);
    assert_eq!(weather.visibility_label(), "10.0 km");
    assert_eq!(weather.icon, WeatherIcon::Drizzle);
    assert_eq!(weather.sunrise, "3:43 AM");
}

#[tokio::test]
async fn test_city_with_spaces_is_encoded() {
    let server = MockServer::start().await;
    let mut body = kolkata_body();
    body["name"] = json!("New Delhi");
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "New Delhi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let weather = client_for(&server)
        .current_weather("New Delhi")
        .await
        .expect("weather should load");
    assert_eq!(weather.location, "New Delhi");
}

#[tokio::test]
async fn test_city_not_found_is_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .current_weather("Atlantis")
        .await
        .unwrap_err();

    assert_eq!(err, SearchError::Provider("city not found".into()));
    assert_eq!(err.alert_text().as_deref(), Some("city not found"));
}

#[tokio::test]
async fn test_bad_key_is_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "cod": 401,
            "message": "Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).current_weather("Patna").await.unwrap_err();
    assert!(matches!(err, SearchError::Provider(ref m) if m.starts_with("Invalid API key")));
}

#[tokio::test]
async fn test_malformed_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).current_weather("Patna").await.unwrap_err();
    assert!(matches!(err, SearchError::Transport(_)));
    assert_eq!(err.alert_text(), None);
}

#[tokio::test]
async fn test_blank_city_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kolkata_body()))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server).current_weather("   ").await.unwrap_err();
    assert_eq!(err, SearchError::Validation);
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    drop(server);

    let err = client.current_weather("Patna").await.unwrap_err();
    assert!(matches!(err, SearchError::Transport(_)));
}
