//! Hazard Scoring Integration Tests
//!
//! Drives the flood, landslide and combined scorers through the public
//! API, including the path from raw weather/elevation payloads to a full
//! city assessment.

use climate_alert_service::ingest::weather;
use climate_alert_service::model::{OverallStatus, RiskLevel, WeatherInput};
use climate_alert_service::risk::{self, advisories};

fn weather_input(rainfall: f64, humidity: f64) -> WeatherInput {
    WeatherInput { rainfall, humidity, temperature: 25.0 }
}

#[test]
fn test_miami_extreme_rain_follows_weighted_sum() {
    let r = risk::calculate_flood_risk("Miami", 2.0, 200.0, 90.0);
    let f = &r.factors;
    assert_eq!((f.rainfall, f.elevation, f.drainage, f.humidity), (40.0, 28.0, 12.0, 10.0));
    assert_eq!(r.risk_score, 90.0);
    assert_eq!(r.risk_level, RiskLevel::Critical);
}

#[test]
fn test_unknown_city_mild_conditions() {
    let r = risk::calculate_flood_risk("UnknownCity", 50.0, 10.0, 50.0);
    assert_eq!(r.factors.drainage, 12.0, "unknown cities are rated moderate drainage");
    assert_eq!(r.factors.rainfall, 8.0);
    assert_eq!(r.risk_score, 40.0);
    assert_eq!(r.risk_level, RiskLevel::Medium);
}

#[test]
fn test_scores_stay_in_range_over_input_grid() {
    let elevations = [-10.0, 0.0, 3.0, 12.0, 40.0, 120.0, 350.0, 900.0];
    let rainfalls = [0.0, 10.0, 30.0, 60.0, 90.0, 130.0, 400.0];
    let humidities = [0.0, 55.0, 80.0, 100.0];

    for city in ["Mumbai", "Tokyo", "Nowhere"] {
        for &e in &elevations {
            for &rain in &rainfalls {
                for &h in &humidities {
                    let flood = risk::calculate_flood_risk(city, e, rain, h);
                    let slide = risk::calculate_landslide_risk(city, e, rain, None);
                    assert!((0.0..=100.0).contains(&flood.risk_score), "flood {} {} {} {}", city, e, rain, h);
                    assert!((0.0..=100.0).contains(&slide.risk_score), "landslide {} {} {}", city, e, rain);
                    assert_eq!(flood.risk_level, risk::risk_level(flood.risk_score));
                }
            }
        }
    }
}

#[test]
fn test_combined_risk_is_mean_of_sub_scores() {
    for (city, elevation, rain, humidity) in [
        ("Mumbai", 14.0, 84.0, 88.0),
        ("Seattle", 150.0, 20.0, 60.0),
        ("Rio de Janeiro", 700.0, 200.0, 95.0),
        ("Nowhere", 33.3, 12.7, 41.0),
    ] {
        let a = risk::assess_city_risk(city, elevation, weather_input(rain, humidity));
        let mean = (a.flood_risk.risk_score + a.landslide_risk.risk_score) / 2.0;
        assert!(
            (a.combined_risk - mean).abs() <= 0.05 + 1e-9,
            "{}: combined {} vs mean {}",
            city, a.combined_risk, mean
        );
    }
}

#[test]
fn test_weather_payload_to_assessment() {
    let body = r#"{
        "name": "Mumbai",
        "coord": {"lat": 19.0144, "lon": 72.8479},
        "main": {"temp": 29.0, "humidity": 88},
        "rain": {"1h": 3.5}
    }"#;
    let observation = weather::parse_current_weather(body).unwrap();
    let elevation = weather::parse_elevation(r#"{"elevation": [14.04]}"#).unwrap().unwrap();

    let a = risk::assess_city_risk(&observation.city, elevation, observation.to_weather_input());

    // flood: 30 + 20 + 20 (poor drainage) + 10; landslide: 5 + 25 + 7 + 3
    assert_eq!(a.weather.rainfall, 84.0);
    assert_eq!(a.elevation, 14.0);
    assert_eq!(a.flood_risk.risk_score, 80.0);
    assert_eq!(a.landslide_risk.risk_score, 40.0);
    assert_eq!(a.combined_risk, 60.0);
    assert_eq!(a.overall_status, OverallStatus::HighAlert);
    assert_eq!(a.priority_actions.len(), 2, "only the flood hazard is at or above 50");
    assert_eq!(a.history.map(|h| h.landslide_history), Some(6));
}

#[test]
fn test_payload_without_rain_scores_as_dry() {
    let body = r#"{
        "name": "Tokyo",
        "coord": {"lat": 35.68, "lon": 139.69},
        "main": {"temp": 22.0, "humidity": 30}
    }"#;
    let observation = weather::parse_current_weather(body).unwrap();
    let a = risk::assess_city_risk(&observation.city, 40.0, observation.to_weather_input());

    // flood: 0 + 15 + 5 (good drainage) + 3, not a humidity-derived 15 mm
    assert_eq!(a.weather.rainfall, 0.0);
    assert_eq!(a.flood_risk.factors.rainfall, 0.0);
    assert_eq!(a.flood_risk.risk_score, 23.0);
}

#[test]
fn test_quiet_day_gets_all_clear() {
    let a = risk::assess_city_risk("Tokyo", 40.0, weather_input(0.0, 30.0));
    assert_eq!(a.priority_actions, vec![advisories::ALL_CLEAR.to_string()]);
    assert_eq!(a.overall_status, OverallStatus::Normal);
}

#[test]
fn test_assessment_serializes_with_api_names() {
    let a = risk::assess_city_risk("Venice", 1.0, weather_input(200.0, 95.0));
    let v = serde_json::to_value(&a).unwrap();
    assert_eq!(v["overall_status"], "Emergency");
    assert_eq!(v["flood_risk"]["risk_color"], "#ff0000");
    assert_eq!(v["history"]["drainage"], "poor");
}
