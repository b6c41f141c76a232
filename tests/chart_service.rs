use hdchart::engine::ChartEngine;
use hdchart::service::{FALLBACK_LABEL, PRIMARY_UNAVAILABLE};
use hdchart::{
    BirthData, Chart, EngineError, HdError, HdService, HdType, Location, Settings,
    SimulatorEngine, TimeAccuracy, ValidationError,
};

struct BrokenEngine;

impl ChartEngine for BrokenEngine {
    fn name(&self) -> &str {
        "broken"
    }

    async fn calculate(&self, _birth: &BirthData) -> Result<Chart, EngineError> {
        Err(EngineError::Unavailable {
            engine: "broken".into(),
            reason: "no ephemeris".into(),
        })
    }
}

fn wien(accuracy: TimeAccuracy) -> BirthData {
    BirthData {
        date: "1972-09-04".into(),
        time: "03:15".into(),
        time_accuracy: accuracy,
        location: Location {
            lat: 48.208176,
            lon: 16.373819,
            name: "Wien".into(),
            timezone: "Europe/Vienna".into(),
        },
    }
}

fn instant_simulator() -> SimulatorEngine {
    SimulatorEngine::from_settings(&Settings::instant())
}

#[tokio::test]
async fn primary_chart_is_annotated_with_cross_check() {
    let service = HdService::new(&Settings::instant());
    let birth = wien(TimeAccuracy::Exact);
    let result = service.calculate_chart(&birth).await.unwrap();

    // The placeholder primary has no gates while the simulator activates at
    // least 26, so the gate count always differs.
    assert!(result
        .cross_check
        .differences
        .iter()
        .any(|d| d.starts_with("Gate count: 0 vs ")));

    let n = result.cross_check.differences.len() as f64;
    let expected = (1.0 - (0.05 * n).min(0.3)).max(0.5);
    assert!((result.cross_check.confidence - expected).abs() < 1e-9);

    let chart = &result.chart;
    assert_eq!(chart.hd_type, HdType::Generator);
    assert_eq!(chart.engine_version.primary, "hd-engine-v1");
    assert_eq!(chart.engine_version.secondary, FALLBACK_LABEL);
    assert_eq!(chart.engine_version.differences, result.cross_check.differences);
    assert_eq!(chart.confidence, result.cross_check.confidence);
}

#[tokio::test]
async fn differences_name_the_simulated_labels() {
    let service = HdService::new(&Settings::instant());
    let birth = wien(TimeAccuracy::Approximate);
    let result = service.calculate_chart(&birth).await.unwrap();
    let simulated = instant_simulator().generate(&birth);

    let type_diff = format!("Type: generator vs {}", simulated.hd_type);
    let has_type_diff = result.cross_check.differences.contains(&type_diff);
    assert_eq!(has_type_diff, simulated.hd_type != HdType::Generator);

    let centers_differ = !simulated.defined_centers().is_empty();
    assert_eq!(
        result
            .cross_check
            .differences
            .iter()
            .any(|d| d == "Defined centers differ"),
        centers_differ
    );
    assert!(result.cross_check.confidence <= 0.85);
    assert!(result.cross_check.confidence >= 0.5);
}

#[tokio::test]
async fn failing_primary_falls_back_to_simulator() {
    let service = HdService::with_engines(BrokenEngine, instant_simulator());
    let birth = wien(TimeAccuracy::Unknown);
    let result = service.calculate_chart(&birth).await.unwrap();

    assert_eq!(result.cross_check.differences, vec![PRIMARY_UNAVAILABLE.to_string()]);
    assert_eq!(result.cross_check.confidence, 0.7);
    assert_eq!(result.chart.engine_version.primary, "simulator-v1");
    assert_eq!(result.chart.confidence, 0.5);
    assert!(result.chart.gates.len() >= 26);
}

#[tokio::test]
async fn invalid_birth_data_is_rejected_before_any_engine_runs() {
    let service = HdService::with_engines(BrokenEngine, instant_simulator());
    let mut birth = wien(TimeAccuracy::Exact);
    birth.location.lat = 123.0;
    let err = service.calculate_chart(&birth).await.unwrap_err();
    assert!(matches!(err, HdError::Validation(ValidationError::Latitude(_))));
}

#[tokio::test]
async fn chart_result_serializes_with_camel_case_keys() {
    let service = HdService::new(&Settings::instant());
    let result = service.calculate_chart(&wien(TimeAccuracy::Exact)).await.unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert!(value.get("crossCheck").is_some());
    let chart = &value["chart"];
    assert_eq!(chart["type"], "generator");
    assert_eq!(chart["profile"], "3/5");
    assert_eq!(chart["birthData"]["timeAccuracy"], "exact");
    assert!(chart["engineVersion"]["differences"].is_array());
}
