//! End-to-end calculations through the public API

use approx::assert_relative_eq;
use growth_simulator::{
    project, ConversionOutcome, ParseMode, ProjectionInput, RawInput, Simulator, SimulatorConfig,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Answer a single HTTP request with the given status line and body
async fn rate_service(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        let mut buf = [0u8; 1024];
        while !received.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            received.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    base_url
}

fn simulator_for(base_url: String) -> Simulator {
    let config = SimulatorConfig {
        rate_api_base_url: base_url,
        ..Default::default()
    };
    Simulator::new(&config).unwrap()
}

#[test]
fn scenario_principal_only_no_interest() {
    let result = project(&ProjectionInput::new(1_000_000.0, 0.0, 0.0, 5.0));
    assert_eq!(result.total_value, 1_000_000.0);
}

#[test]
fn scenario_contributions_only_no_interest() {
    let result = project(&ProjectionInput::new(0.0, 100_000.0, 0.0, 1.0));
    assert_eq!(result.total_value, 1_200_000.0);
}

#[test]
fn scenario_twelve_percent_for_a_year() {
    let result = project(&ProjectionInput::new(1_000_000.0, 100_000.0, 12.0, 1.0));

    assert_relative_eq!(result.principal_future_value, 1_126_825.03, epsilon = 0.01);
    assert_relative_eq!(result.contribution_future_value, 1_268_250.30, epsilon = 0.01);
    assert_eq!(
        result.total_value,
        result.principal_future_value + result.contribution_future_value
    );
}

#[tokio::test]
async fn conversion_service_error_keeps_idr_total() {
    let base_url = rate_service("500 Internal Server Error", r#"{"error":"boom"}"#).await;
    let simulator = simulator_for(base_url);

    let report = simulator
        .calculate(&RawInput::new("1000000", "100000", "12", "1", "EUR"))
        .await
        .unwrap();

    assert_eq!(report.conversion, Some(ConversionOutcome::Unavailable));
    assert_eq!(
        report.projection,
        project(&ProjectionInput::new(1_000_000.0, 100_000.0, 12.0, 1.0))
    );

    let lines = report.summary_lines();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Projected total after 1 year: Rp\u{a0}2.395.075");
}

#[tokio::test]
async fn conversion_success_adds_converted_line() {
    let base_url = rate_service("200 OK", r#"{"success":true,"result":139.82}"#).await;
    let simulator = simulator_for(base_url);

    let report = simulator
        .calculate(&RawInput::new("1000000", "100000", "12", "1", "EUR"))
        .await
        .unwrap();

    assert_eq!(report.converted_amount(), Some(139.82));
    assert_eq!(report.summary_lines()[1], "≈ €139.82");
}

#[tokio::test]
async fn json_report_shape() {
    let simulator = simulator_for("http://127.0.0.1:9".to_string());
    let report = simulator
        .calculate(&RawInput::new("1000", "", "", "2", ""))
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["currency"], "IDR");
    assert_eq!(json["conversion"], serde_json::Value::Null);
    assert_eq!(json["projection"]["total_value"], 1000.0);
    assert_eq!(json["input"]["years"], 2.0);
}

#[tokio::test]
async fn lenient_mode_follows_permissive_defaults() {
    let config = SimulatorConfig {
        lenient_parsing: true,
        ..Default::default()
    };
    let simulator = Simulator::new(&config).unwrap();
    assert_eq!(simulator.parse_mode(), ParseMode::Lenient);

    let report = simulator
        .calculate(&RawInput::new("abc", "", "", "0", "IDR"))
        .await
        .unwrap();
    assert_eq!(report.input, ProjectionInput::new(0.0, 0.0, 0.0, 1.0));
}
