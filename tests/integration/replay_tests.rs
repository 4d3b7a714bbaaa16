//! End-to-end replay: recorded envelopes in, `mcu/fans` JSON lines out.

use ridgeback_cooling::adapters::publisher::JsonLinesPublisher;
use ridgeback_cooling::app::service::CoolingService;
use ridgeback_cooling::bus::LocalBus;
use ridgeback_cooling::config::CoolingConfig;
use ridgeback_cooling::replay::{self, ReplayStats};

use super::mock_bus::RecordingSink;

fn replay_to_lines(input: &str) -> (ReplayStats, Vec<String>) {
    let config = CoolingConfig::default();
    let bus: LocalBus = LocalBus::new(&config).unwrap();
    let mut app = CoolingService::new(&config);
    let mut publisher = JsonLinesPublisher::new(Vec::new(), config.fans_topic.clone());
    let mut sink = RecordingSink::new();

    app.start(&mut sink);
    let stats = replay::run(input.as_bytes(), &bus, &mut app, &mut publisher, &mut sink).unwrap();

    assert_eq!(publisher.failures(), 0);
    let text = String::from_utf8(publisher.into_inner()).unwrap();
    (stats, text.lines().map(str::to_owned).collect())
}

#[test]
fn single_status_line_yields_single_fan_line() {
    let (stats, lines) =
        replay_to_lines(r#"{"topic":"mcu/status","msg":{"charger_connected":false}}"#);

    assert_eq!(stats.dispatched, 1);
    assert_eq!(lines, [r#"{"topic":"mcu/fans","msg":{"fans":[2,2,2,2,2,2]}}"#]);
}

#[test]
fn docking_session_produces_exact_wire_output() {
    let input = r#"
{"topic":"mcu/status","msg":{"charger_connected":true}}
{"topic":"mcu/status","msg":{"charger_connected":true}}
{"topic":"cmd_vel","msg":{"linear":{"x":0.1},"angular":{"z":0.0}}}
{"topic":"cmd_vel","msg":{"linear":{"x":-0.5},"angular":{"z":0.0}}}
{"topic":"odom","msg":{}}
{"topic":"mcu/status","msg":{"charger_connected":false}}
"#;
    let (stats, lines) = replay_to_lines(input);

    assert_eq!(
        stats,
        ReplayStats {
            lines: 6,
            dispatched: 5,
            rejected: 1,
        }
    );
    assert_eq!(
        lines,
        [
            r#"{"topic":"mcu/fans","msg":{"fans":[2,2,1,1,2,2]}}"#,
            r#"{"topic":"mcu/fans","msg":{"fans":[2,2,1,1,2,2]}}"#,
            r#"{"topic":"mcu/fans","msg":{"fans":[1,1,1,1,1,1]}}"#,
            r#"{"topic":"mcu/fans","msg":{"fans":[2,2,2,2,2,2]}}"#,
            r#"{"topic":"mcu/fans","msg":{"fans":[2,2,2,2,2,2]}}"#,
        ]
    );
}

#[test]
fn empty_input_publishes_nothing() {
    let (stats, lines) = replay_to_lines("\n# nothing recorded\n");
    assert_eq!(stats, ReplayStats::default());
    assert!(lines.is_empty());
}
