//! Integration tests for the LocalBus → CoolingService dispatch path.

use std::sync::Arc;
use std::thread;

use super::mock_bus::{MockPublisher, RecordingSink};

use ridgeback_cooling::app::service::CoolingService;
use ridgeback_cooling::bus::LocalBus;
use ridgeback_cooling::config::CoolingConfig;
use ridgeback_cooling::fans::FanSetting;

#[test]
fn raw_payloads_drive_the_service_in_arrival_order() {
    let config = CoolingConfig::default();
    let bus: LocalBus = LocalBus::new(&config).unwrap();
    let mut app = CoolingService::new(&config);
    let mut pub_ = MockPublisher::new();
    let mut sink = RecordingSink::new();

    bus.deliver("mcu/status", br#"{"charger_connected":true,"stop_engaged":false}"#)
        .unwrap();
    bus.deliver("cmd_vel", br#"{"linear":{"x":0.0,"y":0.0,"z":0.0},"angular":{"z":0.0}}"#)
        .unwrap();

    assert_eq!(bus.spin_once(&mut app, &mut pub_, &mut sink), 2);
    assert_eq!(pub_.count(), 2);
    assert_eq!(pub_.published[0].fans.settings()[2], FanSetting::High);
    assert!(pub_.last().unwrap().is_uniform(FanSetting::Low));
}

#[test]
fn producers_on_other_threads_are_serialised() {
    let config = CoolingConfig::default();
    let bus: Arc<LocalBus<64>> = Arc::new(LocalBus::new(&config).unwrap());

    let producers: Vec<_> = (0..4)
        .map(|i| {
            let bus = Arc::clone(&bus);
            thread::spawn(move || {
                for _ in 0..8 {
                    let payload: &[u8] = if i % 2 == 0 {
                        br#"{"charger_connected":true}"#
                    } else {
                        br#"{"linear":{"x":0.3}}"#
                    };
                    let topic = if i % 2 == 0 { "mcu/status" } else { "cmd_vel" };
                    bus.deliver(topic, payload).unwrap();
                }
            })
        })
        .collect();
    for p in producers {
        p.join().unwrap();
    }

    let mut app = CoolingService::new(&config);
    let mut pub_ = MockPublisher::new();
    let mut sink = RecordingSink::new();

    assert_eq!(bus.pending(), 32);
    assert_eq!(bus.spin_once(&mut app, &mut pub_, &mut sink), 32);
    assert_eq!(pub_.count(), 32, "one publish per delivered message");
    assert!(app.charger_connected());
}
