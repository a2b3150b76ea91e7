//! Timestamp accuracy and behavior tests

use crate::tests::test_utils::{assert_ids_non_decreasing_timestamps, parse, wall_clock_ms};
use crate::*;
use chrono::{TimeZone, Utc};
use std::thread;
use std::time::Duration;

#[test]
fn test_timestamp_reflects_wall_clock() {
    let g = CyberFlake::new();
    let before = wall_clock_ms();
    let ts = g.extract.timestamp(&g.generate().unwrap()).unwrap();
    let after = wall_clock_ms();
    assert!(ts >= before && ts <= after, "{before} <= {ts} <= {after}");
}

#[test]
fn test_timestamp_advances_with_real_sleep() {
    let g = CyberFlake::new();
    let a = g.generate().unwrap();
    thread::sleep(Duration::from_millis(50));
    let b = g.generate().unwrap();

    let diff = g.extract.duration(&a, &b).unwrap();
    assert!(diff >= 40, "Expected ~50ms, got {}ms", diff);
    assert!(parse(&b) > parse(&a));
}

#[test]
fn test_ids_sortable_by_time() {
    let g = CyberFlake::new();
    let ids: Vec<String> = (0..10)
        .map(|i| {
            if i % 3 == 0 && i > 0 {
                thread::sleep(Duration::from_millis(2));
            }
            g.generate().unwrap()
        })
        .collect();
    assert_ids_non_decreasing_timestamps(&ids);
}

#[test]
fn test_generate_from_datetime() {
    let g = CyberFlake::new();
    let dt = Utc.with_ymd_and_hms(2024, 10, 1, 8, 30, 0).unwrap();
    let parts = deconstruct(&g.generate_at(dt).unwrap()).unwrap();
    assert_eq!(parts.date(), dt);
    assert_eq!(parts.timestamp, dt.timestamp_millis() as u64);
}

#[test]
fn test_generate_from_rfc3339_text() {
    let g = CyberFlake::new();
    let id = g.generate_at("2016-02-29T23:59:59.999Z").unwrap();
    assert_eq!(
        deconstruct(&id).unwrap().date().to_rfc3339(),
        "2016-02-29T23:59:59.999+00:00"
    );
}

#[test]
fn test_generate_from_fractional_millis_floors() {
    let g = CyberFlake::new();
    let t = epoch() as f64 + 1234.987;
    let id = g.generate_at(t).unwrap();
    assert_eq!(get_timestamp(&id).unwrap(), epoch() + 1234);
}

#[test]
fn test_generate_at_epoch() {
    let g = CyberFlake::new();
    let id = parse(&g.generate_at(epoch()).unwrap());
    assert_eq!(id.timestamp_offset(), 0);
    assert_eq!(id.to_raw(), 1 << 17);
}

#[test]
fn test_generate_at_end_of_range() {
    let g = CyberFlake::new();
    let last = epoch() + CyberFlakeId::TIMESTAMP_MASK;
    let id = g.generate_at(last).unwrap();
    assert_eq!(get_timestamp(&id).unwrap(), last);
    // 2084-09-06, the last representable millisecond
    assert_eq!(
        deconstruct(&id).unwrap().date().to_rfc3339(),
        "2084-09-06T15:47:35.551+00:00"
    );
}
