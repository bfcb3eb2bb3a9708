use std::cmp::Ordering;
use time_app::{Duration, TimeError, TimeOfDay};

fn time(h: u8, m: u8, s: u8) -> TimeOfDay {
    TimeOfDay::new(h, m, s).unwrap()
}

#[test]
fn test_format_then_parse_round_trips_every_valid_time() {
    for h in 0..=23u8 {
        for m in 0..=59u8 {
            for s in 0..=59u8 {
                let original = time(h, m, s);
                let text = original.to_string();
                assert_eq!(text.len(), 8, "{text} is not HH:MM:SS");
                assert_eq!(TimeOfDay::parse(&text).unwrap(), original);
            }
        }
    }
}

#[test]
fn test_out_of_range_components_are_invalid_arguments() {
    for (h, m, s) in [(24, 0, 0), (0, 60, 0), (0, 0, 60)] {
        assert!(matches!(
            TimeOfDay::new(h, m, s),
            Err(TimeError::InvalidArgument { .. })
        ));
    }
}

#[test]
fn test_parse_requires_three_fields() {
    assert!(matches!(
        TimeOfDay::parse("15:30"),
        Err(TimeError::InvalidFormat { .. })
    ));
    assert!(matches!(
        TimeOfDay::parse("15:30:00:00"),
        Err(TimeError::InvalidFormat { .. })
    ));
    assert!(matches!(
        "15:3O:00".parse::<TimeOfDay>(),
        Err(TimeError::InvalidFormat { .. })
    ));
}

#[test]
fn test_parse_reads_fields() {
    let parsed = TimeOfDay::parse("15:30:45").unwrap();
    assert_eq!(parsed.hours(), 15);
    assert_eq!(parsed.minutes(), 30);
    assert_eq!(parsed.seconds(), 45);
}

#[test]
fn test_equality() {
    assert_eq!(time(10, 30, 0), time(10, 30, 0));
    assert!(time(10, 30, 0).equals(&time(10, 30, 0)));
    assert_ne!(time(10, 30, 0), time(10, 20, 0));
}

#[test]
fn test_ordering() {
    assert!(time(10, 30, 0) < time(11, 0, 0));
    assert!(time(10, 30, 0) < time(10, 30, 1));
    assert!(time(10, 30, 0).less_than(&time(10, 31, 0)));
    assert!(time(10, 30, 0) > time(9, 59, 59));
    assert!(time(10, 30, 0) >= time(10, 30, 0));
    assert_eq!(time(0, 0, 1).compare_to(&time(0, 0, 0)), Ordering::Greater);
}

#[test]
fn test_total_order_laws() {
    let samples = [
        time(0, 0, 0),
        time(0, 0, 59),
        time(0, 1, 0),
        time(9, 59, 59),
        time(10, 0, 0),
        time(10, 30, 0),
        time(10, 30, 0),
        time(23, 59, 59),
    ];

    for a in &samples {
        for b in &samples {
            assert_eq!(a.compare_to(b), b.compare_to(a).reverse());
            assert_eq!(a.compare_to(b) == Ordering::Equal, a.equals(b));
            assert_eq!(a.compare_to(b) == Ordering::Less, a.less_than(b));
            for c in &samples {
                if a.less_than(b) && b.less_than(c) {
                    assert!(a.less_than(c));
                }
            }
        }
    }
}

#[test]
fn test_add_wraps_past_midnight() {
    assert_eq!(time(23, 50, 0) + Duration::new(1, 0, 0), time(0, 50, 0));
    assert_eq!(time(12, 0, 0) + Duration::new(24, 0, 0), time(12, 0, 0));
    assert_eq!(time(23, 59, 59) + Duration::from_secs(1), TimeOfDay::MIDNIGHT);
    assert_eq!(time(8, 0, 0).wrapping_add(Duration::ZERO), time(8, 0, 0));
}

#[test]
fn test_add_always_yields_valid_time() {
    let start = time(17, 45, 30);
    for hours in [0u8, 1, 6, 23, 24, 47, 200, 255] {
        for minutes in [0u8, 15, 59, 60, 255] {
            let result = start + Duration::new(hours, minutes, 255);
            assert!(result.hours() <= 23 && result.minutes() <= 59 && result.seconds() <= 59);
            assert_eq!(TimeOfDay::parse(&result.to_string()).unwrap(), result);
        }
    }
}
