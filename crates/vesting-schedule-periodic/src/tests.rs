use assert_matches::assert_matches;
use primitives_coins::Balance;

use super::*;

const HOUR: u64 = 60 * 60;

fn coins(pairs: &[(&str, Balance)]) -> Coins {
    Coins::try_from_pairs(pairs.iter().copied()).unwrap()
}

fn periods(items: &[(u64, &[(&str, Balance)])]) -> Periods<u64> {
    let vec = items
        .iter()
        .map(|(length, amount)| Period {
            length: *length,
            amount: coins(amount),
        })
        .collect();
    Periods::new(vec).unwrap()
}

fn five_step_schedule() -> Periods<u64> {
    periods(&[
        (8 * HOUR, &[("fee", 200)]),
        (HOUR, &[("fee", 200), ("stake", 50)]),
        (6 * HOUR, &[("fee", 200), ("stake", 50)]),
        (2 * HOUR, &[("fee", 200)]),
        (HOUR, &[("fee", 200)]),
    ])
}

#[test]
fn cumulative_logic() {
    let schedule = periods(&[
        (12 * HOUR, &[("fee", 500), ("stake", 50)]),
        (6 * HOUR, &[("fee", 250), ("stake", 25)]),
        (6 * HOUR, &[("fee", 250), ("stake", 25)]),
    ]);
    let start = 1_000;

    let compute = |offset: u64| schedule.cumulative_amount(start, start + offset);

    assert_eq!(compute(0), Coins::new());
    assert_eq!(compute(6 * HOUR), Coins::new());
    assert_eq!(compute(12 * HOUR - 1), Coins::new());
    assert_eq!(compute(12 * HOUR), coins(&[("fee", 500), ("stake", 50)]));
    assert_eq!(compute(17 * HOUR), coins(&[("fee", 500), ("stake", 50)]));
    assert_eq!(compute(18 * HOUR), coins(&[("fee", 750), ("stake", 75)]));
    assert_eq!(compute(24 * HOUR), coins(&[("fee", 1000), ("stake", 100)]));
    assert_eq!(compute(48 * HOUR), coins(&[("fee", 1000), ("stake", 100)]));
}

#[test]
fn cumulative_before_start_is_empty() {
    let schedule = periods(&[(0, &[("fee", 10)])]);

    assert_eq!(schedule.cumulative_amount(100, 99), Coins::new());
    assert_eq!(schedule.cumulative_amount(100, 0), Coins::new());
    // Zero-length period matures right at the start.
    assert_eq!(schedule.cumulative_amount(100, 100), coins(&[("fee", 10)]));
}

#[test]
fn cumulative_is_monotonic() {
    let schedule = five_step_schedule();
    let mut previous = Coins::new();
    for moment in (0..=24 * HOUR).step_by(600) {
        let current = schedule.cumulative_amount(0, moment);
        assert!(previous.is_all_lte(&current), "at {moment}");
        previous = current;
    }
    assert_eq!(previous, schedule.total_amount());
}

#[test]
fn totals() {
    let schedule = five_step_schedule();

    assert_eq!(schedule.total_length(), 18 * HOUR);
    assert_eq!(
        schedule.total_amount(),
        coins(&[("fee", 1000), ("stake", 100)])
    );
    assert_eq!(schedule.end(10), Some(10 + 18 * HOUR));
    assert_eq!(schedule.end(u64::MAX), None);

    let empty = Periods::<u64>::empty();
    assert_eq!(empty.total_length(), 0);
    assert_eq!(empty.total_amount(), Coins::new());
}

#[test]
fn construction_overflows() {
    assert_matches!(
        Periods::new(vec![
            Period {
                length: u64::MAX,
                amount: Coins::new(),
            },
            Period {
                length: 1,
                amount: Coins::new(),
            },
        ]),
        Err(ScheduleError::LengthOverflow)
    );

    assert_matches!(
        Periods::new(vec![
            Period {
                length: 1u64,
                amount: coins(&[("fee", Balance::MAX)]),
            },
            Period {
                length: 1,
                amount: coins(&[("fee", 1)]),
            },
        ]),
        Err(ScheduleError::AmountOverflow { denom }) if denom.as_str() == "fee"
    );
}

#[test]
fn passed_period_count() {
    let schedule = five_step_schedule();

    let tests = [
        (0, 0),
        (8 * HOUR - 1, 0),
        (8 * HOUR, 1),
        (11 * HOUR, 2),
        (15 * HOUR, 3),
        (18 * HOUR, 5),
        (100 * HOUR, 5),
    ];
    for (offset, expected) in tests {
        assert_eq!(
            schedule.passed_period_count(HOUR, HOUR + offset),
            expected,
            "offset {offset}"
        );
    }
    assert_eq!(schedule.passed_period_count(HOUR, 0), 0);
}

#[test]
fn matured_prefix() {
    let schedule = five_step_schedule();

    assert_eq!(schedule.matured_prefix(0, 11 * HOUR).as_slice(), &schedule.as_slice()[..2]);
    assert_eq!(schedule.matured_prefix(0, 9 * HOUR).as_slice(), &schedule.as_slice()[..2]);
    assert!(schedule.matured_prefix(HOUR, 0).is_empty());
    assert!(schedule.matured_prefix(0, 0).is_empty());
    assert_eq!(schedule.matured_prefix(0, 18 * HOUR), schedule);
}

#[test]
fn capped_cuts_the_crossing_period() {
    let schedule = periods(&[(12 * HOUR, &[("fee", 1000), ("stake", 100)])]);

    assert_eq!(
        schedule.capped(&coins(&[("fee", 400), ("stake", 50)])),
        periods(&[(12 * HOUR, &[("fee", 400), ("stake", 50)])])
    );
    assert!(schedule.capped(&Coins::new()).is_empty());
    assert_eq!(
        schedule.capped(&coins(&[("fee", 1000), ("stake", 100)])),
        schedule
    );
}

#[test]
fn capped_stops_once_allocated() {
    let schedule = periods(&[
        (HOUR, &[("fee", 10)]),
        (HOUR, &[("fee", 10)]),
        (HOUR, &[("fee", 10)]),
    ]);

    assert_eq!(
        schedule.capped(&coins(&[("fee", 15)])),
        periods(&[(HOUR, &[("fee", 10)]), (HOUR, &[("fee", 5)])])
    );
}

#[test]
fn capped_keeps_lengths_of_emptied_periods() {
    let schedule = periods(&[
        (HOUR, &[("fee", 10)]),
        (2 * HOUR, &[("stake", 10)]),
        (3 * HOUR, &[("fee", 10)]),
    ]);

    let capped = schedule.capped(&coins(&[("fee", 20)]));
    assert_eq!(
        capped,
        periods(&[(HOUR, &[("fee", 10)]), (2 * HOUR, &[]), (3 * HOUR, &[("fee", 10)])])
    );
    // The retained value unlocks at the same instants as before.
    for moment in 0..=7 * HOUR {
        assert_eq!(
            capped.cumulative_amount(0, moment),
            schedule.cumulative_amount(0, moment).min(&coins(&[("fee", 20)])),
            "at {moment}"
        );
    }
}

#[test]
fn capped_keeps_fitting_empty_periods() {
    let schedule = periods(&[
        (4 * HOUR, &[]),
        (12 * HOUR, &[("fee", 1000), ("stake", 100)]),
        (2 * HOUR, &[]),
    ]);

    assert_eq!(
        schedule.capped(&coins(&[("fee", 400)])),
        periods(&[(4 * HOUR, &[]), (12 * HOUR, &[("fee", 400)])])
    );
}

#[test]
fn serde_parse() {
    let val = r#"[{"length": 3600, "amount": [{"denom": "fee", "amount": 10}]}]"#;
    let val: Periods<u64> = serde_json::from_str(val).unwrap();
    assert_eq!(val, periods(&[(HOUR, &[("fee", 10)])]));
}

#[test]
#[should_panic = "unknown field `unknown_field`"]
fn serde_parse_does_not_allow_unknown_fields() {
    let val = r#"[{"length": 3600, "amount": [], "unknown_field": 123}]"#;
    let _: Periods<u64> = serde_json::from_str(val).unwrap();
}

#[test]
#[should_panic = "schedule length overflow"]
fn serde_parse_checks_totals() {
    let val = r#"[{"length": 18446744073709551615, "amount": []}, {"length": 1, "amount": []}]"#;
    let _: Periods<u64> = serde_json::from_str(val).unwrap();
}

#[test]
fn codec_roundtrip() {
    let schedule = five_step_schedule();
    let encoded = schedule.encode();
    assert_eq!(Periods::<u64>::decode(&mut &encoded[..]).unwrap(), schedule);
}
