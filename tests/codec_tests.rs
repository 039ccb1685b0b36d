use chrono::NaiveDateTime;
use healthdash::core::codec::{decode, decode_with_source, encode};
use healthdash::errors::AppError;
use healthdash::models::{Amount, Category, Entry, Record, WorkoutKind};

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn sample_records() -> Vec<Record> {
    let at = ts("2025-02-21 10:45:32");
    vec![
        Record::new(
            Entry::Workout {
                kind: WorkoutKind::Running,
                minutes: 45,
            },
            at,
        ),
        Record::new(
            Entry::Workout {
                kind: WorkoutKind::Unknown,
                minutes: 0,
            },
            at,
        ),
        Record::new(
            Entry::Diet {
                food: "Pasta, tomato: basil".into(),
                grams: 250,
            },
            at,
        ),
        Record::new(
            Entry::Hydration {
                liters: Amount::from_hundredths(50),
            },
            at,
        ),
        Record::new(
            Entry::Weight {
                kg: Amount::from_hundredths(7025),
            },
            at,
        ),
        Record::new(Entry::Sleep { minutes: 480 }, at),
        Record::new(Entry::Steps { count: 12_345 }, at),
    ]
}

#[test]
fn test_round_trip_every_category() {
    for record in sample_records() {
        let line = encode(&record);
        assert!(!line.contains('\n'), "encoded line has a newline: {line}");
        let back = decode(&line, record.category()).expect("decode own output");
        assert_eq!(back, record, "round trip failed for {line}");
    }
}

#[test]
fn test_encode_literal_formats() {
    let at = ts("2025-03-01 08:00:00");

    let workout = Record::new(
        Entry::Workout {
            kind: WorkoutKind::Yoga,
            minutes: 30,
        },
        at,
    );
    assert_eq!(
        encode(&workout),
        "Workout: Yoga, Duration: 30 minutes, DateTime: 2025-03-01 08:00:00"
    );

    let diet = Record::new(
        Entry::Diet {
            food: "Apple".into(),
            grams: 150,
        },
        at,
    );
    assert_eq!(
        encode(&diet),
        "Food: Apple, Quantity: 150 grams, DateTime: 2025-03-01 08:00:00"
    );

    let hydration = Record::new(
        Entry::Hydration {
            liters: Amount::parse("0.5").unwrap(),
        },
        at,
    );
    assert_eq!(
        encode(&hydration),
        "Hydration: 0.50 liters, DateTime: 2025-03-01 08:00:00"
    );

    let weight = Record::new(
        Entry::Weight {
            kg: Amount::parse("72.5").unwrap(),
        },
        at,
    );
    assert_eq!(
        encode(&weight),
        "Weight: 72.50 kg, DateTime: 2025-03-01 08:00:00"
    );

    let sleep = Record::new(Entry::Sleep { minutes: 420 }, at);
    assert_eq!(
        encode(&sleep),
        "Sleep: 420 minutes, DateTime: 2025-03-01 08:00:00"
    );
}

#[test]
fn test_decode_diet_with_commas_and_colons_in_food() {
    let line = "Food: Rice, beans: black, Quantity: 300 grams, DateTime: 2025-02-21 12:00:00";
    let record = decode(line, Category::Diet).unwrap();

    assert_eq!(
        record.entry,
        Entry::Diet {
            food: "Rice, beans: black".into(),
            grams: 300
        }
    );
    assert_eq!(record.timestamp, ts("2025-02-21 12:00:00"));
}

#[test]
fn test_decode_tolerates_spacing_and_crlf() {
    let line = "Sleep: 480 minutes, DateTime:    2025-02-21 10:45:32\r";
    let record = decode(line, Category::Sleep).unwrap();
    assert_eq!(record.entry, Entry::Sleep { minutes: 480 });
    assert_eq!(record.timestamp, ts("2025-02-21 10:45:32"));
}

#[test]
fn test_decode_rejects_foreign_lines() {
    let cases = [
        ("garbage line", Category::Sleep),
        ("", Category::Weight),
        ("Sleep: 480 minutes, DateTime: 2025-02-21 10:45:32", Category::Weight),
        ("Sleep: -5 minutes, DateTime: 2025-02-21 10:45:32", Category::Sleep),
        ("Sleep: abc minutes, DateTime: 2025-02-21 10:45:32", Category::Sleep),
        ("Sleep: 480 minutes, DateTime: yesterday", Category::Sleep),
        ("Sleep: 480 minutes, DateTime: 2025-02-30 10:45:32", Category::Sleep),
        ("Sleep: 99999999999 minutes, DateTime: 2025-02-21 10:45:32", Category::Sleep),
        ("Workout: Swimming, Duration: 30 minutes, DateTime: 2025-02-21 10:45:32", Category::Workout),
        ("Weight: 72.50 pounds, DateTime: 2025-02-21 10:45:32", Category::Weight),
    ];

    for (line, category) in cases {
        match decode(line, category) {
            Err(AppError::Parse(_)) => {}
            other => panic!("expected parse error for {line:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_decode_weight_reads_two_decimals() {
    let record = decode(
        "Weight: 70.25 kg, DateTime: 2025-03-02 08:00:00",
        Category::Weight,
    )
    .unwrap();
    assert_eq!(
        record.entry,
        Entry::Weight {
            kg: Amount::from_hundredths(7025)
        }
    );
}

#[test]
fn test_amount_parse_and_display() {
    assert_eq!(Amount::parse("72.5").unwrap().to_string(), "72.50");
    assert_eq!(Amount::parse("70.25").unwrap().to_string(), "70.25");
    assert_eq!(Amount::parse("0.5").unwrap().to_string(), "0.50");
    assert_eq!(Amount::parse("3").unwrap().to_string(), "3.00");
    assert_eq!(Amount::parse(".75").unwrap().to_string(), "0.75");
    assert_eq!(Amount::parse("1.005").unwrap().to_string(), "1.01");
    assert_eq!(Amount::parse("1.004").unwrap().to_string(), "1.00");

    assert!(Amount::parse("-1").is_none());
    assert!(Amount::parse("abc").is_none());
    assert!(Amount::parse("").is_none());
    assert!(Amount::parse(".").is_none());
    assert!(Amount::parse("1.2.3").is_none());
}

#[test]
fn test_category_names() {
    assert_eq!(Category::from_name("sleep"), Some(Category::Sleep));
    assert_eq!(Category::from_name("WEIGHT"), Some(Category::Weight));
    assert_eq!(Category::from_name("naps"), None);
    assert_eq!(Category::Hydration.to_string(), "Hydration");
    assert!(Category::Sleep.is_chartable());
    assert!(!Category::Diet.is_chartable());
}

#[test]
fn test_decode_keeps_timestamp_text() {
    let (record, source) =
        decode_with_source("Weight: 70.5 kg, DateTime:  2025-2-1 8:05:00\r", Category::Weight)
            .unwrap();
    assert_eq!(source, "2025-2-1 8:05:00");
    assert_eq!(record.timestamp, ts("2025-02-01 08:05:00"));
    assert_eq!(record.entry, Entry::Weight { kg: Amount::from_hundredths(7050) });
}
