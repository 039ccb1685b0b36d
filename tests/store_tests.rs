mod common;
use chrono::NaiveDateTime;
use common::{TestEnv, dir_entries, read_lines, write_lines};
use healthdash::core::codec::decode;
use healthdash::errors::AppError;
use healthdash::models::{Amount, Category, Entry, Record};
use std::fs;

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn sleep(minutes: u32, at: &str) -> Record {
    Record::new(Entry::Sleep { minutes }, ts(at))
}

fn collect(env: &TestEnv, user: &str, category: Category) -> Vec<(usize, String)> {
    env.store()
        .list_all(user, category)
        .expect("list")
        .map(|r| r.expect("line"))
        .collect()
}

#[test]
fn test_append_keeps_order_and_numbers_from_one() {
    let env = TestEnv::new();
    let store = env.store();
    let r1 = sleep(480, "2025-02-21 10:45:32");
    let r2 = sleep(420, "2025-02-22 09:00:00");

    store.append("alice", &r1).unwrap();
    store.append("alice", &r2).unwrap();

    let lines = collect(&env, "alice", Category::Sleep);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].0, 1);
    assert_eq!(lines[1].0, 2);
    assert_eq!(decode(&lines[0].1, Category::Sleep).unwrap(), r1);
    assert_eq!(decode(&lines[1].1, Category::Sleep).unwrap(), r2);

    assert!(env.data().join("alice_Sleep.txt").is_file());
}

#[test]
fn test_list_all_can_be_restarted() {
    let env = TestEnv::new();
    let store = env.store();
    store.append("bob", &sleep(300, "2025-01-01 07:00:00")).unwrap();

    let first = collect(&env, "bob", Category::Sleep);
    store.append("bob", &sleep(360, "2025-01-02 07:00:00")).unwrap();
    let second = collect(&env, "bob", Category::Sleep);

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 2);
    assert_eq!(first[0], second[0]);
}

#[test]
fn test_list_all_missing_file_is_not_found() {
    let env = TestEnv::new();
    match env.store().list_all("nobody", Category::Weight) {
        Err(AppError::NotFound(_)) => {}
        Err(e) => panic!("expected NotFound, got {e:?}"),
        Ok(_) => panic!("expected NotFound, got a listing"),
    }
}

#[test]
fn test_list_all_returns_foreign_lines_verbatim() {
    let env = TestEnv::new();
    let path = env.store().record_file("carol", Category::Steps);
    write_lines(&path, &["walked a lot today", "Steps: 9000 steps, DateTime: 2025-01-01 20:00:00"]);

    let lines = collect(&env, "carol", Category::Steps);
    assert_eq!(
        lines,
        vec![
            (1, "walked a lot today".to_string()),
            (2, "Steps: 9000 steps, DateTime: 2025-01-01 20:00:00".to_string()),
        ]
    );
}

#[test]
fn test_delete_at_middle_renumbers() {
    let env = TestEnv::new();
    let store = env.store();
    let r1 = sleep(100, "2025-01-01 07:00:00");
    let r2 = sleep(200, "2025-01-02 07:00:00");
    let r3 = sleep(300, "2025-01-03 07:00:00");
    for r in [&r1, &r2, &r3] {
        store.append("dave", r).unwrap();
    }

    let removed = store.delete_at("dave", Category::Sleep, 2).unwrap();
    assert_eq!(decode(&removed, Category::Sleep).unwrap(), r2);

    let lines = collect(&env, "dave", Category::Sleep);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].0, 1);
    assert_eq!(lines[1].0, 2);
    assert_eq!(decode(&lines[0].1, Category::Sleep).unwrap(), r1);
    assert_eq!(decode(&lines[1].1, Category::Sleep).unwrap(), r3);

    // Only the record file is left: the temp copy was renamed over it.
    assert_eq!(dir_entries(&env.data()), vec!["dave_Sleep.txt".to_string()]);
}

#[test]
fn test_delete_at_first_and_last() {
    let env = TestEnv::new();
    let path = env.store().record_file("erin", Category::Diet);
    write_lines(&path, &["a", "b", "c", "d"]);

    env.store().delete_at("erin", Category::Diet, 1).unwrap();
    env.store().delete_at("erin", Category::Diet, 3).unwrap();

    assert_eq!(read_lines(&path), vec!["b", "c"]);
}

#[test]
fn test_delete_at_out_of_range_leaves_file_untouched() {
    let env = TestEnv::new();
    let store = env.store();
    for m in [100, 200, 300] {
        store
            .append("frank", &sleep(m, "2025-01-01 07:00:00"))
            .unwrap();
    }
    let path = store.record_file("frank", Category::Sleep);
    let before = fs::read(&path).unwrap();

    match store.delete_at("frank", Category::Sleep, 4) {
        Err(AppError::PositionNotFound {
            position,
            available,
        }) => {
            assert_eq!(position, 4);
            assert_eq!(available, 3);
        }
        other => panic!("expected PositionNotFound, got {other:?}"),
    }

    assert_eq!(fs::read(&path).unwrap(), before);
    assert_eq!(dir_entries(&env.data()), vec!["frank_Sleep.txt".to_string()]);
}

#[test]
fn test_delete_at_position_zero_is_rejected() {
    let env = TestEnv::new();
    let path = env.store().record_file("gina", Category::Sleep);
    write_lines(&path, &["x"]);

    assert!(matches!(
        env.store().delete_at("gina", Category::Sleep, 0),
        Err(AppError::Validation(_))
    ));
    assert_eq!(read_lines(&path), vec!["x"]);
}

#[test]
fn test_delete_at_missing_file_is_not_found() {
    let env = TestEnv::new();
    assert!(matches!(
        env.store().delete_at("henry", Category::Sleep, 1),
        Err(AppError::NotFound(_))
    ));
    assert!(dir_entries(&env.data()).is_empty());
}

#[test]
fn test_delete_all_removes_file() {
    let env = TestEnv::new();
    let store = env.store();
    store
        .append("ivy", &sleep(480, "2025-02-21 10:45:32"))
        .unwrap();

    store.delete_all("ivy", Category::Sleep).unwrap();

    assert!(!store.exists("ivy", Category::Sleep));
    assert!(matches!(
        store.list_all("ivy", Category::Sleep),
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        store.delete_all("ivy", Category::Sleep),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_create_files_makes_one_empty_file_per_category() {
    let env = TestEnv::new();
    env.store().create_files("jack").unwrap();

    let mut expected: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("jack_{c}.txt"))
        .collect();
    expected.sort();
    assert_eq!(dir_entries(&env.data()), expected);

    for c in Category::ALL {
        assert!(collect(&env, "jack", c).is_empty());
    }
}

#[test]
fn test_invalid_record_is_rejected_before_writing() {
    let env = TestEnv::new();
    let bad = Record::new(
        Entry::Diet {
            food: "two\nlines".into(),
            grams: 10,
        },
        ts("2025-01-01 12:00:00"),
    );
    let separator = Record::new(
        Entry::Diet {
            food: "soup, Quantity: lots".into(),
            grams: 10,
        },
        ts("2025-01-01 12:00:00"),
    );

    assert!(matches!(
        env.store().append("kate", &bad),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        env.store().append("kate", &separator),
        Err(AppError::Validation(_))
    ));
    assert!(!env.store().exists("kate", Category::Diet));
}

#[test]
fn test_usernames_must_be_plain_file_components() {
    let env = TestEnv::new();
    let record = Record::new(
        Entry::Weight {
            kg: Amount::from_hundredths(7000),
        },
        ts("2025-01-01 08:00:00"),
    );

    for user in ["", "../evil", "a b", ".hidden", "x\\y"] {
        assert!(
            matches!(
                env.store().append(user, &record),
                Err(AppError::Validation(_))
            ),
            "username {user:?} should be rejected"
        );
    }
    assert!(dir_entries(&env.data()).is_empty());
}

#[test]
fn test_non_utf8_line_is_listed_lossily() {
    let env = TestEnv::new();
    let path = env.store().record_file("kate", Category::Sleep);
    fs::write(
        &path,
        b"Sleep: 480 minutes, DateTime: 2025-02-21 10:45:32\ncaf\xe9 hand edit\n",
    )
    .unwrap();

    let lines = collect(&env, "kate", Category::Sleep);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], (2, "caf\u{FFFD} hand edit".to_string()));

    let raw: Vec<(usize, Vec<u8>)> = env
        .store()
        .list_raw("kate", Category::Sleep)
        .unwrap()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(raw[1], (2, b"caf\xe9 hand edit".to_vec()));
}

#[test]
fn test_delete_at_works_around_non_utf8_lines() {
    let env = TestEnv::new();
    let path = env.store().record_file("liam", Category::Sleep);
    fs::write(
        &path,
        b"Sleep: 480 minutes, DateTime: 2025-02-21 10:45:32\n\
          caf\xe9 hand edit\n\
          Sleep: 400 minutes, DateTime: 2025-02-22 10:00:00\r\n",
    )
    .unwrap();

    // Other lines are copied byte for byte, including a CRLF ending.
    env.store().delete_at("liam", Category::Sleep, 1).unwrap();
    assert_eq!(
        fs::read(&path).unwrap(),
        b"caf\xe9 hand edit\nSleep: 400 minutes, DateTime: 2025-02-22 10:00:00\r\n".to_vec()
    );

    let removed = env.store().delete_at("liam", Category::Sleep, 1).unwrap();
    assert_eq!(removed, "caf\u{FFFD} hand edit");
    assert_eq!(
        fs::read(&path).unwrap(),
        b"Sleep: 400 minutes, DateTime: 2025-02-22 10:00:00\r\n".to_vec()
    );
}
