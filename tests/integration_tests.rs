use natorder::core::runs;
use natorder::prelude::*;
use std::cmp::Ordering;

#[test]
fn test_numeric_run_ordering() {
    let order = NaturalOrder::DEFAULT;

    assert_eq!(order.cmp_str("A9", "A10"), Ordering::Less);
    assert_eq!(order.cmp_str("A10", "A100"), Ordering::Less);
    assert_eq!(order.cmp_str("9", "10"), Ordering::Less);
    assert_eq!(order.cmp_str("10", "100"), Ordering::Less);
    assert_eq!(order.cmp_str("A10", "A9"), Ordering::Greater);
}

#[test]
fn test_prefix_fallback() {
    let order = NaturalOrder::DEFAULT;

    // Run sequences are equal until one string runs out; the shorter sorts first.
    assert_eq!(order.cmp_str("A1A2", "A1A2A3"), Ordering::Less);
    assert_eq!(order.cmp_str("A1A2A3", "A1A2"), Ordering::Greater);
    assert_eq!(order.cmp_str("A1A2A3", "A1A2A3"), Ordering::Equal);
}

#[test]
fn test_mixed_divergence() {
    let order = NaturalOrder::DEFAULT;

    // Divergence inside a text run decides before any numeric run is reached.
    assert_eq!(order.cmp_str("A1", "AB1"), Ordering::Less);

    // A numeric run against a text run at the same position compares as text:
    // '1' (0x31) precedes 'A' (0x41) in code-point order.
    assert_eq!(order.cmp_str("1A", "AA"), Ordering::Less);
}

#[test]
fn test_null_and_empty_ordering() {
    let order = NaturalOrder::DEFAULT;

    assert_eq!(order.compare(None, Some("test")), Ordering::Less);
    assert_eq!(order.compare(Some(""), Some("test")), Ordering::Less);
    assert_eq!(order.compare(None, Some("")), Ordering::Less);
    assert_eq!(order.compare(None, None), Ordering::Equal);
    assert_eq!(order.compare(Some(""), Some("")), Ordering::Equal);
    assert_eq!(order.compare(Some("test"), None), Ordering::Greater);
    assert_eq!(order.compare(Some("test"), Some("")), Ordering::Greater);
}

#[test]
fn test_case_modes() {
    let order = NaturalOrder::DEFAULT;
    let folded = NaturalOrder::case_insensitive();

    // Ordinal: uppercase letters precede lowercase.
    assert_eq!(order.cmp_str("A1A2A3", "a1a2a3"), Ordering::Less);
    assert_eq!(order.cmp_str("a1a2a3", "A1A2A3"), Ordering::Greater);

    assert_eq!(folded.cmp_str("A1A2A3", "a1a2a3"), Ordering::Equal);
    assert_eq!(folded.cmp_str("Chapter 2", "chapter 10"), Ordering::Less);
    assert_eq!(folded.mode(), CaseMode::Insensitive);
}

#[test]
fn test_leading_zeros() {
    let order = NaturalOrder::DEFAULT;

    assert_eq!(order.cmp_str("007", "7"), Ordering::Equal);
    assert_eq!(order.cmp_str("A007B", "A7B"), Ordering::Equal);
    assert_eq!(order.cmp_str("007", "8"), Ordering::Less);
    assert_eq!(order.cmp_str("0", "000"), Ordering::Equal);
    assert_eq!(order.cmp_str("0010", "9"), Ordering::Greater);
}

#[test]
fn test_long_digit_runs() {
    let order = NaturalOrder::DEFAULT;

    // Beyond u64 range; positional comparison stays exact.
    assert_eq!(
        order.cmp_str("item-184467440737095516150", "item-184467440737095516151"),
        Ordering::Less
    );

    let forty_nines = "9".repeat(40);
    let one_and_forty_zeros = format!("1{}", "0".repeat(40));
    assert_eq!(
        order.cmp_str(&forty_nines, &one_and_forty_zeros),
        Ordering::Less
    );

    let padded = format!("{}5", "0".repeat(30));
    assert_eq!(order.cmp_str(&padded, "5"), Ordering::Equal);
}

#[test]
fn test_tokenizer_round_trip() {
    let samples = [
        "",
        "abc",
        "123",
        "a1b2c3",
        "10a10",
        "x",
        "héllo42",
        "42héllo",
        "00a00",
    ];

    for s in samples {
        let rebuilt: String = runs(s).map(|r| r.text).collect();
        assert_eq!(rebuilt, s, "runs of {s:?} must concatenate back");

        let rs: Vec<_> = runs(s).collect();
        for pair in rs.windows(2) {
            // Maximal runs: adjacent runs always switch kind.
            assert_ne!(pair[0].numeric, pair[1].numeric, "input {s:?}");
        }
        for r in &rs {
            assert!(!r.text.is_empty(), "input {s:?}");
            assert_eq!(&s[r.start..r.start + r.text.len()], r.text);
            assert_eq!(r.numeric, r.text.bytes().all(|b| b.is_ascii_digit()));
        }
    }
}

#[test]
fn test_display_wrapper() {
    let order = NaturalOrder::DEFAULT;

    assert_eq!(order.compare_display(Some(&9), Some(&10)), Ordering::Less);
    assert_eq!(order.compare_display(None, Some(&10)), Ordering::Less);
    assert_eq!(
        order.compare_display(Some(&"A9"), Some(&"A10")),
        Ordering::Less
    );
    assert_eq!(order.compare_display(None::<&u32>, None), Ordering::Equal);
}

#[test]
fn test_natsort_strings() {
    let input = vec![
        "file-10".to_string(),
        "file-2".to_string(),
        "file-1".to_string(),
    ];

    let indices = natsort(&input);

    let sorted: Vec<&String> = indices.iter().map(|&i| &input[i]).collect();
    assert_eq!(sorted, vec!["file-1", "file-2", "file-10"]);
}

#[test]
fn test_natsort_mut() {
    let mut data = vec!["v1.10.0", "v1.2.0", "v1.9.1", "v1.9.0"];
    natsort_mut(&mut data);
    assert_eq!(data, vec!["v1.2.0", "v1.9.0", "v1.9.1", "v1.10.0"]);
}

#[test]
fn test_natsort_nulls_first() {
    let mut data = vec![
        Some("b2".to_string()),
        None,
        Some("b10".to_string()),
        Some(String::new()),
    ];

    natsort_mut(&mut data);

    assert_eq!(
        data,
        vec![
            None,
            Some(String::new()),
            Some("b2".to_string()),
            Some("b10".to_string()),
        ]
    );
}

#[test]
fn test_case_insensitive_sort() {
    let mut data = vec!["Track 10", "track 9", "TRACK 1"];
    natsort_mut_with(&mut data, &NaturalOrder::case_insensitive());
    assert_eq!(data, vec!["TRACK 1", "track 9", "Track 10"]);
}

#[test]
fn test_stable_on_equal_keys() {
    // "007", "7" and "07" all compare equal; input order is preserved.
    let input = vec!["007", "7", "07"];
    let indices = natsort(&input);
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_vec_deque() {
    use std::collections::VecDeque;

    let input: VecDeque<String> = VecDeque::from(vec![
        "shot 12".to_string(),
        "shot 2".to_string(),
        "shot 1".to_string(),
    ]);

    let indices = natsort(&input);

    let sorted: Vec<&String> = indices.iter().map(|&i| &input[i]).collect();
    assert_eq!(sorted, vec!["shot 1", "shot 2", "shot 12"]);
}

#[test]
fn test_empty() {
    let input: Vec<String> = vec![];
    let indices = natsort(&input);
    assert!(indices.is_empty());
}
