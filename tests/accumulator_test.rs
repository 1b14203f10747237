use string_accumulator::{sum, Accumulator, AccumulatorError, DelimiterSet};

fn negatives_message(input: &str) -> String {
    match sum(input) {
        Err(err @ AccumulatorError::NegativeValues { .. }) => err.to_string(),
        other => panic!("expected negative-value error for {:?}, got {:?}", input, other),
    }
}

#[test]
fn test_empty_string_sums_to_zero() {
    assert_eq!(sum("").unwrap(), 0);
}

#[test]
fn test_whitespace_only_sums_to_zero() {
    assert_eq!(sum("   ").unwrap(), 0);
}

#[test]
fn test_single_value_sums_to_itself() {
    assert_eq!(sum("1").unwrap(), 1);
}

#[test]
fn test_comma_delimited_values() {
    assert_eq!(sum("1,2").unwrap(), 3);
    assert_eq!(sum("1,2,3").unwrap(), 6);
}

#[test]
fn test_newline_and_comma_mix() {
    assert_eq!(sum("1\n2,3").unwrap(), 6);
}

#[test]
fn test_single_custom_delimiter() {
    assert_eq!(sum("//;\n1;2").unwrap(), 3);
}

#[test]
fn test_many_custom_delimiters() {
    assert_eq!(sum("//*|%\n1*2%3").unwrap(), 6);
}

#[test]
fn test_long_custom_delimiters() {
    assert_eq!(sum("//***|####|????\n1***2####3????4").unwrap(), 10);
}

#[test]
fn test_meta_character_delimiter_is_literal() {
    assert_eq!(sum("//*\n1*2*3*4").unwrap(), 10);
    assert_eq!(sum("//.|+|$\n1.2+3$4").unwrap(), 10);
}

#[test]
fn test_values_above_1000_are_left_out() {
    assert_eq!(sum("1,1000,1001,3").unwrap(), 1004);
}

#[test]
fn test_single_negative_is_reported() {
    assert!(negatives_message("1,-1000,3").contains("-1000"));
}

#[test]
fn test_many_negatives_are_reported_in_order() {
    let message = negatives_message("//;\n1;-1000;-2000;3");
    assert!(message.contains("-1000,-2000"));
    assert_eq!(message, "Negatives not allowed : -1000,-2000");
}

#[test]
fn test_negative_above_bound_values_still_fail() {
    // Large positives do not rescue an input that also has negatives.
    assert_eq!(negatives_message("5000,-1"), "Negatives not allowed : -1");
}

#[test]
fn test_malformed_headers_sum_to_zero() {
    assert_eq!(sum("//;1;2").unwrap(), 0);
    assert_eq!(sum("//\n1,2").unwrap(), 0);
    assert_eq!(sum("//;\n").unwrap(), 0);
    assert_eq!(sum("//;\n  \n").unwrap(), 0);
}

#[test]
fn test_non_integer_token_is_parse_error() {
    match sum("1,a,3") {
        Err(AccumulatorError::Parse { token, .. }) => assert_eq!(token, "a"),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_unknown_delimiter_in_custom_body_is_parse_error() {
    assert!(matches!(
        sum("//;\n1;2|3"),
        Err(AccumulatorError::Parse { .. })
    ));
}

#[test]
fn test_blank_tokens_are_skipped() {
    assert_eq!(sum(",1,,2,\n\n, 3 ,").unwrap(), 6);
}

#[test]
fn test_same_input_gives_same_outcome() {
    for input in ["1\n2,3", "//;\n1;-1000;-2000;3", "1,x"] {
        let first = sum(input).map_err(|e| e.to_string());
        let second = sum(input).map_err(|e| e.to_string());
        assert_eq!(first, second, "input {:?}", input);
    }
}

#[test]
fn test_plain_lists_sum_arithmetically() {
    let lists: [&[i64]; 4] = [&[0], &[1000, 1000, 1000], &[7, 0, 993, 12], &[3; 50]];
    for list in lists {
        let input = list
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(sum(&input).unwrap(), list.iter().sum::<i64>(), "input {:?}", input);
    }
}

#[test]
fn test_summary_matches_sum() {
    let accumulator = Accumulator::new();
    let summary = accumulator.summarize("//#\n4#2000#6").unwrap();

    assert_eq!(summary.sum, accumulator.sum("//#\n4#2000#6").unwrap());
    assert_eq!(summary.sum, 10);
    assert_eq!(summary.ignored, vec![2000]);
    assert_eq!(summary.delimiters, DelimiterSet::Custom(vec!["#".to_string()]));
}

#[test]
fn test_accumulator_is_shareable_across_threads() {
    let accumulator = Accumulator::new();
    let handles: Vec<_> = (1..=4)
        .map(|n| {
            std::thread::spawn(move || accumulator.sum(&format!("{n},{n}")).unwrap())
        })
        .collect();

    let results: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![2, 4, 6, 8]);
}
