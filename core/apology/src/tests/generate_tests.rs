//! 謝罪文生成（generate / repeat）のテスト。

use crate::domain::{GenerationRequest, Style, HEART_EMOJIS};
use crate::usecase::generate::{generate, repeat};
use common::adapter::{FixedClock, SequenceRandom, StdRandom};
use common::error::Error;
use common::ports::outbound::Clock;

// 2026-10-19T12:00:00.000Z
const NOW_MS: u64 = 1_792_411_200_000;

fn request(message: &str, count: i64, style: &str, emojis: bool, timestamp: bool) -> GenerationRequest {
    GenerationRequest::new("Alex", message, count, style, emojis, timestamp).unwrap()
}

#[test]
fn test_example_heartfelt_three() {
    let text = generate(
        &request("Sorry!", 3, "heartfelt", false, false),
        &FixedClock::new(NOW_MS),
        &SequenceRandom::new(vec![0]),
    );
    let expected = "Dear Alex,\n\n\
                    From the depths of my heart, Sorry! 💕\n\n\
                    \nSorry!\nSorry!\nSorry!\
                    \n\n💕 Forever yours,\nWith all my love ❤️";
    assert_eq!(text, expected);
}

#[test]
fn test_message_occurs_count_times_in_repeated_section() {
    for style in Style::ALL {
        for count in [1, 4, 5, 9, 10, 11, 20, 37, 1000] {
            for emojis in [false, true] {
                let text = generate(
                    &request("Sorry!", count, style.name(), emojis, false),
                    &FixedClock::new(NOW_MS),
                    &StdRandom::seeded(7),
                );
                // 導入行の 1 回を除いた数
                let occurrences = text.matches("Sorry!").count() - 1;
                assert_eq!(occurrences as i64, count, "style={} count={} emojis={}", style, count, emojis);
            }
        }
    }
}

#[test]
fn test_without_emojis_is_deterministic() {
    let req = request("I apologize", 123, "poetic", false, false);
    let clock = FixedClock::new(NOW_MS);
    let a = generate(&req, &clock, &StdRandom::seeded(1));
    let b = generate(&req, &clock, &StdRandom::seeded(2));
    assert_eq!(a, b);
}

#[test]
fn test_poetic_separator_prefixes_every_line() {
    let text = generate(
        &request("Sorry", 3, "poetic", false, false),
        &FixedClock::new(NOW_MS),
        &SequenceRandom::new(vec![0]),
    );
    assert!(text.contains("Like roses that bloom in spring, Sorry 🌹\n\n\n~ Sorry\n~ Sorry\n~ Sorry\n\n"));
}

#[test]
fn test_emoji_on_every_fifth_line() {
    let text = generate(
        &request("Sorry!", 12, "sincere", true, false),
        &FixedClock::new(NOW_MS),
        &SequenceRandom::new(vec![0, 15]),
    );
    let lines: Vec<&str> = text.lines().filter(|l| l.starts_with("Sorry!")).collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[4], format!("Sorry! {}", HEART_EMOJIS[0]));
    assert_eq!(lines[9], format!("Sorry! {}", HEART_EMOJIS[15]));
    let with_emoji = lines.iter().filter(|l| **l != "Sorry!").count();
    assert_eq!(with_emoji, 2);
}

#[test]
fn test_blank_line_every_ten_but_not_after_last() {
    let clock = FixedClock::new(NOW_MS);
    let rng = SequenceRandom::new(vec![0]);
    let twenty = generate(&request("Sorry!", 20, "heartfelt", false, false), &clock, &rng);
    assert_eq!(twenty.matches("Sorry!\n\nSorry!").count(), 1);
    assert!(twenty.ends_with("Sorry!\n\n💕 Forever yours,\nWith all my love ❤️"));

    let ten = generate(&request("Sorry!", 10, "heartfelt", false, false), &clock, &rng);
    assert_eq!(ten.matches("Sorry!\n\nSorry!").count(), 0);
    assert!(!ten.contains("Sorry!\n\n\n💕"));
}

#[test]
fn test_timestamp_header_and_closing() {
    let clock = FixedClock::new(NOW_MS);
    let text = generate(
        &request("Sorry!", 2, "playful", false, true),
        &clock,
        &SequenceRandom::new(vec![0]),
    );
    let now = clock.now_local();
    let header = format!(
        "📅 {} at {}\n\nDear Alex,\n\nOopsie! Sorry! 🎈\n\n",
        now.format("%-m/%-d/%Y"),
        now.format("%-I:%M:%S %p")
    );
    assert!(text.starts_with(&header), "{}", text);
    assert!(text.ends_with("\n\n💕 Forever yours,\nSent with love ❤️"));
}

#[test]
fn test_invalid_inputs_are_rejected_before_generation() {
    for (name, message, count) in [("Alex", "Sorry!", 0), ("Alex", "Sorry!", 1001), ("", "Sorry!", 3), ("Alex", "  ", 3)] {
        let err = GenerationRequest::new(name, message, count, "heartfelt", false, false).unwrap_err();
        assert!(matches!(err, Error::Validation(_)), "{:?}", (name, message, count));
    }
    for style in ["gothic", "HEARTFELT", ""] {
        let err = GenerationRequest::new("Alex", "Sorry!", 3, style, false, false).unwrap_err();
        assert_eq!(err, Error::InvalidStyle(style.to_string()));
    }
}

#[test]
fn test_repeat_numbered_lines() {
    assert_eq!(repeat("Sam", 3), "1- Sam\n2- Sam\n3- Sam\n");
    assert_eq!(repeat("Sam", 0), "");
    assert_eq!(repeat("Sam", -4), "");
    assert_eq!(repeat("Sam", 250).lines().count(), 250);
}
