use kodegen_tools_langdetect::{guess_language, registry};
use std::time::Instant;

/// Compile every pattern table once so timings measure matching only
fn warm_up() {
    let _ = registry::entries();
    let _ = guess_language("warm up");
}

fn assert_fast(label: &str, adversarial: &str) {
    warm_up();
    let start = Instant::now();
    let _ = guess_language(adversarial);
    let elapsed = start.elapsed();

    println!("{label}: {elapsed:?}");
    assert!(
        elapsed.as_millis() < 5_000,
        "ReDoS vulnerability detected in {label}: took {elapsed:?}"
    );
}

#[test]
fn test_redos_resistance_unclosed_tags() {
    let adversarial = "<a>".repeat(15_000);
    assert_fast("Unclosed tags", &adversarial);
}

#[test]
fn test_redos_resistance_open_tag_attributes() {
    let adversarial = "<div class=\"".to_string() + &"a".repeat(10_000);
    assert_fast("Open tag attributes", &adversarial);
}

#[test]
fn test_redos_resistance_nested_braces() {
    let adversarial = "{".repeat(20_000) + &"}".repeat(20_000);
    assert_fast("Nested braces", &adversarial);
}

#[test]
fn test_redos_resistance_long_single_line() {
    let adversarial = "fn (".to_string() + &"a, ".repeat(10_000);
    assert_fast("Long single line", &adversarial);
}

#[test]
fn test_redos_resistance_many_lines() {
    let adversarial = "def x():\n".repeat(20_000);
    assert_fast("Many lines", &adversarial);
}

#[test]
fn test_oversized_input_is_capped() {
    let adversarial = "x = 1;\n".repeat(200_000);
    assert_fast("Oversized input", &adversarial);
}
