//! Integration tests for the built-in directive formatters.

use chrono::NaiveDate;
use icumf::{Args, ErrorKind, FormatError, LocaleContext, MessageFormat, Value, args};

fn strict() -> MessageFormat {
    MessageFormat::builder().strict(true).build()
}

fn render(pattern: &str, locale: &str, args: &Args) -> Result<String, FormatError> {
    strict().format(pattern, &LocaleContext::new(locale), args)
}

fn date(y: i32, m: u32, d: u32, h: u32, min: u32) -> Value {
    Value::from(
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap(),
    )
}

// =============================================================================
// count / number / value
// =============================================================================

#[test]
fn count_renders_digits() {
    assert_eq!(
        render("You have {n, count} messages", "en", &args! { "n" => 3 }).unwrap(),
        "You have 3 messages"
    );
}

#[test]
fn count_accepts_numeric_strings_and_floats() {
    assert_eq!(render("{n, count}", "en", &args! { "n" => "12" }).unwrap(), "12");
    assert_eq!(render("{n, count}", "en", &args! { "n" => 2.5 }).unwrap(), "2.5");
}

#[test]
fn count_missing_argument() {
    let err = render("{n, count}", "en", &args! {}).unwrap_err();
    assert!(matches!(err, FormatError::MissingArgument { ref name } if name == "n"));
    assert_eq!(err.kind(), ErrorKind::Argument);
}

#[test]
fn count_rejects_non_numeric() {
    let err = render("{n, count}", "en", &args! { "n" => "lots" }).unwrap_err();
    assert_eq!(err.to_string(), "argument 'n' must be a number, got string");
}

#[test]
fn count_large_unsigned_stays_positive() {
    let pattern = "{n, count} {n, plural, one {file} other {files}}";
    assert_eq!(
        render(pattern, "en", &args! { "n" => u64::MAX }).unwrap(),
        "18446744073709552000 files"
    );
    assert_eq!(
        render(pattern, "en", &args! { "n" => i64::MAX as u64 }).unwrap(),
        "9223372036854775807 files"
    );
}

#[test]
fn number_styles() {
    let a = args! { "x" => 0.256 };
    assert_eq!(render("{x, number}", "en", &a).unwrap(), "0.256");
    assert_eq!(render("{x, number, percent}", "en", &a).unwrap(), "26%");
    assert_eq!(
        render("{x, number, integer}", "en", &args! { "x" => 7.6 }).unwrap(),
        "8"
    );
}

#[test]
fn number_unknown_style() {
    let err = render("{x, number, scientific}", "en", &args! { "x" => 1 }).unwrap_err();
    assert!(matches!(err, FormatError::InvalidStyle { .. }), "{err}");
}

#[test]
fn value_renders_any_argument() {
    let engine = strict();
    let ctx = LocaleContext::default();
    assert_eq!(
        engine
            .format("icu:Hello, {name}!", &ctx, &args! { "name" => "Ada" })
            .unwrap(),
        "Hello, Ada!"
    );
    assert_eq!(
        engine
            .format("icu:{when}", &ctx, &args! { "when" => date(2024, 1, 5, 14, 30) })
            .unwrap(),
        "2024-01-05T14:30:00"
    );
}

// =============================================================================
// plural
// =============================================================================

const FILES: &str = "{n, plural, =0 {no files} one {# file} other {# files}}";

#[test]
fn plural_english() {
    assert_eq!(render(FILES, "en", &args! { "n" => 1 }).unwrap(), "1 file");
    assert_eq!(render(FILES, "en", &args! { "n" => 2 }).unwrap(), "2 files");
}

#[test]
fn plural_exact_match_wins() {
    assert_eq!(render(FILES, "en", &args! { "n" => 0 }).unwrap(), "no files");
    assert_eq!(render(FILES, "en", &args! { "n" => 0.0 }).unwrap(), "no files");
}

#[test]
fn plural_fractions_select_other() {
    assert_eq!(render(FILES, "en", &args! { "n" => 1.5 }).unwrap(), "1.5 files");
}

#[test]
fn plural_russian_categories() {
    let pattern = "{n, plural, one {# файл} few {# файла} many {# файлов} other {# файла}}";
    assert_eq!(render(pattern, "ru", &args! { "n" => 1 }).unwrap(), "1 файл");
    assert_eq!(render(pattern, "ru", &args! { "n" => 3 }).unwrap(), "3 файла");
    assert_eq!(render(pattern, "ru", &args! { "n" => 5 }).unwrap(), "5 файлов");
    assert_eq!(render(pattern, "ru", &args! { "n" => 21 }).unwrap(), "21 файл");
}

#[test]
fn plural_missing_category_falls_back_to_other() {
    let pattern = "{n, plural, other {# items}}";
    assert_eq!(render(pattern, "en", &args! { "n" => 1 }).unwrap(), "1 items");
}

#[test]
fn plural_without_other_fails() {
    let err = render("{n, plural, one {one item}}", "en", &args! { "n" => 4 }).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Selection);
    assert!(err.to_string().ends_with("available: one"), "{err}");
}

#[test]
fn plural_requires_numeric_argument() {
    let err = render(FILES, "en", &args! { "n" => "many" }).unwrap_err();
    assert!(matches!(err, FormatError::InvalidArgument { .. }), "{err}");
}

// =============================================================================
// selectordinal
// =============================================================================

#[test]
fn selectordinal_english() {
    let pattern = "{n, selectordinal, one {#st} two {#nd} few {#rd} other {#th}}";
    let expected = [
        (1, "1st"),
        (2, "2nd"),
        (3, "3rd"),
        (4, "4th"),
        (11, "11th"),
        (12, "12th"),
        (22, "22nd"),
        (103, "103rd"),
    ];
    for (n, text) in expected {
        assert_eq!(render(pattern, "en", &args! { "n" => n }).unwrap(), text);
    }
}

// =============================================================================
// select
// =============================================================================

const GENDER: &str = "{g, select, female {She} male {He} other {They}} replied";

#[test]
fn select_matches_key() {
    assert_eq!(
        render(GENDER, "en", &args! { "g" => "female" }).unwrap(),
        "She replied"
    );
    assert_eq!(render(GENDER, "en", &args! { "g" => "male" }).unwrap(), "He replied");
}

#[test]
fn select_falls_back_to_other() {
    assert_eq!(
        render(GENDER, "en", &args! { "g" => "unknown" }).unwrap(),
        "They replied"
    );
}

#[test]
fn select_matches_display_form_of_numbers() {
    let pattern = "{tier, select, 1 {gold} 2 {silver} other {bronze}}";
    assert_eq!(render(pattern, "en", &args! { "tier" => 2 }).unwrap(), "silver");
}

#[test]
fn select_suggests_close_keys() {
    let err = render(
        "{g, select, female {She} male {He}}",
        "en",
        &args! { "g" => "femal" },
    )
    .unwrap_err();
    let FormatError::MissingSelector { suggestions, .. } = &err else {
        panic!("expected MissingSelector, got {err:?}");
    };
    assert_eq!(suggestions, &vec!["female".to_string()]);
    assert!(err.to_string().ends_with("did you mean: female?"), "{err}");
}

#[test]
fn plural_inside_select() {
    let pattern = "{g, select, female {She has {n, plural, one {# cat} other {# cats}}} other {They have {n, plural, one {# cat} other {# cats}}}}";
    assert_eq!(
        render(pattern, "en", &args! { "g" => "female", "n" => 1 }).unwrap(),
        "She has 1 cat"
    );
    assert_eq!(
        render(pattern, "en", &args! { "g" => "x", "n" => 4 }).unwrap(),
        "They have 4 cats"
    );
}

// =============================================================================
// date
// =============================================================================

#[test]
fn date_named_styles() {
    let a = args! { "d" => date(2024, 1, 5, 14, 30) };
    let cases = [
        ("{d, date}", "Jan 5, 2024"),
        ("{d, date, medium}", "Jan 5, 2024"),
        ("{d, date, short}", "2024-01-05"),
        ("{d, date, long}", "January 5, 2024"),
        ("{d, date, full}", "Friday, January 5, 2024"),
        ("{d, date, time}", "14:30"),
        ("{d, date, datetime}", "2024-01-05 14:30"),
        ("{d, date, iso}", "2024-01-05T14:30:00"),
    ];
    for (pattern, expected) in cases {
        assert_eq!(render(pattern, "en", &a).unwrap(), expected, "{pattern}");
    }
}

#[test]
fn date_strftime_style() {
    let a = args! { "d" => date(2024, 12, 31, 8, 5) };
    assert_eq!(render("{d, date, %d.%m.%Y}", "en", &a).unwrap(), "31.12.2024");
}

#[test]
fn date_invalid_pattern() {
    let a = args! { "d" => date(2024, 12, 31, 8, 5) };
    let err = render("{d, date, %Q}", "en", &a).unwrap_err();
    assert!(matches!(err, FormatError::InvalidStyle { .. }), "{err}");
}

#[test]
fn date_from_plain_date() {
    let a = args! { "d" => NaiveDate::from_ymd_opt(2023, 7, 4).unwrap() };
    assert_eq!(render("{d, date, short}", "en", &a).unwrap(), "2023-07-04");
}

#[test]
fn date_rejects_other_values() {
    let err = render("{d, date}", "en", &args! { "d" => "yesterday" }).unwrap_err();
    assert_eq!(err.to_string(), "argument 'd' must be a date, got string");
}
