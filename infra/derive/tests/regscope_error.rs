use regscope_derive::regscope_error;
use std::borrow::Cow;

#[regscope_error]
pub enum ScoreError {
    #[error("Score parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Score out of range{}: {message}", format_context(.context))]
    Range { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal score error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse_score(raw: &str) -> Result<u8, ScoreError> {
    let value = raw.trim().parse::<u32>().context("Reading risk score")?;
    u8::try_from(value).map_err(|_| ScoreError::Range {
        message: format!("{value} does not fit a score").into(),
        context: None,
    })
}

#[test]
fn source_errors_convert_with_context() {
    let err = parse_score("abc").expect_err("not a number");
    assert!(matches!(err, ScoreError::Parse { context: Some(_), .. }));
    assert!(err.to_string().starts_with("Score parse error (Reading risk score): "));
}

#[test]
fn question_mark_converts_without_context() {
    fn inner() -> Result<u32, ScoreError> {
        Ok("x".parse::<u32>()?)
    }
    let err = inner().expect_err("not a number");
    assert!(matches!(err, ScoreError::Parse { context: None, .. }));
}

#[test]
fn context_is_attached_to_own_errors() {
    let err = parse_score("300").context("Screening CUST-1").expect_err("out of range");
    assert_eq!(err.to_string(), "Score out of range (Screening CUST-1): 300 does not fit a score");
}

#[test]
fn internal_variant_accepts_strings() {
    let from_static: ScoreError = "broken".into();
    let from_owned: ScoreError = String::from("also broken").into();
    assert_eq!(from_static.to_string(), "Internal score error: broken");
    assert_eq!(from_owned.to_string(), "Internal score error: also broken");
}

#[test]
fn expansion_compiles_in_isolation() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/error_pass.rs");
}
