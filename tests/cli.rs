//! 대화형 CLI 흐름 테스트. 표준 입출력 대신 메모리 버퍼를 쓴다.
use std::io::Cursor;

use cap_recycling_calculator::{
    app::{self, AppError},
    config::Config,
    form::FormError,
    i18n::Translator,
    recycling::{EstimateError, Period},
    ui_cli::{self, MenuChoice, Prompter},
};

fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output_of(io: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(io.into_output()).expect("utf-8 output")
}

#[test]
fn menu_retries_until_valid_choice() {
    let tr = Translator::new("en-us");
    let mut io = prompter("9\nx\n2\n");
    assert_eq!(ui_cli::main_menu(&mut io, &tr).expect("menu"), MenuChoice::Settings);
    let out = output_of(io);
    assert_eq!(out.matches("Invalid input. Please select again.").count(), 2);
}

#[test]
fn calculate_reprompts_on_bad_number_and_prints_result() {
    let tr = Translator::new("en-us");
    let cfg = Config::default();
    let mut io = prompter("10\nabc\n5\n20\nmonthly\n");
    let res = ui_cli::handle_calculate(&mut io, &tr, &cfg)
        .expect("flow")
        .expect("result");
    assert!((res.annual_weight_kg - 0.6).abs() < 1e-9);
    let out = output_of(io);
    assert!(out.contains("Enter a valid whole number for \"1L PET bottles\": abc"));
    assert!(out.contains("Estimated annual weight: 0.600 kg"));
    assert!(out.contains("Estimated annual value: R$ 0.59"));
}

#[test]
fn empty_period_uses_configured_default() {
    let tr = Translator::new("en-us");
    let cfg = Config {
        default_period: Period::Daily,
        ..Config::default()
    };
    let mut io = prompter("1\n0\n0\n\n");
    let res = ui_cli::handle_calculate(&mut io, &tr, &cfg)
        .expect("flow")
        .expect("result");
    assert!((res.annual_weight_kg - 365.0 / 500.0).abs() < 1e-9);
}

#[test]
fn negative_count_prints_message_and_no_result() {
    let tr = Translator::new("en-us");
    let cfg = Config::default();
    let mut io = prompter("-3\n0\n0\n4\n");
    let res = ui_cli::handle_calculate(&mut io, &tr, &cfg).expect("flow");
    assert!(res.is_none());
    let out = output_of(io);
    assert!(out.contains("Error: \"2L PET bottles\" cannot be negative: -3"));
    assert!(!out.contains("Estimated annual weight"));
}

#[test]
fn settings_changes_language() {
    let tr = Translator::new("en-us");
    let mut cfg = Config::default();
    let mut io = prompter("2\n");
    assert!(ui_cli::handle_settings(&mut io, &tr, &mut cfg).expect("settings"));
    assert_eq!(cfg.language, "pt-br");

    let mut io = prompter("\n");
    assert!(!ui_cli::handle_settings(&mut io, &tr, &mut cfg).expect("settings"));
    assert_eq!(cfg.language, "pt-br");
}

#[test]
fn run_loop_calculates_then_exits() {
    let mut cfg = Config {
        language: "en-us".into(),
        ..Config::default()
    };
    let mut tr = app::translator_for(&cfg, None);
    let mut io = prompter("1\n500\n0\n0\nannual\n0\n");
    app::run(&mut io, &mut cfg, &mut tr, false).expect("run");
    let out = output_of(io);
    assert!(out.contains("1.000 kg"));
    assert!(out.contains("Exiting the program."));
}

#[test]
fn run_loop_stops_on_end_of_input() {
    let mut cfg = Config::default();
    let mut tr = Translator::new("en-us");
    let mut io = prompter("1\n5\n");
    let err = app::run(&mut io, &mut cfg, &mut tr, false).unwrap_err();
    assert!(matches!(err, AppError::Io(ref e) if e.kind() == std::io::ErrorKind::UnexpectedEof));
}

fn run_estimate(
    counts: [&str; 3],
    period: Option<Period>,
    cfg: &Config,
) -> (Result<cap_recycling_calculator::recycling::EstimationResult, AppError>, String, String) {
    let tr = Translator::new("en-us");
    let mut out = Vec::new();
    let mut err = Vec::new();
    let res = app::run_estimate(&mut out, &mut err, &tr, cfg, counts, period);
    (
        res,
        String::from_utf8(out).expect("utf-8 stdout"),
        String::from_utf8(err).expect("utf-8 stderr"),
    )
}

#[test]
fn estimate_without_period_uses_configured_default() {
    let cfg = Config {
        default_period: Period::Weekly,
        ..Config::default()
    };
    let (res, out, err) = run_estimate(["10", "0", "0"], None, &cfg);
    let res = res.expect("estimate");
    assert!((res.annual_weight_kg - 10.0 * 52.0 / 500.0).abs() < 1e-9);
    assert!(out.contains("Estimated annual weight: 1.040 kg"));
    assert!(err.is_empty());
}

#[test]
fn estimate_explicit_period_overrides_config() {
    let cfg = Config {
        default_period: Period::Daily,
        ..Config::default()
    };
    let (res, out, _) = run_estimate(["10", "5", "20"], Some(Period::Monthly), &cfg);
    assert!((res.expect("estimate").annual_weight_kg - 0.6).abs() < 1e-9);
    assert!(out.contains("0.600 kg"));
    assert!(out.contains("R$ 0.59"));
}

#[test]
fn estimate_negative_count_is_invalid_argument() {
    let (res, out, err) = run_estimate(["-3", "0", "0"], Some(Period::Monthly), &Config::default());
    assert!(matches!(
        res,
        Err(AppError::Form(FormError::Estimate(EstimateError::InvalidArgument { value: -3, .. })))
    ));
    assert!(out.is_empty());
    assert!(err.contains("Error: \"2L PET bottles\" cannot be negative: -3"));
}

#[test]
fn estimate_decimal_count_is_parse_error() {
    let (res, out, err) = run_estimate(["1.5", "0", "0"], None, &Config::default());
    match res {
        Err(AppError::Form(FormError::Parse(e))) => assert_eq!(e.text, "1.5"),
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(out.is_empty());
    assert!(err.contains("1.5"));
}
