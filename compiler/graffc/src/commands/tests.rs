#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use crate::reporting::ColorMode;

use super::*;

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| (*s).to_string()).collect()
}

fn quiet_reporter() -> Reporter<Vec<u8>> {
    Reporter::with_color_mode(Vec::new(), ColorMode::Never, false)
}

// === Argument splitting ===

#[test]
fn options_and_positionals_interleave() {
    let (options, positional) =
        split_args(&strings(&["sin(x)", "--width=10", "x^2", "--seed=4"])).unwrap();
    assert_eq!(positional, strings(&["sin(x)", "x^2"]));
    assert_eq!(options.width, Some(10));
    assert_eq!(options.seed, Some(4));
}

#[test]
fn single_dash_is_positional() {
    let (_, positional) = split_args(&strings(&["-x^2", "-3"])).unwrap();
    assert_eq!(positional, strings(&["-x^2", "-3"]));
}

#[test]
fn double_dash_ends_options() {
    let (options, positional) =
        split_args(&strings(&["--var=t", "--", "--t", "--width=3"])).unwrap();
    assert_eq!(options.variable.as_deref(), Some("t"));
    assert_eq!(positional, strings(&["--t", "--width=3"]));
    assert_eq!(options.width, None);
}

#[test]
fn bad_option_is_an_error() {
    assert!(split_args(&strings(&["x", "--bogus"])).is_err());
}

// === Shared helpers ===

#[test]
fn compile_all_reports_every_failure() {
    let mut reporter = quiet_reporter();
    let err = compile_all(&strings(&["2+", "x", "(("]), "x", &mut reporter).unwrap_err();
    assert!(matches!(err, CommandError::Rejected { count: 2 }));

    let text = String::from_utf8(reporter.into_inner()).unwrap();
    assert!(text.contains("[E1002]"));
    assert!(text.contains("[E1004]"));
    assert!(text.contains("aborting due to 2 previous errors"));
}

#[test]
fn compile_all_keeps_order() {
    let mut reporter = quiet_reporter();
    let programs = compile_all(&strings(&["x+1", "2*x"]), "x", &mut reporter).unwrap();
    let rpn: Vec<String> = programs.iter().map(ToString::to_string).collect();
    assert_eq!(rpn, strings(&["x 1 +", "2 x *"]));
}

#[test]
fn undefined_values_print_as_words() {
    assert_eq!(format_value(f64::NAN), "undefined");
    assert_eq!(format_value(2.5), "2.5");
    assert_eq!(format_value(-0.0), "-0");
}
