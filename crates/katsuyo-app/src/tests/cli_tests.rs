use clap::Parser;
use katsuyo_config::Config;
use katsuyo_core::types::Formality;
use katsuyo_lang_japanese::{Person, Tense, Toggle};

use crate::cli::{Cli, Command};
use crate::run;
use crate::state::AppState;

fn state() -> AppState {
    AppState::new(Config::default()).unwrap()
}

fn run_args(args: &[&str]) -> String {
    let cli = Cli::try_parse_from(std::iter::once("katsuyo").chain(args.iter().copied())).unwrap();
    run(&state(), &cli).unwrap()
}

#[test]
fn test_parse_conjugate_toggles_in_order() {
    let cli = Cli::try_parse_from([
        "katsuyo",
        "conjugate",
        "食べる",
        "-t",
        "negative",
        "--toggle",
        "tense=past",
        "--formality",
        "polite",
    ])
    .unwrap();

    match cli.command {
        Command::Conjugate {
            verb,
            toggles,
            formality,
        } => {
            assert_eq!(verb, "食べる");
            assert_eq!(toggles, vec![Toggle::Negative, Toggle::Tense(Tense::Past)]);
            assert_eq!(formality, Some(Formality::Polite));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_bad_toggle_is_rejected() {
    assert!(Cli::try_parse_from(["katsuyo", "conjugate", "食べる", "-t", "mood=loud"]).is_err());
    assert!(Cli::try_parse_from(["katsuyo", "form", "食べる", "past past"]).is_err());
}

#[test]
fn test_parse_form_person() {
    let cli = Cli::try_parse_from(["katsuyo", "form", "読む", "past", "-p", "third"]).unwrap();
    match cli.command {
        Command::Form { person, .. } => assert_eq!(person, Person::Third),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_run_conjugate() {
    let out = run_args(&[
        "conjugate",
        "食べる",
        "-t",
        "negative",
        "-t",
        "tense=past",
        "-f",
        "polite",
    ]);
    assert!(out.starts_with("食べませんでした\n"));
    assert!(out.contains("construction: past negative"));
    assert!(out.contains("source: derived"));
}

#[test]
fn test_run_conjugate_te_mood() {
    let out = run_args(&["conjugate", "飲む", "-t", "mood=te"]);
    assert!(out.starts_with("飲んで\n"));
    assert!(out.contains("gloss: I verb and..."));
}

#[test]
fn test_run_grid_json() {
    let out = run_args(&["--json", "grid", "行く", "-t", "modifier=desiderative"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["construction"], "desiderative");
    let forms: Vec<&str> = value["cells"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["surface_form"].as_str().unwrap())
        .collect();
    assert_eq!(forms, ["行きたい", "行きたい", "行きたいです", "行きたいです"]);
}

#[test]
fn test_run_form() {
    let out = run_args(&["form", "待つ", "past negative causative passive", "-f", "formal"]);
    assert!(out.starts_with("待たせられませんでした\n"));
}

#[test]
fn test_run_classify() {
    assert_eq!(run_args(&["classify", "食べる"]), "食べる: ru-ichidan\n");
    assert_eq!(run_args(&["classify", "する"]), "する: irregular\n");
    assert_eq!(run_args(&["classify", "来る"]), "来る: irregular\n");

    let out = run_args(&["--json", "classify", "する"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["irregular"], true);
    assert!(value["class"].is_null());
}

#[test]
fn test_run_rejects_non_japanese() {
    let cli = Cli::try_parse_from(["katsuyo", "conjugate", "taberu"]).unwrap();
    assert!(run(&state(), &cli).is_err());
}

#[test]
fn test_run_constructions() {
    let out = run_args(&["constructions"]);
    assert_eq!(out.lines().next(), Some("simple present"));
    assert!(out.lines().any(|l| l == "te form"));
}

#[test]
fn test_run_provide() {
    let out = run_args(&["provide", "飲む"]);
    assert!(out.lines().any(|l| l.starts_with("present") && l.contains("飲む")));
}
