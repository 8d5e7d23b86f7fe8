use std::io::Cursor;

use improve_cli::config::OutputFormat;
use improve_cli::render::RenderOptions;
use improve_cli::session::{Command, HELP, Outcome, Session};
use improve_score::FindingId;

fn text_session() -> Session {
    Session::new(RenderOptions::default())
}

#[test]
fn parse_keywords() {
    assert_eq!(Command::parse("show"), Some(Command::Show));
    assert_eq!(Command::parse("  json \n"), Some(Command::Json));
    assert_eq!(Command::parse("reset"), Some(Command::Reset));
    assert_eq!(Command::parse("?"), Some(Command::Help));
    assert_eq!(Command::parse("exit"), Some(Command::Quit));
    assert_eq!(Command::parse(""), None);
    assert_eq!(Command::parse("   "), None);
}

#[test]
fn parse_indexes_map_to_catalog_ids() {
    assert_eq!(
        Command::parse("1"),
        Some(Command::Toggle("previousVTE".to_string()))
    );
    assert_eq!(
        Command::parse("7"),
        Some(Command::Toggle("ageOver60".to_string()))
    );
    // Out-of-range indexes fall through as ids and fail at the engine.
    assert_eq!(Command::parse("8"), Some(Command::Toggle("8".to_string())));
    assert_eq!(Command::parse("0"), Some(Command::Toggle("0".to_string())));
}

#[test]
fn toggle_rerenders_view() {
    let mut session = text_session();
    let Outcome::Print(text) = session.apply(Command::parse("previousVTE").unwrap()).unwrap() else {
        panic!("expected output");
    };
    assert!(text.contains("[x]      Previous VTE (+3)"));
    assert!(text.contains("Total Score: 3\n"));
    assert!(text.contains("3-month risk of VTE: 1.7%\n"));
    assert!(text.contains("[HIGH RISK]"));
}

#[test]
fn unknown_finding_leaves_state_alone() {
    let mut session = text_session();
    session.apply(Command::parse("2").unwrap()).unwrap();

    let outcome = session.apply(Command::parse("bogus").unwrap()).unwrap();
    assert_eq!(
        outcome,
        Outcome::Print("unknown finding 'bogus' (type `help` for commands)\n".to_string())
    );
    assert_eq!(session.engine().score(), 2);
    assert!(
        session
            .engine()
            .findings()
            .is_present(FindingId::KnownThrombophilia)
    );
}

#[test]
fn reset_clears_findings() {
    let mut session = text_session();
    session.apply(Command::Toggle("currentCancer".to_string())).unwrap();
    session.apply(Command::Reset).unwrap();
    assert_eq!(session.engine().score(), 0);
}

#[test]
fn json_command_prints_assessment() {
    let mut session = text_session();
    session.apply(Command::Toggle("icuCcuStay".to_string())).unwrap();
    let Outcome::Print(text) = session.apply(Command::Json).unwrap() else {
        panic!("expected output");
    };
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["score"], 1);
    assert_eq!(value["risk"], "0.6%");
    assert_eq!(value["recommendation"], "no_pharmacologic_prophylaxis");
    assert_eq!(value["findings"]["icuCcuStay"], true);
}

#[test]
fn run_processes_lines_until_quit() {
    let input = Cursor::new("1\n\n7\nquit\n5\n");
    let mut output = Vec::new();
    let mut session = text_session();
    session.run(input, &mut output).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains(HELP));
    assert!(text.contains("Total Score: 0\n"));
    assert!(text.contains("Total Score: 3\n"));
    assert!(text.contains("Total Score: 4\n"));
    assert!(text.contains("3-month risk of VTE: 2.9%\n"));
    // The line after quit is never applied.
    assert_eq!(session.engine().score(), 4);
}

#[test]
fn run_in_json_mode_skips_help() {
    let options = RenderOptions {
        format: OutputFormat::Json,
        show_reference: true,
    };
    let mut output = Vec::new();
    let mut session = Session::new(options);
    session.run(Cursor::new("q\n"), &mut output).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(!text.contains("Commands:"));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["score"], 0);
}
