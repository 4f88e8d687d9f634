//! End-to-end sessions driven through the public terminal API.
//!
//! Exercises: ScriptedSource / ConsoleSource → SessionController
//! → InventoryStore → InventoryObject

use std::io::Cursor;

use omega_logic::config::SessionConfig;
use omega_logic::object::ObjectKind;
use omega_logic::random::{FixedRandom, RngSource};
use omega_terminal::{ConsoleSource, ScriptedSource, SessionController, SessionOutcome};

fn run_scripted(
    lines: &[&str],
    kinds: &[ObjectKind],
    suffixes: &[u32],
) -> (SessionOutcome, String, Vec<(String, f64)>) {
    let mut session = SessionController::new(
        SessionConfig::default(),
        ScriptedSource::new(lines.iter().copied()),
        FixedRandom::new(kinds.iter().copied(), suffixes.iter().copied()),
        Vec::new(),
    )
    .unwrap();
    let outcome = session.run().unwrap();
    let out = String::from_utf8_lossy(session.output()).into_owned();
    let objects: Vec<(String, f64)> = session
        .store()
        .list_all()
        .map(|it| it.map(|o| (o.id().to_string(), o.stability())).collect())
        .unwrap_or_default();
    (outcome, out, objects)
}

#[test]
fn empty_vault_reports_not_found_for_analyze_and_cooldown() {
    let (outcome, out, objects) = run_scripted(&["3", "OBJ-1", "4", "OBJ-1", "5"], &[], &[]);
    assert_eq!(outcome, SessionOutcome::Quit);
    assert!(objects.is_empty());
    assert_eq!(out.matches("was found").count(), 2);
}

#[test]
fn unknown_id_reports_not_found_with_populated_vault() {
    let (outcome, out, objects) = run_scripted(
        &["1", "3", "OBJ-2", "4", "OBJ-2", "5"],
        &[ObjectKind::DarkMatter],
        &[1],
    );
    assert_eq!(outcome, SessionOutcome::Quit);
    assert_eq!(objects, vec![("OBJ-1".to_string(), 100.0)]);
    assert_eq!(out.matches("No object with id 'OBJ-2' was found.").count(), 2);
}

#[test]
fn dark_matter_collapses_on_seventh_analysis() {
    let mut lines = vec!["1"];
    for _ in 0..7 {
        lines.extend(["3", "OBJ-250"]);
    }
    lines.push("5");
    let (outcome, out, objects) = run_scripted(&lines, &[ObjectKind::DarkMatter], &[250]);

    match outcome {
        SessionOutcome::Collapsed(fault) => {
            assert_eq!(fault.id, "OBJ-250");
            assert_eq!(fault.attempted, -5.0);
        }
        other => panic!("expected collapse, got {:?}", other),
    }
    // Rejected write leaves the last valid value in place
    assert_eq!(objects, vec![("OBJ-250".to_string(), 10.0)]);
    assert_eq!(out.matches("Energy is fluctuating!").count(), 6);
}

#[test]
fn duplicate_ids_act_on_first_object() {
    let (_, out, objects) = run_scripted(
        &["1", "1", "3", "OBJ-5", "2", "5"],
        &[ObjectKind::DataPacket, ObjectKind::AntiMatter],
        &[5, 5],
    );
    assert_eq!(
        objects,
        vec![("OBJ-5".to_string(), 95.0), ("OBJ-5".to_string(), 100.0)]
    );
    assert!(out.contains("ID: OBJ-5 | Stability: 95.00% | Danger: 1"));
    assert!(out.contains("ID: OBJ-5 | Stability: 100.00% | Danger: 10"));
}

#[test]
fn console_source_drives_a_session() {
    let input = Cursor::new("1\n2\n5\n");
    let config = SessionConfig {
        seed: Some(42),
        ..Default::default()
    };
    let random = RngSource::from_config(&config);
    let mut session =
        SessionController::new(config, ConsoleSource::new(input), random, Vec::new()).unwrap();

    assert_eq!(session.run().unwrap(), SessionOutcome::Quit);
    assert_eq!(session.store().len(), 1);

    let object = session.store().list_all().unwrap().next().unwrap();
    let suffix: u32 = object.id().trim_start_matches("OBJ-").parse().unwrap();
    assert!((100..=999).contains(&suffix));
    assert_eq!(object.stability(), 100.0);
}

#[test]
fn seeded_sessions_are_reproducible() {
    let run = || {
        let config = SessionConfig {
            seed: Some(7),
            ..Default::default()
        };
        let random = RngSource::from_config(&config);
        let mut session = SessionController::new(
            config,
            ScriptedSource::new(["1", "1", "1", "2", "5"]),
            random,
            Vec::new(),
        )
        .unwrap();
        session.run().unwrap();
        String::from_utf8_lossy(session.output()).into_owned()
    };
    assert_eq!(run(), run());
}
