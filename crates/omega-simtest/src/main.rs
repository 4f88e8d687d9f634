//! Omega Sector Headless Session Harness
//!
//! Validates the vault logic and full scripted sessions without a console.
//! Runs entirely in-process — no stdin, no real randomness.
//!
//! Usage:
//!   cargo run -p omega-simtest
//!   cargo run -p omega-simtest -- --verbose

use std::collections::BTreeMap;

use omega_logic::config::SessionConfig;
use omega_logic::object::{InventoryObject, ObjectKind};
use omega_logic::random::FixedRandom;
use omega_logic::stability::{Stability, STABILITY_MAX};
use omega_terminal::{ScriptedSource, SessionController, SessionOutcome};
use serde::Deserialize;

// ── Scripted sessions ───────────────────────────────────────────────────
const SCENARIOS_JSON: &str = include_str!("../data/scenarios.json");

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    input: Vec<String>,
    #[serde(default)]
    kinds: Vec<ObjectKind>,
    #[serde(default)]
    suffixes: Vec<u32>,
    expect: Expectation,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
enum ExpectedOutcome {
    Quit,
    InputClosed,
    Collapsed,
}

#[derive(Debug, Deserialize)]
struct Expectation {
    outcome: ExpectedOutcome,
    #[serde(default)]
    collapsed_id: Option<String>,
    #[serde(default)]
    stability: BTreeMap<String, f64>,
    #[serde(default)]
    output_contains: Vec<String>,
    #[serde(default)]
    output_excludes: Vec<String>,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Omega Sector Session Harness ===\n");

    let mut results = Vec::new();

    // 1. Variant table consistency
    results.extend(validate_variant_table(verbose));

    // 2. Stability value invariants
    results.extend(validate_stability(verbose));

    // 3. Object lifecycles
    results.extend(validate_lifecycles(verbose));

    // 4. Scripted sessions
    results.extend(validate_scripted_sessions(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn check(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail,
    }
}

// ── 1. Variant Table ────────────────────────────────────────────────────

fn validate_variant_table(verbose: bool) -> Vec<TestResult> {
    println!("--- Variant Table ---");
    let mut results = Vec::new();

    let kinds = ObjectKind::all();
    results.push(check(
        "variant_count",
        kinds.len() == 3,
        format!("{} variants", kinds.len()),
    ));

    // Danger and analysis cost both rise with the variant
    let dangers: Vec<u8> = kinds.iter().map(|k| k.spec().danger_level).collect();
    let costs: Vec<f64> = kinds.iter().map(|k| k.spec().analysis_cost).collect();
    results.push(check(
        "variant_danger_ordering",
        dangers.windows(2).all(|w| w[0] < w[1]),
        format!("dangers {:?}", dangers),
    ));
    results.push(check(
        "variant_cost_ordering",
        costs.windows(2).all(|w| w[0] < w[1]),
        format!("costs {:?}", costs),
    ));

    let coolable: Vec<_> = kinds.iter().filter(|k| k.is_coolable()).collect();
    results.push(check(
        "variant_coolable_set",
        coolable == [&ObjectKind::DarkMatter, &ObjectKind::AntiMatter],
        format!("coolable: {:?}", coolable),
    ));

    let bad_boost: Vec<_> = kinds
        .iter()
        .filter(|k| k.spec().cooldown_boost.is_some_and(|b| b <= 0.0))
        .collect();
    results.push(check(
        "variant_positive_boost",
        bad_boost.is_empty(),
        if bad_boost.is_empty() {
            "all cooldown boosts are positive".into()
        } else {
            format!("non-positive boost on {:?}", bad_boost)
        },
    ));

    if verbose {
        for k in kinds {
            let spec = k.spec();
            println!(
                "  {:<12} danger={:>2} cost={:>4.1} boost={:?}",
                spec.name, spec.danger_level, spec.analysis_cost, spec.cooldown_boost
            );
        }
    }

    results
}

// ── 2. Stability ────────────────────────────────────────────────────────

fn validate_stability(verbose: bool) -> Vec<TestResult> {
    println!("--- Stability Value ---");
    let mut results = Vec::new();

    // Sweep writes from -200 to +200 in 0.5 steps
    let mut s = Stability::new();
    let mut max_seen = s.get();
    let mut breaches = 0;
    let mut exact_misses = 0;
    for i in -400..=400 {
        let v = i as f64 * 0.5;
        match s.set(v) {
            Ok(stored) => {
                if v <= STABILITY_MAX && stored != v {
                    exact_misses += 1;
                }
            }
            Err(_) => breaches += 1,
        }
        max_seen = max_seen.max(s.get());
    }
    results.push(check(
        "stability_never_above_max",
        max_seen <= STABILITY_MAX,
        format!("max observed {:.2}", max_seen),
    ));
    results.push(check(
        "stability_breach_count",
        breaches == 401,
        format!("{} of 801 writes rejected (expected 401)", breaches),
    ));
    results.push(check(
        "stability_in_range_exact",
        exact_misses == 0,
        format!("{} in-range writes not stored exactly", exact_misses),
    ));

    let mut obj = InventoryObject::new("SIM-1", ObjectKind::DataPacket);
    let fault = obj.set_stability(-1.0);
    results.push(check(
        "stability_fault_owner",
        fault.as_ref().map_err(|f| f.id.as_str()) == Err("SIM-1"),
        format!("{:?}", fault),
    ));

    if verbose {
        println!("  swept 801 writes, {} breaches", breaches);
    }

    results
}

// ── 3. Lifecycles ───────────────────────────────────────────────────────

/// Number of analyses an untouched object survives before collapsing.
fn analyses_until_collapse(kind: ObjectKind) -> usize {
    let mut obj = InventoryObject::new("SIM-LIFE", kind);
    let mut count = 0;
    while obj.analyze().is_ok() {
        count += 1;
    }
    count + 1
}

/// Run an emergency cooldown; `false` if the object is not coolable or it failed.
fn cool_down(obj: &mut InventoryObject) -> bool {
    obj.coolable()
        .map(|c| c.emergency_cooldown().is_ok())
        .unwrap_or(false)
}

fn validate_lifecycles(verbose: bool) -> Vec<TestResult> {
    println!("--- Object Lifecycles ---");
    let mut results = Vec::new();

    for (kind, expected) in [
        (ObjectKind::DataPacket, 20),
        (ObjectKind::DarkMatter, 7),
        (ObjectKind::AntiMatter, 4),
    ] {
        let n = analyses_until_collapse(kind);
        results.push(check(
            &format!("lifecycle_{:?}", kind),
            n == expected,
            format!("collapses on analysis #{} (expected #{})", n, expected),
        ));
        if verbose {
            println!("  {:?}: collapse on analysis #{}", kind, n);
        }
    }

    let mut anti = InventoryObject::new("SIM-2", ObjectKind::AntiMatter);
    let cooled = anti.set_stability(30.0).is_ok() && cool_down(&mut anti);
    results.push(check(
        "lifecycle_cooldown_from_30",
        cooled && anti.stability() == 80.0,
        format!("stability {:.2}", anti.stability()),
    ));

    let mut anti = InventoryObject::new("SIM-3", ObjectKind::AntiMatter);
    let cooled = anti.set_stability(90.0).is_ok() && cool_down(&mut anti);
    results.push(check(
        "lifecycle_cooldown_clamp",
        cooled && anti.stability() == STABILITY_MAX,
        format!("stability {:.2}", anti.stability()),
    ));

    results
}

// ── 4. Scripted Sessions ────────────────────────────────────────────────

fn validate_scripted_sessions(verbose: bool) -> Vec<TestResult> {
    println!("--- Scripted Sessions ---");
    let mut results = Vec::new();

    let scenarios: Vec<Scenario> = match serde_json::from_str(SCENARIOS_JSON) {
        Ok(s) => s,
        Err(e) => {
            results.push(check(
                "scenarios_parse",
                false,
                format!("JSON parse error: {}", e),
            ));
            return results;
        }
    };

    results.push(check(
        "scenarios_not_empty",
        !scenarios.is_empty(),
        format!("{} scenarios loaded", scenarios.len()),
    ));

    for scenario in &scenarios {
        results.push(run_scenario(scenario, verbose));
    }

    results
}

fn run_scenario(scenario: &Scenario, verbose: bool) -> TestResult {
    let name = format!("session_{}", scenario.name);
    let mut session = match SessionController::new(
        SessionConfig::default(),
        ScriptedSource::new(scenario.input.iter().cloned()),
        FixedRandom::new(
            scenario.kinds.iter().copied(),
            scenario.suffixes.iter().copied(),
        ),
        Vec::new(),
    ) {
        Ok(s) => s,
        Err(e) => return check(&name, false, format!("config error: {}", e)),
    };

    let outcome = match session.run() {
        Ok(o) => o,
        Err(e) => return check(&name, false, format!("I/O error: {}", e)),
    };
    let output = String::from_utf8_lossy(session.output()).into_owned();
    if verbose {
        println!("  {} -> {:?}", scenario.name, outcome);
    }

    let mut problems = Vec::new();
    let expect = &scenario.expect;

    let actual = match &outcome {
        SessionOutcome::Quit => ExpectedOutcome::Quit,
        SessionOutcome::InputClosed => ExpectedOutcome::InputClosed,
        SessionOutcome::Collapsed(_) => ExpectedOutcome::Collapsed,
    };
    if actual != expect.outcome {
        problems.push(format!("outcome {:?}, expected {:?}", actual, expect.outcome));
    }

    if let Some(id) = &expect.collapsed_id {
        match &outcome {
            SessionOutcome::Collapsed(fault) if &fault.id == id => {}
            other => problems.push(format!("expected collapse of {}, got {:?}", id, other)),
        }
    }

    for (id, expected) in &expect.stability {
        match session.store().find_by_id(id) {
            Some(obj) if (obj.stability() - expected).abs() < 1e-9 => {}
            Some(obj) => problems.push(format!(
                "{} stability {:.2}, expected {:.2}",
                id,
                obj.stability(),
                expected
            )),
            None => problems.push(format!("{} missing from vault", id)),
        }
    }

    for needle in &expect.output_contains {
        if !output.contains(needle.as_str()) {
            problems.push(format!("output lacks '{}'", needle));
        }
    }
    for needle in &expect.output_excludes {
        if output.contains(needle.as_str()) {
            problems.push(format!("output unexpectedly has '{}'", needle));
        }
    }

    if problems.is_empty() {
        check(
            &name,
            true,
            format!(
                "{:?} after {} commands",
                outcome,
                session.commands_handled()
            ),
        )
    } else {
        check(&name, false, problems.join("; "))
    }
}
