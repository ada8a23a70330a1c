//! Property-based tests for the log reader
//!
//! Invariants under test:
//! - parsing is deterministic and structurally faithful to the emitted log
//! - the run list length equals the number of end-of-run markers
//! - literal lists survive a render/parse round trip
//! - boolean token case never changes the parsed value

use evolog::{literal, reader, Literal};
use proptest::prelude::*;
use std::fmt::Write as _;

/// One synthetic run the generator will emit and the parser must recover.
#[derive(Debug, Clone)]
struct RunSpec {
    index: i64,
    generations: Vec<(i64, f64, f64, f64, f64)>,
    best_value: f64,
    best_value_normalized: f64,
}

fn arb_stat() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6
}

fn arb_run_spec() -> impl Strategy<Value = RunSpec> {
    (
        1i64..100,
        prop::collection::vec(
            (0i64..100_000, arb_stat(), arb_stat(), arb_stat(), arb_stat()),
            0..20,
        ),
        arb_stat(),
        arb_stat(),
    )
        .prop_map(|(index, generations, best_value, best_value_normalized)| RunSpec {
            index,
            generations,
            best_value,
            best_value_normalized,
        })
}

/// Render the log text a runner would emit for these runs.
fn render_log(name: &str, runs: &[RunSpec], noise: bool) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "INFO - Problem: {name}");
    if noise {
        text.push_str("runner booted\n# comment line\n");
    }
    for run in runs {
        let _ = writeln!(text, "INFO - Run: {}", run.index);
        for (generation, best_all, best_population, mean, worst) in &run.generations {
            let _ = writeln!(
                text,
                "INFO - State Individual: {generation} {best_all} {best_population} {mean} {worst}"
            );
            if noise {
                text.push_str("DEBUG - worker heartbeat\n");
            }
        }
        let _ = writeln!(text, "INFO - Best Individual Value Decoded: {}", run.best_value);
        let _ = writeln!(text, "INFO - Best Individual Value: {}", run.best_value_normalized);
        let _ = writeln!(text, "INFO - End Run: {}", run.index);
    }
    text
}

fn arb_literal_list() -> impl Strategy<Value = Literal> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(Literal::Int),
        arb_stat().prop_map(Literal::Float),
        any::<bool>().prop_map(Literal::Bool),
    ];
    let value = leaf.prop_recursive(4, 32, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(Literal::List)
    });
    prop::collection::vec(value, 0..6).prop_map(Literal::List)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: every emitted run is recovered, in order, with its values.
    #[test]
    fn prop_parse_recovers_emitted_runs(
        name in "[A-Z][A-Z0-9-]{0,11}",
        runs in prop::collection::vec(arb_run_spec(), 0..8),
        noise in any::<bool>(),
    ) {
        let text = render_log(&name, &runs, noise);
        let log = reader::parse_str(&text).unwrap();

        prop_assert_eq!(log.name(), name.as_str());
        prop_assert_eq!(log.runs().len(), runs.len());
        for (parsed, emitted) in log.runs().iter().zip(&runs) {
            prop_assert_eq!(parsed.run_index(), emitted.index);
            prop_assert_eq!(parsed.generations().len(), emitted.generations.len());
            for (sample, &(generation, best_all, best_population, mean, worst)) in
                parsed.generations().iter().zip(&emitted.generations)
            {
                prop_assert_eq!(sample.generation(), generation);
                prop_assert_eq!(sample.best_all(), best_all);
                prop_assert_eq!(sample.best_population(), best_population);
                prop_assert_eq!(sample.mean(), mean);
                prop_assert_eq!(sample.worst(), worst);
            }
            prop_assert_eq!(parsed.best_value(), emitted.best_value);
            prop_assert_eq!(parsed.best_value_normalized(), emitted.best_value_normalized);
        }
    }

    /// Property: parsing the same bytes twice yields equal structures.
    #[test]
    fn prop_parse_is_deterministic(
        name in "[A-Z][A-Z0-9-]{0,11}",
        runs in prop::collection::vec(arb_run_spec(), 0..5),
    ) {
        let text = render_log(&name, &runs, false);
        let once = reader::parse_str(&text).unwrap();
        let twice = reader::parse_str(&text).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Property: the reconstructed model survives a JSON round trip.
    #[test]
    fn prop_model_serde_round_trip(
        name in "[A-Z][A-Z0-9-]{0,11}",
        runs in prop::collection::vec(arb_run_spec(), 0..5),
    ) {
        let log = reader::parse_str(&render_log(&name, &runs, false)).unwrap();
        let json = serde_json::to_string(&log).unwrap();
        let back: evolog::ExperimentLog = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, log);
    }

    /// Property: a rendered literal list parses back to itself.
    #[test]
    fn prop_literal_display_round_trip(literal in arb_literal_list()) {
        let rendered = literal.to_string();
        let parsed = literal::parse_list(&rendered).unwrap();
        prop_assert_eq!(parsed, literal);
    }

    /// Property: boolean token case never changes the parsed value.
    #[test]
    fn prop_boolean_case_is_irrelevant(
        values in prop::collection::vec((any::<bool>(), any::<bool>()), 1..12),
    ) {
        let tokens: Vec<String> = values
            .iter()
            .map(|&(value, capitalize)| match (value, capitalize) {
                (true, true) => "True".to_string(),
                (true, false) => "true".to_string(),
                (false, true) => "False".to_string(),
                (false, false) => "false".to_string(),
            })
            .collect();
        let rendered = format!("[{}]", tokens.join(", "));
        let parsed = literal::parse_list(&rendered).unwrap();

        let expected = Literal::List(
            values.iter().map(|&(value, _)| Literal::Bool(value)).collect(),
        );
        prop_assert_eq!(parsed, expected);
    }
}
