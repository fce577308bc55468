//! Voltlab - Circuit Evaluator
//!
//! Evaluates a board graph exported by the lab UI and reports whether the
//! circuit is complete, what is powered and which LEDs light. With an
//! experiment's solution spec, checks the board against it instead.
//!
//! # Usage
//!
//! ```bash
//! voltlab board.json
//! voltlab board.json --solution experiment.json
//! voltlab board.json --json | jq .litLeds
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;
use voltlab_core::{
    circuit::{validate_solution, CircuitGraph, ExpectedSolution},
    error::{Result, VoltlabError},
    evaluate, Evaluation, Validation,
};

/// Circuit evaluator for the Voltlab electronics lab
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the board graph JSON (nodes + edges)
    #[arg(value_name = "GRAPH_FILE")]
    graph_file: PathBuf,

    /// Check the board against an experiment solution spec
    #[arg(short, long, value_name = "SOLUTION_FILE")]
    solution: Option<PathBuf>,

    /// Emit the result as JSON instead of a human-readable summary
    #[arg(long)]
    json: bool,
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|source| VoltlabError::file_read(path.display().to_string(), source))
}

fn print_evaluation(result: &Evaluation) {
    println!(
        "complete: {}",
        if result.is_complete { "yes" } else { "no" }
    );
    println!("paths:    {}", result.complete_paths.len());
    print_set("powered", &result.powered_nodes);
    print_set("active", &result.active_components);
    print_set("lit", &result.lit_leds);
}

fn print_set(label: &str, set: &std::collections::BTreeSet<String>) {
    let items: Vec<&str> = set.iter().map(String::as_str).collect();
    println!("{label}:  {}", if items.is_empty() { "-".to_string() } else { items.join(", ") });
}

fn print_validation(result: &Validation) {
    println!(
        "verdict:  {}",
        if result.is_correct { "correct" } else { "incorrect" }
    );
    println!("feedback: {}", result.feedback);
    print_evaluation(&result.simulation);
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let graph = CircuitGraph::from_json(&read_file(&args.graph_file)?)?;
    info!(
        "loaded graph: {} node(s), {} edge(s)",
        graph.nodes.len(),
        graph.edges.len()
    );

    if let Some(solution_path) = &args.solution {
        let expected = ExpectedSolution::from_json(&read_file(solution_path)?)?;
        let result = validate_solution(&graph, Some(&expected));
        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|source| VoltlabError::Encode { source })?
            );
        } else {
            print_validation(&result);
        }
    } else {
        let result = evaluate(&graph);
        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|source| VoltlabError::Encode { source })?
            );
        } else {
            print_evaluation(&result);
        }
    }

    Ok(())
}
