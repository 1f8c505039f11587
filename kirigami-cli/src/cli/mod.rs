//! Command-line interface orchestration for the kirigami solver.
//!
//! The CLI offers a `run` command that loads a weighted edge-list file and
//! executes the cluster editing heuristic, printing the clustering and its
//! total cost.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, RunCommand, load_graph, render_summary, run_cli,
};
