//! Command implementations and argument parsing for the kirigami CLI.
//!
//! The `run` command loads a weighted edge list and executes the cluster
//! editing solver. The input format is line-based UTF-8: each line holds
//! `u v weight` separated by whitespace, where `u` and `v` are vertex ids
//! and `weight` is a signed decimal. `inf` and `-inf` pre-commit an edge
//! as always-present or never-present. Blank lines and lines starting
//! with `#` are ignored; the vertex count is one more than the largest id
//! mentioned; when a pair appears twice the later line wins.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use kirigami_core::{
    EditingSolution, EdgeWeight, GraphError, Kirigami, KirigamiBuilder, KirigamiError,
    WeightedGraph,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "kirigami", about = "Solve weighted cluster editing instances.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Solve an edge-list instance and print the clustering.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a UTF-8 edge list, one `u v weight` triple per line.
    pub path: PathBuf,

    /// Commit exact-zero edges immediately instead of queueing them.
    #[arg(long)]
    pub prune_zero_edges: bool,

    /// Cap the number of heuristic commitments; the result is flagged
    /// incomplete when the cap is hit.
    #[arg(long)]
    pub commit_limit: Option<usize>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading an input instance.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// An edge-list line could not be parsed.
    #[error("`{path}` line {line}: {message}")]
    Parse {
        /// Path of the malformed instance file.
        path: PathBuf,
        /// One-based line number of the malformed line.
        line: usize,
        /// What went wrong with the line.
        message: String,
    },
    /// The parsed instance was not a valid graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Core solving failed.
    #[error(transparent)]
    Core(#[from] KirigamiError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Display name of the solved instance (the file stem).
    pub instance: String,
    /// Solution produced by the solver.
    pub solution: EditingSolution,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when parsing or execution fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kirigami_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0 1 2.0\n0 2 2.0\n1 2 -5.0\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         prune_zero_edges: false,
///         commit_limit: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.solution.cluster_count(), 2);
/// assert_eq!(summary.solution.total_cost(), 2.0);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = field::Empty, prune_zero_edges = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        prune_zero_edges,
        commit_limit,
    } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("prune_zero_edges", field::display(prune_zero_edges));

    let mut builder = KirigamiBuilder::new().with_prune_zero_edges(prune_zero_edges);
    if let Some(limit) = commit_limit {
        builder = builder.with_commit_limit(limit);
    }
    let kirigami = builder.build()?;

    let graph = load_graph(&path)?;
    let summary = solve_instance(&kirigami, &path, &graph)?;
    info!(
        instance = summary.instance.as_str(),
        clusters = summary.solution.cluster_count(),
        total_cost = summary.solution.total_cost(),
        "command completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.solve", err, skip(kirigami, graph), fields(vertices = graph.vertex_count()))]
pub(super) fn solve_instance(
    kirigami: &Kirigami,
    path: &Path,
    graph: &WeightedGraph,
) -> Result<ExecutionSummary, CliError> {
    let solution = kirigami.solve(graph)?;
    Ok(ExecutionSummary {
        instance: derive_instance_name(path),
        solution,
    })
}

/// Loads a weighted graph from the edge-list file at `path`.
///
/// # Errors
/// Returns [`CliError::Io`] when the file cannot be read,
/// [`CliError::Parse`] for malformed lines, and [`CliError::Graph`] when
/// the parsed entries do not form a valid instance.
pub fn load_graph(path: &Path) -> Result<WeightedGraph, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_edge_list(path, BufReader::new(file))
}

pub(super) fn parse_edge_list(
    path: &Path,
    reader: impl BufRead,
) -> Result<WeightedGraph, CliError> {
    let mut entries: Vec<(usize, usize, f64)> = Vec::new();
    let mut max_vertex = None::<usize>;

    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        let (u, v, weight) = parse_entry(path, number, content)?;
        max_vertex = Some(max_vertex.unwrap_or(0).max(u).max(v));
        entries.push((u, v, weight));
    }

    let vertex_count = max_vertex.map_or(0, |max| max + 1);
    let mut graph = WeightedGraph::with_vertices(vertex_count);
    for (u, v, weight) in entries {
        graph.set_weight(u, v, weight_from_value(weight))?;
    }
    Ok(graph)
}

fn parse_entry(path: &Path, number: usize, content: &str) -> Result<(usize, usize, f64), CliError> {
    let parse_error = |message: String| CliError::Parse {
        path: path.to_path_buf(),
        line: number,
        message,
    };

    let mut tokens = content.split_whitespace();
    let mut next_token = |label: &str| {
        tokens
            .next()
            .ok_or_else(|| parse_error(format!("missing {label}")))
            .map(ToOwned::to_owned)
    };
    let u_token = next_token("first vertex id")?;
    let v_token = next_token("second vertex id")?;
    let weight_token = next_token("edge weight")?;
    if let Some(extra) = tokens.next() {
        return Err(parse_error(format!("unexpected trailing token `{extra}`")));
    }

    let u: usize = u_token
        .parse()
        .map_err(|_| parse_error(format!("invalid vertex id `{u_token}`")))?;
    let v: usize = v_token
        .parse()
        .map_err(|_| parse_error(format!("invalid vertex id `{v_token}`")))?;
    let weight: f64 = weight_token
        .parse()
        .map_err(|_| parse_error(format!("invalid edge weight `{weight_token}`")))?;
    Ok((u, v, weight))
}

/// Maps a parsed numeric weight onto the graph's weight states: `±inf`
/// select the sentinels, everything else stays finite (with `0`
/// normalising to Zero inside the store).
fn weight_from_value(value: f64) -> EdgeWeight {
    if value == f64::INFINITY {
        EdgeWeight::Permanent
    } else if value == f64::NEG_INFINITY {
        EdgeWeight::Forbidden
    } else {
        EdgeWeight::Finite(value)
    }
}

pub(super) fn derive_instance_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "instance".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use kirigami_cli::cli::{Cli, Command, RunCommand, render_summary, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0 1 4.0\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         prune_zero_edges: false,
///         commit_limit: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.contains("clusters: 1"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "instance: {}", summary.instance)?;
    writeln!(writer, "total cost: {}", summary.solution.total_cost())?;
    writeln!(writer, "clusters: {}", summary.solution.cluster_count())?;
    if !summary.solution.is_complete() {
        writeln!(writer, "note: commit limit reached; clustering is partial")?;
    }
    for (vertex, cluster) in summary.solution.assignments().iter().enumerate() {
        writeln!(writer, "{vertex}\t{}", cluster.get())?;
    }
    Ok(())
}
