//! graphwalk CLI - traversal analyses over edge-list graph files.
//!
//! Features:
//! - Directed cycle detection with a witness cycle
//! - Strong components (Kosaraju or brute force)
//! - Transitive closure queries and multi-source reachability
//! - Breadth-first and depth-first paths
//! - Bipartite check and topological sort
//! - Graphviz DOT visualization

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use graphwalk_core::report::{
    bfs_report, bipartite_report, closure_report, cycle_report, dfs_report, graph_report,
    reachability_report, scc_report, topological_report,
};
use graphwalk_core::{
    generate_dot, generate_dot_undirected, init_structured_logging, load_config,
    load_config_file, log_error, log_info, Bipartite, BreadthFirstPaths, BruteForceScc,
    DepthFirstPaths, DirectedCycle, DirectedReachability, GraphReader, GraphwalkConfig,
    KosarajuScc, OutputFormat, Topological, TransitiveClosure, Vertex,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Traversal analyses over edge-list graph files")]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Config file to use instead of ./graphwalk.toml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// `FILE [DELIMITER]` for commands without a source vertex.
#[derive(Args, Debug)]
struct Input {
    /// Edge-list file: vertex count, edge count, then one edge per line
    file: PathBuf,

    /// Separator between the two vertices of an edge line
    /// [default: config file, then a space]
    delimiter: Option<String>,
}

/// `FILE DELIMITER` ahead of source vertices, so the delimiter is required.
#[derive(Args, Debug)]
struct SourceInput {
    /// Edge-list file: vertex count, edge count, then one edge per line
    file: PathBuf,

    /// Separator between the two vertices of an edge line
    delimiter: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the adjacency lists
    Show {
        #[command(flatten)]
        input: Input,

        /// Read the file as a directed graph
        #[arg(long)]
        directed: bool,
    },

    /// Find a directed cycle
    Cycle {
        #[command(flatten)]
        input: Input,
    },

    /// Compute strongly connected components
    Scc {
        #[command(flatten)]
        input: Input,

        /// Use the quadratic all-pairs reachability algorithm
        #[arg(long)]
        brute_force: bool,
    },

    /// Query all-pairs reachability
    Closure {
        #[command(flatten)]
        input: Input,

        /// Reachability query; repeat for several pairs
        #[arg(long, num_args = 2, value_names = ["V", "W"])]
        pair: Vec<Vertex>,
    },

    /// Shortest paths from a source
    Bfs {
        #[command(flatten)]
        input: SourceInput,

        source: Vertex,

        /// Read the file as a directed graph
        #[arg(long)]
        directed: bool,
    },

    /// Depth-first paths from a source
    Dfs {
        #[command(flatten)]
        input: SourceInput,

        source: Vertex,

        /// Read the file as a directed graph
        #[arg(long)]
        directed: bool,
    },

    /// Check whether an undirected graph is bipartite
    Bipartite {
        #[command(flatten)]
        input: Input,
    },

    /// Topological order of a directed acyclic graph
    Topo {
        #[command(flatten)]
        input: Input,
    },

    /// Vertices reachable from one or more sources
    Reach {
        #[command(flatten)]
        input: SourceInput,

        #[arg(required = true)]
        sources: Vec<Vertex>,
    },

    /// Generate Graphviz DOT output
    Dot {
        #[command(flatten)]
        input: Input,

        /// Read the file as a directed graph, colored by strong component
        #[arg(long)]
        directed: bool,

        /// Write DOT output to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        output: Option<String>,
    },
}

impl Command {
    /// Input file and the delimiter given on the command line, if any.
    fn input(&self) -> (&Path, Option<&str>) {
        match self {
            Command::Show { input, .. }
            | Command::Cycle { input }
            | Command::Scc { input, .. }
            | Command::Closure { input, .. }
            | Command::Bipartite { input }
            | Command::Topo { input }
            | Command::Dot { input, .. } => (input.file.as_path(), input.delimiter.as_deref()),
            Command::Bfs { input, .. }
            | Command::Dfs { input, .. }
            | Command::Reach { input, .. } => {
                (input.file.as_path(), Some(input.delimiter.as_str()))
            }
        }
    }
}

/// Loads the explicit config file, or `graphwalk.toml` from the current
/// directory if present.
fn load_settings(explicit: Option<&Path>) -> Result<Option<GraphwalkConfig>> {
    match explicit {
        Some(path) => load_config_file(path)
            .map(Some)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => load_config(Path::new(".")).context("Failed to load graphwalk.toml"),
    }
}

/// Command-line delimiter wins over the config file, which wins over the default.
fn build_reader(config: Option<&GraphwalkConfig>, delimiter: Option<&str>) -> GraphReader {
    let reader = config.map(GraphReader::from_config).unwrap_or_default();
    match delimiter {
        Some(d) => reader.delimiter(d),
        None => reader,
    }
}

fn output_format(json_flag: bool, config: Option<&GraphwalkConfig>) -> OutputFormat {
    OutputFormat::from_json_flag(json_flag || config.is_some_and(GraphwalkConfig::wants_json))
}

/// Groups the flat `--pair V W` values.
fn pairs(flat: &[Vertex]) -> Vec<(Vertex, Vertex)> {
    flat.chunks_exact(2).map(|p| (p[0], p[1])).collect()
}

/// Validates output file paths.
///
/// Rejects paths with null bytes and paths that climb out of the current
/// directory with `..`.
fn validate_output_path(path: &str) -> Result<PathBuf> {
    if path.contains('\0') {
        return Err(anyhow!("Output path contains null bytes"));
    }

    let p = PathBuf::from(path);
    if p
        .components()
        .any(|c| matches!(c, std::path::Component::ParentDir))
    {
        return Err(anyhow!(
            "Path traversal (..) not allowed in output paths: {}",
            path
        ));
    }

    Ok(p)
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_settings(cli.config.as_deref())?;
    let (file, delimiter) = cli.command.input();
    let reader = build_reader(config.as_ref(), delimiter);
    let format = output_format(cli.json, config.as_ref());

    let read_graph = || {
        reader
            .read_graph(file)
            .with_context(|| format!("Failed to read graph: {}", file.display()))
    };
    let read_digraph = || {
        reader
            .read_digraph(file)
            .with_context(|| format!("Failed to read digraph: {}", file.display()))
    };

    let report = match &cli.command {
        Command::Show { directed, .. } => {
            if *directed {
                graph_report(&read_digraph()?, true)
            } else {
                graph_report(&read_graph()?, false)
            }
        }
        Command::Cycle { .. } => cycle_report(&DirectedCycle::new(&read_digraph()?)),
        Command::Scc { brute_force, .. } => {
            let digraph = read_digraph()?;
            if *brute_force {
                scc_report(&BruteForceScc::new(&digraph), "brute-force")
            } else {
                scc_report(&KosarajuScc::new(&digraph), "kosaraju")
            }
        }
        Command::Closure { pair, .. } => {
            closure_report(&TransitiveClosure::new(&read_digraph()?), &pairs(pair))
        }
        Command::Bfs {
            source, directed, ..
        } => {
            let paths = if *directed {
                BreadthFirstPaths::new(&read_digraph()?, *source)
            } else {
                BreadthFirstPaths::new(&read_graph()?, *source)
            };
            bfs_report(&paths.context("Invalid source vertex")?)
        }
        Command::Dfs {
            source, directed, ..
        } => {
            let paths = if *directed {
                DepthFirstPaths::new(&read_digraph()?, *source)
            } else {
                DepthFirstPaths::new(&read_graph()?, *source)
            };
            dfs_report(&paths.context("Invalid source vertex")?)
        }
        Command::Bipartite { .. } => bipartite_report(&Bipartite::new(&read_graph()?)),
        Command::Topo { .. } => topological_report(&Topological::new(&read_digraph()?)),
        Command::Reach { sources, .. } => {
            let digraph = read_digraph()?;
            let reachability =
                DirectedReachability::from_sources(&digraph, sources.iter().copied())
                    .context("Invalid source vertex")?;
            reachability_report(&reachability, sources)
        }
        Command::Dot {
            directed, output, ..
        } => {
            let dot = if *directed {
                let digraph = read_digraph()?;
                generate_dot(&digraph, Some(&KosarajuScc::new(&digraph)))
            } else {
                generate_dot_undirected(&read_graph()?)
            };
            match output {
                Some(path) => {
                    let safe_path = validate_output_path(path)?;
                    fs::write(&safe_path, &dot)
                        .with_context(|| format!("Failed to write DOT file: {}", path))?;
                    log_info(&format!("DOT graph written to {}", safe_path.display()));
                }
                None => print!("{}", dot),
            }
            return Ok(());
        }
    };

    report.print(format);
    Ok(())
}

fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] graphwalk internal error: {}", info);
    }));

    // JSON to stderr, respects RUST_LOG
    init_structured_logging();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log_error(&format!("{:#}", e));
        return Err(e);
    }
    Ok(())
}
