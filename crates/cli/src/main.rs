mod config;

use anyhow::{bail, Context, Result};
use clap::Parser;
use config::{FileConfig, Overrides, RunConfig};
use graphdoc_graph::{render_documents, GraphMerger, IndexedGraph, RenderConfig, RenderedDocument};
use graphdoc_protocol::decode_graph;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "graphdoc")]
#[command(version, about = "Render code-property graphs into one Markdown page per entity", long_about = None)]
struct Cli {
    /// Input graph JSON files (comma-separated and/or repeated)
    #[arg(short, long, value_name = "PATHS")]
    input: Vec<String>,

    /// Directory receiving `<slug>.md` files [default: data]
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Repository display name used in rendered prose
    #[arg(long, value_name = "NAME")]
    repo: Option<String>,

    /// Repository browse URL; enables source links
    #[arg(long, value_name = "URL")]
    repo_url: Option<String>,

    /// Branch used in source links
    #[arg(long, value_name = "NAME")]
    branch: Option<String>,

    /// TOML file with the same keys; flags take precedence
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();

    let file = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let run = RunConfig::resolve(
        file,
        Overrides {
            input: cli.input,
            output: cli.output,
            repo: cli.repo,
            repo_url: cli.repo_url,
            branch: cli.branch,
        },
    );

    if run.inputs.is_empty() {
        bail!("no input graphs given; pass --input <PATHS> or set `input` in the config file");
    }

    let graph = load_graphs(&run.inputs);
    let render_config = render_config(&run);
    let docs = render_documents(&graph, &render_config);

    std::fs::create_dir_all(&run.output)
        .with_context(|| format!("creating output directory {}", run.output.display()))?;
    let written = write_documents(&run.output, &docs);
    log::info!(
        "Generated {written} entity files in {}",
        run.output.display()
    );
    Ok(())
}

fn render_config(run: &RunConfig) -> RenderConfig {
    let mut config = RenderConfig::default();
    if let Some(repo) = &run.repo {
        config.repo_name.clone_from(repo);
    }
    if let Some(url) = &run.repo_url {
        config.repo_url.clone_from(url);
    }
    if let Some(branch) = &run.branch {
        config.branch.clone_from(branch);
    }
    config
}

/// Phase 1. Unreadable or unrecognised inputs are skipped.
fn load_graphs(inputs: &[PathBuf]) -> IndexedGraph {
    let mut merger = GraphMerger::new();
    for path in inputs {
        match load_graph(path) {
            Ok(decoded) => {
                log::info!(
                    "Loaded {} nodes, {} relationships from {}",
                    decoded.graph.nodes.len(),
                    decoded.graph.relationships.len(),
                    path.display()
                );
                log::debug!("{}: {} envelope", path.display(), decoded.shape.as_str());
                if let Some(stats) = &decoded.stats {
                    log::debug!(
                        "{}: producer reports {} nodes, {} relationships",
                        path.display(),
                        stats.node_count,
                        stats.relationship_count
                    );
                }
                merger.push(decoded.graph);
            }
            Err(err) => log::warn!("Skipping {}: {err:#}", path.display()),
        }
    }
    IndexedGraph::build(merger.finish())
}

fn load_graph(path: &Path) -> Result<graphdoc_protocol::DecodedGraph> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let decoded = decode_graph(&bytes).with_context(|| format!("decoding {}", path.display()))?;
    Ok(decoded)
}

/// Returns how many files landed. A failed write skips that document only.
fn write_documents(dir: &Path, docs: &[RenderedDocument]) -> usize {
    let mut written = 0;
    for doc in docs {
        let path = dir.join(doc.file_name());
        match std::fs::write(&path, doc.to_markdown()) {
            Ok(()) => written += 1,
            Err(err) => log::warn!("Skipping {}: {err}", path.display()),
        }
    }
    written
}
