use std::{error::Error, fs::File, io::BufWriter, path::PathBuf};

use clap::Parser;
use classic_paths::{
    graphs::{
        graph_factory::{GraphFactory, IndexBase},
        graph_functions::generate_random_pair_test_cases,
    },
    logging::init_tracing,
};

/// Samples random source/target pairs and records their shortest-path
/// distances as a JSON file, for validating other pathfinders against.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edge list file with a "V E" header followed by "u v w" lines.
    /// Weights must be non-negative.
    #[arg(short, long)]
    graph: PathBuf,

    /// Vertex numbering used in the file
    #[arg(long, value_enum, default_value_t = IndexBase::Zero)]
    index_base: IndexBase,

    /// Treat the edges as directed
    #[arg(short, long)]
    directed: bool,

    /// Number of test cases to generate
    #[arg(short, long)]
    number_of_test_cases: u32,

    /// Outfile for the JSON test cases
    #[arg(short, long)]
    test_cases: PathBuf,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let graph = GraphFactory::from_edge_list_file(&args.graph, args.directed, args.index_base)?;
    let cases = generate_random_pair_test_cases(&graph, args.number_of_test_cases);

    let writer = BufWriter::new(File::create(&args.test_cases)?);
    serde_json::to_writer_pretty(writer, &cases)?;
    println!("Wrote {} test cases to {}", cases.len(), args.test_cases.display());

    Ok(())
}
