use std::{error::Error, path::PathBuf, time::Instant};

use clap::Parser;
use classic_paths::{
    graphs::graph_factory::{GraphFactory, IndexBase},
    logging::init_tracing,
};

/// Reading a bincode snapshot is way faster than parsing an edge list file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edge list infile with a "V E" header followed by "u v w" lines
    #[arg(short, long)]
    graph: PathBuf,

    /// Vertex numbering used in the infile
    #[arg(long, value_enum, default_value_t = IndexBase::Zero)]
    index_base: IndexBase,

    /// Treat the edges as directed
    #[arg(short, long)]
    directed: bool,

    /// Outfile for the bincode snapshot
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let start = Instant::now();
    let graph = GraphFactory::from_edge_list_file(&args.graph, args.directed, args.index_base)?;
    println!("Reading the edge list took {:?}", start.elapsed());

    let start = Instant::now();
    GraphFactory::write_bincode_file(&graph, &args.snapshot)?;
    println!("Writing bincode took {:?}", start.elapsed());

    Ok(())
}
