use std::{error::Error, path::PathBuf};

use clap::Parser;
use itertools::Itertools;

use classic_paths::{
    display::format_weight,
    graphs::{
        graph_factory::{GraphFactory, IndexBase},
        Vertex,
    },
    logging::init_tracing,
    search::bellman_ford::bellman_ford,
};

/// Finds the route of least net energy through a directed network where
/// negative edge weights model regeneration.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edge list file with a "V E" header followed by "u v w" lines
    #[arg(short, long)]
    graph: PathBuf,

    /// Zero-based source vertex
    #[arg(short, long, default_value_t = 0)]
    source: Vertex,

    /// Zero-based target vertex
    #[arg(short, long)]
    target: Vertex,

    /// Vertex numbering used in the file
    #[arg(long, value_enum, default_value_t = IndexBase::Zero)]
    index_base: IndexBase,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let graph = GraphFactory::from_edge_list_file(&args.graph, true, args.index_base)?;
    println!(
        "Loaded directed graph with {} vertices and {} edges",
        graph.number_of_vertices(),
        graph.number_of_edges()
    );

    if args.target >= graph.number_of_vertices() {
        return Err(format!(
            "target {} is out of range for a graph with {} vertices",
            args.target,
            graph.number_of_vertices()
        )
        .into());
    }

    let result = bellman_ford(&graph, args.source)?;
    if result.negative_cycle {
        println!("Negative cycle detected: energy can be gained without bound, no cheapest route exists.");
        return Ok(());
    }
    let tree = result.tree;

    let Some(total) = tree.distances[args.target as usize] else {
        println!("No route from {} to {}", args.source, args.target);
        return Ok(());
    };

    let path = tree.path(args.source, args.target);
    println!(
        "\nCheapest route from {} to {}:",
        args.source, args.target
    );
    println!("  {}", path.iter().join(" -> "));

    println!("\nTotal energy: {} Wh", total);
    if total < 0 {
        println!("(the vehicle arrives with more energy than it left with)");
    } else if total > 0 {
        println!("(net energy consumed)");
    } else {
        println!("(energy balanced)");
    }

    println!("\nEnergy per leg:");
    for (&tail, &head) in path.iter().tuple_windows() {
        // consecutive path vertices are always edges
        let weight = graph.edge_weight(tail, head).unwrap();
        println!("  {} -> {}: {} Wh", tail, head, weight);
    }

    println!("\nCheapest energy from {} to every vertex:", args.source);
    for (vertex, &distance) in tree.distances.iter().enumerate() {
        println!("  to vertex {}: {} Wh", vertex, format_weight(distance));
    }

    Ok(())
}
