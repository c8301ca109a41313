use std::{error::Error, path::PathBuf};

use clap::Parser;
use classic_paths::{
    display::{format_distance_matrix, format_weight},
    graphs::{
        graph_factory::{GraphFactory, IndexBase},
        Vertex,
    },
    logging::init_tracing,
    search::floyd_warshall::floyd_warshall,
    utility::progress_spinner,
};

/// Picks the central vertex of an undirected network: the one minimizing the
/// sum of shortest distances to every other vertex.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edge list file with a "V E" header followed by "u v w" lines
    #[arg(short, long)]
    graph: PathBuf,

    /// Vertex numbering used in the file
    #[arg(long, value_enum, default_value_t = IndexBase::One)]
    index_base: IndexBase,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let graph = GraphFactory::from_edge_list_file(&args.graph, false, args.index_base)?;
    println!(
        "Loaded graph with {} vertices and {} edges",
        graph.number_of_vertices(),
        graph.number_of_edges()
    );

    let spinner = progress_spinner("Running Floyd-Warshall");
    let distances = floyd_warshall(&graph);
    spinner.finish_and_clear();

    println!("\nDistance matrix:");
    println!("{}", format_distance_matrix(&distances));

    let vertices = graph.number_of_vertices() as usize;
    if (0..vertices).any(|vertex| distances[vertex][vertex].is_some_and(|distance| distance < 0)) {
        println!("\nNegative cycle detected, the distances are meaningless.");
        return Ok(());
    }

    // A row sums to None as soon as one vertex is unreachable from it.
    let row_sums: Vec<Option<i64>> = distances
        .iter()
        .map(|row| row.iter().copied().sum())
        .collect();

    let Some((central, central_sum)) = row_sums
        .iter()
        .enumerate()
        .filter_map(|(vertex, sum)| sum.map(|sum| (vertex as Vertex, sum)))
        .min_by_key(|&(_, sum)| sum)
    else {
        println!("\nNo vertex reaches every other vertex, the network has no central station.");
        return Ok(());
    };

    println!(
        "\nCentral station: vertex {}",
        args.index_base.display(central)
    );
    println!("Sum of distances from the central station: {}", central_sum);

    println!("\nDistances from the central station:");
    for (vertex, &distance) in distances[central as usize].iter().enumerate() {
        if vertex as Vertex != central {
            println!(
                "  to vertex {}: {}",
                args.index_base.display(vertex as Vertex),
                format_weight(distance)
            );
        }
    }

    let farthest = distances[central as usize]
        .iter()
        .enumerate()
        .filter(|&(vertex, _)| vertex as Vertex != central)
        .filter_map(|(vertex, &distance)| distance.map(|distance| (vertex as Vertex, distance)))
        .max_by_key(|&(_, distance)| distance);
    if let Some((vertex, distance)) = farthest {
        println!(
            "\nFarthest vertex from the central station: {} at distance {}",
            args.index_base.display(vertex),
            distance
        );
    }

    Ok(())
}
