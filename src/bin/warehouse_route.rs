use std::{error::Error, path::PathBuf};

use clap::Parser;
use itertools::Itertools;

use classic_paths::{
    display::{render, render_with_path},
    grid::{adapter::grid_to_graph, Grid, Position},
    logging::init_tracing,
    search::dijkstra::dijkstra,
};

/// Routes a robot across a warehouse grid from S to G, around obstacles and
/// preferring cheap floor.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid file with a "rows columns" header followed by one symbol row
    /// per line (. S G ~ #)
    #[arg(short, long)]
    grid: PathBuf,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn direction(from: Position, to: Position) -> &'static str {
    if to.0 < from.0 {
        "north"
    } else if to.0 > from.0 {
        "south"
    } else if to.1 > from.1 {
        "east"
    } else {
        "west"
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let grid = Grid::from_file(&args.grid)?;
    println!("Loaded {}x{} grid:", grid.rows(), grid.columns());
    println!("{}", render(&grid));

    let start = grid.start().ok_or("the grid has no start cell (S)")?;
    let goal = grid.goal().ok_or("the grid has no goal cell (G)")?;
    println!("\nStart: {:?}", start);
    println!("Goal:  {:?}", goal);

    let grid_graph = grid_to_graph(&grid)?;
    println!(
        "Derived graph has {} vertices and {} edges",
        grid_graph.graph.number_of_vertices(),
        grid_graph.graph.number_of_edges()
    );

    let source = grid_graph
        .vertex_at(start)
        .ok_or("start cell has no vertex")?;
    let target = grid_graph.vertex_at(goal).ok_or("goal cell has no vertex")?;

    let tree = dijkstra(&grid_graph.graph, source)?;
    let Some(total) = tree.distances[target as usize] else {
        println!("\nNo path from S to G!");
        return Ok(());
    };

    let path = tree.path(source, target);
    let positions: Vec<Position> = path
        .iter()
        .filter_map(|&vertex| grid_graph.position(vertex))
        .collect();

    println!("\nPath from S to G:");
    for (step, position) in positions.iter().enumerate() {
        let note = if step == 0 {
            " (S)"
        } else if step == positions.len() - 1 {
            " (G)"
        } else {
            ""
        };
        println!("  {}. {:?}{}", step + 1, position, note);
    }

    println!("\nTotal cost: {}", total);
    println!("Steps: {}", positions.len() - 1);

    println!("\nCost per move:");
    let mut accumulated = 0;
    for (&from, &to) in positions.iter().tuple_windows() {
        // cost of a move is the cost of the cell being entered
        let cost = grid.cell(to).entry_cost().unwrap();
        accumulated += cost;
        println!(
            "  {:?} -> {:?} ({}): +{} = {}",
            from,
            to,
            direction(from, to),
            cost,
            accumulated
        );
    }

    println!("\nGrid with the path marked (*):");
    println!("{}", render_with_path(&grid, &grid_graph, &path));

    Ok(())
}
