use classic_paths::{
    graphs::{graph_functions::path_weight, GraphError},
    grid::{adapter::grid_to_graph, Grid, Position},
    search::dijkstra::dijkstra,
};

#[test]
fn open_grid_gets_a_vertex_per_cell_and_an_edge_per_direction() {
    let grid = Grid::from_lines(["...", "...", "..."]).unwrap();
    let grid_graph = grid_to_graph(&grid).unwrap();

    assert_eq!(grid_graph.graph.number_of_vertices(), 9);

    // 12 adjacent cell pairs, connected once per direction
    let mut pairs = 0;
    for row in 0..3 {
        for column in 0..3 {
            let cell = grid_graph.vertex_at((row, column)).unwrap();
            for neighbor_position in [(row + 1, column), (row, column + 1)] {
                if neighbor_position.0 > 2 || neighbor_position.1 > 2 {
                    continue;
                }
                pairs += 1;
                let neighbor = grid_graph.vertex_at(neighbor_position).unwrap();
                assert_eq!(grid_graph.graph.edge_weight(cell, neighbor), Some(1));
                assert_eq!(grid_graph.graph.edge_weight(neighbor, cell), Some(1));
            }
        }
    }
    assert_eq!(pairs, 12);
    assert_eq!(grid_graph.graph.number_of_edges(), 24);
}

#[test]
fn obstacles_get_no_vertex() {
    let grid = Grid::from_lines(["..#", "..."]).unwrap();
    let grid_graph = grid_to_graph(&grid).unwrap();

    assert_eq!(grid_graph.graph.number_of_vertices(), 5);
    assert_eq!(grid_graph.vertex_at((0, 2)), None);
}

#[test]
fn vertex_ids_are_assigned_in_row_major_order() {
    let grid = Grid::from_lines(["S.", "#G"]).unwrap();
    let grid_graph = grid_to_graph(&grid).unwrap();

    assert_eq!(grid_graph.vertex_at((0, 0)), Some(0));
    assert_eq!(grid_graph.vertex_at((0, 1)), Some(1));
    assert_eq!(grid_graph.vertex_at((1, 1)), Some(2));
    assert_eq!(grid_graph.position(2), Some((1, 1)));
}

#[test]
fn the_entry_cost_belongs_to_the_cell_being_entered() {
    let grid = Grid::from_lines(["S~G"]).unwrap();
    let grid_graph = grid_to_graph(&grid).unwrap();

    let start = grid_graph.vertex_at((0, 0)).unwrap();
    let difficult = grid_graph.vertex_at((0, 1)).unwrap();
    let goal = grid_graph.vertex_at((0, 2)).unwrap();

    assert_eq!(grid_graph.graph.edge_weight(start, difficult), Some(3));
    assert_eq!(grid_graph.graph.edge_weight(difficult, start), Some(1));
    assert_eq!(grid_graph.graph.edge_weight(difficult, goal), Some(1));
    assert_eq!(grid_graph.graph.edge_weight(goal, difficult), Some(3));
}

#[test]
fn dijkstra_routes_around_obstacles() {
    let grid = Grid::from_lines(["S#G", "..."]).unwrap();
    let grid_graph = grid_to_graph(&grid).unwrap();

    let source = grid_graph.vertex_at(grid.start().unwrap()).unwrap();
    let target = grid_graph.vertex_at(grid.goal().unwrap()).unwrap();

    let tree = dijkstra(&grid_graph.graph, source).unwrap();
    assert_eq!(tree.distances[target as usize], Some(4));

    let positions: Vec<Position> = tree
        .path(source, target)
        .iter()
        .filter_map(|&vertex| grid_graph.position(vertex))
        .collect();
    assert_eq!(
        positions,
        vec![(0, 0), (1, 0), (1, 1), (1, 2), (0, 2)]
    );
}

#[test]
fn difficult_floor_is_dodged_when_a_cheap_detour_exists() {
    let grid = Grid::from_lines(["S~~G", "...."]).unwrap();
    let grid_graph = grid_to_graph(&grid).unwrap();

    let source = grid_graph.vertex_at(grid.start().unwrap()).unwrap();
    let target = grid_graph.vertex_at(grid.goal().unwrap()).unwrap();

    let tree = dijkstra(&grid_graph.graph, source).unwrap();
    // straight through the difficult floor would cost 3 + 3 + 1 = 7
    assert_eq!(tree.distances[target as usize], Some(5));

    let path = tree.path(source, target);
    assert_eq!(path_weight(&grid_graph.graph, &path), Some(5));
    for &vertex in &path {
        let position = grid_graph.position(vertex).unwrap();
        assert!(position != (0, 1) && position != (0, 2));
    }
}

#[test]
fn a_walled_off_goal_is_unreachable() {
    let grid = Grid::from_lines(["S#G", ".##"]).unwrap();
    let grid_graph = grid_to_graph(&grid).unwrap();

    let source = grid_graph.vertex_at(grid.start().unwrap()).unwrap();
    let target = grid_graph.vertex_at(grid.goal().unwrap()).unwrap();

    let tree = dijkstra(&grid_graph.graph, source).unwrap();
    assert_eq!(tree.distances[target as usize], None);
    assert!(tree.path(source, target).is_empty());
}

#[test]
fn an_all_obstacle_grid_cannot_become_a_graph() {
    let grid = Grid::from_lines(["##", "##"]).unwrap();
    assert_eq!(grid_to_graph(&grid).err(), Some(GraphError::EmptyGraph));
}
