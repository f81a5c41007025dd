use std::collections::{HashMap, VecDeque};
use std::num::NonZeroUsize;

use proptest::prelude::*;

use super::uninformed::first_reach;
use super::*;
use crate::config::NeighborOrder;
use crate::frontier::{FifoQueue, Stack};
use crate::graph::{Graph, VertexTable, Weight};

pub(crate) fn graph_of(vertices: &[&str], edges: &[(&str, &str, u32)]) -> Graph {
    let mut graph = Graph::with_order(NeighborOrder::Insertion);
    for v in vertices {
        graph.add_vertex(*v);
    }
    for (u, v, w) in edges {
        graph.add_edge(u, v, Weight::from(*w)).unwrap();
    }
    graph
}

/// Graph whose labels are all integers, with unit weights
pub(crate) fn numbered(vertices: &[i64], edges: &[(i64, i64)]) -> Graph {
    let mut graph = Graph::with_order(NeighborOrder::Insertion);
    for n in vertices {
        graph.add_integer_vertex(*n);
    }
    for (u, v) in edges {
        graph
            .add_edge(&u.to_string(), &v.to_string(), Weight::DEFAULT)
            .unwrap();
    }
    graph
}

/// A-B, B-D, A-C, C-D with unit weights
pub(crate) fn diamond() -> Graph {
    graph_of(
        &["A", "B", "C", "D"],
        &[("A", "B", 1), ("B", "D", 1), ("A", "C", 1), ("C", "D", 1)],
    )
}

pub(crate) fn table(entries: &[(&str, f64)]) -> VertexTable {
    let mut table = VertexTable::new();
    for (v, value) in entries {
        table.insert(*v, *value).unwrap();
    }
    table
}

/// Edge distances from `start` by plain level-order search
fn edge_distances(graph: &Graph, start: &str) -> HashMap<String, usize> {
    let mut dist = HashMap::new();
    dist.insert(start.to_string(), 0);
    let mut queue = VecDeque::from([start.to_string()]);
    while let Some(v) = queue.pop_front() {
        let d = dist[&v];
        for n in graph.neighbors(&v) {
            if !dist.contains_key(n) {
                dist.insert(n.to_string(), d + 1);
                queue.push_back(n.to_string());
            }
        }
    }
    dist
}

fn path_cost(path: &crate::path::Path, costs: &VertexTable) -> f64 {
    path.vertices().iter().skip(1).map(|v| costs.value(v)).sum()
}

/// Walk from start, always stepping to the lowest-labelled neighbor not yet on the path
fn greedy_walk(graph: &Graph, start: &str, goal: &str) -> SearchResult {
    let mut walk = vec![start];
    loop {
        let here = walk[walk.len() - 1];
        if here == goal {
            return SearchResult::Path(crate::path::Path::from(walk));
        }
        let next = graph
            .neighbors(here)
            .filter(|n| !walk.contains(n))
            .min();
        match next {
            Some(n) => walk.push(n),
            None => return SearchResult::NoPath,
        }
    }
}

fn assert_valid_path(graph: &Graph, path: &crate::path::Path, start: &str, goal: &str) {
    assert_eq!(path.first(), Some(start));
    assert_eq!(path.last(), Some(goal));
    let mut seen: Vec<&String> = path.vertices().iter().collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), path.len(), "duplicate vertex in {path}");
    for pair in path.vertices().windows(2) {
        assert!(
            graph.edge_weight(&pair[0], &pair[1]).is_some(),
            "{} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }
}

fn run_all(graph: &Graph, start: &str, goal: &str, costs: &VertexTable) -> Vec<SearchResult> {
    let width = NonZeroUsize::new(2).unwrap();
    vec![
        british_museum(graph, start, goal),
        depth_first(graph, start, goal),
        breadth_first(graph, start, goal),
        hill_climbing(graph, start, goal),
        beam_search(graph, start, goal, width),
        branch_and_bound(graph, start, goal, costs),
        branch_and_bound_extended(graph, start, goal, costs),
        branch_and_bound_heuristic(graph, start, goal, costs, costs),
        best_first(graph, start, goal, costs),
        a_star(graph, start, goal, costs),
        oracle(graph, start, goal, costs),
        ao_star(graph, start, goal),
    ]
}

#[test]
fn test_diamond_scenario() {
    let graph = diamond();
    let bfs = breadth_first(&graph, "A", "D");
    assert_eq!(bfs.path().map(|p| p.len()), Some(3));

    let all = british_museum(&graph, "A", "D");
    let paths = all.paths();
    assert_eq!(paths.len(), 2);
    assert!(paths.iter().all(|p| p.len() == 3));
    assert_ne!(paths[0], paths[1]);
}

#[test]
fn test_neighbor_order_decides_bfs_route() {
    let graph = graph_of(
        &["A", "B", "C", "D"],
        &[("A", "C", 1), ("C", "D", 1), ("A", "B", 1), ("B", "D", 1)],
    );
    assert_eq!(
        breadth_first(&graph, "A", "D"),
        SearchResult::Path(crate::path::Path::from(vec!["A", "C", "D"]))
    );
}

#[test]
fn test_start_is_goal_for_every_strategy() {
    let graph = diamond();
    let costs = table(&[("A", 1.0), ("B", 1.0), ("C", 1.0), ("D", 1.0)]);
    let trivial = crate::path::Path::single("A");
    for result in run_all(&graph, "A", "A", &costs) {
        assert!(result.paths().contains(&&trivial), "{result:?}");
    }
}

#[test]
fn test_search_result_accessors() {
    let path = crate::path::Path::from(vec!["A", "B"]);
    let single = SearchResult::Path(path.clone());
    assert!(single.is_found());
    assert_eq!(single.path(), Some(&path));

    assert_eq!(SearchResult::from_paths(Vec::new()), SearchResult::NoPath);
    assert_eq!(SearchResult::from_path(None), SearchResult::NoPath);
    assert!(SearchResult::NoPath.paths().is_empty());
}

prop_compose! {
    fn arb_graph()(n in 1usize..7)
        (edges in proptest::collection::vec((0..n, 0..n, 0u32..5), 0..14),
         costs in proptest::collection::vec(0u32..5, n),
         goal in 0..n,
         n in Just(n))
        -> (Graph, VertexTable, String)
    {
        let labels: Vec<String> = (0..n).map(|i| format!("v{i}")).collect();
        let mut graph = Graph::with_order(NeighborOrder::Insertion);
        for label in &labels {
            graph.add_vertex(label.clone());
        }
        for (u, v, w) in edges {
            graph.add_edge(&labels[u], &labels[v], Weight::from(w)).unwrap();
        }
        let mut table = VertexTable::new();
        for (label, cost) in labels.iter().zip(costs) {
            table.insert(label.clone(), cost as f64).unwrap();
        }
        (graph, table, labels[goal].clone())
    }
}

prop_compose! {
    /// A random tree: exactly one simple path between any two vertices
    fn arb_tree()(n in 2usize..8)
        (parents in proptest::collection::vec(any::<prop::sample::Index>(), n - 1),
         goal in 1..n,
         n in Just(n))
        -> (Graph, String)
    {
        let labels: Vec<String> = (0..n).map(|i| format!("t{i}")).collect();
        let mut graph = Graph::new();
        for label in &labels {
            graph.add_vertex(label.clone());
        }
        for (i, parent) in parents.iter().enumerate() {
            let child = i + 1;
            let parent = parent.index(child);
            graph.add_edge(&labels[parent], &labels[child], Weight::DEFAULT).unwrap();
        }
        (graph, labels[goal].clone())
    }
}

proptest! {
    #[test]
    fn prop_bfs_finds_fewest_edges((graph, _costs, goal) in arb_graph()) {
        let distances = edge_distances(&graph, "v0");
        let result = breadth_first(&graph, "v0", &goal);
        match distances.get(&goal) {
            Some(d) => prop_assert_eq!(result.path().map(|p| p.edge_count()), Some(*d)),
            None => prop_assert_eq!(result, SearchResult::NoPath),
        }
    }

    #[test]
    fn prop_dfs_and_bfs_never_expand_twice((graph, _costs, goal) in arb_graph()) {
        for exploration in [
            first_reach(&graph, "v0", &goal, Stack::new()),
            first_reach(&graph, "v0", &goal, FifoQueue::new()),
        ] {
            let mut seen = exploration.expanded.clone();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), exploration.expanded.len());
        }
    }

    #[test]
    fn prop_tree_has_single_enumerated_path((graph, goal) in arb_tree()) {
        let all = british_museum(&graph, "t0", &goal);
        prop_assert_eq!(all.paths().len(), 1);
        let bfs = breadth_first(&graph, "t0", &goal);
        prop_assert_eq!(all.path(), bfs.path());
    }

    #[test]
    fn prop_branch_and_bound_beats_dfs((graph, costs, goal) in arb_graph()) {
        let dfs = depth_first(&graph, "v0", &goal);
        let plain = branch_and_bound(&graph, "v0", &goal, &costs);
        let extended = branch_and_bound_extended(&graph, "v0", &goal, &costs);
        prop_assert_eq!(dfs.is_found(), plain.is_found());
        prop_assert_eq!(&plain, &extended);
        if let (Some(dfs_path), Some(best)) = (dfs.path(), plain.path()) {
            prop_assert!(path_cost(best, &costs) <= path_cost(dfs_path, &costs));
        }
    }

    #[test]
    fn prop_beam_width_one_is_greedy_walk((graph, _costs, goal) in arb_graph()) {
        let beam = beam_search(&graph, "v0", &goal, NonZeroUsize::new(1).unwrap());
        prop_assert_eq!(beam, greedy_walk(&graph, "v0", &goal));
    }

    #[test]
    fn prop_ao_star_is_shortest((graph, _costs, goal) in arb_graph()) {
        let bfs = breadth_first(&graph, "v0", &goal);
        let ao = ao_star(&graph, "v0", &goal);
        prop_assert_eq!(bfs.path().map(|p| p.len()), ao.path().map(|p| p.len()));
    }

    #[test]
    fn prop_paths_are_simple_and_connected((graph, costs, goal) in arb_graph()) {
        for result in run_all(&graph, "v0", &goal, &costs) {
            for path in result.paths() {
                assert_valid_path(&graph, path, "v0", &goal);
            }
        }
    }

    #[test]
    fn prop_runs_are_identical((graph, costs, goal) in arb_graph()) {
        let first = run_all(&graph, "v0", &goal, &costs);
        let second = run_all(&graph, "v0", &goal, &costs);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
