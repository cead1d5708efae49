use taurus::collections::{ContainerError, Queue, Sequence, Stack};
use taurus::{Graph, GraphError};

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Undirected: A-B, B-C, A-C, C-D.
fn diamond() -> Graph {
    let mut graph = Graph::undirected();
    for label in ["A", "B", "C", "D"] {
        graph.add(label).unwrap();
    }
    graph.connect("A", "B").unwrap();
    graph.connect("B", "C").unwrap();
    graph.connect("A", "C").unwrap();
    graph.connect("C", "D").unwrap();
    graph
}

/// Nodes A, B, C with only A-B connected.
fn disconnected() -> Graph {
    let mut graph = Graph::undirected();
    for label in ["A", "B", "C"] {
        graph.add(label).unwrap();
    }
    graph.connect("A", "B").unwrap();
    graph
}

#[test]
fn test_add_then_has() {
    let mut graph = Graph::directed();
    for label in ["BTC", "ETH", "a label with spaces", ""] {
        graph.add(label).unwrap();
        assert!(graph.has(label));
        assert_eq!(
            graph.add(label).unwrap_err(),
            GraphError::DuplicateLabel(label.to_string())
        );
    }
    assert_eq!(graph.node_count(), 4);
}

#[test]
fn test_get_errors() {
    let mut graph = Graph::undirected();
    assert_eq!(graph.get("A").unwrap_err(), GraphError::EmptyGraph);
    graph.add("A").unwrap();
    assert_eq!(
        graph.get("B").unwrap_err(),
        GraphError::UnknownLabel("B".to_string())
    );
    assert_eq!(graph.get("A").unwrap().label(), "A");
}

#[test]
fn test_undirected_connect_is_symmetric() {
    let graph = diamond();
    for a in ["A", "B", "C", "D"] {
        for b in ["A", "B", "C", "D"] {
            assert_eq!(
                graph.are_neighbours(a, b).unwrap(),
                graph.are_neighbours(b, a).unwrap(),
                "asymmetric adjacency for {a}/{b}"
            );
        }
    }
    assert_eq!(graph.connection_count(), 4);
}

#[test]
fn test_directed_connect_respects_direction() {
    let mut graph = Graph::directed();
    graph.add("A").unwrap();
    graph.add("B").unwrap();
    graph.connect("A", "B").unwrap();
    assert!(graph.are_neighbours("A", "B").unwrap());
    assert!(!graph.are_neighbours("B", "A").unwrap());

    graph.connect("B", "A").unwrap();
    assert!(graph.are_neighbours("B", "A").unwrap());
    assert_eq!(graph.connection_count(), 2);
}

#[test]
fn test_connect_failures_keep_count() {
    let mut graph = Graph::undirected();
    assert_eq!(
        graph.connect("A", "B").unwrap_err(),
        GraphError::InsufficientNodes { count: 0 }
    );
    graph.add("A").unwrap();
    assert_eq!(
        graph.connect("A", "B").unwrap_err(),
        GraphError::InsufficientNodes { count: 1 }
    );
    graph.add("B").unwrap();
    assert_eq!(
        graph.connect("B", "B").unwrap_err(),
        GraphError::SelfConnection("B".to_string())
    );
    assert_eq!(
        graph.connect("A", "nope").unwrap_err(),
        GraphError::UnknownLabel("nope".to_string())
    );
    assert_eq!(
        graph.connect("nope", "A").unwrap_err(),
        GraphError::UnknownLabel("nope".to_string())
    );
    assert_eq!(graph.connection_count(), 0);
    assert!(!graph.are_neighbours("A", "B").unwrap());
}

#[test]
fn test_repeated_connect_is_rejected() {
    let mut graph = diamond();
    assert!(matches!(
        graph.connect("A", "B"),
        Err(GraphError::DuplicateConnection { .. })
    ));
    assert!(matches!(
        graph.connect("D", "C"),
        Err(GraphError::DuplicateConnection { .. })
    ));
    assert_eq!(graph.connection_count(), 4);
    assert_eq!(graph.get("A").unwrap().degree(), 2);
    assert_eq!(graph.get("C").unwrap().degree(), 3);
}

#[test]
fn test_are_neighbours_requires_two_nodes() {
    let mut graph = Graph::undirected();
    graph.add("A").unwrap();
    assert_eq!(
        graph.are_neighbours("A", "A").unwrap_err(),
        GraphError::InsufficientNodes { count: 1 }
    );
}

#[test]
fn test_diamond_traversals() {
    let graph = diamond();
    assert_eq!(graph.bfs(), labels(&["A", "B", "C", "D"]));
    assert_eq!(graph.dfs(), labels(&["A", "B", "C", "D"]));

    let paths: Vec<_> = graph.enumerate_paths("A", "D").unwrap().collect();
    assert_eq!(
        paths,
        vec![labels(&["A", "B", "C", "D"]), labels(&["A", "C", "D"])]
    );
}

#[test]
fn test_disconnected_traversals() {
    let graph = disconnected();
    assert_eq!(graph.bfs(), labels(&["A", "B"]));
    assert_eq!(graph.dfs(), labels(&["A", "B", "C"]));
    assert_eq!(graph.enumerate_paths("A", "C").unwrap().count(), 0);
}

#[test]
fn test_traversals_are_repeatable() {
    let graph = diamond();
    assert_eq!(graph.bfs(), graph.bfs());
    assert_eq!(graph.dfs(), graph.dfs());

    let first: Vec<_> = graph.enumerate_paths("D", "A").unwrap().collect();
    let second: Vec<_> = graph.enumerate_paths("D", "A").unwrap().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);

    // An abandoned enumeration does not affect later traversals.
    let mut partial = graph.enumerate_paths("A", "D").unwrap();
    assert!(partial.next().is_some());
    drop(partial);
    assert_eq!(graph.bfs(), labels(&["A", "B", "C", "D"]));
}

#[test]
fn test_interleaved_enumerations_are_independent() {
    let graph = diamond();
    let mut left = graph.enumerate_paths("A", "D").unwrap();
    let mut right = graph.enumerate_paths("A", "D").unwrap();
    assert_eq!(left.next(), right.next());
    assert_eq!(graph.dfs(), labels(&["A", "B", "C", "D"]));
    assert_eq!(left.next(), right.next());
    assert_eq!(left.next(), None);
    assert_eq!(right.next(), None);
}

#[test]
fn test_path_to_self() {
    let graph = diamond();
    let paths: Vec<_> = graph.enumerate_paths("C", "C").unwrap().collect();
    assert_eq!(paths, vec![labels(&["C"])]);
}

#[test]
fn test_directed_paths_follow_edges() {
    let graph = Graph::from_edges(
        true,
        [("A", "B"), ("B", "C"), ("C", "A"), ("A", "C")],
    )
    .unwrap();
    let paths: Vec<_> = graph.enumerate_paths("A", "C").unwrap().collect();
    assert_eq!(paths, vec![labels(&["A", "B", "C"]), labels(&["A", "C"])]);

    let back: Vec<_> = graph.enumerate_paths("C", "B").unwrap().collect();
    assert_eq!(back, vec![labels(&["C", "A", "B"])]);
}

#[test]
fn test_complete_graph_path_count() {
    // K5: simple paths between two fixed vertices = sum over k of (3 P k) = 1 + 3 + 6 + 6.
    let names = ["A", "B", "C", "D", "E"];
    let mut graph = Graph::undirected();
    for name in names {
        graph.add(name).unwrap();
    }
    for (i, a) in names.iter().enumerate() {
        for b in &names[i + 1..] {
            graph.connect(a, b).unwrap();
        }
    }
    let paths: Vec<_> = graph.enumerate_paths("A", "E").unwrap().collect();
    assert_eq!(paths.len(), 16);
    for path in &paths {
        let mut seen = path.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), path.len(), "repeated node in {path:?}");
    }
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let size = 100_000;
    let mut graph = Graph::directed();
    for i in 0..size {
        graph.add(i.to_string()).unwrap();
    }
    for i in 1..size {
        graph.connect(&(i - 1).to_string(), &i.to_string()).unwrap();
    }

    let order = graph.dfs();
    assert_eq!(order.len(), size);
    assert_eq!(order.last().map(String::as_str), Some("99999"));

    let paths: Vec<_> = graph.enumerate_paths("0", "99999").unwrap().collect();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].len(), size);
}

#[test]
fn test_containers_report_empty() {
    let mut seq: Sequence<u8> = Sequence::new();
    assert_eq!(seq.peek_first(), Err(ContainerError::Empty));
    seq.insert_last(1);
    assert_eq!(seq.peek_first(), Ok(&1));

    let mut queue: Queue<u8> = Queue::new();
    assert_eq!(queue.dequeue(), Err(ContainerError::Empty));

    let mut stack: Stack<u8> = Stack::new();
    assert_eq!(stack.pop(), Err(ContainerError::Empty));
    assert_eq!(stack.peek(), Err(ContainerError::Empty));
}
