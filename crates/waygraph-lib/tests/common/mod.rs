//! Common test utilities and fixture graphs.

use std::collections::HashMap;

use waygraph_lib::geom::GeoPoint;
use waygraph_lib::heading::{AdjacentEdges, EdgeId, IncidentEdge, NodeId};
use waygraph_lib::random::RandomSource;

/// Random source that replays a scripted draw sequence, so Fisher-Yates
/// outcomes can be computed by hand.
#[allow(dead_code)]
pub struct ScriptedRandom {
    draws: Vec<u32>,
    next: usize,
}

#[allow(dead_code)]
impl ScriptedRandom {
    pub fn new(draws: &[u32]) -> Self {
        Self {
            draws: draws.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        let value = self.draws[self.next];
        self.next += 1;
        assert!(value < bound, "scripted draw {value} out of bound {bound}");
        value
    }
}

/// In-memory adjacency fixture.
///
/// Edges are iterated newest-inserted first, matching the adjacency lists of
/// the compact graph storage this stands in for.
#[allow(dead_code)]
#[derive(Default)]
pub struct TestGraph {
    adjacency: HashMap<NodeId, Vec<IncidentEdge>>,
}

#[allow(dead_code)]
impl TestGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_edge(&mut self, node: NodeId, edge: EdgeId, forward: bool, geometry: Vec<GeoPoint>) {
        self.adjacency.entry(node).or_default().insert(
            0,
            IncidentEdge {
                edge,
                forward,
                geometry,
            },
        );
    }
}

impl AdjacentEdges for TestGraph {
    fn incident_edges(&self, node: NodeId) -> Vec<IncidentEdge> {
        self.adjacency.get(&node).cloned().unwrap_or_default()
    }
}

/// Hub node 8 with eight straight spokes at 45-degree spacing.
///
/// Edge ids map to outgoing compass headings as: 0 -> 315, 1 -> 0, 2 -> 45,
/// 3 -> 90, 4 -> 135, 5 -> 180, 6 -> 225, 7 -> 270.
#[allow(dead_code)]
pub fn radial_graph() -> TestGraph {
    let hub = GeoPoint::new(0.0, 0.0);
    let offsets = [
        (1.0, -1.0), // 315
        (1.0, 0.0),  // 0
        (1.0, 1.0),  // 45
        (0.0, 1.0),  // 90
        (-1.0, 1.0), // 135
        (-1.0, 0.0), // 180
        (-1.0, -1.0), // 225
        (0.0, -1.0), // 270
    ];
    let mut graph = TestGraph::new();
    for (id, (dlat, dlon)) in offsets.iter().enumerate() {
        graph.add_edge(
            8,
            id as EdgeId,
            true,
            vec![hub, GeoPoint::new(hub.lat + dlat, hub.lon + dlon)],
        );
    }
    graph
}
