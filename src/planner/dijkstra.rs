//! Dijkstra's shortest-path algorithm over adjacency lists.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Priority-queue entry: tentative cost of reaching a vertex.
#[derive(Clone, Copy, Debug)]
struct QueueEntry {
    cost: f32,
    vertex: usize,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.vertex == other.vertex
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed ordering turns the max-heap into a min-heap
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of a successful Dijkstra search.
#[derive(Clone, Debug)]
pub struct DijkstraResult {
    /// Vertex indices from start to goal, inclusive.
    pub path: Vec<usize>,
    /// Total path weight.
    pub distance: f32,
}

/// Single-source shortest path from `start` to `goal`.
///
/// `edges[i]` lists `(neighbor, weight)` pairs; weights must be
/// non-negative. Runs in O((V + E) log V) with a binary-heap priority
/// queue and stops as soon as the goal is extracted.
///
/// Ties between equal-weight routes keep the first-discovered
/// predecessor (relaxation uses strict `<`), so the result is
/// deterministic for a fixed graph.
///
/// Returns `None` if the goal is not reachable.
pub fn dijkstra(edges: &[Vec<(usize, f32)>], start: usize, goal: usize) -> Option<DijkstraResult> {
    let n = edges.len();
    if n == 0 || start >= n || goal >= n {
        return None;
    }

    if start == goal {
        return Some(DijkstraResult {
            path: vec![start],
            distance: 0.0,
        });
    }

    let mut dist: Vec<f32> = vec![f32::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    dist[start] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(QueueEntry {
        cost: 0.0,
        vertex: start,
    });

    while let Some(QueueEntry { cost, vertex }) = heap.pop() {
        // Stale entry: a shorter route to this vertex was already settled
        if cost > dist[vertex] {
            continue;
        }

        // Early exit; extraction order guarantees cost is final
        if vertex == goal {
            break;
        }

        for &(neighbor, weight) in &edges[vertex] {
            let candidate = cost + weight;
            if candidate < dist[neighbor] {
                dist[neighbor] = candidate;
                prev[neighbor] = Some(vertex);
                heap.push(QueueEntry {
                    cost: candidate,
                    vertex: neighbor,
                });
            }
        }
    }

    prev[goal]?;

    // Backtrack predecessor links, then reverse into start -> goal order
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        current = prev[current]?;
        path.push(current);
    }
    path.reverse();

    Some(DijkstraResult {
        path,
        distance: dist[goal],
    })
}
