//! Shortest-path solver benchmark suite.
//!
//! Benchmarks the solver over synthetic discovered graphs at different
//! scales:
//! - Square grids: 32x32 to 256x256
//! - Random sparse graphs: 1k to 50k vertices
//!
//! Run with: cargo bench --bench shortest_path
//! Results saved to: target/criterion/

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use maze_explorer::{GraphModel, VertexId, shortest_path};

// ============================================================================
// Benchmark Parameters
// ============================================================================

const GRID_SIDES: &[u32] = &[32, 64, 128, 256];
const RANDOM_SIZES: &[u32] = &[1_000, 10_000, 50_000];
const RANDOM_DEGREE: u64 = 4;

// ============================================================================
// Graph Builders
// ============================================================================

/// Builds a `side`x`side` 4-connected grid; vertex id is `row * side + col`.
fn grid_graph(side: u32) -> GraphModel {
    let mut graph = GraphModel::new();

    for row in 0..side {
        for col in 0..side {
            let mut neighbors = Vec::with_capacity(4);
            if row > 0 {
                neighbors.push(VertexId::new((row - 1) * side + col));
            }
            if row + 1 < side {
                neighbors.push(VertexId::new((row + 1) * side + col));
            }
            if col > 0 {
                neighbors.push(VertexId::new(row * side + col - 1));
            }
            if col + 1 < side {
                neighbors.push(VertexId::new(row * side + col + 1));
            }
            graph.record_adjacency(VertexId::new(row * side + col), &neighbors);
        }
    }

    graph
}

/// Builds a random sparse digraph with a deterministic LCG, plus a chain
/// edge per vertex so every vertex is reachable from 0.
fn random_graph(vertices: u32) -> GraphModel {
    let mut graph = GraphModel::new();
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;

    for vertex in 0..vertices {
        let mut neighbors = Vec::with_capacity(RANDOM_DEGREE as usize + 1);
        if vertex + 1 < vertices {
            neighbors.push(VertexId::new(vertex + 1));
        }
        for _ in 0..RANDOM_DEGREE {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            neighbors.push(VertexId::new((state % u64::from(vertices)) as u32));
        }
        graph.record_adjacency(VertexId::new(vertex), &neighbors);
    }

    graph
}

// ============================================================================
// Benchmark: Grid Graphs
// ============================================================================

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");

    for &side in GRID_SIDES {
        let graph = grid_graph(side);
        let entry = VertexId::new(0);
        let exit = VertexId::new(side * side - 1);

        group.bench_with_input(
            BenchmarkId::new("corner_to_corner", side),
            &graph,
            |b, graph| {
                b.iter(|| shortest_path(black_box(graph), black_box(entry), black_box(exit)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Benchmark: Random Sparse Graphs
// ============================================================================

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_sparse");

    for &size in RANDOM_SIZES {
        let graph = random_graph(size);
        let entry = VertexId::new(0);
        let exit = VertexId::new(size - 1);

        group.bench_with_input(BenchmarkId::new("solve", size), &graph, |b, graph| {
            b.iter(|| shortest_path(black_box(graph), black_box(entry), black_box(exit)));
        });
    }

    group.finish();
}

// ============================================================================
// Criterion Setup
// ============================================================================

criterion_group!(benches, bench_grid, bench_random);
criterion_main!(benches);
