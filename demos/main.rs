use jabeja::{Graph, InitialPartitioningMethod, Jabeja, JabejaConfig, RandomSource, RoundMetrics};
use std::time;

const SIDE: u32 = 32;

/// A `SIDE` x `SIDE` grid where every cell is linked to its right and lower neighbour.
fn grid() -> Graph {
    let mut edges = Vec::new();
    for y in 0..SIDE {
        for x in 0..SIDE {
            let id = y * SIDE + x;
            if x + 1 < SIDE {
                edges.push((id, id + 1));
            }
            if y + 1 < SIDE {
                edges.push((id, id + SIDE));
            }
        }
    }
    Graph::from_edges((SIDE * SIDE) as usize, &edges).unwrap()
}

fn main() {
    env_logger::init();
    let config = JabejaConfig::default().with_rounds(300);

    let mut graph = grid();
    graph
        .partition_initial(
            InitialPartitioningMethod::RoundRobin,
            &mut RandomSource::seeded(config.rng_seed),
            4,
        )
        .unwrap();
    println!("initial edge cut: {}", graph.calculate_edge_cut());

    let t1 = time::Instant::now();
    let mut jabeja = Jabeja::new(graph, config).unwrap();
    let mut rounds: Vec<RoundMetrics> = Vec::new();
    jabeja.run(&mut rounds).unwrap();
    println!("time: {}ms", t1.elapsed().as_millis());

    if let Some(last) = rounds.last() {
        println!(
            "edge cut: {}, swaps: {}, migrations: {}",
            last.edge_cut, last.swaps, last.migrations
        );
    }
    println!("partition sizes: {:?}", jabeja.graph().partition_sizes());
}
