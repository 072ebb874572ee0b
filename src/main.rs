//! Runs Ja-be-Ja on a METIS graph and writes per-round results to a file.

use anyhow::{Context, Result};
use clap::Parser;
use jabeja::{
    result_file_name, AnnealingPolicy, Graph, InitialPartitioningMethod, Jabeja, JabejaConfig,
    NodeSelection, RandomSource, TabularReporter,
};
use std::path::PathBuf;
use std::time;

#[derive(Parser)]
#[command(name = "jabeja", about = "Distributed graph partitioning by color swapping")]
struct Args {
    /// Graph in METIS format
    #[arg(long)]
    graph: PathBuf,
    /// Number of partitions (colors)
    #[arg(long, default_value_t = 4)]
    partitions: u32,
    #[arg(long, default_value_t = 1000)]
    rounds: u32,
    #[arg(long, value_enum, default_value_t = NodeSelection::Hybrid)]
    node_selection: NodeSelection,
    #[arg(long, value_enum, default_value_t = InitialPartitioningMethod::RoundRobin)]
    initial_coloring: InitialPartitioningMethod,
    #[arg(long, value_enum, default_value_t = AnnealingPolicy::Linear)]
    annealing: AnnealingPolicy,
    /// Initial temperature
    #[arg(long, default_value_t = 2.0)]
    temperature: f64,
    /// Cooldown per round: subtracted (linear) or multiplied in (exponential)
    #[arg(long, default_value_t = 0.003)]
    delta: f64,
    #[arg(long, default_value_t = 2.0)]
    alpha: f64,
    #[arg(long, default_value_t = 3)]
    neighbor_sample_size: u32,
    #[arg(long, default_value_t = 6)]
    uniform_sample_size: u32,
    /// Reset the temperature every 400 rounds
    #[arg(long)]
    restart: bool,
    #[arg(long, default_value_t = 1234)]
    seed: u64,
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = JabejaConfig::default()
        .with_seed(args.seed)
        .with_rounds(args.rounds)
        .with_selection(args.node_selection)
        .with_annealing(args.annealing)
        .with_temperature(args.temperature, args.delta)
        .with_alpha(args.alpha)
        .with_sample_sizes(args.neighbor_sample_size, args.uniform_sample_size)
        .with_restart(args.restart);

    let mut graph = Graph::deserialize_metis(&args.graph)?;
    // Coloring draws from its own stream so the run itself replays from the seed alone.
    graph
        .partition_initial(
            args.initial_coloring,
            &mut RandomSource::seeded(args.seed),
            args.partitions,
        )
        .context("could not color the graph")?;
    log::info!("initial edge cut: {}", graph.calculate_edge_cut());

    let file_name = result_file_name(&args.graph, args.initial_coloring, &config);
    let mut reporter = TabularReporter::create(&args.output_dir, &file_name)?;

    let mut jabeja = Jabeja::new(graph, config).context("invalid configuration")?;
    let t1 = time::Instant::now();
    jabeja.run(&mut reporter)?;
    log::info!("time: {}ms", t1.elapsed().as_millis());

    let sizes = jabeja.graph().partition_sizes();
    log::info!(
        "partitions: {}, with sizes from {} to {}",
        sizes.len(),
        sizes.iter().min().copied().unwrap_or(0),
        sizes.iter().max().copied().unwrap_or(0)
    );
    println!("{}", args.output_dir.join(file_name).display());
    Ok(())
}
