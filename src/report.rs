use crate::{InitialPartitioningMethod, JabejaConfig, ReportError, RoundMetrics};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

const DELIMITER: &str = "\t\t";

/// Receives one [`RoundMetrics`] per completed round.
pub trait Reporter {
    fn report(&mut self, metrics: &RoundMetrics) -> Result<(), ReportError>;
}

/// Collects the metrics in memory.
impl Reporter for Vec<RoundMetrics> {
    fn report(&mut self, metrics: &RoundMetrics) -> Result<(), ReportError> {
        self.push(*metrics);
        Ok(())
    }
}

/// Writes a header once, then one tab-delimited line per round.
pub struct TabularReporter<W: Write> {
    out: W,
    header_written: bool,
}

impl TabularReporter<BufWriter<File>> {
    /// Creates `dir` if needed and truncates `dir/file_name`.
    pub fn create<P: AsRef<Path>>(dir: P, file_name: &str) -> Result<Self, ReportError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
            path: dir.display().to_string(),
            source,
        })?;
        let path = dir.join(file_name);
        log::debug!("writing results to {}", path.display());
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> TabularReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TabularReporter<W> {
    fn report(&mut self, metrics: &RoundMetrics) -> Result<(), ReportError> {
        if !self.header_written {
            writeln!(
                self.out,
                "# Migration is number of nodes that have changed color.\n"
            )?;
            writeln!(
                self.out,
                "Round{DELIMITER}Edge-Cut{DELIMITER}Swaps{DELIMITER}Migrations"
            )?;
            self.header_written = true;
        }
        writeln!(
            self.out,
            "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
            metrics.round, metrics.edge_cut, metrics.swaps, metrics.migrations
        )?;
        self.out.flush()?;
        Ok(())
    }
}

/// Name of the result file for a run, encoding every parameter of the run.
pub fn result_file_name(
    graph_path: &Path,
    initial: InitialPartitioningMethod,
    config: &JabejaConfig,
) -> String {
    let graph_name = graph_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "graph".to_string());
    format!(
        "{graph_name}_NS_{}_GICP_{initial}_T_{:?}_D_{:?}_AP_{}_RNSS_{}_URSS_{}_A_{:?}_R_{}.txt",
        config.neighbour_selection,
        config.temperature_start,
        config.temperature_delta,
        config.annealing,
        config.neighbour_sample_size,
        config.random_sample_size,
        config.alpha,
        config.rounds,
    )
}
