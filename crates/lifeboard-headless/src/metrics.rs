use std::fs::File;
use std::path::Path;
use std::time::Duration;

use csv::Writer;
use lifeboard_core::GenerationStats;

/// Metrics writer for per-generation CSV output
pub struct MetricsWriter {
    csv_writer: Writer<File>,
    rows: u32,
}

impl MetricsWriter {
    /// Create `metrics.csv` in `output_dir` and write its header
    pub fn new(output_dir: &Path) -> Result<Self, anyhow::Error> {
        let file = File::create(output_dir.join("metrics.csv"))?;
        let mut csv_writer = Writer::from_writer(file);

        csv_writer.write_record([
            "generation",
            "population",
            "births",
            "deaths",
            "density",
            "wall_time_us",
        ])?;

        Ok(Self {
            csv_writer,
            rows: 0,
        })
    }

    /// Write metrics for a single generation
    pub fn write_generation(
        &mut self,
        stats: &GenerationStats,
        dimension: usize,
        wall_time: Duration,
    ) -> Result<(), anyhow::Error> {
        let density = stats.population as f64 / (dimension * dimension) as f64;

        self.csv_writer.write_record(&[
            stats.generation.to_string(),
            stats.population.to_string(),
            stats.births.to_string(),
            stats.deaths.to_string(),
            format!("{:.6}", density),
            wall_time.as_micros().to_string(),
        ])?;

        self.csv_writer.flush()?;
        self.rows += 1;

        Ok(())
    }

    /// Get the number of rows written
    pub fn rows(&self) -> u32 {
        self.rows
    }
}
