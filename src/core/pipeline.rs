use crate::core::{ConfigProvider, Header, Record, RowTransform};
use crate::utils::error::{PipelineError, Result};
use std::fs::File;
use std::io::Write;

/// Streaming read-transform-write loop: one record is fully parsed,
/// transformed, and written before the next is read. Single forward pass,
/// not restartable.
pub struct CsvPipeline<C: ConfigProvider, T: RowTransform> {
    config: C,
    transform: T,
}

impl<C: ConfigProvider, T: RowTransform> CsvPipeline<C, T> {
    pub fn new(config: C, transform: T) -> Self {
        Self { config, transform }
    }

    /// Runs the pipeline, writing one CSV-encoded line of transformed values
    /// per input data row. The header row itself produces no output. Returns
    /// the number of rows written.
    pub fn run<W: Write>(&self, out: W) -> Result<u64> {
        let path = self.config.input_path();

        tracing::debug!("Opening input file: {}", path.display());
        let file = File::open(path).map_err(|source| PipelineError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = csv::Reader::from_reader(file);
        let header = Header::new(reader.headers()?.iter().map(str::to_string).collect());
        tracing::debug!("Parsed header with {} columns", header.len());

        let mut writer = csv::Writer::from_writer(out);
        let mut rows = 0u64;

        for row in reader.records() {
            let row = row?;
            let record = Record::new(header.clone(), row.iter().map(str::to_string).collect());
            let record = self.transform.apply(record)?;
            writer.write_record(record.values())?;
            rows += 1;
        }

        writer.flush()?;
        tracing::debug!("Wrote {} rows", rows);
        Ok(rows)
    }
}
