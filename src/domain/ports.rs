use crate::domain::model::Record;
use crate::utils::error::Result;
use std::path::Path;

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
}

/// The per-row extension point: maps one record to another. The pipeline is
/// agnostic to what the function does as long as it returns a record whose
/// ordered values are writable as CSV.
pub trait RowTransform {
    fn apply(&self, record: Record) -> Result<Record>;
}

impl<F> RowTransform for F
where
    F: Fn(Record) -> Result<Record>,
{
    fn apply(&self, record: Record) -> Result<Record> {
        self(record)
    }
}
