use crate::core::{Record, RowTransform};
use crate::utils::error::Result;

/// Default transform: every record passes through unchanged. Deployments
/// swap this out to derive columns, redact fields, or reformat values.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransform;

impl RowTransform for IdentityTransform {
    fn apply(&self, record: Record) -> Result<Record> {
        Ok(record)
    }
}
