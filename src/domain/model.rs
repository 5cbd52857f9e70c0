use std::sync::Arc;

/// Ordered column names from the first line of the input, shared by every
/// record of the file. Cloning is cheap (shared handle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    columns: Arc<Vec<String>>,
}

impl Header {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns: Arc::new(columns),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// One data row: an ordered column-name-to-value mapping. Values are kept in
/// header order; named access goes through the shared header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    header: Header,
    values: Vec<String>,
}

impl Record {
    pub fn new(header: Header, values: Vec<String>) -> Self {
        Self { header, values }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.header
            .index_of(name)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
    }

    /// Replaces the value of an existing column, or appends a new derived
    /// column. Appending copies the header handle on write, so other records
    /// sharing it keep their original shape.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        match self.header.index_of(name) {
            Some(i) => self.values[i] = value.into(),
            None => {
                Arc::make_mut(&mut self.header.columns).push(name.to_string());
                self.values.push(value.into());
            }
        }
    }

    /// Values in header order, the projection written to the output stream.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.header
            .columns
            .iter()
            .map(String::as_str)
            .zip(self.values())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
