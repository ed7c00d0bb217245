use crate::error::StoreError;
use crate::state::record::Record;

/// Ordered in-memory collection of records. Insertion order is display
/// order; there is no delete.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    /// Bumped on every mutation so dependents can tell the contents changed.
    revision: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: Record) -> usize {
        self.records.push(record);
        self.revision += 1;
        self.records.len() - 1
    }

    pub fn replace_at(&mut self, index: usize, record: Record) -> Result<(), StoreError> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(StoreError::OutOfRange { index, len })?;
        *slot = record;
        self.revision += 1;
        Ok(())
    }

    pub fn replace_all(&mut self, records: Vec<Record>) {
        self.records = records;
        self.revision += 1;
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl From<Vec<Record>> for RecordStore {
    fn from(records: Vec<Record>) -> Self {
        Self { records, revision: 0 }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
