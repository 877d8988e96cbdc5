//! Student Storage
//! Mission: Hold the student list in memory and serve linear-scan CRUD

use crate::students::models::{AverageEntry, StatusEntry, StudentPatch, StudentRecord};
use parking_lot::RwLock;
use tracing::info;

/// Records every fresh store starts with
pub fn seed_records() -> Vec<StudentRecord> {
    vec![
        StudentRecord::new(1, "João", "12345", 7.0, 8.0),
        StudentRecord::new(2, "Maria", "67890", 6.0, 5.5),
        StudentRecord::new(3, "Pedro", "11223", 9.0, 7.5),
        StudentRecord::new(4, "Ana", "33445", 5.5, 6.0),
        StudentRecord::new(5, "Lucas", "55667", 8.5, 9.0),
        StudentRecord::new(6, "Paula", "77889", 7.5, 8.0),
        StudentRecord::new(7, "Carlos", "99001", 6.5, 6.0),
        StudentRecord::new(8, "Juliana", "22334", 8.0, 7.5),
        StudentRecord::new(9, "Fernanda", "44556", 9.5, 8.0),
        StudentRecord::new(10, "Gabriel", "66778", 7.0, 6.5),
        StudentRecord::new(11, "Ricardo", "88990", 5.0, 5.5),
        StudentRecord::new(12, "Luana", "10112", 8.0, 9.0),
        StudentRecord::new(13, "Marcos", "21314", 6.0, 7.0),
        StudentRecord::new(14, "Sofia", "41516", 7.5, 6.5),
        StudentRecord::new(15, "Isabela", "61718", 8.5, 9.5),
        StudentRecord::new(16, "Diego", "81920", 6.5, 7.5),
        StudentRecord::new(17, "Carla", "02122", 7.0, 8.5),
        StudentRecord::new(18, "André", "22324", 9.0, 8.0),
        StudentRecord::new(19, "Beatriz", "42526", 5.5, 6.0),
        StudentRecord::new(20, "Vitor", "62728", 7.5, 8.0),
    ]
}

/// In-memory student list. Each operation takes the lock once, so a
/// read-modify-write never interleaves with another request.
pub struct StudentStore {
    records: RwLock<Vec<StudentRecord>>,
}

impl StudentStore {
    pub fn new(records: Vec<StudentRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Store pre-loaded with `seed_records()`
    pub fn seeded() -> Self {
        Self::new(seed_records())
    }

    pub fn list_all(&self) -> Vec<StudentRecord> {
        self.records.read().clone()
    }

    pub fn list_averages(&self) -> Vec<AverageEntry> {
        self.records.read().iter().map(AverageEntry::from).collect()
    }

    pub fn list_pass_fail(&self) -> Vec<StatusEntry> {
        self.records.read().iter().map(StatusEntry::from).collect()
    }

    pub fn get_by_id(&self, id: i64) -> Option<StudentRecord> {
        self.records.read().iter().find(|r| r.id == id).cloned()
    }

    /// Append verbatim; duplicate ids are accepted
    pub fn create(&self, record: StudentRecord) {
        let mut records = self.records.write();
        info!("➕ Student {} ({}) added", record.id, record.nome);
        records.push(record);
    }

    /// Patch the first record with `id`. Returns false when none matches.
    pub fn update(&self, id: i64, patch: StudentPatch) -> bool {
        let mut records = self.records.write();
        match records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                patch.apply(record);
                info!("✏️  Student {} updated", id);
                true
            }
            None => false,
        }
    }

    /// Remove the first record with `id`. Returns false when none matches.
    pub fn delete(&self, id: i64) -> bool {
        let mut records = self.records.write();
        match records.iter().position(|r| r.id == id) {
            Some(index) => {
                records.remove(index);
                info!("🗑️  Student {} deleted", id);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Default for StudentStore {
    fn default() -> Self {
        Self::seeded()
    }
}
