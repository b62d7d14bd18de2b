//! Workload scenarios module

use chainstore::{HashTable, TableResult};
use parking_lot::Mutex;
use rand::Rng;
use rand::rngs::StdRng;

/// The table every scenario operates on
///
/// The table is single-threaded; workers serialize through the mutex, which
/// is the documented obligation for callers sharing a table across threads.
pub type SharedTable = Mutex<HashTable<String, u64>>;

/// Scenario trait - defines one benchmark workload
pub trait Scenario: Send + Sync {
    /// Populate the table before measurement
    fn prepare(&self, table: &SharedTable);

    /// Execute one iteration of the workload
    ///
    /// An `Err` means the operation targeted a key with no entry, which the
    /// driver reports as a miss rather than a failure.
    fn execute(&self, table: &SharedTable, rng: &mut StdRng) -> TableResult<()>;

    /// Scenario name for reporting
    fn name(&self) -> &'static str;
}

fn key_for(n: usize) -> String {
    format!("key-{}", n)
}

fn populate(table: &SharedTable, keys: usize) {
    let mut table = table.lock();
    for n in 0..keys {
        table.set(key_for(n), n as u64);
    }
}

/// Point get scenario - random single-key lookups over a populated table
pub struct PointGet {
    keys: usize,
}

impl PointGet {
    pub fn new(keys: usize) -> Self {
        Self { keys }
    }
}

impl Scenario for PointGet {
    fn prepare(&self, table: &SharedTable) {
        populate(table, self.keys);
    }

    fn execute(&self, table: &SharedTable, rng: &mut StdRng) -> TableResult<()> {
        let n = rng.gen_range(0..self.keys);
        table.lock().get(&key_for(n)).map(|_| ())
    }

    fn name(&self) -> &'static str {
        "point_get"
    }
}

/// Read-write scenario - 90% lookups, 10% value updates
pub struct ReadWrite {
    keys: usize,
}

impl ReadWrite {
    pub fn new(keys: usize) -> Self {
        Self { keys }
    }
}

impl Scenario for ReadWrite {
    fn prepare(&self, table: &SharedTable) {
        populate(table, self.keys);
    }

    fn execute(&self, table: &SharedTable, rng: &mut StdRng) -> TableResult<()> {
        let n = rng.gen_range(0..self.keys);
        if rng.gen_range(0..10) == 0 {
            table.lock().set(key_for(n), n as u64 + 1);
            Ok(())
        } else {
            table.lock().get(&key_for(n)).map(|_| ())
        }
    }

    fn name(&self) -> &'static str {
        "read_write"
    }
}

/// Write-only scenario - sets over twice the prepared key range
///
/// Half the writes insert new keys, so the table keeps growing and the
/// resize path stays hot.
pub struct WriteOnly {
    keys: usize,
}

impl WriteOnly {
    pub fn new(keys: usize) -> Self {
        Self { keys }
    }
}

impl Scenario for WriteOnly {
    fn prepare(&self, table: &SharedTable) {
        populate(table, self.keys);
    }

    fn execute(&self, table: &SharedTable, rng: &mut StdRng) -> TableResult<()> {
        let n = rng.gen_range(0..self.keys * 2);
        table.lock().set(key_for(n), n as u64);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "write_only"
    }
}

/// Update scenario - in-place value replacement of existing keys only
pub struct Update {
    keys: usize,
}

impl Update {
    pub fn new(keys: usize) -> Self {
        Self { keys }
    }
}

impl Scenario for Update {
    fn prepare(&self, table: &SharedTable) {
        populate(table, self.keys);
    }

    fn execute(&self, table: &SharedTable, rng: &mut StdRng) -> TableResult<()> {
        let n = rng.gen_range(0..self.keys);
        table.lock().set(key_for(n), rng.gen_range(0..u64::MAX));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "update"
    }
}

/// Insert-delete scenario - add a fresh key, then remove it
pub struct InsertDelete {
    keys: usize,
}

impl InsertDelete {
    pub fn new(keys: usize) -> Self {
        Self { keys }
    }
}

impl Scenario for InsertDelete {
    fn prepare(&self, table: &SharedTable) {
        populate(table, self.keys);
    }

    fn execute(&self, table: &SharedTable, rng: &mut StdRng) -> TableResult<()> {
        let n = self.keys + rng.gen_range(0..self.keys);
        let key = key_for(n);

        let mut table = table.lock();
        table.set(key.clone(), n as u64);
        table.delete(&key).map(|_| ())
    }

    fn name(&self) -> &'static str {
        "insert_delete"
    }
}

/// Mixed scenario - lookups, writes and deletes in one workload
pub struct Mixed {
    keys: usize,
}

impl Mixed {
    pub fn new(keys: usize) -> Self {
        Self { keys }
    }
}

impl Scenario for Mixed {
    fn prepare(&self, table: &SharedTable) {
        populate(table, self.keys);
    }

    fn execute(&self, table: &SharedTable, rng: &mut StdRng) -> TableResult<()> {
        let n = rng.gen_range(0..self.keys);
        match rng.gen_range(0..10) {
            0..=5 => table.lock().get(&key_for(n)).map(|_| ()),
            6..=8 => {
                table.lock().set(key_for(n), n as u64);
                Ok(())
            }
            _ => table.lock().delete(&key_for(n)).map(|_| ()),
        }
    }

    fn name(&self) -> &'static str {
        "mixed"
    }
}
