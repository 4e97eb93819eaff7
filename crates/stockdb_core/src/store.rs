//! Generic fixed-slot record store.
//!
//! A `RecordStore<R>` manages one flat binary file: a byte-exact
//! concatenation of fixed-size slots with no header and no padding. All
//! in-memory state (the identifier index and the free list) is derived
//! from a full scan at open time and never persisted separately, so a
//! store self-heals from whatever the file contains when it is opened.
//!
//! Every operation opens the file, performs one contiguous read, write,
//! or scan, and returns. There is no locking and no cross-operation
//! atomicity; a store is a single-process, single-threaded resource.

use std::collections::{BTreeMap, VecDeque};
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Read, Seek, SeekFrom, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use stockdb_codec::{SlotReader, SlotWriter, TOMBSTONE_DEAD};

use crate::error::{StoreError, StoreResult};
use crate::record::Record;
use crate::types::{RecordId, SlotOffset};

/// A fixed-slot binary file manager for records of type `R`.
///
/// The store owns the in-memory index (identifier → slot offset, covering
/// exactly the live slots) and the FIFO free list of tombstoned slot
/// offsets. Deleting a record flips its tombstone flag in place and
/// releases its offset; the earliest-deleted slot is reused first when a
/// new record is added.
pub struct RecordStore<R: Record> {
    path: PathBuf,
    index: BTreeMap<RecordId, SlotOffset>,
    free: VecDeque<SlotOffset>,
    _marker: PhantomData<R>,
}

/// Slot counts from one full pass over a store file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    /// Total number of full slots in the file.
    pub total_slots: u64,
    /// Number of live (non-tombstoned) slots.
    pub active: u64,
    /// Number of tombstoned slots.
    pub tombstoned: u64,
}

impl StoreStats {
    /// Number of reclaimable slots; always equal to the tombstoned count.
    pub fn holes(&self) -> u64 {
        self.tombstoned
    }
}

impl<R: Record> RecordStore<R> {
    /// Opens the store, creating an empty file if none exists, then scans
    /// the whole file to build the index and free list.
    ///
    /// # Errors
    ///
    /// Returns an error only on unrecoverable I/O failure; a missing file
    /// is not an error.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;

        let mut store = Self {
            path,
            index: BTreeMap::new(),
            free: VecDeque::new(),
            _marker: PhantomData,
        };
        store.scan()?;
        Ok(store)
    }

    /// Returns the path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the fixed slot size of this store in bytes.
    pub fn slot_size(&self) -> usize {
        R::SCHEMA.slot_size()
    }

    /// Returns the number of indexed (live) records.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if no live record is indexed.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns `true` if `id` denotes a live record.
    pub fn contains(&self, id: RecordId) -> bool {
        self.index.contains_key(&id)
    }

    /// Adds a new record, reusing the earliest tombstoned slot if one is
    /// available and appending at end-of-file otherwise. Returns the
    /// offset used.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if the record's identifier is already
    /// indexed.
    pub fn add(&mut self, record: &R) -> StoreResult<SlotOffset> {
        let id = record.id();
        if self.index.contains_key(&id) {
            return Err(StoreError::duplicate_id(R::SCHEMA.name, id));
        }

        let slot = encode_slot(record)?;
        let offset = match self.free.pop_front() {
            Some(offset) => {
                self.write_at(offset, &slot)?;
                offset
            }
            None => self.append(&slot)?,
        };
        self.index.insert(id, offset);
        tracing::debug!(store = R::SCHEMA.name, %id, %offset, "record added");
        Ok(offset)
    }

    /// Looks up a record by identifier.
    ///
    /// Reads exactly one slot at the indexed offset; never scans. A read
    /// miss is an expected outcome and returns `Ok(None)`.
    pub fn get(&self, id: RecordId) -> StoreResult<Option<(SlotOffset, R)>> {
        let Some(&offset) = self.index.get(&id) else {
            return Ok(None);
        };
        let bytes = self.read_at(offset)?;
        let mut slot = SlotReader::new(R::SCHEMA, &bytes)?;
        let record = R::decode_fields(&mut slot)?;
        Ok(Some((offset, record)))
    }

    /// Overwrites the record at `id`'s slot with a new full encoding.
    ///
    /// The slot's file position never changes on update — only its
    /// contents. The record's encoded identifier is expected to equal
    /// `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` is not indexed.
    pub fn update(&mut self, id: RecordId, record: &R) -> StoreResult<()> {
        debug_assert_eq!(record.id(), id, "updated record must keep its key identifier");
        let Some(&offset) = self.index.get(&id) else {
            return Err(StoreError::not_found(R::SCHEMA.name, id));
        };
        let slot = encode_slot(record)?;
        self.write_at(offset, &slot)?;
        tracing::debug!(store = R::SCHEMA.name, %id, %offset, "record updated");
        Ok(())
    }

    /// Tombstones the record at `id` and releases its offset to the tail
    /// of the free list.
    ///
    /// Only the tombstone flag is rewritten; every other byte of the slot
    /// keeps whatever was last stored.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` is not indexed.
    pub fn delete(&mut self, id: RecordId) -> StoreResult<()> {
        let Some(offset) = self.index.remove(&id) else {
            return Err(StoreError::not_found(R::SCHEMA.name, id));
        };
        self.write_at(offset, &TOMBSTONE_DEAD.to_le_bytes())?;
        self.free.push_back(offset);
        tracing::debug!(store = R::SCHEMA.name, %id, %offset, "record tombstoned");
        Ok(())
    }

    /// Iterates every live slot in ascending file-offset order.
    ///
    /// This is a fresh full-file pass, independent of the index, and can
    /// be restarted by calling it again. Reused slots occupy earlier
    /// offsets than later appends, so the order is file order, not
    /// insertion order.
    pub fn iter_active(&self) -> StoreResult<ActiveIter<R>> {
        let file = File::open(&self.path)?;
        Ok(ActiveIter {
            reader: BufReader::new(file),
            offset: 0,
            buf: vec![0u8; R::SCHEMA.slot_size()],
            _marker: PhantomData,
        })
    }

    /// Counts total, live, and tombstoned slots with a fresh full-file
    /// pass.
    pub fn stats(&self) -> StoreResult<StoreStats> {
        let file = File::open(&self.path)?;
        let mut reader = BufReader::new(file);
        let mut buf = vec![0u8; R::SCHEMA.slot_size()];
        let mut stats = StoreStats {
            total_slots: 0,
            active: 0,
            tombstoned: 0,
        };
        while read_full_slot(&mut reader, &mut buf)? {
            stats.total_slots += 1;
            let slot = SlotReader::new(R::SCHEMA, &buf)?;
            if slot.is_tombstoned() {
                stats.tombstoned += 1;
            } else {
                stats.active += 1;
            }
        }
        Ok(stats)
    }

    /// Rebuilds the index and free list from the file.
    ///
    /// Live slots are indexed by identifier (last-seen offset wins on a
    /// duplicate, which `add` never produces); tombstoned slots join the
    /// free list in file order.
    fn scan(&mut self) -> StoreResult<()> {
        self.index.clear();
        self.free.clear();

        let slot_size = R::SCHEMA.slot_size();
        let file = File::open(&self.path)?;
        let mut reader = BufReader::new(file);
        let mut buf = vec![0u8; slot_size];
        let mut offset = 0u64;

        while read_full_slot(&mut reader, &mut buf)? {
            let mut slot = SlotReader::new(R::SCHEMA, &buf)?;
            if slot.is_tombstoned() {
                self.free.push_back(SlotOffset::new(offset));
            } else {
                let id = RecordId::new(slot.take_u32()?);
                self.index.insert(id, SlotOffset::new(offset));
            }
            offset += slot_size as u64;
        }

        tracing::debug!(
            store = R::SCHEMA.name,
            active = self.index.len(),
            holes = self.free.len(),
            "scan complete"
        );
        Ok(())
    }

    fn read_at(&self, offset: SlotOffset) -> StoreResult<Vec<u8>> {
        let mut file = File::open(&self.path)?;
        file.seek(SeekFrom::Start(offset.as_u64()))?;
        let mut buf = vec![0u8; R::SCHEMA.slot_size()];
        file.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn write_at(&self, offset: SlotOffset, bytes: &[u8]) -> StoreResult<()> {
        let mut file = OpenOptions::new().write(true).open(&self.path)?;
        file.seek(SeekFrom::Start(offset.as_u64()))?;
        file.write_all(bytes)?;
        Ok(())
    }

    fn append(&self, bytes: &[u8]) -> StoreResult<SlotOffset> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        let offset = file.seek(SeekFrom::End(0))?;
        file.write_all(bytes)?;
        Ok(SlotOffset::new(offset))
    }
}

fn encode_slot<R: Record>(record: &R) -> StoreResult<Vec<u8>> {
    let mut writer = SlotWriter::new(R::SCHEMA);
    record.encode_fields(&mut writer);
    Ok(writer.finish()?)
}

/// Fills `buf` with the next full slot.
///
/// Returns `Ok(false)` at end-of-file, including when only a trailing
/// partial slot remains — partial slots are discarded, not data.
fn read_full_slot<Rd: Read>(reader: &mut Rd, buf: &mut [u8]) -> io::Result<bool> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            return Ok(false);
        }
        filled += n;
    }
    Ok(true)
}

/// Iterator over the live slots of one store file.
pub struct ActiveIter<R: Record> {
    reader: BufReader<File>,
    offset: u64,
    buf: Vec<u8>,
    _marker: PhantomData<R>,
}

impl<R: Record> Iterator for ActiveIter<R> {
    type Item = StoreResult<(SlotOffset, R)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match read_full_slot(&mut self.reader, &mut self.buf) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => return Some(Err(e.into())),
            }
            let offset = SlotOffset::new(self.offset);
            self.offset += self.buf.len() as u64;

            let mut slot = match SlotReader::new(R::SCHEMA, &self.buf) {
                Ok(slot) => slot,
                Err(e) => return Some(Err(e.into())),
            };
            if slot.is_tombstoned() {
                continue;
            }
            return Some(
                R::decode_fields(&mut slot)
                    .map(|record| (offset, record))
                    .map_err(Into::into),
            );
        }
    }
}
