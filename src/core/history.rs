//! # Run History Module / 运行历史模块
//!
//! A bounded, insertion-ordered store of completed runs. Storage order is
//! oldest first; lookups by index use display order, newest first.
//!
//! 有界且按插入顺序保存的已完成运行记录。存储顺序为最旧在前；
//! 按索引查询时使用展示顺序，即最新在前。

use std::collections::VecDeque;

use crate::core::error::SessionError;
use crate::core::models::HistoryEntry;

/// Number of runs kept by default.
pub const HISTORY_CAPACITY: usize = 5;

#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// A store holding at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Appends an entry, evicting the oldest ones beyond capacity.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// All retained entries, oldest first.
    pub fn list(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Looks up an entry by display index, where 0 is the newest run.
    pub fn get(&self, display_index: usize) -> Result<&HistoryEntry, SessionError> {
        let len = self.entries.len();
        len.checked_sub(1)
            .and_then(|last| last.checked_sub(display_index))
            .and_then(|storage_index| self.entries.get(storage_index))
            .ok_or(SessionError::HistoryNotFound {
                index: display_index,
                len,
            })
    }

    /// The most recently recorded entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
