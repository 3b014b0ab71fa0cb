use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Local};

/// `[2026-01-02 03:04:05.678] [info] message`
const LINE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// One captured log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub time: DateTime<Local>,
    pub level: log::Level,
    pub message: String,
}

impl LogEntry {
    /// The record as the console prints it.
    pub fn line(&self) -> String {
        format!(
            "[{}] [{}] {}",
            self.time.format(LINE_TIME_FORMAT),
            self.level.as_str().to_ascii_lowercase(),
            self.message
        )
    }
}

/// Bounded, shareable list of recent log records.
///
/// Writers may be any thread; the UI thread reads it once per frame. When full
/// the oldest entry is discarded.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity.min(1024)))),
            capacity,
        }
    }

    /// Appends a record stamped with the current local time.
    pub fn push(&self, level: log::Level, message: impl Into<String>) {
        let entry = LogEntry { time: Local::now(), level, message: message.into() };
        let mut entries = self.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Runs `f` over the entries, oldest first, while holding the lock.
    pub fn with_entries<R>(&self, f: impl FnOnce(&mut dyn Iterator<Item = &LogEntry>) -> R) -> R {
        let entries = self.lock();
        f(&mut entries.iter())
    }

    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.lock().iter().cloned().collect()
    }

    // A panic while holding the lock leaves the list itself intact.
    fn lock(&self) -> MutexGuard<'_, VecDeque<LogEntry>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(512)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use log::Level;

    #[test]
    fn keeps_insertion_order() {
        let buf = LogBuffer::new(8);
        buf.push(Level::Info, "one");
        buf.push(Level::Warn, "two");

        let snap = buf.snapshot();
        assert_eq!(snap[0].message, "one");
        assert_eq!(snap[1].level, Level::Warn);
    }

    #[test]
    fn line_carries_timestamp_and_level() {
        let entry = LogEntry {
            time: Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            level: Level::Warn,
            message: "plot stalled".to_string(),
        };
        assert_eq!(entry.line(), "[2026-01-02 03:04:05.000] [warn] plot stalled");
    }

    #[test]
    fn push_stamps_local_time() {
        let buf = LogBuffer::new(4);
        let before = Local::now();
        buf.push(Level::Info, "tick");
        let after = Local::now();

        let entry = &buf.snapshot()[0];
        assert!(before <= entry.time && entry.time <= after);
    }

    #[test]
    fn drops_oldest_when_full() {
        let buf = LogBuffer::new(2);
        buf.push(Level::Info, "a");
        buf.push(Level::Info, "b");
        buf.push(Level::Info, "c");

        let messages: Vec<_> = buf.snapshot().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, ["b", "c"]);
    }

    #[test]
    fn clones_share_storage() {
        let buf = LogBuffer::new(4);
        let writer = buf.clone();
        writer.push(Level::Error, "boom");
        assert_eq!(buf.len(), 1);

        buf.clear();
        assert!(writer.is_empty());
    }

    #[test]
    fn writable_from_other_threads() {
        let buf = LogBuffer::new(64);
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let buf = buf.clone();
                std::thread::spawn(move || buf.push(Level::Debug, format!("thread {i}")))
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn with_entries_counts_levels() {
        let buf = LogBuffer::new(8);
        buf.push(Level::Warn, "w");
        buf.push(Level::Info, "i");
        buf.push(Level::Warn, "w2");

        let warnings = buf.with_entries(|it| it.filter(|e| e.level == Level::Warn).count());
        assert_eq!(warnings, 2);
    }
}
