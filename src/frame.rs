//! Frame - the local, observable mirror of one remote table
//!
//! Rows are kept in three segments, shown in this order:
//! - `remote`: what the last pull returned
//! - `in_flight`: rows handed to syncs that have not answered yet, by sync id
//! - `pending`: rows appended locally since the last sync started

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Dish;

/// Read parameters for pulls
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameConfig {
    pub table_name: String,
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

impl FrameConfig {
    pub fn new(table_name: impl Into<String>, limit: usize) -> Self {
        FrameConfig {
            table_name: table_name.into(),
            limit,
            offset: 0,
        }
    }
}

/// Work for one sync: records to push, then a pull with `config`
#[derive(Clone, Debug, PartialEq)]
pub struct SyncRequest {
    pub config: FrameConfig,
    pub push: Vec<Dish>,
}

#[derive(Debug, Default)]
pub struct Frame {
    config: Option<FrameConfig>,
    remote: Vec<Dish>,
    /// Pushed rows per outstanding sync id
    in_flight: BTreeMap<u64, Vec<Dish>>,
    pending: Vec<Dish>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configure(&mut self, config: FrameConfig) {
        tracing::debug!(table = %config.table_name, limit = config.limit, offset = config.offset, "Frame configured");
        self.config = Some(config);
    }

    pub fn config(&self) -> Option<&FrameConfig> {
        self.config.as_ref()
    }

    /// Append a row to the working set. It shows up in `rows()` right away.
    pub fn push(&mut self, dish: Dish) {
        self.pending.push(dish);
    }

    /// Hand pending rows to sync `id`. Returns `None` until configured.
    pub fn begin_sync(&mut self, id: u64) -> Option<SyncRequest> {
        let config = self.config.clone()?;
        let push: Vec<Dish> = self.pending.drain(..).collect();
        if !push.is_empty() {
            self.in_flight.insert(id, push.clone());
        }
        Some(SyncRequest { config, push })
    }

    /// Sync `id` finished and is the newest answer: its pull becomes the
    /// remote segment. Batches of other outstanding syncs stay visible.
    pub fn apply_pull(&mut self, id: u64, rows: Vec<Dish>) {
        self.remote = rows;
        self.in_flight.remove(&id);
    }

    /// Sync `id` finished after a newer pull was applied. Its pull is
    /// dropped; pushed rows that pull did not already contain are kept.
    pub fn settle_stale(&mut self, id: u64) {
        self.merge_batch(id);
    }

    /// Sync `id` failed: its rows stay in the mirror and are not retried
    pub fn abandon_sync(&mut self, id: u64) {
        self.merge_batch(id);
    }

    /// Move batch `id` into the remote segment, skipping rows the remote
    /// segment already holds (matched one to one)
    fn merge_batch(&mut self, id: u64) {
        let Some(batch) = self.in_flight.remove(&id) else {
            return;
        };
        let pulled = self.remote.len();
        let mut seen = vec![false; pulled];
        for dish in batch {
            let found = (0..pulled).find(|&i| !seen[i] && self.remote[i].same_fields(&dish));
            match found {
                Some(i) => seen[i] = true,
                None => self.remote.push(dish),
            }
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &Dish> {
        self.remote
            .iter()
            .chain(self.in_flight.values().flatten())
            .chain(self.pending.iter())
    }

    pub fn len(&self) -> usize {
        self.remote.len() + self.in_flight.values().map(Vec::len).sum::<usize>() + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(title: &str) -> Dish {
        Dish::new(Some(title.to_string()), Some(String::new()))
    }

    fn titles(frame: &Frame) -> Vec<&str> {
        frame.rows().map(|d| d.title_text()).collect()
    }

    fn configured() -> Frame {
        let mut frame = Frame::new();
        frame.configure(FrameConfig::new("DISHES", 10));
        frame
    }

    #[test]
    fn test_unconfigured_frame_does_not_sync() {
        let mut frame = Frame::new();
        frame.push(dish("Soup"));
        assert!(frame.begin_sync(1).is_none());
        assert_eq!(frame.len(), 1);
    }

    #[test]
    fn test_push_is_visible_before_sync() {
        let mut frame = configured();
        frame.push(dish("Soup"));
        assert_eq!(titles(&frame), vec!["Soup"]);
    }

    #[test]
    fn test_sync_moves_pending_and_pull_replaces_remote() {
        let mut frame = configured();
        frame.apply_pull(1, vec![dish("Old")]);
        frame.push(dish("Soup"));

        let request = frame.begin_sync(2).unwrap();
        assert_eq!(request.push, vec![dish("Soup")]);
        assert_eq!(request.config.limit, 10);
        // still shown while in flight
        assert_eq!(frame.len(), 2);

        frame.push(dish("Stew"));
        frame.apply_pull(2, vec![dish("Old"), dish("Soup")]);
        assert_eq!(titles(&frame), vec!["Old", "Soup", "Stew"]);
    }

    #[test]
    fn test_failed_sync_keeps_rows_without_retry() {
        let mut frame = configured();
        frame.push(dish("Soup"));
        frame.begin_sync(1).unwrap();
        frame.abandon_sync(1);

        assert_eq!(frame.len(), 1);
        let next = frame.begin_sync(2).unwrap();
        assert!(next.push.is_empty());
    }

    #[test]
    fn test_pull_keeps_other_syncs_rows() {
        let mut frame = configured();
        frame.push(dish("A"));
        frame.begin_sync(2).unwrap();
        frame.push(dish("B"));
        frame.begin_sync(3).unwrap();

        frame.apply_pull(2, vec![dish("A")]);
        assert_eq!(titles(&frame), vec!["A", "B"]);

        frame.abandon_sync(3);
        assert_eq!(titles(&frame), vec!["A", "B"]);
    }

    #[test]
    fn test_stale_success_keeps_rows_the_newer_pull_missed() {
        let mut frame = configured();
        frame.push(dish("A"));
        frame.begin_sync(2).unwrap();
        frame.push(dish("B"));
        frame.begin_sync(3).unwrap();

        // sync 3 pulled before sync 2's insert landed
        frame.apply_pull(3, vec![dish("B")]);
        assert_eq!(titles(&frame), vec!["B", "A"]);
        frame.settle_stale(2);
        assert_eq!(titles(&frame), vec!["B", "A"]);
    }

    #[test]
    fn test_stale_success_does_not_duplicate_pulled_rows() {
        let mut frame = configured();
        frame.push(dish("A"));
        frame.begin_sync(2).unwrap();
        frame.push(dish("B"));
        frame.begin_sync(3).unwrap();

        frame.apply_pull(3, vec![dish("A"), dish("B")]);
        frame.settle_stale(2);
        assert_eq!(titles(&frame), vec!["A", "B"]);
    }
}
