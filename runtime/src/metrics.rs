//! Metric names and descriptions for the Store runtime.
//!
//! The store records through the [`metrics`] facade; nothing is collected
//! until the embedding application installs a recorder (for example a
//! Prometheus exporter). Call [`describe_metrics`] once after installing it
//! so exporters can render help text.
//!
//! Every metric carries a `store` label with the name from
//! [`StoreConfig`](crate::StoreConfig).

use metrics::{Unit, describe_counter, describe_histogram};

/// Counter: actions passed to `Store::send`
pub const STORE_ACTIONS_TOTAL: &str = "store_actions_total";

/// Histogram: time spent inside the composed reducer per action
pub const REDUCER_DURATION_SECONDS: &str = "store_reducer_duration_seconds";

/// Counter: observer callbacks and subscribers notified after a send
pub const OBSERVERS_NOTIFIED_TOTAL: &str = "store_observers_notified_total";

/// Register descriptions for all Store metrics.
pub fn describe_metrics() {
    describe_counter!(
        STORE_ACTIONS_TOTAL,
        Unit::Count,
        "Total number of actions sent to the store"
    );
    describe_histogram!(
        REDUCER_DURATION_SECONDS,
        Unit::Seconds,
        "Time taken to run the composed reducer for one action"
    );
    describe_counter!(
        OBSERVERS_NOTIFIED_TOTAL,
        Unit::Count,
        "Total number of observer notifications delivered"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_without_recorder_is_noop() {
        // No recorder installed: descriptions go to the no-op recorder.
        describe_metrics();
    }

    #[test]
    fn test_metric_names_are_distinct() {
        let names = [STORE_ACTIONS_TOTAL, REDUCER_DURATION_SECONDS, OBSERVERS_NOTIFIED_TOTAL];
        for (i, name) in names.iter().enumerate() {
            assert!(name.starts_with("store_"));
            assert!(!names[i + 1..].contains(name));
        }
    }
}
