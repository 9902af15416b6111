//! メトリクス導出・突き合わせ・公開

pub mod deriver;
pub mod labels;
pub mod publisher;
pub mod reconcile;

pub use deriver::{derive, DerivedMetrics};
pub use labels::MetricLabels;
pub use publisher::MetricsPublisher;
pub use reconcile::{reconcile, CycleState};
