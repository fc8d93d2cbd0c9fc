//! Observability: configuration-resolution counters and sink abstractions.
//!
//! The function catalog never records; only `config` emits events.

pub(crate) mod metrics;
pub(crate) mod sink;


// re-exports
pub use metrics::{EventOps, EventReport, FunctionCounters};
pub use sink::{
    MetricsEvent, MetricsSink, RejectKind, metrics_report, metrics_reset_all, with_metrics_sink,
};
