//! Metrics sink boundary.
//!
//! Configuration resolution MUST NOT touch obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
//! Catalog validators stay pure and never record events.
use crate::{function::AggFunctionKind, obs::metrics};
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = RefCell::new(None);
}

///
/// RejectKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RejectKind {
    Parameter,
    DataType,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    ColumnResolved {
        kind: AggFunctionKind,
        explicit: bool,
    },
    ColumnRejected {
        kind: AggFunctionKind,
        reason: RejectKind,
    },
    ConfigResolved {
        columns: u64,
    },
    ConfigRejected,
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

///
/// GlobalMetricsSink
/// Writes into the thread-local counters; used when no override is installed.
///

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        metrics::with_state_mut(|m| match event {
            MetricsEvent::ColumnResolved { kind, explicit } => {
                m.ops.columns_resolved = m.ops.columns_resolved.saturating_add(1);
                m.ops.columns_defaulted =
                    m.ops.columns_defaulted.saturating_add(u64::from(!explicit));

                let entry = m.function_mut(kind);
                entry.columns_resolved = entry.columns_resolved.saturating_add(1);
                entry.explicit_bindings =
                    entry.explicit_bindings.saturating_add(u64::from(explicit));
            }
            MetricsEvent::ColumnRejected {
                kind,
                reason: RejectKind::Parameter,
            } => {
                m.ops.parameter_rejections = m.ops.parameter_rejections.saturating_add(1);
                let entry = m.function_mut(kind);
                entry.parameter_rejections = entry.parameter_rejections.saturating_add(1);
            }
            MetricsEvent::ColumnRejected {
                kind,
                reason: RejectKind::DataType,
            } => {
                m.ops.data_type_rejections = m.ops.data_type_rejections.saturating_add(1);
                let entry = m.function_mut(kind);
                entry.data_type_rejections = entry.data_type_rejections.saturating_add(1);
            }
            MetricsEvent::ConfigResolved { .. } => {
                m.ops.configs_resolved = m.ops.configs_resolved.saturating_add(1);
            }
            MetricsEvent::ConfigRejected => {
                m.ops.configs_rejected = m.ops.configs_rejected.saturating_add(1);
            }
        });
    }
}

pub(crate) fn record(event: MetricsEvent) {
    match SINK_OVERRIDE.with(|cell| *cell.borrow()) {
        // SAFETY: the pointer is only present while `with_metrics_sink` is on
        // the stack, and that call still borrows the sink.
        Some(ptr) => unsafe { (*ptr).record(event) },
        None => GlobalMetricsSink.record(event),
    }
}

/// Snapshot the current metrics state.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset all metrics state.
pub fn metrics_reset_all() {
    metrics::reset();
}

/// Route every event recorded on this thread to `sink` while `f` runs.
///
/// The previous sink is restored when `f` returns or unwinds.
pub fn with_metrics_sink<T>(sink: &dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    struct Restore(Option<*const dyn MetricsSink>);

    impl Drop for Restore {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| *cell.borrow_mut() = self.0);
        }
    }

    // SAFETY: erases the borrow lifetime only; `Restore` removes the pointer
    // before `sink` can go out of scope.
    let ptr = unsafe { std::mem::transmute::<&dyn MetricsSink, *const dyn MetricsSink>(sink) };
    let _restore = Restore(SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(ptr)));

    f()
}
