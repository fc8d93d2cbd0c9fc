use crate::function::AggFunctionKind;
use candid::CandidType;
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, in-memory counters for configuration resolution.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct EventState {
    pub(crate) ops: EventOps,
    pub(crate) functions: BTreeMap<String, FunctionCounters>,
}

impl EventState {
    pub(crate) fn function_mut(&mut self, kind: AggFunctionKind) -> &mut FunctionCounters {
        self.functions
            .entry(kind.identifier().to_string())
            .or_default()
    }
}

///
/// EventOps
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Resolution entrypoints
    pub configs_resolved: u64,
    pub configs_rejected: u64,

    // Columns
    pub columns_resolved: u64,
    pub columns_defaulted: u64,

    // Rejections
    pub parameter_rejections: u64,
    pub data_type_rejections: u64,
}

///
/// FunctionCounters
/// Per-function counters keyed by function identifier.
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FunctionCounters {
    pub columns_resolved: u64,
    pub explicit_bindings: u64,
    pub parameter_rejections: u64,
    pub data_type_rejections: u64,
}

///
/// EventReport
/// Point-in-time snapshot of the event counters.
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventReport {
    pub ops: EventOps,
    pub functions: BTreeMap<String, FunctionCounters>,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters (useful in tests).
pub(crate) fn reset() {
    with_state_mut(|m| *m = EventState::default());
}

/// Snapshot the current state.
#[must_use]
pub(crate) fn report() -> EventReport {
    with_state(|m| EventReport {
        ops: m.ops.clone(),
        functions: m.functions.clone(),
    })
}
