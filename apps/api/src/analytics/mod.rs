// Derived metrics and chart rendering over a catalog snapshot.
// Nothing here touches the store; callers pass the branches in.

pub mod charts;
pub mod metrics;
