// src/engine/mod.rs
//
// The extraction engine proper: the scroll-convergence loop and the
// snapshot merge. Everything here is driven through the `View`-free
// `ScrollDriver` / `SnapshotReader` seams, so it runs identically
// against a live tab and against scripted fakes in tests.

pub mod convergence;
pub mod reconcile;

pub use convergence::{converge, ConvergeConfig, Harvest, StopReason};
pub use reconcile::{identity_key, reconcile, ReconciledRecord};
