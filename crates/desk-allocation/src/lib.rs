//! Mentor/startup allocation over an in-memory session registry.
//!
//! [`AllocationRegistry`] owns all mutable event state and enforces its
//! invariants through its mutators. [`Allocator`] selects a startup for a
//! mentor (manually or by preference filter plus random sample) and commits
//! it to the registry. Every rejection is an [`AllocationWarning`] that leaves
//! the registry untouched.

mod allocator;
mod random;
mod registry;
mod warning;

pub use allocator::{
    AllocationRequest, Allocator, ExclusionPolicy, GenerateReport, ToggleOutcome,
};
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use registry::{AllocationRegistry, RegistrySummary};
pub use warning::AllocationWarning;
