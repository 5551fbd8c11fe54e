//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `wingforge-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: file existence checks and writes
//!   - `PipelineRegistry`: the shared CI integration point
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in the host orchestrator layer, implemented by services)

pub mod output;

pub use output::{Filesystem, PipelineRegistry};
