//! LED Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die Capability-Schnittstelle, den Process-Layer über einer
//! festen LED-Registry und die periodischen Verhalten (Cycle/Flash, Rampe).

#![no_std]

#[macro_use]
mod log;

pub mod config;
pub mod logic;
pub mod process;
pub mod scheduler;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use config::{CycleBehavior, CycleConfig, RampConfig};
pub use logic::{next_cursor, ramp_advance};
pub use process::LedProc;
pub use scheduler::{CycleScheduler, RampScheduler};
pub use traits::{CapabilityTable, Descriptor, LedCapabilities, LedError};
pub use types::{LedDescriptor, LedId, LedKind, LedState, OutputState, PwmState, RampDirection};
