//! # seqgen-orchestration
//!
//! Sequence building, variant selection from textual requests, and result
//! presentation interfaces.

pub mod builder;
pub mod interfaces;
pub mod orchestrator;
pub mod request;

pub use builder::build_sequence;
pub use interfaces::{SequenceOutcome, SequencePresenter};
pub use orchestrator::{execute_demo, execute_request};
pub use request::{build_variant_sequence, IntRecurrence, Sequence, SequenceRequest};
