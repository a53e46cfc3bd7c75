//! CSIT Timetable — a CSP-based weekly university timetable engine.
//!
//! Generates one term's worth of CS-faculty lecture/lab/tutorial/
//! graduation-project sessions by constraint satisfaction: a Variable
//! Generator enumerates the sessions a catalog requires, a Domain Builder
//! enumerates every legal `(time, room, staff)` triple per session, and a
//! backtracking solver (MRV + forward checking) searches for a full
//! assignment that the Conflict Oracle accepts. An alternative ILP/
//! propagation formulation is offered as a drop-in via `good_lp`.
//!
//! # Example
//!
//! ```no_run
//! use csit_timetable::orchestrator;
//! use csit_timetable::parser::load_input_from_dir;
//! use std::path::Path;
//!
//! let input = load_input_from_dir(Path::new("./data/demo")).unwrap();
//! let (output, result) = orchestrator::run(&input, false).unwrap();
//! println!("success: {}", result.success);
//! ```

pub mod conflict;
pub mod domain;
pub mod error;
pub mod generator;
pub mod indexer;
pub mod orchestrator;
pub mod parser;
pub mod propagation;
pub mod reporter;
pub mod soft_cost;
pub mod solver;
pub mod types;
pub mod validator;
pub mod wire;

pub use error::{Result, TimetableError};
