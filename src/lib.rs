//! Haunted process list.
//!
//! Layers, innermost first: `domain` (process and animation entities, the
//! snapshot and randomness ports), `application` (configuration and the
//! tick transition), `infrastructure` (sysinfo and `rand` adapters) and
//! `presentation` (command line and terminal display).

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
