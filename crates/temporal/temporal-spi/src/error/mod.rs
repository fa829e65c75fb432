//! Error types for the temporal pattern engine
//!
//! This module contains the error taxonomy and the Result alias.

mod temporal_error;

pub use temporal_error::{Result, TemporalError};
