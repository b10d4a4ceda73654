//! Type charts
//!
//! This module handles chart configuration, the relation model built from
//! it, and three-way cycle enumeration.

pub mod builtin;
pub mod config;
pub mod cycles;
pub mod model;
