//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types for mesh geometry
//! - Logging setup

pub mod math;
pub mod logging;
