//! Utility modules for common functionality
//!
//! This module provides the logger and text parsing helpers used throughout the application.

pub mod logger;
pub mod coordinate_utils;
