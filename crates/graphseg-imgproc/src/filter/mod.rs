//! Filter operations
//!
//! This module provides the separable Gaussian smoothing used before graph
//! based segmentation.

/// Filter errors
mod error;
pub use error::FilterError;

/// Half-kernel type
mod kernels;
pub use kernels::{HalfKernel, KernelError};

/// Smoothing operations
mod ops;
pub use ops::*;

/// Separable filter operations
mod separable_filter;
pub use separable_filter::*;
