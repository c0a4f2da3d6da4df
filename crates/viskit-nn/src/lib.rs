#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! The building blocks of a CNN forward pass, operated layer by layer by the
//! caller: valid 2D convolution, bias addition, ReLU, 2x2 max pooling and a
//! numerically stable softmax. All kernels are pure transforms over
//! caller-owned image buffers; none of them allocates.

/// activation functions module.
pub mod activation;

/// 2D convolution module.
pub mod conv;

/// Error types for the nn module.
pub mod error;

/// convolution filter weights module.
pub mod filter;

/// spatial pooling module.
pub mod pooling;

pub use crate::error::NnError;
pub use crate::filter::Filter;
