//! This library offers the engine layer underneath vector and matrix types:
//!
//! - `FsVectorEngine`: A vector engine owning a statically sized array.
//!     - Ownership: The engine owns its `N` elements; size and capacity are both `N`.
//!     - Allocation: None, the elements live inline wherever the engine lives.
//! - `FsMatrixEngine`: A matrix engine owning a statically sized `R x C` array, row-major.
//!     - Ownership: The engine owns its elements, and is the only type that can mint views of them.
//!     - Allocation: None, the elements live inline wherever the engine lives.
//! - `TransposeEngine`: A view presenting a matrix with rows and columns swapped.
//!     - Ownership: The view owns nothing, it borrows its referent for the lifetime of the view.
//!     - Allocation: None, element `(i, j)` of the view is element `(j, i)` of the referent.
//!
//! Every engine declares its kind (scalar, vector, matrix) and its capabilities (readable,
//! writable, initable, resizable) through the `Engine` trait. Generic code branches on those
//! facts at compile time, and the shared assignment routines in `assign` use them to accept or
//! reject a source before any element is written.
//!
//! ```rust
//! use la_engines::{FsMatrixEngine, FsVectorEngine, MatrixEngine, VectorEngine};
//!
//! let v = FsVectorEngine::<f64, 3>::from_list(&[1, 2, 3])?;
//! assert_eq!(v.size(), 3);
//!
//! let mut m = FsMatrixEngine::<f32, 2, 3>::new();
//! m.transpose_mut().assign_list(&[[1, 4], [2, 5], [3, 6]])?;
//! assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! # Ok::<(), la_engines::EngineError>(())
//! ```
//!
//! Note: The crate is fully documented, `no-std` compatible, and never allocates.

#![forbid(missing_docs)]
#![forbid(unsafe_code)]
#![forbid(clippy::nursery)]
#![forbid(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::many_single_char_names)]
#![no_std]

#[cfg(test)]
extern crate std;

mod internal;

pub use internal::array::FsVectorEngine;
pub use internal::assign;
pub use internal::error::{EngineError, Extent, Position, Result};
pub use internal::matrix::FsMatrixEngine;
pub use internal::views::{Referent, ReferentMut, TransposeEngine};
pub use internal::{
    engines_are_similar, is_initable_engine, is_matrix_engine, is_readable_engine,
    is_resizable_engine, is_scalar_engine, is_vector_engine, is_writable_engine, Capabilities,
    Engine, EngineKind, MatrixEngine, MatrixEngineMut, ScalarEngine, VectorEngine,
    VectorEngineMut,
};
