use crate::internal::assign::{assign_from_matrix_engine, assign_from_matrix_list};
use crate::internal::error::Result;
use crate::internal::views::TransposeEngine;
use crate::internal::{Capabilities, Engine, EngineKind, MatrixEngine, MatrixEngineMut};
use core::ops::{Index, IndexMut};
use num_traits::{NumCast, ToPrimitive};

/// A matrix engine owning `R x C` elements row-major in an inline array.
///
/// Besides being a storage engine in its own right, this is the owning container transpose
/// views are minted from: [`FsMatrixEngine::transpose`] and [`FsMatrixEngine::transpose_mut`]
/// are the only ways to obtain a bound [`TransposeEngine`].
///
/// ```compile_fail
/// use la_engines::FsMatrixEngine;
///
/// // a 2x3 source cannot initialize a 3x2 destination
/// let wide = FsMatrixEngine::<f64, 2, 3>::new();
/// let tall = FsMatrixEngine::<f64, 3, 2>::from_engine(&wide);
/// ```
///
/// ```compile_fail
/// use la_engines::FsMatrixEngine;
///
/// // a matrix with no rows is rejected while compiling
/// let empty = FsMatrixEngine::<f64, 0, 3>::new();
/// ```
///
/// ```compile_fail
/// use la_engines::FsMatrixEngine;
///
/// // and so is one with no columns
/// let empty = FsMatrixEngine::from_rows([[0_i32; 0]; 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FsMatrixEngine<T, const R: usize, const C: usize> {
    elems: [[T; C]; R],
}

impl<T, const R: usize, const C: usize> FsMatrixEngine<T, R, C> {
    /// Instantiates an engine with every element set to `T::default()`.
    #[must_use]
    pub fn new() -> Self
    where
        T: Default,
    {
        const { assert!(R >= 1 && C >= 1, "fixed-size matrix engines need at least one element") }
        Self {
            elems: core::array::from_fn(|_| core::array::from_fn(|_| T::default())),
        }
    }

    /// Instantiates an engine that takes ownership of `rows`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use la_engines::{FsMatrixEngine, MatrixEngine};
    ///
    /// let m = FsMatrixEngine::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m.size(), (2, 3));
    /// assert_eq!(m[(1, 0)], 4);
    /// ```
    #[must_use]
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        const { assert!(R >= 1 && C >= 1, "fixed-size matrix engines need at least one element") }
        Self { elems: rows }
    }

    /// A read-only transposed view of this matrix.
    ///
    /// The view borrows `self`; nothing is copied.
    #[must_use]
    pub fn transpose(&self) -> TransposeEngine<&Self> {
        TransposeEngine::bind(self)
    }

    /// A transposed view whose writes land in this matrix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use la_engines::{FsMatrixEngine, MatrixEngine};
    ///
    /// let mut m = FsMatrixEngine::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// let mut t = m.transpose_mut();
    /// assert_eq!((t.rows(), t.columns()), (3, 2));
    ///
    /// t[(2, 0)] = 30;
    /// assert_eq!(m[(0, 2)], 30);
    /// ```
    #[must_use]
    pub fn transpose_mut(&mut self) -> TransposeEngine<&mut Self> {
        TransposeEngine::bind(self)
    }

    /// Exchanges all elements with `other`, pairwise.
    pub fn swap(&mut self, other: &mut Self) {
        self.elems.swap_with_slice(&mut other.elems);
    }

    /// Exchanges rows `i` and `j`. Indices are not validated by the engine.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.elems.swap(i, j);
    }

    /// Exchanges columns `i` and `j`. Indices are not validated by the engine.
    pub fn swap_columns(&mut self, i: usize, j: usize) {
        for row in &mut self.elems {
            row.swap(i, j);
        }
    }

    /// The elements in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.elems.as_flattened()
    }

    /// The elements in row-major order, mutably.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.elems.as_flattened_mut()
    }

    /// The rows as a nested array reference.
    #[must_use]
    pub const fn as_rows(&self) -> &[[T; C]; R] {
        &self.elems
    }
}

impl<T, const R: usize, const C: usize> FsMatrixEngine<T, R, C>
where
    T: Default + NumCast,
{
    /// Builds an engine from any matrix engine whose elements convert into `T`.
    ///
    /// # Errors
    ///
    /// [`EngineError::SizeIncompatible`](crate::EngineError::SizeIncompatible) when a
    /// run-time-shaped source is not `R x C`.
    ///
    /// [`EngineError::ElementConversion`](crate::EngineError::ElementConversion) when an
    /// element has no value in `T`, e.g. out of range or NaN into an integer type.
    pub fn from_engine<S>(src: &S) -> Result<Self>
    where
        S: MatrixEngine,
        S::Element: ToPrimitive + Copy,
    {
        let mut engine = Self::new();
        engine.assign_from(src)?;
        Ok(engine)
    }

    /// Builds an engine from a nested literal list, one inner list per row.
    ///
    /// # Errors
    ///
    /// [`EngineError::SizeIncompatible`](crate::EngineError::SizeIncompatible) unless there are
    /// exactly `R` rows of exactly `C` entries.
    ///
    /// [`EngineError::ElementConversion`](crate::EngineError::ElementConversion) when an
    /// element has no value in `T`, e.g. out of range or NaN into an integer type.
    pub fn from_list<U, L>(list: &[L]) -> Result<Self>
    where
        U: ToPrimitive + Copy,
        L: AsRef<[U]>,
    {
        let mut engine = Self::new();
        engine.assign_list(list)?;
        Ok(engine)
    }

    /// Assigns from any matrix engine whose elements convert into `T`.
    ///
    /// # Errors
    ///
    /// [`EngineError::SizeIncompatible`](crate::EngineError::SizeIncompatible) on a run-time
    /// shape mismatch; `self` is unchanged then.
    ///
    /// [`EngineError::ElementConversion`](crate::EngineError::ElementConversion) when an
    /// element has no value in `T`, e.g. out of range or NaN into an integer type.
    pub fn assign_from<S>(&mut self, src: &S) -> Result<()>
    where
        S: MatrixEngine,
        S::Element: ToPrimitive + Copy,
    {
        assign_from_matrix_engine(self, src)
    }

    /// Assigns from a nested literal list, one inner list per row.
    ///
    /// # Errors
    ///
    /// [`EngineError::SizeIncompatible`](crate::EngineError::SizeIncompatible) unless there are
    /// exactly `R` rows of exactly `C` entries; `self` is unchanged then.
    ///
    /// [`EngineError::ElementConversion`](crate::EngineError::ElementConversion) when an
    /// element has no value in `T`, e.g. out of range or NaN into an integer type.
    pub fn assign_list<U, L>(&mut self, list: &[L]) -> Result<()>
    where
        U: ToPrimitive + Copy,
        L: AsRef<[U]>,
    {
        assign_from_matrix_list(self, list)
    }
}

impl<T: Default, const R: usize, const C: usize> Default for FsMatrixEngine<T, R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for FsMatrixEngine<T, R, C> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T, const R: usize, const C: usize> Engine for FsMatrixEngine<T, R, C> {
    type Element = T;
    const KIND: EngineKind = EngineKind::Matrix;
    const CAPABILITIES: Capabilities = Capabilities::INITABLE;
}

impl<T, const R: usize, const C: usize> MatrixEngine for FsMatrixEngine<T, R, C> {
    const STATIC_SHAPE: Option<(usize, usize)> = Some((R, C));

    fn rows(&self) -> usize {
        R
    }

    fn columns(&self) -> usize {
        C
    }

    fn get(&self, i: usize, j: usize) -> &T {
        &self.elems[i][j]
    }
}

impl<T, const R: usize, const C: usize> MatrixEngineMut for FsMatrixEngine<T, R, C> {
    fn get_mut(&mut self, i: usize, j: usize) -> &mut T {
        &mut self.elems[i][j]
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for FsMatrixEngine<T, R, C> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.elems[i][j]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for FsMatrixEngine<T, R, C> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.elems[i][j]
    }
}
