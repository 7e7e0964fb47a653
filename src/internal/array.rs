use crate::internal::assign::{assign_from_vector_engine, assign_from_vector_list};
use crate::internal::error::Result;
use crate::internal::{Capabilities, Engine, EngineKind, VectorEngine, VectorEngineMut};
use core::ops::{Index, IndexMut};
use num_traits::{NumCast, ToPrimitive};

/// A vector engine owning exactly `N` elements in an inline array.
///
/// The engine never allocates: the buffer lives wherever the engine lives and is released with
/// it. Size and capacity are both `N`, and `N` must be at least one.
///
/// ```compile_fail
/// use la_engines::FsVectorEngine;
///
/// // zero-length fixed engines are rejected while compiling
/// let empty = FsVectorEngine::<f64, 0>::new();
/// ```
///
/// ```compile_fail
/// use la_engines::FsVectorEngine;
///
/// // so are conversions between engines of different static sizes
/// let three = FsVectorEngine::<f64, 3>::new();
/// let two = FsVectorEngine::<f32, 2>::from_engine(&three);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FsVectorEngine<T, const N: usize> {
    elems: [T; N],
}

impl<T, const N: usize> FsVectorEngine<T, N> {
    /// Instantiates an engine with every element set to `T::default()`.
    #[must_use]
    pub fn new() -> Self
    where
        T: Default,
    {
        const { assert!(N >= 1, "fixed-size vector engines need at least one element") }
        Self {
            elems: core::array::from_fn(|_| T::default()),
        }
    }

    /// Instantiates an engine that takes ownership of `elems`.
    ///
    /// The array length is the engine size, so no run-time check is needed.
    #[must_use]
    pub fn from_array(elems: [T; N]) -> Self {
        const { assert!(N >= 1, "fixed-size vector engines need at least one element") }
        Self { elems }
    }

    /// Exchanges all `N` elements with `other`, pairwise.
    pub fn swap(&mut self, other: &mut Self) {
        self.elems.swap_with_slice(&mut other.elems);
    }

    /// Exchanges elements `i` and `j`.
    ///
    /// # Panics
    ///
    /// The engine does not validate the indices; an index of `N` or more trips the array
    /// bounds check.
    pub fn swap_elements(&mut self, i: usize, j: usize) {
        self.elems.swap(i, j);
    }

    /// The elements as an array reference.
    #[must_use]
    pub const fn as_array(&self) -> &[T; N] {
        &self.elems
    }

    /// The elements as a mutable array reference.
    #[must_use]
    pub fn as_array_mut(&mut self) -> &mut [T; N] {
        &mut self.elems
    }

    /// The elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    /// The elements as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elems
    }

    /// Consumes the engine, returning its elements.
    #[must_use]
    pub fn into_array(self) -> [T; N] {
        self.elems
    }
}

impl<T, const N: usize> FsVectorEngine<T, N>
where
    T: Default + NumCast,
{
    /// Builds an engine from any vector engine whose elements convert into `T`.
    ///
    /// When the source size is fixed by its type, a mismatch is a compile error; otherwise it
    /// is checked at run time.
    ///
    /// # Errors
    ///
    /// [`EngineError::SizeIncompatible`](crate::EngineError::SizeIncompatible) when a
    /// run-time-sized source does not hold exactly `N` elements.
    ///
    /// [`EngineError::ElementConversion`](crate::EngineError::ElementConversion) when an
    /// element has no value in `T`, e.g. out of range or NaN into an integer type.
    pub fn from_engine<S>(src: &S) -> Result<Self>
    where
        S: VectorEngine,
        S::Element: ToPrimitive + Copy,
    {
        let mut engine = Self::new();
        engine.assign_from(src)?;
        Ok(engine)
    }

    /// Builds an engine from a flat literal list of convertible values.
    ///
    /// # Errors
    ///
    /// [`EngineError::SizeIncompatible`](crate::EngineError::SizeIncompatible) unless the list
    /// has exactly `N` entries. There is no truncation or padding.
    ///
    /// [`EngineError::ElementConversion`](crate::EngineError::ElementConversion) when an
    /// element has no value in `T`, e.g. out of range or NaN into an integer type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use la_engines::{FsVectorEngine, VectorEngine};
    ///
    /// let v = FsVectorEngine::<f64, 3>::from_list(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(v.size(), 3);
    /// assert_eq!(v[2], 3.0);
    ///
    /// assert!(FsVectorEngine::<f64, 3>::from_list(&[1.0, 2.0]).is_err());
    /// ```
    pub fn from_list<U>(list: &[U]) -> Result<Self>
    where
        U: ToPrimitive + Copy,
    {
        let mut engine = Self::new();
        engine.assign_list(list)?;
        Ok(engine)
    }

    /// Assigns from any vector engine whose elements convert into `T`.
    ///
    /// # Errors
    ///
    /// [`EngineError::SizeIncompatible`](crate::EngineError::SizeIncompatible) when a
    /// run-time-sized source does not hold exactly `N` elements; `self` is unchanged then.
    ///
    /// [`EngineError::ElementConversion`](crate::EngineError::ElementConversion) when an
    /// element has no value in `T`, e.g. out of range or NaN into an integer type.
    pub fn assign_from<S>(&mut self, src: &S) -> Result<()>
    where
        S: VectorEngine,
        S::Element: ToPrimitive + Copy,
    {
        assign_from_vector_engine(self, src)
    }

    /// Assigns from a flat literal list of convertible values.
    ///
    /// # Errors
    ///
    /// [`EngineError::SizeIncompatible`](crate::EngineError::SizeIncompatible) unless the list
    /// has exactly `N` entries; `self` is unchanged then.
    ///
    /// [`EngineError::ElementConversion`](crate::EngineError::ElementConversion) when an
    /// element has no value in `T`, e.g. out of range or NaN into an integer type.
    pub fn assign_list<U>(&mut self, list: &[U]) -> Result<()>
    where
        U: ToPrimitive + Copy,
    {
        assign_from_vector_list(self, list)
    }
}

impl<T: Default, const N: usize> Default for FsVectorEngine<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for FsVectorEngine<T, N> {
    fn from(elems: [T; N]) -> Self {
        Self::from_array(elems)
    }
}

impl<T, const N: usize> Engine for FsVectorEngine<T, N> {
    type Element = T;
    const KIND: EngineKind = EngineKind::Vector;
    const CAPABILITIES: Capabilities = Capabilities::INITABLE;
}

impl<T, const N: usize> VectorEngine for FsVectorEngine<T, N> {
    const STATIC_SIZE: Option<usize> = Some(N);

    fn size(&self) -> usize {
        N
    }

    fn capacity(&self) -> usize {
        N
    }

    fn get(&self, i: usize) -> &T {
        &self.elems[i]
    }
}

impl<T, const N: usize> VectorEngineMut for FsVectorEngine<T, N> {
    fn get_mut(&mut self, i: usize) -> &mut T {
        &mut self.elems[i]
    }
}

impl<T, const N: usize> Index<usize> for FsVectorEngine<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.elems[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for FsVectorEngine<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.elems[i]
    }
}

#[cfg(test)]
mod tests {
    use crate::{EngineError, Extent, FsVectorEngine, Position, VectorEngine};

    // helper constructor
    fn vector<T, const N: usize>(buf: [T; N]) -> FsVectorEngine<T, N> {
        FsVectorEngine::from_array(buf)
    }

    #[test]
    fn default_elements() {
        let v: FsVectorEngine<i64, 4> = FsVectorEngine::default();
        assert_eq!(v.size(), 4);
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.as_array(), &[0; 4]);

        let single = FsVectorEngine::<f32, 1>::new();
        assert_eq!(single.size(), single.capacity());
        assert_eq!(single[0], 0.0);
    }

    #[test]
    fn literal_list() {
        let v = FsVectorEngine::<f64, 3>::from_list(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v.size(), 3);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn literal_list_wrong_length() {
        let short = FsVectorEngine::<f64, 3>::from_list(&[1.0, 2.0]);
        assert_eq!(
            short,
            Err(EngineError::SizeIncompatible {
                expected: Extent::Vector(3),
                got: Extent::Vector(2),
            })
        );
        assert!(FsVectorEngine::<f64, 3>::from_list(&[1.0, 2.0, 3.0, 4.0]).is_err());
    }

    #[test]
    fn rejected_list_leaves_engine_unchanged() {
        let mut v = vector([7, 8, 9]);
        assert!(v.assign_list(&[1, 2]).is_err());
        assert_eq!(v.as_array(), &[7, 8, 9]);
        assert!(v.assign_list(&[1, 2, 3, 4]).is_err());
        assert_eq!(v.as_array(), &[7, 8, 9]);
    }

    #[test]
    fn converting_list() {
        let v = FsVectorEngine::<f64, 3>::from_list(&[1_i32, -2, 3]).unwrap();
        assert_eq!(v.as_array(), &[1.0, -2.0, 3.0]);

        let mut w = FsVectorEngine::<i32, 2>::new();
        w.assign_list(&[2.9_f64, -1.5]).unwrap();
        assert_eq!(w.as_array(), &[2, -1]);
    }

    #[test]
    fn converting_engine() {
        let src = vector([1_u8, 2, 250]);
        let dst = FsVectorEngine::<f32, 3>::from_engine(&src).unwrap();
        assert_eq!(dst.as_array(), &[1.0, 2.0, 250.0]);

        let mut back = vector([0_u16; 3]);
        back.assign_from(&dst).unwrap();
        assert_eq!(back.as_array(), &[1, 2, 250]);
    }

    #[test]
    fn unrepresentable_list_is_rejected() {
        assert_eq!(
            FsVectorEngine::<i32, 2>::from_list(&[1.0e10_f64, f64::NAN]),
            Err(EngineError::ElementConversion {
                at: Position::Vector(0),
            })
        );

        let mut v = vector([7, 8]);
        assert_eq!(
            v.assign_list(&[1.0_f64, f64::NAN]),
            Err(EngineError::ElementConversion {
                at: Position::Vector(1),
            })
        );
        assert_eq!(v.as_array(), &[7, 8]);
    }

    #[test]
    fn unrepresentable_engine_is_rejected() {
        let src = vector([-1_i32, 70_000]);
        assert_eq!(
            FsVectorEngine::<u16, 2>::from_engine(&src),
            Err(EngineError::ElementConversion {
                at: Position::Vector(0),
            })
        );

        let mut dst = vector([5_u16, 6]);
        assert!(dst.assign_from(&vector([1_i32, 70_000])).is_err());
        assert_eq!(dst.as_array(), &[5, 6]);
        dst.assign_from(&vector([1_i32, 65_535])).unwrap();
        assert_eq!(dst.as_array(), &[1, 65_535]);
    }

    #[test]
    fn assign_from_own_copy() {
        let mut v = vector([1, 2, 3]);
        let snapshot = v.clone();
        v.assign_from(&snapshot).unwrap();
        assert_eq!(v, snapshot);
    }

    #[test]
    fn swap_engines() {
        let mut a = vector([1, 2, 3]);
        let mut b = vector([4, 5, 6]);
        a.swap(&mut b);
        assert_eq!(a.as_array(), &[4, 5, 6]);
        assert_eq!(b.as_array(), &[1, 2, 3]);
    }

    #[test]
    fn swap_elements_twice_restores() {
        let mut v = vector([10, 20, 30, 40]);
        v.swap_elements(0, 3);
        assert_eq!(v.as_array(), &[40, 20, 30, 10]);
        v.swap_elements(0, 3);
        assert_eq!(v.as_array(), &[10, 20, 30, 40]);

        for i in 0..4 {
            for j in 0..4 {
                let before = v.clone();
                v.swap_elements(i, j);
                v.swap_elements(i, j);
                assert_eq!(v, before);
            }
        }
    }

    #[test]
    fn index_mut_writes() {
        let mut v = vector([0.0; 2]);
        v[1] = 2.5;
        assert_eq!(v.as_slice(), &[0.0, 2.5]);
        v.as_mut_slice()[0] = -1.0;
        assert_eq!(v.into_array(), [-1.0, 2.5]);
    }

    #[test]
    #[should_panic]
    fn index_past_end_panics() {
        let v = vector([1, 2]);
        let _ = v[2];
    }
}
