//! Interop with foreign matrix and vector types.
//!
//! Elements are addressed by `(col, row)`. A column vector such as
//! [`Vector2`](crate::Vector2) has a single column and ignores `col`.

/// Read access to single elements.
pub trait Elements {
    fn get(&self, col: usize, row: usize) -> f32;
}

/// Shape and flat contents of a matrix, for algorithms written against any
/// matrix-like type.
pub trait Matrix: Elements {
    type Slice: AsRef<[f32]>;

    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    fn size(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Copies the elements out in storage order.
    fn slice(&self) -> Self::Slice;
}

/// Column-major storage: `self[col][row]`.
impl<const R: usize, const C: usize> Elements for [[f32; R]; C] {
    fn get(&self, col: usize, row: usize) -> f32 {
        self[col][row]
    }
}

impl<T> Elements for &T
where
    T: Elements + ?Sized,
{
    fn get(&self, col: usize, row: usize) -> f32 {
        (**self).get(col, row)
    }
}
