use num::Float;

use crate::utils::math::vector::ZeroSpVec;

/// Sparse document x term weight matrix
/// One `ZeroSpVec` row per document, columns are vocabulary indices.
/// A stored cell always means: term occurs in the document and is in the vocabulary.
#[derive(Debug, Clone)]
pub struct WeightMatrix<N>
where
    N: Float,
{
    rows: Vec<ZeroSpVec<N>>,
    col_num: usize,
}

impl<N> WeightMatrix<N>
where
    N: Float,
{
    /// Rows must all have logical length `col_num`
    pub fn from_rows(rows: Vec<ZeroSpVec<N>>, col_num: usize) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == col_num), "row length mismatch");
        Self { rows, col_num }
    }

    /// (documents, terms)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.col_num)
    }

    #[inline]
    pub fn row(&self, doc: usize) -> Option<&ZeroSpVec<N>> {
        self.rows.get(doc)
    }

    #[inline]
    pub fn rows(&self) -> &[ZeroSpVec<N>] {
        &self.rows
    }

    /// Stored cells across all rows
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(ZeroSpVec::nnz).sum()
    }

    /// Weight of `term` in `doc` (0 when absent, `None` when out of range)
    #[inline]
    pub fn get(&self, doc: usize, term: usize) -> Option<N> {
        self.rows.get(doc)?.get(term)
    }

    /// Sum of every column.
    /// Accumulated sequentially in row order.
    pub fn column_sums(&self) -> Vec<N> {
        let mut acc = vec![N::zero(); self.col_num];
        for row in &self.rows {
            row.add_into(&mut acc);
        }
        acc
    }
}
