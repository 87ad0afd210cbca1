use num::Float;
use serde::{Deserialize, Serialize};

/// ZeroSpVecは0要素を疎とした過疎ベクトルです
/// `inds` と `vals` を並べて持ち (SoA)、
/// `inds` は昇順でソートされていることを保証します
///
/// TF-IDF 行列の1行 (1ドキュメント) として使います。
/// 列は語彙のインデックスです。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroSpVec<N>
where
    N: Float,
{
    inds: Vec<usize>,
    vals: Vec<N>,
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Float,
{
    /// Create an empty vector of logical length `len`
    #[inline]
    pub fn new(len: usize) -> Self {
        Self {
            inds: Vec::new(),
            vals: Vec::new(),
            len,
        }
    }

    #[inline]
    pub fn with_capacity(len: usize, nnz: usize) -> Self {
        Self {
            inds: Vec::with_capacity(nnz),
            vals: Vec::with_capacity(nnz),
            len,
        }
    }

    /// Build from `(index, value)` pairs in any order.
    /// Zero values are dropped, duplicate indices are summed.
    /// Indices outside `0..len` are ignored.
    pub fn from_entries<I>(len: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, N)>,
    {
        let mut pairs: Vec<(usize, N)> = entries
            .into_iter()
            .filter(|&(idx, val)| idx < len && val != N::zero())
            .collect();
        pairs.sort_unstable_by_key(|&(idx, _)| idx);

        let mut vec = Self::with_capacity(len, pairs.len());
        for (idx, val) in pairs {
            match vec.inds.last() {
                Some(&last) if last == idx => {
                    // 同じ次元は合算
                    if let Some(v) = vec.vals.last_mut() {
                        *v = *v + val;
                    }
                }
                _ => {
                    vec.inds.push(idx);
                    vec.vals.push(val);
                }
            }
        }
        vec
    }

    /// logical length (number of dimensions)
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// number of stored (nonzero) entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<N> {
        if index >= self.len {
            return None;
        }
        match self.inds.binary_search(&index) {
            Ok(pos) => Some(self.vals[pos]),
            Err(_) => Some(N::zero()),
        }
    }

    /// Iterate over stored entries in ascending index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter().copied())
    }

    #[inline]
    pub fn norm_sq(&self) -> N {
        self.vals.iter().fold(N::zero(), |acc, &v| acc + v * v)
    }

    #[inline]
    pub fn norm(&self) -> N {
        self.norm_sq().sqrt()
    }

    /// Multiply every stored entry by the dense weight at the same index.
    /// Entries whose product becomes zero are removed.
    pub fn hadamard_dense(&mut self, dense: &[N]) {
        debug_assert!(dense.len() >= self.len, "dense weights shorter than vector");
        for (idx, val) in self.inds.iter().zip(self.vals.iter_mut()) {
            *val = *val * dense.get(*idx).copied().unwrap_or_else(N::zero);
        }
        self.retain_nonzero();
    }

    /// Divide every entry by the Euclidean norm.
    /// A zero vector stays untouched.
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > N::zero() && norm.is_finite() {
            for v in self.vals.iter_mut() {
                *v = *v / norm;
            }
        }
    }

    /// Add this vector into a dense accumulator of the same length
    pub fn add_into(&self, dense: &mut [N]) {
        for (idx, val) in self.raw_iter() {
            if let Some(slot) = dense.get_mut(idx) {
                *slot = *slot + val;
            }
        }
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
    }

    fn retain_nonzero(&mut self) {
        let mut keep = 0;
        for i in 0..self.inds.len() {
            if self.vals[i] != N::zero() {
                self.inds[keep] = self.inds[i];
                self.vals[keep] = self.vals[i];
                keep += 1;
            }
        }
        self.inds.truncate(keep);
        self.vals.truncate(keep);
    }
}
