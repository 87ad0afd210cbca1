use core::cmp::Ordering;

/// Top-`n` selection keeping input order among equal entries.
/// - Sorts with a stable sort, so `cmp == Equal` keeps the earlier entry first
/// - Use when ties must resolve by position (first occurrence)
///
/// `n == 0` returns an empty vector. `n >= items.len()` returns everything sorted.
#[inline]
pub fn top_n_stable_by<T, F>(mut items: Vec<T>, n: usize, mut cmp: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if n == 0 {
        return Vec::new();
    }
    items.sort_by(|a, b| cmp(a, b));
    items.truncate(n);
    items
}

/// Top-`n` selection for a comparator that is a total order.
/// - Partitions with `select_nth_unstable_by` first, then sorts only the head
/// - Complexity: O(len + n log n)
///
/// `cmp` must never return `Equal` for distinct entries (add a tie-break key),
/// otherwise the result order among equals is unspecified.
#[inline]
pub fn top_n_total_by<T, F>(mut items: Vec<T>, n: usize, mut cmp: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if n == 0 || items.is_empty() {
        return Vec::new();
    }
    if n < items.len() {
        items.select_nth_unstable_by(n - 1, |a, b| cmp(a, b));
        items.truncate(n);
    }
    items.sort_unstable_by(|a, b| cmp(a, b));
    items
}

/// Descending by score, ascending by index on ties.
/// NaN sorts last (`total_cmp` puts positive NaN above +inf, so it is mapped away first).
#[inline]
pub fn score_desc_index_asc(a: (usize, f64), b: (usize, f64)) -> Ordering {
    let sa = if a.1.is_nan() { f64::NEG_INFINITY } else { a.1 };
    let sb = if b.1.is_nan() { f64::NEG_INFINITY } else { b.1 };
    sb.total_cmp(&sa).then_with(|| a.0.cmp(&b.0))
}
