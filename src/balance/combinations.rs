//! Lexicographic enumeration of index combinations.
//!
//! Combinations are sets of positions `0..n`, always sorted ascending, and
//! are produced in lexicographic order. The rank of a combination is its
//! zero-based position in that order, which is what the balancer uses to
//! break ties deterministically across sequential and parallel searches.

/// Number of `k`-element combinations of `n` items, or `None` on overflow.
pub fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc == C(n, i) here, so the division is exact
        acc = acc.checked_mul((n - i) as u128)? / (i as u128 + 1);
    }
    u64::try_from(acc).ok()
}

/// Advance `indices` to the next combination of `0..n` in lexicographic order.
///
/// Returns `false` (leaving `indices` untouched) when `indices` already
/// holds the last combination.
pub fn advance(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    let Some(pivot) = (0..k).rev().find(|&i| indices[i] < n - k + i) else {
        return false;
    };
    indices[pivot] += 1;
    for j in pivot + 1..k {
        indices[j] = indices[j - 1] + 1;
    }
    true
}

/// The combination at lexicographic position `rank`, or `None` if `rank`
/// is past the last combination.
pub fn unrank(n: usize, k: usize, rank: u64) -> Option<Vec<usize>> {
    if k > n || rank >= binomial(n, k)? {
        return None;
    }

    let mut remaining = rank;
    let mut indices = Vec::with_capacity(k);
    let mut next = 0;
    for slot in 0..k {
        let slots_left = k - slot - 1;
        let mut candidate = next;
        loop {
            // combinations that start with `candidate` at this slot
            let block = binomial(n - candidate - 1, slots_left)?;
            if remaining < block {
                break;
            }
            remaining -= block;
            candidate += 1;
        }
        indices.push(candidate);
        next = candidate + 1;
    }
    Some(indices)
}

/// Iterator over all `k`-element index combinations of `0..n`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    exhausted: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            exhausted: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.indices.clone();
        self.exhausted = !advance(&mut self.indices, self.n);
        Some(current)
    }
}
