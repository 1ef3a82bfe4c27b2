//! Internal utility functions and helpers.

use std::cmp::Ordering;

// Fill `p` with the permutation that sorts `v` under `compare`.
// The sort is stable: entries comparing equal keep their relative order.
pub(crate) fn sortperm_by<T, F>(p: &mut [usize], v: &[T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    assert_eq!(p.len(), v.len());
    p.iter_mut().enumerate().for_each(|(i, p)| *p = i);
    let mut f = compare;
    p.sort_by(|&i, &j| f(&v[i], &v[j]));
}

// -------------
// testing

#[test]
fn test_sortperm_by_is_stable() {
    let v = [3, 1, 2, 1, 3];
    let mut p = vec![0; v.len()];
    sortperm_by(&mut p, &v, |a, b| a.cmp(b));
    assert_eq!(p, vec![1, 3, 2, 0, 4]);

    sortperm_by(&mut p, &v, |a, b| b.cmp(a));
    assert_eq!(p, vec![0, 4, 2, 1, 3]);
}
