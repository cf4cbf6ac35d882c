//! Set algebra over posting lists
//!
//! Every operation takes strictly ascending, duplicate-free slices and
//! returns a vector with the same property, so results can be fed straight
//! back in. Feeding in anything else is a bug in the caller and trips a
//! debug assertion.

use super::WordId;
use std::cmp::Ordering;

/// Size ratio above which `intersect` binary-searches the larger list
/// instead of walking both.
const SEARCH_RATIO: usize = 16;

/// Check the posting list invariant: strictly ascending, no duplicates
#[must_use]
pub fn is_strictly_ascending(ids: &[WordId]) -> bool {
    ids.windows(2).all(|pair| pair[0] < pair[1])
}

macro_rules! debug_assert_posting {
    ($ids:expr) => {
        debug_assert!(
            is_strictly_ascending($ids),
            "posting list is not strictly ascending: {:?}",
            $ids
        )
    };
}

/// Ids present in both `a` and `b`, ascending
///
/// Uses a linear merge when the lists are of similar size and a
/// binary search of the smaller into the larger when they are skewed.
///
/// # Examples
/// ```
/// use wordle_index::index::sorted::intersect;
///
/// assert_eq!(intersect(&[1, 3, 5, 7], &[3, 4, 5]), vec![3, 5]);
/// assert!(intersect(&[1, 2], &[3, 4]).is_empty());
/// ```
#[must_use]
pub fn intersect(a: &[WordId], b: &[WordId]) -> Vec<WordId> {
    debug_assert_posting!(a);
    debug_assert_posting!(b);

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if small.is_empty() {
        return Vec::new();
    }

    if large.len() / small.len() >= SEARCH_RATIO {
        intersect_by_search(small, large)
    } else {
        intersect_by_merge(small, large)
    }
}

fn intersect_by_merge(a: &[WordId], b: &[WordId]) -> Vec<WordId> {
    let mut result = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                result.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }

    result
}

fn intersect_by_search(small: &[WordId], mut large: &[WordId]) -> Vec<WordId> {
    let mut result = Vec::with_capacity(small.len());

    for &id in small {
        // Both inputs ascend, so the search window only ever shrinks from the left
        match large.binary_search(&id) {
            Ok(found) => {
                result.push(id);
                large = &large[found + 1..];
            }
            Err(insert_at) => large = &large[insert_at..],
        }
        if large.is_empty() {
            break;
        }
    }

    result
}

/// Ids present in either `a` or `b`, ascending and without duplicates
///
/// # Examples
/// ```
/// use wordle_index::index::sorted::union;
///
/// assert_eq!(union(&[1, 2, 3], &[2, 3, 4]), vec![1, 2, 3, 4]);
/// assert_eq!(union(&[], &[2, 3]), vec![2, 3]);
/// ```
#[must_use]
pub fn union(a: &[WordId], b: &[WordId]) -> Vec<WordId> {
    debug_assert_posting!(a);
    debug_assert_posting!(b);

    let mut result = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                result.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                result.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                result.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }

    result.extend_from_slice(&a[i..]);
    result.extend_from_slice(&b[j..]);
    result
}

/// Ids of `a` that are not in `b`, ascending
///
/// # Examples
/// ```
/// use wordle_index::index::sorted::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4, 6], &[1, 2]), vec![3, 4, 6]);
/// assert_eq!(difference(&[1, 2, 3], &[]), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn difference(a: &[WordId], b: &[WordId]) -> Vec<WordId> {
    debug_assert_posting!(a);
    debug_assert_posting!(b);

    let mut result = Vec::with_capacity(a.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                result.push(a[i]);
                i += 1;
            }
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }

    result.extend_from_slice(&a[i..]);
    result
}

/// Union of any number of posting lists
#[must_use]
pub fn union_all<'a, I>(lists: I) -> Vec<WordId>
where
    I: IntoIterator<Item = &'a [WordId]>,
{
    lists
        .into_iter()
        .fold(Vec::new(), |acc, list| union(&acc, list))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Random strictly ascending set drawn from `0..universe`
    fn random_set(rng: &mut StdRng, universe: WordId, density: f64) -> Vec<WordId> {
        (0..universe).filter(|_| rng.random_bool(density)).collect()
    }

    fn random_pairs() -> Vec<(Vec<WordId>, Vec<WordId>)> {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut pairs = Vec::new();
        for _ in 0..200 {
            let universe = rng.random_range(0..300);
            let da = rng.random_range(0.0..1.0);
            let db = rng.random_range(0.0..1.0);
            pairs.push((
                random_set(&mut rng, universe, da),
                random_set(&mut rng, universe, db),
            ));
        }
        // Skewed sizes exercise the binary-search path
        pairs.push(((0..2000).collect(), vec![5, 700, 1999]));
        pairs.push((vec![0, 1999, 4000], (0..2000).step_by(3).collect()));
        pairs
    }

    #[test]
    fn union_cases() {
        let cases: &[(&[WordId], &[WordId], &[WordId])] = &[
            (&[1, 2, 3], &[2, 3, 4], &[1, 2, 3, 4]),
            (&[1, 2, 3], &[], &[1, 2, 3]),
            (&[], &[2, 3, 4], &[2, 3, 4]),
            (&[1, 2, 3], &[2, 3, 4, 5], &[1, 2, 3, 4, 5]),
        ];
        for &(lhs, rhs, expected) in cases {
            assert_eq!(union(lhs, rhs), expected, "union({lhs:?}, {rhs:?})");
        }
    }

    #[test]
    fn difference_cases() {
        let cases: &[(&[WordId], &[WordId], &[WordId])] = &[
            (&[1, 2, 3], &[], &[1, 2, 3]),
            (&[1, 2, 3], &[2], &[1, 3]),
            (&[1, 2, 3, 4, 6], &[1, 2], &[3, 4, 6]),
            (&[1, 2, 3], &[0, 4, 5], &[1, 2, 3]),
            (&[], &[1], &[]),
        ];
        for &(lhs, rhs, expected) in cases {
            assert_eq!(difference(lhs, rhs), expected, "difference({lhs:?}, {rhs:?})");
        }
    }

    #[test]
    fn intersect_cases() {
        assert_eq!(intersect(&[1, 2, 3], &[2, 3, 4]), vec![2, 3]);
        assert_eq!(intersect(&[1, 2, 3], &[]), Vec::<WordId>::new());
        assert_eq!(intersect(&[7], &[1, 3, 5, 7, 9]), vec![7]);
    }

    #[test]
    fn intersect_search_matches_merge() {
        let large: Vec<WordId> = (0..5000).filter(|n| n % 7 != 0).collect();
        let small: Vec<WordId> = vec![0, 1, 7, 14, 15, 4998, 4999, 6000];
        assert_eq!(
            intersect_by_search(&small, &large),
            intersect_by_merge(&small, &large)
        );
        assert_eq!(intersect(&small, &large), vec![1, 15, 4999]);
    }

    #[test]
    fn disjoint_sets_intersect_to_empty() {
        let evens: Vec<WordId> = (0..100).step_by(2).collect();
        let odds: Vec<WordId> = (1..100).step_by(2).collect();
        assert!(intersect(&evens, &odds).is_empty());
        assert!(intersect(&odds, &evens).is_empty());
    }

    #[test]
    fn idempotence() {
        for (a, _) in random_pairs() {
            assert_eq!(union(&a, &a), a);
            assert_eq!(intersect(&a, &a), a);
            assert!(difference(&a, &a).is_empty());
        }
    }

    #[test]
    fn union_and_intersect_commute() {
        for (a, b) in random_pairs() {
            assert_eq!(union(&a, &b), union(&b, &a));
            assert_eq!(intersect(&a, &b), intersect(&b, &a));
        }
    }

    #[test]
    fn difference_and_intersection_partition_left_operand() {
        for (a, b) in random_pairs() {
            let only_a = difference(&a, &b);
            let both = intersect(&a, &b);
            assert_eq!(union(&only_a, &both), a);
            assert!(intersect(&only_a, &b).is_empty());
        }
    }

    #[test]
    fn results_stay_strictly_ascending() {
        for (a, b) in random_pairs() {
            assert!(is_strictly_ascending(&union(&a, &b)));
            assert!(is_strictly_ascending(&intersect(&a, &b)));
            assert!(is_strictly_ascending(&difference(&a, &b)));
        }
    }

    #[test]
    fn union_all_merges_many_lists() {
        let lists: [&[WordId]; 3] = [&[4, 9], &[1, 4], &[2, 9, 12]];
        assert_eq!(union_all(lists), vec![1, 2, 4, 9, 12]);
        assert!(union_all(std::iter::empty::<&[WordId]>()).is_empty());
    }

    #[test]
    fn strictly_ascending_check() {
        assert!(is_strictly_ascending(&[]));
        assert!(is_strictly_ascending(&[3]));
        assert!(is_strictly_ascending(&[1, 2, 9]));
        assert!(!is_strictly_ascending(&[1, 1, 2]));
        assert!(!is_strictly_ascending(&[3, 2]));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not strictly ascending")]
    fn unsorted_input_fails_loudly() {
        let _ = union(&[3, 1, 2], &[1]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not strictly ascending")]
    fn duplicated_input_fails_loudly() {
        let _ = intersect(&[1, 2, 3], &[2, 2]);
    }
}
