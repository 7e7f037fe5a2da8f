use std::cmp::Ordering;

/// Total-order comparison capability injected into a tree at construction.
///
/// The ordering must be a strict total order and stay consistent for the
/// lifetime of the container; every placement and search decision consults
/// it. The tree stores exactly one instance and never swaps it out.
pub trait Comparator<T> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

/// Any plain comparison closure works as a comparator.
impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}

#[cfg(test)]
#[test]
fn test_closure_comparator() {
    let reversed = |a: &u32, b: &u32| b.cmp(a);
    assert_eq!(Comparator::compare(&reversed, &1, &2), Ordering::Greater);
    assert_eq!(Comparator::compare(&reversed, &2, &2), Ordering::Equal);
    assert_eq!(Comparator::compare(&reversed, &3, &2), Ordering::Less);
}
