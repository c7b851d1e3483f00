//! Arithmetic helpers over sequences of numeric elements.

use num_traits::{AsPrimitive, Zero};

/// A numeric element type usable by the arithmetic helpers.
/// This trait is just a collection of abilities (other traits) and is automatically derived.
pub trait Num: Copy + PartialOrd + Zero {}

impl<T: Copy + PartialOrd + Zero> Num for T {}

/// Casts each element to the numeric type `V`, with the exact semantics of the
/// `as` operator (narrowing truncates, widening is lossless).
pub fn convert<T, V>(s: &[T]) -> Vec<V>
where
    T: AsPrimitive<V>,
    V: Copy + 'static,
{
    s.iter().map(|v| v.as_()).collect()
}

/// Returns the smallest element, or zero for an empty sequence.
pub fn min<T: Num>(s: &[T]) -> T {
    let mut values = s.iter().copied();
    let Some(first) = values.next() else {
        return T::zero();
    };
    values.fold(first, |acc, v| if v < acc { v } else { acc })
}

/// Returns the largest element, or zero for an empty sequence.
pub fn max<T: Num>(s: &[T]) -> T {
    let mut values = s.iter().copied();
    let Some(first) = values.next() else {
        return T::zero();
    };
    values.fold(first, |acc, v| if v > acc { v } else { acc })
}

/// Returns the sum of all elements, zero for an empty sequence.
pub fn sum<T: Num>(s: &[T]) -> T {
    s.iter().copied().fold(T::zero(), |acc, v| acc + v)
}

/// Returns the arithmetic progression from `start` (inclusive) to `stop`
/// (exclusive), advancing by `step`.
///
/// Degenerate parameters (zero step, equal bounds, or a step pointing away
/// from `stop`) yield an empty sequence. The progression always terminates.
///
/// # Example
/// ```
/// use kit_seq::num::range;
/// assert_eq!(range(0, 3, 1), vec![0, 1, 2]);
/// assert_eq!(range(2, -1, -1), vec![2, 1, 0]);
/// assert_eq!(range(3, 0, 1), Vec::<i32>::new());
/// ```
pub fn range<T: Num>(start: T, stop: T, step: T) -> Vec<T> {
    let zero = T::zero();
    if step == zero
        || start == stop
        || (start > stop && step > zero)
        || (start < stop && step < zero)
    {
        return Vec::new();
    }

    let within = |i: T| if start < stop { i < stop } else { i > stop };

    let mut result = Vec::new();
    let mut i = start;
    while within(i) {
        result.push(i);
        i = i + step;
    }
    result
}

/// Returns an infinite producer for the arithmetic progression starting at
/// `start` and advancing by `step` after each call.
///
/// Each producer owns its private counter; two producers never interact.
/// There is no reset: a fresh progression needs a fresh producer.
///
/// # Example
/// ```
/// use kit_seq::num::sequence_generator;
/// let mut counter = sequence_generator(0, 1);
/// assert_eq!((counter(), counter(), counter()), (0, 1, 2));
/// ```
pub fn sequence_generator<T: Num>(start: T, step: T) -> impl FnMut() -> T {
    let mut next = start;
    move || {
        let current = next;
        next = current + step;
        current
    }
}
