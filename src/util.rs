//! Misc stuff.

use std::ops::Range;


// TODO: replace this with the `range_contains` feature when it’s OK to use

pub(crate) trait RangeExt {

    /// Returns whether this value exists within the given range of values.
    fn is_within(&self, range: Range<Self>) -> bool where Self: Sized;
}

// Define RangeExt on *anything* that can be compared, though it’s only
// really ever used for numeric ranges...

impl<T> RangeExt for T where T: PartialOrd<T> {
    fn is_within(&self, range: Range<Self>) -> bool {
        *self >= range.start && *self < range.end
    }
}


/// Split a number of periods into a number of complete cycles, and the
/// number of periods left over that don’t fit into a cycle.
///
/// This is essentially a division operation with the result and the
/// remainder, with the difference that a negative value gets ‘wrapped
/// around’ to be a positive remainder, owing to the way the modulo
/// operator works for negative values.
pub(crate) fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    let mut cycles    = number_of_periods / cycle_length;
    let mut remainder = number_of_periods % cycle_length;

    if remainder < 0 {
        remainder += cycle_length;
        cycles    -= 1;
    }

    (cycles, remainder)
}


#[cfg(test)]
mod test {
    use super::split_cycles;

    #[test]
    fn positive() {
        assert_eq!(split_cycles(13, 5), (2, 3));
    }

    #[test]
    fn negative() {
        assert_eq!(split_cycles(-1, 5), (-1, 4));
        assert_eq!(split_cycles(-5, 5), (-1, 0));
        assert_eq!(split_cycles(-6, 5), (-2, 4));
    }

    #[test]
    fn exact() {
        assert_eq!(split_cycles(10, 5), (2, 0));
        assert_eq!(split_cycles(0, 5), (0, 0));
    }
}
