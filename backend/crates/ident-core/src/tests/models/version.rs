use crate::{VERSION_WRAP, next_version};

#[test]
fn given_small_version_when_incremented_then_adds_one() {
    assert_eq!(next_version(0), 1);
    assert_eq!(next_version(41), 42);
}

#[test]
fn given_version_at_wrap_bound_when_incremented_then_wraps_to_zero() {
    assert_eq!(next_version(VERSION_WRAP - 1), VERSION_WRAP);
    assert_eq!(next_version(VERSION_WRAP), 0);
}

#[test]
fn given_out_of_range_version_when_incremented_then_still_wraps() {
    assert_eq!(next_version(i32::MAX), 0);
}
