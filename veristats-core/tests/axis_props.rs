use proptest::prelude::*;
use veristats_core::rounded_ceiling;

#[test]
fn worked_examples() {
    assert_eq!(rounded_ceiling(734), 800);
    assert_eq!(rounded_ceiling(12), 20);
    assert_eq!(rounded_ceiling(5), 5);
    assert_eq!(rounded_ceiling(999), 1000);
    assert_eq!(rounded_ceiling(1), 1);
}

#[test]
fn zero_maps_to_zero_by_convention() {
    assert_eq!(rounded_ceiling(0), 0);
}

#[test]
fn powers_of_ten_are_fixed_points() {
    let mut p = 1u64;
    while p <= 1_000_000_000_000 {
        assert_eq!(rounded_ceiling(p), p);
        p *= 10;
    }
}

proptest! {
    #[test]
    fn ceiling_never_undershoots(x in 1u64..1_000_000_000_000) {
        prop_assert!(rounded_ceiling(x) >= x);
    }

    #[test]
    fn ceiling_is_a_multiple_of_the_leading_magnitude(x in 1u64..1_000_000_000_000) {
        let magnitude = 10u64.pow(x.ilog10());
        prop_assert_eq!(rounded_ceiling(x) % magnitude, 0);
    }

    #[test]
    fn ceiling_is_within_one_magnitude_step(x in 1u64..1_000_000_000_000) {
        let magnitude = 10u64.pow(x.ilog10());
        prop_assert!(rounded_ceiling(x) - x < magnitude);
    }
}
