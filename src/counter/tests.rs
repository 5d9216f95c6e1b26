use std::collections::HashSet;

use crate::counter::{Candidates, Counter, CounterError, OverflowPolicy};

#[test]
fn test_new_counter_starts_at_all_zeros() {
    let counter = Counter::new(3, 2, OverflowPolicy::Saturate).expect("valid counter");
    assert_eq!(counter.digits(), &[0, 0, 0]);
    assert_eq!(counter.base(), 2);
    assert_eq!(counter.width(), 3);
    assert_eq!(counter.policy(), OverflowPolicy::Saturate);
    assert!(!counter.is_saturated());
}

#[test]
fn test_increment_carries_right_to_left() {
    let mut counter =
        Counter::from_digits(&[0, 1, 1], 2, OverflowPolicy::Saturate).expect("valid counter");
    counter.increment();
    assert_eq!(counter.digits(), &[1, 0, 0]);
}

#[test]
fn test_increment_without_carry_touches_only_the_last_digit() {
    let mut counter =
        Counter::from_digits(&[4, 2, 7], 10, OverflowPolicy::Saturate).expect("valid counter");
    counter.increment();
    assert_eq!(counter.digits(), &[4, 2, 8]);
}

#[test]
fn test_saturating_counter_pins_at_the_maximum() {
    let mut counter =
        Counter::from_digits(&[2, 2], 3, OverflowPolicy::Saturate).expect("valid counter");
    assert!(counter.is_saturated());

    counter.increment();
    assert_eq!(counter.digits(), &[2, 2]);
    assert!(counter.is_saturated());
}

#[test]
fn test_every_base_reaches_its_fixed_point_after_the_full_cycle() {
    for base in 2..=10u8 {
        for width in 1..=2usize {
            let mut counter =
                Counter::new(width, base, OverflowPolicy::Saturate).expect("valid counter");
            let space = u64::from(base).pow(width as u32);
            for _ in 0..space {
                counter.increment();
            }

            let maximum = vec![base - 1; width];
            assert_eq!(counter.digits(), maximum.as_slice(), "base {}", base);
            assert!(counter.is_saturated());

            let pinned = counter.clone();
            counter.increment();
            assert_eq!(counter, pinned, "base {} width {}", base, width);
        }
    }
}

#[test]
fn test_growing_counter_gains_exactly_one_leading_digit() {
    for base in 2..=10u8 {
        let mut counter = Counter::from_digits(&[base - 1, base - 1], base, OverflowPolicy::Grow)
            .expect("valid counter");
        counter.increment();
        assert_eq!(counter.width(), 3, "base {}", base);
        assert_eq!(counter.digits(), &[1, 0, 0], "base {}", base);
        assert!(!counter.is_saturated());
    }
}

#[test]
fn test_growing_counter_keeps_width_without_a_terminal_carry() {
    let mut counter =
        Counter::from_digits(&[1, 0], 3, OverflowPolicy::Grow).expect("valid counter");
    counter.increment();
    assert_eq!(counter.digits(), &[1, 1]);
    assert_eq!(counter.width(), 2);
}

#[test]
fn test_counters_of_different_widths_are_never_equal() {
    let narrow = Counter::from_digits(&[1], 3, OverflowPolicy::Saturate).expect("valid counter");
    let wide = Counter::from_digits(&[0, 1], 3, OverflowPolicy::Saturate).expect("valid counter");
    assert_ne!(narrow, wide);
}

#[test]
fn test_bounds_are_only_defined_for_growing_counters() {
    let growing = Counter::new(3, 4, OverflowPolicy::Grow).expect("valid counter");
    assert_eq!(growing.minimum_value().as_deref(), Ok("000"));
    assert_eq!(growing.maximum_value().as_deref(), Ok("333"));

    let saturating = Counter::new(3, 4, OverflowPolicy::Saturate).expect("valid counter");
    assert_eq!(
        saturating.minimum_value(),
        Err(CounterError::BoundsUnavailable)
    );
    assert_eq!(
        saturating.maximum_value(),
        Err(CounterError::BoundsUnavailable)
    );
}

#[test]
fn test_bounds_track_a_grown_width() {
    let mut counter =
        Counter::from_digits(&[1, 1], 2, OverflowPolicy::Grow).expect("valid counter");
    counter.increment();
    assert_eq!(counter.minimum_value().as_deref(), Ok("000"));
    assert_eq!(counter.maximum_value().as_deref(), Ok("111"));
}

#[test]
fn test_rejects_bases_outside_the_digit_range() {
    assert_eq!(
        Counter::new(3, 0, OverflowPolicy::Saturate),
        Err(CounterError::InvalidBase(0))
    );
    assert_eq!(
        Counter::new(3, 1, OverflowPolicy::Saturate),
        Err(CounterError::InvalidBase(1))
    );
    assert_eq!(
        Counter::new(3, 11, OverflowPolicy::Saturate),
        Err(CounterError::InvalidBase(11))
    );
}

#[test]
fn test_rejects_an_empty_digit_string() {
    assert_eq!(
        Counter::new(0, 2, OverflowPolicy::Saturate),
        Err(CounterError::EmptyDigits)
    );
    assert_eq!(
        Counter::from_digits(&[], 2, OverflowPolicy::Saturate),
        Err(CounterError::EmptyDigits)
    );
}

#[test]
fn test_rejects_digits_that_do_not_fit_the_base() {
    assert_eq!(
        Counter::from_digits(&[0, 5], 5, OverflowPolicy::Saturate),
        Err(CounterError::DigitOutOfRange { digit: 5, base: 5 })
    );
}

#[test]
fn test_display_concatenates_digits_most_significant_first() {
    let counter =
        Counter::from_digits(&[1, 0, 2], 3, OverflowPolicy::Saturate).expect("valid counter");
    assert_eq!(counter.to_string(), "102");
}

#[test]
fn test_candidates_visit_every_digit_string_exactly_once() {
    let all: Vec<Vec<u8>> = Candidates::new(3, 2).expect("valid space").collect();
    assert_eq!(all.len(), 8);
    assert_eq!(all.first(), Some(&vec![0, 0, 0]));
    assert_eq!(all.last(), Some(&vec![1, 1, 1]));

    let unique: HashSet<Vec<u8>> = all.iter().cloned().collect();
    assert_eq!(unique.len(), all.len());
}

#[test]
fn test_candidates_count_the_rightmost_digit_fastest() {
    let all: Vec<Vec<u8>> = Candidates::new(2, 3).expect("valid space").collect();
    assert_eq!(all.len(), 9);
    assert_eq!(all[..4], [vec![0, 0], vec![0, 1], vec![0, 2], vec![1, 0]]);
}

#[test]
fn test_candidates_cover_a_single_move_space() {
    let all: Vec<Vec<u8>> = Candidates::new(1, 4).expect("valid space").collect();
    assert_eq!(all, vec![vec![0], vec![1], vec![2], vec![3]]);
}

#[test]
fn test_candidates_stay_exhausted() {
    let mut candidates = Candidates::new(1, 2).expect("valid space");
    assert_eq!(candidates.next(), Some(vec![0]));
    assert_eq!(candidates.next(), Some(vec![1]));
    assert_eq!(candidates.next(), None);
    assert_eq!(candidates.next(), None);
}
