use capkit_utils::{char_frequency, factorial, find_max, sort_numbers};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sorted_output_is_ordered_permutation(v in prop::collection::vec(any::<i32>(), 0..50)) {
        let sorted = sort_numbers(&v);
        prop_assert_eq!(sorted.len(), v.len());
        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        let mut expected = v.clone();
        expected.sort();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn max_is_an_upper_bound(v in prop::collection::vec(any::<i32>(), 1..50)) {
        let max = find_max(&v).unwrap();
        prop_assert!(v.contains(&max));
        prop_assert!(v.iter().all(|x| *x <= max));
    }

    #[test]
    fn factorial_recurrence(n in 1i64..=20) {
        let prev = factorial(n - 1).unwrap();
        let cur = factorial(n).unwrap();
        prop_assert_eq!(cur, prev * n as u64);
    }

    #[test]
    fn frequencies_sum_to_char_count(s in ".*") {
        let total: usize = char_frequency(&s).values().sum();
        prop_assert_eq!(total, s.chars().count());
    }
}
