//! # dual_list
//!
//! `dual_list` implements two interchangeable index-addressable list
//! containers behind one shared [`List`] trait:
//!
//! - [`ArrayList`]: one flat growable buffer. Amortized O(1) appends,
//!   O(n) positional insertion and removal due to shifting.
//! - [`LinkedList`]: a doubly-linked node chain over an internal arena.
//!   O(1) appends, O(n) positional access walking from the closer end,
//!   O(1) removal once the node is located.
//!
//! ## Features
//! - One contract, two layouts: code written against [`List`] runs
//!   unchanged on either variant.
//! - Comparator-driven stable sorting; no default ordering is assumed.
//! - Lazy, restartable forward iteration, plus the usual std container
//!   trait suite (`FromIterator`, `Extend`, `IntoIterator`, comparisons).
//!
//! ## Index contract
//! `insert` places a value strictly before an existing element, so it
//! requires `index < len()` and panics otherwise; appending past the end
//! must use `push`. Fallible lookups (`get`, `remove`) return `Option`.
//!
//! ## Note
//! Neither container synchronizes access. Both are exclusively owned by
//! the caller and follow the usual Rust rule: shared-reference iterators
//! borrow the container, so structural mutation during iteration is
//! rejected at compile time.
//!
//! ## Example
//! ```rust
//! use dual_list::{ArrayList, LinkedList, List};
//!
//! fn dedup_sorted(list: &mut impl List<i32>) {
//!     list.sort_by(i32::cmp);
//!     let mut index = 1;
//!     while index < list.len() {
//!         if list.get(index) == list.get(index - 1) {
//!             list.remove(index);
//!         } else {
//!             index += 1;
//!         }
//!     }
//! }
//!
//! let mut array: ArrayList<i32> = [3, 1, 3, 2].into();
//! let mut linked: LinkedList<i32> = [3, 1, 3, 2].into();
//!
//! dedup_sorted(&mut array);
//! dedup_sorted(&mut linked);
//!
//! assert_eq!(array.to_vec(), vec![1, 2, 3]);
//! assert_eq!(linked.to_vec(), vec![1, 2, 3]);
//! ```

mod array_list;
mod linked_list;
mod list;

pub use array_list::ArrayList;
pub use linked_list::LinkedList;
pub use list::List;

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use crate::{ArrayList, LinkedList, List};

    // Contract tests: every assertion here must hold for both variants.
    fn check_append_then_get_last<L: List<i32>>(sut: &mut L) {
        for value in [7, -3, 0, 42] {
            sut.push(value);
            assert_eq!(sut.get(sut.len() - 1), Some(&value));
        }
    }

    fn check_insert_shifts_right<L: List<&'static str>>(sut: &mut L) {
        sut.push("a");
        sut.push("b");
        sut.push("c");

        sut.insert(1, "x");

        assert_eq!(sut.to_vec(), vec!["a", "x", "b", "c"]);
    }

    fn check_remove_shifts_left<L: List<&'static str>>(sut: &mut L) {
        for value in ["a", "b", "c", "d"] {
            sut.push(value);
        }

        assert_eq!(sut.remove(1), Some("b"));
        assert_eq!(sut.to_vec(), vec!["a", "c", "d"]);
    }

    fn check_bounds<L: List<i32>>(sut: &mut L) {
        assert_eq!(sut.get(0), None);
        assert_eq!(sut.remove(0), None);

        sut.push(1);
        sut.push(2);

        assert_eq!(sut.get(2), None);
        assert_eq!(sut.remove(2), None);
        assert_eq!(sut.len(), 2);
    }

    fn check_clear_resets_size<L: List<i32>>(sut: &mut L) {
        sut.push(1);
        sut.push(2);
        sut.clear();

        assert_eq!(sut.len(), 0);
        assert!(sut.is_empty());
        assert_eq!(sut.get(0), None);
    }

    fn check_sort_matches_reference<L: List<i32>>(sut: &mut L, input: &[i32]) {
        for &value in input {
            sut.push(value);
        }

        sut.sort_by(i32::cmp);

        let mut expected = input.to_vec();
        expected.sort();
        assert_eq!(sut.to_vec(), expected);
    }

    #[test]
    fn test_append_then_get_last_agrees_across_variants() {
        check_append_then_get_last(&mut ArrayList::new());
        check_append_then_get_last(&mut LinkedList::new());
    }

    #[test]
    fn test_insert_shifts_right_on_both_variants() {
        check_insert_shifts_right(&mut ArrayList::new());
        check_insert_shifts_right(&mut LinkedList::new());
    }

    #[test]
    fn test_remove_shifts_left_on_both_variants() {
        check_remove_shifts_left(&mut ArrayList::new());
        check_remove_shifts_left(&mut LinkedList::new());
    }

    #[test]
    fn test_bounds_are_checked_on_both_variants() {
        check_bounds(&mut ArrayList::new());
        check_bounds(&mut LinkedList::new());
    }

    #[test]
    fn test_clear_resets_size_on_both_variants() {
        check_clear_resets_size(&mut ArrayList::new());
        check_clear_resets_size(&mut LinkedList::new());
    }

    #[test]
    fn test_sort_matches_reference_on_both_variants() {
        for input in [
            &[][..],
            &[42][..],
            &[1, 2, 3][..],
            &[3, 2, 1][..],
            &[5, -1, 5, 0, 3, -7][..],
        ] {
            check_sort_matches_reference(&mut ArrayList::new(), input);
            check_sort_matches_reference(&mut LinkedList::new(), input);
        }
    }

    #[test]
    fn test_insert_at_len_is_rejected_by_both_variants() {
        // Neither variant supports insert-at-size; appending must use push.
        let mut array: ArrayList<i32> = [1, 2].into();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| array.insert(2, 3)));
        assert!(result.is_err());
        assert_eq!(array.to_vec(), vec![1, 2]);

        let mut linked: LinkedList<i32> = [1, 2].into();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| linked.insert(2, 3)));
        assert!(result.is_err());
        assert_eq!(linked.to_vec(), vec![1, 2]);
    }

    #[quickcheck]
    fn test_variants_agree_under_random_operations(seed: Vec<i32>) {
        let mut array: ArrayList<i32> = seed.iter().copied().collect();
        let mut linked: LinkedList<i32> = seed.into_iter().collect();

        for _ in 0..64 {
            assert_eq!(array.len(), linked.len());
            assert_eq!(array.to_vec(), linked.to_vec());
            assert!(array.iter().eq(linked.iter()));

            let len = array.len();
            match rand::random_range(0..=4) {
                0 => {
                    let value = rand::random();
                    array.push(value);
                    linked.push(value);
                }
                1 if len > 0 => {
                    let index = rand::random_range(0..len);
                    let value = rand::random();
                    array.insert(index, value);
                    linked.insert(index, value);
                }
                2 => {
                    let index = rand::random_range(0..=len);
                    assert_eq!(array.remove(index), linked.remove(index));
                }
                3 => {
                    array.sort_by(i32::cmp);
                    linked.sort_by(i32::cmp);
                }
                _ => {
                    let index = rand::random_range(0..=len);
                    assert_eq!(array.get(index), linked.get(index));
                }
            }
        }

        array.clear();
        linked.clear();
        assert_eq!(array.len(), linked.len());
        assert!(array.is_empty() && linked.is_empty());
    }
}
