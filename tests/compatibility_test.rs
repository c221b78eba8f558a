use dsasort::core::Sequence;
use dsasort::prelude::*;

// Simulate a container from another crate: records kept in a flat column.
struct MockColumn {
    values: Vec<u32>,
}

impl Sequence for MockColumn {
    type Item = u32;

    fn len(&self) -> usize {
        self.values.len()
    }

    fn get(&self, index: usize) -> &u32 {
        &self.values[index]
    }

    fn exchange(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Person {
    name: &'static str,
    age: u8,
}

#[test]
fn test_external_container_in_place() {
    let mut column = MockColumn {
        values: vec![30, 10, 20],
    };
    shell_sort(&mut column).unwrap();
    assert_eq!(column.values, vec![10, 20, 30]);

    bubble_sort(&mut column, SortType::Descending).unwrap();
    assert_eq!(column.values, vec![30, 20, 10]);
}

#[test]
fn test_external_container_copying() {
    // Falls back to the provided `extend_into`.
    let column = MockColumn {
        values: vec![5, 3, 9, 3],
    };
    assert_eq!(merge_sort(&column).unwrap(), vec![3, 3, 5, 9]);
    assert_eq!(quick_sort(&column).unwrap(), vec![3, 3, 5, 9]);
    assert_eq!(column.values, vec![5, 3, 9, 3]);
}

#[test]
fn test_non_ord_type_with_comparator() {
    let people = vec![
        Person {
            name: "Luca",
            age: 41,
        },
        Person {
            name: "Ana",
            age: 29,
        },
        Person {
            name: "Bo",
            age: 41,
        },
        Person {
            name: "Kim",
            age: 18,
        },
    ];
    let by_age = |a: &Person, b: &Person| a.age.cmp(&b.age);

    let sorted = merge_sort_by(&people, by_age).unwrap();
    let names: Vec<_> = sorted.iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Kim", "Ana", "Luca", "Bo"]);

    let oldest_first = quick_sort_by(&people, Reverse(by_age)).unwrap();
    assert_eq!(oldest_first.last().map(|p| p.name), Some("Kim"));
}

#[test]
fn test_custom_comparator_struct() {
    // Case-insensitive ordering as a named comparator.
    struct IgnoreCase;

    impl Comparator<String> for IgnoreCase {
        fn compare(&self, a: &String, b: &String) -> std::cmp::Ordering {
            a.to_lowercase().cmp(&b.to_lowercase())
        }
    }

    let mut words: Vec<String> = ["beta", "Alpha", "gamma", "Delta"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    insertion_sort_by(&mut words, IgnoreCase).unwrap();
    assert_eq!(words, vec!["Alpha", "beta", "Delta", "gamma"]);
    assert!(is_sorted_by(&words, IgnoreCase));
}
