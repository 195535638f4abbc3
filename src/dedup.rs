use std::{collections::HashSet, hash::Hash};

/// Keeps the first occurrence of every value, in the order first seen.
pub fn deduplicated<T>(initial: Vec<T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(initial.len());
    let mut unique = Vec::with_capacity(initial.len());
    for value in initial {
        if seen.insert(value.clone()) {
            unique.push(value);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduplicated() {
        let initial = vec!["b", "a", "b", "c", "a", "d"];
        assert_eq!(deduplicated(initial), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_empty_and_unique() {
        assert!(deduplicated(Vec::<String>::new()).is_empty());
        assert_eq!(deduplicated(vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_is_ordered_subsequence_of_first_occurrences() {
        let initial: Vec<u8> = "mississippi river".bytes().collect();
        let unique = deduplicated(initial.clone());

        let distinct: HashSet<_> = initial.iter().collect();
        assert_eq!(unique.len(), distinct.len());

        // every output value sits at its first index in the input, and those indices increase
        let firsts: Vec<usize> = unique
            .iter()
            .map(|v| initial.iter().position(|x| x == v).unwrap())
            .collect();
        assert!(firsts.windows(2).all(|w| w[0] < w[1]));
    }
}
