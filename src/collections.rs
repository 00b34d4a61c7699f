/// Index of the first item matching `predicate`, which also receives the item's index.
pub fn find_index<T>(items: &[T], mut predicate: impl FnMut(&T, usize) -> bool) -> Option<usize> {
    items
        .iter()
        .enumerate()
        .find(|(index, item)| predicate(item, *index))
        .map(|(index, _)| index)
}

/// Removes duplicates, where `same` decides whether two items are duplicates. The first item
/// of each group is kept and the order is preserved.
pub fn filter_repeat<T>(items: Vec<T>, mut same: impl FnMut(&T, &T) -> bool) -> Vec<T> {
    let keep: Vec<bool> = (0..items.len())
        .map(|index| find_index(&items, |item, _| same(item, &items[index])) == Some(index))
        .collect();
    items
        .into_iter()
        .zip(keep)
        .filter_map(|(item, keep)| keep.then_some(item))
        .collect()
}

/// Splits `data` into consecutive chunks of `len` items, the last one possibly shorter.
/// Data that fits in one chunk (empty data included) yields exactly one chunk, as does
/// `len == 0`.
pub fn chunk<T>(data: Vec<T>, len: usize) -> Vec<Vec<T>> {
    if len == 0 || data.len() <= len {
        return vec![data];
    }
    let mut chunks = Vec::with_capacity(data.len().div_ceil(len));
    let mut rest = data;
    while rest.len() > len {
        let tail = rest.split_off(len);
        chunks.push(rest);
        rest = tail;
    }
    chunks.push(rest);
    chunks
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        id: u32,
        code: &'static str,
    }

    #[test]
    fn find_first_index() {
        let items = [3, 5, 7, 5];
        assert_eq!(find_index(&items, |item, _| *item == 5), Some(1));
        assert_eq!(find_index(&items, |_, index| index == 3), Some(3));
        assert_eq!(find_index(&items, |item, _| *item == 4), None);
        assert_eq!(find_index::<u8>(&[], |_, _| true), None);
    }

    #[test]
    fn filter_repeat_by_key() {
        let items = vec![
            Item { id: 10, code: "abc" },
            Item { id: 12, code: "abc" },
            Item { id: 12, code: "def" },
        ];
        assert_eq!(
            filter_repeat(items, |a, b| a.id == b.id),
            vec![Item { id: 10, code: "abc" }, Item { id: 12, code: "abc" }]
        );
        assert_eq!(filter_repeat(vec![1, 2, 1, 3, 2], |a, b| a == b), vec![1, 2, 3]);
        assert!(filter_repeat(Vec::<u8>::new(), |a, b| a == b).is_empty());
    }

    #[test]
    fn chunks() {
        assert_eq!(chunk(vec![1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
        assert_eq!(chunk(vec![1, 2, 3, 4], 2), vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(chunk(vec![1, 2], 5), vec![vec![1, 2]]);
        assert_eq!(chunk(Vec::<u8>::new(), 3), vec![Vec::<u8>::new()]);
        assert_eq!(chunk(vec![1, 2, 3], 0), vec![vec![1, 2, 3]]);
    }
}
