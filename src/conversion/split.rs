//! Capacity-driven splitting of one contact into several entries.

use std::num::NonZeroUsize;

/// Partition items into consecutive chunks of at most `max_per_entry`.
///
/// Relative order is preserved. An empty input yields no chunks.
pub fn split<T: Clone>(items: &[T], max_per_entry: NonZeroUsize) -> Vec<Vec<T>> {
    items
        .chunks(max_per_entry.get())
        .map(<[T]>::to_vec)
        .collect()
}

/// Lay out numbers and emails over the entries of one contact.
///
/// There is one entry per number chunk. Without an email capacity every entry
/// gets all emails; with one, entry `i` gets email chunk `i` and emails beyond
/// the last entry are left out.
pub fn distribute<N: Clone, E: Clone>(
    numbers: &[N],
    emails: &[E],
    max_numbers: NonZeroUsize,
    max_emails: Option<NonZeroUsize>,
) -> Vec<(Vec<N>, Vec<E>)> {
    let number_chunks = split(numbers, max_numbers);

    let Some(max_emails) = max_emails else {
        return number_chunks
            .into_iter()
            .map(|chunk| (chunk, emails.to_vec()))
            .collect();
    };

    let mut email_chunks = split(emails, max_emails).into_iter();
    number_chunks
        .into_iter()
        .map(|chunk| (chunk, email_chunks.next().unwrap_or_default()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_split_eighteen_by_nine() {
        let items: Vec<u32> = (1..=18).collect();
        let chunks = split(&items, cap(9));
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], (1..=9).collect::<Vec<_>>());
        assert_eq!(chunks[1], (10..=18).collect::<Vec<_>>());
    }

    #[test]
    fn test_chunk_count_is_ceiling() {
        for (count, expected) in [(1, 1), (9, 1), (10, 2), (19, 3), (27, 3)] {
            let items: Vec<usize> = (0..count).collect();
            assert_eq!(split(&items, cap(9)).len(), expected, "count {}", count);
        }
    }

    #[test]
    fn test_split_empty() {
        let items: Vec<u8> = Vec::new();
        assert!(split(&items, cap(9)).is_empty());
    }

    #[test]
    fn test_distribute_unbounded_emails_on_every_entry() {
        let numbers: Vec<u32> = (1..=10).collect();
        let emails = vec!["a", "b"];
        let entries = distribute(&numbers, &emails, cap(9), None);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].1, emails);
        assert_eq!(entries[1].1, emails);
        assert_eq!(entries[1].0, vec![10]);
    }

    #[test]
    fn test_distribute_bounded_emails() {
        let numbers: Vec<u32> = (1..=10).collect();
        let emails = vec!["a", "b", "c"];
        let entries = distribute(&numbers, &emails, cap(9), Some(cap(2)));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].1, vec!["a", "b"]);
        assert_eq!(entries[1].1, vec!["c"]);
    }

    #[test]
    fn test_distribute_never_adds_entries_for_emails() {
        let numbers = vec![1];
        let emails = vec!["a", "b", "c"];
        let entries = distribute(&numbers, &emails, cap(9), Some(cap(1)));
        assert_eq!(entries, vec![(vec![1], vec!["a"])]);
    }

    #[test]
    fn test_distribute_without_numbers_is_empty() {
        let numbers: Vec<u32> = Vec::new();
        let entries = distribute(&numbers, &["a"][..], cap(9), Some(cap(1)));
        assert!(entries.is_empty());
    }
}
