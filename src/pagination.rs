//! Page arithmetic shared by the local fallback and result normalization.

/// Number of pages needed to show `total` items, `limit` per page.
pub fn total_pages(total: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

/// Takes the 1-based `page` of `items`. Pages past the end are empty.
pub fn page_slice<T>(items: Vec<T>, page: usize, limit: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(limit);
    items.into_iter().skip(start).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(3, 1), 3);
    }

    #[test]
    fn page_slice_returns_requested_window() {
        let items: Vec<_> = (1..=7).collect();
        assert_eq!(page_slice(items.clone(), 1, 3), vec![1, 2, 3]);
        assert_eq!(page_slice(items.clone(), 3, 3), vec![7]);
        assert!(page_slice(items, 4, 3).is_empty());
    }

    #[test]
    fn pages_partition_the_input() {
        let items: Vec<_> = (0..23).collect();
        let limit = 5;
        let joined: Vec<_> = (1..=total_pages(items.len(), limit))
            .flat_map(|page| page_slice(items.clone(), page, limit))
            .collect();
        assert_eq!(joined, items);
    }
}
