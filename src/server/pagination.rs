pub const QUESTIONS_PER_PAGE: usize = 10;

// Anything unparseable falls back to the first page.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.parse().ok()).unwrap_or(1)
}

pub fn paginate<T: Clone>(items: &[T], page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }
    let start = ((page - 1) as usize).saturating_mul(QUESTIONS_PER_PAGE);
    items
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect()
}

// A page no longer than the leftover of a full listing is the last one and
// links back to the start; anything else links forward.
pub fn next_page_url(current_len: usize, page: i64, remainder: usize) -> String {
    if remainder < current_len {
        format!("/questions?page={}", page + 1)
    } else {
        "/questions?page=1".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_slices_fixed_pages() {
        let items: Vec<i64> = (1..=25).collect();
        assert_eq!(paginate(&items, 1), (1..=10).collect::<Vec<i64>>());
        assert_eq!(paginate(&items, 2), (11..=20).collect::<Vec<i64>>());
        assert_eq!(paginate(&items, 3), (21..=25).collect::<Vec<i64>>());
    }

    #[test]
    fn paginate_out_of_range_is_empty() {
        let items: Vec<i64> = (1..=5).collect();
        assert!(paginate(&items, 2).is_empty());
        assert!(paginate(&items, 1000).is_empty());
        assert!(paginate(&items, 0).is_empty());
        assert!(paginate(&items, -3).is_empty());
    }

    #[test]
    fn parse_page_defaults_to_first() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some("abc")), 1);
    }

    #[test]
    fn next_page_links_forward_until_last() {
        // 25 items: pages of 10, 10 and 5
        assert_eq!(next_page_url(10, 1, 5), "/questions?page=2");
        assert_eq!(next_page_url(10, 2, 5), "/questions?page=3");
        assert_eq!(next_page_url(5, 3, 5), "/questions?page=1");
    }
}
