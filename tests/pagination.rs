use notice_admin::pagination::Paginated;

#[test]
fn test_prev_disabled_only_on_first_page() {
    let first: Paginated<u32> = Paginated::new(vec![], 0, 3);
    assert!(!first.has_prev);
    assert!(first.has_next);

    let middle: Paginated<u32> = Paginated::new(vec![], 1, 3);
    assert!(middle.has_prev);
    assert!(middle.has_next);
}

#[test]
fn test_next_disabled_only_on_last_page() {
    let last: Paginated<u32> = Paginated::new(vec![], 2, 3);
    assert!(last.has_prev);
    assert!(!last.has_next);
}

#[test]
fn test_navigation_moves_by_exactly_one_page() {
    let page: Paginated<u32> = Paginated::new(vec![], 1, 3);
    assert_eq!(page.prev_page, 0);
    assert_eq!(page.next_page, 2);
}

#[test]
fn test_single_page_disables_both_controls() {
    let only: Paginated<u32> = Paginated::new(vec![], 0, 1);
    assert!(!only.has_prev);
    assert!(!only.has_next);
}

#[test]
fn test_zero_total_pages_is_clamped_to_one() {
    let empty: Paginated<u32> = Paginated::new(vec![], 0, 0);
    assert_eq!(empty.total_pages, 1);
    assert!(!empty.has_next);
    assert_eq!(empty.prev_page, 0);
}
