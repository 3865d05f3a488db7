//! End-to-end paginator scenarios.
//!
//! Walks a 100-item collection through navigation, page size changes and a
//! shrinking item count, checking the derived bounds after each step.

use libpager_core::{PageState, Paginator, PaginatorConfig, PaginatorError, RangeError};

fn hundred() -> Paginator {
    Paginator::new(PaginatorConfig::with_item_count(100).page_size(10)).unwrap()
}

#[test]
fn test_initial_state() {
    let state = hundred().state();
    assert_eq!(state.first_item_index, 0);
    assert_eq!(state.last_item_index_on_page, 9);
    assert!(state.can_get_next);
    assert!(!state.can_get_prev);
    assert_eq!(state.last_page_index, 9);
}

#[test]
fn test_next_then_prev() {
    let mut p = hundred();
    assert!(p.next());
    let state = p.state();
    assert_eq!(state.page_index, 1);
    assert_eq!(state.first_item_index, 10);
    assert_eq!(state.last_item_index_on_page, 19);
    assert!(state.can_get_prev);

    assert!(p.prev());
    assert_eq!(p.state(), hundred().state());
}

#[test]
fn test_resize_from_middle() {
    let mut p = hundred();
    p.jump(4).unwrap();
    assert_eq!(p.first_item_index(), 40);

    p.set_page_size(7).unwrap();
    let state = p.state();
    assert_eq!(state.page_index, 5);
    assert_eq!(state.first_item_index, 35);
    assert_eq!(state.last_item_index_on_page, 41);
    assert_eq!(state.last_page_index, 14);
}

#[test]
fn test_filter_shrinks_collection() {
    let mut p = hundred();
    p.jump(9).unwrap();

    let state = p.recompute(15);
    assert_eq!(state.page_index, 1);
    assert_eq!(state.last_page_index, 1);
    assert_eq!(state.first_item_index, 10);
    assert_eq!(state.last_item_index_on_page, 14);
    assert!(!state.can_get_next);
    assert!(state.can_get_prev);
}

#[test]
fn test_empty_collection() {
    let mut p = Paginator::new(PaginatorConfig::with_item_count(0)).unwrap();
    let state = p.state();
    assert_eq!(state.first_item_index, 0);
    assert_eq!(state.last_item_index_on_page, 0);
    assert_eq!(state.last_item_index, 0);
    assert_eq!(state.last_page_index, 0);
    assert!(!state.can_get_next);
    assert!(!state.can_get_prev);

    assert!(!p.next());
    assert!(!p.prev());
    assert_eq!(p.state(), state);
}

#[test]
fn test_rejected_operations_leave_state() {
    let mut p = hundred();
    p.jump(3).unwrap();
    let before = p.state();

    assert_eq!(p.set_page_size(0), Err(RangeError::PageSize(0)));
    assert_eq!(p.state(), before);

    assert!(matches!(p.jump(-1), Err(RangeError::PageIndex { requested: -1, .. })));
    assert_eq!(p.state(), before);

    assert!(p.jump(10).is_err());
    assert_eq!(p.state(), before);
}

#[test]
fn test_errors_funnel_through_question_mark() {
    fn drive() -> Result<PageState, PaginatorError> {
        let mut p = Paginator::new(PaginatorConfig::with_item_count(30))?;
        p.set_page_size(5)?;
        p.jump(6)?;
        Ok(p.state())
    }

    assert_eq!(
        drive(),
        Err(PaginatorError::Range(RangeError::PageIndex {
            requested: 6,
            last_page_index: 5
        }))
    );
}

#[test]
fn test_page_index_stays_in_range() {
    // Every combination of count, size and operation keeps the invariant.
    for item_count in [0_i64, 1, 2, 9, 10, 11, 57, 100] {
        for page_size in [1_usize, 2, 3, 7, 10, 64] {
            let mut p =
                Paginator::new(PaginatorConfig::with_item_count(item_count).page_size(page_size)).unwrap();
            let check = |p: &Paginator| {
                let state = p.state();
                assert!(state.page_index <= state.last_page_index, "{state:?}");
                assert!(state.first_item_index <= state.last_item_index_on_page || item_count == 0);
            };

            p.last();
            check(&p);
            p.set_page_size(page_size + 3).unwrap();
            check(&p);
            p.next();
            check(&p);
            p.recompute(item_count / 2);
            check(&p);
            p.prev();
            check(&p);
            p.set_page_size(1).unwrap();
            check(&p);
        }
    }
}

#[test]
fn test_pages_reassemble_data() {
    for len in [0_usize, 1, 7, 10, 23, 100] {
        let data: Vec<usize> = (0..len).collect();
        for page_size in [1_usize, 3, 10, 11] {
            let mut p =
                Paginator::new(PaginatorConfig::with_item_count(len as i64).page_size(page_size)).unwrap();
            let mut joined = Vec::new();
            loop {
                joined.extend_from_slice(p.current_data(&data));
                if !p.next() {
                    break;
                }
            }
            assert_eq!(joined, data, "len {len}, page size {page_size}");
        }
    }
}

#[test]
fn test_page_size_change_keeps_anchor_visible() {
    let mut p = hundred();
    for (target, new_size) in [(3_i64, 7_usize), (2, 13), (5, 4), (0, 50), (1, 9)] {
        p.set_page_size(10).unwrap();
        p.jump(target).unwrap();
        let anchor = p.first_item_index();

        p.set_page_size(new_size).unwrap();
        let state = p.state();
        assert!(state.first_item_index <= anchor);
        assert!(anchor <= state.last_item_index_on_page);
    }
}
