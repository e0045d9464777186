#![cfg(test)]

use crate::cursor::LayoutCursor;
use crate::LayoutError;
use folio_style::PageGeometry;

#[test]
fn test_starts_at_top_of_first_page() {
    let page = PageGeometry::a4();
    let cursor = LayoutCursor::new(&page);
    assert_eq!(cursor.page_index(), 1);
    assert_eq!(cursor.offset(), page.margin_top);
    assert!(cursor.is_at_top());
}

#[test]
fn test_has_space_is_inclusive_of_bottom_margin() {
    let page = PageGeometry::a4();
    let cursor = LayoutCursor::new(&page);
    let height = page.content_height();
    assert!(cursor.has_space(height));
    assert!(!cursor.has_space(height + 0.1));
}

#[test]
fn test_advance_is_monotonic_and_returns_a_new_value() {
    let page = PageGeometry::a4();
    let start = LayoutCursor::new(&page);
    let moved = start.advance(12.5).unwrap();
    assert_eq!(start.offset(), page.margin_top);
    assert!((moved.offset() - (page.margin_top + 12.5)).abs() < 1e-5);
    assert_eq!(moved.advance(0.0).unwrap(), moved);
}

#[test]
fn test_negative_or_nan_advance_is_rejected() {
    let cursor = LayoutCursor::new(&PageGeometry::a4());
    assert_eq!(cursor.advance(-1.0), Err(LayoutError::InvalidAdvance(-1.0)));
    assert!(cursor.advance(f32::NAN).is_err());
}

#[test]
fn test_break_page_increments_by_one_and_resets_offset() {
    let page = PageGeometry::a4();
    let cursor = LayoutCursor::new(&page).advance(100.0).unwrap();
    let next = cursor.break_page();
    assert_eq!(next.page_index(), 2);
    assert_eq!(next.offset(), page.margin_top);
    assert_eq!(next.break_page().page_index(), 3);
}

#[test]
fn test_reserve_breaks_only_when_needed() {
    let page = PageGeometry::a4();
    let near_bottom = LayoutCursor::new(&page)
        .advance(page.content_height() - 5.0)
        .unwrap();

    assert_eq!(near_bottom.reserve(4.0), near_bottom);
    let moved = near_bottom.reserve(6.0);
    assert_eq!(moved.page_index(), 2);
    assert!(moved.is_at_top());
}

#[test]
fn test_reserve_accepts_overflow_at_page_top() {
    let page = PageGeometry::a4();
    let cursor = LayoutCursor::new(&page);
    let reserved = cursor.reserve(page.height * 2.0);
    assert_eq!(reserved, cursor);
}
