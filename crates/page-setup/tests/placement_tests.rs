use page_setup::placement::{ColumnCount, column_count};
use page_setup::*;

const BINDINGS: [BindingSide; 3] = [BindingSide::Left, BindingSide::Right, BindingSide::Top];
const LAYOUTS: [SheetLayout; 2] = [SheetLayout::Simplex, SheetLayout::Duplex];

fn content(inside: &str, centered: &str, outside: &str) -> HeaderFooterContent {
    HeaderFooterContent {
        inside_aligned: inside.to_string(),
        centered_text: centered.to_string(),
        outside_aligned: outside.to_string(),
    }
}

fn all_contents() -> Vec<HeaderFooterContent> {
    let mut contents = Vec::new();
    for inside in ["", "Chapter 1"] {
        for centered in ["", "Title"] {
            for outside in ["", "12"] {
                contents.push(content(inside, centered, outside));
            }
        }
    }
    contents
}

#[test]
fn test_slots_are_complementary() {
    for binding in BINDINGS {
        for layout in LAYOUTS {
            for page_number in 1..=6 {
                let page = PageInfo::new(page_number, binding, layout);
                for content in all_contents() {
                    for auto_adjust in [true, false] {
                        let placement = resolve(&page, &content, auto_adjust);
                        assert_ne!(placement.left, placement.right);
                        assert_ne!(placement.left, Slot::Centered);
                        assert_ne!(placement.right, Slot::Centered);
                    }
                }
            }
        }
    }
}

#[test]
fn test_placement_depends_only_on_parity() {
    let empty = HeaderFooterContent::default();
    for binding in BINDINGS {
        for layout in LAYOUTS {
            for page_number in 1..=20 {
                let page = PageInfo::new(page_number, binding, layout);
                let two_later = PageInfo::new(page_number + 2, binding, layout);
                assert_eq!(
                    resolve(&page, &empty, true).right,
                    resolve(&two_later, &empty, true).right
                );
            }
        }
    }
}

#[test]
fn test_odd_duplex_right_binding() {
    let page = PageInfo::new(1, BindingSide::Right, SheetLayout::Duplex);
    let placement = resolve(&page, &HeaderFooterContent::default(), true);
    assert_eq!(placement.right, Slot::InsideAligned);
    assert_eq!(placement.left, Slot::OutsideAligned);
}

#[test]
fn test_even_duplex_right_binding() {
    let page = PageInfo::new(2, BindingSide::Right, SheetLayout::Duplex);
    let placement = resolve(&page, &HeaderFooterContent::default(), true);
    assert_eq!(placement.right, Slot::OutsideAligned);
    assert_eq!(placement.left, Slot::InsideAligned);
}

#[test]
fn test_left_binding_mirrors_right_binding() {
    for layout in LAYOUTS {
        for page_number in 1..=4 {
            let left = PageInfo::new(page_number, BindingSide::Left, layout);
            let right = PageInfo::new(page_number, BindingSide::Right, layout);
            let empty = HeaderFooterContent::default();
            assert_eq!(resolve(&left, &empty, true).right, resolve(&right, &empty, true).left);
        }
    }
}

#[test]
fn test_column_collapse() {
    assert_eq!(column_count(&content("", "", ""), true), ColumnCount::ONE);
    assert_eq!(column_count(&content("", "Title", ""), true), ColumnCount::ONE);
    assert_eq!(column_count(&content("", "", "12"), true), ColumnCount::TWO);
    assert_eq!(column_count(&content("Chapter 1", "", ""), true), ColumnCount::TWO);
    assert_eq!(column_count(&content("Chapter 1", "Title", "12"), true), ColumnCount::THREE);
    assert_eq!(column_count(&content("Chapter 1", "Title", ""), true), ColumnCount::THREE);
}

#[test]
fn test_fixed_columns_without_auto_adjust() {
    for content in all_contents() {
        assert_eq!(column_count(&content, false).get(), 3);
    }
}

#[test]
fn test_header_footer_uses_preview_page() {
    let footer = HeaderFooter {
        content: content("", "Title", "12"),
        auto_adjust_columns: true,
    };
    let mut preview = PreviewPage::new(BindingSide::Left, SheetLayout::Duplex);

    let first = footer.placement(&preview);
    preview.turn_forward();
    let second = footer.placement(&preview);

    assert_eq!(first.columns.get(), 3);
    assert_eq!(first.right, Slot::OutsideAligned);
    assert_eq!(second.right, Slot::InsideAligned);
}
