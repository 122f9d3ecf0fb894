//! Text block placement on a page

use crate::placement::{HorizontalSide, PageInfo, inside_edge};
use crate::types::{Length, Rect};

use super::PageGeometry;

/// Calculate the text block for a page, inside margins and gutter.
///
/// The rectangle is relative to the top-left corner of the page box: the
/// publication page, or the paper for Full Page. Inside and outside margins
/// land on the left or right depending on the page's binding edge. The
/// gutter only applies to Full Page publications, on the binding edge.
///
/// Returns `None` when the geometry does not validate or the margins do not
/// fit the page box.
pub fn content_area(geometry: &PageGeometry, page: &PageInfo) -> Option<Rect> {
    if !geometry.validate().is_ok() {
        return None;
    }

    let full_page = geometry.page_size.is_full_page();
    let (box_width, box_height) = if full_page {
        (geometry.paper.width, geometry.paper.height)
    } else {
        (geometry.page_size.width, geometry.page_size.height)
    };

    let margins = &geometry.margins;
    let gutter = if full_page { geometry.gutter } else { Length::ZERO };

    let mut top = margins.top;
    let mut inside = margins.inside;
    if geometry.binding_side.binds_vertically() {
        top += gutter;
    } else {
        inside += gutter;
    }

    let (left, right) = match inside_edge(page) {
        HorizontalSide::Left => (inside, margins.outside),
        HorizontalSide::Right => (margins.outside, inside),
    };

    let width = box_width.checked_sub(left + right)?;
    let height = box_height.checked_sub(top + margins.bottom)?;
    Some(Rect::new(left, top, width, height))
}
