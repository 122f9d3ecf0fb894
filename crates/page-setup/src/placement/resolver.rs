//! Left/right slot and column-count decisions

use super::{PageInfo, PageInfoProvider};
use crate::types::{BindingSide, SheetLayout};

/// One of the three text slots of a header or footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    InsideAligned,
    Centered,
    OutsideAligned,
}

/// Physical side of the page as seen by the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalSide {
    Left,
    Right,
}

/// Plain text of the three header/footer slots. Only presence matters here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderFooterContent {
    pub inside_aligned: String,
    pub centered_text: String,
    pub outside_aligned: String,
}

impl HeaderFooterContent {
    pub fn text(&self, slot: Slot) -> &str {
        match slot {
            Slot::InsideAligned => &self.inside_aligned,
            Slot::Centered => &self.centered_text,
            Slot::OutsideAligned => &self.outside_aligned,
        }
    }

    pub fn has_content(&self, slot: Slot) -> bool {
        !self.text(slot).is_empty()
    }
}

/// Number of header/footer table columns, always 1 to 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnCount(u8);

impl ColumnCount {
    pub const ONE: ColumnCount = ColumnCount(1);
    pub const TWO: ColumnCount = ColumnCount(2);
    pub const THREE: ColumnCount = ColumnCount(3);

    /// Panics outside 1..=3
    pub fn new(columns: u8) -> Self {
        assert!((1..=3).contains(&columns), "column count must be 1, 2 or 3, got {columns}");
        Self(columns)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Where each slot of a header or footer goes on one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub left: Slot,
    pub right: Slot,
    pub columns: ColumnCount,
}

impl Placement {
    /// Table cells from left to right
    pub fn cells(&self) -> Vec<Slot> {
        match self.columns.get() {
            1 => vec![Slot::Centered],
            2 => vec![self.left, self.right],
            _ => vec![self.left, Slot::Centered, self.right],
        }
    }
}

/// A header or footer: its content plus the column adjustment setting
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderFooter {
    pub content: HeaderFooterContent,
    /// Drop empty columns instead of always using three
    pub auto_adjust_columns: bool,
}

impl Default for HeaderFooter {
    fn default() -> Self {
        Self {
            content: HeaderFooterContent::default(),
            auto_adjust_columns: true,
        }
    }
}

impl HeaderFooter {
    pub fn placement(&self, page: &impl PageInfoProvider) -> Placement {
        resolve(page, &self.content, self.auto_adjust_columns)
    }
}

/// Which slot renders in the right-hand cell.
///
/// Odd pages and simplex sheets put the inside slot on the right for right
/// binding; even duplex pages mirror that. Top binding has no layout of its
/// own and follows right binding.
pub fn right_slot(page: &PageInfo) -> Slot {
    let odd_or_simplex = page.is_odd() || page.sheet_layout == SheetLayout::Simplex;
    let right_bound = matches!(page.binding_side, BindingSide::Right | BindingSide::Top);

    match (odd_or_simplex, right_bound) {
        (true, true) | (false, false) => Slot::InsideAligned,
        (true, false) | (false, true) => Slot::OutsideAligned,
    }
}

/// The other member of the inside/outside pair
pub fn complementary_slot(slot: Slot) -> Slot {
    match slot {
        Slot::InsideAligned => Slot::OutsideAligned,
        Slot::OutsideAligned => Slot::InsideAligned,
        Slot::Centered => panic!("the centered slot has no complement"),
    }
}

/// Physical side of the binding (inside) edge on this page
pub fn inside_edge(page: &PageInfo) -> HorizontalSide {
    match right_slot(page) {
        Slot::InsideAligned => HorizontalSide::Right,
        _ => HorizontalSide::Left,
    }
}

/// Columns needed for the content. Center-only content uses one column,
/// content without a center uses two.
pub fn column_count(content: &HeaderFooterContent, auto_adjust: bool) -> ColumnCount {
    if !auto_adjust {
        return ColumnCount::THREE;
    }

    let has_aligned =
        content.has_content(Slot::InsideAligned) || content.has_content(Slot::OutsideAligned);
    if !has_aligned {
        ColumnCount::ONE
    } else if !content.has_content(Slot::Centered) {
        ColumnCount::TWO
    } else {
        ColumnCount::THREE
    }
}

/// Decide the left slot, right slot and column count for one page
pub fn resolve(
    page: &impl PageInfoProvider,
    content: &HeaderFooterContent,
    auto_adjust: bool,
) -> Placement {
    let info = page.page_info();
    let right = right_slot(&info);
    let placement = Placement {
        left: complementary_slot(right),
        right,
        columns: column_count(content, auto_adjust),
    };
    log::trace!(
        "page {} ({:?}, {:?}): {:?}",
        info.page_number(),
        info.binding_side,
        info.sheet_layout,
        placement
    );
    placement
}
