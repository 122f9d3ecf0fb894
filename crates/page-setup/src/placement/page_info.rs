use crate::geometry::PageGeometry;
use crate::types::{BindingSide, SheetLayout};

/// What the placement resolver needs to know about a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageInfo {
    page_number: u32,
    pub binding_side: BindingSide,
    pub sheet_layout: SheetLayout,
}

impl PageInfo {
    /// Panics when `page_number` is 0; page numbers are 1-based.
    pub fn new(page_number: u32, binding_side: BindingSide, sheet_layout: SheetLayout) -> Self {
        assert!(page_number >= 1, "page numbers start at 1");
        Self {
            page_number,
            binding_side,
            sheet_layout,
        }
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn is_odd(&self) -> bool {
        self.page_number % 2 == 1
    }
}

/// Source of the page currently being previewed or rendered
pub trait PageInfoProvider {
    fn page_info(&self) -> PageInfo;
}

impl PageInfoProvider for PageInfo {
    fn page_info(&self) -> PageInfo {
        *self
    }
}

/// A synthetic page used by setup dialogs before any real page exists.
///
/// It follows the binding and sheet layout of the geometry being edited
/// and can be turned forward and back to preview both parities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewPage {
    page_number: u32,
    binding_side: BindingSide,
    sheet_layout: SheetLayout,
}

impl PreviewPage {
    pub fn new(binding_side: BindingSide, sheet_layout: SheetLayout) -> Self {
        Self {
            page_number: 1,
            binding_side,
            sheet_layout,
        }
    }

    pub fn from_geometry(geometry: &PageGeometry) -> Self {
        Self::new(geometry.binding_side, geometry.sheet_layout)
    }

    /// Jump to a specific page. Panics when `page_number` is 0.
    pub fn at(mut self, page_number: u32) -> Self {
        assert!(page_number >= 1, "page numbers start at 1");
        self.page_number = page_number;
        self
    }

    pub fn turn_forward(&mut self) {
        self.page_number += 1;
    }

    /// Turn back one page, staying on page 1 at the start
    pub fn turn_back(&mut self) {
        self.page_number = (self.page_number - 1).max(1);
    }

    pub fn follow_geometry(&mut self, geometry: &PageGeometry) {
        self.binding_side = geometry.binding_side;
        self.sheet_layout = geometry.sheet_layout;
    }
}

impl PageInfoProvider for PreviewPage {
    fn page_info(&self) -> PageInfo {
        PageInfo::new(self.page_number, self.binding_side, self.sheet_layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_page_turns() {
        let mut preview = PreviewPage::new(BindingSide::Left, SheetLayout::Duplex);
        assert_eq!(preview.page_info().page_number(), 1);
        preview.turn_back();
        assert_eq!(preview.page_info().page_number(), 1);
        preview.turn_forward();
        assert!(!preview.page_info().is_odd());
    }

    #[test]
    fn test_preview_follows_geometry() {
        let mut preview = PreviewPage::new(BindingSide::Left, SheetLayout::Duplex).at(4);
        let geometry = PageGeometry {
            binding_side: BindingSide::Right,
            sheet_layout: SheetLayout::Simplex,
            ..Default::default()
        };
        preview.follow_geometry(&geometry);
        let info = preview.page_info();
        assert_eq!(info.page_number(), 4);
        assert_eq!(info.binding_side, BindingSide::Right);
        assert_eq!(info.sheet_layout, SheetLayout::Simplex);
    }

    #[test]
    #[should_panic(expected = "page numbers start at 1")]
    fn test_page_zero_panics() {
        PageInfo::new(0, BindingSide::Left, SheetLayout::Duplex);
    }
}
