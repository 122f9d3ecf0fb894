//! Page geometry value and its validated editor

use crate::constants::{DEFAULT_MATCH_TOLERANCE, MIN_PRINTABLE_MARGIN, UNITS_PER_INCH};
use crate::guard::UpdateGuard;
use crate::types::{
    BindingSide, Length, Margins, PaperSize, PublicationPageSize, SheetLayout,
};

use super::{
    ErrorKind, match_paper_size_by_dimensions, match_publication_page_size_by_dimensions,
    validate,
};

/// Complete paper/page/margin state of a publication
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageGeometry {
    pub paper: PaperSize,
    pub page_size: PublicationPageSize,
    pub margins: Margins,
    /// Extra space along the binding edge
    pub gutter: Length,
    pub binding_side: BindingSide,
    pub sheet_layout: SheetLayout,
    /// Distance of the header from the top edge; never exceeds the top margin
    pub header_inset: Length,
    /// Distance of the footer from the bottom edge; never exceeds the bottom margin
    pub footer_inset: Length,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            paper: PaperSize::letter(),
            page_size: PublicationPageSize::full_page(),
            margins: Margins::default(),
            gutter: Length::ZERO,
            binding_side: BindingSide::default(),
            sheet_layout: SheetLayout::default(),
            header_inset: Length::new(UNITS_PER_INCH / 2),
            footer_inset: Length::new(UNITS_PER_INCH / 2),
        }
    }
}

impl PageGeometry {
    /// Validate with the standard minimum printable strip
    pub fn validate(&self) -> ErrorKind {
        self.validate_with(Length::new(MIN_PRINTABLE_MARGIN))
    }

    pub fn validate_with(&self, min_printable_margin: Length) -> ErrorKind {
        validate(
            &self.page_size,
            &self.paper,
            &self.margins,
            self.gutter,
            self.binding_side,
            min_printable_margin,
        )
    }
}

/// Session-local editor for a [`PageGeometry`].
///
/// Setters keep the named-size selections in sync with free-form dimensions
/// and keep the header/footer insets within the top/bottom margins. Every
/// setter returns the resulting geometry so callers can diff it.
#[derive(Debug)]
pub struct GeometryEditor {
    geometry: PageGeometry,
    known_papers: Vec<PaperSize>,
    known_page_sizes: Vec<PublicationPageSize>,
    tolerance: Length,
    guard: UpdateGuard,
}

impl GeometryEditor {
    pub fn new(geometry: PageGeometry) -> Self {
        Self::with_catalogs(
            geometry,
            PaperSize::standard_sizes(),
            PublicationPageSize::standard_sizes(),
        )
    }

    pub fn with_catalogs(
        geometry: PageGeometry,
        known_papers: Vec<PaperSize>,
        known_page_sizes: Vec<PublicationPageSize>,
    ) -> Self {
        Self {
            geometry,
            known_papers,
            known_page_sizes,
            tolerance: Length::new(DEFAULT_MATCH_TOLERANCE),
            guard: UpdateGuard::new(),
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn into_geometry(self) -> PageGeometry {
        self.geometry
    }

    pub fn validate(&self) -> ErrorKind {
        self.geometry.validate()
    }

    // -------------------------------------------------------------------------
    // Paper and publication page
    // -------------------------------------------------------------------------

    /// Pick a paper size from the selector
    pub fn set_paper(&mut self, paper: PaperSize) -> &PageGeometry {
        self.geometry.paper = paper;
        &self.geometry
    }

    /// Free-form paper dimensions. The name follows whichever known size
    /// (portrait or rotated) lies within tolerance, or becomes "Custom".
    pub fn set_paper_dimensions(&mut self, width: Length, height: Length) -> &PageGeometry {
        let matched =
            match_paper_size_by_dimensions(width, height, &self.known_papers, self.tolerance);
        log::debug!("paper {width}x{height} matched {:?}", matched.name);
        self.geometry.paper = PaperSize::new(matched.name, width, height);
        &self.geometry
    }

    /// Swap paper width and height (portrait <-> landscape)
    pub fn rotate_paper(&mut self) -> &PageGeometry {
        self.geometry.paper = self.geometry.paper.rotated();
        &self.geometry
    }

    pub fn set_page_size(&mut self, page_size: PublicationPageSize) -> &PageGeometry {
        self.geometry.page_size = page_size;
        &self.geometry
    }

    /// Free-form publication page dimensions. Zero by zero means Full Page.
    pub fn set_page_dimensions(&mut self, width: Length, height: Length) -> &PageGeometry {
        if width.is_zero() && height.is_zero() {
            self.geometry.page_size = PublicationPageSize::full_page();
            return &self.geometry;
        }

        let matched = match_publication_page_size_by_dimensions(
            width,
            height,
            &self.known_page_sizes,
            self.tolerance,
        );
        let name = if matched.is_full_page() {
            "Custom".to_string()
        } else {
            matched.name
        };
        self.geometry.page_size = PublicationPageSize::new(name, width, height);
        &self.geometry
    }

    // -------------------------------------------------------------------------
    // Binding
    // -------------------------------------------------------------------------

    pub fn set_gutter(&mut self, gutter: Length) -> &PageGeometry {
        self.geometry.gutter = gutter;
        &self.geometry
    }

    pub fn set_binding_side(&mut self, binding_side: BindingSide) -> &PageGeometry {
        self.geometry.binding_side = binding_side;
        &self.geometry
    }

    pub fn set_sheet_layout(&mut self, sheet_layout: SheetLayout) -> &PageGeometry {
        self.geometry.sheet_layout = sheet_layout;
        &self.geometry
    }

    // -------------------------------------------------------------------------
    // Margins and header/footer insets
    // -------------------------------------------------------------------------

    /// Apply all four margins, going through the inset coupling
    pub fn set_margins(&mut self, margins: Margins) -> &PageGeometry {
        self.geometry.margins.inside = margins.inside;
        self.geometry.margins.outside = margins.outside;
        self.set_top_margin(margins.top);
        self.set_bottom_margin(margins.bottom)
    }

    pub fn set_inside_margin(&mut self, inside: Length) -> &PageGeometry {
        self.geometry.margins.inside = inside;
        &self.geometry
    }

    pub fn set_outside_margin(&mut self, outside: Length) -> &PageGeometry {
        self.geometry.margins.outside = outside;
        &self.geometry
    }

    pub fn set_top_margin(&mut self, top: Length) -> &PageGeometry {
        self.geometry.margins.top = top;
        self.top_margin_changed();
        &self.geometry
    }

    pub fn set_bottom_margin(&mut self, bottom: Length) -> &PageGeometry {
        self.geometry.margins.bottom = bottom;
        self.bottom_margin_changed();
        &self.geometry
    }

    pub fn set_header_inset(&mut self, inset: Length) -> &PageGeometry {
        self.geometry.header_inset = inset;
        self.header_inset_changed();
        &self.geometry
    }

    pub fn set_footer_inset(&mut self, inset: Length) -> &PageGeometry {
        self.geometry.footer_inset = inset;
        self.footer_inset_changed();
        &self.geometry
    }

    /// Largest header inset the current top margin allows
    pub fn header_inset_max(&self) -> Length {
        self.geometry.margins.top
    }

    /// Largest footer inset the current bottom margin allows
    pub fn footer_inset_max(&self) -> Length {
        self.geometry.margins.bottom
    }

    fn top_margin_changed(&mut self) {
        let Some(_token) = self.guard.try_begin() else {
            return;
        };
        let top = self.geometry.margins.top;
        if self.geometry.header_inset > top {
            log::debug!("header inset capped to top margin {top}");
            self.set_header_inset(top);
        }
    }

    fn bottom_margin_changed(&mut self) {
        let Some(_token) = self.guard.try_begin() else {
            return;
        };
        let bottom = self.geometry.margins.bottom;
        if self.geometry.footer_inset > bottom {
            log::debug!("footer inset capped to bottom margin {bottom}");
            self.set_footer_inset(bottom);
        }
    }

    fn header_inset_changed(&mut self) {
        let Some(_token) = self.guard.try_begin() else {
            return;
        };
        let inset = self.geometry.header_inset;
        if inset > self.geometry.margins.top {
            log::debug!("top margin raised to header inset {inset}");
            self.set_top_margin(inset);
        }
    }

    fn footer_inset_changed(&mut self) {
        let Some(_token) = self.guard.try_begin() else {
            return;
        };
        let inset = self.geometry.footer_inset;
        if inset > self.geometry.margins.bottom {
            log::debug!("bottom margin raised to footer inset {inset}");
            self.set_bottom_margin(inset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::EditState;

    fn inches(v: f64) -> Length {
        Length::from_inches(v)
    }

    #[test]
    fn test_raising_header_inset_raises_top_margin() {
        let mut editor = GeometryEditor::new(PageGeometry::default());
        let geometry = editor.set_header_inset(inches(1.5));
        assert_eq!(geometry.header_inset, inches(1.5));
        assert_eq!(geometry.margins.top, inches(1.5));
        assert_eq!(editor.guard.state(), EditState::Idle);
    }

    #[test]
    fn test_lowering_bottom_margin_caps_footer_inset() {
        let mut editor = GeometryEditor::new(PageGeometry::default());
        let geometry = editor.set_bottom_margin(inches(0.25));
        assert_eq!(geometry.margins.bottom, inches(0.25));
        assert_eq!(geometry.footer_inset, inches(0.25));
        assert_eq!(editor.footer_inset_max(), inches(0.25));
    }

    #[test]
    fn test_inset_within_margin_leaves_margin_alone() {
        let mut editor = GeometryEditor::new(PageGeometry::default());
        editor.set_footer_inset(inches(0.75));
        assert_eq!(editor.geometry().margins.bottom, inches(1.0));
        editor.set_top_margin(inches(2.0));
        assert_eq!(editor.geometry().header_inset, inches(0.5));
    }

    #[test]
    fn test_paper_dimensions_track_named_size() {
        let mut editor = GeometryEditor::new(PageGeometry::default());
        assert_eq!(editor.set_paper_dimensions(inches(11.0), inches(8.5)).paper.name, "Letter");
        assert!(editor.set_paper_dimensions(inches(9.0), inches(9.0)).paper.is_custom());
        assert_eq!(editor.geometry().paper.width, inches(9.0));
    }

    #[test]
    fn test_zero_page_dimensions_mean_full_page() {
        let mut editor = GeometryEditor::new(PageGeometry::default());
        assert_eq!(editor.set_page_dimensions(inches(6.0), inches(9.0)).page_size.name, "Trade");
        assert!(editor.set_page_dimensions(Length::ZERO, Length::ZERO).page_size.is_full_page());
    }
}
