//! Size fitting and named-size matching

use crate::types::{Length, PaperSize, PublicationPageSize};

/// Anything the size selectors list: a named width/height pair
pub trait SizeEntry {
    fn width(&self) -> Length;
    fn height(&self) -> Length;

    /// Sentinel entries ("Custom", "Full Page") have no size
    fn has_size(&self) -> bool {
        !(self.width().is_zero() && self.height().is_zero())
    }
}

impl SizeEntry for PaperSize {
    fn width(&self) -> Length {
        self.width
    }

    fn height(&self) -> Length {
        self.height
    }
}

impl SizeEntry for PublicationPageSize {
    fn width(&self) -> Length {
        self.width
    }

    fn height(&self) -> Length {
        self.height
    }
}

/// Whether the publication page can be placed on the paper, in either
/// orientation. A Full Page publication always fits.
pub fn fits(pub_page: &PublicationPageSize, paper: &PaperSize) -> bool {
    if pub_page.is_full_page() {
        return true;
    }

    let portrait = pub_page.width <= paper.width && pub_page.height <= paper.height;
    let rotated = pub_page.width <= paper.height && pub_page.height <= paper.width;
    portrait || rotated
}

/// Find the entry whose dimensions are within `tolerance` of the given
/// width and height, as listed or turned on its side.
pub fn find_size_by_dimensions<'a, S: SizeEntry>(
    width: Length,
    height: Length,
    known: &'a [S],
    tolerance: Length,
) -> Option<&'a S> {
    let close = |a: Length, b: Length| a.abs_diff(b) <= tolerance;

    known.iter().find(|entry| {
        entry.has_size()
            && ((close(entry.width(), width) && close(entry.height(), height))
                || (close(entry.height(), width) && close(entry.width(), height)))
    })
}

/// Keep the paper selector in sync after free-form width/height edits.
///
/// Returns the matching known size, or the "Custom" sentinel.
pub fn match_paper_size_by_dimensions(
    width: Length,
    height: Length,
    known: &[PaperSize],
    tolerance: Length,
) -> PaperSize {
    find_size_by_dimensions(width, height, known, tolerance)
        .cloned()
        .unwrap_or_else(PaperSize::custom)
}

/// Publication page counterpart of [`match_paper_size_by_dimensions`].
///
/// Returns the "Full Page" sentinel when nothing matches.
pub fn match_publication_page_size_by_dimensions(
    width: Length,
    height: Length,
    known: &[PublicationPageSize],
    tolerance: Length,
) -> PublicationPageSize {
    find_size_by_dimensions(width, height, known, tolerance)
        .cloned()
        .unwrap_or_else(PublicationPageSize::full_page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_MATCH_TOLERANCE;

    fn inches(v: f64) -> Length {
        Length::from_inches(v)
    }

    #[test]
    fn test_full_page_always_fits() {
        let paper = PaperSize::custom_with(inches(1.0), inches(1.0));
        assert!(fits(&PublicationPageSize::full_page(), &paper));
    }

    #[test]
    fn test_fits_only_when_rotated() {
        let paper = PaperSize::letter();
        let wide = PublicationPageSize::new("Wide", inches(10.0), inches(8.0));
        assert!(fits(&wide, &paper));

        let too_wide = PublicationPageSize::new("Too wide", inches(11.5), inches(8.0));
        assert!(!fits(&too_wide, &paper));
    }

    #[test]
    fn test_match_within_tolerance() {
        let known = PaperSize::standard_sizes();
        let tolerance = Length::new(DEFAULT_MATCH_TOLERANCE);

        let nearly_letter = inches(8.5) + Length::new(4_000);
        let matched = match_paper_size_by_dimensions(nearly_letter, inches(11.0), &known, tolerance);
        assert_eq!(matched.name, "Letter");

        let off_letter = inches(8.5) + Length::new(6_000);
        let matched = match_paper_size_by_dimensions(off_letter, inches(11.0), &known, tolerance);
        assert!(matched.is_custom());
    }

    #[test]
    fn test_sentinels_never_match() {
        let known = vec![PaperSize::custom(), PaperSize::letter()];
        let found = find_size_by_dimensions(Length::ZERO, Length::ZERO, &known, Length::new(10));
        assert!(found.is_none());

        let pages = PublicationPageSize::standard_sizes();
        let matched = match_publication_page_size_by_dimensions(
            Length::ZERO,
            Length::ZERO,
            &pages,
            Length::new(DEFAULT_MATCH_TOLERANCE),
        );
        assert!(matched.is_full_page());
    }
}
