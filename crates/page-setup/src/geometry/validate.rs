//! Margin and gutter validation

use std::fmt;

use crate::types::{BindingSide, Length, Margins, PaperSize, PublicationPageSize, Result, SetupError};

use super::fits;

/// Outcome of validating a page setup.
///
/// These are user-input conditions the user fixes by editing a field, so
/// validation returns them as data instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorKind {
    #[default]
    NoError,
    /// The publication page does not fit the paper in either orientation
    PubPageTooBig,
    /// Top and bottom margins leave no printable strip
    VerticalMarginsTooBig,
    /// Inside and outside margins leave no printable strip
    HorizontalMarginsTooBig,
    /// Gutter plus publication page exceed the paper along the binding axis
    GutterTooBig,
}

impl ErrorKind {
    pub fn is_ok(self) -> bool {
        self == ErrorKind::NoError
    }

    /// Lift a failed validation into an error for `?` propagation
    pub fn into_result(self) -> Result<()> {
        match self {
            ErrorKind::NoError => Ok(()),
            kind => Err(SetupError::Geometry(kind)),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ErrorKind::NoError => "no error",
            ErrorKind::PubPageTooBig => "the publication page is larger than the paper",
            ErrorKind::VerticalMarginsTooBig => "the top and bottom margins are too large",
            ErrorKind::HorizontalMarginsTooBig => "the inside and outside margins are too large",
            ErrorKind::GutterTooBig => "the gutter is too large for the publication page",
        };
        f.write_str(message)
    }
}

/// Check paper, publication page, margins and gutter for consistency.
///
/// Checks run in order and the first failure wins:
/// 1. The publication page must fit the paper.
/// 2. For a sized publication page, gutter plus page along the binding
///    axis must fit the paper.
/// 3. Margins (plus the gutter, for Full Page) must leave at least
///    `min_printable_margin` of paper vertically, then horizontally.
pub fn validate(
    pub_page: &PublicationPageSize,
    paper: &PaperSize,
    margins: &Margins,
    gutter: Length,
    binding_side: BindingSide,
    min_printable_margin: Length,
) -> ErrorKind {
    let kind = check(pub_page, paper, margins, gutter, binding_side, min_printable_margin);
    if !kind.is_ok() {
        log::debug!(
            "page geometry rejected: {kind} (paper {}x{}, page {:?}, gutter {gutter})",
            paper.width,
            paper.height,
            pub_page.name
        );
    }
    kind
}

fn check(
    pub_page: &PublicationPageSize,
    paper: &PaperSize,
    margins: &Margins,
    gutter: Length,
    binding_side: BindingSide,
    min_printable_margin: Length,
) -> ErrorKind {
    if !fits(pub_page, paper) {
        return ErrorKind::PubPageTooBig;
    }

    let full_page = pub_page.is_full_page();
    let vertical_binding = binding_side.binds_vertically();

    if !full_page {
        let (page_extent, paper_extent) = if vertical_binding {
            (pub_page.height, paper.height)
        } else {
            (pub_page.width, paper.width)
        };
        if gutter + page_extent > paper_extent {
            return ErrorKind::GutterTooBig;
        }
    }

    let mut vertical = margins.vertical();
    let mut horizontal = margins.horizontal();
    if full_page {
        if vertical_binding {
            vertical += gutter;
        } else {
            horizontal += gutter;
        }
    }

    if paper.height < vertical + min_printable_margin {
        return ErrorKind::VerticalMarginsTooBig;
    }
    if paper.width < horizontal + min_printable_margin {
        return ErrorKind::HorizontalMarginsTooBig;
    }

    ErrorKind::NoError
}
