//! Field labels for header/footer slots, keyed by dialog context

use super::Slot;
use crate::types::{BindingSide, SheetLayout};

/// Header or footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderFooterKind {
    Header,
    Footer,
}

/// Wording used to describe the aligned slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelContext {
    /// Bound publication: slots are named after the binding edge
    Publication,
    /// Single-sided, left-bound sheets: inside is always on the left
    SingleSheet,
}

impl LabelContext {
    pub fn for_layout(binding_side: BindingSide, sheet_layout: SheetLayout) -> Self {
        match (binding_side, sheet_layout) {
            (BindingSide::Left, SheetLayout::Simplex) => LabelContext::SingleSheet,
            _ => LabelContext::Publication,
        }
    }
}

/// Field labels for one header or footer in one context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotLabels {
    pub inside: &'static str,
    pub centered: &'static str,
    pub outside: &'static str,
    pub inset: &'static str,
}

impl SlotLabels {
    pub fn for_context(context: LabelContext, kind: HeaderFooterKind) -> Self {
        let (inside, outside) = match context {
            LabelContext::Publication => ("Inside aligned", "Outside aligned"),
            LabelContext::SingleSheet => ("Left aligned", "Right aligned"),
        };
        let inset = match kind {
            HeaderFooterKind::Header => "Distance from top edge",
            HeaderFooterKind::Footer => "Distance from bottom edge",
        };

        Self {
            inside,
            centered: "Centered",
            outside,
            inset,
        }
    }

    pub fn label(&self, slot: Slot) -> &'static str {
        match slot {
            Slot::InsideAligned => self.inside,
            Slot::Centered => self.centered,
            Slot::OutsideAligned => self.outside,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sheet_wording() {
        let context = LabelContext::for_layout(BindingSide::Left, SheetLayout::Simplex);
        let labels = SlotLabels::for_context(context, HeaderFooterKind::Footer);
        assert_eq!(labels.label(Slot::InsideAligned), "Left aligned");
        assert_eq!(labels.label(Slot::OutsideAligned), "Right aligned");
        assert_eq!(labels.inset, "Distance from bottom edge");
    }

    #[test]
    fn test_right_bound_simplex_keeps_publication_wording() {
        let context = LabelContext::for_layout(BindingSide::Right, SheetLayout::Simplex);
        assert_eq!(context, LabelContext::Publication);
        let labels = SlotLabels::for_context(context, HeaderFooterKind::Header);
        assert_eq!(labels.label(Slot::InsideAligned), "Inside aligned");
    }
}
