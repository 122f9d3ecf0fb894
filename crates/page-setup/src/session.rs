//! Page setup presets and the edit session that produces them

use crate::geometry::{ErrorKind, GeometryEditor, PageGeometry};
use crate::placement::{HeaderFooter, HeaderFooterKind, Placement, PreviewPage};
use crate::scaling::{TextScaling, TextScalingModel};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Committed page setup of a publication
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageSetup {
    pub geometry: PageGeometry,
    pub text: TextScaling,
    pub header: HeaderFooter,
    pub footer: HeaderFooter,
}

impl PageSetup {
    /// Load a page setup preset from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let setup = serde_json::from_slice(&bytes)
            .map_err(|e| SetupError::Config(format!("Failed to parse preset: {}", e)))?;
        Ok(setup)
    }

    /// Save the page setup preset to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SetupError::Config(format!("Failed to serialize preset: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    pub fn validate(&self) -> ErrorKind {
        self.geometry.validate()
    }

    pub fn header_footer(&self, kind: HeaderFooterKind) -> &HeaderFooter {
        match kind {
            HeaderFooterKind::Header => &self.header,
            HeaderFooterKind::Footer => &self.footer,
        }
    }
}

/// A group of related page setup fields, for deciding what to persist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeGroup {
    Paper,
    PageSize,
    /// Margins, gutter and header/footer insets
    Margins,
    /// Binding side and sheet layout
    Binding,
    Text,
    Header,
    Footer,
}

/// List the field groups that differ between two page setups
pub fn diff(before: &PageSetup, after: &PageSetup) -> Vec<ChangeGroup> {
    let (a, b) = (&before.geometry, &after.geometry);
    let checks = [
        (ChangeGroup::Paper, a.paper != b.paper),
        (ChangeGroup::PageSize, a.page_size != b.page_size),
        (
            ChangeGroup::Margins,
            a.margins != b.margins
                || a.gutter != b.gutter
                || a.header_inset != b.header_inset
                || a.footer_inset != b.footer_inset,
        ),
        (
            ChangeGroup::Binding,
            a.binding_side != b.binding_side || a.sheet_layout != b.sheet_layout,
        ),
        (ChangeGroup::Text, before.text != after.text),
        (ChangeGroup::Header, before.header != after.header),
        (ChangeGroup::Footer, before.footer != after.footer),
    ];

    checks
        .into_iter()
        .filter_map(|(group, changed)| changed.then_some(group))
        .collect()
}

/// An open page setup dialog.
///
/// Edits only touch the session. The seed setup is left alone until the
/// caller commits, and a failed validation blocks the commit.
#[derive(Debug)]
pub struct PageSetupSession {
    seed: PageSetup,
    geometry: GeometryEditor,
    text: TextScalingModel,
    header: HeaderFooter,
    footer: HeaderFooter,
    preview: PreviewPage,
}

impl PageSetupSession {
    pub fn begin(seed: PageSetup) -> Self {
        Self {
            geometry: GeometryEditor::new(seed.geometry.clone()),
            text: TextScalingModel::new(seed.text),
            header: seed.header.clone(),
            footer: seed.footer.clone(),
            preview: PreviewPage::from_geometry(&seed.geometry),
            seed,
        }
    }

    pub fn seed(&self) -> &PageSetup {
        &self.seed
    }

    pub fn geometry(&mut self) -> &mut GeometryEditor {
        &mut self.geometry
    }

    pub fn text(&mut self) -> &mut TextScalingModel {
        &mut self.text
    }

    pub fn header_footer(&mut self, kind: HeaderFooterKind) -> &mut HeaderFooter {
        match kind {
            HeaderFooterKind::Header => &mut self.header,
            HeaderFooterKind::Footer => &mut self.footer,
        }
    }

    pub fn preview(&mut self) -> &mut PreviewPage {
        &mut self.preview
    }

    /// The edited state as a page setup value
    pub fn current(&self) -> PageSetup {
        PageSetup {
            geometry: self.geometry.geometry().clone(),
            text: self.text.scaling(),
            header: self.header.clone(),
            footer: self.footer.clone(),
        }
    }

    pub fn validate(&self) -> ErrorKind {
        self.geometry.validate()
    }

    pub fn changes(&self) -> Vec<ChangeGroup> {
        diff(&self.seed, &self.current())
    }

    /// Placement of a header or footer on the preview page, using the
    /// binding and sheet layout being edited
    pub fn preview_placement(&mut self, kind: HeaderFooterKind) -> Placement {
        self.preview.follow_geometry(self.geometry.geometry());
        let preview = self.preview;
        match kind {
            HeaderFooterKind::Header => self.header.placement(&preview),
            HeaderFooterKind::Footer => self.footer.placement(&preview),
        }
    }

    /// Validate and hand back the edited setup
    pub fn commit(self) -> Result<PageSetup> {
        self.validate().into_result()?;
        let setup = self.current();
        log::info!("page setup committed, changed: {:?}", diff(&self.seed, &setup));
        Ok(setup)
    }

    /// Drop all edits and return the seed setup
    pub fn discard(self) -> PageSetup {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Slot;

    #[test]
    fn test_fresh_session_has_no_changes() {
        let session = PageSetupSession::begin(PageSetup::default());
        assert!(session.changes().is_empty());
        assert_eq!(session.current(), PageSetup::default());
    }

    #[test]
    fn test_inset_edit_reports_margins_only() {
        let mut session = PageSetupSession::begin(PageSetup::default());
        session.geometry().set_header_inset(Length::from_inches(2.0));
        assert_eq!(session.changes(), vec![ChangeGroup::Margins]);
    }

    #[test]
    fn test_preview_tracks_binding_edits() {
        let mut session = PageSetupSession::begin(PageSetup::default());
        session.header_footer(HeaderFooterKind::Header).content.inside_aligned = "7".into();

        assert_eq!(session.preview_placement(HeaderFooterKind::Header).right, Slot::OutsideAligned);
        session.geometry().set_binding_side(BindingSide::Right);
        assert_eq!(session.preview_placement(HeaderFooterKind::Header).right, Slot::InsideAligned);
    }

    #[test]
    fn test_commit_rejects_invalid_geometry() {
        let mut session = PageSetupSession::begin(PageSetup::default());
        session.geometry().set_gutter(Length::from_inches(7.0));
        match session.commit() {
            Err(SetupError::Geometry(ErrorKind::HorizontalMarginsTooBig)) => {}
            other => panic!("Expected geometry error, got {other:?}"),
        }
    }

    #[test]
    fn test_discard_returns_seed() {
        let mut session = PageSetupSession::begin(PageSetup::default());
        session.text().set_font_size(Length::from_points(14));
        assert_eq!(session.changes(), vec![ChangeGroup::Text]);
        assert_eq!(session.discard(), PageSetup::default());
    }
}
