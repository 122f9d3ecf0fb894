pub mod constants;
pub mod geometry;
mod guard;
pub mod placement;
pub mod scaling;
mod session;
mod types;

pub use geometry::{
    ErrorKind, GeometryEditor, PageGeometry, content_area, fits, match_paper_size_by_dimensions,
    match_publication_page_size_by_dimensions, validate,
};
pub use guard::{EditState, UpdateGuard, UpdateToken};
pub use placement::{
    HeaderFooter, HeaderFooterContent, HeaderFooterKind, PageInfo, PageInfoProvider, Placement,
    PreviewPage, Slot, resolve,
};
pub use scaling::{TextScaling, TextScalingModel};
pub use session::*;
pub use types::*;
