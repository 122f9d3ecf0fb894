//! Header and footer placement
//!
//! Headers and footers are laid out as a table of up to three cells. The
//! centered slot always sits in the middle; the inside- and outside-aligned
//! slots trade places between the left and right cells depending on page
//! parity, binding side and whether sheets are printed duplex.

mod labels;
mod page_info;
mod resolver;

pub use labels::*;
pub use page_info::*;
pub use resolver::*;
