//! Page geometry: paper, publication page, margins and gutter
//!
//! This module answers whether a page setup is physically possible:
//! - Size fitting and named-size matching (which selector entry describes a size)
//! - Validation of margins and gutter against the paper
//! - Coupling between header/footer insets and the top/bottom margins
//! - The resulting text block for a given page

mod content;
mod editor;
mod fit;
mod validate;

pub use content::*;
pub use editor::*;
pub use fit::*;
pub use validate::*;
