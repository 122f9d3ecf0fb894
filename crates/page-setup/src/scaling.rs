//! Base font size and line spacing ("leading") consistency
//!
//! In standard mode line spacing is always exactly 1.2 times the font size,
//! whichever of the two the user edits. Non-standard mode remembers the
//! ratio between them instead and only enforces that the font never exceeds
//! the line spacing.

use crate::constants::{
    DEFAULT_FONT_SIZE, DEFAULT_MAX_FONT_SIZE, DEFAULT_MIN_FONT_SIZE, STANDARD_LEADING_FACTOR,
    STANDARD_LEADING_RATIO,
};
use crate::guard::UpdateGuard;
use crate::types::{Length, snap};

/// Line spacing for a font size under standard leading
pub fn standard_line_spacing(font_size: Length) -> Length {
    let (num, den) = STANDARD_LEADING_RATIO;
    font_size.mul_ratio(num, den)
}

/// Font size for a line spacing under standard leading
pub fn standard_font_size(line_spacing: Length) -> Length {
    let (num, den) = STANDARD_LEADING_RATIO;
    line_spacing.mul_ratio(den, num)
}

/// Text scaling state of a publication
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextScaling {
    pub base_font_size: Length,
    pub base_line_spacing: Length,
    /// Remembered line spacing / font size ratio for non-standard mode
    pub leading_factor: f64,
    pub allow_non_standard: bool,
}

impl Default for TextScaling {
    fn default() -> Self {
        let font = Length::new(DEFAULT_FONT_SIZE);
        Self {
            base_font_size: font,
            base_line_spacing: standard_line_spacing(font),
            leading_factor: STANDARD_LEADING_FACTOR,
            allow_non_standard: false,
        }
    }
}

impl TextScaling {
    /// Whether the line spacing is within one unit of standard leading
    pub fn follows_standard(&self) -> bool {
        standard_line_spacing(self.base_font_size).abs_diff(self.base_line_spacing)
            <= Length::new(1)
    }
}

/// Inclusive `[min, max]` range of lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    pub min: Length,
    pub max: Length,
}

impl LengthRange {
    pub fn new(min: Length, max: Length) -> Self {
        assert!(min <= max, "range minimum {min} exceeds maximum {max}");
        Self { min, max }
    }

    pub fn contains(&self, value: Length) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn snap(&self, value: Length) -> Length {
        snap(self.min, self.max, value)
    }
}

/// Session-local editor keeping font size and line spacing consistent.
///
/// `set_font_size` and `set_line_spacing` write one field and recompute the
/// other. The recompute writes through the opposite setter; the nested
/// recompute that would follow is suppressed while the outer one settles.
#[derive(Debug)]
pub struct TextScalingModel {
    scaling: TextScaling,
    font_range: LengthRange,
    line_spacing_range: LengthRange,
    guard: UpdateGuard,
}

impl TextScalingModel {
    pub fn new(scaling: TextScaling) -> Self {
        Self::with_font_range(
            scaling,
            Length::new(DEFAULT_MIN_FONT_SIZE),
            Length::new(DEFAULT_MAX_FONT_SIZE),
        )
    }

    pub fn with_font_range(scaling: TextScaling, min_font: Length, max_font: Length) -> Self {
        let mut model = Self {
            scaling,
            font_range: LengthRange::new(min_font, max_font),
            line_spacing_range: LengthRange::new(min_font, max_font),
            guard: UpdateGuard::new(),
        };
        model.update_range_and_snap(min_font, max_font);
        model
    }

    pub fn scaling(&self) -> TextScaling {
        self.scaling
    }

    pub fn font_range(&self) -> LengthRange {
        self.font_range
    }

    pub fn line_spacing_range(&self) -> LengthRange {
        self.line_spacing_range
    }

    /// Edit the font size (snapped to the font range) and recompute line spacing
    pub fn set_font_size(&mut self, font_size: Length) -> TextScaling {
        self.scaling.base_font_size = self.font_range.snap(font_size);
        self.on_font_size_changed();
        self.scaling
    }

    /// Edit the line spacing (snapped to its range) and recompute font size
    pub fn set_line_spacing(&mut self, line_spacing: Length) -> TextScaling {
        self.scaling.base_line_spacing = self.line_spacing_range.snap(line_spacing);
        self.on_line_spacing_changed();
        self.scaling
    }

    /// Recompute line spacing after a font size edit.
    ///
    /// Non-standard mode applies the remembered factor when the result stays
    /// in range. Otherwise it keeps the line spacing, caps the font at it and
    /// remembers the new ratio instead.
    pub fn on_font_size_changed(&mut self) {
        let Some(_token) = self.guard.try_begin() else {
            return;
        };

        let font = self.scaling.base_font_size;
        if !self.scaling.allow_non_standard {
            let spacing = self.line_spacing_range.snap(standard_line_spacing(font));
            self.set_line_spacing(spacing);
            return;
        }

        let candidate = font.scale(self.scaling.leading_factor);
        if self.line_spacing_range.contains(candidate) {
            self.set_line_spacing(candidate);
        } else {
            log::debug!("line spacing {candidate} out of range, keeping current spacing");
            let spacing = self.scaling.base_line_spacing;
            if font > spacing {
                log::debug!("font size capped to line spacing {spacing}");
                self.scaling.base_font_size = spacing;
            }
            self.scaling.leading_factor = spacing.ratio(self.scaling.base_font_size);
        }
    }

    /// Recompute font size after a line spacing edit.
    ///
    /// Non-standard mode only caps the font at the line spacing and then
    /// remembers the resulting ratio.
    pub fn on_line_spacing_changed(&mut self) {
        let Some(_token) = self.guard.try_begin() else {
            return;
        };

        let spacing = self.scaling.base_line_spacing;
        if !self.scaling.allow_non_standard {
            self.set_font_size(standard_font_size(spacing));
            // rounding the font can leave the spacing one unit off standard
            self.scaling.base_line_spacing = self
                .line_spacing_range
                .snap(standard_line_spacing(self.scaling.base_font_size));
            return;
        }

        if self.scaling.base_font_size > spacing {
            log::debug!("font size capped to line spacing {spacing}");
            self.set_font_size(spacing);
        }
        self.scaling.leading_factor = spacing.ratio(self.scaling.base_font_size);
    }

    /// Seed both values at session start without any cross-recompute
    pub fn set_defaults(&mut self, font_size: Length, line_spacing: Length) -> TextScaling {
        self.scaling.base_font_size = font_size;
        self.scaling.base_line_spacing = line_spacing;
        self.scaling.leading_factor = line_spacing.ratio(font_size);
        self.scaling
    }

    /// Derive the line spacing range from the font range and pull the
    /// current line spacing into it. In standard mode a snapped spacing
    /// carries the font size along.
    pub fn update_range_and_snap(&mut self, min_font: Length, max_font: Length) -> TextScaling {
        self.font_range = LengthRange::new(min_font, max_font);
        let max_spacing = standard_line_spacing(max_font);
        let min_spacing = if self.scaling.allow_non_standard {
            min_font
        } else {
            standard_line_spacing(min_font)
        };
        self.line_spacing_range = LengthRange::new(min_spacing, max_spacing);

        let spacing = self.scaling.base_line_spacing;
        let snapped = self.line_spacing_range.snap(spacing);
        self.scaling.base_line_spacing = snapped;
        if !self.scaling.allow_non_standard && snapped != spacing {
            self.on_line_spacing_changed();
        }
        self.scaling
    }

    /// Toggle non-standard leading. Turning it off restores standard
    /// leading from the current font size.
    pub fn set_allow_non_standard(&mut self, allow: bool) -> TextScaling {
        self.scaling.allow_non_standard = allow;
        let LengthRange { min, max } = self.font_range;
        self.update_range_and_snap(min, max);

        if allow {
            self.scaling.leading_factor =
                self.scaling.base_line_spacing.ratio(self.scaling.base_font_size);
        } else {
            self.scaling.leading_factor = STANDARD_LEADING_FACTOR;
            self.on_font_size_changed();
        }
        self.scaling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::EditState;

    fn pt(v: i64) -> Length {
        Length::from_points(v)
    }

    fn non_standard(font: Length, spacing: Length) -> TextScalingModel {
        let mut model = TextScalingModel::new(TextScaling {
            allow_non_standard: true,
            ..Default::default()
        });
        model.set_defaults(font, spacing);
        model
    }

    #[test]
    fn test_standard_font_edit() {
        let mut model = TextScalingModel::new(TextScaling::default());
        let scaling = model.set_font_size(pt(20));
        assert_eq!(scaling.base_line_spacing, pt(24));
        assert_eq!(model.guard.state(), EditState::Idle);
    }

    #[test]
    fn test_standard_spacing_edit() {
        let mut model = TextScalingModel::new(TextScaling::default());
        let scaling = model.set_line_spacing(pt(18));
        assert_eq!(scaling.base_font_size, pt(15));
        assert!(scaling.follows_standard());
    }

    #[test]
    fn test_non_standard_keeps_factor() {
        let mut model = non_standard(pt(10), pt(15));
        assert_eq!(model.scaling().leading_factor, 1.5);
        let scaling = model.set_font_size(pt(12));
        assert_eq!(scaling.base_line_spacing, pt(18));
        assert!(!scaling.follows_standard());
    }

    #[test]
    fn test_non_standard_out_of_range_recomputes_factor() {
        let mut model = non_standard(pt(100), pt(300));
        // 3.0 * 200pt is past the 307.2pt line spacing maximum
        let scaling = model.set_font_size(pt(200));
        assert_eq!(scaling.base_line_spacing, pt(300));
        assert_eq!(scaling.leading_factor, 1.5);
    }

    #[test]
    fn test_non_standard_font_capped_at_spacing() {
        let mut model = non_standard(pt(12), pt(14));
        let scaling = model.set_line_spacing(pt(10));
        assert_eq!(scaling.base_font_size, pt(10));
        assert_eq!(scaling.base_line_spacing, pt(10));
        assert_eq!(scaling.leading_factor, 1.0);
    }

    #[test]
    fn test_range_depends_on_mode() {
        let mut model = TextScalingModel::new(TextScaling::default());
        let range = model.line_spacing_range();
        assert_eq!(range.min, Length::new(1_200));
        assert_eq!(range.max, Length::new(307_200));

        model.set_allow_non_standard(true);
        assert_eq!(model.line_spacing_range().min, pt(1));
    }

    #[test]
    fn test_update_range_snaps_line_spacing() {
        let mut model = TextScalingModel::new(TextScaling::default());
        let scaling = model.update_range_and_snap(pt(12), pt(48));
        assert_eq!(scaling.base_line_spacing, Length::new(14_400));
        assert_eq!(scaling.base_font_size, pt(12));
        assert_eq!(scaling.base_line_spacing, standard_line_spacing(scaling.base_font_size));
        assert_eq!(model.guard.state(), EditState::Idle);
    }

    #[test]
    fn test_standard_spacing_edit_is_exact() {
        let mut model = TextScalingModel::new(TextScaling::default());
        // 13203 is not a multiple of 6, so the font rounds to 11003
        let scaling = model.set_line_spacing(Length::new(13_203));
        assert_eq!(scaling.base_font_size, Length::new(11_003));
        assert_eq!(scaling.base_line_spacing, Length::new(13_204));
        assert_eq!(scaling.base_line_spacing, standard_line_spacing(scaling.base_font_size));
    }

    #[test]
    fn test_non_standard_out_of_range_caps_font() {
        let mut model = non_standard(pt(100), pt(150));
        // 1.5 * 250pt is past the 307.2pt line spacing maximum
        let scaling = model.set_font_size(pt(250));
        assert_eq!(scaling.base_line_spacing, pt(150));
        assert_eq!(scaling.base_font_size, pt(150));
        assert_eq!(scaling.leading_factor, 1.0);
    }

    #[test]
    fn test_turning_standard_back_on_restores_leading() {
        let mut model = non_standard(pt(10), pt(16));
        let scaling = model.set_allow_non_standard(false);
        assert_eq!(scaling.base_line_spacing, pt(12));
        assert_eq!(scaling.leading_factor, STANDARD_LEADING_FACTOR);
        assert!(scaling.follows_standard());
    }
}
