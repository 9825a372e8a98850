// Copyright 2026 the Driftdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// A translate-then-scale transform applied to the whole grid layer.
///
/// The grid layer is mapped as `screen = layout_origin + translation +
/// content_point * scale`; browsing panning is the special case
/// `scale == 1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTransform {
    /// Screen-space translation of the grid layer.
    pub translation: Vec2,
    /// Uniform scale of the grid layer.
    pub scale: f64,
}

impl CameraTransform {
    /// The resting transform: no translation, no magnification.
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        scale: 1.0,
    };

    /// A pure translation at unit scale, as committed while browsing.
    #[must_use]
    pub fn panned(translation: Vec2) -> Self {
        Self {
            translation,
            scale: 1.0,
        }
    }

    /// The equivalent affine map from grid content space to screen space,
    /// relative to the layer's layout origin.
    #[must_use]
    pub fn as_affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }
}

/// Computes the camera transform that magnifies `card_rect` into the center
/// of the viewport.
///
/// - `card_rect` is the card's rectangle in grid content space (relative to
///   the grid layer's layout origin).
/// - `grid_origin` is the layer's layout origin in screen space, i.e. where
///   content `(0, 0)` sits when the transform is identity. Any pan already
///   applied must be excluded by the caller, which is what makes the zoom
///   land in the same place regardless of the current scroll position.
/// - `viewport` is the screen size whose geometric center the card should
///   occupy.
#[must_use]
pub fn focus_transform(card_rect: Rect, grid_origin: Point, viewport: Size, zoom: f64) -> CameraTransform {
    let screen_center = Vec2::new(viewport.width / 2.0, viewport.height / 2.0);
    let card_center = card_rect.center().to_vec2();
    CameraTransform {
        translation: screen_center - grid_origin.to_vec2() - card_center * zoom,
        scale: zoom,
    }
}
