/*
    Pennant - interactive banner composition engine
    Copyright (C) 2025 halden

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/


//! Rotation-aware point transforms and hit-testing.
//!
//! Everything here works in canvas units. Hit-testing de-rotates the query
//! point into an element's local frame with the negated angle; the render
//! pipeline applies the exact forward transform, so what is drawn and what
//! is selectable stay in agreement.

use crate::{Banner, Element, ElementRect, RectCache};

/// Side length of the square hotspot around each handle anchor.
pub const HANDLE_SIZE: f32 = 10.0;
/// Distance of the rotation grip above the top-center edge.
pub const ROTATION_HANDLE_OFFSET: f32 = 30.0;
/// Resize floor for element width/height.
pub const MIN_ELEMENT_SIZE: f32 = 20.0;
/// Resize floor for text font size.
pub const MIN_FONT_SIZE: f32 = 12.0;

/// Rotates `(x, y)` about `(cx, cy)` by `angle` radians. Pass the negated
/// angle to de-rotate a world point into a rect's local frame.
pub fn rotate_point(x: f32, y: f32, cx: f32, cy: f32, angle: f32) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    let dx = x - cx;
    let dy = y - cy;
    (cx + dx * cos - dy * sin, cy + dx * sin + dy * cos)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
    NW,
    NE,
    SW,
    SE,
    N,
    S,
    E,
    W,
    Rotate,
}

impl Handle {
    /// Test order: corners, then edge midpoints, then the rotation grip.
    /// First match wins, so the order is part of the interface.
    pub const HIT_ORDER: [Handle; 9] = [
        Handle::NW,
        Handle::NE,
        Handle::SW,
        Handle::SE,
        Handle::N,
        Handle::S,
        Handle::E,
        Handle::W,
        Handle::Rotate,
    ];

    pub fn is_corner(self) -> bool {
        matches!(self, Handle::NW | Handle::NE | Handle::SW | Handle::SE)
    }

    pub fn is_edge(self) -> bool {
        matches!(self, Handle::N | Handle::S | Handle::E | Handle::W)
    }

    /// Anchor point in the rect's local (pre-rotation) frame.
    pub fn anchor(self, rect: &ElementRect) -> (f32, f32) {
        let ElementRect { x, y, w, h, .. } = *rect;
        match self {
            Handle::NW => (x, y),
            Handle::NE => (x + w, y),
            Handle::SW => (x, y + h),
            Handle::SE => (x + w, y + h),
            Handle::N => (x + w / 2.0, y),
            Handle::S => (x + w / 2.0, y + h),
            Handle::E => (x + w, y + h / 2.0),
            Handle::W => (x, y + h / 2.0),
            Handle::Rotate => (x + w / 2.0, y - ROTATION_HANDLE_OFFSET),
        }
    }
}

/// Returns the handle under `(px, py)` for a selected element's rect, or
/// `None`. The point is de-rotated about the rect center first, so handles
/// track the element under arbitrary rotation.
pub fn handle_at(px: f32, py: f32, rect: &ElementRect) -> Option<Handle> {
    let (cx, cy) = rect.center();
    let (lx, ly) = rotate_point(px, py, cx, cy, -rect.rotation.to_radians());
    let half = HANDLE_SIZE / 2.0;
    Handle::HIT_ORDER.into_iter().find(|handle| {
        let (hx, hy) = handle.anchor(rect);
        (lx - hx).abs() <= half && (ly - hy).abs() <= half
    })
}

/// Returns the topmost element whose rect contains `(px, py)`. Candidates
/// are walked in reverse draw order; elements without a cached rect are
/// skipped (they have not been laid out yet).
pub fn element_at<'a>(px: f32, py: f32, banner: &'a Banner, cache: &RectCache) -> Option<&'a Element> {
    banner.iter_top_down().find(|element| {
        let Some(rect) = cache.get(&element.id) else {
            return false;
        };
        let (cx, cy) = rect.center();
        let (lx, ly) = rotate_point(px, py, cx, cy, -rect.rotation.to_radians());
        rect.contains_local(lx, ly)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ImageItem, Item};
    use float_cmp::approx_eq;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    fn rect(x: f32, y: f32, w: f32, h: f32, rotation: f32) -> ElementRect {
        ElementRect { x, y, w, h, rotation }
    }

    fn image_element(id: &str, x: f32, y: f32, w: f32, h: f32) -> Element {
        Element {
            id: id.to_string(),
            x,
            y,
            rotation: 0.0,
            item: Item::Image(ImageItem {
                source: String::new(),
                width: w,
                height: h,
            }),
        }
    }

    #[test]
    fn rotate_point_quarter_turn() {
        let (x, y) = rotate_point(10.0, 0.0, 0.0, 0.0, FRAC_PI_2);
        assert!(approx_eq!(f32, x, 0.0, epsilon = 1e-4));
        assert!(approx_eq!(f32, y, 10.0, epsilon = 1e-4));
    }

    #[test]
    fn handles_hit_at_their_anchors() {
        let r = rect(100.0, 100.0, 200.0, 100.0, 0.0);
        assert_eq!(handle_at(100.0, 100.0, &r), Some(Handle::NW));
        assert_eq!(handle_at(300.0, 200.0, &r), Some(Handle::SE));
        assert_eq!(handle_at(200.0, 200.0, &r), Some(Handle::S));
        assert_eq!(handle_at(300.0, 150.0, &r), Some(Handle::E));
        assert_eq!(
            handle_at(200.0, 100.0 - ROTATION_HANDLE_OFFSET, &r),
            Some(Handle::Rotate)
        );
        assert_eq!(handle_at(200.0, 150.0, &r), None);
    }

    #[test]
    fn corner_wins_over_overlapping_edge_hotspot() {
        // Rect narrow enough that the NW and N squares overlap; the fixed
        // test order resolves the tie to the corner.
        let r = rect(0.0, 0.0, 8.0, 40.0, 0.0);
        assert_eq!(handle_at(3.0, 0.0, &r), Some(Handle::NW));
    }

    #[test]
    fn handles_follow_rotation() {
        let r = rect(100.0, 100.0, 200.0, 100.0, 90.0);
        let (cx, cy) = r.center();
        // Where the unrotated NE anchor lands after the forward rotation.
        let (px, py) = rotate_point(300.0, 100.0, cx, cy, FRAC_PI_2);
        assert_eq!(handle_at(px, py, &r), Some(Handle::NE));
        // The unrotated anchor position no longer hits anything.
        assert_eq!(handle_at(300.0, 100.0, &r), None);
    }

    #[test]
    fn element_at_prefers_topmost() {
        let banner = Banner {
            width: 400,
            height: 200,
            background: None,
            elements: vec![
                image_element("below", 0.0, 0.0, 100.0, 100.0),
                image_element("above", 50.0, 50.0, 100.0, 100.0),
            ],
        };
        let mut cache = RectCache::new();
        cache.insert("below".to_string(), rect(0.0, 0.0, 100.0, 100.0, 0.0));
        cache.insert("above".to_string(), rect(50.0, 50.0, 100.0, 100.0, 0.0));

        assert_eq!(element_at(75.0, 75.0, &banner, &cache).map(|e| e.id.as_str()), Some("above"));
        assert_eq!(element_at(10.0, 10.0, &banner, &cache).map(|e| e.id.as_str()), Some("below"));
        assert!(element_at(300.0, 190.0, &banner, &cache).is_none());
    }

    #[test]
    fn element_at_skips_unlaid_out_elements() {
        let banner = Banner {
            width: 400,
            height: 200,
            background: None,
            elements: vec![image_element("ghost", 0.0, 0.0, 100.0, 100.0)],
        };
        let cache = RectCache::new();
        assert!(element_at(50.0, 50.0, &banner, &cache).is_none());
    }

    #[test]
    fn element_at_respects_rotation() {
        let banner = Banner {
            width: 400,
            height: 400,
            background: None,
            elements: vec![image_element("bar", 100.0, 180.0, 200.0, 40.0)],
        };
        let mut cache = RectCache::new();
        cache.insert("bar".to_string(), rect(100.0, 180.0, 200.0, 40.0, 90.0));

        // After a 90 degree turn the bar stands upright through the center.
        assert!(element_at(200.0, 110.0, &banner, &cache).is_some());
        // A point inside the unrotated footprint but outside the rotated one.
        assert!(element_at(110.0, 200.0, &banner, &cache).is_none());
    }

    proptest! {
        #[test]
        fn rotate_round_trip(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            cx in -2000.0f32..2000.0,
            cy in -2000.0f32..2000.0,
            angle in -10.0f32..10.0,
        ) {
            let (rx, ry) = rotate_point(x, y, cx, cy, angle);
            let (bx, by) = rotate_point(rx, ry, cx, cy, -angle);
            prop_assert!(approx_eq!(f32, bx, x, epsilon = 0.5));
            prop_assert!(approx_eq!(f32, by, y, epsilon = 0.5));
        }

        #[test]
        fn rotation_preserves_distance_to_pivot(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            angle in -10.0f32..10.0,
        ) {
            let (rx, ry) = rotate_point(x, y, 0.0, 0.0, angle);
            let before = (x * x + y * y).sqrt();
            let after = (rx * rx + ry * ry).sqrt();
            prop_assert!(approx_eq!(f32, before, after, epsilon = 0.5));
        }
    }
}
