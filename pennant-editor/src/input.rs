/*
    Pennant - interactive banner composition engine
    Copyright (C) 2025 halden

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/


use pennant_core::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// One tagged pointer sample. Mouse and touch events both collapse into
/// this, so the interaction state machine never cares where a point came
/// from. Coordinates are canvas-logical once [`PointerInput::to_canvas`]
/// has been applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub x: f32,
    pub y: f32,
    pub source: PointerSource,
}

impl PointerInput {
    pub fn mouse(x: f32, y: f32) -> Self {
        Self { x, y, source: PointerSource::Mouse }
    }

    /// Adapts a touch list. Only the first touch point is used; multi-touch
    /// gestures are unsupported.
    pub fn touch(points: &[(f32, f32)]) -> Option<Self> {
        points.first().map(|&(x, y)| Self { x, y, source: PointerSource::Touch })
    }

    /// Returns a copy with screen coordinates normalized into canvas space.
    pub fn to_canvas(self, viewport: &Viewport) -> Self {
        let (x, y) = viewport.to_canvas(self.x, self.y);
        Self { x, y, source: self.source }
    }
}
