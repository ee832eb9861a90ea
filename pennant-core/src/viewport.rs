/*
    Pennant - interactive banner composition engine
    Copyright (C) 2025 halden

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/


/// Maps raw screen coordinates into canvas logical space.
///
/// `left`/`top`/`width`/`height` describe the drawing surface's on-screen
/// bounding box; `canvas_width`/`canvas_height` are its logical pixel
/// dimensions. The x and y scale factors are independent, so non-uniform
/// CSS-style scaling maps correctly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
}

impl Viewport {
    pub fn to_canvas(&self, sx: f32, sy: f32) -> (f32, f32) {
        (
            (sx - self.left) * (self.canvas_width / self.width),
            (sy - self.top) * (self.canvas_height / self.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_half_scale_display() {
        let viewport = Viewport {
            left: 0.0,
            top: 0.0,
            width: 792.0,
            height: 198.0,
            canvas_width: 1584.0,
            canvas_height: 396.0,
        };
        assert_eq!(viewport.to_canvas(100.0, 50.0), (200.0, 100.0));
    }

    #[test]
    fn maps_offset_and_non_uniform_scale() {
        let viewport = Viewport {
            left: 10.0,
            top: 20.0,
            width: 300.0,
            height: 100.0,
            canvas_width: 600.0,
            canvas_height: 400.0,
        };
        // x doubles, y quadruples, each from its own edge.
        assert_eq!(viewport.to_canvas(10.0, 20.0), (0.0, 0.0));
        assert_eq!(viewport.to_canvas(160.0, 45.0), (300.0, 100.0));
    }
}
