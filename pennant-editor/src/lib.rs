/*
    Pennant - interactive banner composition engine
    Copyright (C) 2025 halden

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/


//! Pointer-driven interaction for the banner canvas.
//!
//! The editor owns the selection and the transient drag state; the element
//! list stays with the caller and is mutated in place. Every intermediate
//! pointer-move is applied immediately, never previewed, and the rect cache
//! is re-laid-out after each mutation so hit-tests can never observe a
//! stale rect.

use pennant_core::geometry::{
    element_at, handle_at, rotate_point, Handle, MIN_ELEMENT_SIZE, MIN_FONT_SIZE,
};
use pennant_core::{layout, AvatarTransform, Banner, ElementRect, Item, RectCache, TextMeasurer};

mod input;

pub use input::{PointerInput, PointerSource};

/// Transient record of one pointer-down -> move -> up sequence. All fields
/// are snapshotted at drag start so continuous deltas never accumulate
/// rounding drift.
#[derive(Clone, Debug)]
pub enum DragMode {
    Move {
        id: String,
        start_x: f32,
        start_y: f32,
        orig_x: f32,
        orig_y: f32,
    },
    Resize {
        id: String,
        handle: Handle,
        start_x: f32,
        start_y: f32,
        orig_rect: ElementRect,
        orig_x: f32,
        orig_y: f32,
        orig_font_size: Option<f32>,
    },
    Rotate {
        id: String,
        orig_rotation: f32,
        center_x: f32,
        center_y: f32,
        start_angle: f32,
    },
}

/// Wheel zoom step per event. Negative delta (scroll up) grows.
const WHEEL_STEP_UP: f32 = 1.05;
const WHEEL_STEP_DOWN: f32 = 0.95;
const AVATAR_SCALE_RANGE: (f32, f32) = (0.2, 5.0);

#[derive(Debug, Default)]
pub struct Editor {
    selected: Option<String>,
    drag: Option<DragMode>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Caller-driven selection override (inspector panels, layer lists).
    pub fn set_selected(&mut self, id: Option<String>) {
        self.selected = id;
    }

    pub fn drag(&self) -> Option<&DragMode> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Idle -> Moving / Resizing / Rotating. The selected element's handles
    /// are tested before any body hit, so a selected element stays
    /// manipulable even when another element overlaps it.
    pub fn pointer_down(&mut self, input: &PointerInput, banner: &Banner, cache: &RectCache) {
        if let Some(sel) = self.selected.clone() {
            if let (Some(element), Some(rect)) = (banner.element(&sel), cache.get(&sel)) {
                if let Some(handle) = handle_at(input.x, input.y, &rect) {
                    if handle == Handle::Rotate {
                        let (cx, cy) = rect.center();
                        self.drag = Some(DragMode::Rotate {
                            id: sel,
                            orig_rotation: element.rotation,
                            center_x: cx,
                            center_y: cy,
                            start_angle: (input.y - cy).atan2(input.x - cx),
                        });
                    } else {
                        self.drag = Some(DragMode::Resize {
                            id: sel,
                            handle,
                            start_x: input.x,
                            start_y: input.y,
                            orig_rect: rect,
                            orig_x: element.x,
                            orig_y: element.y,
                            orig_font_size: match &element.item {
                                Item::Text(text) => Some(text.font_size),
                                Item::Image(_) => None,
                            },
                        });
                    }
                    return;
                }
            }
        }

        match element_at(input.x, input.y, banner, cache) {
            Some(element) => {
                self.selected = Some(element.id.clone());
                self.drag = Some(DragMode::Move {
                    id: element.id.clone(),
                    start_x: input.x,
                    start_y: input.y,
                    orig_x: element.x,
                    orig_y: element.y,
                });
            }
            None => self.selected = None,
        }
    }

    /// Applies the active drag to the element list. No-op when idle or when
    /// the dragged element has disappeared from the list.
    pub fn pointer_move(
        &mut self,
        input: &PointerInput,
        banner: &mut Banner,
        measurer: &mut dyn TextMeasurer,
        cache: &mut RectCache,
    ) {
        let Some(drag) = self.drag.as_ref() else {
            return;
        };

        match drag {
            DragMode::Move { id, start_x, start_y, orig_x, orig_y } => {
                // No bounds clamping: elements may leave the canvas.
                if let Some(element) = banner.element_mut(id) {
                    element.x = orig_x + (input.x - start_x);
                    element.y = orig_y + (input.y - start_y);
                }
            }
            DragMode::Rotate { id, orig_rotation, center_x, center_y, start_angle } => {
                // The center stays as captured at drag start; recomputing it
                // from the moving rect would feed the output back into the
                // input and jitter.
                let current = (input.y - center_y).atan2(input.x - center_x);
                if let Some(element) = banner.element_mut(id) {
                    element.rotation = orig_rotation + (current - start_angle).to_degrees();
                }
            }
            DragMode::Resize { id, handle, start_x, start_y, orig_rect, orig_x, orig_y, orig_font_size } => {
                let (cx, cy) = orig_rect.center();
                let rad = -orig_rect.rotation.to_radians();
                let (lx, ly) = rotate_point(input.x, input.y, cx, cy, rad);
                let (sx, sy) = rotate_point(*start_x, *start_y, cx, cy, rad);
                let dx = lx - sx;
                let dy = ly - sy;

                let mut new_w = orig_rect.w;
                let mut new_h = orig_rect.h;
                match handle {
                    Handle::E => new_w += dx,
                    Handle::W => new_w -= dx,
                    Handle::S => new_h += dy,
                    Handle::N => new_h -= dy,
                    Handle::NW => {
                        new_w -= dx;
                        new_h -= dy;
                    }
                    Handle::NE => {
                        new_w += dx;
                        new_h -= dy;
                    }
                    Handle::SW => {
                        new_w -= dx;
                        new_h += dy;
                    }
                    Handle::SE => {
                        new_w += dx;
                        new_h += dy;
                    }
                    Handle::Rotate => return,
                }
                new_w = new_w.max(MIN_ELEMENT_SIZE);
                new_h = new_h.max(MIN_ELEMENT_SIZE);

                if let Some(element) = banner.element_mut(id) {
                    match &mut element.item {
                        Item::Text(text) => {
                            // Text resizes uniformly through its font size.
                            let (new_d, orig_d) = match handle {
                                Handle::N | Handle::S => (new_h, orig_rect.h),
                                _ => (new_w, orig_rect.w),
                            };
                            if let Some(orig) = orig_font_size {
                                // Empty content measures to a zero extent,
                                // which has no usable ratio; keep the size.
                                if orig_d > 0.0 {
                                    text.font_size =
                                        (orig * (new_d / orig_d)).round().max(MIN_FONT_SIZE);
                                }
                            }
                        }
                        Item::Image(img) => {
                            img.width = new_w;
                            img.height = new_h;
                            // Recenter so the shape grows from its middle
                            // rather than from the dragged corner.
                            element.x = orig_x - (new_w - orig_rect.w) / 2.0;
                            element.y = orig_y - (new_h - orig_rect.h) / 2.0;
                        }
                    }
                }
            }
        }

        layout(banner, measurer, cache);
    }

    /// Moving / Resizing / Rotating -> Idle. Applied mutations stay.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    pub fn pointer_leave(&mut self) {
        self.drag = None;
    }

    /// Modifier-gated wheel scaling, routed by pointer location: the avatar
    /// circle zooms the avatar transform, anywhere else scales the selected
    /// element (font size for text, width/height for images).
    pub fn wheel(
        &mut self,
        input: &PointerInput,
        delta_y: f32,
        modifier: bool,
        banner: &mut Banner,
        avatar: Option<&mut AvatarTransform>,
        measurer: &mut dyn TextMeasurer,
        cache: &mut RectCache,
    ) {
        if !modifier || delta_y == 0.0 {
            return;
        }
        let factor = if delta_y < 0.0 { WHEEL_STEP_UP } else { WHEEL_STEP_DOWN };

        if let Some(avatar) = avatar {
            if avatar.contains(input.x, input.y) {
                let (min, max) = AVATAR_SCALE_RANGE;
                avatar.scale = (avatar.scale * factor).clamp(min, max);
                return;
            }
        }

        let Some(sel) = self.selected.as_deref() else {
            return;
        };
        let Some(element) = banner.element_mut(sel) else {
            return;
        };
        match &mut element.item {
            Item::Text(text) => {
                text.font_size = (text.font_size * factor).round().max(MIN_FONT_SIZE);
            }
            Item::Image(img) => {
                let new_w = (img.width * factor).max(MIN_ELEMENT_SIZE);
                let new_h = (img.height * factor).max(MIN_ELEMENT_SIZE);
                element.x -= (new_w - img.width) / 2.0;
                element.y -= (new_h - img.height) / 2.0;
                img.width = new_w;
                img.height = new_h;
            }
        }

        layout(banner, measurer, cache);
    }
}
