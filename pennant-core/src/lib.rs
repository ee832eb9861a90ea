/*
    Pennant - interactive banner composition engine
    Copyright (C) 2025 halden

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/


use std::collections::HashMap;
use serde::{Deserialize, Serialize};

pub mod geometry;
pub mod viewport;

pub use viewport::Viewport;

/// The caller-owned scene. `elements` order is the single source of truth
/// for draw order, z-order and hit-test priority: index 0 is drawn first
/// (bottom), the last index is topmost and wins hit-tests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Banner {
    pub width: u32,
    pub height: u32,
    /// Hex color ("#rrggbb") or a key into the caller's resource map.
    #[serde(default)]
    pub background: Option<String>,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Element {
    pub id: String,
    pub x: f32,
    pub y: f32,
    /// Degrees, about the element's own bounding-box center.
    #[serde(default)]
    pub rotation: f32,
    pub item: Item,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Item {
    Text(TextItem),
    Image(ImageItem),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextItem {
    pub content: String,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    pub font_family: String,
    #[serde(default = "default_font_weight")]
    pub font_weight: u16,
    pub color: String,
    #[serde(default)]
    pub align: TextAlign,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageItem {
    pub source: String,
    #[serde(default = "default_image_extent")]
    pub width: f32,
    #[serde(default = "default_image_extent")]
    pub height: f32,
}

fn default_font_size() -> f32 {
    48.0
}

fn default_font_weight() -> u16 {
    400
}

fn default_image_extent() -> f32 {
    100.0
}

/// An element's axis-aligned bounding box in its own local (pre-rotation)
/// frame, plus the rotation applied about its center. Derived per layout
/// pass and never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub rotation: f32,
}

impl ElementRect {
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Containment test for a point already de-rotated into this rect's
    /// local frame.
    pub fn contains_local(&self, lx: f32, ly: f32) -> bool {
        lx >= self.x && lx <= self.x + self.w && ly >= self.y && ly <= self.y + self.h
    }
}

/// Element id -> bounding rect of the most recent layout pass. Rebuilt in
/// full by [`layout`]; entries for elements that have since mutated must not
/// be trusted, which is why the editor re-runs layout after every mutation.
#[derive(Debug, Clone, Default)]
pub struct RectCache {
    rects: HashMap<String, ElementRect>,
}

impl RectCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<ElementRect> {
        self.rects.get(id).copied()
    }

    pub fn insert(&mut self, id: String, rect: ElementRect) {
        self.rects.insert(id, rect);
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Measurement seam between layout and whatever shapes the text. The render
/// crate implements this with cosmic-text; tests substitute a fixed-advance
/// stub.
pub trait TextMeasurer {
    /// Width of the rendered string, in canvas units.
    fn measure_width(&mut self, item: &TextItem) -> f32;
}

/// Rebuilds `cache` from the current element list. Text height is
/// `font_size * 1.2`; the x-anchor shifts by alignment so `x` means the
/// left edge, the centerline, or the right edge respectively.
pub fn layout(banner: &Banner, measurer: &mut dyn TextMeasurer, cache: &mut RectCache) {
    cache.clear();
    for element in &banner.elements {
        let rect = match &element.item {
            Item::Text(text) => {
                let w = measurer.measure_width(text);
                let x = match text.align {
                    TextAlign::Left => element.x,
                    TextAlign::Center => element.x - w / 2.0,
                    TextAlign::Right => element.x - w,
                };
                ElementRect {
                    x,
                    y: element.y,
                    w,
                    h: text.font_size * 1.2,
                    rotation: element.rotation,
                }
            }
            Item::Image(img) => ElementRect {
                x: element.x,
                y: element.y,
                w: if img.width > 0.0 { img.width } else { default_image_extent() },
                h: if img.height > 0.0 { img.height } else { default_image_extent() },
                rotation: element.rotation,
            },
        };
        cache.insert(element.id.clone(), rect);
    }
}

impl Banner {
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Elements in hit-test order: topmost (last drawn) first.
    pub fn iter_top_down(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().rev()
    }
}

/// Non-rotating transform for the circular profile-picture overlay. The
/// overlay's own drag/zoom lives with the caller; the editor only routes
/// wheel zoom into it when the pointer is over the circle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AvatarTransform {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl AvatarTransform {
    pub const BASE_DIAMETER: f32 = 160.0;

    pub fn contains(&self, px: f32, py: f32) -> bool {
        let r = Self::BASE_DIAMETER / 2.0 * self.scale;
        let dx = px - self.x;
        let dy = py - self.y;
        dx * dx + dy * dy <= r * r
    }
}

impl Default for AvatarTransform {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, scale: 1.0 }
    }
}
