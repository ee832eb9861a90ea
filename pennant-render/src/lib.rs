/*
    Pennant - interactive banner composition engine
    Copyright (C) 2025 halden

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/


//! Two-pass render pipeline for the banner canvas.
//!
//! One scene-drawing routine serves both the interactive view (safe-zone
//! guides, selection overlay) and the clean export. Export draws into its
//! own off-screen pixmap, so the interactive buffer is never mutated for
//! snapshotting. Every pass starts by re-laying-out the rect cache, and the
//! per-element transform here is the exact forward counterpart of the
//! inverse transform the geometry engine uses for hit-testing.

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, Weight};
use image::GenericImageView;
use log::{debug, warn};
use pennant_core::geometry::{Handle, HANDLE_SIZE, ROTATION_HANDLE_OFFSET};
use pennant_core::{layout, Banner, ElementRect, ImageItem, Item, RectCache, TextAlign, TextItem, TextMeasurer};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tiny_skia::*;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to create pixmap: {0}")]
    PixmapCreationError(String),

    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),
}

/// The two flags of the scene-drawing routine. Export always runs with the
/// default (everything off).
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions<'a> {
    pub safe_zone: bool,
    pub selection: Option<&'a str>,
}

/// Fixed guide positions for the safe-zone overlay, in canvas units.
const SAFE_MARGIN_X: f32 = 220.0;
const SAFE_MARGIN_Y: f32 = 60.0;

fn guide_color() -> Color {
    Color::from_rgba8(77, 210, 255, 200)
}

fn accent_color() -> Color {
    Color::from_rgba8(77, 159, 255, 255)
}

pub struct Renderer {
    font_system: FontSystem,
    swash_cache: SwashCache,
    pixmap_buffer: Option<Pixmap>,
    image_cache: HashMap<String, Pixmap>,
    loaded_fonts: HashSet<String>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
            pixmap_buffer: None,
            image_cache: HashMap::new(),
            loaded_fonts: HashSet::new(),
        }
    }

    /// Renders the interactive view into the internal buffer and returns
    /// the raw pixel data (premultiplied RGBA8). The buffer is reused
    /// across calls to avoid allocation overhead; `cache` is rebuilt with
    /// this pass's rects.
    pub fn render_raw(
        &mut self,
        banner: &Banner,
        resources: &HashMap<String, Vec<u8>>,
        options: RenderOptions<'_>,
        cache: &mut RectCache,
    ) -> Result<&[u8], RenderError> {
        self.register_fonts(resources);

        if self
            .pixmap_buffer
            .as_ref()
            .map_or(true, |p| p.width() != banner.width || p.height() != banner.height)
        {
            self.pixmap_buffer = Pixmap::new(banner.width, banner.height);
        }

        let mut pixmap = self
            .pixmap_buffer
            .take()
            .ok_or_else(|| RenderError::PixmapCreationError("invalid canvas dimensions".into()))?;
        let drawn = self.draw_scene(&mut pixmap, banner, resources, options, cache);
        let pixmap = self.pixmap_buffer.insert(pixmap);
        drawn?;
        Ok(pixmap.data())
    }

    /// Interactive render encoded as PNG.
    pub fn render(
        &mut self,
        banner: &Banner,
        resources: &HashMap<String, Vec<u8>>,
        options: RenderOptions<'_>,
        cache: &mut RectCache,
    ) -> Result<Vec<u8>, RenderError> {
        self.render_raw(banner, resources, options, cache)?;
        let pixmap = self
            .pixmap_buffer
            .as_ref()
            .ok_or_else(|| RenderError::PixmapCreationError("render buffer missing".into()))?;
        pixmap
            .encode_png()
            .map_err(|e| RenderError::EncodingError(e.to_string()))
    }

    /// Clean PNG snapshot with guides and selection overlay suppressed.
    ///
    /// Draws into its own off-screen target, so the interactive buffer and
    /// the caller's rect cache are untouched and no restore pass is needed
    /// afterward. Synchronous: whatever bytes are in `resources` right now
    /// are what the snapshot sees.
    pub fn export(
        &mut self,
        banner: &Banner,
        resources: &HashMap<String, Vec<u8>>,
    ) -> Result<Vec<u8>, RenderError> {
        self.register_fonts(resources);
        let mut pixmap = Pixmap::new(banner.width, banner.height)
            .ok_or_else(|| RenderError::PixmapCreationError("invalid canvas dimensions".into()))?;
        let mut cache = RectCache::new();
        self.draw_scene(&mut pixmap, banner, resources, RenderOptions::default(), &mut cache)?;
        pixmap
            .encode_png()
            .map_err(|e| RenderError::EncodingError(e.to_string()))
    }

    fn register_fonts(&mut self, resources: &HashMap<String, Vec<u8>>) {
        let mut new_fonts = false;
        for (name, data) in resources {
            if (name.ends_with(".ttf") || name.ends_with(".otf") || name.ends_with(".woff2"))
                && !self.loaded_fonts.contains(name)
            {
                self.font_system.db_mut().load_font_data(data.clone());
                self.loaded_fonts.insert(name.clone());
                new_fonts = true;
            }
        }
        if new_fonts {
            debug!("registered {} font resource(s)", self.loaded_fonts.len());
        }
    }

    fn draw_scene(
        &mut self,
        pixmap: &mut Pixmap,
        banner: &Banner,
        resources: &HashMap<String, Vec<u8>>,
        options: RenderOptions<'_>,
        cache: &mut RectCache,
    ) -> Result<(), RenderError> {
        layout(banner, &mut *self, cache);

        match &banner.background {
            Some(bg) => {
                if let Some(color) = parse_color(bg) {
                    pixmap.fill(color);
                } else if !self.draw_cover_background(pixmap, bg, banner, resources) {
                    warn!("background resource '{bg}' unavailable, falling back to black");
                    pixmap.fill(Color::BLACK);
                }
            }
            None => pixmap.fill(Color::TRANSPARENT),
        }

        for element in &banner.elements {
            let Some(rect) = cache.get(&element.id) else {
                continue;
            };
            let transform = element_transform(&rect);
            match &element.item {
                Item::Text(text) => self.draw_text(pixmap, text, transform)?,
                Item::Image(img) => self.draw_image(pixmap, img, &rect, transform, resources)?,
            }
        }

        if options.safe_zone {
            self.draw_safe_zone(pixmap, banner)?;
        }

        if let Some(id) = options.selection {
            if let Some(rect) = cache.get(id) {
                draw_selection(pixmap, &rect);
            }
        }

        Ok(())
    }

    fn draw_text(
        &mut self,
        pixmap: &mut Pixmap,
        text: &TextItem,
        transform: Transform,
    ) -> Result<(), RenderError> {
        let color = parse_color(&text.color)
            .ok_or_else(|| RenderError::InvalidColorFormat(text.color.clone()))?;

        let metrics = Metrics::new(text.font_size, text.font_size * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        let attrs = Attrs::new()
            .family(resolve_family(&text.font_family))
            .weight(Weight(text.font_weight));

        buffer.set_text(&mut self.font_system, &text.content, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(&mut self.font_system, false);

        for run in buffer.layout_runs() {
            for glyph in run.glyphs {
                let physical = glyph.physical((0., 0.), 1.0);

                let Some(image) = self
                    .swash_cache
                    .get_image(&mut self.font_system, physical.cache_key)
                else {
                    warn!("no rasterization for glyph in '{}'", text.content);
                    continue;
                };

                let width = image.placement.width;
                let height = image.placement.height;
                if width == 0 || height == 0 {
                    continue;
                }

                let glyph_x = (physical.x as f32) + (image.placement.left as f32);
                let glyph_y = run.line_y + (physical.y as f32) - (image.placement.top as f32);

                let Some(size) = IntSize::from_wh(width, height) else {
                    continue;
                };

                let mut pixels = Vec::with_capacity((width * height * 4) as usize);
                if image.data.len() == (width * height) as usize {
                    // Alpha mask: tint with the text color.
                    let r_f = color.red();
                    let g_f = color.green();
                    let b_f = color.blue();
                    let a_f = color.alpha();

                    for mask_val in image.data.iter() {
                        let mask_alpha = *mask_val as f32 / 255.0;
                        let final_alpha = a_f * mask_alpha;

                        pixels.push((r_f * final_alpha * 255.0) as u8);
                        pixels.push((g_f * final_alpha * 255.0) as u8);
                        pixels.push((b_f * final_alpha * 255.0) as u8);
                        pixels.push((final_alpha * 255.0) as u8);
                    }
                } else if image.data.len() == (width * height * 4) as usize {
                    // Already RGBA (color emoji); premultiply.
                    for chunk in image.data.chunks(4) {
                        let a_f = chunk[3] as f32 / 255.0;
                        pixels.push((chunk[0] as f32 * a_f) as u8);
                        pixels.push((chunk[1] as f32 * a_f) as u8);
                        pixels.push((chunk[2] as f32 * a_f) as u8);
                        pixels.push(chunk[3]);
                    }
                } else {
                    warn!("unknown swash image format, length {}", image.data.len());
                    continue;
                }

                if let Some(glyph_pixmap) = Pixmap::from_vec(pixels, size) {
                    let glyph_transform = transform.pre_translate(glyph_x, glyph_y);
                    pixmap.draw_pixmap(
                        0,
                        0,
                        glyph_pixmap.as_ref(),
                        &PixmapPaint::default(),
                        glyph_transform,
                        None,
                    );
                }
            }
        }

        Ok(())
    }

    fn draw_image(
        &mut self,
        pixmap: &mut Pixmap,
        img: &ImageItem,
        rect: &ElementRect,
        transform: Transform,
        resources: &HashMap<String, Vec<u8>>,
    ) -> Result<(), RenderError> {
        let key = format!("{}_{}x{}", img.source, rect.w, rect.h);
        if !self.image_cache.contains_key(&key) {
            let Some(bytes) = resources.get(&img.source) else {
                warn!("image resource '{}' not found", img.source);
                return Ok(());
            };
            let decoded = match image::load_from_memory(bytes) {
                Ok(decoded) => decoded,
                Err(e) => {
                    warn!("failed to decode image '{}': {e}", img.source);
                    return Ok(());
                }
            };

            let target_w = rect.w as u32;
            let target_h = rect.h as u32;
            if target_w == 0 || target_h == 0 {
                return Ok(());
            }
            let resized = decoded.resize_exact(target_w, target_h, image::imageops::FilterType::Lanczos3);
            let Some(premultiplied) = premultiplied_pixmap(resized.to_rgba8()) else {
                return Ok(());
            };
            self.image_cache.insert(key.clone(), premultiplied);
        }

        let Some(source) = self.image_cache.get(&key) else {
            return Ok(());
        };

        let pattern = Pattern::new(
            source.as_ref(),
            SpreadMode::Pad,
            FilterQuality::Bilinear,
            1.0,
            Transform::identity(),
        );
        let mut paint = Paint::default();
        paint.shader = pattern;
        paint.anti_alias = true;

        let draw_rect = Rect::from_xywh(0.0, 0.0, rect.w, rect.h)
            .ok_or_else(|| RenderError::InvalidDimensions("image width/height must be > 0".into()))?;
        pixmap.fill_rect(draw_rect, &paint, transform, None);
        Ok(())
    }

    /// Composites a resource image behind the scene with a cover fit:
    /// scale to fill, then center-crop the overflow on both axes.
    fn draw_cover_background(
        &mut self,
        pixmap: &mut Pixmap,
        source: &str,
        banner: &Banner,
        resources: &HashMap<String, Vec<u8>>,
    ) -> bool {
        let key = format!("bg_{}_{}x{}", source, banner.width, banner.height);
        if !self.image_cache.contains_key(&key) {
            let Some(bytes) = resources.get(source) else {
                return false;
            };
            let decoded = match image::load_from_memory(bytes) {
                Ok(decoded) => decoded,
                Err(e) => {
                    warn!("failed to decode background '{source}': {e}");
                    return false;
                }
            };
            let (src_w, src_h) = decoded.dimensions();
            if src_w == 0 || src_h == 0 {
                return false;
            }

            let (scaled_w, scaled_h, crop_x, crop_y) =
                cover_geometry(src_w, src_h, banner.width, banner.height);
            let scaled = decoded.resize_exact(scaled_w, scaled_h, image::imageops::FilterType::Lanczos3);
            let cropped = scaled.crop_imm(crop_x, crop_y, banner.width, banner.height);
            let Some(background) = premultiplied_pixmap(cropped.to_rgba8()) else {
                return false;
            };
            self.image_cache.insert(key.clone(), background);
        }

        match self.image_cache.get(&key) {
            Some(background) => {
                pixmap.draw_pixmap(
                    0,
                    0,
                    background.as_ref(),
                    &PixmapPaint::default(),
                    Transform::identity(),
                    None,
                );
                true
            }
            None => false,
        }
    }

    /// Fixed-position guide lines and numeric labels, independent of scene
    /// content.
    fn draw_safe_zone(&mut self, pixmap: &mut Pixmap, banner: &Banner) -> Result<(), RenderError> {
        let w = banner.width as f32;
        let h = banner.height as f32;

        let mut paint = Paint::default();
        paint.set_color(guide_color());
        paint.anti_alias = true;
        let stroke = Stroke {
            width: 1.0,
            dash: StrokeDash::new(vec![8.0, 6.0], 0.0),
            ..Stroke::default()
        };

        let mut pb = PathBuilder::new();
        for x in [SAFE_MARGIN_X, w - SAFE_MARGIN_X] {
            pb.move_to(x, 0.0);
            pb.line_to(x, h);
        }
        for y in [SAFE_MARGIN_Y, h - SAFE_MARGIN_Y] {
            pb.move_to(0.0, y);
            pb.line_to(w, y);
        }
        if let Some(path) = pb.finish() {
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }

        let labels = [
            (format!("{}", SAFE_MARGIN_X as u32), SAFE_MARGIN_X + 6.0, 4.0),
            (format!("{}", SAFE_MARGIN_Y as u32), 6.0, SAFE_MARGIN_Y + 4.0),
        ];
        for (content, x, y) in labels {
            let label = TextItem {
                content,
                font_size: 14.0,
                font_family: "Sans Serif".to_string(),
                font_weight: 400,
                color: "#4dd2ff".to_string(),
                align: TextAlign::Left,
            };
            self.draw_text(pixmap, &label, Transform::from_translate(x, y))?;
        }
        Ok(())
    }
}

impl TextMeasurer for Renderer {
    fn measure_width(&mut self, item: &TextItem) -> f32 {
        let metrics = Metrics::new(item.font_size, item.font_size * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        let attrs = Attrs::new()
            .family(resolve_family(&item.font_family))
            .weight(Weight(item.font_weight));

        buffer.set_text(&mut self.font_system, &item.content, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer.layout_runs().map(|run| run.line_w).fold(0.0, f32::max)
    }
}

/// Forward transform for one element: translate to its center, rotate,
/// translate back, draw content at the untransformed origin. Must stay the
/// exact mirror of the de-rotation in `pennant_core::geometry`.
fn element_transform(rect: &ElementRect) -> Transform {
    let cx = rect.w / 2.0;
    let cy = rect.h / 2.0;
    Transform::identity()
        .post_translate(-cx, -cy)
        .post_rotate(rect.rotation)
        .post_translate(cx + rect.x, cy + rect.y)
}

/// Selection overlay: dashed bounding rectangle, all eight resize handles,
/// and the rotation grip on its stem, all under the element's rotation.
fn draw_selection(pixmap: &mut Pixmap, rect: &ElementRect) {
    let transform = element_transform(rect);

    let mut paint = Paint::default();
    paint.set_color(accent_color());
    paint.anti_alias = true;

    if let Some(outline) = Rect::from_xywh(0.0, 0.0, rect.w, rect.h) {
        let path = PathBuilder::from_rect(outline);
        let stroke = Stroke {
            width: 1.5,
            dash: StrokeDash::new(vec![6.0, 4.0], 0.0),
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, transform, None);
    }

    let mut stem = PathBuilder::new();
    stem.move_to(rect.w / 2.0, 0.0);
    stem.line_to(rect.w / 2.0, -ROTATION_HANDLE_OFFSET);
    if let Some(path) = stem.finish() {
        pixmap.stroke_path(&path, &paint, &Stroke::default(), transform, None);
    }

    // Handle anchors in the element's local frame.
    let local = ElementRect { x: 0.0, y: 0.0, ..*rect };
    let half = HANDLE_SIZE / 2.0;
    for handle in Handle::HIT_ORDER {
        if handle == Handle::Rotate {
            continue;
        }
        let (hx, hy) = handle.anchor(&local);
        if let Some(square) = Rect::from_xywh(hx - half, hy - half, HANDLE_SIZE, HANDLE_SIZE) {
            pixmap.fill_rect(square, &paint, transform, None);
        }
    }

    if let Some(grip) = PathBuilder::from_circle(rect.w / 2.0, -ROTATION_HANDLE_OFFSET, half) {
        pixmap.fill_path(&grip, &paint, FillRule::Winding, transform, None);
    }
}

/// Cover-fit geometry: returns (scaled_w, scaled_h, crop_x, crop_y).
/// Scale is `max(target/src)` per axis so the image fills the target; the
/// crop offsets sit at 50% of the overflow and can never exceed the scaled
/// dimensions.
fn cover_geometry(src_w: u32, src_h: u32, target_w: u32, target_h: u32) -> (u32, u32, u32, u32) {
    let scale = (target_w as f32 / src_w as f32).max(target_h as f32 / src_h as f32);
    let scaled_w = ((src_w as f32 * scale).round() as u32).max(target_w);
    let scaled_h = ((src_h as f32 * scale).round() as u32).max(target_h);
    let crop_x = (scaled_w - target_w) / 2;
    let crop_y = (scaled_h - target_h) / 2;
    (scaled_w, scaled_h, crop_x, crop_y)
}

fn premultiplied_pixmap(rgba: image::RgbaImage) -> Option<Pixmap> {
    let (w, h) = rgba.dimensions();
    let size = IntSize::from_wh(w, h)?;
    let mut pixels = Vec::with_capacity((w * h * 4) as usize);
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        let a_f = a as f32 / 255.0;
        pixels.push((r as f32 * a_f) as u8);
        pixels.push((g as f32 * a_f) as u8);
        pixels.push((b as f32 * a_f) as u8);
        pixels.push(a);
    }
    Pixmap::from_vec(pixels, size)
}

fn resolve_family(name: &str) -> Family<'_> {
    match name.trim().to_lowercase().as_str() {
        "serif" => Family::Serif,
        "mono" | "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        "" | "sans-serif" | "sans serif" | "system-ui" | "arial" => Family::SansSerif,
        _ => Family::Name(name.trim()),
    }
}

fn parse_color(hex: &str) -> Option<Color> {
    if !hex.starts_with('#') || hex.len() != 7 {
        return None;
    }

    let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
    let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
    let b = u8::from_str_radix(&hex[5..7], 16).ok()?;

    Some(Color::from_rgba8(r, g, b, 255))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pennant_core::Element;
    use std::io::Cursor;

    fn checker_png() -> Vec<u8> {
        let mut img = image::RgbaImage::new(64, 64);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = if (x / 8 + y / 8) % 2 == 0 {
                image::Rgba([220, 60, 60, 255])
            } else {
                image::Rgba([60, 60, 220, 255])
            };
        }
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn test_scene() -> (Banner, HashMap<String, Vec<u8>>) {
        let mut resources = HashMap::new();
        resources.insert("badge".to_string(), checker_png());

        let banner = Banner {
            width: 320,
            height: 160,
            background: Some("#1a1a1a".to_string()),
            elements: vec![Element {
                id: "badge".to_string(),
                x: 40.0,
                y: 30.0,
                rotation: 15.0,
                item: Item::Image(ImageItem {
                    source: "badge".to_string(),
                    width: 80.0,
                    height: 80.0,
                }),
            }],
        };
        (banner, resources)
    }

    #[test]
    fn renders_scene_to_png() {
        let (banner, resources) = test_scene();
        let mut renderer = Renderer::new();
        let mut cache = RectCache::new();

        let png = renderer
            .render(&banner, &resources, RenderOptions::default(), &mut cache)
            .expect("render failed");
        assert!(!png.is_empty());
        // The pass populated the rect cache for hit-testing.
        let rect = cache.get("badge").unwrap();
        assert_eq!((rect.x, rect.y, rect.w, rect.h, rect.rotation), (40.0, 30.0, 80.0, 80.0, 15.0));
    }

    #[test]
    fn overlays_change_the_interactive_output() {
        let (banner, resources) = test_scene();
        let mut renderer = Renderer::new();
        let mut cache = RectCache::new();

        let clean = renderer
            .render(&banner, &resources, RenderOptions::default(), &mut cache)
            .unwrap();
        let decorated = renderer
            .render(
                &banner,
                &resources,
                RenderOptions { safe_zone: true, selection: Some("badge") },
                &mut cache,
            )
            .unwrap();
        assert_ne!(clean, decorated);
    }

    #[test]
    fn export_matches_clean_render_and_omits_overlays() {
        let (banner, resources) = test_scene();
        let mut renderer = Renderer::new();
        let mut cache = RectCache::new();

        let clean = renderer
            .render(&banner, &resources, RenderOptions::default(), &mut cache)
            .unwrap();
        // Overlays active at export time must not leak into the snapshot.
        let _ = renderer
            .render(
                &banner,
                &resources,
                RenderOptions { safe_zone: true, selection: Some("badge") },
                &mut cache,
            )
            .unwrap();
        let exported = renderer.export(&banner, &resources).unwrap();
        assert_eq!(exported, clean);
    }

    #[test]
    fn export_preserves_interactive_rendering() {
        let (banner, resources) = test_scene();
        let mut renderer = Renderer::new();
        let mut cache = RectCache::new();
        let options = RenderOptions { safe_zone: true, selection: Some("badge") };

        let before = renderer.render(&banner, &resources, options, &mut cache).unwrap();
        let _ = renderer.export(&banner, &resources).unwrap();
        let after = renderer.render(&banner, &resources, options, &mut cache).unwrap();
        assert_eq!(before, after);
        // Export did not clobber the caller's cache either.
        assert!(cache.get("badge").is_some());
    }

    #[test]
    fn export_is_idempotent_under_stable_scene() {
        let (banner, resources) = test_scene();
        let mut renderer = Renderer::new();

        let first = renderer.export(&banner, &resources).unwrap();
        let second = renderer.export(&banner, &resources).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_image_resource_renders_without_error() {
        let (mut banner, _) = test_scene();
        banner.background = None;
        let mut renderer = Renderer::new();
        let mut cache = RectCache::new();

        let png = renderer
            .render(&banner, &HashMap::new(), RenderOptions::default(), &mut cache)
            .expect("missing resources must degrade, not fail");
        assert!(!png.is_empty());
    }

    #[test]
    fn cover_geometry_crops_the_long_axis() {
        // Square source into a wide target: vertical overflow, split 50/50.
        assert_eq!(cover_geometry(100, 100, 200, 50), (200, 200, 0, 75));
        // Wide source into a square-ish target: horizontal overflow.
        assert_eq!(cover_geometry(400, 100, 200, 100), (400, 100, 100, 0));
        // Matching aspect: no crop at all.
        assert_eq!(cover_geometry(100, 50, 200, 100), (200, 100, 0, 0));
    }

    #[test]
    fn parses_hex_colors_only() {
        assert!(parse_color("#ffffff").is_some());
        assert!(parse_color("#00ff00").is_some());
        assert!(parse_color("ffffff").is_none());
        assert!(parse_color("#fff").is_none());
        assert!(parse_color("#zzzzzz").is_none());
    }
}
