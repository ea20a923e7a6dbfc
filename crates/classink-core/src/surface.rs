//! Raster drawing surface for freehand strokes.
//!
//! The surface is a plain RGBA8 pixel buffer, independent of the board
//! item collection composited above it. The background pattern is a
//! styling tag elsewhere, never part of this raster, so erasing can only
//! ever remove painted stroke pixels.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

/// How a stroke combines with pixels already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blend {
    /// Paint over what is there; translucent sources blend by alpha.
    SourceOver,
    /// Remove previously painted pixels under the stroke (eraser).
    DestinationOut,
}

/// Errors from encoding or decoding the raster payload.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("PNG encode error: {0}")]
    Encode(String),
    #[error("PNG decode error: {0}")]
    Decode(String),
    #[error("Invalid raster payload: {0}")]
    Payload(String),
}

/// A raster layer accumulating freehand strokes.
///
/// Fully transparent at creation. Strokes are composited synchronously:
/// every painted segment is visible in the buffer before the call returns.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    /// RGBA8 pixels, row-major.
    pixels: Vec<u8>,
}

impl RasterSurface {
    /// Create a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read a pixel. Out-of-bounds reads are transparent.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        if x >= self.width || y >= self.height {
            return Rgba8::transparent();
        }
        let i = self.index(x, y);
        Rgba8::new(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        )
    }

    /// Whether nothing has been painted (all pixels fully transparent).
    pub fn is_blank(&self) -> bool {
        self.pixels.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Full transparent fill.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    /// Composite one source pixel into the buffer.
    fn blend_pixel(&mut self, x: i64, y: i64, color: Rgba8, blend: Blend) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = self.index(x as u32, y as u32);
        match blend {
            Blend::SourceOver => {
                let sa = color.a as f64 / 255.0;
                if sa <= 0.0 {
                    return;
                }
                let da = self.pixels[i + 3] as f64 / 255.0;
                let out_a = sa + da * (1.0 - sa);
                for (c, sc) in [color.r, color.g, color.b].into_iter().enumerate() {
                    let dc = self.pixels[i + c] as f64 / 255.0;
                    let out = (sc as f64 / 255.0 * sa + dc * da * (1.0 - sa)) / out_a;
                    self.pixels[i + c] = (out * 255.0).round() as u8;
                }
                self.pixels[i + 3] = (out_a * 255.0).round() as u8;
            }
            Blend::DestinationOut => {
                let keep = 1.0 - color.a as f64 / 255.0;
                let out_a = (self.pixels[i + 3] as f64 * keep).round() as u8;
                self.pixels[i + 3] = out_a;
                if out_a == 0 {
                    self.pixels[i] = 0;
                    self.pixels[i + 1] = 0;
                    self.pixels[i + 2] = 0;
                }
            }
        }
    }

    /// Stamp a filled disc.
    pub fn stamp_disc(&mut self, center: Point, radius: f64, color: Rgba8, blend: Blend) {
        let r = radius.max(0.5);
        let x0 = (center.x - r).floor() as i64;
        let x1 = (center.x + r).ceil() as i64;
        let y0 = (center.y - r).floor() as i64;
        let y1 = (center.y + r).ceil() as i64;
        let r_sq = r * r;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f64 + 0.5 - center.x;
                let dy = y as f64 + 0.5 - center.y;
                if dx * dx + dy * dy <= r_sq {
                    self.blend_pixel(x, y, color, blend);
                }
            }
        }
    }

    /// Paint a round-capped segment by stamping discs along it.
    ///
    /// A zero-length segment paints a single dot. The segment is fully
    /// composited before this returns; there is no deferred rendering.
    pub fn paint_segment(
        &mut self,
        from: Point,
        to: Point,
        width: f64,
        color: Rgba8,
        blend: Blend,
    ) {
        let radius = (width / 2.0).max(0.5);
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let length = (dx * dx + dy * dy).sqrt();
        let steps = (length / (radius * 0.5)).ceil().max(1.0) as usize;

        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let p = Point::new(from.x + dx * t, from.y + dy * t);
            self.stamp_disc(p, radius, color, blend);
        }
    }

    /// Encode the raster as a base64 PNG payload for persistence.
    pub fn encode(&self) -> Result<String, RasterError> {
        use base64::{Engine, engine::general_purpose::STANDARD};

        let mut bytes = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut bytes, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder
                .write_header()
                .map_err(|e| RasterError::Encode(e.to_string()))?;
            writer
                .write_image_data(&self.pixels)
                .map_err(|e| RasterError::Encode(e.to_string()))?;
        }
        Ok(STANDARD.encode(&bytes))
    }

    /// Rebuild a surface from an encoded payload.
    pub fn decode(payload: &str) -> Result<Self, RasterError> {
        use base64::{Engine, engine::general_purpose::STANDARD};

        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| RasterError::Payload(e.to_string()))?;

        let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
        let mut reader = decoder
            .read_info()
            .map_err(|e| RasterError::Decode(e.to_string()))?;
        let mut pixels = vec![0; reader.output_buffer_size()];
        let info = reader
            .next_frame(&mut pixels)
            .map_err(|e| RasterError::Decode(e.to_string()))?;

        if info.color_type != png::ColorType::Rgba || info.bit_depth != png::BitDepth::Eight {
            return Err(RasterError::Payload(format!(
                "unsupported PNG layout: {:?}/{:?}",
                info.color_type, info.bit_depth
            )));
        }

        pixels.truncate(info.buffer_size());
        Ok(Self {
            width: info.width,
            height: info.height,
            pixels,
        })
    }
}
