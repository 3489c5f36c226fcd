// File: crates/plot-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and bounding boxes.

use skia_safe as skia;

use crate::types::SubplotParams;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_wh(width: i32, height: i32) -> Self {
        Self { left: 0, top: 0, right: width, bottom: height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    pub fn to_skia(self) -> skia::IRect {
        skia::IRect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

/// Floating point rectangle in canvas pixels (y grows downwards).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { left: x, top: y, right: x + w, bottom: y + h }
    }

    /// Axes rectangle for a canvas of `width` x `height` pixels.
    pub fn from_subplot(params: &SubplotParams, width: i32, height: i32) -> Self {
        let (w, h) = (width as f32, height as f32);
        Self {
            left: params.left * w,
            right: params.right * w,
            top: (1.0 - params.top) * h,
            bottom: (1.0 - params.bottom) * h,
        }
    }

    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }

    pub fn union(&self, other: &RectF) -> Self {
        Self {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    pub fn outset(&self, d: f32) -> Self {
        Self { left: self.left - d, top: self.top - d, right: self.right + d, bottom: self.bottom + d }
    }

    /// Round outwards to whole pixels and clamp into `[0, width] x [0, height]`.
    pub fn round_out_clamped(&self, width: i32, height: i32) -> RectI32 {
        let l = clamp(self.left.floor() as i32, 0, width);
        let t = clamp(self.top.floor() as i32, 0, height);
        let r = clamp(self.right.ceil() as i32, l, width);
        let b = clamp(self.bottom.ceil() as i32, t, height);
        RectI32::from_ltrb(l, t, r, b)
    }

    pub fn to_skia(self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
