// File: crates/plot-core/src/surface.rs
// Summary: Scoped CPU raster surface; tracks how many drawing surfaces are alive.

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};

use log::trace;
use skia_safe as skia;

use crate::error::{PlotError, Result};

static OPEN_SURFACES: AtomicUsize = AtomicUsize::new(0);

/// Number of raster surfaces currently allocated by this crate.
pub fn open_surfaces() -> usize {
    OPEN_SURFACES.load(Ordering::SeqCst)
}

/// Owns a Skia raster surface for the duration of one render. Dropping it
/// releases the pixels, on early returns as well as on success.
pub struct RasterSurface {
    surface: skia::Surface,
}

impl RasterSurface {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(PlotError::SurfaceCreation { width, height })?;
        let open = OPEN_SURFACES.fetch_add(1, Ordering::SeqCst) + 1;
        trace!("raster surface {width}x{height} allocated ({open} open)");
        Ok(Self { surface })
    }
}

impl Deref for RasterSurface {
    type Target = skia::Surface;
    fn deref(&self) -> &Self::Target { &self.surface }
}

impl DerefMut for RasterSurface {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.surface }
}

impl Drop for RasterSurface {
    fn drop(&mut self) {
        let open = OPEN_SURFACES.fetch_sub(1, Ordering::SeqCst) - 1;
        trace!("raster surface released ({open} open)");
    }
}
