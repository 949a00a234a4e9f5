use crate::foundation::core::Canvas;
use crate::foundation::error::LyumenResult;
use crate::pattern::frame::PatternFrame;

/// A rendered frame as RGBA8 pixels.
///
/// Surfaces produce **premultiplied alpha** by default. The `premultiplied` flag is included to
/// make this explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy of the pixel data, as image encoders expect.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                out.extend_from_slice(&[0, 0, 0, 0]);
                continue;
            }
            let unpremul = |c: u8| -> u8 { ((u16::from(c) * 255 + a / 2) / a).min(255) as u8 };
            out.extend_from_slice(&[unpremul(px[0]), unpremul(px[1]), unpremul(px[2]), px[3]]);
        }
        out
    }
}

/// Surface-level settings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderSettings {
    /// If set, the surface is cleared to this straight-alpha RGBA8 color before drawing.
    pub clear_rgba: Option<[u8; 4]>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear_rgba: Some([0, 0, 0, 255]),
        }
    }
}

/// A raster target the render loop paints pattern frames into.
pub trait PatternSurface {
    /// Size of the surface's container, or `None` while the surface is unmounted or has no
    /// drawing context. Frames are skipped while this is `None`.
    fn container_size(&self) -> Option<Canvas>;

    /// Resize the backing raster to `canvas` and clear it.
    fn resize_and_clear(&mut self, canvas: Canvas) -> LyumenResult<()>;

    /// Paint one generated frame on top of the cleared raster.
    fn paint(&mut self, frame: &PatternFrame) -> LyumenResult<()>;
}
