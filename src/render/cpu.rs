use crate::foundation::core::{BezPath, Canvas, Point, Rgba8};
use crate::foundation::error::{LyumenError, LyumenResult};
use crate::pattern::frame::{Paint, PatternFrame};
use crate::render::backend::{FrameRGBA, PatternSurface, RenderSettings};

/// CPU raster surface powered by `vello_cpu`.
pub struct CpuSurface {
    settings: RenderSettings,
    container: Option<Canvas>,
    target: Option<CpuTarget>,
    ctx: Option<vello_cpu::RenderContext>,
}

struct CpuTarget {
    canvas: Canvas,
    pixmap: vello_cpu::Pixmap,
}

impl CpuSurface {
    /// Create an unmounted surface. Frames are skipped until [`CpuSurface::attach`] is called.
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            container: None,
            target: None,
            ctx: None,
        }
    }

    /// Create a surface already mounted in a container of size `canvas`.
    pub fn mounted(canvas: Canvas, settings: RenderSettings) -> Self {
        let mut s = Self::new(settings);
        s.attach(canvas);
        s
    }

    /// Mount the surface in a container of size `canvas`, or record a container resize.
    pub fn attach(&mut self, canvas: Canvas) {
        self.container = Some(canvas);
    }

    /// Unmount the surface. The backing raster is kept until the next resize.
    pub fn detach(&mut self) {
        self.container = None;
    }

    /// Read back the current raster as premultiplied RGBA8.
    pub fn readback(&self) -> LyumenResult<FrameRGBA> {
        let t = self
            .target
            .as_ref()
            .ok_or_else(|| LyumenError::render("surface has not been sized yet"))?;
        Ok(FrameRGBA {
            width: t.canvas.width,
            height: t.canvas.height,
            data: t.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> LyumenResult<R>,
    ) -> LyumenResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }
}

impl PatternSurface for CpuSurface {
    fn container_size(&self) -> Option<Canvas> {
        self.container
    }

    fn resize_and_clear(&mut self, canvas: Canvas) -> LyumenResult<()> {
        let (w, h) = canvas.as_u16()?;
        let reuse = self.target.as_ref().is_some_and(|t| t.canvas == canvas);
        if !reuse {
            self.target = Some(CpuTarget {
                canvas,
                pixmap: vello_cpu::Pixmap::new(w, h),
            });
        }
        let clear = self.clear_premul();
        if let Some(t) = self.target.as_mut() {
            clear_pixmap(&mut t.pixmap, clear);
        }
        Ok(())
    }

    fn paint(&mut self, frame: &PatternFrame) -> LyumenResult<()> {
        let canvas = self
            .target
            .as_ref()
            .map(|t| t.canvas)
            .ok_or_else(|| LyumenError::render("paint before the surface was sized"))?;
        let (w, h) = canvas.as_u16()?;
        let clear = self.settings.clear_rgba;

        self.with_ctx_mut(w, h, |this, ctx| {
            ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

            if let Some([r, g, b, a]) = clear {
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(canvas.width),
                    f64::from(canvas.height),
                ));
            }

            draw_frame(ctx, frame);

            ctx.flush();
            let t = this
                .target
                .as_mut()
                .ok_or_else(|| LyumenError::render("surface target vanished during paint"))?;
            ctx.render_to_pixmap(&mut t.pixmap);
            Ok(())
        })
    }
}

impl CpuSurface {
    fn clear_premul(&self) -> [u8; 4] {
        self.settings
            .clear_rgba
            .map(|[r, g, b, a]| Rgba8 { r, g, b, a }.premultiplied())
            .unwrap_or([0, 0, 0, 0])
    }
}

fn draw_frame(ctx: &mut vello_cpu::RenderContext, frame: &PatternFrame) {
    let c = frame.color;
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
    if let Paint::Stroke(width) = frame.paint {
        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
    }

    for prim in &frame.primitives {
        let opacity = prim.alpha().clamp(0.0, 1.0) as f32;
        if opacity <= 0.0 {
            continue;
        }
        let path = bezpath_to_cpu(&prim.to_bezpath());
        if opacity < 1.0 {
            ctx.push_opacity_layer(opacity);
        }
        match frame.paint {
            Paint::Stroke(_) => ctx.stroke_path(&path),
            Paint::Fill => ctx.fill_path(&path),
        }
        if opacity < 1.0 {
            ctx.pop_layer();
        }
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
