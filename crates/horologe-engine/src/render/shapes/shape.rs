use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::paint::Color;
use crate::render::RenderCtx;
use crate::scene::shapes::Border;
use crate::scene::DrawCmd;

use super::common::{
    create_globals_buffer, create_quad_pipeline, draw_instances, globals_layout_entry,
    Globals, InstanceBuffer, UnitQuad,
};

const KIND_RECT: f32 = 0.0;
const KIND_ELLIPSE: f32 = 1.0;
const KIND_SEGMENT: f32 = 2.0;

/// Renderer for `DrawCmd::{Line, Ellipse, Rect}`.
///
/// All three share one SDF pipeline so they can be interleaved freely in a
/// single instanced draw. Borders are drawn inside the shape's outline.
pub struct ShapeRenderer {
    gpu: Option<ShapeGpu>,
    instances: InstanceBuffer<ShapeInstance>,
}

struct ShapeGpu {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    globals: wgpu::Buffer,
    quad: UnitQuad,
}

impl Default for ShapeRenderer {
    fn default() -> Self {
        Self { gpu: None, instances: InstanceBuffer::new("horologe shape instances") }
    }
}

impl ShapeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new frame.
    pub(crate) fn begin(&mut self, ctx: &RenderCtx<'_>) {
        self.ensure_gpu(ctx);
        self.instances.clear();
        if let Some(gpu) = self.gpu.as_ref() {
            ctx.queue.write_buffer(&gpu.globals, 0, bytemuck::bytes_of(&Globals::from_ctx(ctx)));
        }
    }

    /// Stages `cmd`. Returns the number of instances added (0 or 1).
    pub(crate) fn push(&mut self, cmd: &DrawCmd) -> u32 {
        match ShapeInstance::from_cmd(cmd) {
            Some(instance) => {
                self.instances.push(instance);
                1
            }
            None => 0,
        }
    }

    #[inline]
    pub(crate) fn staged(&self) -> u32 {
        self.instances.len()
    }

    pub(crate) fn upload(&mut self, ctx: &RenderCtx<'_>) {
        self.instances.upload(ctx);
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, range: Range<u32>) {
        let Some(gpu) = self.gpu.as_ref() else { return };
        let Some(instances) = self.instances.buffer() else { return };
        draw_instances(rpass, &gpu.pipeline, &gpu.bind_group, &gpu.quad, instances, range);
    }

    fn ensure_gpu(&mut self, ctx: &RenderCtx<'_>) {
        if self.gpu.as_ref().is_some_and(|gpu| gpu.format == ctx.surface_format) {
            return;
        }

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("horologe shape bgl"),
                entries: &[globals_layout_entry(0)],
            });
        let pipeline = create_quad_pipeline(
            ctx,
            "horologe shape",
            include_str!("shaders/shape.wgsl"),
            &bind_group_layout,
            ShapeInstance::layout(),
        );
        let globals = create_globals_buffer(ctx.device, "horologe shape globals");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("horologe shape bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry { binding: 0, resource: globals.as_entire_binding() }],
        });

        self.gpu = Some(ShapeGpu {
            format: ctx.surface_format,
            pipeline,
            bind_group,
            globals,
            quad: UnitQuad::new(ctx.device, "horologe shape"),
        });
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (64 bytes):
///
///  offset  0  p0      [f32; 2]   loc 1   rect min | ellipse center | segment start
///  offset  8  p1      [f32; 2]   loc 2   rect max | ellipse radii  | segment end
///  offset 16  params  [f32; 4]   loc 3   kind, corner radius or half width, border width, 0
///  offset 32  fill    [f32; 4]   loc 4
///  offset 48  stroke  [f32; 4]   loc 5
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct ShapeInstance {
    p0: [f32; 2],
    p1: [f32; 2],
    params: [f32; 4],
    fill: [f32; 4],
    stroke: [f32; 4],
}

impl ShapeInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // p0
        2 => Float32x2, // p1
        3 => Float32x4, // params
        4 => Float32x4, // fill
        5 => Float32x4  // stroke
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    /// `None` for text and for shapes that would not cover any pixel.
    fn from_cmd(cmd: &DrawCmd) -> Option<Self> {
        match cmd {
            DrawCmd::Line(line) => {
                if line.width <= 0.0 || !line.from.is_finite() || !line.to.is_finite() {
                    return None;
                }
                Some(Self {
                    p0: [line.from.x, line.from.y],
                    p1: [line.to.x, line.to.y],
                    params: [KIND_SEGMENT, line.width * 0.5, 0.0, 0.0],
                    fill: line.color.to_array(),
                    stroke: [0.0; 4],
                })
            }
            DrawCmd::Ellipse(e) => {
                if e.radii.x <= 0.0 || e.radii.y <= 0.0 || !e.center.is_finite() {
                    return None;
                }
                let (border_width, stroke) = border_params(e.border);
                if e.fill.a <= 0.0 && border_width <= 0.0 {
                    return None;
                }
                Some(Self {
                    p0: [e.center.x, e.center.y],
                    p1: [e.radii.x, e.radii.y],
                    params: [KIND_ELLIPSE, 0.0, border_width, 0.0],
                    fill: e.fill.to_array(),
                    stroke,
                })
            }
            DrawCmd::Rect(r) => {
                if r.rect.is_empty() {
                    return None;
                }
                let (border_width, stroke) = border_params(r.border);
                let max = r.rect.max();
                Some(Self {
                    p0: [r.rect.origin.x, r.rect.origin.y],
                    p1: [max.x, max.y],
                    params: [KIND_RECT, r.corner_radius.max(0.0), border_width, 0.0],
                    fill: r.fill.to_array(),
                    stroke,
                })
            }
            DrawCmd::Text(_) => None,
        }
    }
}

fn border_params(border: Option<Border>) -> (f32, [f32; 4]) {
    match border {
        Some(b) if b.width > 0.0 => (b.width, b.color.to_array()),
        _ => (0.0, Color::transparent().to_array()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::scene::shapes::ellipse::EllipseCmd;
    use crate::scene::shapes::line::LineCmd;
    use crate::scene::shapes::rect::RectCmd;

    fn white() -> Color {
        Color::rgb_u8(255, 255, 255)
    }

    #[test]
    fn instance_is_64_bytes() {
        assert_eq!(std::mem::size_of::<ShapeInstance>(), 64);
    }

    #[test]
    fn line_uses_half_width() {
        let cmd = DrawCmd::Line(LineCmd::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), 6.0, white()));
        let inst = ShapeInstance::from_cmd(&cmd).unwrap();
        assert_eq!(inst.params[0], KIND_SEGMENT);
        assert_eq!(inst.params[1], 3.0);
        assert_eq!(inst.p0, [1.0, 2.0]);
        assert_eq!(inst.p1, [3.0, 4.0]);
    }

    #[test]
    fn zero_width_line_skipped() {
        let cmd = DrawCmd::Line(LineCmd::new(Vec2::zero(), Vec2::new(3.0, 4.0), 0.0, white()));
        assert!(ShapeInstance::from_cmd(&cmd).is_none());
    }

    #[test]
    fn outline_ellipse_keeps_border() {
        let cmd = DrawCmd::Ellipse(EllipseCmd::new(
            Vec2::new(10.0, 10.0),
            Vec2::new(5.0, 5.0),
            Color::transparent(),
            Some(Border::new(2.0, white())),
        ));
        let inst = ShapeInstance::from_cmd(&cmd).unwrap();
        assert_eq!(inst.params[0], KIND_ELLIPSE);
        assert_eq!(inst.params[2], 2.0);
        assert_eq!(inst.fill, [0.0; 4]);
        assert_eq!(inst.stroke, white().to_array());
    }

    #[test]
    fn invisible_ellipse_skipped() {
        let cmd = DrawCmd::Ellipse(EllipseCmd::new(
            Vec2::new(10.0, 10.0),
            Vec2::new(5.0, 5.0),
            Color::transparent(),
            None,
        ));
        assert!(ShapeInstance::from_cmd(&cmd).is_none());
    }

    #[test]
    fn rect_uses_min_and_max() {
        let cmd = DrawCmd::Rect(RectCmd::solid(Rect::new(1.0, 2.0, 10.0, 20.0), white()));
        let inst = ShapeInstance::from_cmd(&cmd).unwrap();
        assert_eq!(inst.params[0], KIND_RECT);
        assert_eq!(inst.p0, [1.0, 2.0]);
        assert_eq!(inst.p1, [11.0, 22.0]);
    }

    #[test]
    fn empty_rect_skipped() {
        let cmd = DrawCmd::Rect(RectCmd::solid(Rect::new(1.0, 2.0, 0.0, 20.0), white()));
        assert!(ShapeInstance::from_cmd(&cmd).is_none());
    }
}
