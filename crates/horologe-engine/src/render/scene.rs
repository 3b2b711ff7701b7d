use std::ops::Range;

use crate::render::shapes::shape::ShapeRenderer;
use crate::render::shapes::text::TextRenderer;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Pipeline {
    Shapes,
    Text,
}

/// A contiguous run of instances drawn by one pipeline.
#[derive(Debug, Clone, Eq, PartialEq)]
struct Batch {
    pipeline: Pipeline,
    instances: Range<u32>,
}

/// Extends the last batch when `pipeline` matches, otherwise opens a new one.
///
/// Instance ranges are per pipeline, so `first` is that pipeline's running
/// count before this command.
fn extend_batches(batches: &mut Vec<Batch>, pipeline: Pipeline, first: u32, count: u32) {
    if count == 0 {
        return;
    }
    if let Some(last) = batches.last_mut()
        && last.pipeline == pipeline
        && last.instances.end == first
    {
        last.instances.end += count;
        return;
    }
    batches.push(Batch { pipeline, instances: first..first + count });
}

/// Draws a whole [`DrawList`] in paint order.
#[derive(Default)]
pub struct SceneRenderer {
    shapes: ShapeRenderer,
    text: TextRenderer,
    batches: Vec<Batch>,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one render pass that loads `target` and draws `draw_list` over it.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        fonts: &FontSystem,
    ) {
        self.shapes.begin(ctx);
        self.text.begin(ctx);
        self.batches.clear();

        for item in draw_list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::Text(cmd) => {
                    let first = self.text.staged();
                    let count = self.text.push(ctx, cmd, fonts);
                    extend_batches(&mut self.batches, Pipeline::Text, first, count);
                }
                cmd => {
                    let first = self.shapes.staged();
                    let count = self.shapes.push(cmd);
                    extend_batches(&mut self.batches, Pipeline::Shapes, first, count);
                }
            }
        }

        if self.batches.is_empty() {
            return;
        }

        self.shapes.upload(ctx);
        self.text.upload(ctx);

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("horologe scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations { load: wgpu::LoadOp::Load, store: wgpu::StoreOp::Store },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        for batch in &self.batches {
            match batch.pipeline {
                Pipeline::Shapes => self.shapes.draw(&mut rpass, batch.instances.clone()),
                Pipeline::Text => self.text.draw(&mut rpass, batch.instances.clone()),
            }
        }
    }
}
