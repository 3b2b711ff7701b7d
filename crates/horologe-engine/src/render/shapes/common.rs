//! GPU types and helpers shared by the quad renderers.

use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::render::RenderCtx;

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState { color: component, alpha: component }
}

// ── globals uniform ───────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct Globals {
    pub viewport: [f32; 2],
    pub scale: f32,
    pub _pad: f32,
}

impl Globals {
    pub(super) fn from_ctx(ctx: &RenderCtx<'_>) -> Self {
        Self {
            viewport: ctx.viewport.as_uniform(),
            scale: ctx.scale_factor.max(0.01),
            _pad: 0.0,
        }
    }
}

const GLOBALS_SIZE: NonZeroU64 = match NonZeroU64::new(std::mem::size_of::<Globals>() as u64) {
    Some(size) => size,
    None => panic!("Globals is not zero-sized"),
};

/// Bind group layout entry for the globals uniform.
pub(super) fn globals_layout_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: Some(GLOBALS_SIZE),
        },
        count: None,
    }
}

pub(super) fn create_globals_buffer(device: &wgpu::Device, label: &str) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: GLOBALS_SIZE.get(),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Unit quad shared by every instance of a pipeline.
pub(super) struct UnitQuad {
    pub vbo: wgpu::Buffer,
    pub ibo: wgpu::Buffer,
}

impl UnitQuad {
    pub(super) fn new(device: &wgpu::Device, label: &str) -> Self {
        let vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} quad vbo")),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let ibo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} quad ibo")),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self { vbo, ibo }
    }

    pub(super) const INDEX_COUNT: u32 = QUAD_INDICES.len() as u32;
}

// ── instance buffer ───────────────────────────────────────────────────────

/// CPU staging plus a grow-only GPU vertex buffer for per-instance data.
pub(super) struct InstanceBuffer<T: Pod> {
    label: &'static str,
    staged: Vec<T>,
    gpu: Option<wgpu::Buffer>,
    capacity: usize,
}

impl<T: Pod> InstanceBuffer<T> {
    pub(super) fn new(label: &'static str) -> Self {
        Self { label, staged: Vec::new(), gpu: None, capacity: 0 }
    }

    #[inline]
    pub(super) fn clear(&mut self) {
        self.staged.clear();
    }

    #[inline]
    pub(super) fn push(&mut self, instance: T) {
        self.staged.push(instance);
    }

    #[inline]
    pub(super) fn len(&self) -> u32 {
        self.staged.len() as u32
    }

    /// Copies staged instances to the GPU, growing the buffer if needed.
    pub(super) fn upload(&mut self, ctx: &RenderCtx<'_>) {
        if self.staged.is_empty() {
            return;
        }
        if self.gpu.is_none() || self.staged.len() > self.capacity {
            let capacity = self.staged.len().next_power_of_two().max(64);
            self.gpu = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.label),
                size: (capacity * std::mem::size_of::<T>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.capacity = capacity;
            log::trace!("{}: grew to {capacity} instances", self.label);
        }
        if let Some(buffer) = self.gpu.as_ref() {
            ctx.queue.write_buffer(buffer, 0, bytemuck::cast_slice(&self.staged));
        }
    }

    #[inline]
    pub(super) fn buffer(&self) -> Option<&wgpu::Buffer> {
        self.gpu.as_ref()
    }
}

// ── pipeline ──────────────────────────────────────────────────────────────

/// Builds an instanced-quad pipeline: vertex buffer 0 is [`QuadVertex`],
/// vertex buffer 1 is `instance_layout`.
pub(super) fn create_quad_pipeline(
    ctx: &RenderCtx<'_>,
    label: &str,
    shader_source: &str,
    bind_group_layout: &wgpu::BindGroupLayout,
    instance_layout: wgpu::VertexBufferLayout<'static>,
) -> wgpu::RenderPipeline {
    let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&format!("{label} shader")),
        source: wgpu::ShaderSource::Wgsl(shader_source.into()),
    });

    let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(&format!("{label} pipeline layout")),
        bind_group_layouts: &[bind_group_layout],
        immediate_size: 0,
    });

    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&format!("{label} pipeline")),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[QuadVertex::layout(), instance_layout],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(premul_alpha_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

/// Binds the unit quad plus `instances` and draws `range` of them.
pub(super) fn draw_instances(
    rpass: &mut wgpu::RenderPass<'_>,
    pipeline: &wgpu::RenderPipeline,
    bind_group: &wgpu::BindGroup,
    quad: &UnitQuad,
    instances: &wgpu::Buffer,
    range: std::ops::Range<u32>,
) {
    rpass.set_pipeline(pipeline);
    rpass.set_bind_group(0, bind_group, &[]);
    rpass.set_vertex_buffer(0, quad.vbo.slice(..));
    rpass.set_vertex_buffer(1, instances.slice(..));
    rpass.set_index_buffer(quad.ibo.slice(..), wgpu::IndexFormat::Uint16);
    rpass.draw_indexed(0..UnitQuad::INDEX_COUNT, 0, range);
}
