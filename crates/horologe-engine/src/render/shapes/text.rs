use std::collections::HashMap;
use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::render::RenderCtx;
use crate::scene::shapes::text::TextCmd;
use crate::text::FontSystem;

use super::common::{
    create_globals_buffer, create_quad_pipeline, draw_instances, globals_layout_entry,
    Globals, InstanceBuffer, UnitQuad,
};

// ── atlas constants ───────────────────────────────────────────────────────

const ATLAS_SIZE: u32 = 2048;
const GLYPH_PADDING: u32 = 1; // pixels between glyphs in the atlas

/// Shelf packer for the glyph atlas.
#[derive(Debug)]
struct ShelfPacker {
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    full: bool,
}

impl Default for ShelfPacker {
    fn default() -> Self {
        Self { cursor_x: GLYPH_PADDING, cursor_y: GLYPH_PADDING, row_height: 0, full: false }
    }
}

impl ShelfPacker {
    /// Reserves a `w` × `h` slot, returning its top-left corner.
    fn place(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if self.full {
            return None;
        }
        if self.cursor_x + w + GLYPH_PADDING > ATLAS_SIZE {
            self.cursor_y += self.row_height + GLYPH_PADDING;
            self.cursor_x = GLYPH_PADDING;
            self.row_height = 0;
        }
        if self.cursor_y + h + GLYPH_PADDING > ATLAS_SIZE {
            self.full = true;
            return None;
        }
        let slot = (self.cursor_x, self.cursor_y);
        self.cursor_x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);
        Some(slot)
    }
}

#[derive(Debug, Copy, Clone)]
struct CachedGlyph {
    uv_min: [f32; 2],
    uv_max: [f32; 2],
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Renderer for `DrawCmd::Text`.
///
/// Glyphs are rasterized at physical size on first use and packed into a
/// 2048 × 2048 R8Unorm atlas. The cache key (`GlyphRasterConfig`) covers
/// font, glyph and pixel size, so a scale-factor change rasterizes afresh.
pub struct TextRenderer {
    gpu: Option<TextGpu>,
    packer: ShelfPacker,
    glyph_cache: HashMap<GlyphRasterConfig, CachedGlyph>,
    instances: InstanceBuffer<GlyphInstance>,
    layout: Layout<()>,
    warned_full: bool,
}

struct TextGpu {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    globals: wgpu::Buffer,
    atlas: wgpu::Texture,
    quad: UnitQuad,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            gpu: None,
            packer: ShelfPacker::default(),
            glyph_cache: HashMap::new(),
            instances: InstanceBuffer::new("horologe text instances"),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
            warned_full: false,
        }
    }
}

impl TextRenderer {
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

    /// Lays out `cmd` and stages one instance per visible glyph.
    ///
    /// Returns the number of instances added.
    pub(crate) fn push(&mut self, ctx: &RenderCtx<'_>, cmd: &TextCmd, fonts: &FontSystem) -> u32 {
        let Some(font) = fonts.get(cmd.font) else {
            log::warn!("TextRenderer: unknown {:?}, skipping", cmd.font);
            return 0;
        };

        let scale = ctx.scale_factor.max(0.01);
        let color = cmd.color.to_array();

        self.layout.reset(&LayoutSettings {
            x: (cmd.origin.x * scale).round(),
            y: (cmd.origin.y * scale).round(),
            ..LayoutSettings::default()
        });
        self.layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size * scale, 0));

        // Copy out so the borrow on `self.layout` ends before the atlas is touched.
        let glyphs: Vec<(GlyphRasterConfig, f32, f32, usize, usize)> = self
            .layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| (g.key, g.x, g.y, g.width, g.height))
            .collect();

        let before = self.instances.len();
        for (key, x, y, w, h) in glyphs {
            let cached = match self.glyph_cache.get(&key) {
                Some(cached) => *cached,
                None => {
                    let (metrics, bitmap) = font.rasterize_config(key);
                    if metrics.width == 0 || metrics.height == 0 {
                        continue;
                    }
                    let Some(cached) =
                        self.upload_glyph(ctx, &bitmap, metrics.width as u32, metrics.height as u32)
                    else {
                        continue;
                    };
                    self.glyph_cache.insert(key, cached);
                    cached
                }
            };

            self.instances.push(GlyphInstance {
                dst_min: [x / scale, y / scale],
                dst_max: [(x + w as f32) / scale, (y + h as f32) / scale],
                uv_min: cached.uv_min,
                uv_max: cached.uv_max,
                color,
            });
        }
        self.instances.len() - before
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

    // ── atlas ──────────────────────────────────────────────────────────────

    fn upload_glyph(
        &mut self,
        ctx: &RenderCtx<'_>,
        bitmap: &[u8],
        w: u32,
        h: u32,
    ) -> Option<CachedGlyph> {
        let Some((gx, gy)) = self.packer.place(w, h) else {
            if !self.warned_full {
                log::warn!(
                    "TextRenderer: glyph atlas is full ({ATLAS_SIZE}×{ATLAS_SIZE}); \
                     some glyphs will not be rendered"
                );
                self.warned_full = true;
            }
            return None;
        };
        let gpu = self.gpu.as_ref()?;

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &gpu.atlas,
                mip_level: 0,
                origin: wgpu::Origin3d { x: gx, y: gy, z: 0 },
                aspect: wgpu::TextureAspect::All,
            },
            bitmap,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(w),
                rows_per_image: Some(h),
            },
            wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
        );

        let atlas = ATLAS_SIZE as f32;
        Some(CachedGlyph {
            uv_min: [gx as f32 / atlas, gy as f32 / atlas],
            uv_max: [(gx + w) as f32 / atlas, (gy + h) as f32 / atlas],
        })
    }

    // ── lazy init ──────────────────────────────────────────────────────────

    fn ensure_gpu(&mut self, ctx: &RenderCtx<'_>) {
        if self.gpu.as_ref().is_some_and(|gpu| gpu.format == ctx.surface_format) {
            return;
        }

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("horologe text bgl"),
                entries: &[
                    globals_layout_entry(0),
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        let pipeline = create_quad_pipeline(
            ctx,
            "horologe text",
            include_str!("shaders/text.wgsl"),
            &bind_group_layout,
            GlyphInstance::layout(),
        );

        let atlas = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("horologe text atlas"),
            size: wgpu::Extent3d {
                width: ATLAS_SIZE,
                height: ATLAS_SIZE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let atlas_view = atlas.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("horologe text sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let globals = create_globals_buffer(ctx.device, "horologe text globals");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("horologe text bind group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: globals.as_entire_binding() },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&atlas_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        // fresh atlas: every cached UV is stale
        self.glyph_cache.clear();
        self.packer = ShelfPacker::default();
        self.warned_full = false;

        self.gpu = Some(TextGpu {
            format: ctx.surface_format,
            pipeline,
            bind_group,
            globals,
            atlas,
            quad: UnitQuad::new(ctx.device, "horologe text"),
        });
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (48 bytes):
///
///  offset  0  dst_min  [f32; 2]   loc 1
///  offset  8  dst_max  [f32; 2]   loc 2
///  offset 16  uv_min   [f32; 2]   loc 3
///  offset 24  uv_max   [f32; 2]   loc 4
///  offset 32  color    [f32; 4]   loc 5
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlyphInstance {
    dst_min: [f32; 2],
    dst_max: [f32; 2],
    uv_min: [f32; 2],
    uv_max: [f32; 2],
    color: [f32; 4],
}

impl GlyphInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // dst_min
        2 => Float32x2, // dst_max
        3 => Float32x2, // uv_min
        4 => Float32x2, // uv_max
        5 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
