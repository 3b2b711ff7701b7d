/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// FIFO is supported everywhere and is plenty for a once-a-second repaint.
    pub present_mode: wgpu::PresentMode,

    /// Used only when the surface supports it.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// A clock has no use for the discrete GPU.
    pub power_preference: wgpu::PowerPreference,

    /// Hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::LowPower,
            desired_maximum_frame_latency: 2,
        }
    }
}
