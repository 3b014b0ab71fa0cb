//! GPU device and surface.
//!
//! One `Gpu` per window: adapter/device/queue plus the configured swapchain.
//! Frames are acquired with [`Gpu::begin_frame`] and presented by [`Gpu::submit`].

mod gpu;
mod surface;

pub use gpu::Gpu;

/// GPU setup knobs. Defaults suit a 2D viewer: sRGB, FIFO, no extra features.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when the surface offers one.
    pub prefer_srgb: bool,

    pub present_mode: wgpu::PresentMode,

    /// Requested alpha mode; falls back to the first supported one.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,
    pub required_limits:   wgpu::Limits,

    /// Latency hint passed through to the surface configuration.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb:                   true,
            present_mode:                  wgpu::PresentMode::Fifo,
            alpha_mode:                    None,
            required_features:             wgpu::Features::empty(),
            required_limits:               wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

/// Outcome of a failed frame acquisition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the next frame should succeed.
    Reconfigured,
    /// Transient; drop this frame.
    SkipFrame,
    /// Unrecoverable (out of memory).
    Fatal,
}

/// A single acquired swapchain frame, presented by [`Gpu::submit`].
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view:            wgpu::TextureView,
    pub encoder:         wgpu::CommandEncoder,
}
