use wgpu::{Adapter, Device, Instance, Queue, RequestAdapterOptions, Surface};
use wgpu::util::DeviceExt;

use crate::error::GpuError;
use crate::Vertex;

/// GPU device manager shared by the cell renderers
pub struct GpuDevice {
    pub adapter: Adapter,
    pub device: Device,
    pub queue: Queue,
}

impl GpuDevice {
    /// Request an adapter and device, optionally compatible with a window surface
    pub async fn new(
        instance: &Instance,
        compatible_surface: Option<&Surface<'_>>,
    ) -> Result<Self, GpuError> {
        let adapter = instance
            .request_adapter(&RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface,
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GpuError::NoAdapter)?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    label: Some("lifeboard_device"),
                },
                None,
            )
            .await?;

        Ok(Self {
            adapter,
            device,
            queue,
        })
    }

    /// Get device info for logging
    pub fn info(&self) -> String {
        let info = self.adapter.get_info();
        format!("GPU: {} ({:?})", info.name, info.backend)
    }

    /// Upload one cell's quad into its own vertex buffer
    pub fn create_vertex_buffer(&self, label: &str, vertices: &[Vertex]) -> wgpu::Buffer {
        self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        })
    }

    /// Submit commands to the GPU
    pub fn submit(&self, commands: wgpu::CommandBuffer) {
        self.queue.submit(Some(commands));
    }
}
