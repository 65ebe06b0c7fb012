//! wgpu renderer for the Lifeboard viewer

use std::sync::Arc;

use anyhow::Result;
use wgpu::{Instance, Surface, SurfaceConfiguration};
use winit::window::Window;

use lifeboard_core::gpu::{CellPipeline, GpuDevice};
use lifeboard_core::{CellStyle, DisplayConfig, RenderError, Renderer, Vertex};

/// Window-backed renderer with one vertex buffer per cell
pub struct WgpuRenderer {
    gpu: GpuDevice,
    surface: Surface<'static>,
    config: SurfaceConfiguration,
    pipeline: CellPipeline,
    canvas_size: u32,
    background: wgpu::Color,
    buffers: Vec<wgpu::Buffer>,
    queued: Vec<(usize, u32)>,
    frame: Option<wgpu::SurfaceTexture>,
}

impl WgpuRenderer {
    /// Create a renderer drawing into `window`
    pub async fn new(window: Arc<Window>, display: &DisplayConfig) -> Result<Self> {
        let instance = Instance::default();
        let surface = instance.create_surface(window.clone())?;
        let gpu = GpuDevice::new(&instance, Some(&surface)).await?;
        log::info!("{}", gpu.info());

        let surface_caps = surface.get_capabilities(&gpu.adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let size = window.inner_size();
        let config = SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&gpu.device, &config);

        let pipeline = CellPipeline::new(&gpu.device, surface_format, &CellStyle::from(display));
        let [r, g, b] = display.background;

        Ok(Self {
            gpu,
            surface,
            config,
            pipeline,
            canvas_size: display.canvas_size,
            background: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
            buffers: Vec::new(),
            queued: Vec::new(),
            frame: None,
        })
    }

    /// Reconfigure the surface after the window changed size
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.gpu.device, &self.config);
        }
    }
}

impl Renderer for WgpuRenderer {
    type Handle = usize;

    fn canvas_size(&self) -> Result<u32, RenderError> {
        if self.canvas_size == 0 {
            return Err(RenderError::CanvasUnavailable(
                "display.canvas_size is 0".to_string(),
            ));
        }
        Ok(self.canvas_size)
    }

    fn create_drawable(&mut self, geometry: &[Vertex]) -> Result<usize, RenderError> {
        if geometry.is_empty() {
            return Err(RenderError::DrawableCreation("empty geometry".to_string()));
        }
        let handle = self.buffers.len();
        let buffer = self
            .gpu
            .create_vertex_buffer(&format!("cell_vertices_{}", handle), geometry);
        self.buffers.push(buffer);
        Ok(handle)
    }

    fn draw(&mut self, handle: usize, vertex_count: u32) -> Result<(), RenderError> {
        if self.frame.is_none() {
            return Err(RenderError::Draw("draw outside of a frame".to_string()));
        }
        if handle >= self.buffers.len() {
            return Err(RenderError::Draw(format!("unknown drawable {}", handle)));
        }
        self.queued.push((handle, vertex_count));
        Ok(())
    }

    fn begin_frame(&mut self) -> Result<(), RenderError> {
        let output = self
            .surface
            .get_current_texture()
            .map_err(|e| RenderError::Frame(e.to_string()))?;
        self.queued.clear();
        self.frame = Some(output);
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        let output = self
            .frame
            .take()
            .ok_or_else(|| RenderError::Frame("end_frame without begin_frame".to_string()))?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("cell_render_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("cell_render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.background),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.pipeline.pipeline);
            render_pass.set_bind_group(0, &self.pipeline.style_bind_group, &[]);
            for &(handle, vertex_count) in &self.queued {
                render_pass.set_vertex_buffer(0, self.buffers[handle].slice(..));
                render_pass.draw(0..vertex_count, 0..1);
            }
        }

        self.gpu.submit(encoder.finish());
        output.present();
        self.queued.clear();
        Ok(())
    }
}
