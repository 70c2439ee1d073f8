//! Core application state and lifecycle.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use bouncebox_core::{Bounds, DEFAULT_CONFIG_PATH, EditorSession, GameConfig, NumericPolicy, WindowSettings, step_all};
use egui::Color32;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::error::{AppError, AppResult};
use crate::fonts;
use crate::pacing::FramePacer;
use crate::scene::{self, LabelStyle};
use crate::ui;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    /// Scene file read at startup.
    pub config_path: PathBuf,
    /// Frames per second, best effort.
    pub frame_rate: u32,
    pub background_color: Color32,
    pub numeric_policy: NumericPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "BounceBox".to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            frame_rate: 60,
            background_color: Color32::BLACK,
            numeric_policy: NumericPolicy::default(),
        }
    }
}

/// Window size from a scene, rejecting empty or negative dimensions.
pub fn window_size(window: WindowSettings) -> AppResult<LogicalSize<u32>> {
    let WindowSettings { width, height } = window;
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok(LogicalSize::new(w, h)),
        _ => Err(AppError::InvalidWindowSize { width, height }),
    }
}

/// wgpu device and the window's configured surface.
struct Gpu {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
}

impl Gpu {
    fn new(window: Arc<Window>) -> AppResult<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("bouncebox device"),
            ..Default::default()
        }))?;

        let size = window.inner_size();
        let mut config = surface
            .get_default_config(&adapter, size.width.max(1), size.height.max(1))
            .ok_or(AppError::UnsupportedSurface)?;
        // egui-wgpu expects to write gamma-space colors straight to the target
        let caps = surface.get_capabilities(&adapter);
        if let Some(format) = caps.formats.iter().copied().find(|f| !f.is_srgb()) {
            config.format = format;
        }
        surface.configure(&device, &config);

        log::info!(
            "Surface configured: {}x{} {:?} on {}",
            config.width,
            config.height,
            config.format,
            adapter.get_info().name
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    fn acquire(&mut self) -> Option<wgpu::SurfaceTexture> {
        match self.surface.get_current_texture() {
            Ok(texture) => Some(texture),
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                self.surface.configure(&self.device, &self.config);
                None
            }
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}", e);
                None
            }
        }
    }
}

/// Runtime state that exists once the window is up.
struct AppState {
    window: Arc<Window>,
    gpu: Gpu,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl AppState {
    fn render(&mut self, output: egui::FullOutput, background: Color32) {
        self.egui_state
            .handle_platform_output(&self.window, output.platform_output);
        let primitives = self.egui_ctx.tessellate(output.shapes, output.pixels_per_point);

        let device = &self.gpu.device;
        let queue = &self.gpu.queue;
        for (id, image_delta) in &output.textures_delta.set {
            self.egui_renderer.update_texture(device, queue, *id, image_delta);
        }

        if let Some(surface_texture) = self.gpu.acquire() {
            let device = &self.gpu.device;
            let queue = &self.gpu.queue;
            let view = surface_texture
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default());
            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.gpu.config.width, self.gpu.config.height],
                pixels_per_point: output.pixels_per_point,
            };

            let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame encoder"),
            });
            let callbacks = self.egui_renderer.update_buffers(
                device,
                queue,
                &mut encoder,
                &primitives,
                &screen_descriptor,
            );

            let [r, g, b, a] = background.to_normalized_gamma_f32();
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene render pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            // egui-wgpu wants a 'static render pass
            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &primitives, &screen_descriptor);
            drop(render_pass);

            queue.submit(callbacks.into_iter().chain(std::iter::once(encoder.finish())));
            self.window.pre_present_notify();
            surface_texture.present();
        }

        for id in &output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    scene: GameConfig,
    editor: EditorSession,
    labels: LabelStyle,
    config_dump: String,
    /// Font bytes waiting for the egui context, taken on first resume.
    font: Option<Vec<u8>>,
    pacer: FramePacer,
    state: Option<AppState>,
    /// First fatal error hit inside the event loop.
    error: Option<AppError>,
}

impl App {
    /// Load the scene and its font. Both failures are fatal.
    pub fn with_config(config: AppConfig) -> AppResult<Self> {
        let scene = GameConfig::load_from_with(&config.config_path, config.numeric_policy)?;
        window_size(scene.window)?;
        let font = fonts::read_font(&scene.font.path)?;

        Ok(Self {
            labels: LabelStyle::from_font(&scene.font, fonts::label_family()),
            config_dump: scene::config_dump(&scene),
            editor: EditorSession::new(),
            font: Some(font),
            pacer: FramePacer::new(config.frame_rate),
            state: None,
            error: None,
            scene,
            config,
        })
    }

    /// Run with the default configuration until the window closes.
    pub fn run() -> AppResult<()> {
        Self::run_with_config(AppConfig::default())
    }

    /// Run until the window closes.
    pub fn run_with_config(config: AppConfig) -> AppResult<()> {
        let mut app = Self::with_config(config)?;
        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut app)?;
        app.error.take().map_or(Ok(()), Err)
    }

    /// Current scene, including every edit and step applied so far.
    pub fn scene(&self) -> &GameConfig {
        &self.scene
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> AppResult<AppState> {
        let size = window_size(self.scene.window)?;
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(size);
        let window = Arc::new(event_loop.create_window(window_attrs)?);
        log::info!("Window created, initializing renderer...");

        let gpu = Gpu::new(window.clone())?;

        let egui_ctx = egui::Context::default();
        if let Some(font) = self.font.take() {
            fonts::install_label_font(&egui_ctx, font);
        }
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            Some(gpu.device.limits().max_texture_dimension_2d as usize),
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &gpu.device,
            gpu.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        log::info!(
            "BounceBox initialized - {}x{}, {} shape(s)",
            size.width,
            size.height,
            self.scene.shapes.len()
        );

        window.request_redraw();
        Ok(AppState {
            window,
            gpu,
            egui_ctx,
            egui_state,
            egui_renderer,
        })
    }

    fn redraw(&mut self) {
        let Self {
            config,
            scene,
            editor,
            labels,
            config_dump,
            pacer,
            state: Some(state),
            ..
        } = self
        else {
            return;
        };

        pacer.begin_frame(Instant::now());
        log::trace!("frame {}", pacer.frame_index());
        let bounds = Bounds::from(scene.window);
        let labels: &LabelStyle = labels;
        let config_dump: &str = config_dump;

        let input = state.egui_state.take_egui_input(&state.window);
        // egui may run more than one pass per frame; the scene steps once
        let mut stepped = false;
        let output = state.egui_ctx.run(input, |ctx| {
            ui::properties_panel(ctx, editor, &mut scene.shapes);
            if !stepped {
                step_all(&mut scene.shapes, bounds);
                stepped = true;
            }

            let painter = ctx.layer_painter(egui::LayerId::background());
            scene::paint_config_dump(&painter, config_dump, labels.family.clone());
            scene::paint_shapes(&painter, &scene.shapes, labels);
        });

        state.render(output, config.background_color);
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        self.error.get_or_insert(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Creating window...");
        match self.init(event_loop) {
            Ok(state) => self.state = Some(state),
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        // Let egui process the event first
        let _ = state.egui_state.on_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                state.gpu.resize(size.width, size.height);
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(state) = &self.state else {
            return;
        };

        if self.pacer.is_due(Instant::now()) {
            state.window.request_redraw();
        }
        if let Some(deadline) = self.pacer.deadline() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }
}
