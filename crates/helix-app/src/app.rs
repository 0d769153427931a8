//! eframe application: one full-window canvas, no widgets.

use eframe::egui;

use helix_core::config::SceneConfig;
use helix_sim::{render, SceneEngine};

use crate::error::HostError;
use crate::frame_loop::FrameLoop;
use crate::surface::EguiSurface;

pub struct HelixApp {
    frame_loop: FrameLoop,
}

impl HelixApp {
    pub fn new(frame_loop: FrameLoop) -> Self {
        Self { frame_loop }
    }

    /// Forward pointer movement, resize and close requests to the loop.
    fn handle_input(&mut self, ctx: &egui::Context, origin: egui::Pos2) {
        let (moves, close_requested) = ctx.input(|i| {
            let moves: Vec<egui::Pos2> = i
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::PointerMoved(pos) => Some(*pos),
                    _ => None,
                })
                .collect();
            (moves, i.viewport().close_requested())
        });

        for pos in moves {
            self.frame_loop
                .pointer_moved((pos.x - origin.x) as f64, (pos.y - origin.y) as f64);
        }
        if close_requested {
            tracing::info!("window closing");
            self.frame_loop.stop();
        }
    }
}

impl eframe::App for HelixApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_cursor_icon(egui::CursorIcon::None);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                self.handle_input(ctx, rect.min);
                self.frame_loop
                    .observe_size(rect.width() as f64, rect.height() as f64);

                let Some(snapshot) = self.frame_loop.next_frame() else {
                    return;
                };
                let painter = ui.painter_at(rect);
                let mut surface = EguiSurface::new(&painter, rect.min);
                render::render_frame(&snapshot, &mut surface);
            });

        if !self.frame_loop.is_stopped() {
            ctx.request_repaint();
        }
    }
}

/// Open the window and run until it is closed.
pub fn run(config: SceneConfig) -> Result<(), HostError> {
    let engine = SceneEngine::new(config)?;
    let canvas = engine.canvas();
    tracing::info!(
        seed = engine.config().seed,
        width = canvas.width,
        height = canvas.height,
        "starting scene"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas.width as f32, canvas.height as f32])
            .with_title("Helix"),
        ..Default::default()
    };

    let frame_loop = FrameLoop::new(engine);
    eframe::run_native(
        "Helix",
        options,
        Box::new(move |_cc| Box::new(HelixApp::new(frame_loop))),
    )?;
    Ok(())
}
