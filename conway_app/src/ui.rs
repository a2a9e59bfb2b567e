// ui.rs - Per-frame stepping, key handling and painting

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Key, Rect, RichText, Vec2};

use conway::{CellColor, Session};

const BACKGROUND: Color32 = Color32::BLACK;
const HELP_BACKGROUND: Color32 = Color32::from_rgb(140, 165, 140);
const HELP_TEXT: Color32 = Color32::BLACK;
const HELP_FONT_SIZE: f32 = 18.0;

pub struct LifeApp {
    session: Session,
    last_update: Instant,
    frame_interval: Duration,
}

impl LifeApp {
    pub fn new(session: Session) -> Self {
        let frame_interval = session.config().frame_interval();
        Self {
            session,
            last_update: Instant::now(),
            frame_interval,
        }
    }

    // One command per frame, space first, like the help strip lists them.
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (space, color, regenerate) = ctx.input(|i| {
            (i.key_pressed(Key::Space), i.key_pressed(Key::C), i.key_pressed(Key::R))
        });
        if space {
            self.session.toggle_running();
        } else if color {
            self.session.cycle_color();
        } else if regenerate {
            self.session.regenerate();
        }
    }

    fn paint_board(&self, ui: &mut egui::Ui) {
        let config = self.session.config();
        let cell = config.cell_pixels as f32;
        let size = Vec2::new(config.width as f32 * cell, config.height as f32 * cell);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, BACKGROUND);

        let live = to_color32(self.session.color());
        for (row, cells) in self.session.board().rows().enumerate() {
            for (col, _) in cells.iter().enumerate().filter(|(_, alive)| **alive) {
                let min = origin + Vec2::new(col as f32 * cell, row as f32 * cell);
                painter.rect_filled(Rect::from_min_size(min, Vec2::splat(cell)), 0.0, live);
            }
        }
    }

    fn paint_help(&self, ui: &mut egui::Ui) {
        let text = |s: String| RichText::new(s).monospace().size(HELP_FONT_SIZE).color(HELP_TEXT);
        let board = self.session.board();

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.label(text("Start/Stop: [SPACE]".into()));
                ui.label(text("Regenerate: [R]".into()));
            });
            ui.add_space(HELP_FONT_SIZE);
            ui.vertical(|ui| {
                ui.label(text("Color: [C]".into()));
                ui.label(
                    RichText::new(format!(
                        "Gen {} | Live {}",
                        self.session.generation(),
                        board.live_count()
                    ))
                    .monospace()
                    .color(HELP_TEXT),
                );
            });
        });
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.last_update.elapsed() >= self.frame_interval {
            self.session.tick();
            self.last_update = Instant::now();
        }

        self.handle_keys(ctx);

        let help_height = self.session.config().help_height as f32;
        egui::TopBottomPanel::bottom("help")
            .resizable(false)
            .exact_height(help_height)
            .frame(egui::Frame::none().fill(HELP_BACKGROUND).inner_margin(6.0))
            .show(ctx, |ui| self.paint_help(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| self.paint_board(ui));

        // Keeps frames coming at the target rate whether or not input arrives
        ctx.request_repaint_after(self.frame_interval);
    }
}

fn to_color32(color: CellColor) -> Color32 {
    let [r, g, b] = color.rgb();
    Color32::from_rgb(r, g, b)
}
