use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use eframe::egui::{Color32, ScrollArea, Stroke, Ui};
use eframe::run_native;
use life::{lifeform, Config, EdgePolicy, Phase, Rgb, Simulation};

const EMPTY_FILL: Color32 = Color32::from_rgba_premultiplied(2, 2, 2, 230);
const GRID_LINE: Color32 = Color32::from_rgba_premultiplied(5, 5, 5, 128);
const GLOW_ALPHA: u8 = 100;

/// Conway's Game of Life with glowing cells.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Cells per side of the square grid
    #[arg(long, default_value_t = 100)]
    grid_size: usize,

    /// Side length of one cell on screen, in points
    #[arg(long, default_value_t = life::DEFAULT_CELL_PIXEL_SIZE)]
    cell_size: u32,

    /// Milliseconds between two generations
    #[arg(long, default_value_t = 300)]
    interval_ms: u64,

    /// Evaluate cells on the outer ring instead of freezing them
    #[arg(long)]
    bounded_edges: bool,

    /// Lifeform to place before the window opens (Arch, Glider, R-pentomino, Diehard)
    #[arg(long)]
    seed: Option<String>,
}

impl Args {
    fn config(&self) -> Config {
        let edges = if self.bounded_edges {
            EdgePolicy::Bounded
        } else {
            EdgePolicy::Frozen
        };
        Config::new(self.grid_size)
            .set_cell_pixel_size(self.cell_size)
            .set_interval(Duration::from_millis(self.interval_ms))
            .set_edge_policy(edges)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut simulation = Simulation::new(args.config()).context("invalid simulation settings")?;
    if let Some(name) = &args.seed {
        let lifeform = lifeform::by_name(name).with_context(|| format!("unknown lifeform {name:?}"))?;
        simulation.seed_pattern(lifeform)?;
    }
    log::info!("{}x{} grid ready", args.grid_size, args.grid_size);

    run_native(
        "Game of Life",
        eframe::NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(GuiOfLife::new(simulation)))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
    .context("running the window")?;
    Ok(())
}

struct GuiOfLife {
    simulation: Simulation,
}

impl GuiOfLife {
    fn new(simulation: Simulation) -> Self {
        Self { simulation }
    }

    fn random_life(&mut self) {
        if let Err(err) = self.simulation.seed_random_lifeform() {
            log::warn!("could not seed a lifeform: {err}");
        }
    }

    fn draw_grid(&mut self, ui: &mut Ui) {
        let grid_size = self.simulation.grid().size();
        let cell_size = self.simulation.config().cell_pixel_size as f32;
        let side = cell_size * grid_size as f32;

        let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - rect.min;
                self.simulation.toggle_at(offset.x, offset.y);
            }
        }

        let painter = ui.painter();
        let stroke = Stroke::new(1.0, GRID_LINE);
        for cell in self.simulation.cells() {
            let pos = rect.min + egui::vec2(cell.column as f32 * cell_size, cell.row as f32 * cell_size);
            let cell_rect = egui::Rect::from_min_size(pos, egui::vec2(cell_size, cell_size));
            if !painter.clip_rect().intersects(cell_rect) {
                continue;
            }

            painter.rect_filled(cell_rect, 0.0, EMPTY_FILL);
            painter.rect_stroke(cell_rect, 0.0, stroke);

            if cell.populated {
                let glow = colour(cell.glow, GLOW_ALPHA);
                painter.rect_filled(cell_rect.shrink(cell_size / 8.0), cell_size / 4.0, glow);
                painter.rect_filled(cell_rect.shrink(cell_size / 4.0), 0.0, colour(cell.colour, 255));
            }
        }
    }
}

fn colour(rgb: Rgb, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(rgb.r, rgb.g, rgb.b, alpha)
}

impl eframe::App for GuiOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.simulation.update(now);
        if let Some(wait) = self.simulation.time_until_next_step(now) {
            ctx.request_repaint_after(wait);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::both().show(ui, |ui| {
                ui.heading("Game of Life");
                ui.horizontal(|ui| {
                    let running = self.simulation.phase() == Phase::Running;
                    if ui.add_enabled(!running, egui::Button::new("Start")).clicked() {
                        self.simulation.start();
                    }
                    if ui.add_enabled(running, egui::Button::new("Stop")).clicked() {
                        self.simulation.stop();
                    }
                    if ui.button("Random").clicked() {
                        self.random_life();
                    }
                    if ui.button("Reset").clicked() {
                        self.simulation.reset();
                    }
                    ui.label(format!(
                        "generation {} | {} alive",
                        self.simulation.generation(),
                        self.simulation.grid().population()
                    ));
                });

                self.draw_grid(ui);
            });
        });
    }
}
