/*!
 * Desktop viewer for pitchviz - interactive pitch maps of a player's match events
 *
 * A cross-platform desktop application providing:
 * - Loading saved event payloads or fetching them from the events API
 * - Switching category and pitch orientation
 * - Clicking markers to select an event and inspect its details
 * - Exporting the current view as SVG
 *
 * Platform support: Windows, macOS, Linux
 */

use eframe::egui;
use egui::{Color32, Pos2, Stroke};
use pitchviz::viz::pitch::{self, Shape};
use pitchviz::viz::util::Projection;
use pitchviz::viz::{self, Orientation, Point, RenderContext, Rgba, SelectionController, detail};
use pitchviz::{Client, EventKind, EventSet, stats, storage};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([700.0, 450.0])
            .with_title("pitchviz"),
        ..Default::default()
    };

    eframe::run_native(
        "pitchviz",
        options,
        Box::new(|_cc| Ok(Box::new(PitchApp::new()))),
    )
}

struct PitchApp {
    // Fetch inputs
    base_url: String,
    match_id: String,
    player: String,

    // View
    sets: HashMap<EventKind, EventSet>,
    category: EventKind,
    orientation: Orientation,
    show_labels: bool,
    selection: SelectionController,
    last_dir: PathBuf,

    // UI state
    is_loading: bool,
    status_message: String,
    error_message: String,

    operation_receiver: Option<mpsc::Receiver<OperationResult>>,
}

#[derive(Debug)]
enum OperationResult {
    Loaded(Vec<EventSet>),
    Error(String),
}

fn color32(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, (c.a * 255.0).round() as u8)
}

impl PitchApp {
    fn new() -> Self {
        Self {
            base_url: std::env::var(pitchviz::api::BASE_URL_ENV)
                .unwrap_or_else(|_| pitchviz::api::DEFAULT_BASE_URL.to_string()),
            match_id: String::new(),
            player: String::new(),
            sets: HashMap::new(),
            category: EventKind::Shot,
            orientation: Orientation::Horizontal,
            show_labels: false,
            selection: SelectionController::new(EventKind::Shot),
            last_dir: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
            is_loading: false,
            status_message: String::new(),
            error_message: String::new(),
            operation_receiver: None,
        }
    }

    fn current(&self) -> Option<&EventSet> {
        self.sets.get(&self.category)
    }

    fn render_context(&self) -> RenderContext {
        RenderContext::new(self.orientation).with_labels(self.show_labels)
    }

    fn markers(&self) -> Vec<viz::DrawableMarker> {
        match self.current() {
            Some(set) => viz::render_with(&set.events, &self.render_context(), &self.selection),
            None => Vec::new(),
        }
    }

    fn install(&mut self, sets: Vec<EventSet>) {
        let mut summary = Vec::new();
        let mut replaced_current = false;
        for set in sets {
            summary.push(format!("{} {}", set.len(), set.kind.as_str()));
            replaced_current |= set.kind == self.category;
            self.sets.insert(set.kind, set);
        }
        if replaced_current && let Some(set) = self.sets.get(&self.category) {
            self.selection.replace_events(&set.events);
        }
        self.status_message = format!("Loaded {}", summary.join(", "));
        self.error_message.clear();
    }

    fn open_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_directory(&self.last_dir)
            .pick_file()
        else {
            return;
        };
        if let Some(dir) = path.parent() {
            self.last_dir = dir.to_path_buf();
        }
        match storage::load_events_json(&path, self.category) {
            Ok(set) => {
                self.category = set.kind;
                self.selection.set_category(set.kind);
                self.install(vec![set]);
            }
            Err(err) => {
                self.error_message = format!("Failed to load {}: {:#}", path.display(), err);
            }
        }
    }

    fn export_svg(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("SVG", &["svg"])
            .set_directory(&self.last_dir)
            .set_file_name(format!("{}.svg", self.category.as_str()))
            .save_file()
        else {
            return;
        };
        let markers = self.markers();
        match viz::surface::render_to_file(&markers, self.orientation, &path, 1200) {
            Ok(()) => self.status_message = format!("Wrote {}", path.display()),
            Err(err) => self.error_message = format!("Failed to export: {:#}", err),
        }
    }

    fn start_fetch(&mut self) {
        let match_id: u64 = match self.match_id.trim().parse() {
            Ok(id) => id,
            Err(_) => {
                self.error_message = "Match id must be a number".to_string();
                return;
            }
        };
        if self.player.trim().is_empty() {
            self.error_message = "Please enter a player name".to_string();
            return;
        }

        self.is_loading = true;
        self.error_message.clear();
        self.status_message = "Fetching events...".to_string();

        let (sender, receiver) = mpsc::channel();
        self.operation_receiver = Some(receiver);

        let base_url = self.base_url.clone();
        let player = self.player.trim().to_string();
        thread::spawn(move || {
            let result = Client::new(base_url)
                .and_then(|c| c.fetch_all(match_id, &player))
                .map(OperationResult::Loaded)
                .unwrap_or_else(|e| OperationResult::Error(format!("Failed to fetch: {:#}", e)));
            let _ = sender.send(result);
        });
    }

    fn check_operation_result(&mut self) {
        if let Some(receiver) = &self.operation_receiver
            && let Ok(result) = receiver.try_recv()
        {
            self.is_loading = false;
            self.operation_receiver = None;

            match result {
                OperationResult::Loaded(sets) => self.install(sets),
                OperationResult::Error(error) => {
                    self.error_message = error;
                    self.status_message.clear();
                }
            }
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("API:");
            ui.text_edit_singleline(&mut self.base_url);
            ui.label("Match:");
            ui.add(egui::TextEdit::singleline(&mut self.match_id).desired_width(80.0));
            ui.label("Player:");
            ui.text_edit_singleline(&mut self.player);
            if ui
                .add_enabled(!self.is_loading, egui::Button::new("Fetch"))
                .clicked()
            {
                self.start_fetch();
            }
            if self.is_loading {
                ui.spinner();
            }
        });

        ui.horizontal(|ui| {
            let before = (self.category, self.orientation);
            egui::ComboBox::from_label("Category")
                .selected_text(self.category.as_str())
                .show_ui(ui, |ui| {
                    for k in EventKind::ALL {
                        ui.selectable_value(&mut self.category, k, k.as_str());
                    }
                });
            egui::ComboBox::from_label("View")
                .selected_text(self.orientation.as_str())
                .show_ui(ui, |ui| {
                    for o in Orientation::ALL {
                        ui.selectable_value(&mut self.orientation, o, o.as_str());
                    }
                });
            if before.0 != self.category {
                self.selection.set_category(self.category);
            } else if before.1 != self.orientation {
                self.selection.reset();
            }

            ui.checkbox(&mut self.show_labels, "Labels");
            if ui.button("Open…").clicked() {
                self.open_file();
            }
            if ui
                .add_enabled(self.current().is_some(), egui::Button::new("Export SVG"))
                .clicked()
            {
                self.export_svg();
            }
        });

        if !self.status_message.is_empty() {
            ui.colored_label(Color32::DARK_GREEN, &self.status_message);
        }
        if !self.error_message.is_empty() {
            ui.colored_label(Color32::RED, &self.error_message);
        }
    }

    fn detail_panel(&self, ui: &mut egui::Ui) {
        let Some(set) = self.current() else {
            ui.label("No events loaded");
            return;
        };

        ui.heading("Details");
        match self.selection.selected_event(&set.events) {
            Some(event) => {
                egui::Grid::new("detail_grid").striped(true).show(ui, |ui| {
                    for (label, value) in detail::detail_rows(event) {
                        ui.label(label);
                        ui.label(value);
                        ui.end_row();
                    }
                });
            }
            None => {
                ui.label(detail::empty_hint(set.kind));
            }
        }

        ui.separator();
        ui.heading("Summary");
        egui::Grid::new("stats_grid").show(ui, |ui| {
            for (label, value) in stats::summarize(set).lines() {
                ui.label(label);
                ui.label(value);
                ui.end_row();
            }
        });
    }

    fn pitch_view(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let rect = response.rect;
        let proj = Projection::fit(
            self.orientation.view_box(),
            rect.width() as f64,
            rect.height() as f64,
        );
        let to_pos = |p: Point| -> Pos2 {
            let (x, y) = proj.to_screen(p);
            egui::pos2(rect.min.x + x as f32, rect.min.y + y as f32)
        };
        let len = |units: f64| proj.length(units) as f32;

        painter.rect_filled(rect, 0.0, Color32::WHITE);

        for el in pitch::outline(self.orientation) {
            let stroke = Stroke::new(len(el.stroke_width).max(1.0), color32(el.stroke));
            match &el.shape {
                Shape::Rect { x, y, w, h } => {
                    let r = egui::Rect::from_two_pos(
                        to_pos(Point::new(*x, *y)),
                        to_pos(Point::new(x + w, y + h)),
                    );
                    if el.filled {
                        painter.rect_filled(r, 0.0, color32(el.stroke));
                    } else {
                        painter.rect_stroke(r, 0.0, stroke);
                    }
                }
                Shape::Circle { center, radius } => {
                    if el.filled {
                        painter.circle_filled(to_pos(*center), len(*radius), color32(el.stroke));
                    } else {
                        painter.circle_stroke(to_pos(*center), len(*radius), stroke);
                    }
                }
                Shape::Arc {
                    center,
                    radius,
                    from_deg,
                    to_deg,
                } => {
                    let pts = pitch::sample_arc(*center, *radius, *from_deg, *to_deg);
                    painter.add(egui::Shape::line(pts.into_iter().map(to_pos).collect(), stroke));
                }
                Shape::Polyline(pts) => {
                    let pts: Vec<Pos2> = pts.iter().map(|p| to_pos(*p)).collect();
                    painter.add(egui::Shape::line(pts, stroke));
                }
            }
        }

        let markers = self.markers();
        let (selected, rest): (Vec<_>, Vec<_>) = markers.iter().partition(|m| m.selected);
        for m in rest.into_iter().chain(selected) {
            let center = to_pos(m.position);
            if let Some(ring) = &m.outline {
                let stroke = Stroke::new(len(ring.stroke_width).max(1.0), color32(ring.stroke));
                match ring.dash {
                    Some(dash) => {
                        let pts: Vec<Pos2> = pitch::sample_arc(m.position, ring.radius, 0.0, 360.0)
                            .into_iter()
                            .map(to_pos)
                            .collect();
                        let dashes = egui::Shape::dashed_line(&pts, stroke, len(dash), len(dash));
                        painter.extend(dashes);
                    }
                    None => {
                        painter.circle_stroke(center, len(ring.radius), stroke);
                    }
                }
            }
            painter.circle(
                center,
                len(m.style.radius),
                color32(m.style.fill),
                Stroke::new(len(m.style.stroke_width).max(1.0), color32(m.style.stroke)),
            );
            if let Some(seg) = &m.trajectory {
                painter.line_segment(
                    [to_pos(seg.from), to_pos(seg.to)],
                    Stroke::new(len(seg.stroke_width).max(1.0), color32(seg.stroke)),
                );
            }
            if let Some(label) = &m.label {
                painter.text(
                    to_pos(label.position),
                    egui::Align2::CENTER_BOTTOM,
                    label.ordinal.to_string(),
                    egui::FontId::proportional(len(label.font_size).max(6.0)),
                    color32(label.color),
                );
            }
        }

        if response.clicked()
            && let Some(pos) = response.interact_pointer_pos()
        {
            let p = proj.to_pitch((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64);
            if let Some(key) = viz::hit_test(&markers, p).cloned() {
                self.selection.click(&key);
            }
        }
    }
}

impl eframe::App for PitchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_operation_result();

        if self.is_loading {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            self.controls(ui);
            ui.add_space(4.0);
        });

        egui::SidePanel::right("detail")
            .default_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.detail_panel(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| self.pitch_view(ui));
    }
}
