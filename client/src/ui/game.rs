use eframe::egui;
use tokio::sync::mpsc;

use engine::game::{Direction, GameCommand, Point, StateSnapshot};

pub struct GameAppearance {
    pub snake_color: egui::Color32,
    pub food_color: egui::Color32,
    pub cell_size: f32,
}

pub struct SnakeGameUi;

impl SnakeGameUi {
    pub fn new() -> Self {
        Self
    }

    pub fn render_game(
        &self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        snapshot: &Option<StateSnapshot>,
        appearance: &GameAppearance,
        command_sender: Option<&mpsc::UnboundedSender<GameCommand>>,
    ) {
        self.handle_input(ctx, command_sender);

        let Some(snapshot) = snapshot else {
            ui.centered_and_justified(|ui| {
                ui.label("Get ready...");
            });
            return;
        };

        self.render_board(ui, snapshot, appearance);
    }

    fn handle_input(
        &self,
        ctx: &egui::Context,
        command_sender: Option<&mpsc::UnboundedSender<GameCommand>>,
    ) {
        let Some(sender) = command_sender else {
            return;
        };

        let command = ctx.input(|i| {
            if i.key_pressed(egui::Key::Escape) {
                Some(GameCommand::Quit)
            } else if i.key_pressed(egui::Key::ArrowUp) {
                Some(GameCommand::Turn(Direction::Up))
            } else if i.key_pressed(egui::Key::ArrowDown) {
                Some(GameCommand::Turn(Direction::Down))
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                Some(GameCommand::Turn(Direction::Left))
            } else if i.key_pressed(egui::Key::ArrowRight) {
                Some(GameCommand::Turn(Direction::Right))
            } else {
                None
            }
        });

        if let Some(command) = command {
            // A failed send means the session already ended.
            let _ = sender.send(command);
        }
    }

    fn render_board(
        &self,
        ui: &mut egui::Ui,
        snapshot: &StateSnapshot,
        appearance: &GameAppearance,
    ) {
        ui.vertical_centered(|ui| {
            ui.label(format!("Score: {}", snapshot.score));
        });

        let field = &snapshot.field_size;
        let available = ui.available_size();
        let cell = appearance
            .cell_size
            .min(available.x / field.width as f32)
            .min(available.y / field.height as f32);
        let board_size = egui::vec2(cell * field.width as f32, cell * field.height as f32);

        let (outer_rect, _) = ui.allocate_exact_size(available, egui::Sense::hover());
        let origin = outer_rect.center() - board_size / 2.0;
        let painter = ui.painter();

        painter.rect_stroke(
            egui::Rect::from_min_size(origin, board_size),
            0.0,
            egui::Stroke::new(1.0, egui::Color32::WHITE),
            egui::StrokeKind::Inside,
        );

        let cell_rect = |point: &Point| {
            egui::Rect::from_min_size(
                origin + egui::vec2(point.x as f32 * cell, point.y as f32 * cell),
                egui::vec2(cell, cell),
            )
        };

        painter.rect_filled(cell_rect(&snapshot.food), 0.0, appearance.food_color);
        for segment in &snapshot.snake {
            painter.rect_filled(cell_rect(segment), 0.0, appearance.snake_color);
        }
    }
}
