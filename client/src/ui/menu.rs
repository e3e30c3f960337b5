use eframe::egui;
use tokio::sync::mpsc;

use engine::config::Validate;
use engine::game::{FieldSize, GameCommand, GameOutcome};

use crate::colors::{self, PALETTE};
use crate::config::ClientConfigManager;
use crate::state::{AppState, ColorTarget, SharedState};

use super::game::{GameAppearance, SnakeGameUi};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppStateType {
    Menu,
    Settings,
    ChoosingColor,
    HowToPlay,
    InGame,
    GameOver,
}

impl AppStateType {
    fn from(state: &AppState) -> Self {
        match state {
            AppState::Menu => Self::Menu,
            AppState::Settings => Self::Settings,
            AppState::ChoosingColor { .. } => Self::ChoosingColor,
            AppState::HowToPlay => Self::HowToPlay,
            AppState::InGame { .. } => Self::InGame,
            AppState::GameOver { .. } => Self::GameOver,
        }
    }
}

const MENU_HIGHLIGHT: egui::Color32 = egui::Color32::from_rgb(100, 100, 255);
const SETTINGS_HIGHLIGHT: egui::Color32 = egui::Color32::from_rgb(100, 255, 100);

pub struct MenuApp {
    shared_state: SharedState,
    config_manager: ClientConfigManager,
    selected: usize,
    game_command_sender: Option<mpsc::UnboundedSender<GameCommand>>,
    game_appearance: GameAppearance,
    game_ui: SnakeGameUi,
    previous_app_state: Option<AppStateType>,
}

impl MenuApp {
    pub fn new(shared_state: SharedState, config_manager: ClientConfigManager) -> Self {
        let game_appearance = Self::appearance_from_config(&config_manager);

        Self {
            shared_state,
            config_manager,
            selected: 0,
            game_command_sender: None,
            game_appearance,
            game_ui: SnakeGameUi::new(),
            previous_app_state: None,
        }
    }

    fn appearance_from_config(config_manager: &ClientConfigManager) -> GameAppearance {
        let config = config_manager.get_config().unwrap_or_default();
        GameAppearance {
            snake_color: colors::color_by_name(&config.snake_color)
                .unwrap_or(egui::Color32::GREEN),
            food_color: colors::color_by_name(&config.food_color).unwrap_or(egui::Color32::RED),
            cell_size: config.cell_size as f32,
        }
    }

    fn list_navigation(ctx: &egui::Context, option_count: usize, selected: &mut usize) -> bool {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowUp) {
                *selected = (*selected + option_count - 1) % option_count;
            }
            if i.key_pressed(egui::Key::ArrowDown) {
                *selected = (*selected + 1) % option_count;
            }
            i.key_pressed(egui::Key::Enter)
        })
    }

    fn handle_state_transition(
        &mut self,
        from: &Option<AppStateType>,
        to: AppStateType,
        ctx: &egui::Context,
    ) {
        self.selected = 0;

        match (from, to) {
            (_, AppStateType::InGame) => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
            }
            (Some(AppStateType::InGame), _) => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
            }
            _ => {}
        }
    }

    fn render_menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let options = ["Start Game", "Settings", "How To Play", "Exit"];
        let activate = Self::list_navigation(ctx, options.len(), &mut self.selected);

        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.heading("Snake Game");
            ui.add_space(30.0);

            for (index, option) in options.iter().enumerate() {
                let color = if index == self.selected {
                    MENU_HIGHLIGHT
                } else {
                    egui::Color32::WHITE
                };
                let text = egui::RichText::new(*option).size(24.0).color(color);
                if ui
                    .add(egui::Label::new(text).sense(egui::Sense::click()))
                    .clicked()
                {
                    self.selected = index;
                    self.activate_menu_entry(index, ctx);
                }
                ui.add_space(10.0);
            }
        });

        if activate {
            self.activate_menu_entry(self.selected, ctx);
        }
    }

    fn activate_menu_entry(&mut self, index: usize, ctx: &egui::Context) {
        match index {
            0 => self.start_game(ctx),
            1 => self.shared_state.set_state(AppState::Settings),
            2 => self.shared_state.set_state(AppState::HowToPlay),
            3 => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            _ => {}
        }
    }

    fn render_settings(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let options = ["Change Snake Color", "Change Food Color", "Back"];
        let activate = Self::list_navigation(ctx, options.len(), &mut self.selected);
        let back = ctx.input(|i| i.key_pressed(egui::Key::Escape));

        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.heading("Settings");
            ui.add_space(30.0);

            for (index, option) in options.iter().enumerate() {
                let color = if index == self.selected {
                    SETTINGS_HIGHLIGHT
                } else {
                    egui::Color32::WHITE
                };
                let text = egui::RichText::new(*option).size(24.0).color(color);
                if ui
                    .add(egui::Label::new(text).sense(egui::Sense::click()))
                    .clicked()
                {
                    self.selected = index;
                    self.activate_settings_entry(index);
                }
                ui.add_space(10.0);
            }
        });

        if activate {
            self.activate_settings_entry(self.selected);
        }
        if back {
            self.shared_state.set_state(AppState::Menu);
        }
    }

    fn activate_settings_entry(&mut self, index: usize) {
        match index {
            0 => self.shared_state.set_state(AppState::ChoosingColor {
                target: ColorTarget::Snake,
            }),
            1 => self.shared_state.set_state(AppState::ChoosingColor {
                target: ColorTarget::Food,
            }),
            2 => self.shared_state.set_state(AppState::Menu),
            _ => {}
        }
    }

    fn render_color_picker(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, target: ColorTarget) {
        let activate = Self::list_navigation(ctx, PALETTE.len(), &mut self.selected);
        let cancel = ctx.input(|i| i.key_pressed(egui::Key::Escape));

        let item_name = match target {
            ColorTarget::Snake => "Snake",
            ColorTarget::Food => "Food",
        };

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(format!("Choose {} Color", item_name));
            ui.add_space(20.0);

            for (index, option) in PALETTE.iter().enumerate() {
                let mut text = egui::RichText::new(option.name).size(20.0).color(option.color);
                if index == self.selected {
                    text = text.background_color(egui::Color32::from_gray(60));
                }
                if ui
                    .add(egui::Label::new(text).sense(egui::Sense::click()))
                    .clicked()
                {
                    self.selected = index;
                    self.choose_color(target, index);
                }
            }
        });

        if activate {
            self.choose_color(target, self.selected);
        }
        if cancel {
            self.shared_state.set_state(AppState::Settings);
        }
    }

    fn choose_color(&mut self, target: ColorTarget, index: usize) {
        let mut config = match self.config_manager.get_config() {
            Ok(config) => config,
            Err(e) => {
                self.shared_state.set_error(e);
                return;
            }
        };

        let name = PALETTE[index].name.to_string();
        match target {
            ColorTarget::Snake => config.snake_color = name,
            ColorTarget::Food => config.food_color = name,
        }

        if let Err(e) = self.config_manager.set_config(&config) {
            self.shared_state.set_error(e);
            return;
        }

        self.game_appearance = Self::appearance_from_config(&self.config_manager);
        self.shared_state.set_state(AppState::Settings);
    }

    fn render_how_to_play(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let back =
            ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Enter));

        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.heading("How To Play");
            ui.add_space(20.0);
            ui.label("Use arrow keys to move the snake.");
            ui.label("Avoid hitting the walls or yourself.");
            ui.label("Eat food to grow longer.");
            ui.label("Press ESC or Enter to go back.");
        });

        if back {
            self.shared_state.set_state(AppState::Menu);
        }
    }

    fn render_game_over(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        outcome: GameOutcome,
        score: u32,
    ) {
        let back =
            ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Enter));

        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.heading(
                egui::RichText::new("Game Over")
                    .color(egui::Color32::RED)
                    .size(32.0),
            );
            ui.add_space(10.0);

            let reason = match outcome {
                GameOutcome::WallCollision => "You hit the wall.",
                GameOutcome::SelfCollision => "You ran into yourself.",
                GameOutcome::UserQuit => "You quit the game.",
            };
            ui.label(reason);
            ui.label(format!("Final score: {}", score));
            ui.add_space(20.0);

            if ui.button("Back to Menu (Esc)").clicked() {
                self.shared_state.set_state(AppState::Menu);
            }
        });

        if back {
            self.shared_state.set_state(AppState::Menu);
        }
    }

    fn start_game(&mut self, ctx: &egui::Context) {
        let config = match self.config_manager.get_config() {
            Ok(config) => config,
            Err(e) => {
                self.shared_state.set_error(e);
                return;
            }
        };

        // The session runs fullscreen; derive the grid from the monitor.
        let surface = ctx
            .input(|i| {
                i.viewport()
                    .monitor_size
                    .or(i.viewport().inner_rect.map(|r| r.size()))
            })
            .unwrap_or(egui::vec2(640.0, 480.0));
        let field_size = FieldSize {
            width: (surface.x / config.cell_size as f32) as usize,
            height: (surface.y / config.cell_size as f32) as usize,
        };

        let settings = config.game_settings(field_size);
        if let Err(e) = settings.validate() {
            self.shared_state.set_error(format!("Cannot start game: {}", e));
            return;
        }

        self.game_appearance = Self::appearance_from_config(&self.config_manager);

        let (command_tx, command_rx) = tokio::sync::mpsc::unbounded_channel();
        self.game_command_sender = Some(command_tx);
        self.shared_state.set_state(AppState::InGame { snapshot: None });

        let shared_state = self.shared_state.clone();
        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                crate::runner::run_snake_game(shared_state, command_rx, settings).await;
            });
        });
    }
}

impl eframe::App for MenuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        if let Some(error) = self.shared_state.get_error() {
            egui::Window::new("Error")
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.shared_state.clear_error();
                    }
                });
        }

        let current_state = self.shared_state.get_state();
        let current_app_state_type = AppStateType::from(&current_state);

        if self.previous_app_state != Some(current_app_state_type) {
            let previous = self.previous_app_state;
            self.handle_state_transition(&previous, current_app_state_type, ctx);
            self.previous_app_state = Some(current_app_state_type);
        }

        egui::CentralPanel::default().show(ctx, |ui| match current_state {
            AppState::Menu => self.render_menu(ui, ctx),
            AppState::Settings => self.render_settings(ui, ctx),
            AppState::ChoosingColor { target } => self.render_color_picker(ui, ctx, target),
            AppState::HowToPlay => self.render_how_to_play(ui, ctx),
            AppState::InGame { snapshot } => {
                self.game_ui.render_game(
                    ui,
                    ctx,
                    &snapshot,
                    &self.game_appearance,
                    self.game_command_sender.as_ref(),
                );
            }
            AppState::GameOver { outcome, score } => {
                self.render_game_over(ui, ctx, outcome, score);
            }
        });
    }
}
