use log::{debug, info};
use rand::rngs::StdRng;

use crate::config::{ConfigError, GameConfig};
use crate::grid::{Cell, Grid};
use crate::input::{InputSnapshot, Key};
use crate::menu::{Menu, MenuAction};
use crate::scene::{Scene, GAME_OVER_TITLE, TITLE};
use crate::sim::{Simulation, StepOutcome};
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScreenState {
    StartMenu,
    Playing,
    GameOver,
}

/// The whole game: screen state machine, menu and the current round.
///
/// The host calls [`Game::update`] once per frame with the elapsed time and the
/// keys held, draws [`Game::scene`] if it can, and stops once
/// [`Game::exit_requested`] is set.
pub struct Game {
    screen: ScreenState,
    menu: Menu,
    sim: Simulation,
    previous_input: InputSnapshot,
    exit: bool,
}

impl Game {
    pub fn new(grid: Grid, rng: StdRng) -> Self {
        debug!("Game created on a {}x{} grid", grid.width(), grid.height());
        Game {
            screen: ScreenState::StartMenu,
            menu: Menu::new(),
            sim: Simulation::new(grid, rng),
            previous_input: InputSnapshot::new(),
            exit: false,
        }
    }

    /// Validates the geometry and seeds the food RNG, from entropy when no seed is set.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let grid = config.validate()?;
        Ok(Game::new(grid, config.rng()))
    }

    pub fn update(&mut self, dt: f32, input: &InputSnapshot) {
        if input.is_down(Key::Escape) {
            if !self.exit {
                info!("Exit requested");
            }
            self.exit = true;
        } else {
            match self.screen {
                ScreenState::StartMenu | ScreenState::GameOver => self.update_menu(input),
                ScreenState::Playing => self.update_playing(dt, input),
            }
        }

        self.previous_input = *input;
    }

    fn update_menu(&mut self, input: &InputSnapshot) {
        let prev = self.previous_input;

        if input.just_pressed(&prev, Key::Down) {
            self.menu.next();
        }
        if input.just_pressed(&prev, Key::Up) {
            self.menu.previous();
        }

        if input.just_pressed(&prev, Key::Enter) {
            match self.menu.confirm() {
                MenuAction::StartGame => self.start(),
                MenuAction::Exit => {
                    info!("Exit selected from the menu");
                    self.exit = true;
                }
            }
        }
    }

    fn update_playing(&mut self, dt: f32, input: &InputSnapshot) {
        if let StepOutcome::Crashed(_) = self.sim.advance(dt, input) {
            self.screen = ScreenState::GameOver;
        }
    }

    fn start(&mut self) {
        info!("Starting a new game");
        self.sim.reset();
        self.screen = ScreenState::Playing;
    }

    pub fn scene(&self) -> Scene {
        match self.screen {
            ScreenState::Playing => Scene::Playing {
                snake: self.sim.snake().body().copied().collect(),
                heading: self.sim.snake().get_direction(),
                food: self.sim.food(),
                score: self.sim.score(),
            },
            ScreenState::StartMenu => self.menu_scene(TITLE, None),
            ScreenState::GameOver => self.menu_scene(GAME_OVER_TITLE, Some(self.sim.score())),
        }
    }

    fn menu_scene(&self, title: &'static str, score: Option<u32>) -> Scene {
        Scene::Menu {
            title,
            score,
            options: self.menu.options(),
            selected: self.menu.selected(),
        }
    }

    pub fn exit_requested(&self) -> bool {
        self.exit
    }

    pub fn screen(&self) -> ScreenState {
        self.screen
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn grid(&self) -> &Grid {
        self.sim.grid()
    }

    pub fn snake(&self) -> &Snake {
        self.sim.snake()
    }

    pub fn food(&self) -> Cell {
        self.sim.food()
    }

    pub fn score(&self) -> u32 {
        self.sim.score()
    }

    #[cfg(test)]
    pub(crate) fn sim_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }
}
