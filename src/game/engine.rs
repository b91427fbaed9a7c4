use super::body::SnakeBody;
use super::cell::Cell;
use super::config::GameConfig;
use super::direction::Direction;
use super::food::FoodSpawner;
use super::grid::Grid;
use crate::ports::{InputPort, RenderPort, Snapshot};

/// Outcome of a single advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceResult {
    /// Whether the game is over after this advance
    pub terminated: bool,
    /// Whether the head landed on food this advance
    pub ate_food: bool,
}

/// Mutable simulation state.
///
/// Owned exclusively by [`GameEngine`] and mutated only through
/// [`GameEngine::advance`]. Once `over` is set the state is frozen; the
/// one exception is the duplicate self-collision cell appended on the
/// terminal frame itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub body: SnakeBody,
    pub food: Cell,
    /// Direction used by the most recently completed advance. New input is
    /// checked against this, not against the pending one, so stacked key
    /// presses between ticks cannot smuggle in a reversal.
    pub previous_direction: Direction,
    /// Direction the next advance will use.
    pub pending_direction: Direction,
    pub over: bool,
}

/// The game state machine: direction arbitration, per-tick movement,
/// collision and food resolution.
pub struct GameEngine<R: RenderPort> {
    grid: Grid,
    state: GameState,
    spawner: FoodSpawner,
    render: R,
}

impl<R: RenderPort> GameEngine<R> {
    /// Starts a game: a horizontal body at mid-height with the head on the
    /// right, heading up, with the first food already placed. Emits the
    /// opening frame.
    pub fn new(config: &GameConfig, mut spawner: FoodSpawner, render: R) -> Self {
        let grid = Grid::new(config.grid_width as i32, config.grid_height as i32);
        debug_assert!((config.initial_snake_length as i32) <= grid.width());

        let mid = grid.height() / 2;
        let body: SnakeBody = (0..config.initial_snake_length as i32)
            .map(|x| Cell::new(x, mid))
            .collect();

        let food = spawner
            .spawn(&grid, &body)
            .expect("grid has a free cell at game start");

        let mut engine = Self {
            grid,
            state: GameState {
                body,
                food,
                previous_direction: Direction::Up,
                pending_direction: Direction::Up,
                over: false,
            },
            spawner,
            render,
        };
        engine.emit();
        engine
    }

    /// Requests a turn. Rejected (returns `None`) after game over, and
    /// when `requested` is the exact opposite of the direction the last
    /// advance moved in. An accepted turn runs [`Self::advance`]
    /// immediately so the snake responds without waiting for the next
    /// scheduled tick; the result is returned so the caller can re-arm its
    /// tick chain.
    pub fn set_direction(&mut self, requested: Direction) -> Option<AdvanceResult> {
        if self.state.over {
            return None;
        }
        if requested.is_opposite(self.state.previous_direction) {
            return None;
        }

        self.state.pending_direction = requested;
        Some(self.advance())
    }

    /// Moves the snake one cell. No-op once the game is over.
    pub fn advance(&mut self) -> AdvanceResult {
        if self.state.over {
            return AdvanceResult {
                terminated: true,
                ate_food: false,
            };
        }

        // The pending direction becomes authoritative for this tick and
        // for the next reversal check.
        self.state.previous_direction = self.state.pending_direction;

        let new_head = self
            .grid
            .wrap(self.state.body.head().neighbor(self.state.previous_direction));

        // Checked against the full body, tail included: moving into the
        // cell the tail is about to vacate still kills.
        if self.state.body.contains(new_head) {
            // Push the duplicate anyway so the final frame shows the
            // overlapping head.
            self.state.body.push_head(new_head);
            self.state.over = true;
            self.emit();
            return AdvanceResult {
                terminated: true,
                ate_food: false,
            };
        }

        self.state.body.push_head(new_head);

        let ate_food = new_head == self.state.food;
        if ate_food {
            match self.spawner.spawn(&self.grid, &self.state.body) {
                Some(food) => self.state.food = food,
                // Body covers the whole grid: nothing left to eat.
                None => self.state.over = true,
            }
        } else {
            self.state.body.pop_tail();
        }

        self.emit();
        AdvanceResult {
            terminated: self.state.over,
            ate_food,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.over
    }

    /// Score is the current body length.
    pub fn score(&self) -> usize {
        self.state.body.len()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            body: self.state.body.cells().collect(),
            food: self.state.food,
            score: self.state.body.len(),
            over: self.state.over,
        }
    }

    fn emit(&mut self) {
        let frame = self.snapshot();
        self.render.present(&frame);
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, food: Cell) {
        self.state.food = food;
    }

    #[cfg(test)]
    pub(crate) fn render_port(&self) -> &R {
        &self.render
    }
}

impl<R: RenderPort> InputPort for GameEngine<R> {
    fn deliver(&mut self, direction: Direction) {
        let _ = self.set_direction(direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::testing::RecordingPort;

    fn engine() -> GameEngine<RecordingPort> {
        // 15x10 grid: body [(0,5)..(4,5)], head (4,5), heading up.
        let mut engine = GameEngine::new(
            &GameConfig::default(),
            FoodSpawner::with_seed(42),
            RecordingPort::default(),
        );
        // Park the food away from the cells these tests move through.
        engine.place_food(Cell::new(12, 1));
        engine
    }

    fn body_cells<R: RenderPort>(engine: &GameEngine<R>) -> Vec<Cell> {
        engine.state().body.cells().collect()
    }

    #[test]
    fn initial_layout() {
        let engine = engine();
        assert_eq!(
            body_cells(&engine),
            (0..5).map(|x| Cell::new(x, 5)).collect::<Vec<_>>()
        );
        assert_eq!(engine.state().body.head(), Cell::new(4, 5));
        assert_eq!(engine.state().previous_direction, Direction::Up);
        assert_eq!(engine.state().pending_direction, Direction::Up);
        assert_eq!(engine.score(), 5);
        assert!(!engine.is_over());
    }

    #[test]
    fn initial_food_avoids_the_body() {
        for seed in 0..20 {
            let engine = GameEngine::new(
                &GameConfig::default(),
                FoodSpawner::with_seed(seed),
                RecordingPort::default(),
            );
            assert!(!engine.state().body.contains(engine.state().food));
        }
    }

    #[test]
    fn first_advance_moves_head_up_and_pops_tail() {
        let mut engine = engine();
        let result = engine.advance();

        assert!(!result.terminated);
        assert!(!result.ate_food);
        assert_eq!(engine.state().body.head(), Cell::new(4, 4));
        assert_eq!(engine.score(), 5);
        assert!(!engine.state().body.contains(Cell::new(0, 5))); // old tail
    }

    #[test]
    fn advance_wraps_across_the_top_edge() {
        let mut engine = engine();
        // Head starts at y=5 heading up; six advances cross y=0.
        for _ in 0..6 {
            engine.advance();
        }
        assert_eq!(engine.state().body.head(), Cell::new(4, 9));
        assert!(!engine.is_over());
    }

    #[test]
    fn eating_food_grows_by_one_and_respawns_food() {
        let mut engine = engine();
        engine.place_food(Cell::new(4, 4)); // directly in the head's path

        let result = engine.advance();

        assert!(result.ate_food);
        assert!(!result.terminated);
        assert_eq!(engine.score(), 6);
        assert!(engine.state().body.contains(Cell::new(0, 5))); // tail kept
        assert_ne!(engine.state().food, Cell::new(4, 4));
        assert!(!engine.state().body.contains(engine.state().food));
    }

    #[test]
    fn missing_food_keeps_length_constant() {
        let mut engine = engine();
        for _ in 0..4 {
            let result = engine.advance();
            assert!(!result.ate_food);
            assert_eq!(engine.score(), 5);
        }
    }

    #[test]
    fn food_never_on_body_after_any_nonterminal_advance() {
        let mut engine = GameEngine::new(
            &GameConfig::default(),
            FoodSpawner::with_seed(3),
            RecordingPort::default(),
        );
        for _ in 0..40 {
            let result = engine.advance();
            if result.terminated {
                break;
            }
            assert!(!engine.state().body.contains(engine.state().food));
        }
    }

    #[test]
    fn reversal_is_rejected_without_moving() {
        let mut engine = engine();
        let before = engine.state().clone();

        // Heading up; down is the exact opposite.
        assert_eq!(engine.set_direction(Direction::Down), None);
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn accepted_turn_advances_immediately() {
        let mut engine = engine();
        engine.advance(); // head (4,4), clear of the body

        let result = engine.set_direction(Direction::Left);

        assert_eq!(
            result,
            Some(AdvanceResult {
                terminated: false,
                ate_food: false
            })
        );
        assert_eq!(engine.state().body.head(), Cell::new(3, 4));
        assert_eq!(engine.state().previous_direction, Direction::Left);
    }

    #[test]
    fn repeated_direction_is_accepted_and_steps() {
        let mut engine = engine();
        let result = engine.set_direction(Direction::Up);
        assert!(result.is_some());
        assert_eq!(engine.state().body.head(), Cell::new(4, 4));
    }

    #[test]
    fn stacked_keys_cannot_reverse_between_ticks() {
        let mut engine = engine();
        engine.advance(); // committed direction: up

        // The accepted left advances and becomes the committed direction,
        // so a right arriving before the next scheduled tick is a
        // reversal against it and is dropped.
        assert!(engine.set_direction(Direction::Left).is_some());
        assert_eq!(engine.set_direction(Direction::Right), None);
    }

    #[test]
    fn two_turns_into_own_body_end_the_game_with_overlapping_head() {
        let mut engine = engine();
        engine.advance(); // body ...(4,5),(4,4), heading up

        assert!(engine.set_direction(Direction::Left).is_some()); // head (3,4)
        let result = engine.set_direction(Direction::Down); // head (3,5): body cell

        assert_eq!(
            result,
            Some(AdvanceResult {
                terminated: true,
                ate_food: false
            })
        );
        assert!(engine.is_over());

        // The collision cell is appended so the final frame shows it twice.
        let cells = body_cells(&engine);
        assert_eq!(cells.last(), Some(&Cell::new(3, 5)));
        assert_eq!(
            cells.iter().filter(|&&c| c == Cell::new(3, 5)).count(),
            2
        );
    }

    #[test]
    fn terminal_state_is_frozen() {
        let mut engine = engine();
        engine.advance();
        engine.set_direction(Direction::Left);
        engine.set_direction(Direction::Down); // dies
        assert!(engine.is_over());

        let frozen = engine.state().clone();
        let frames_before = engine.render_port().frames.len();

        let result = engine.advance();
        assert!(result.terminated);
        assert_eq!(engine.set_direction(Direction::Right), None);

        assert_eq!(engine.state(), &frozen);
        // A late tick after game over emits nothing.
        assert_eq!(engine.render_port().frames.len(), frames_before);
    }

    #[test]
    fn every_advance_emits_one_snapshot() {
        let mut engine = engine();
        assert_eq!(engine.render_port().frames.len(), 1); // opening frame

        engine.advance();
        engine.advance();
        assert_eq!(engine.render_port().frames.len(), 3);

        let last = engine.render_port().frames.last().unwrap();
        assert_eq!(last.body, body_cells(&engine));
        assert_eq!(last.food, engine.state().food);
        assert_eq!(last.score, engine.score());
        assert!(!last.over);
    }

    #[test]
    fn input_port_delivers_to_set_direction() {
        let mut engine = engine();
        engine.advance();
        InputPort::deliver(&mut engine, Direction::Left);
        assert_eq!(engine.state().body.head(), Cell::new(3, 4));
    }
}
