//! Tick-driven game engine
//!
//! One `advance` is one move. The rules, in order:
//!
//! 1. If the new head lands on any segment except the current head, the
//!    game is over and nothing else changes (the head is not committed).
//! 2. If it lands on food, the snake grows by one, the score goes up by
//!    one and the food is re-rolled onto a free cell.
//! 3. Otherwise the snake slides forward.
//!
//! Once the game is over `advance` does nothing until [`Engine::reset`].

use rand::{Rng, RngCore};

use super::grid::{Coord, Direction};
use super::snake::Snake;
use crate::config::{GRID_SIZE, INITIAL_SCORE, INITIAL_SNAKE_LENGTH, SNAKE_CAPACITY};

/// What a tick did, for the renderer and the log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Snake moved one cell
    Moved,
    /// Snake ate; carries the new score
    Ate { score: u16 },
    /// Snake ran into itself; game is now over
    Collided,
    /// Game was already over, nothing changed
    Halted,
}

/// Reasons a hand-built state is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StateError {
    /// Fewer than the minimum or more than the maximum segments
    BadLength,
    /// A segment or the food is off the board
    OutOfBounds,
    /// Two segments share a cell
    Overlap,
    /// Food sits on the snake
    FoodOnSnake,
}

/// Everything the renderer needs to draw a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    snake: Snake,
    food: Coord,
    score: u16,
    game_over: bool,
}

impl GameState {
    fn initial() -> Self {
        Self {
            snake: Snake::new(),
            food: Coord::default(),
            score: INITIAL_SCORE,
            game_over: false,
        }
    }

    /// Build a state from parts, checking the invariants the engine relies on
    pub fn from_parts(segments: &[Coord], food: Coord, score: u16) -> Result<Self, StateError> {
        if segments.len() < INITIAL_SNAKE_LENGTH || segments.len() > SNAKE_CAPACITY {
            return Err(StateError::BadLength);
        }
        if !food.in_bounds() || segments.iter().any(|c| !c.in_bounds()) {
            return Err(StateError::OutOfBounds);
        }
        let snake = Snake::from_segments(segments).ok_or(StateError::BadLength)?;
        if snake.has_overlap() {
            return Err(StateError::Overlap);
        }
        if snake.occupies(food) {
            return Err(StateError::FoodOnSnake);
        }
        Ok(Self {
            snake,
            food,
            score,
            game_over: false,
        })
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Coord {
        self.food
    }

    pub fn score(&self) -> u16 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }
}

/// The game engine
///
/// Owns the game state and the random source used for food placement.
pub struct Engine<R> {
    state: GameState,
    rng: R,
}

impl<R: RngCore> Engine<R> {
    /// Start a new game
    pub fn new(rng: R) -> Self {
        let mut engine = Self {
            state: GameState::initial(),
            rng,
        };
        engine.place_food();
        engine
    }

    /// Resume from an explicit state (food is kept as given)
    pub fn with_state(state: GameState, rng: R) -> Self {
        Self { state, rng }
    }

    /// Current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether the last tick ended the game
    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    /// Swap in a new random source (e.g. re-seeded from a button press time)
    pub fn reseed(&mut self, rng: R) {
        self.rng = rng;
    }

    /// Restore the starting configuration and roll fresh food
    ///
    /// The starting direction is owned by the input slot and is reset there.
    pub fn reset(&mut self) {
        self.state.snake.reset();
        self.state.score = INITIAL_SCORE;
        self.state.game_over = false;
        self.place_food();
    }

    /// Run one tick in `direction`
    pub fn advance(&mut self, direction: Direction) -> TickOutcome {
        if self.state.game_over {
            return TickOutcome::Halted;
        }

        let head = self.state.snake.head().step(direction);

        if self.state.snake.body_contains(head) {
            self.state.game_over = true;
            return TickOutcome::Collided;
        }

        if head == self.state.food {
            self.state.snake.grow(head);
            self.state.score = self.state.score.wrapping_add(1);
            self.place_food();
            return TickOutcome::Ate {
                score: self.state.score,
            };
        }

        self.state.snake.slide(head);
        TickOutcome::Moved
    }

    /// Roll food uniformly over the board until it lands on a free cell
    ///
    /// Terminates because the snake can never fill the board
    /// (capacity < cell count, checked at compile time).
    fn place_food(&mut self) {
        loop {
            let candidate = Coord::new(
                self.rng.random_range(0..GRID_SIZE),
                self.rng.random_range(0..GRID_SIZE),
            );
            if !self.state.snake.occupies(candidate) {
                self.state.food = candidate;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5EED)
    }

    fn engine_with(segments: &[Coord], food: Coord) -> Engine<SmallRng> {
        let state = GameState::from_parts(segments, food, 0).unwrap();
        Engine::with_state(state, rng())
    }

    fn start() -> [Coord; 3] {
        [Coord::new(3, 4), Coord::new(2, 4), Coord::new(1, 4)]
    }

    #[test]
    fn test_reset_state() {
        let mut engine = Engine::new(rng());
        engine.advance(Direction::Down);
        engine.advance(Direction::Down);
        engine.reset();

        let state = engine.state();
        assert_eq!(state.snake().segments(), &start());
        assert_eq!(state.score(), 0);
        assert!(!state.is_over());
        assert!(!state.snake().occupies(state.food()));
        assert!(state.food().in_bounds());
    }

    #[test]
    fn test_eat_scenario() {
        let mut engine = engine_with(&start(), Coord::new(4, 4));

        let outcome = engine.advance(Direction::Right);

        assert_eq!(outcome, TickOutcome::Ate { score: 1 });
        let state = engine.state();
        assert_eq!(
            state.snake().segments(),
            &[
                Coord::new(4, 4),
                Coord::new(3, 4),
                Coord::new(2, 4),
                Coord::new(1, 4)
            ]
        );
        assert_eq!(state.score(), 1);
        assert_ne!(state.food(), Coord::new(4, 4));
        assert!(!state.snake().occupies(state.food()));
        assert!(!state.is_over());
    }

    #[test]
    fn test_plain_move_shifts() {
        let mut engine = engine_with(&start(), Coord::new(10, 10));

        assert_eq!(engine.advance(Direction::Up), TickOutcome::Moved);

        let state = engine.state();
        assert_eq!(
            state.snake().segments(),
            &[Coord::new(3, 3), Coord::new(3, 4), Coord::new(2, 4)]
        );
        assert_eq!(state.score(), 0);
        assert_eq!(state.food(), Coord::new(10, 10));
    }

    #[test]
    fn test_wraparound_move() {
        let body = [Coord::new(15, 4), Coord::new(14, 4), Coord::new(13, 4)];
        let mut engine = engine_with(&body, Coord::new(10, 10));
        engine.advance(Direction::Right);
        assert_eq!(engine.state().snake().head(), Coord::new(0, 4));

        let body = [Coord::new(0, 4), Coord::new(1, 4), Coord::new(2, 4)];
        let mut engine = engine_with(&body, Coord::new(10, 10));
        engine.advance(Direction::Left);
        assert_eq!(engine.state().snake().head(), Coord::new(15, 4));
    }

    #[test]
    fn test_collision_freezes_state() {
        // Head at (2,2) turning down into its own body at (2,3)
        let body = [
            Coord::new(2, 2),
            Coord::new(3, 2),
            Coord::new(3, 3),
            Coord::new(2, 3),
            Coord::new(1, 3),
        ];
        let mut engine = engine_with(&body, Coord::new(9, 9));
        let before = engine.state().clone();

        assert_eq!(engine.advance(Direction::Down), TickOutcome::Collided);

        let after = engine.state();
        assert!(after.is_over());
        assert_eq!(after.snake(), before.snake());
        assert_eq!(after.food(), before.food());
        assert_eq!(after.score(), before.score());
    }

    #[test]
    fn test_reversal_into_neck_collides() {
        let mut engine = engine_with(&start(), Coord::new(9, 9));
        assert_eq!(engine.advance(Direction::Left), TickOutcome::Collided);
    }

    #[test]
    fn test_moving_into_tail_cell_collides() {
        // 2x2 loop: the tail cell is still occupied when the head arrives
        let body = [
            Coord::new(5, 5),
            Coord::new(6, 5),
            Coord::new(6, 6),
            Coord::new(5, 6),
        ];
        let mut engine = engine_with(&body, Coord::new(0, 0));
        assert_eq!(engine.advance(Direction::Down), TickOutcome::Collided);
    }

    #[test]
    fn test_game_over_is_sticky() {
        let mut engine = engine_with(&start(), Coord::new(9, 9));
        engine.advance(Direction::Left);
        let frozen = engine.state().clone();

        for dir in Direction::ALL {
            assert_eq!(engine.advance(dir), TickOutcome::Halted);
        }
        assert_eq!(engine.state(), &frozen);

        engine.reset();
        assert!(!engine.is_over());
        assert_eq!(engine.advance(Direction::Right), TickOutcome::Moved);
    }

    #[test]
    fn test_score_counts_each_food() {
        let mut engine = engine_with(&start(), Coord::new(4, 4));
        engine.advance(Direction::Right);

        // Force the next food right in front of the head
        let segments: std::vec::Vec<Coord> = engine.state().snake().segments().to_vec();
        let state = GameState::from_parts(&segments, Coord::new(5, 4), engine.state().score())
            .unwrap();
        let mut engine = Engine::with_state(state, rng());
        assert_eq!(engine.advance(Direction::Right), TickOutcome::Ate { score: 2 });
        assert_eq!(engine.state().snake().len(), 5);
    }

    #[test]
    fn test_from_parts_validation() {
        assert_eq!(
            GameState::from_parts(&start()[..2], Coord::new(9, 9), 0),
            Err(StateError::BadLength)
        );
        assert_eq!(
            GameState::from_parts(&start(), Coord::new(16, 0), 0),
            Err(StateError::OutOfBounds)
        );
        assert_eq!(
            GameState::from_parts(&start(), Coord::new(2, 4), 0),
            Err(StateError::FoodOnSnake)
        );
        let looped = [Coord::new(1, 1), Coord::new(2, 1), Coord::new(1, 1)];
        assert_eq!(
            GameState::from_parts(&looped, Coord::new(9, 9), 0),
            Err(StateError::Overlap)
        );
    }

    fn any_direction() -> impl Strategy<Value = Direction> {
        (0u8..4).prop_map(|raw| Direction::from_u8(raw).unwrap_or(Direction::Up))
    }

    proptest! {
        #[test]
        fn prop_random_games_keep_invariants(
            seed in any::<u64>(),
            moves in proptest::collection::vec(any_direction(), 1..200),
        ) {
            let mut engine = Engine::new(SmallRng::seed_from_u64(seed));

            for dir in moves {
                let before = engine.state().clone();
                let outcome = engine.advance(dir);
                let after = engine.state();

                prop_assert!(after.snake().segments().iter().all(|c| c.in_bounds()));
                prop_assert!(after.snake().len() >= 3);
                prop_assert!(after.snake().len() <= SNAKE_CAPACITY);

                match outcome {
                    TickOutcome::Moved => {
                        prop_assert_eq!(after.snake().len(), before.snake().len());
                        prop_assert_eq!(after.score(), before.score());
                        let old = before.snake().segments();
                        let new = after.snake().segments();
                        for i in 1..new.len() {
                            prop_assert_eq!(new[i], old[i - 1]);
                        }
                        prop_assert_eq!(new[0], old[0].step(dir));
                    }
                    TickOutcome::Ate { score } => {
                        prop_assert_eq!(score, before.score() + 1);
                        prop_assert_eq!(after.snake().len(), before.snake().len() + 1);
                        prop_assert!(!after.snake().occupies(after.food()));
                    }
                    TickOutcome::Collided => {
                        prop_assert!(after.is_over());
                        prop_assert_eq!(after.snake(), before.snake());
                        prop_assert_eq!(after.food(), before.food());
                        prop_assert_eq!(after.score(), before.score());
                    }
                    TickOutcome::Halted => {
                        prop_assert!(before.is_over());
                        prop_assert_eq!(after, &before);
                    }
                }

                if !after.is_over() {
                    prop_assert!(!after.snake().has_overlap());
                }
            }
        }
    }
}
