use sapper_core::{
    BoardSize, CellIndex, Game, GameListener, GameStatus, IndexSource, RandomIndexSource,
};
use web_time::{SystemTime, UNIX_EPOCH};

use crate::*;

/// What a move meant for the session. `Won` and `Lost` are only reported by
/// the move that ended the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Won { new_best: bool },
    Lost,
}

/// A game driven by the player, with its clock and scoring.
#[derive(Clone, Debug)]
pub struct Session<L = (), S = RandomIndexSource> {
    game: Game<L, S>,
    timer: GameTimer,
}

impl<L: GameListener> Session<L> {
    /// Starts a game with the last used board size and a clock seeded generator.
    pub fn start(ctx: &AppContext, listener: L) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self::start_with(ctx, listener, RandomIndexSource::from_seed(seed))
    }
}

impl<L: GameListener, S: IndexSource> Session<L, S> {
    pub fn start_with(ctx: &AppContext, listener: L, source: S) -> Self {
        Self {
            game: Game::new(ctx.settings().last_board_size(), listener, source),
            timer: GameTimer::new(),
        }
    }

    /// Starts over on `size` and remembers it as the last used board size.
    pub fn new_game(&mut self, ctx: &mut AppContext, size: BoardSize) {
        ctx.settings_mut().set_last_board_size(size);
        self.game.new_game(size);
        self.timer.reset();
    }

    pub fn reveal(&mut self, ctx: &mut AppContext, index: CellIndex) -> Result<Outcome> {
        let before = self.game.status();
        self.game.reveal(index)?;
        self.finish_move(ctx, before)
    }

    pub fn toggle_flag(&mut self, ctx: &mut AppContext, index: CellIndex) -> Result<Outcome> {
        let before = self.game.status();
        self.game.toggle_flag(index)?;
        self.finish_move(ctx, before)
    }

    fn finish_move(&mut self, ctx: &mut AppContext, before: GameStatus) -> Result<Outcome> {
        let after = self.game.status();
        if before == after {
            return Ok(Outcome::Continue);
        }

        if before.is_initial() {
            self.timer.start();
        }

        match after {
            GameStatus::Success => {
                self.timer.stop();
                let score = GameScore::today(self.game.size(), self.timer.elapsed_secs());
                let new_best = ctx.record_score(score)?;
                Ok(Outcome::Won { new_best })
            }
            GameStatus::Failure => {
                self.timer.stop();
                Ok(Outcome::Lost)
            }
            GameStatus::Initial | GameStatus::InProgress => Ok(Outcome::Continue),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    pub fn game(&self) -> &Game<L, S> {
        &self.game
    }

    pub fn timer(&self) -> &GameTimer {
        &self.timer
    }

    pub fn listener(&self) -> &L {
        self.game.listener()
    }

    pub fn listener_mut(&mut self) -> &mut L {
        self.game.listener_mut()
    }
}
