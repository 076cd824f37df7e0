//! The game state machine.

use im::Vector;
use tracing::{debug, info, warn};

use crate::core::{
    Coin, Difficulty, DismissalCause, EngineConfig, EventBatch, GameEvent, GameRng, GameState,
    Guess, Innings, Phase, RandomSource, Role, Side, Snapshot,
};
use crate::error::{Command, EngineError};
use crate::opponent::opponent_move;
use crate::rules::{ChaseEnd, ChaseSummary, OutcomeResolver};

/// The result of a successful command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Update {
    /// State after the command.
    pub snapshot: Snapshot,
    /// Events the command caused, in order.
    pub events: EventBatch,
}

/// One game of hand cricket against an automated opponent.
///
/// Commands validate their preconditions first and return an error without
/// touching state (or drawing randomness) when they fail. Transitions are
/// instantaneous; any pacing belongs to the caller.
///
/// ```
/// use hand_cricket::core::{Coin, EngineConfig, Phase, Role};
/// use hand_cricket::engine::GameEngine;
///
/// let mut engine = GameEngine::new(EngineConfig::default().with_seed(3));
/// engine.call_toss(Coin::Head).unwrap();
/// if engine.state().phase == Phase::RoleChoice {
///     engine.choose_role(Role::Batting).unwrap();
/// }
/// assert_eq!(engine.state().phase, Phase::Playing);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<R = GameRng> {
    config: EngineConfig,
    state: GameState,
    rng: R,
    log: Vector<GameEvent>,
}

impl GameEngine<GameRng> {
    /// Create an engine seeded from `config.seed`, or from entropy if unset.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = rng.seed(), difficulty = %config.difficulty, "new game engine");
        Self::with_rng(config, rng)
    }
}

impl Default for GameEngine<GameRng> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create an engine with an explicit random source.
    pub fn with_rng(config: EngineConfig, rng: R) -> Self {
        Self {
            state: GameState::new(config.difficulty),
            config,
            rng,
            log: Vector::new(),
        }
    }

    // === Accessors ===

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Read-only projection of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Every event since the last reset.
    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.log
    }

    /// The random source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    // === Commands ===

    /// Change the opponent's difficulty. Only legal before play starts.
    ///
    /// The choice also applies to games started by later resets.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<Snapshot, EngineError> {
        match self.state.phase {
            Phase::Toss | Phase::RoleChoice => {
                self.config.difficulty = difficulty;
                self.state.difficulty = difficulty;
                info!(%difficulty, "difficulty set");
                Ok(self.snapshot())
            }
            Phase::Playing | Phase::Finished => Err(reject(EngineError::DifficultyLocked)),
        }
    }

    /// Call the toss.
    ///
    /// The opponent calls an independent fair coin. Matching calls give the
    /// human the choice of role; otherwise the opponent picks a role at
    /// random and play starts immediately.
    pub fn call_toss(&mut self, call: Coin) -> Result<Update, EngineError> {
        if self.state.phase != Phase::Toss {
            return Err(reject(EngineError::InvalidPhaseTransition {
                command: Command::CallToss,
                phase: self.state.phase,
            }));
        }

        let opponent_call = if self.rng.gen_bool(0.5) { Coin::Head } else { Coin::Tails };
        let mut events = EventBatch::new();

        if call == opponent_call {
            self.state.phase = Phase::RoleChoice;
            events.push(GameEvent::TossResolved {
                call,
                opponent_call,
                winner: Side::Human,
            });
            info!(%call, %opponent_call, "human won the toss");
        } else {
            let opponent_role = if self.rng.gen_bool(0.5) { Role::Batting } else { Role::Bowling };
            let human_role = opponent_role.opposite();
            self.state.role = Some(human_role);
            self.state.phase = Phase::Playing;
            events.push(GameEvent::TossResolved {
                call,
                opponent_call,
                winner: Side::Opponent,
            });
            events.push(GameEvent::RoleAssigned {
                chosen_by: Side::Opponent,
                human_role,
            });
            info!(%call, %opponent_call, %human_role, "opponent won the toss");
        }

        Ok(self.commit(events))
    }

    /// Choose bat or bowl after winning the toss.
    pub fn choose_role(&mut self, role: Role) -> Result<Update, EngineError> {
        if self.state.phase != Phase::RoleChoice {
            return Err(reject(EngineError::InvalidRoleChoice {
                phase: self.state.phase,
            }));
        }

        self.state.role = Some(role);
        self.state.phase = Phase::Playing;
        info!(human_role = %role, "role chosen");

        let mut events = EventBatch::new();
        events.push(GameEvent::RoleAssigned {
            chosen_by: Side::Human,
            human_role: role,
        });
        Ok(self.commit(events))
    }

    /// Play a ball with a raw number.
    ///
    /// Fails with `InvalidGuess` unless `n` is in `0..=10`.
    pub fn submit_guess(&mut self, n: i64) -> Result<Update, EngineError> {
        let role = self.playing_role()?;
        let guess = Guess::new(n).map_err(reject)?;
        Ok(self.play_ball(role, guess))
    }

    /// Play a ball with an already validated guess.
    pub fn play(&mut self, guess: Guess) -> Result<Update, EngineError> {
        let role = self.playing_role()?;
        Ok(self.play_ball(role, guess))
    }

    /// Discard the current game and start a fresh one. Legal in any phase.
    ///
    /// The configured difficulty carries over; the random source keeps its
    /// position.
    pub fn reset(&mut self) -> Update {
        self.state = GameState::new(self.config.difficulty);
        self.log = Vector::new();
        info!("game reset");

        let mut events = EventBatch::new();
        events.push(GameEvent::Reset);
        self.commit(events)
    }

    // === Internals ===

    fn playing_role(&self) -> Result<Role, EngineError> {
        match (self.state.phase, self.state.role) {
            (Phase::Playing, Some(role)) => Ok(role),
            (phase, _) => Err(reject(EngineError::InvalidPhaseTransition {
                command: Command::SubmitGuess,
                phase,
            })),
        }
    }

    fn play_ball(&mut self, role: Role, guess: Guess) -> Update {
        let n = guess.value();
        let batting = role.batting_side();
        let mut events = EventBatch::new();

        if self.state.last_guess == Some(n) {
            self.state.repeat_streak += 1;
        } else {
            self.state.repeat_streak = 1;
            self.state.last_guess = Some(n);
        }
        let streak = self.state.repeat_streak;

        if role == Role::Batting {
            if streak >= self.config.repeat_dismissal_streak {
                // No opponent move is drawn for this ball.
                self.state.last_opponent_move = None;
                self.state.balls += 1;
                self.dismiss(role, DismissalCause::Repetition, &mut events);
                return self.commit(events);
            }
            if streak >= self.config.repeat_warning_streak {
                let remaining = self.config.repeat_dismissal_streak - streak;
                warn!(value = n, streak, remaining, "repeated guess");
                events.push(GameEvent::RepeatWarning {
                    value: n,
                    streak,
                    remaining,
                });
            }
        }

        let opponent = opponent_move(self.state.difficulty, &self.state.guess_history, &mut self.rng);
        self.state.guess_history.push_back(n);
        self.state.last_opponent_move = Some(opponent);
        self.state.balls += 1;

        if n == opponent {
            debug!(guess = n, opponent, %batting, "caught");
            self.dismiss(role, DismissalCause::Caught, &mut events);
            return self.commit(events);
        }

        // A batting human showing 0 takes the bowler's number instead.
        let runs = match batting {
            Side::Human if n == 0 => opponent,
            Side::Human => n,
            Side::Opponent => opponent,
        };
        let total = {
            let total = self.state.runs_mut(batting);
            *total += u32::from(runs);
            *total
        };
        debug!(guess = n, opponent, %batting, runs, total, "ball played");
        events.push(GameEvent::BallPlayed {
            guess: n,
            opponent_move: opponent,
            batting,
            runs: u32::from(runs),
        });

        if self.state.innings == Innings::Second {
            if let Some(target) = self.state.target {
                if total >= target {
                    self.finish(batting, ChaseEnd::TargetReached, &mut events);
                }
            }
        }

        self.commit(events)
    }

    fn dismiss(&mut self, role: Role, cause: DismissalCause, events: &mut EventBatch) {
        let batting = role.batting_side();
        let total = self.state.runs(batting);
        events.push(GameEvent::Dismissed {
            batting,
            cause,
            total,
        });

        match self.state.innings {
            Innings::First => {
                let human_role = role.opposite();
                self.state.target = Some(total);
                self.state.role = Some(human_role);
                self.state.innings = Innings::Second;
                self.state.repeat_streak = 0;
                self.state.last_guess = None;
                self.state.balls = 0;
                info!(%batting, ?cause, target = total, %human_role, "innings over");
                events.push(GameEvent::InningsChanged {
                    innings: Innings::Second,
                    target: total,
                    human_role,
                });
            }
            Innings::Second => self.finish(batting, ChaseEnd::Dismissed, events),
        }
    }

    fn finish(&mut self, chaser: Side, end: ChaseEnd, events: &mut EventBatch) {
        debug_assert!(self.state.target.is_some(), "chase without a target");
        let summary = ChaseSummary {
            player_runs: self.state.player_runs,
            opponent_runs: self.state.opponent_runs,
            target: self.state.target.unwrap_or_default(),
            chaser,
            end,
        };
        let result = OutcomeResolver::resolve(&summary);

        self.state.result = Some(result);
        self.state.phase = Phase::Finished;
        info!(
            ?result,
            ?end,
            player_runs = summary.player_runs,
            opponent_runs = summary.opponent_runs,
            target = summary.target,
            "game over"
        );
        events.push(GameEvent::GameOver {
            result,
            player_runs: summary.player_runs,
            opponent_runs: summary.opponent_runs,
        });
    }

    fn commit(&mut self, events: EventBatch) -> Update {
        self.log.extend(events.iter().cloned());
        Update {
            snapshot: self.snapshot(),
            events,
        }
    }
}

fn reject(err: EngineError) -> EngineError {
    debug!(error = %err, "command rejected");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedSource;

    fn engine(draws: impl IntoIterator<Item = f64>) -> GameEngine<ScriptedSource> {
        GameEngine::with_rng(EngineConfig::default(), ScriptedSource::new(draws))
    }

    #[test]
    fn test_rejected_commands_draw_nothing() {
        let mut engine = GameEngine::with_rng(EngineConfig::default(), ScriptedSource::empty());
        let before = engine.state().clone();

        assert!(engine.submit_guess(3).is_err());
        assert!(engine.choose_role(Role::Batting).is_err());
        assert_eq!(engine.state(), &before);
        assert_eq!(engine.rng().consumed(), 0);
        assert!(engine.events().is_empty());
    }

    #[test]
    fn test_human_wins_toss() {
        // Opponent calls head (0.1 < 0.5)
        let mut engine = engine([0.1]);
        let update = engine.call_toss(Coin::Head).unwrap();

        assert_eq!(update.snapshot.phase, Phase::RoleChoice);
        assert_eq!(update.snapshot.role, None);
        assert_eq!(
            update.events.as_slice(),
            &[GameEvent::TossResolved {
                call: Coin::Head,
                opponent_call: Coin::Head,
                winner: Side::Human,
            }]
        );
    }

    #[test]
    fn test_opponent_wins_toss_and_bats() {
        // Opponent calls tails, then chooses to bat
        let mut engine = engine([0.9, 0.2]);
        let update = engine.call_toss(Coin::Head).unwrap();

        assert_eq!(update.snapshot.phase, Phase::Playing);
        assert_eq!(update.snapshot.role, Some(Role::Bowling));
        assert_eq!(update.events.len(), 2);
        assert_eq!(engine.rng().remaining(), 0);
    }

    #[test]
    fn test_invalid_guess_leaves_state() {
        let mut engine = engine([0.1]);
        engine.call_toss(Coin::Head).unwrap();
        engine.choose_role(Role::Batting).unwrap();
        let before = engine.state().clone();

        let err = engine.submit_guess(11).unwrap_err();
        assert_eq!(err, EngineError::InvalidGuess { input: "11".into() });
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_log_tracks_events_until_reset() {
        let mut engine = engine([0.1, ScriptedSource::pick(2, 11)]);
        engine.call_toss(Coin::Head).unwrap();
        engine.choose_role(Role::Batting).unwrap();
        engine.submit_guess(5).unwrap();
        assert_eq!(engine.events().len(), 3);

        let update = engine.reset();
        assert_eq!(update.events.as_slice(), &[GameEvent::Reset]);
        assert_eq!(engine.events().len(), 1);
    }
}
