//! Turn-by-turn game controller.
//!
//! `GameSession` owns the live `GameState` and everything around it that a
//! front end needs: the current status, a pending promotion, whose input is
//! accepted, the computer opponent, and the result notification. Every
//! request is validated before anything changes, so a rejected request
//! leaves the session exactly as it was.

use log::{debug, info, warn};

use crate::chess_errors::ChessErrors;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::{Engine, SearchParams};
use crate::game_flow::game_result::{GameReport, ResultListener};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::game_status::GameStatus;
use crate::move_generation::game_end_classifier::classify_game_status;
use crate::move_generation::legal_move_apply::{execute_move, undo_moves, ExecuteOutcome};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::move_generator::MoveCandidate;
use crate::search::minimax_search::{Difficulty, SearchConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Both sides are entered by hand. `scored_as` picks the side whose
    /// result gets reported; `None` reports nothing.
    TwoPlayer { scored_as: Option<Color> },
    /// `human` plays against the minimax engine.
    VersusBot { human: Color, difficulty: Difficulty },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::TwoPlayer { scored_as: None }
    }
}

impl GameMode {
    /// Side whose point of view the result is reported from.
    pub fn scored_color(&self) -> Option<Color> {
        match *self {
            GameMode::TwoPlayer { scored_as } => scored_as,
            GameMode::VersusBot { human, .. } => Some(human),
        }
    }

    pub fn engine_color(&self) -> Option<Color> {
        match *self {
            GameMode::TwoPlayer { .. } => None,
            GameMode::VersusBot { human, .. } => Some(human.opposite()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Seed for the engine's move-order shuffling.
    pub seed: Option<u64>,
}

/// A promoting pawn move waiting for the piece choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    pub from: Position,
    pub to: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Played {
        mv: MoveCandidate,
        status: GameStatus,
    },
    /// Nothing was played; supply a kind with `choose_promotion` or call
    /// `cancel_promotion`.
    AwaitingPromotion(PendingPromotion),
}

pub struct GameSession {
    config: GameConfig,
    game_state: GameState,
    status: GameStatus,
    pending_promotion: Option<PendingPromotion>,
    engine: Option<Box<dyn Engine>>,
    listener: Option<Box<dyn ResultListener>>,
    report: Option<GameReport>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self::from_game_state(config, GameState::new_game())
    }

    /// Start from an arbitrary position, for instance one built with
    /// `GameState::from_fen`.
    pub fn from_game_state(config: GameConfig, game_state: GameState) -> Self {
        let engine = match config.mode {
            GameMode::TwoPlayer { .. } => None,
            GameMode::VersusBot { difficulty, .. } => {
                let search = SearchConfig::from(difficulty);
                let engine = match config.seed {
                    Some(seed) => MinimaxEngine::with_seed(search, seed),
                    None => MinimaxEngine::new(search),
                };
                Some(Box::new(engine) as Box<dyn Engine>)
            }
        };
        let status = classify_game_status(&game_state);
        Self {
            config,
            game_state,
            status,
            pending_promotion: None,
            engine,
            listener: None,
            report: None,
        }
    }

    /// Swap the computer opponent, for instance for a `RandomEngine`. Ignored
    /// by two-player games, which never ask an engine.
    pub fn set_engine(&mut self, engine: Box<dyn Engine>) {
        debug!("engine set to {}", engine.name());
        self.engine = Some(engine);
    }

    pub fn set_result_listener(&mut self, listener: Box<dyn ResultListener>) {
        self.listener = Some(listener);
    }

    /// Throw the current game away and start again from the initial position.
    pub fn reset(&mut self) {
        self.game_state = GameState::new_game();
        self.status = GameStatus::InProgress;
        self.pending_promotion = None;
        self.report = None;
        if let Some(engine) = self.engine.as_mut() {
            engine.new_game();
        }
        debug!("session reset");
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.game_state.side_to_move
    }

    #[inline]
    pub fn captured_pieces(&self) -> &CapturedPieces {
        &self.game_state.captured_pieces
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending_promotion
    }

    /// Report of the finished game, if it has been scored.
    #[inline]
    pub fn last_report(&self) -> Option<&GameReport> {
        self.report.as_ref()
    }

    /// Whether a human move may be entered right now.
    pub fn accepts_human_input(&self) -> bool {
        !self.status.is_terminal()
            && self.pending_promotion.is_none()
            && self.config.mode.engine_color() != Some(self.game_state.side_to_move)
    }

    /// Destinations for the piece on `from`, empty while input is disabled.
    pub fn legal_moves(&self, from: Position) -> Vec<Position> {
        if !self.accepts_human_input() {
            return Vec::new();
        }
        legal_moves(&self.game_state, from)
    }

    /// Play a human move. A promoting move without `promotion` suspends the
    /// session until `choose_promotion` or `cancel_promotion`.
    pub fn submit_move(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, ChessErrors> {
        self.check_turn_open()?;
        if self.config.mode.engine_color() == Some(self.game_state.side_to_move) {
            return Err(self.reject(ChessErrors::NotHumanTurn(self.game_state.side_to_move)));
        }

        match execute_move(&mut self.game_state, from, to, promotion) {
            Ok(ExecuteOutcome::Applied(status)) => Ok(self.finish_ply(from, to, promotion, status)),
            Ok(ExecuteOutcome::PromotionRequired { from, to }) => {
                let pending = PendingPromotion { from, to };
                debug!(
                    "awaiting promotion choice for {}{}",
                    from.to_algebraic(),
                    to.to_algebraic()
                );
                self.pending_promotion = Some(pending);
                Ok(MoveOutcome::AwaitingPromotion(pending))
            }
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Resume a suspended promotion with `kind`. An invalid kind keeps the
    /// promotion pending.
    pub fn choose_promotion(&mut self, kind: PieceKind) -> Result<MoveOutcome, ChessErrors> {
        let Some(pending) = self.pending_promotion else {
            return Err(self.reject(ChessErrors::NoPromotionPending));
        };
        if !kind.is_promotion_choice() {
            return Err(self.reject(ChessErrors::InvalidPromotionChoice(kind)));
        }

        match execute_move(&mut self.game_state, pending.from, pending.to, Some(kind)) {
            Ok(ExecuteOutcome::Applied(status)) => {
                self.pending_promotion = None;
                Ok(self.finish_ply(pending.from, pending.to, Some(kind), status))
            }
            Ok(ExecuteOutcome::PromotionRequired { .. }) => {
                Err(self.reject(ChessErrors::InvalidPromotionChoice(kind)))
            }
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Drop the pending promotion; the board was never changed.
    pub fn cancel_promotion(&mut self) -> Result<PendingPromotion, ChessErrors> {
        match self.pending_promotion.take() {
            Some(pending) => {
                debug!("promotion cancelled");
                Ok(pending)
            }
            None => Err(self.reject(ChessErrors::NoPromotionPending)),
        }
    }

    /// Let the engine move for its side. Runs the full search before returning.
    pub fn play_engine_move(&mut self) -> Result<MoveOutcome, ChessErrors> {
        self.check_turn_open()?;
        let side = self.game_state.side_to_move;
        if self.config.mode.engine_color() != Some(side) {
            return Err(self.reject(ChessErrors::NotEngineTurn(side)));
        }
        let Some(engine) = self.engine.as_mut() else {
            return Err(self.reject(ChessErrors::NotEngineTurn(side)));
        };

        let output = match engine.choose_move(&self.game_state, &SearchParams::default()) {
            Ok(output) => output,
            Err(err) => return Err(self.reject(err)),
        };
        let mv = output.best_move;
        debug!(
            "{} chose {}{} ({} nodes)",
            engine.name(),
            mv.from.to_algebraic(),
            mv.to.to_algebraic(),
            output.nodes
        );
        match execute_move(&mut self.game_state, mv.from, mv.to, mv.promotion) {
            Ok(ExecuteOutcome::Applied(status)) => {
                Ok(self.finish_ply(mv.from, mv.to, mv.promotion, status))
            }
            Ok(ExecuteOutcome::PromotionRequired { from, to }) => {
                Err(self.reject(ChessErrors::IllegalMove { from, to }))
            }
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Take back the last turn. In a bot game with the human to move this
    /// rewinds the engine's reply and the human move before it; otherwise a
    /// single ply. Returns the number of plies undone (0 at the start).
    ///
    /// A pending promotion is dropped and a recorded result is forgotten, so
    /// finishing the game again reports again.
    pub fn undo(&mut self) -> usize {
        let plies = match self.config.mode {
            GameMode::VersusBot { human, .. } if self.game_state.side_to_move == human => 2,
            _ => 1,
        };
        self.pending_promotion = None;
        let undone = undo_moves(&mut self.game_state, plies);
        if undone > 0 {
            self.status = classify_game_status(&self.game_state);
            self.report = None;
        }
        undone
    }

    fn check_turn_open(&self) -> Result<(), ChessErrors> {
        if self.status.is_terminal() {
            return Err(self.reject(ChessErrors::GameOver(self.status)));
        }
        if self.pending_promotion.is_some() {
            return Err(self.reject(ChessErrors::PromotionPending));
        }
        Ok(())
    }

    fn reject(&self, err: ChessErrors) -> ChessErrors {
        warn!("rejected request: {err}");
        err
    }

    fn finish_ply(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
        status: GameStatus,
    ) -> MoveOutcome {
        self.status = status;
        if status.is_terminal() {
            self.report_result();
        }
        MoveOutcome::Played {
            mv: MoveCandidate { from, to, promotion },
            status,
        }
    }

    fn report_result(&mut self) {
        if self.report.is_some() {
            return;
        }
        let winner = match self.status {
            GameStatus::Checkmate => Some(self.game_state.side_to_move.opposite()),
            _ => None,
        };
        info!(
            "game over after {} plies: {:?}, winner {:?}",
            self.game_state.ply_count(),
            self.status,
            winner
        );

        let Some(perspective) = self.config.mode.scored_color() else {
            return;
        };
        let report = GameReport::new(
            self.status,
            self.game_state.side_to_move,
            perspective,
            self.game_state.ply_count(),
        );
        if let Some(listener) = self.listener.as_mut() {
            listener.on_game_finished(&report);
        }
        self.report = Some(report);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_trait::EngineOutput;
    use crate::game_flow::game_result::GameResult;
    use std::sync::{Arc, Mutex};

    fn sq(name: &str) -> Position {
        Position::from_algebraic(name).unwrap()
    }

    fn play(session: &mut GameSession, from: &str, to: &str) -> MoveOutcome {
        session.submit_move(sq(from), sq(to), None).unwrap()
    }

    fn recording_listener(session: &mut GameSession) -> Arc<Mutex<Vec<GameReport>>> {
        let reports = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&reports);
        session.set_result_listener(Box::new(move |report: &GameReport| {
            sink.lock().unwrap().push(report.clone());
        }));
        reports
    }

    fn bot_config(human: Color) -> GameConfig {
        GameConfig {
            mode: GameMode::VersusBot {
                human,
                difficulty: Difficulty::Easy,
            },
            seed: Some(17),
        }
    }

    #[test]
    fn two_player_moves_alternate() {
        let mut session = GameSession::default();
        assert_eq!(session.legal_moves(sq("e2")).len(), 2);
        let outcome = play(&mut session, "e2", "e4");
        assert!(matches!(
            outcome,
            MoveOutcome::Played {
                status: GameStatus::InProgress,
                ..
            }
        ));
        assert_eq!(session.side_to_move(), Color::Dark);
        assert!(session.legal_moves(sq("e4")).is_empty());
        assert_eq!(session.legal_moves(sq("e7")).len(), 2);
    }

    #[test]
    fn rejected_requests_change_nothing() {
        let mut session = GameSession::default();
        let before = session.game_state().clone();
        assert_eq!(
            session.submit_move(sq("e4"), sq("e5"), None),
            Err(ChessErrors::EmptySquare(sq("e4")))
        );
        assert_eq!(
            session.submit_move(sq("e7"), sq("e5"), None),
            Err(ChessErrors::NotSideToMove(sq("e7")))
        );
        assert_eq!(
            session.submit_move(sq("e2"), sq("e5"), None),
            Err(ChessErrors::IllegalMove {
                from: sq("e2"),
                to: sq("e5")
            })
        );
        assert_eq!(
            session.submit_move(sq("e2"), sq("e4"), Some(PieceKind::Queen)),
            Err(ChessErrors::UnexpectedPromotion {
                from: sq("e2"),
                to: sq("e4")
            })
        );
        assert_eq!(session.game_state(), &before);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn promotion_suspends_until_chosen() {
        let game = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mut session = GameSession::from_game_state(GameConfig::default(), game.clone());

        let outcome = play(&mut session, "a7", "a8");
        let pending = PendingPromotion {
            from: sq("a7"),
            to: sq("a8"),
        };
        assert_eq!(outcome, MoveOutcome::AwaitingPromotion(pending));
        assert_eq!(session.game_state(), &game);
        assert_eq!(session.pending_promotion(), Some(pending));
        assert!(session.legal_moves(sq("e1")).is_empty());
        assert_eq!(
            session.submit_move(sq("e1"), sq("e2"), None),
            Err(ChessErrors::PromotionPending)
        );

        assert_eq!(
            session.choose_promotion(PieceKind::King),
            Err(ChessErrors::InvalidPromotionChoice(PieceKind::King))
        );
        assert_eq!(session.pending_promotion(), Some(pending));

        let outcome = session.choose_promotion(PieceKind::Queen).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Played {
                mv: MoveCandidate {
                    from: sq("a7"),
                    to: sq("a8"),
                    promotion: Some(PieceKind::Queen),
                },
                status: GameStatus::Check,
            }
        );
        assert_eq!(
            session.game_state().board.piece_at(sq("a8")),
            Some(Piece::new(Color::Light, PieceKind::Queen))
        );
        assert_eq!(session.pending_promotion(), None);
    }

    #[test]
    fn cancelled_promotion_leaves_the_board_alone() {
        let game = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mut session = GameSession::from_game_state(GameConfig::default(), game.clone());
        play(&mut session, "a7", "a8");
        assert!(session.cancel_promotion().is_ok());
        assert_eq!(session.cancel_promotion(), Err(ChessErrors::NoPromotionPending));
        assert_eq!(
            session.choose_promotion(PieceKind::Rook),
            Err(ChessErrors::NoPromotionPending)
        );
        assert_eq!(session.game_state(), &game);

        // A promotion can also be given up front.
        let outcome = session
            .submit_move(sq("a7"), sq("a8"), Some(PieceKind::Knight))
            .unwrap();
        assert!(matches!(outcome, MoveOutcome::Played { .. }));
        assert_eq!(
            session.game_state().board.piece_at(sq("a8")),
            Some(Piece::new(Color::Light, PieceKind::Knight))
        );
    }

    #[test]
    fn bot_game_alternates_human_and_engine() {
        let mut session = GameSession::new(bot_config(Color::Light));
        assert_eq!(
            session.play_engine_move(),
            Err(ChessErrors::NotEngineTurn(Color::Light))
        );
        play(&mut session, "e2", "e4");
        assert!(session.legal_moves(sq("d2")).is_empty());
        assert_eq!(
            session.submit_move(sq("e7"), sq("e5"), None),
            Err(ChessErrors::NotHumanTurn(Color::Dark))
        );

        let outcome = session.play_engine_move().unwrap();
        assert!(matches!(outcome, MoveOutcome::Played { .. }));
        assert_eq!(session.side_to_move(), Color::Light);
        assert_eq!(session.game_state().ply_count(), 2);

        // Undo takes back the human move and the reply together.
        assert_eq!(session.undo(), 2);
        assert_eq!(session.game_state(), &GameState::new_game());
        assert_eq!(session.undo(), 0);
    }

    #[test]
    fn engine_moves_first_when_human_plays_dark() {
        let mut session = GameSession::new(bot_config(Color::Dark));
        assert!(!session.accepts_human_input());
        assert!(session.legal_moves(sq("e2")).is_empty());
        assert_eq!(
            session.submit_move(sq("e2"), sq("e4"), None),
            Err(ChessErrors::NotHumanTurn(Color::Light))
        );
        session.play_engine_move().unwrap();
        assert!(session.accepts_human_input());
        assert_eq!(session.side_to_move(), Color::Dark);
    }

    struct ScriptedEngine(Result<MoveCandidate, ChessErrors>);

    impl Engine for ScriptedEngine {
        fn name(&self) -> &str {
            "Scripted"
        }

        fn choose_move(
            &mut self,
            _game_state: &GameState,
            _params: &SearchParams,
        ) -> Result<EngineOutput, ChessErrors> {
            self.0.clone().map(|best_move| EngineOutput {
                best_move,
                score: None,
                nodes: 0,
            })
        }
    }

    #[test]
    fn failed_engine_moves_leave_the_session_untouched() {
        let mut session = GameSession::new(bot_config(Color::Dark));
        let before = session.game_state().clone();

        let bogus = MoveCandidate {
            from: sq("e2"),
            to: sq("e5"),
            promotion: None,
        };
        session.set_engine(Box::new(ScriptedEngine(Ok(bogus))));
        assert_eq!(
            session.play_engine_move(),
            Err(ChessErrors::IllegalMove {
                from: sq("e2"),
                to: sq("e5")
            })
        );

        session.set_engine(Box::new(ScriptedEngine(Err(ChessErrors::NoLegalMoves))));
        assert_eq!(session.play_engine_move(), Err(ChessErrors::NoLegalMoves));

        assert_eq!(session.game_state(), &before);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(!session.accepts_human_input());
    }

    #[test]
    fn two_player_game_cannot_ask_the_engine() {
        let mut session = GameSession::default();
        assert_eq!(
            session.play_engine_move(),
            Err(ChessErrors::NotEngineTurn(Color::Light))
        );
        play(&mut session, "d2", "d4");
        assert_eq!(session.undo(), 1);
        assert_eq!(session.game_state(), &GameState::new_game());
    }

    #[test]
    fn checkmate_is_reported_once_and_again_after_undo() {
        let mut session = GameSession::new(GameConfig {
            mode: GameMode::TwoPlayer {
                scored_as: Some(Color::Light),
            },
            seed: None,
        });
        let reports = recording_listener(&mut session);

        play(&mut session, "f2", "f3");
        play(&mut session, "e7", "e5");
        play(&mut session, "g2", "g4");
        let outcome = play(&mut session, "d8", "h4");
        assert!(matches!(
            outcome,
            MoveOutcome::Played {
                status: GameStatus::Checkmate,
                ..
            }
        ));
        assert_eq!(
            session.submit_move(sq("a2"), sq("a3"), None),
            Err(ChessErrors::GameOver(GameStatus::Checkmate))
        );
        assert!(session.legal_moves(sq("a2")).is_empty());

        {
            let reports = reports.lock().unwrap();
            assert_eq!(reports.len(), 1);
            assert_eq!(reports[0].result, GameResult::Loss);
            assert_eq!(reports[0].winner, Some(Color::Dark));
            assert_eq!(reports[0].terminal, GameStatus::Checkmate);
            assert_eq!(reports[0].plies, 4);
        }
        assert!(session.last_report().is_some());

        assert_eq!(session.undo(), 1);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(session.last_report().is_none());
        play(&mut session, "d8", "h4");
        assert_eq!(reports.lock().unwrap().len(), 2);
    }

    #[test]
    fn unscored_games_report_nothing() {
        let mut session = GameSession::default();
        let reports = recording_listener(&mut session);
        play(&mut session, "f2", "f3");
        play(&mut session, "e7", "e5");
        play(&mut session, "g2", "g4");
        play(&mut session, "d8", "h4");
        assert_eq!(session.status(), GameStatus::Checkmate);
        assert!(reports.lock().unwrap().is_empty());
        assert!(session.last_report().is_none());
    }

    #[test]
    fn stalemate_is_reported_as_a_draw() {
        let game = GameState::from_fen("7k/4Q3/6K1/8/8/8/8/8 w - - 0 1").unwrap();
        let mut session = GameSession::from_game_state(
            GameConfig {
                mode: GameMode::TwoPlayer {
                    scored_as: Some(Color::Dark),
                },
                seed: None,
            },
            game,
        );
        let reports = recording_listener(&mut session);
        play(&mut session, "e7", "f7");
        assert_eq!(session.status(), GameStatus::Stalemate);
        let reports = reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].result, GameResult::Draw);
        assert_eq!(reports[0].winner, None);
    }

    #[test]
    fn engine_mate_is_a_loss_for_the_human() {
        let game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/3R2K1 w - - 0 1").unwrap();
        let mut session = GameSession::from_game_state(bot_config(Color::Dark), game);
        let reports = recording_listener(&mut session);
        let outcome = session.play_engine_move().unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Played {
                mv: MoveCandidate::new(sq("d1"), sq("d8")),
                status: GameStatus::Checkmate,
            }
        );
        assert_eq!(reports.lock().unwrap()[0].result, GameResult::Loss);

        // Only the engine's ply exists, so undo stops after one.
        assert_eq!(session.undo(), 1);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn reset_starts_over() {
        let mut session = GameSession::default();
        play(&mut session, "e2", "e4");
        play(&mut session, "d7", "d5");
        play(&mut session, "e4", "d5");
        assert_eq!(session.captured_pieces().by(Color::Light).len(), 1);
        session.reset();
        assert_eq!(session.game_state(), &GameState::new_game());
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(session.captured_pieces().by(Color::Light).is_empty());
    }
}
