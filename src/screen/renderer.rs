//! State renderer: one visual update per game state.

use strum::IntoEnumIterator;
use tokio::time::Instant;
use tracing::{debug, instrument};

use super::GameScreen;
use crate::animation::{Icon, TransitionKind};
use crate::games::tictactoe::{Board, Player, Position, Winner};
use crate::view_model::GameState;

/// A visual element of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// One of the nine cell images.
    Cell(Position),
    /// The result text.
    ResultLabel,
    /// The overlay dimming the field.
    Dimmer,
}

/// An animation started by [`GameScreen::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    /// Element being animated.
    pub target: ElementId,
    /// Primitive that was started.
    pub kind: TransitionKind,
}

impl GameScreen {
    /// Applies one state and returns the transitions it started, in order.
    #[instrument(skip(self, now))]
    pub fn apply(&mut self, state: &GameState, now: Instant) -> Vec<Transition> {
        let mut started = Vec::new();
        match state {
            GameState::Inactive => {}
            GameState::ClearField => self.clear(now, &mut started),
            GameState::UpdateMove {
                position,
                placed,
                winner,
            } => self.update_move(*position, *placed, *winner, now, &mut started),
            GameState::Restore { board, winner } => self.restore(board, *winner, now, &mut started),
        }
        debug!(count = started.len(), "State applied");
        started
    }

    fn clear(&mut self, now: Instant, started: &mut Vec<Transition>) {
        let duration = self.config.animation_duration();
        for position in Position::iter() {
            let cell = &mut self.cells[position.to_index()];
            if cell.icon().is_some() {
                cell.scale_fade_out(now, duration);
                started.push(Transition {
                    target: ElementId::Cell(position),
                    kind: TransitionKind::ScaleFadeOut,
                });
            }
        }

        self.result_label.fade_out(now, duration);
        started.push(Transition {
            target: ElementId::ResultLabel,
            kind: TransitionKind::FadeOut,
        });
        self.dimmer.fade_out(now, duration);
        started.push(Transition {
            target: ElementId::Dimmer,
            kind: TransitionKind::FadeOut,
        });
    }

    fn update_move(
        &mut self,
        position: Position,
        placed: Option<Player>,
        winner: Winner,
        now: Instant,
        started: &mut Vec<Transition>,
    ) {
        if let Some(player) = placed {
            self.place_icon(position, player.into(), now, started);
        }
        self.show_winner(winner, now, started);
    }

    fn restore(
        &mut self,
        board: &Board,
        winner: Winner,
        now: Instant,
        started: &mut Vec<Transition>,
    ) {
        for position in Position::iter() {
            if let Some(player) = board.get(position).player() {
                self.place_icon(position, player.into(), now, started);
            }
        }
        self.show_winner(winner, now, started);
    }

    fn place_icon(
        &mut self,
        position: Position,
        icon: Icon,
        now: Instant,
        started: &mut Vec<Transition>,
    ) {
        let duration = self.config.animation_duration();
        self.cells[position.to_index()].scale_fade_in(icon, now, duration);
        started.push(Transition {
            target: ElementId::Cell(position),
            kind: TransitionKind::ScaleFadeIn(icon),
        });
    }

    fn show_winner(&mut self, winner: Winner, now: Instant, started: &mut Vec<Transition>) {
        let Some(text) = winner.result_text() else {
            return;
        };
        let duration = self.config.animation_duration();

        self.dimmer.fade_in(now, duration);
        started.push(Transition {
            target: ElementId::Dimmer,
            kind: TransitionKind::FadeIn,
        });
        self.result_label.fade_in(now, duration);
        started.push(Transition {
            target: ElementId::ResultLabel,
            kind: TransitionKind::FadeIn,
        });
        self.result_text = text.to_string();
    }
}
