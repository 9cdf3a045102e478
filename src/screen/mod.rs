//! The game screen: nine animated cells, a dimmer and a result label.
//!
//! A [`GameScreen`] is one attachment of the view. [`GameScreen::attach`]
//! acquires the elements, takes a state subscription and asks for a
//! restore, which brings the fresh view up to the current board. Dropping
//! the screen releases all of it, including the delayed layout task. The
//! screen never mutates game data: taps become intents, states become
//! animations.

mod dispatcher;
mod event;
mod hit_area;
mod input;
mod layout;
mod renderer;
mod scope;
pub mod theme;
mod ui;

pub use dispatcher::{DispatchError, IntentDispatcher, ScreenTransition};
pub use event::UiEvent;
pub use hit_area::{HitArea, HitAreaRegistry, TapTarget};
pub use input::{KeyAction, map_key, move_cursor};
pub use layout::FieldLayout;
pub use renderer::{ElementId, Transition};
pub use scope::ViewScope;
pub use ui::icon_art;

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::animation::VisualElement;
use crate::config::ScreenConfig;
use crate::games::tictactoe::Position;
use crate::view_model::{GameIntent, GameState};

/// Widest the playing field grows, in columns.
const MAX_FIELD_WIDTH: u16 = 60;

/// One attached instance of the game view.
#[derive(Debug)]
pub struct GameScreen {
    config: ScreenConfig,
    cells: [VisualElement; 9],
    result_label: VisualElement,
    result_text: String,
    dimmer: VisualElement,
    cursor: Position,
    layout: FieldLayout,
    hit_areas: HitAreaRegistry,
    dispatcher: IntentDispatcher,
    states: broadcast::Receiver<GameState>,
    scope: ViewScope,
}

impl GameScreen {
    /// Attaches a fresh view.
    ///
    /// `states` must be subscribed before the call so the answer to the
    /// restore intent sent here is not missed. The square-field correction
    /// is scheduled as well. Must be called inside a tokio runtime.
    #[instrument(skip_all)]
    pub fn attach(
        config: ScreenConfig,
        intent_tx: mpsc::UnboundedSender<GameIntent>,
        states: broadcast::Receiver<GameState>,
        ui_tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Result<Self, DispatchError> {
        let mut scope = ViewScope::default();
        scope.adopt(layout::schedule_adjustment(config.layout_delay(), ui_tx));

        let dispatcher = IntentDispatcher::new(intent_tx);
        dispatcher.restore()?;

        info!("View attached");
        Ok(Self {
            config,
            cells: std::array::from_fn(|_| VisualElement::blank()),
            result_label: VisualElement::hidden(),
            result_text: String::new(),
            dimmer: VisualElement::hidden(),
            cursor: Position::Center,
            layout: FieldLayout::default(),
            hit_areas: HitAreaRegistry::default(),
            dispatcher,
            states,
            scope,
        })
    }

    /// Releases the view. Pending view tasks are cancelled.
    #[instrument(skip_all)]
    pub fn detach(self) {
        info!(pending_tasks = self.scope.active(), "View detached");
    }

    /// Waits for the next state, in publication order. `None` once the
    /// view-model is gone.
    ///
    /// If the screen fell so far behind that states were lost, a restore is
    /// requested and the remaining states are delivered as usual.
    pub async fn next_state(&mut self) -> Option<GameState> {
        loop {
            match self.states.recv().await {
                Ok(state) => return Some(state),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Screen lagged behind the view-model, resyncing");
                    if let Err(e) = self.dispatcher.restore() {
                        warn!(error = %e, "Restore not delivered");
                    }
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// The cell element at `position`.
    pub fn cell(&self, position: Position) -> &VisualElement {
        &self.cells[position.to_index()]
    }

    /// The result label element.
    pub fn result_label(&self) -> &VisualElement {
        &self.result_label
    }

    /// Current result text, empty before any result.
    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    /// The dimmer element.
    pub fn dimmer(&self) -> &VisualElement {
        &self.dimmer
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Row sizing of the field.
    pub fn field_layout(&self) -> &FieldLayout {
        &self.layout
    }

    /// Hit areas of the last drawn frame.
    pub fn hit_areas(&self) -> &HitAreaRegistry {
        &self.hit_areas
    }

    /// Number of view tasks still pending.
    pub fn pending_tasks(&self) -> usize {
        self.scope.active()
    }

    /// Advances all animations. Returns whether any is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let elements = self
            .cells
            .iter_mut()
            .chain([&mut self.result_label, &mut self.dimmer]);
        let mut animating = false;
        for element in elements {
            if let Some(kind) = element.tick(now) {
                debug!(?kind, "Animation finished");
            }
            animating |= element.is_animating();
        }
        animating
    }

    /// Handles one UI event and reports what the host should do next.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: UiEvent) -> ScreenTransition {
        match event {
            UiEvent::AdjustField => {
                if self.layout.adjust(*self.config.cell_aspect()).is_none() {
                    debug!("Field not drawn yet, keeping even rows");
                }
                ScreenTransition::Stay
            }
            UiEvent::Terminal(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                match map_key(key, self.cursor) {
                    Some(KeyAction::MoveCursor(position)) => {
                        self.cursor = position;
                        ScreenTransition::Stay
                    }
                    Some(KeyAction::Activate) => self.tap(TapTarget::Cell(self.cursor)),
                    Some(KeyAction::TapCell(position)) => {
                        self.cursor = position;
                        self.tap(TapTarget::Cell(position))
                    }
                    Some(KeyAction::Back) => self.tap(TapTarget::Back),
                    Some(KeyAction::Recreate) => ScreenTransition::Recreate,
                    None => ScreenTransition::Stay,
                }
            }
            UiEvent::Terminal(Event::Mouse(mouse))
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
            {
                match self.hit_areas.hit_test(mouse.column, mouse.row) {
                    Some(target) => self.tap(target),
                    None => ScreenTransition::Stay,
                }
            }
            UiEvent::Terminal(_) => ScreenTransition::Stay,
        }
    }

    /// Dispatches a tap. Cell taps land on the dimmer while it covers the
    /// field.
    fn tap(&self, target: TapTarget) -> ScreenTransition {
        let target = match target {
            TapTarget::Cell(_) if *self.dimmer.visible() => TapTarget::Dimmer,
            other => other,
        };
        match self.dispatcher.tap(target) {
            Ok(transition) => transition,
            Err(e) => {
                warn!(error = %e, "Intent not delivered");
                ScreenTransition::Stay
            }
        }
    }

    /// Draws the screen and registers hit areas for the next input.
    pub fn render(&mut self, frame: &mut Frame) {
        self.hit_areas.clear();
        let area = frame.area();

        frame.render_widget(
            Block::new().style(Style::new().bg(theme::rgb(theme::BACKGROUND))),
            area,
        );

        let [header, field, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_header(frame, header);
        let grid = self.render_field(frame, field);

        if self.dimmer.is_shown() {
            let amount = self.dimmer.alpha() * theme::DIM_STRENGTH;
            ui::dim_area(frame.buffer_mut(), grid, amount);
        }
        if *self.dimmer.visible() {
            self.hit_areas.register(grid, TapTarget::Dimmer);
        }
        if self.result_label.is_shown() && !self.result_text.is_empty() {
            let rect = ui::draw_result(frame, grid, &self.result_label, &self.result_text);
            self.hit_areas.register(rect, TapTarget::ResultLabel);
        }

        let hint = Paragraph::new("←↑↓→ / 1-9 move · Enter tap · F5 recreate view · Esc back")
            .style(Style::new().fg(theme::rgb(theme::MUTED)))
            .centered();
        frame.render_widget(hint, footer);
    }

    fn render_header(&mut self, frame: &mut Frame, header: Rect) {
        let back = Span::styled("← Back", Style::new().fg(theme::rgb(theme::MUTED)));
        let back_width = (back.width() as u16).min(header.width);
        let back_rect = Rect::new(header.x, header.y, back_width, header.height);
        frame.render_widget(Paragraph::new(Line::from(back)), back_rect);
        self.hit_areas.register(back_rect, TapTarget::Back);

        let title = Paragraph::new("Tic-Tac-Toe")
            .style(Style::new().fg(theme::rgb(theme::RESULT)))
            .centered();
        frame.render_widget(title, header);
    }

    /// Draws the 3x3 grid and returns the rect it occupies.
    fn render_field(&mut self, frame: &mut Frame, field: Rect) -> Rect {
        let width = field.width.min(MAX_FIELD_WIDTH);
        let field = ui::center_rect(field, width, field.height);

        let rows: [Rect; 3] = Layout::vertical(self.layout.row_constraints())
            .flex(Flex::Center)
            .areas(field);

        for (row_index, row) in rows.iter().enumerate() {
            let cols: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(*row);
            for (col_index, rect) in cols.into_iter().enumerate() {
                let Some(position) = Position::from_row_col(row_index as u8, col_index as u8)
                else {
                    continue;
                };
                if position == Position::TopLeft {
                    self.layout.record_reference(rect.width);
                }
                let highlighted = position == self.cursor && !*self.dimmer.visible();
                ui::draw_cell(frame, rect, &self.cells[position.to_index()], highlighted);
                self.hit_areas.register(rect, TapTarget::Cell(position));
            }
        }

        rows[0].union(rows[2])
    }
}
