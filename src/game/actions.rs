//! The textual action protocol: enumerate legal moves, parse a chosen one.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::card::{FOUNDATIONS, TABLEAU_COLUMNS};
use crate::error::{ActionError, ParseActionError};
use crate::rules::{can_foundation_move, can_foundation_to_tableau, can_single_card_move};
use crate::table::PileId;

use super::Game;

/// One legal (or at least well-formed) move in the action grammar.
///
/// Tokens are colon-delimited `source:count:destination` triples, except the
/// single letters `D` (draw) and `F` (redeal). Piles are `W` for the waste,
/// `T<i>` for tableau columns, and `F<i>` for foundations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `D` — move up to `draw_count` cards (three by default) from the
    /// draw pile to the waste.
    Draw,
    /// `F` — recycle the waste back into the draw pile.
    Redeal,
    /// `W:1:T<to>` — waste top card onto a tableau column.
    WasteToTableau {
        /// Destination column.
        to: usize,
    },
    /// `W:1:F<to>` — waste top card onto a foundation.
    WasteToFoundation {
        /// Destination foundation.
        to: usize,
    },
    /// `T<from>:<count>:T<to>` — the run of `count` cards from the top of
    /// one column's visible pile onto another column.
    TableauToTableau {
        /// Source column.
        from: usize,
        /// Run length, counted from the top of the visible pile.
        count: usize,
        /// Destination column.
        to: usize,
    },
    /// `T<from>:1:F<to>` — a column's top card onto a foundation.
    TableauToFoundation {
        /// Source column.
        from: usize,
        /// Destination foundation.
        to: usize,
    },
    /// `F<from>:1:T<to>` — a foundation's top card back onto a column.
    FoundationToTableau {
        /// Source foundation.
        from: usize,
        /// Destination column.
        to: usize,
    },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Draw => write!(f, "D"),
            Self::Redeal => write!(f, "F"),
            Self::WasteToTableau { to } => write!(f, "W:1:T{to}"),
            Self::WasteToFoundation { to } => write!(f, "W:1:F{to}"),
            Self::TableauToTableau { from, count, to } => write!(f, "T{from}:{count}:T{to}"),
            Self::TableauToFoundation { from, to } => write!(f, "T{from}:1:F{to}"),
            Self::FoundationToTableau { from, to } => write!(f, "F{from}:1:T{to}"),
        }
    }
}

/// A pile reference inside an action token.
enum Zone {
    Waste,
    Tableau(usize),
    Foundation(usize),
}

fn parse_zone(field: &str) -> Result<Zone, ParseActionError> {
    let mut chars = field.chars();
    let letter = chars.next().ok_or(ParseActionError::Malformed)?;
    let index = chars.as_str();
    match letter {
        'W' => {
            if index.is_empty() {
                Ok(Zone::Waste)
            } else {
                Err(ParseActionError::Malformed)
            }
        }
        'T' => parse_index(index, TABLEAU_COLUMNS).map(Zone::Tableau),
        'F' => parse_index(index, FOUNDATIONS).map(Zone::Foundation),
        _ => Err(ParseActionError::UnknownZone),
    }
}

fn parse_index(digits: &str, limit: usize) -> Result<usize, ParseActionError> {
    let index: usize = digits.parse().map_err(|_| ParseActionError::BadIndex)?;
    if index < limit {
        Ok(index)
    } else {
        Err(ParseActionError::BadIndex)
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parses one token of the grammar. Total: every input maps to an
    /// action or a structured error, and nothing is mutated either way.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        match token {
            "" => return Err(ParseActionError::Empty),
            "D" => return Ok(Self::Draw),
            "F" => return Ok(Self::Redeal),
            _ => {}
        }

        let mut fields = token.split(':');
        let (Some(src), Some(count), Some(dst), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(ParseActionError::Malformed);
        };

        let count: usize = count.parse().map_err(|_| ParseActionError::BadCount)?;
        if count == 0 {
            return Err(ParseActionError::BadCount);
        }

        let action = match (parse_zone(src)?, parse_zone(dst)?) {
            (Zone::Waste, Zone::Tableau(to)) => Self::WasteToTableau { to },
            (Zone::Waste, Zone::Foundation(to)) => Self::WasteToFoundation { to },
            (Zone::Tableau(from), Zone::Tableau(to)) => Self::TableauToTableau { from, count, to },
            (Zone::Tableau(from), Zone::Foundation(to)) => Self::TableauToFoundation { from, to },
            (Zone::Foundation(from), Zone::Tableau(to)) => Self::FoundationToTableau { from, to },
            _ => return Err(ParseActionError::Malformed),
        };

        // Only tableau-to-tableau moves carry a run; everything else is a
        // single card.
        if count != 1 && !matches!(action, Self::TableauToTableau { .. }) {
            return Err(ParseActionError::BadCount);
        }
        Ok(action)
    }
}

impl Game {
    /// Enumerates every currently legal action, in grammar order: `D`/`F`,
    /// waste moves, tableau-to-tableau runs, tableau-to-foundation, then
    /// foundation-to-tableau.
    ///
    /// `F` is offered whenever the draw pile is empty; executing it with an
    /// empty waste still fails cleanly.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let table = &self.table;
        let mut actions = Vec::new();

        if table.draw.is_empty() {
            actions.push(Action::Redeal);
        } else {
            actions.push(Action::Draw);
        }

        if let Some(card) = table.waste.top() {
            for to in 0..TABLEAU_COLUMNS {
                if can_single_card_move(card, &table.visible[to]) {
                    actions.push(Action::WasteToTableau { to });
                }
            }
            for to in 0..FOUNDATIONS {
                if can_foundation_move(card, &table.foundations[to]) {
                    actions.push(Action::WasteToFoundation { to });
                }
            }
        }

        for from in 0..TABLEAU_COLUMNS {
            for count in 1..=table.visible[from].len() {
                let Some(bottom) = table.visible[from].nth_from_top(count - 1) else {
                    continue;
                };
                for to in 0..TABLEAU_COLUMNS {
                    if to != from && can_single_card_move(bottom, &table.visible[to]) {
                        actions.push(Action::TableauToTableau { from, count, to });
                    }
                }
            }
        }

        for from in 0..TABLEAU_COLUMNS {
            if let Some(card) = table.visible[from].top() {
                for to in 0..FOUNDATIONS {
                    if can_foundation_move(card, &table.foundations[to]) {
                        actions.push(Action::TableauToFoundation { from, to });
                    }
                }
            }
        }

        for from in 0..FOUNDATIONS {
            for to in 0..TABLEAU_COLUMNS {
                if can_foundation_to_tableau(&table.foundations[from], &table.visible[to]) {
                    actions.push(Action::FoundationToTableau { from, to });
                }
            }
        }

        actions
    }

    /// Writes the legal actions as one space-terminated token line.
    ///
    /// # Errors
    ///
    /// Propagates formatting errors from `w`.
    pub fn write_actions<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        for action in self.legal_actions() {
            write!(w, "{action} ")?;
        }
        writeln!(w)
    }

    /// Executes one action.
    ///
    /// Legality is re-checked before splicing, so a well-formed but illegal
    /// token fails without touching the table; after a move that empties a
    /// column's visible pile, its next face-down card is flipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the move is illegal in the current position, the
    /// source pile is too short, or a draw/redeal is invalid. The table is
    /// unchanged on error.
    pub fn execute(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::Draw => {
                self.draw()?;
            }
            Action::Redeal => {
                self.redeal()?;
            }
            Action::WasteToTableau { to } => {
                let card = self.table.waste.top().ok_or(ActionError::NotEnoughCards)?;
                let target = self
                    .table
                    .visible
                    .get(to)
                    .ok_or(ActionError::IllegalMove)?;
                if !can_single_card_move(card, target) {
                    return Err(ActionError::IllegalMove);
                }
                let _ = self.table.transfer(PileId::Waste, PileId::Visible(to), 1);
                self.note_move();
            }
            Action::WasteToFoundation { to } => {
                let card = self.table.waste.top().ok_or(ActionError::NotEnoughCards)?;
                let target = self
                    .table
                    .foundations
                    .get(to)
                    .ok_or(ActionError::IllegalMove)?;
                if !can_foundation_move(card, target) {
                    return Err(ActionError::IllegalMove);
                }
                let _ = self.table.transfer(PileId::Waste, PileId::Foundation(to), 1);
                self.note_move();
            }
            Action::TableauToTableau { from, count, to } => {
                if from == to || from >= TABLEAU_COLUMNS || to >= TABLEAU_COLUMNS || count == 0 {
                    return Err(ActionError::IllegalMove);
                }
                let bottom = self.table.visible[from]
                    .nth_from_top(count - 1)
                    .ok_or(ActionError::NotEnoughCards)?;
                if !can_single_card_move(bottom, &self.table.visible[to]) {
                    return Err(ActionError::IllegalMove);
                }
                let _ = self
                    .table
                    .transfer(PileId::Visible(from), PileId::Visible(to), count);
                self.table.flip_facedown(from);
                self.note_move();
            }
            Action::TableauToFoundation { from, to } => {
                if from >= TABLEAU_COLUMNS {
                    return Err(ActionError::IllegalMove);
                }
                let card = self.table.visible[from]
                    .top()
                    .ok_or(ActionError::NotEnoughCards)?;
                let target = self
                    .table
                    .foundations
                    .get(to)
                    .ok_or(ActionError::IllegalMove)?;
                if !can_foundation_move(card, target) {
                    return Err(ActionError::IllegalMove);
                }
                let _ = self
                    .table
                    .transfer(PileId::Visible(from), PileId::Foundation(to), 1);
                self.table.flip_facedown(from);
                self.note_move();
            }
            Action::FoundationToTableau { from, to } => {
                if from >= FOUNDATIONS || to >= TABLEAU_COLUMNS {
                    return Err(ActionError::IllegalMove);
                }
                if !can_foundation_to_tableau(&self.table.foundations[from], &self.table.visible[to])
                {
                    return Err(ActionError::IllegalMove);
                }
                let _ = self
                    .table
                    .transfer(PileId::Foundation(from), PileId::Visible(to), 1);
                self.note_move();
            }
        }
        Ok(())
    }
}
