//! Greedy heuristic autoplay.
//!
//! One outer cycle runs the tableau phase and the foundation phase to
//! quiescence, then draws; when the draw pile is out, it redeals, and a
//! redeal that comes around again with no move in between ends the game as
//! stuck. The strategy is intentionally greedy, not optimal: it always takes
//! the first legal move in a fixed scan order.

use crate::card::TABLEAU_COLUMNS;
use crate::rules::{can_foundation_move, can_single_card_move, can_stack_move};
use crate::table::PileId;

use super::{Game, GameStatus};

impl Game {
    /// Finds the first tableau column the whole visible run of `col` may
    /// move onto.
    ///
    /// A King run is not offered an empty column while its own face-down
    /// pile is also empty: that move frees nothing and would cycle forever.
    /// This is solver policy, not a rule; [`Game::execute`] still allows it.
    fn find_stack_target(&self, col: usize) -> Option<usize> {
        let run = &self.table.visible[col];
        (0..TABLEAU_COLUMNS).find(|&target| {
            target != col
                && can_stack_move(run, &self.table.visible[target])
                && !(self.table.visible[target].is_empty() && self.table.hidden[col].is_empty())
        })
    }

    /// Applies the highest-priority tableau move, if any: the waste's top
    /// card onto the first column that takes it, otherwise the first whole
    /// visible run that fits another column. Returns whether a move was
    /// made.
    fn tableau_move(&mut self) -> bool {
        if let Some(card) = self.table.waste.top() {
            for col in 0..TABLEAU_COLUMNS {
                if can_single_card_move(card, &self.table.visible[col]) {
                    let _ = self.table.transfer(PileId::Waste, PileId::Visible(col), 1);
                    self.note_move();
                    return true;
                }
            }
        }

        for col in 0..TABLEAU_COLUMNS {
            if self.table.visible[col].is_empty() {
                continue;
            }
            if let Some(target) = self.find_stack_target(col) {
                let run_len = self.table.visible[col].len();
                let _ = self
                    .table
                    .transfer(PileId::Visible(col), PileId::Visible(target), run_len);
                self.table.flip_facedown(col);
                self.note_move();
                return true;
            }
        }
        false
    }

    /// Applies the highest-priority foundation move, if any: the waste's top
    /// card first, then the first tableau top card that fits a foundation.
    /// Returns whether a move was made.
    fn foundation_move(&mut self) -> bool {
        if let Some(card) = self.table.waste.top() {
            for f in 0..self.table.foundations.len() {
                if can_foundation_move(card, &self.table.foundations[f]) {
                    let _ = self.table.transfer(PileId::Waste, PileId::Foundation(f), 1);
                    self.note_move();
                    return true;
                }
            }
        }

        for col in 0..TABLEAU_COLUMNS {
            let Some(card) = self.table.visible[col].top() else {
                continue;
            };
            for f in 0..self.table.foundations.len() {
                if can_foundation_move(card, &self.table.foundations[f]) {
                    let _ = self
                        .table
                        .transfer(PileId::Visible(col), PileId::Foundation(f), 1);
                    self.table.flip_facedown(col);
                    self.note_move();
                    return true;
                }
            }
        }
        false
    }

    /// Runs one outer solver cycle: tableau phase and foundation phase to
    /// quiescence, then — if neither produced a move — a draw, a redeal, or
    /// the stuck verdict. Returns the status afterwards.
    pub fn step(&mut self) -> GameStatus {
        if self.status().is_terminal() {
            return self.status();
        }

        let mut moved = false;
        while self.tableau_move() {
            moved = true;
        }
        while self.foundation_move() {
            moved = true;
        }

        if self.table.is_won() {
            self.set_status(GameStatus::Won);
            return self.status();
        }

        if !moved {
            if !self.table.draw.is_empty() {
                let _ = self.draw();
            } else if !self.table.waste.is_empty() {
                if self.moved_since_redeal() {
                    let _ = self.redeal();
                } else {
                    self.set_status(GameStatus::Stuck);
                }
            } else {
                // Nothing left to draw or recycle and no move available.
                self.set_status(GameStatus::Stuck);
            }
        }
        self.status()
    }

    /// Runs the heuristic solver until the game is won or stuck and returns
    /// the terminal status.
    pub fn autoplay(&mut self) -> GameStatus {
        while !self.status().is_terminal() {
            self.step();
        }
        self.status()
    }
}
