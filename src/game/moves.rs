use super::*;

impl KlondikeGame {
    /// Foundation rule: an empty foundation takes any Ace, a started one
    /// takes the next rank of its suit.
    pub fn foundation_accepts(&self, foundation_idx: usize, card: Card) -> bool {
        self.foundations
            .get(foundation_idx)
            .map_or(false, |pile| can_stack_foundation(pile.last(), card))
    }

    /// Tableau rule: an empty column takes a King, otherwise the incoming
    /// card must be opposite in color and one rank below the face-up top.
    pub fn tableau_accepts(&self, dst: usize, card: Card) -> bool {
        self.tableau
            .get(dst)
            .map_or(false, |pile| can_stack_tableau(pile.last(), card))
    }

    /// Whether the cards from `start` to the top of column `col` form a
    /// contiguous face-up run that may be picked up as a unit. Re-verified on
    /// every proposal rather than trusted from the caller's selection.
    pub fn tableau_run_is_liftable(&self, col: usize, start: usize) -> bool {
        let Some(pile) = self.tableau.get(col) else {
            return false;
        };
        if start >= pile.len() {
            return false;
        }
        pile[start].face_up && is_valid_face_up_run(&pile[start..])
    }

    pub fn can_move_waste_to_foundation(&self, foundation_idx: usize) -> bool {
        self.waste
            .last()
            .map_or(false, |card| self.foundation_accepts(foundation_idx, *card))
    }

    pub fn move_waste_to_foundation(&mut self, foundation_idx: usize) -> bool {
        let Some(card) = self.waste.last().copied() else {
            return false;
        };
        if !self.foundation_accepts(foundation_idx, card) {
            return false;
        }

        self.waste.pop();
        self.foundations[foundation_idx].push(card);
        self.moves += 1;
        true
    }

    pub fn can_move_waste_to_tableau(&self, dst: usize) -> bool {
        self.waste
            .last()
            .map_or(false, |card| self.tableau_accepts(dst, *card))
    }

    pub fn move_waste_to_tableau(&mut self, dst: usize) -> bool {
        let Some(card) = self.waste.last().copied() else {
            return false;
        };
        if !self.tableau_accepts(dst, card) {
            return false;
        }

        self.waste.pop();
        self.tableau[dst].push(card);
        self.moves += 1;
        true
    }

    pub fn can_move_tableau_top_to_foundation(&self, src: usize, foundation_idx: usize) -> bool {
        let Some(card) = self.tableau_top(src) else {
            return false;
        };
        card.face_up && self.foundation_accepts(foundation_idx, card)
    }

    pub fn move_tableau_top_to_foundation(&mut self, src: usize, foundation_idx: usize) -> bool {
        if !self.can_move_tableau_top_to_foundation(src, foundation_idx) {
            return false;
        }
        let Some(card) = self.tableau[src].pop() else {
            return false;
        };

        self.foundations[foundation_idx].push(card);
        self.flip_top_tableau_if_needed(src);
        self.moves += 1;
        true
    }

    pub fn can_move_foundation_top_to_tableau(&self, foundation_idx: usize, dst: usize) -> bool {
        let Some(card) = self.foundation_top(foundation_idx) else {
            return false;
        };
        self.tableau_accepts(dst, card)
    }

    pub fn move_foundation_top_to_tableau(&mut self, foundation_idx: usize, dst: usize) -> bool {
        if !self.can_move_foundation_top_to_tableau(foundation_idx, dst) {
            return false;
        }
        let Some(card) = self.foundations[foundation_idx].pop() else {
            return false;
        };

        self.tableau[dst].push(card);
        self.moves += 1;
        true
    }

    // In practice only an Ace onto an empty foundation can satisfy the
    // foundation rule from another foundation.
    pub fn can_move_foundation_top_to_foundation(&self, src: usize, dst: usize) -> bool {
        if src == dst {
            return false;
        }
        let Some(card) = self.foundation_top(src) else {
            return false;
        };
        self.foundation_accepts(dst, card)
    }

    pub fn move_foundation_top_to_foundation(&mut self, src: usize, dst: usize) -> bool {
        if !self.can_move_foundation_top_to_foundation(src, dst) {
            return false;
        }
        let Some(card) = self.foundations[src].pop() else {
            return false;
        };

        self.foundations[dst].push(card);
        self.moves += 1;
        true
    }

    pub fn can_move_tableau_run_to_tableau(&self, src: usize, start: usize, dst: usize) -> bool {
        if src == dst || !self.tableau_run_is_liftable(src, start) {
            return false;
        }
        self.tableau_accepts(dst, self.tableau[src][start])
    }

    pub fn move_tableau_run_to_tableau(&mut self, src: usize, start: usize, dst: usize) -> bool {
        if !self.can_move_tableau_run_to_tableau(src, start, dst) {
            return false;
        }

        let moved = self.tableau[src].split_off(start);
        self.tableau[dst].extend(moved);
        self.flip_top_tableau_if_needed(src);
        self.moves += 1;
        true
    }

    /// Lowest-indexed foundation that accepts `card`, if any. Shared by the
    /// double-click auto-move and the auto-complete solver.
    pub fn first_accepting_foundation(&self, card: Card) -> Option<usize> {
        self.foundations
            .iter()
            .position(|pile| can_stack_foundation(pile.last(), card))
    }

    fn flip_top_tableau_if_needed(&mut self, col: usize) {
        if let Some(card) = self.tableau[col].last_mut() {
            card.face_up = true;
        }
    }
}

fn is_valid_face_up_run(run: &[Card]) -> bool {
    run.windows(2).all(|pair| {
        let a = pair[0];
        let b = pair[1];
        a.face_up && b.face_up && a.color_red() != b.color_red() && a.rank == b.rank + 1
    })
}

fn can_stack_foundation(top: Option<&Card>, card: Card) -> bool {
    match top {
        None => card.rank == 1,
        Some(top_card) => top_card.suit == card.suit && card.rank == top_card.rank + 1,
    }
}

fn can_stack_tableau(top: Option<&Card>, card: Card) -> bool {
    match top {
        None => card.rank == 13,
        Some(top_card) => {
            top_card.face_up
                && top_card.color_red() != card.color_red()
                && top_card.rank == card.rank + 1
        }
    }
}
