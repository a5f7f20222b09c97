//! Perft: exhaustive legal move tree counting.

use std::ops::AddAssign;

use super::{Move, MoveList, Position};

/// Leaf counts of a perft run, in the columns published for reference
/// positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PerftStats {
    pub nodes: u64,
    pub captures: u64,
    pub en_passants: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl AddAssign for PerftStats {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passants += rhs.en_passants;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

impl Position {
    /// Number of leaf nodes of the legal move tree `depth` plies deep.
    /// Depth 0 counts the position itself.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let mut moves = MoveList::new();
        self.generate_pseudo_legal(&mut moves);

        let mut nodes = 0;
        for &mv in &moves {
            let next = self.play(mv);
            if next.is_king_checked(mv.color()) {
                continue;
            }
            nodes += if depth == 1 { 1 } else { next.perft(depth - 1) };
        }
        nodes
    }

    /// Like [`Position::perft`] but also classifies every leaf by the move that
    /// reached it.
    #[must_use]
    pub fn perft_stats(&self, depth: u32) -> PerftStats {
        if depth == 0 {
            return PerftStats {
                nodes: 1,
                ..PerftStats::default()
            };
        }
        let mut moves = MoveList::new();
        self.generate_pseudo_legal(&mut moves);

        let mut stats = PerftStats::default();
        for &mv in &moves {
            let next = self.play(mv);
            if next.is_king_checked(mv.color()) {
                continue;
            }
            if depth > 1 {
                stats += next.perft_stats(depth - 1);
                continue;
            }
            stats.nodes += 1;
            stats.captures += u64::from(mv.is_capture());
            stats.en_passants += u64::from(mv.is_en_passant());
            stats.castles += u64::from(mv.is_castling());
            stats.promotions += u64::from(mv.is_promotion());
            if next.in_check() {
                stats.checks += 1;
                stats.checkmates += u64::from(!next.has_legal_move());
            }
        }
        stats
    }

    /// Node count below each legal root move, in generation order.
    #[must_use]
    pub fn perft_divide(&self, depth: u32) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        let divide: Vec<(Move, u64)> = self
            .legal_moves()
            .into_iter()
            .map(|mv| {
                let nodes = self.play(mv).perft(depth - 1);
                #[cfg(feature = "logging")]
                log::trace!("{mv}: {nodes}");
                (mv, nodes)
            })
            .collect();

        #[cfg(feature = "logging")]
        log::debug!(
            "perft({depth}) divide over {} root moves: {} nodes",
            divide.len(),
            divide.iter().map(|(_, nodes)| nodes).sum::<u64>()
        );
        divide
    }
}
