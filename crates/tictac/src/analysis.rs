//! Position analysis and self-play reports.

use serde::Serialize;
use tictac_core::{
    Board, CELLS, EncodedState, Outcome, Player, Position, best_move, count_nodes, outcome,
    score_moves,
};
use tracing::{debug, instrument};

/// Minimax scores for every empty cell of one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The analysed state.
    pub state: EncodedState,
    /// Side to move.
    pub to_move: Player,
    /// Score per cell from the AI's point of view; `None` when occupied.
    pub scores: [Option<i32>; CELLS],
    /// The move the side to move would pick.
    pub best: Option<Position>,
    /// Nodes in the exhaustive tree below this position.
    pub nodes: u64,
    /// Result, if the position is already decided.
    pub outcome: Option<Outcome>,
}

impl Analysis {
    /// Analyses `state` with `to_move` to play.
    #[instrument(skip_all, fields(state = %state, to_move = %to_move))]
    pub fn new(state: EncodedState, to_move: Player) -> Self {
        let board = state.decode();
        let analysis = Self {
            state,
            to_move,
            scores: score_moves(&board, to_move),
            best: best_move(&board, to_move),
            nodes: count_nodes(state, to_move),
            outcome: outcome(&state),
        };
        debug!(best = ?analysis.best, nodes = analysis.nodes, "Analysis complete");
        analysis
    }

    /// Human-readable report: the board, a grid of per-cell scores and
    /// the chosen move.
    pub fn render(&self) -> String {
        let mut out = format!("{}\n\n", self.state.decode().display());
        if let Some(result) = self.outcome {
            out.push_str(&format!("Game over: {}\n", result));
            return out;
        }

        out.push_str(&format!("Scores for {} to move (AI view):\n", self.to_move));
        for row in self.scores.chunks(3) {
            let cells: Vec<String> = row
                .iter()
                .map(|score| match score {
                    Some(s) => format!("{:>3}", s),
                    None => "  .".to_string(),
                })
                .collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
        if let Some(pos) = self.best {
            out.push_str(&format!("Best move: {} ({})\n", pos.to_index(), pos));
        }
        out.push_str(&format!("Nodes searched: {}\n", self.nodes));
        out
    }
}

/// Record of one self-play game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfPlay {
    /// Moves in order, with the side that played each.
    pub moves: Vec<(Player, Position)>,
    /// Final board.
    pub board: Board,
    /// How the game ended.
    pub outcome: Outcome,
}

/// Plays the AI against an optimal opponent from the empty board.
#[instrument]
pub fn self_play(first: Player) -> SelfPlay {
    let mut board = Board::new();
    let mut to_move = first;
    let mut moves = Vec::new();

    // `best_move` only runs dry once the game is decided.
    while let Some(pos) = best_move(&board, to_move) {
        if board.place(pos, to_move).is_err() {
            break;
        }
        moves.push((to_move, pos));
        to_move = to_move.opponent();
    }

    let result = outcome(&board.encode()).unwrap_or(Outcome::Draw);
    debug!(outcome = %result, moves = moves.len(), "Self-play finished");
    SelfPlay {
        moves,
        board,
        outcome: result,
    }
}
