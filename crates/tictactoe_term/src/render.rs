//! Text rendering of engine state.

use tictactoe_engine::PublicState;

/// Renders the board, status line and history controls.
pub fn render(state: &PublicState) -> String {
    let mut out = state.board().display();
    out.push_str("\n\n");
    out.push_str(&state.message());
    if let Some(mark) = state.to_move().filter(|_| !state.is_reviewing()) {
        out.push_str(&format!(" ({} to move)", mark));
    }

    let len = *state.history_len();
    if len > 0 {
        let moves: Vec<String> = (0..len)
            .map(|i| match state.review_index() {
                Some(at) if *at == i => format!("[{}]", i + 1),
                _ => (i + 1).to_string(),
            })
            .collect();
        out.push_str(&format!("\nHistory: {}", moves.join(" ")));
    }

    let back = if *state.can_step_back() { "<" } else { " " };
    let forward = if *state.can_step_forward() { ">" } else { " " };
    if back != " " || forward != " " {
        out.push_str(&format!("\nNavigate: {} {}", back, forward));
    }
    out
}
