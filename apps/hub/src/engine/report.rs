//! Game trace written to standard output.

use std::io::{self, Write};

use crate::domain::{Card, RoundRecord};

/// `Lead player=<n>` then `Cards=<S>.<r> ...` in the order played.
pub fn write_round<O: Write>(out: &mut O, round: &RoundRecord) -> io::Result<()> {
    writeln!(out, "Lead player={}", round.leader)?;
    let cards: Vec<String> = round.plays.iter().map(|(_, card)| trace_card(*card)).collect();
    writeln!(out, "Cards={}", cards.join(" "))?;
    out.flush()
}

/// `0:<score> 1:<score> ...`
pub fn write_scores<O: Write>(out: &mut O, scores: &[i64]) -> io::Result<()> {
    let parts: Vec<String> = scores
        .iter()
        .enumerate()
        .map(|(seat, score)| format!("{seat}:{score}"))
        .collect();
    writeln!(out, "{}", parts.join(" "))?;
    out.flush()
}

fn trace_card(card: Card) -> String {
    format!("{}.{}", card.suit.as_char(), card.rank.as_char())
}
