//! Narrated play of a single round, for the terminal binaries.

use std::io::Write;

use crate::card::Card;
use crate::error::RoundError;
use crate::game::Round;
use crate::hand::Hand;
use crate::policy::DecisionPolicy;
use crate::result::{Outcome, RoundResult};

/// Plays `round` from the deal to the showdown, describing each stage on `out`.
///
/// Individual decisions are left to the round's policy; this writes the deal,
/// each finished turn, every card the dealer draws, and the final results.
///
/// # Errors
///
/// Returns an error if the round fails or `out` cannot be written.
pub fn narrate_round<P, W>(round: &mut Round<P>, out: &mut W) -> Result<RoundResult, RoundError>
where
    P: DecisionPolicy,
    W: Write + ?Sized,
{
    round.deal()?;
    writeln!(out, "\n{}", round.dealer_view())?;
    for player in round.players() {
        writeln!(out, "{}", player.describe())?;
    }

    while let Some(index) = round.play_turn()? {
        let player = &round.players()[index];
        writeln!(out, "{}", player.describe())?;
        if player.hand().is_bust() {
            writeln!(out, "{} busts!", player.name())?;
        }
    }

    writeln!(out, "\nDealer's turn:")?;
    let drawn = round.dealer_play()?;
    let cards = round.dealer().hand().cards();
    let (initial, _) = cards.split_at(cards.len() - drawn.len());

    let mut shown = Hand::default();
    for &card in initial {
        shown.add_card(card);
    }
    let name = round.dealer().name();
    writeln!(out, "{name} reveals {} | Total: {}", list(initial), shown.total())?;
    for card in drawn {
        shown.add_card(card);
        writeln!(out, "{name} draws {card} | Total: {}", shown.total())?;
    }
    if shown.is_bust() {
        writeln!(out, "{name} busts!")?;
    }

    let result = round.showdown()?;
    writeln!(out, "\nFinal Results:")?;
    for player in &result.players {
        match player.outcome {
            Outcome::Wins => writeln!(out, "{} wins!", player.name)?,
            Outcome::Loses => writeln!(out, "{} loses.", player.name)?,
            Outcome::Ties => writeln!(out, "{} ties with the dealer.", player.name)?,
        }
    }
    Ok(result)
}

fn list(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
