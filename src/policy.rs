//! Decision policies for players.

use std::fmt;
use std::io::{BufRead, Write};

use crate::card::{Card, Rank};
use crate::error::PolicyError;
use crate::hand::Participant;

/// Total at or above which the automated policy always stands.
pub const STAND_THRESHOLD: u8 = 17;

/// Total at or above which the automated policy stands against a weak up-card.
pub const WEAK_DEALER_THRESHOLD: u8 = 12;

/// Player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw another card.
    Hit,
    /// End the turn.
    Stand,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => write!(f, "Hit"),
            Self::Stand => write!(f, "Stand"),
        }
    }
}

/// Chooses an action for a player given their hand and the dealer's up-card.
pub trait DecisionPolicy {
    /// Decides the next action for `player`.
    ///
    /// # Errors
    ///
    /// Returns an error if the policy cannot produce a decision, e.g. when an
    /// interactive input stream is closed.
    fn decide(&mut self, player: &Participant, up_card: Card) -> Result<Action, PolicyError>;
}

impl<P: DecisionPolicy + ?Sized> DecisionPolicy for &mut P {
    fn decide(&mut self, player: &Participant, up_card: Card) -> Result<Action, PolicyError> {
        (**self).decide(player, up_card)
    }
}

/// Fixed two-threshold rule used by automated players.
///
/// Stands on 17 or more, stands on 12 or more against a dealer showing
/// 4, 5 or 6, and hits otherwise.
///
/// ```
/// use bjsim::{Action, Rank, automated_decision};
///
/// assert_eq!(automated_decision(17, Rank::Ace), Action::Stand);
/// assert_eq!(automated_decision(12, Rank::Five), Action::Stand);
/// assert_eq!(automated_decision(12, Rank::Nine), Action::Hit);
/// ```
#[must_use]
pub const fn automated_decision(total: u8, up_rank: Rank) -> Action {
    if total >= STAND_THRESHOLD {
        Action::Stand
    } else if total >= WEAK_DEALER_THRESHOLD
        && matches!(up_rank, Rank::Four | Rank::Five | Rank::Six)
    {
        Action::Stand
    } else {
        Action::Hit
    }
}

/// Policy that applies [`automated_decision`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AutomatedPolicy;

impl DecisionPolicy for AutomatedPolicy {
    fn decide(&mut self, player: &Participant, up_card: Card) -> Result<Action, PolicyError> {
        let action = automated_decision(player.total(), up_card.rank);
        log::debug!(
            "{} holds {} against {}, chooses {:?}",
            player.name(),
            player.total(),
            up_card,
            action
        );
        Ok(action)
    }
}

/// Policy that asks a human on a line-oriented stream.
///
/// Accepts `hit`/`h` and `stand`/`s` in any case. Anything else re-prompts.
pub struct InteractivePolicy<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractivePolicy<R, W> {
    /// Creates a policy reading answers from `input` and writing prompts to `output`.
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `prompt` and reads one line of input.
    ///
    /// Returns `None` once the input stream is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading the answer fails.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>, PolicyError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Consumes the policy and returns the underlying streams.
    #[must_use]
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

fn parse_action(line: &str) -> Option<Action> {
    match line.trim().to_ascii_lowercase().as_str() {
        "hit" | "h" => Some(Action::Hit),
        "stand" | "s" => Some(Action::Stand),
        _ => None,
    }
}

impl<R: BufRead, W: Write> DecisionPolicy for InteractivePolicy<R, W> {
    fn decide(&mut self, player: &Participant, up_card: Card) -> Result<Action, PolicyError> {
        writeln!(self.output, "{}", player.describe())?;
        let prompt = format!(
            "{}, your total is {}. Dealer shows {up_card}. Hit or stand? ",
            player.name(),
            player.total()
        );
        loop {
            let line = self.ask(&prompt)?.ok_or(PolicyError::InputClosed)?;
            if let Some(action) = parse_action(&line) {
                return Ok(action);
            }
            writeln!(self.output, "Please type 'hit' or 'stand'.")?;
        }
    }
}

/// Wraps another policy and narrates each of its decisions.
#[derive(Debug)]
pub struct NarratedPolicy<P, W> {
    inner: P,
    output: W,
}

impl<P: DecisionPolicy, W: Write> NarratedPolicy<P, W> {
    /// Creates a policy that delegates to `inner` and narrates on `output`.
    #[must_use]
    pub const fn new(inner: P, output: W) -> Self {
        Self { inner, output }
    }

    /// Consumes the policy and returns the wrapped policy and output.
    #[must_use]
    pub fn into_inner(self) -> (P, W) {
        (self.inner, self.output)
    }
}

impl<P: DecisionPolicy, W: Write> DecisionPolicy for NarratedPolicy<P, W> {
    fn decide(&mut self, player: &Participant, up_card: Card) -> Result<Action, PolicyError> {
        writeln!(self.output, "{}", player.describe())?;
        writeln!(
            self.output,
            "{}, your total is {}. AI is making a decision...",
            player.name(),
            player.total()
        )?;
        let action = self.inner.decide(player, up_card)?;
        writeln!(self.output, "AI chose to: {action}")?;
        Ok(action)
    }
}
