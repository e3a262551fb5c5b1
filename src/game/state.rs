//! Round state types.

/// Round state.
///
/// A round only ever moves forward through these states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Initial cards still have to be dealt.
    Dealing,
    /// Players take their turns in seat order.
    PlayersActing,
    /// Dealer plays out their hand.
    DealerActing,
    /// Round has ended and results can be computed.
    Resolved,
}
