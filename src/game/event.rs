/// What happened during a simulation tick. The simulation only ever
/// records these; playing sounds, updating the score display and the
/// screen transition to game over are carried out by the caller.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Event {
    /// The head landed on the food this tick
    Ate,
    /// The score changed, carries the new value
    ScoreChanged(u32),
    /// The snake hit a wall or itself, emitted at most once per session
    Died,
}
