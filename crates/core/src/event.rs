/// Messages that drive the overlay.
///
/// Sources:
/// - Frame timer subscription → `Tick`
/// - Pointer press on the overlay → `CyclePanel`
/// - Config watcher task → `ConfigReloaded`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// One host cycle elapsed; the aggregator samples and redraws.
    Tick,
    /// Advance to the next panel, wrapping after the last one.
    CyclePanel,
    /// Config file changed on disk — rebuild the panels.
    ConfigReloaded,
}
