use desk_allocation::{
    AllocationRegistry, Allocator, ExclusionPolicy, RandomSource, RngSource,
};
use desk_cli::Cli;
use desk_core::current_unix_timestamp_ms;
use desk_roster::Roster;

/// Everything a command handler reads or mutates. Owned by the active runtime
/// loop and lent to one handler at a time.
pub(crate) struct AppState {
    pub(crate) roster: Roster,
    pub(crate) registry: AllocationRegistry,
    pub(crate) allocator: Allocator,
    pub(crate) random: Box<dyn RandomSource>,
    pub(crate) clock: fn() -> u64,
}

impl AppState {
    pub(crate) fn new(
        roster: Roster,
        policy: ExclusionPolicy,
        random: Box<dyn RandomSource>,
    ) -> Self {
        let registry = AllocationRegistry::for_roster(&roster);
        Self {
            roster,
            registry,
            allocator: Allocator::new(policy),
            random,
            clock: current_unix_timestamp_ms,
        }
    }

    pub(crate) fn from_cli(cli: &Cli, roster: Roster) -> Self {
        let policy = if cli.skip_busy_startups {
            ExclusionPolicy::SkipBusy
        } else {
            ExclusionPolicy::PerMentor
        };
        let random: Box<dyn RandomSource> = match cli.seed {
            Some(seed) => Box::new(RngSource::seeded(seed)),
            None => Box::new(RngSource::from_entropy()),
        };
        Self::new(roster, policy, random)
    }

    pub(crate) fn now_unix_ms(&self) -> u64 {
        (self.clock)()
    }
}
