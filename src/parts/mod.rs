mod construct;
mod filler;
mod layout;
mod scaffold;

pub use construct::{
    default_tolerance, fixed_site_hits, Part, PartBuilder, PartParams, DEFAULT_FILLER_ATTEMPTS,
    DEFAULT_PART_ATTEMPTS, DEFAULT_TOLERANCE,
};
pub use filler::{random_sequence, RandomFiller};
pub use layout::{AdapterLayout, Slot, GOLDEN_GATE};
pub use scaffold::{build_scaffold, strip_adapters, AssemblyScaffold, Segment};
