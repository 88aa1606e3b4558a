// Result assembly: presentation metadata on top of a computed match.
// No scoring happens here; nothing in this module changes score or selection.

pub mod handlers;
pub mod headline;
pub mod resume;
pub mod skills;
pub mod strategy;
pub mod warnings;
