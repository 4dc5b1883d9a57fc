/// Samples a run deposits before it stops
pub const N_ITER: u64 = 1_000_000;

/// Draws summed per recorded sample
pub const DEFAULT_GROUP_SIZE: usize = 1;

pub const DEFAULT_DEPOSIT_ALL: bool = true;
