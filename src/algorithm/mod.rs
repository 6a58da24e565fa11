/// Bitset of palette ids used for restrictions and rules
pub mod colorset;
/// Generation driver and its configuration
pub mod executor;
/// Sparse canvas and the collapse step
pub mod propagation;
/// FIFO worklist with prefix compaction
pub mod queue;
/// Seeded random selection and generation policies
pub mod selection;
