// ============================================================================
// Domain Module
// Digit blocks, English name tables and writer configuration
// ============================================================================

pub mod block;
pub mod config;
pub mod names;

pub use block::{block_partition, partition, write_block, Block, Blocks, WrittenBlock};
pub use config::{NegativeZero, NumeralConfig};
