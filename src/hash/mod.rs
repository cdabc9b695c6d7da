// Source-block hashing and matching.
//
//   - `rolling`: incrementally-updatable window fingerprint
//   - `table`: chained hash index over fixed-size source blocks
//   - `matching`: greedy bidirectional match search with a probe budget

pub mod matching;
pub mod rolling;
pub mod table;

pub use rolling::BLOCK_SIZE;
