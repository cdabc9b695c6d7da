// Delta creation and replay.
//
//   - `encoder::create`: greedy scan of the target, alternating literal
//     runs and source copies
//   - `decoder::apply`: bounds-checked replay of a command stream

pub mod decoder;
pub mod encoder;
