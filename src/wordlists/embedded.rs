//! Embedded word lists
//!
//! Word lists compiled into the binary at build time from `data/`.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/dictionary_five.rs"));
include!(concat!(env!("OUT_DIR"), "/dictionary_four.rs"));
include!(concat!(env!("OUT_DIR"), "/classic.rs"));
include!(concat!(env!("OUT_DIR"), "/speed.rs"));
include!(concat!(env!("OUT_DIR"), "/hard.rs"));
include!(concat!(env!("OUT_DIR"), "/chain.rs"));
include!(concat!(env!("OUT_DIR"), "/backwards.rs"));
include!(concat!(env!("OUT_DIR"), "/double_pairs.rs"));
include!(concat!(env!("OUT_DIR"), "/crosswordle_puzzles.rs"));
