//! Embedded corpus
//!
//! The raw word list compiled into the binary at build time. Lines are
//! unfiltered; building the index drops the ones that are not words.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
