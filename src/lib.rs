//       _
// __  _| | ___ __   __ _ ___ _____      ____| |
// \ \/ / |/ / '_ \ / _` / __/ __\ \ /\ / / _` |
//  >  <| ' <| |_) | (_| \__ \__ \\ V  V / (_| |
// /_/\_\_|\_\ .__/ \__,_|___/___/ \_/\_/ \__,_|
//           |_|
//
// License : Apache-2.0
//
// XKCD-style memorable password generator.
// Based on https://xkpasswd.net/

pub mod config;
pub mod entropy;
pub mod passgen;

mod error;

pub use error::Error;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

// Compiled-in default dictionary, generated by build.rs from data/wordlist.txt
include!(concat!(env!("OUT_DIR"), "/word_data.rs"));
