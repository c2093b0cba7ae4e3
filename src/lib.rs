//! docblockr: synthesize documentation comments from declaration text.
//!
//! Given the source text that follows a comment opener, the engine finds the
//! nearest declaration, classifies it with a per-language recognizer and
//! renders a docblock in that language's comment dialect. Existing docblocks
//! can be parsed back into rows and re-flowed to a width.
//!
//! ```
//! use docblockr::config::Config;
//! use docblockr::engine::{generate, Generated};
//!
//! let config = Config::default();
//! let out = generate("javascript", "function add(a, b) {}", &config, false);
//! let Some(Generated::Block(lines)) = out else { panic!("no block") };
//! assert_eq!(lines[0], "/**");
//! assert!(lines.iter().any(|l| l.contains("@param {type} a")));
//! ```

pub mod columns;
pub mod config;
pub mod engine;
pub mod header;
pub mod infer;
pub mod model;
pub mod parser;
pub mod profile;
pub mod render;
pub mod reparse;
pub mod scan;
pub mod snippet;
pub mod synth;
pub mod tags;
pub mod tokenize;
pub mod wrap;
