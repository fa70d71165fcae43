//! holdem-rs: Texas Hold'em showdown evaluation library
//!
//! Goals:
//! - Deterministic ranking of the best five-card hand out of hole + community cards
//! - Exact two-player comparison with the ten-category ladder and full tie-break rules
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: settle a showdown
//! ```
//! use holdem_rs::cards::parse_cards;
//! use holdem_rs::evaluator::{compare_players, Category};
//!
//! let p1 = parse_cards("As Ah").unwrap();
//! let p2 = parse_cards("Ks Kh").unwrap();
//! let community = parse_cards("Ad 7c 7d 2h 3s").unwrap();
//!
//! let outcome = compare_players(&p1, &p2, &community).unwrap();
//! assert_eq!(outcome.result, -1); // player 1 wins
//! assert_eq!(outcome.player1.category, Category::FullHouse);
//! ```
//!
//! All evaluation is pure and synchronous; callers may fan out independent
//! showdowns across threads without coordination.

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
