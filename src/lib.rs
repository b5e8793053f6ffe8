pub mod derive;
pub mod entropy;
pub mod error;
pub mod lexicon;
pub mod mnemonic;
pub mod schedule;
pub mod synth;
pub mod wordlist;

pub use derive::{Derivation, Mode, derive};
pub use error::{Error, Result};
pub use schedule::{Interval, PeriodSlug, generate, parse_anchor};
pub use wordlist::Wordlist;
