//! Text analysis support for the thesaurus library.
//!
//! Currently this is synonym handling: parsing thesaurus files, looking up
//! equivalent terms and expanding query tokens with them.

pub mod synonym;
