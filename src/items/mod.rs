//! Physical items placed into a game.
//!
//! An `Item` is a named object with a shape descriptor ("круглий",
//! "плаский", ...). Items are immutable once built; a `Game` owns the
//! items added to it, keyed by title.

mod item;

pub use item::Item;
