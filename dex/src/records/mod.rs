mod species;
mod team;
mod typing;

pub use species::{Ability, BasePokemon, Item, Move, Stats};
pub use team::{Nature, Pokemon, SelectedMove, Team};
pub use typing::{Typing, TypingRef};
