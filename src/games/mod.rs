//! Game variants implementing `Rule`.

pub mod backgammon;
