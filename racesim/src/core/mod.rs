pub mod car;
pub mod error;
pub mod handle_race;
pub mod push_level;
pub mod race;
pub mod state_handler;
pub mod team;
pub mod tireset;
pub mod track;
