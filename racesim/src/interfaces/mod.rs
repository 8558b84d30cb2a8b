pub mod display_interface;
pub mod player_input;
