pub mod palette_cycle;
pub mod two_tone;
