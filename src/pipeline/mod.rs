pub mod adjust;
pub mod derive;
pub mod slots;
