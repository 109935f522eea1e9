pub mod order;
pub mod parse;
pub mod profession;
pub mod race;

pub use order::PlayerOrder;
pub use parse::UnknownVariant;
pub use profession::Profession;
pub use race::Race;
