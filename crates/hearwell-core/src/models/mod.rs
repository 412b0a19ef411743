pub mod aided;
pub mod customer;
pub mod document;
pub mod middle_ear;
pub mod preferences;
pub mod protocol;
pub mod pure_tone;
pub mod speech;
pub mod verification;
pub mod visit;
