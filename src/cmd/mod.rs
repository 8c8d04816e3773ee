pub mod inspect;
pub mod manage;
pub mod track;
