mod token_dto;

pub use token_dto::*;
