pub mod assembler;
pub mod export;
