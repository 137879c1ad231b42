pub mod export;
pub mod office;
pub mod simulation;
