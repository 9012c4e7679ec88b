pub mod chat;
pub mod simulation;
