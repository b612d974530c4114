// Models module for data structures
pub mod ecosystem;
pub mod translation;
