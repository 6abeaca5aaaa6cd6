//! Domain entities

pub mod token;
pub mod user;

#[cfg(test)]
mod tests;
