pub mod errors;
pub mod db;
pub mod ong;
pub mod user;
pub mod activity;

#[cfg(test)]
mod tests;
