pub mod audit;
pub mod processes;
pub mod tables;
pub mod users;
