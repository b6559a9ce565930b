pub mod appliances;
pub mod clean;
pub mod collect;
pub mod config;
