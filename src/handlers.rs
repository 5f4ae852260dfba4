pub mod export;
pub mod forecast;
pub mod health;
