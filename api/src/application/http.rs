pub mod groq;
pub mod health;
pub mod server;
pub mod twelvelabs;
