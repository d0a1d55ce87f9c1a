//! Stateless HTTP proxy that forwards a chat message to the Groq
//! chat-completions API and relays a normalized `{ reply }` envelope.

pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;
