pub mod chatbot;
pub mod groq;
