pub mod conversation;
pub mod conversation_llm;
pub mod health_route;
