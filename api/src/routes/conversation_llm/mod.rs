pub mod conversation_llm_route;
