pub mod conversation_route;
