pub mod assembler;
pub mod errors;
pub mod model;
pub mod resolver;
pub mod serializer;
pub mod upstream;

pub use assembler::{ConversationAssembler, DEFAULT_CONCURRENCY};
pub use errors::{BuilderError, BuilderResult, UpstreamResource};
pub use model::{Answer, Conversation, Question, QuestionType};
pub use serializer::serialize;
pub use upstream::{UpstreamClient, UpstreamConfig};
