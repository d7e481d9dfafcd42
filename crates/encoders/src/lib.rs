mod openai;
pub use openai::OpenAiEncoder;

mod ollama;
pub use ollama::OllamaEncoder;

mod voyageai;
pub use voyageai::VoyageAiEncoder;
