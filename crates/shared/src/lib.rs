mod error;
pub use error::SimilarityError;

mod utterance;
pub use utterance::Utterance;

mod encoder;
pub use encoder::Encoder;

mod store;
pub use store::Store;

mod chatter;
pub use chatter::{ChatMessage, ChatRole, Chatter};

pub mod similarity;
