pub mod playlist;
pub mod publisher;
pub mod summarizer;
pub mod transcript;
