pub mod cache;
pub mod extractor;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod report;
pub mod result;
