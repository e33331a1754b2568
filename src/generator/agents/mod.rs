pub mod genai_proposer;
pub mod researcher;
pub mod resource_collector;
pub mod use_case_proposer;

pub use genai_proposer::GenAiProposer;
pub use researcher::Researcher;
pub use resource_collector::ResourceCollector;
pub use use_case_proposer::UseCaseProposer;
