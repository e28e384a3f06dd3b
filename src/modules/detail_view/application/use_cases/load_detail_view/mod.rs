mod handler;
mod outcome;

pub use handler::LoadDetailViewHandler;
pub use outcome::FetchOutcome;
