//! Marketing offers targeted at customer segments

mod repository;
mod service;

pub use repository::{InMemoryOfferRepository, OfferFilter, OfferRepository, RepoError, RepoResult};
pub use service::OfferService;
