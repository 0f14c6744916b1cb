//! Business logic services

pub mod catalog;
pub mod fees;
pub mod loans;
pub mod patrons;

use std::sync::Arc;

use crate::{config::CirculationConfig, repository::LibraryStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub loans: loans::LoansService,
    pub fees: fees::FeesService,
    pub patrons: patrons::PatronsService,
}

impl Services {
    /// Create all services over the given store
    pub fn new(store: Arc<dyn LibraryStore>, config: CirculationConfig) -> Self {
        Self {
            catalog: catalog::CatalogService::new(store.clone()),
            loans: loans::LoansService::new(store.clone(), config),
            fees: fees::FeesService::new(store.clone()),
            patrons: patrons::PatronsService::new(store),
        }
    }
}
