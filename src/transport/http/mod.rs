pub mod router;
pub mod types;
pub mod handlers {
    pub mod cities;
    pub mod common;
    pub mod constituencies;
    pub mod countries;
    pub mod districts;
    pub mod health;
    pub mod regions;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
