pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod game;
    pub mod gateway;
    pub mod metadata;
    pub mod page;
}
pub mod view {
    pub mod components;
    pub mod error;
    pub mod game;
    pub mod image;
    pub mod index;
}

pub use controller::game::SiteSettings;
pub use controller::gateway::FetchGateway;
