//! Views module - all page components

mod card;

mod grid;
pub use grid::Grid;

mod navbar;
pub use navbar::Navbar;

mod scene;
pub use scene::Scene;

mod settings;
pub use settings::Settings;

mod zoom_overlay;
