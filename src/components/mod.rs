//! UI Components
//!
//! Leptos components of the recommendation view.

mod prompt_form;
mod status_banner;
mod recommendation_summary;
mod item_card;
mod item_grid;
mod image_modal;
mod recommendation_view;

pub use prompt_form::PromptForm;
pub use status_banner::StatusBanner;
pub use recommendation_summary::RecommendationSummary;
pub use item_card::ItemCard;
pub use item_grid::ItemGrid;
pub use image_modal::ImageModal;
pub use recommendation_view::RecommendationView;
