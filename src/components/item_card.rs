//! Item Card Component
//!
//! One recommended menu item: category pill, name, price, description and thumbnail.

use leptos::prelude::*;

use crate::display::CardDisplay;
use crate::models::RecommendationItem;
use crate::store::{use_recommendation_store, StateCell};

#[component]
pub fn ItemCard(item: RecommendationItem) -> impl IntoView {
    let store = use_recommendation_store();
    let card = CardDisplay::from_item(&item);

    let thumb_url = card.image_url.clone();
    let select_image = move |_| {
        let url = thumb_url.clone();
        store.with_state(|s| s.select_image(url));
    };
    let button_url = card.image_url.clone();
    let open_modal = move |_| {
        let url = button_url.clone();
        store.with_state(|s| s.open_modal(url));
    };

    view! {
        <div class="item-card">
            <img
                class="item-thumb"
                src=card.image_url.clone()
                alt=card.title.clone()
                loading="lazy"
                on:click=select_image
            />
            <div class="category-pill" style=format!("background-color: {}", card.color)>
                {card.label}
            </div>
            <h2 class="item-name">{card.title}</h2>
            <p class="item-price">
                {card.price_text}
                {card.old_price_text.map(|old| view! { <s class="item-old-price">{old}</s> })}
            </p>
            <p class="item-description">{card.description}</p>
            <button type="button" class="view-image-btn" on:click=open_modal>
                "View image"
            </button>
        </div>
    }
}
