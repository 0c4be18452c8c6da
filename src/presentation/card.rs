#[cfg(target_arch = "wasm32")]
use leptos::leptos_dom::Mountable;
use leptos::*;

use crate::domain::catalog::ItemCard;
use crate::domain::errors::CatalogError;

/// 🃏 One catalog card; the brand line is left out when the item has none.
#[component]
pub fn ItemCardView(card: ItemCard) -> impl IntoView {
    let ItemCard {
        id,
        product,
        price,
        brand,
    } = card;

    view! {
        <div class="card">
            <div class="card text-center">
                <div class="card-body">
                    <h3 class="card-title">{product}</h3>
                    <ul class="list-group list-group-flush">
                        <li class="list-group-item">
                            <span class="span__brand">"Price: "</span>
                            {price}
                        </li>
                        {brand.map(|brand| view! {
                            <li class="list-group-item">
                                <span class="span__brand">"Brand: "</span>
                                {brand}
                            </li>
                        })}
                    </ul>
                </div>
                <div class="card-footer">
                    <p class="card-text">
                        <span class="span__brand">"ID: "</span>
                        {id}
                    </p>
                </div>
            </div>
        </div>
    }
}

/// Appends the card for `card` to `container`.
///
/// The `View` is dropped once its node is attached, so clearing the container releases the card.
#[cfg(target_arch = "wasm32")]
pub fn mount_card(container: &web_sys::HtmlElement, card: ItemCard) -> Result<(), CatalogError> {
    let view = view! { <ItemCardView card=card/> }.into_view();
    let node = view.get_mountable_node();
    container.append_child(&node).map_err(|e| {
        CatalogError::Browser(format!("Failed to append card: {:?}", e))
    })?;
    Ok(())
}
