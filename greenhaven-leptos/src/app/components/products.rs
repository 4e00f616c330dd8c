use crate::app::components::icon::IconSvg;
use crate::app::global_state::GlobalState;
use greenhaven_state::content::{Icon, Product};
use leptos::*;

#[component]
pub fn ProductCard(product: Product, action: String) -> impl IntoView {
    let Product {
        image,
        name,
        price,
        tag,
    } = product;
    let alt = name.clone();
    let card_id = name.clone();

    view! {
        <div
            data-product=card_id
            class="group bg-white/5 backdrop-blur-sm rounded-2xl overflow-hidden hover:bg-white/10 transition-all duration-300"
        >
            <div class="relative overflow-hidden">
                <img
                    src=image
                    alt=alt
                    loading="lazy"
                    class="w-full h-64 object-cover group-hover:scale-110 transition-transform duration-500"
                />
                <div class="absolute top-4 left-4 bg-green-500 text-white px-3 py-1 rounded-full text-sm">
                    {tag}
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-light tracking-wider mb-2">{name}</h3>
                <p class="text-white/60 mb-4">{price}</p>
                <button class="w-full group bg-white/5 text-white px-6 py-3 rounded-xl font-light tracking-wider hover:bg-green-500 transition-all duration-300 flex items-center justify-center space-x-2">
                    <span>{action}</span>
                    <IconSvg icon=Icon::ChevronRight class="h-4 w-4 group-hover:translate-x-1 transition-transform duration-300"/>
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn Products() -> impl IntoView {
    let global_state = expect_context::<GlobalState>();
    let (heading, products, action) = global_state.content.with_value(|c| {
        (
            c.products_heading.clone(),
            c.products.clone(),
            c.product_action.clone(),
        )
    });

    let cards = products
        .into_iter()
        .map(|product| view! { <ProductCard product=product action=action.clone()/> })
        .collect_view();

    view! {
        <section id=heading.anchor class="py-32 px-6 lg:px-12 bg-black/50">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-4xl font-light tracking-wider text-center mb-4">{heading.title}</h2>
                {heading.subtitle.map(|subtitle| view! {
                    <p class="text-white/60 text-center mb-16 max-w-2xl mx-auto">{subtitle}</p>
                })}
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">{cards}</div>
            </div>
        </section>
    }
}
