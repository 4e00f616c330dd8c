use crate::app::components::icon::IconSvg;
use crate::app::global_state::GlobalState;
use greenhaven_state::content::Icon;
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let global_state = expect_context::<GlobalState>();
    let (brand, social_links, legal_links, copyright) = global_state.content.with_value(|c| {
        (
            c.brand.name.clone(),
            c.social_links.clone(),
            c.legal_links.clone(),
            c.copyright.clone(),
        )
    });

    let social = social_links
        .into_iter()
        .map(|link| {
            let label: &'static str = link.icon.into();
            view! {
                <a
                    href=link.href
                    aria-label=label
                    class="text-white/60 hover:text-green-400 transition-colors duration-300"
                >
                    <IconSvg icon=link.icon class="h-6 w-6"/>
                </a>
            }
        })
        .collect_view();

    let legal = legal_links
        .into_iter()
        .map(|link| {
            view! {
                <a href=link.href class="text-white/40 hover:text-green-400 transition-colors duration-300">
                    {link.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="bg-black/50 py-12 px-6 lg:px-12">
            <div class="max-w-7xl mx-auto">
                <div class="flex flex-col md:flex-row justify-between items-center mb-8">
                    <div class="flex items-center space-x-2 mb-4 md:mb-0">
                        <IconSvg icon=Icon::Leaf class="h-6 w-6 text-green-400"/>
                        <span class="text-xl font-light tracking-wider">{brand}</span>
                    </div>
                    <div class="flex space-x-6">{social}</div>
                </div>
                <div class="border-t border-white/10 pt-8 flex flex-col md:flex-row justify-between items-center">
                    <p class="text-white/40 text-sm mb-4 md:mb-0">{copyright}</p>
                    <div class="flex space-x-6 text-sm">{legal}</div>
                </div>
            </div>
        </footer>
    }
}
