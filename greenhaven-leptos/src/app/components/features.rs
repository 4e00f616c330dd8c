use crate::app::components::icon::IconSvg;
use crate::app::global_state::GlobalState;
use leptos::*;

#[component]
pub fn Features() -> impl IntoView {
    let global_state = expect_context::<GlobalState>();
    let (anchor, features) =
        global_state.content.with_value(|c| (c.features_anchor.clone(), c.features.clone()));

    let cards = features
        .into_iter()
        .map(|feature| {
            view! {
                <div class="group bg-white/5 backdrop-blur-sm p-8 rounded-2xl hover:bg-white/10 transition-all duration-300">
                    <div class="bg-green-500/10 w-16 h-16 rounded-xl flex items-center justify-center mb-6 group-hover:scale-110 transition-transform duration-300">
                        <IconSvg icon=feature.icon class="h-8 w-8 text-green-400"/>
                    </div>
                    <h3 class="text-xl font-light tracking-wider mb-4">{feature.title}</h3>
                    <p class="text-white/60 leading-relaxed">{feature.description}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=anchor class="py-32 px-6 lg:px-12 relative">
            <div class="max-w-7xl mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-12">{cards}</div>
            </div>
        </section>
    }
}
