use crate::app::components::icon::IconSvg;
use crate::app::global_state::GlobalState;
use greenhaven_state::content::Icon;
use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    let global_state = expect_context::<GlobalState>();
    let hero = global_state.content.with_value(|c| c.hero.clone());

    let last = hero.headline.len().saturating_sub(1);
    let headline = hero
        .headline
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            // first and last lines carry the glow
            let (class, glow) = match i {
                0 => ("relative inline-block", true),
                i if i == last => ("block text-green-400 relative inline-block", true),
                _ => ("block", false),
            };
            view! {
                <span class=class>
                    {line}
                    {glow.then(|| view! {
                        <div class="absolute -inset-1 bg-gradient-to-r from-green-500/20 to-transparent blur-lg"></div>
                    })}
                </span>
            }
        })
        .collect_view();

    view! {
        <header id=hero.anchor class="relative min-h-screen flex items-center diagonal-lines overflow-hidden">
            <div class="absolute inset-0 hero-gradient"></div>

            <div class="absolute inset-0 pointer-events-none">
                <div class="absolute top-1/4 left-1/4 w-64 h-64 bg-green-500/10 rounded-full blur-3xl floating"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-green-500/5 rounded-full blur-3xl floating-delayed"></div>
            </div>

            <div class="relative max-w-7xl mx-auto px-6 lg:px-12 py-32">
                <h1 class="text-6xl md:text-8xl font-light tracking-tight text-white mb-8 max-w-4xl leading-[1.1]">
                    {headline}
                </h1>
                <p class="text-xl text-white/70 mb-12 max-w-2xl leading-relaxed">{hero.tagline}</p>
                <div class="flex flex-wrap gap-6">
                    <button class="group bg-green-500 text-white px-8 py-4 rounded-full font-light tracking-wider hover:bg-green-600 transition-all duration-300 flex items-center space-x-2 glow">
                        <span>{hero.primary_action}</span>
                        <IconSvg icon=Icon::ArrowRight class="h-5 w-5 group-hover:translate-x-1 transition-transform duration-300"/>
                    </button>
                    <button class="group border border-white/20 text-white px-8 py-4 rounded-full font-light tracking-wider hover:bg-white/10 transition-all duration-300 backdrop-blur-sm">
                        {hero.secondary_action}
                    </button>
                </div>
            </div>

            <div class="absolute bottom-0 left-0 right-0 h-32 bg-gradient-to-t from-[#0a0a0a] to-transparent"></div>
        </header>
    }
}
