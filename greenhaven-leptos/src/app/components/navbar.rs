use crate::app::components::icon::IconSvg;
use crate::app::global_state::GlobalState;
use greenhaven_state::content::{Icon, NavLink};
use greenhaven_state::style::{menu_button_icon, NavStyle, PanelStyle};
use leptos::*;
use web_sys::MouseEvent;

#[component]
pub fn Navbar() -> impl IntoView {
    let global_state = expect_context::<GlobalState>();
    let compact_nav = global_state.compact_nav;
    let brand = global_state.content.with_value(|c| c.brand.name.clone());
    let links = global_state.content.with_value(|c| c.nav_links());

    let on_menu_click = move |_: MouseEvent| {
        global_state.toggle_menu();
    };
    let panel = move || PanelStyle::from_open(global_state.menu_open());

    let desktop_links = nav_link_views(
        global_state,
        links.clone(),
        "text-white/80 hover:text-green-400 transition-colors duration-300 text-sm tracking-wider",
    );
    let mobile_links = nav_link_views(
        global_state,
        links,
        "block text-white/80 hover:text-green-400 transition-colors duration-300",
    );

    view! {
        <nav id="nav" class=move || NavStyle::from_compact(compact_nav.get()).class()>
            <div class="max-w-7xl mx-auto px-6 lg:px-12">
                <div class="flex items-center justify-between h-24">
                    <div class="flex items-center space-x-3">
                        <IconSvg icon=Icon::Leaf class="h-8 w-8 text-green-400"/>
                        <span class="text-2xl font-light tracking-wider text-white">{brand}</span>
                    </div>

                    <div data-menu="desktop" class="hidden md:flex items-center space-x-12">
                        {desktop_links}
                    </div>

                    <button
                        class="md:hidden"
                        aria-label="Toggle navigation"
                        aria-expanded=move || global_state.menu_open().to_string()
                        on:click=on_menu_click
                    >
                        {move || {
                            view! { <IconSvg icon=menu_button_icon(global_state.menu_open()) class="h-6 w-6 text-white"/> }
                        }}
                    </button>
                </div>
            </div>

            <div
                data-menu="mobile"
                class=move || panel().class()
                aria-hidden=move || panel().aria_hidden()
            >
                <div class="px-6 py-4 space-y-4">{mobile_links}</div>
            </div>
        </nav>
    }
}

/// Every navigation link collapses the mobile panel, whichever menu it sits in.
pub fn on_nav_link_selected(global_state: GlobalState) {
    global_state.close_menu();
}

fn nav_link_views(global_state: GlobalState, links: Vec<NavLink>, class: &'static str) -> View {
    links
        .into_iter()
        .map(|link| {
            view! {
                <a href=link.href class=class on:click=move |_| on_nav_link_selected(global_state)>
                    {link.label}
                </a>
            }
        })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::on_nav_link_selected;
    use crate::app::global_state::GlobalState;
    use greenhaven_state::content::SiteContent;
    use leptos::{create_runtime, SignalGetUntracked};

    #[test]
    fn selecting_a_link_closes_an_open_menu() {
        let runtime = create_runtime();
        let state = GlobalState::new(SiteContent::embedded().unwrap());

        state.toggle_menu();
        assert!(state.menu.get_untracked().is_open());
        on_nav_link_selected(state);
        assert!(!state.menu.get_untracked().is_open());

        on_nav_link_selected(state);
        assert!(!state.menu.get_untracked().is_open());

        runtime.dispose();
    }
}
