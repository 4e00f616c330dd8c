use greenhaven_state::content::Icon;
use leptos::*;

/// Stroke paths on a 24x24 grid, outline style.
pub fn icon_paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Leaf => &[
            "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z",
            "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12",
        ],
        Icon::ShoppingBasket => &[
            "m15 11-1 9",
            "m19 11-4-7",
            "M2 11h20",
            "m3.5 11 1.6 7.4a2 2 0 0 0 2 1.6h9.8a2 2 0 0 0 2-1.6l1.7-7.4",
            "M4.5 15.5h15",
            "m5 11 4-7",
            "m9 11 1 9",
        ],
        Icon::Shovel => &[
            "M2 22v-5l5-5 5 5-5 5z",
            "M9.5 14.5 16 8",
            "m17 2 5 5-.5.5a3.53 3.53 0 0 1-5 0a3.53 3.53 0 0 1 0-5L17 2",
        ],
        Icon::Phone => &[
            "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
        ],
        Icon::Mail => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
        ],
        Icon::MapPin => &[
            "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
            "M12 7a3 3 0 1 0 0 6 3 3 0 1 0 0-6z",
        ],
        Icon::ChevronRight => &["m9 18 6-6-6-6"],
        Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
        Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
        Icon::Instagram => &[
            "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
            "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
            "M17.5 6.5h.01",
        ],
        Icon::Facebook => &[
            "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z",
        ],
        Icon::Twitter => &[
            "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
        ],
    }
}

#[component]
pub fn IconSvg(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    let name: &'static str = icon.into();
    view! {
        <svg
            class=class
            data-icon=name
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon_paths(icon).iter().map(|d| view! { <path d=*d/> }).collect_view()}
        </svg>
    }
}
