use crate::app::components::contact::Contact;
use crate::app::components::features::Features;
use crate::app::components::footer::Footer;
use crate::app::components::hero::Hero;
use crate::app::components::navbar::Navbar;
use crate::app::components::products::Products;
use crate::app::hooks::use_scroll_monitor::use_scroll_monitor;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    use_scroll_monitor();

    view! {
        <div class="min-h-screen bg-[#0a0a0a] text-white">
            <Navbar/>
            <Hero/>
            <Features/>
            <Products/>
            <Contact/>
            <Footer/>
        </div>
    }
}
