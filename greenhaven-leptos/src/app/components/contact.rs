use crate::app::components::icon::IconSvg;
use crate::app::global_state::GlobalState;
use leptos::*;

#[component]
pub fn Contact() -> impl IntoView {
    let global_state = expect_context::<GlobalState>();
    let (heading, contacts) =
        global_state.content.with_value(|c| (c.contact_heading.clone(), c.contacts.clone()));

    let entries = contacts
        .into_iter()
        .map(|contact| {
            view! {
                <div class="group bg-white/5 backdrop-blur-sm p-8 rounded-2xl hover:bg-white/10 transition-all duration-300 flex items-center justify-center space-x-4">
                    <IconSvg icon=contact.icon class="h-6 w-6 text-green-400"/>
                    <span class="text-white/80">{contact.text}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=heading.anchor class="py-32 px-6 lg:px-12 relative diagonal-lines">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-4xl font-light tracking-wider text-center mb-16">{heading.title}</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">{entries}</div>
            </div>
        </section>
    }
}
