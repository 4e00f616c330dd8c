use global_state::GlobalState;
use greenhaven_state::content::{ContentError, SiteContent};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use pages::home::HomePage;
use tracing::{debug, error, warn};

pub mod components;
pub mod global_state;
pub mod hooks;
pub mod pages;

/// Content provided through context takes precedence over the embedded copy,
/// but has to pass the same validation.
pub fn resolve_content() -> Result<SiteContent, ContentError> {
    match use_context::<SiteContent>() {
        Some(content) => {
            debug!("using site content from context");
            content.validate()?;
            Ok(content)
        }
        None => SiteContent::embedded(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = match resolve_content() {
        Ok(content) => content,
        Err(err) => {
            error!("failed to load site content: {}", err);
            return view! { <ContentUnavailable/> }.into_view();
        }
    };

    for anchor in content.unresolved_anchors() {
        warn!("navigation anchor #{} has no matching section", anchor);
    }

    let title = content.brand.legal_name.clone();
    let description = content.hero.tagline.clone();
    provide_context(GlobalState::new(content));

    view! {
        <Stylesheet id="leptos" href="/pkg/greenhaven.css"/>
        <Title text=title/>
        <Meta name="description" content=description/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>
        <Router>
            <Routes>
                <Route path="" view=HomePage/>
            </Routes>
        </Router>
    }
    .into_view()
}

#[component]
fn ContentUnavailable() -> impl IntoView {
    view! {
        <main class="min-h-screen bg-[#0a0a0a] text-white/70 flex items-center justify-center">
            <p data-error="content">"This page is temporarily unavailable."</p>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_content;
    use greenhaven_state::content::{ContentError, SiteContent};
    use leptos::{create_runtime, provide_context};

    #[test]
    fn falls_back_to_embedded_content() {
        let runtime = create_runtime();

        let content = resolve_content().unwrap();
        assert_eq!(content, SiteContent::embedded().unwrap());

        runtime.dispose();
    }

    #[test]
    fn context_content_is_validated() {
        let runtime = create_runtime();

        let mut content = SiteContent::embedded().unwrap();
        content.navigation.clear();
        provide_context(content);

        assert!(matches!(
            resolve_content(),
            Err(ContentError::EmptyNavigation)
        ));

        runtime.dispose();
    }

    #[test]
    fn context_content_overrides_embedded() {
        let runtime = create_runtime();

        let mut content = SiteContent::embedded().unwrap();
        content.brand.name = String::from("Blue Haven");
        provide_context(content);

        assert_eq!(resolve_content().unwrap().brand.name, "Blue Haven");

        runtime.dispose();
    }
}
