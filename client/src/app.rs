//! Root application component and the page-switching shell.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::header::Header;
use crate::pages::{
    about::AboutPage, browse::BrowsePage, home::HomePage, login::LoginPage, pricing::PricingPage,
    register::RegisterPage,
};
use crate::state::nav::{NavState, Page};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Page switching is in-memory state, not URL routing: the root and a
/// catch-all route both render the same shell, which always starts on the
/// home page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/filmcast.css"/>
        <Title text="FilmCast Pro"/>
        <Meta name="description" content="The professional network for the film industry."/>

        <Router>
            <Routes fallback=|| view! { <PageShell/> }>
                <Route path=path!("/") view=PageShell/>
                <Route path=path!("/*any") view=PageShell/>
            </Routes>
        </Router>
    }
}

/// Holds the current page and renders it beneath the header.
#[component]
pub fn PageShell() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    provide_context(nav);

    let on_navigate = navigator(nav);

    view! {
        <div class="app">
            <Header on_navigate=on_navigate/>
            <main class="app__main">{move || render_page(nav.get().current, on_navigate)}</main>
        </div>
    }
}

/// Build the navigation callback handed to the header and every page.
///
/// Navigating to the page already shown leaves the state untouched, so no
/// re-render or scroll reset happens.
pub fn navigator(nav: RwSignal<NavState>) -> Callback<Page> {
    Callback::new(move |page: Page| {
        if nav.get_untracked().is_current(page) {
            return;
        }
        #[cfg(feature = "hydrate")]
        log::debug!("navigate: {} -> {page}", nav.get_untracked().current);
        nav.update(|state| {
            state.navigate(page);
        });
        crate::util::scroll::to_top();
    })
}

/// Map a page to its renderer.
pub fn render_page(page: Page, on_navigate: Callback<Page>) -> AnyView {
    match page {
        Page::Home => view! { <HomePage on_navigate=on_navigate/> }.into_any(),
        Page::Pricing => view! { <PricingPage on_navigate=on_navigate/> }.into_any(),
        Page::Register => view! { <RegisterPage on_navigate=on_navigate/> }.into_any(),
        Page::Login => view! { <LoginPage on_navigate=on_navigate/> }.into_any(),
        Page::Browse => view! { <BrowsePage on_navigate=on_navigate/> }.into_any(),
        Page::About => view! { <AboutPage on_navigate=on_navigate/> }.into_any(),
    }
}
