//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the page shell above every page. Reads the current page from
//! the `NavState` context to highlight the active link and routes every click
//! through the shell's navigation callback.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::state::nav::{NavState, Page, nav_items};

#[component]
pub fn Header(on_navigate: Callback<Page>) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let menu_open = RwSignal::new(false);

    // Any navigation from the header also collapses the mobile menu.
    let go = move |page: Page| {
        menu_open.set(false);
        on_navigate.run(page);
    };

    let links = move || {
        nav_items()
            .into_iter()
            .map(move |page| {
                view! {
                    <a
                        class="site-header__link"
                        class:site-header__link--active=move || nav.get().is_current(page)
                        href={format!("#{}", page.id())}
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            go(page);
                        }
                    >
                        {page.label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <button class="site-header__brand" on:click=move |_| go(Page::Home)>
                    <Icon kind=IconKind::Film modifiers="site-header__logo"/>
                    <span>"FilmCast "</span>
                    <span class="text-accent">"Pro"</span>
                </button>

                <nav class="site-header__nav" aria-label="Main">{links}</nav>

                <div class="site-header__actions">
                    <button
                        class="btn btn--ghost"
                        class:btn--active=move || nav.get().is_current(Page::Login)
                        on:click=move |_| go(Page::Login)
                    >
                        {Page::Login.label()}
                    </button>
                    <button class="btn btn--primary" on:click=move |_| go(Page::Register)>
                        {Page::Register.label()}
                    </button>
                </div>

                <button
                    class="site-header__menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <Show
                        when=move || menu_open.get()
                        fallback=|| view! { <Icon kind=IconKind::Menu/> }
                    >
                        <Icon kind=IconKind::X/>
                    </Show>
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="site-header__mobile" aria-label="Mobile">
                    {links}
                    <button class="btn btn--ghost btn--block" on:click=move |_| go(Page::Login)>
                        {Page::Login.label()}
                    </button>
                    <button class="btn btn--primary btn--block" on:click=move |_| go(Page::Register)>
                        {Page::Register.label()}
                    </button>
                </nav>
            </Show>
        </header>
    }
}
