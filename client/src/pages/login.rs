//! Sign-in form.
//!
//! Credentials are not checked anywhere; submitting continues to the talent
//! directory.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::state::nav::Page;

/// Page a submitted sign-in form leads to.
pub const AFTER_SUBMIT: Page = Page::Browse;

#[component]
pub fn LoginPage(on_navigate: Callback<Page>) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_navigate.run(AFTER_SUBMIT);
    };

    view! {
        <div class="page page--auth">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h1 class="auth-card__title">"Welcome Back"</h1>
                    <p class="auth-card__subtitle">"Sign in to your FilmCast Pro account"</p>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <span class="field__control">
                            <Icon kind=IconKind::Mail modifiers="field__icon"/>
                            <input class="field__input" type="email" name="email" placeholder="you@example.com" autocomplete="email"/>
                        </span>
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <span class="field__control">
                            <Icon kind=IconKind::Lock modifiers="field__icon"/>
                            <input class="field__input" type="password" name="password" placeholder="Your password" autocomplete="current-password"/>
                        </span>
                    </label>
                    <div class="auth-form__row">
                        <label class="checkbox">
                            <input type="checkbox" name="remember"/>
                            <span>"Remember me"</span>
                        </label>
                        <a class="link-button" href="#login">"Forgot password?"</a>
                    </div>
                    <button class="btn btn--primary btn--block" type="submit">"Sign In"</button>
                </form>

                <p class="auth-card__footer">
                    "Don't have an account? "
                    <button class="link-button" on:click=move |_| on_navigate.run(Page::Register)>"Sign up"</button>
                </p>
            </div>
        </div>
    }
}
