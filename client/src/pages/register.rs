//! Account sign-up form.
//!
//! There is no account backend: the form only collects input, and submitting
//! it moves the visitor on to the talent directory.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::data::home::ROLES;
use crate::state::nav::Page;

/// Page a submitted sign-up form leads to.
pub const AFTER_SUBMIT: Page = Page::Browse;

#[component]
pub fn RegisterPage(on_navigate: Callback<Page>) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_navigate.run(AFTER_SUBMIT);
    };

    view! {
        <div class="page page--auth">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h1 class="auth-card__title">"Create Your Account"</h1>
                    <p class="auth-card__subtitle">"Join the film industry's professional network"</p>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Full Name"</span>
                        <span class="field__control">
                            <Icon kind=IconKind::User modifiers="field__icon"/>
                            <input class="field__input" type="text" name="name" placeholder="Jane Doe" autocomplete="name"/>
                        </span>
                    </label>
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
                            <input class="field__input" type="password" name="password" placeholder="Create a password" autocomplete="new-password"/>
                        </span>
                    </label>
                    <label class="field">
                        <span class="field__label">"Primary Role"</span>
                        <span class="field__control">
                            <Icon kind=IconKind::Briefcase modifiers="field__icon"/>
                            <select class="field__input" name="role">
                                <option value="" selected=true>"Select your role"</option>
                                {ROLES.iter().map(|role| view! { <option value={*role}>{*role}</option> }).collect_view()}
                            </select>
                        </span>
                    </label>
                    <label class="checkbox">
                        <input type="checkbox" name="terms"/>
                        <span>"I agree to the Terms of Service and Privacy Policy"</span>
                    </label>
                    <button class="btn btn--primary btn--block" type="submit">"Create Account"</button>
                </form>

                <p class="auth-card__footer">
                    "Already have an account? "
                    <button class="link-button" on:click=move |_| on_navigate.run(Page::Login)>"Sign in"</button>
                </p>
                <p class="auth-card__footer">
                    "Not sure which plan fits? "
                    <button class="link-button" on:click=move |_| on_navigate.run(Page::Pricing)>"View plans"</button>
                </p>
            </div>
        </div>
    }
}
