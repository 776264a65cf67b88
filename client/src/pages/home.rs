//! Landing page.

use leptos::prelude::*;

use crate::components::cta_banner::CtaBanner;
use crate::components::icon::{Icon, IconKind};
use crate::components::section_heading::SectionHeading;
use crate::data::home::{FEATURES, HERO_IMAGE, ROLES, TESTIMONIALS};
use crate::state::nav::Page;

#[component]
pub fn HomePage(on_navigate: Callback<Page>) -> impl IntoView {
    view! {
        <div class="page page--home">
            <section class="hero hero--image" style={format!("background-image: url('{HERO_IMAGE}')")}>
                <div class="hero__overlay"></div>
                <div class="container hero__content">
                    <h1 class="hero__title">
                        "Showcase Your "
                        <span class="text-gradient">"Film Industry Talent"</span>
                    </h1>
                    <p class="hero__lead">
                        "Connect with producers, directors and crews. Build your professional portfolio and get discovered by the industry."
                    </p>
                    <div class="hero__actions">
                        <button class="btn btn--primary btn--lg" on:click=move |_| on_navigate.run(Page::Register)>
                            "Get Started"
                            <Icon kind=IconKind::ArrowRight modifiers="icon--sm"/>
                        </button>
                        <button class="btn btn--outline btn--lg" on:click=move |_| on_navigate.run(Page::Browse)>
                            <Icon kind=IconKind::Play modifiers="icon--sm"/>
                            "Browse Talent"
                        </button>
                    </div>
                </div>
            </section>

            <section class="section section--raised">
                <div class="container">
                    <SectionHeading
                        title="Everything You Need to Get Noticed"
                        subtitle="Tools built for every role on set, in front of and behind the camera."
                    />
                    <div class="grid grid--4">
                        {FEATURES
                            .iter()
                            .map(|feature| {
                                view! {
                                    <div class="feature-card">
                                        <div class="feature-card__icon">
                                            <Icon kind={feature.icon}/>
                                        </div>
                                        <h3 class="feature-card__title">{feature.title}</h3>
                                        <p class="feature-card__text">{feature.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <SectionHeading
                        title="Every Role Has a Place"
                        subtitle="From producers to catering services, build a presence that matches your craft."
                    />
                    <div class="role-list">
                        {ROLES.iter().map(|role| view! { <span class="chip">{*role}</span> }).collect_view()}
                    </div>
                </div>
            </section>

            <section class="section section--raised">
                <div class="container">
                    <SectionHeading title="Loved by Film Professionals"/>
                    <div class="grid grid--3">
                        {TESTIMONIALS
                            .iter()
                            .map(|t| {
                                view! {
                                    <figure class="testimonial">
                                        <blockquote class="testimonial__quote">{t.quote}</blockquote>
                                        <figcaption class="testimonial__author">
                                            <span class="testimonial__name">{t.name}</span>
                                            <span class="testimonial__role">{t.role}</span>
                                        </figcaption>
                                    </figure>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <CtaBanner
                title="Ready to Take the Next Step?"
                body="Create your free profile in minutes and start connecting with projects today."
                button_label="Create Your Profile"
                target=Page::Register
                on_navigate=on_navigate
            />
        </div>
    }
}
