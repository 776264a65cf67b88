//! Company story: mission, values, team and growth stats.

use leptos::prelude::*;

use crate::components::cta_banner::CtaBanner;
use crate::components::icon::Icon;
use crate::components::section_heading::SectionHeading;
use crate::data::about::{MISSION_IMAGE, STATS, TEAM, VALUES};
use crate::state::nav::Page;

#[component]
pub fn AboutPage(on_navigate: Callback<Page>) -> impl IntoView {
    view! {
        <div class="page page--about">
            <section class="hero hero--plain">
                <div class="container container--narrow">
                    <h1 class="hero__title">
                        "About "
                        <span class="text-gradient">"FilmCast Pro"</span>
                    </h1>
                    <p class="hero__lead">
                        "We are on a mission to connect the global film community, making it easier for talented professionals to showcase their work and find meaningful opportunities in the industry they love."
                    </p>
                </div>
            </section>

            <section class="section section--raised">
                <div class="container split">
                    <div>
                        <h2 class="split__title">"Our Mission"</h2>
                        <p class="split__text">
                            "The film industry is built on relationships, creativity, and collaboration. Yet, many talented professionals struggle to connect with the right opportunities and showcase their work to the right audience."
                        </p>
                        <p class="split__text">
                            "FilmCast Pro bridges this gap by providing a professional platform where every role in filmmaking - from producers to costume designers, from directors to catering services - can build their presence and connect with projects that match their skills and passion."
                        </p>
                        <button class="btn btn--primary" on:click=move |_| on_navigate.run(Page::Register)>
                            "Join Our Community"
                        </button>
                    </div>
                    <img class="split__image" src=MISSION_IMAGE alt="Film crew working"/>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <SectionHeading title="Our Values"/>
                    <div class="grid grid--4">
                        {VALUES
                            .iter()
                            .map(|value| {
                                view! {
                                    <div class="value-card">
                                        <div class="value-card__icon">
                                            <Icon kind={value.icon}/>
                                        </div>
                                        <h3 class="value-card__title">{value.title}</h3>
                                        <p class="value-card__text">{value.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="section section--raised">
                <div class="container">
                    <SectionHeading
                        title="Meet Our Team"
                        subtitle="Our team combines deep industry experience with cutting-edge technology to create the best platform for film professionals."
                    />
                    <div class="grid grid--3">
                        {TEAM
                            .iter()
                            .map(|member| {
                                view! {
                                    <div class="team-card">
                                        <img class="team-card__photo" src={member.image} alt={member.name}/>
                                        <h3 class="team-card__name">{member.name}</h3>
                                        <p class="team-card__role">{member.role}</p>
                                        <p class="team-card__bio">{member.bio}</p>
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
                        title="Growing Every Day"
                        subtitle="Join thousands of professionals who trust FilmCast Pro"
                    />
                    <div class="grid grid--4 stats">
                        {STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat">
                                        <div class="stat__value">{stat.value}</div>
                                        <div class="stat__label">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <CtaBanner
                title="Ready to Join Our Community?"
                body="Start building your professional profile today and connect with opportunities that match your passion and skills."
                button_label="Get Started Now"
                target=Page::Register
                on_navigate=on_navigate
            />
        </div>
    }
}
