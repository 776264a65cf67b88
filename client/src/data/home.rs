//! Landing page copy: feature highlights, showcased roles and testimonials.

use crate::components::icon::IconKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const HERO_IMAGE: &str = "https://images.pexels.com/photos/66134/pexels-photo-66134.jpeg?w=1600&h=900&fit=crop";

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: IconKind::Film,
        title: "Showcase Your Work",
        description: "Build a portfolio with reels, stills and credits that puts your craft front and center.",
    },
    Feature {
        icon: IconKind::Users,
        title: "Connect With Crews",
        description: "Find collaborators across every department, from pre-production to post.",
    },
    Feature {
        icon: IconKind::Briefcase,
        title: "Discover Opportunities",
        description: "Get seen by producers and casting teams looking for talent like you.",
    },
    Feature {
        icon: IconKind::Star,
        title: "Stand Out",
        description: "Featured placements and verified credits help the right people notice you.",
    },
];

/// Roles showcased on the landing page and offered in the sign-up form.
pub const ROLES: &[&str] = &[
    "Actor",
    "Director",
    "Producer",
    "Cinematographer",
    "Editor",
    "Screenwriter",
    "Sound Designer",
    "Costume Designer",
    "Makeup Artist",
    "Production Designer",
    "Composer",
    "Catering Services",
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "I booked my first feature as a gaffer within a month of setting up my profile.",
        name: "Sam Okafor",
        role: "Gaffer",
    },
    Testimonial {
        quote: "Casting used to take weeks of emails. Now I can browse reels in an afternoon.",
        name: "Lena Brooks",
        role: "Casting Director",
    },
    Testimonial {
        quote: "Finally a place where costume work gets the same spotlight as the cast.",
        name: "Diego Marín",
        role: "Costume Designer",
    },
];
