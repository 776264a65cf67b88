//! Company values, team roster and headline stats for the about page.

use crate::components::icon::IconKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompanyValue {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    /// External image URL; never fetched or processed by the app.
    pub image: &'static str,
    pub bio: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const VALUES: &[CompanyValue] = &[
    CompanyValue {
        icon: IconKind::Users,
        title: "Community First",
        description: "We believe in building a supportive community where film professionals can connect, collaborate, and grow together.",
    },
    CompanyValue {
        icon: IconKind::Target,
        title: "Excellence",
        description: "We strive for excellence in everything we do, providing the best platform for showcasing and discovering talent.",
    },
    CompanyValue {
        icon: IconKind::Award,
        title: "Recognition",
        description: "Every professional deserves recognition for their craft. We help talented individuals get the visibility they deserve.",
    },
    CompanyValue {
        icon: IconKind::Heart,
        title: "Passion",
        description: "We are passionate about film and the incredible people who bring stories to life behind and in front of the camera.",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Alex Rivera",
        role: "CEO & Founder",
        image: "https://images.pexels.com/photos/3785079/pexels-photo-3785079.jpeg?w=300&h=300&fit=crop",
        bio: "Former film producer with 15 years in the industry",
    },
    TeamMember {
        name: "Maya Patel",
        role: "CTO",
        image: "https://images.pexels.com/photos/3785077/pexels-photo-3785077.jpeg?w=300&h=300&fit=crop",
        bio: "Tech leader passionate about connecting creative professionals",
    },
    TeamMember {
        name: "Jordan Kim",
        role: "Head of Community",
        image: "https://images.pexels.com/photos/3779432/pexels-photo-3779432.jpeg?w=300&h=300&fit=crop",
        bio: "Industry veteran focused on building meaningful connections",
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: "10,000+", label: "Active Professionals" },
    Stat { value: "500+", label: "Projects Completed" },
    Stat { value: "50+", label: "Countries" },
    Stat { value: "95%", label: "Satisfaction Rate" },
];

pub const MISSION_IMAGE: &str = "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?w=600&h=400&fit=crop";
