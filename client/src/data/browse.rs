//! Featured professionals listed on the browse page.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Professional {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    pub portfolio_items: u32,
    /// Average review score out of five.
    pub rating: f32,
}

/// Category chips shown above the grid. Display only.
pub const CATEGORIES: &[&str] = &["All", "Acting", "Directing", "Camera", "Post-Production", "Sound", "Art Department"];

pub const PROFESSIONALS: &[Professional] = &[
    Professional {
        name: "Sarah Johnson",
        role: "Actor",
        location: "Los Angeles, CA",
        image: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?w=400&h=400&fit=crop",
        portfolio_items: 18,
        rating: 4.9,
    },
    Professional {
        name: "Marcus Chen",
        role: "Cinematographer",
        location: "Vancouver, BC",
        image: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?w=400&h=400&fit=crop",
        portfolio_items: 32,
        rating: 4.8,
    },
    Professional {
        name: "Elena Rodriguez",
        role: "Director",
        location: "Madrid, Spain",
        image: "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?w=400&h=400&fit=crop",
        portfolio_items: 12,
        rating: 5.0,
    },
    Professional {
        name: "David Thompson",
        role: "Sound Designer",
        location: "London, UK",
        image: "https://images.pexels.com/photos/91227/pexels-photo-91227.jpeg?w=400&h=400&fit=crop",
        portfolio_items: 24,
        rating: 4.7,
    },
    Professional {
        name: "Aisha Bello",
        role: "Costume Designer",
        location: "Lagos, Nigeria",
        image: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?w=400&h=400&fit=crop",
        portfolio_items: 40,
        rating: 4.9,
    },
    Professional {
        name: "Tomás Silva",
        role: "Editor",
        location: "São Paulo, Brazil",
        image: "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg?w=400&h=400&fit=crop",
        portfolio_items: 27,
        rating: 4.6,
    },
];
