//! Subscription tiers and pricing FAQ.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

/// How many portfolio items a tier may publish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortfolioLimit {
    Limited(u32),
    Unlimited,
}

/// One subscription plan shown on the pricing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    /// Whole US dollars per month. Zero means free.
    pub price: u32,
    pub features: &'static [&'static str],
    pub portfolio_limit: PortfolioLimit,
    /// Highlighted as "Most Popular".
    pub featured: bool,
}

impl PricingTier {
    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "basic",
        price: 0,
        features: &[
            "Professional profile page",
            "Basic search visibility",
            "Contact form for inquiries",
            "Community forum access",
        ],
        portfolio_limit: PortfolioLimit::Limited(5),
        featured: false,
    },
    PricingTier {
        name: "professional",
        price: 19,
        features: &[
            "Everything in Basic",
            "Priority search placement",
            "Video reel hosting",
            "Direct messaging with producers",
            "Profile analytics",
        ],
        portfolio_limit: PortfolioLimit::Limited(25),
        featured: true,
    },
    PricingTier {
        name: "premium",
        price: 49,
        features: &[
            "Everything in Professional",
            "Featured profile badge",
            "Early access to casting calls",
            "Custom profile URL",
            "Dedicated account support",
        ],
        portfolio_limit: PortfolioLimit::Unlimited,
        featured: false,
    },
];

/// A question/answer pair in the pricing FAQ.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Can I change my plan later?",
        answer: "Yes, you can upgrade or downgrade your plan at any time. Changes take effect immediately.",
    },
    FaqEntry {
        question: "Is there a free trial?",
        answer: "All paid plans come with a 14-day free trial. No credit card required to start.",
    },
    FaqEntry {
        question: "What payment methods do you accept?",
        answer: "We accept all major credit cards, PayPal, and bank transfers for annual plans.",
    },
    FaqEntry {
        question: "Can I cancel anytime?",
        answer: "Yes, you can cancel your subscription at any time. Your account will remain active until the end of the billing period.",
    },
];
