use super::{Category, HeroSlide, PortfolioItem, Service, Slide, SlideId, TeamMember, Testimonial};

const HERO: &[Slide<HeroSlide>] = &[
    Slide {
        id: SlideId("hero-brand"),
        payload: HeroSlide {
            title: "Brands people remember",
            subtitle: "Identity systems built to last past the launch week.",
            call_to_action: "See our work",
        },
    },
    Slide {
        id: SlideId("hero-web"),
        payload: HeroSlide {
            title: "Sites that load before you blink",
            subtitle: "Fast, accessible web builds with content your team can edit.",
            call_to_action: "Explore services",
        },
    },
    Slide {
        id: SlideId("hero-growth"),
        payload: HeroSlide {
            title: "Campaigns that pay for themselves",
            subtitle: "Measured marketing with reports you can actually read.",
            call_to_action: "Talk to us",
        },
    },
    Slide {
        id: SlideId("hero-mobile"),
        payload: HeroSlide {
            title: "Apps your customers keep",
            subtitle: "Native feel on every platform, one shared roadmap.",
            call_to_action: "Start a project",
        },
    },
];

const SERVICES: &[Service] = &[
    Service {
        id: SlideId("svc-branding"),
        name: "Brand Identity",
        summary: "Naming, logo systems and guidelines.",
        features: &["Logo design", "Brand guidelines", "Tone of voice"],
    },
    Service {
        id: SlideId("svc-web"),
        name: "Web Development",
        summary: "Marketing sites and web apps.",
        features: &["Responsive builds", "CMS integration", "Performance audits"],
    },
    Service {
        id: SlideId("svc-mobile"),
        name: "Mobile Apps",
        summary: "iOS and Android from one team.",
        features: &["Prototyping", "Store launch", "Analytics"],
    },
    Service {
        id: SlideId("svc-marketing"),
        name: "Digital Marketing",
        summary: "Search, social and paid campaigns.",
        features: &["SEO", "Paid social", "Monthly reporting"],
    },
    Service {
        id: SlideId("svc-content"),
        name: "Content Studio",
        summary: "Copy, photo and video production.",
        features: &["Copywriting", "Product shoots", "Short-form video"],
    },
    Service {
        id: SlideId("svc-strategy"),
        name: "Strategy",
        summary: "Research that decides what to build next.",
        features: &["User interviews", "Market analysis", "Roadmaps"],
    },
];

const PORTFOLIO: &[PortfolioItem] = &[
    PortfolioItem {
        id: SlideId("work-harbor"),
        title: "Harbor Coffee rebrand",
        client: "Harbor Coffee Co.",
        category: Category::Branding,
    },
    PortfolioItem {
        id: SlideId("work-ledger"),
        title: "Ledger dashboard",
        client: "Ledger Finance",
        category: Category::Web,
    },
    PortfolioItem {
        id: SlideId("work-trailhead"),
        title: "Trailhead companion app",
        client: "Trailhead Outdoors",
        category: Category::Mobile,
    },
    PortfolioItem {
        id: SlideId("work-bloom"),
        title: "Bloom spring campaign",
        client: "Bloom Florists",
        category: Category::Marketing,
    },
    PortfolioItem {
        id: SlideId("work-atlas"),
        title: "Atlas travel site",
        client: "Atlas Journeys",
        category: Category::Web,
    },
    PortfolioItem {
        id: SlideId("work-nimbus"),
        title: "Nimbus identity",
        client: "Nimbus Cloud",
        category: Category::Branding,
    },
];

const TESTIMONIALS: &[Slide<Testimonial>] = &[
    Slide {
        id: SlideId("quote-harbor"),
        payload: Testimonial {
            quote: "They understood our brand better than we did.",
            author: "Maya Chen",
            role: "Founder, Harbor Coffee Co.",
        },
    },
    Slide {
        id: SlideId("quote-ledger"),
        payload: Testimonial {
            quote: "Our signups doubled the month the new site went live.",
            author: "Daniel Ortiz",
            role: "CMO, Ledger Finance",
        },
    },
    Slide {
        id: SlideId("quote-trailhead"),
        payload: Testimonial {
            quote: "Shipped on time, on budget, and the reviews speak for themselves.",
            author: "Priya Nair",
            role: "Product Lead, Trailhead Outdoors",
        },
    },
];

const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Alex Rivera",
        role: "Creative Director",
        bio: "Twelve years shaping brands for startups and museums alike.",
    },
    TeamMember {
        name: "Sam Okafor",
        role: "Lead Engineer",
        bio: "Builds fast sites and faster pipelines.",
    },
    TeamMember {
        name: "Jordan Lee",
        role: "Strategy Lead",
        bio: "Turns interviews and spreadsheets into roadmaps.",
    },
    TeamMember {
        name: "Riley Novak",
        role: "Marketing Manager",
        bio: "Runs campaigns that are judged by revenue, not reach.",
    },
];

pub fn hero_slides() -> &'static [Slide<HeroSlide>] {
    HERO
}

pub fn services() -> &'static [Service] {
    SERVICES
}

pub fn portfolio() -> &'static [PortfolioItem] {
    PORTFOLIO
}

pub fn testimonials() -> &'static [Slide<Testimonial>] {
    TESTIMONIALS
}

pub fn team() -> &'static [TeamMember] {
    TEAM
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slide_ids_are_unique() {
        let mut seen = HashSet::new();
        let ids = HERO
            .iter()
            .map(|s| s.id)
            .chain(TESTIMONIALS.iter().map(|s| s.id))
            .chain(SERVICES.iter().map(|s| s.id))
            .chain(PORTFOLIO.iter().map(|p| p.id));
        for id in ids {
            assert!(seen.insert(id), "duplicate slide id {id}");
        }
    }

    #[test]
    fn carousels_have_slides() {
        assert!(!hero_slides().is_empty());
        assert!(!testimonials().is_empty());
    }
}
