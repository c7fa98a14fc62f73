//! Static site copy: hero slides, services, portfolio, testimonials, team.

mod data;
mod filter;

pub use data::{hero_slides, portfolio, services, team, testimonials};
pub use filter::{categories, filter_portfolio};

use std::fmt;

/// Stable key of a slide. Never reused for a different slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideId(pub &'static str);

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One rotation-eligible item. The controller only ever sees the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide<P> {
    pub id: SlideId,
    pub payload: P,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroSlide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub call_to_action: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub id: SlideId,
    pub name: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    All,
    Branding,
    Web,
    Mobile,
    Marketing,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Branding => "Branding",
            Category::Web => "Web",
            Category::Mobile => "Mobile",
            Category::Marketing => "Marketing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioItem {
    pub id: SlideId,
    pub title: &'static str,
    pub client: &'static str,
    pub category: Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}
