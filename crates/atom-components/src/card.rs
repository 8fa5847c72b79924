// File: src/card.rs
// Purpose: Feature, pricing and testimonial cards

use crate::non_empty;
use maud::{html, Markup, Render};
use serde::{Deserialize, Serialize};

/// Title and description with an optional icon slot.
#[derive(Debug, Clone, Default)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,
    pub icon: Option<Markup>,
}

impl FeatureCard {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon: None,
        }
    }

    pub fn icon(mut self, icon: impl Render) -> Self {
        self.icon = Some(icon.render());
        self
    }
}

impl Render for FeatureCard {
    fn render(&self) -> Markup {
        html! {
            div.ac-feature-card {
                div.ac-feature-card-icon {
                    @if let Some(icon) = &self.icon {
                        (icon)
                    }
                }
                h3.ac-feature-card-title { (self.title) }
                p.ac-feature-card-description { (self.description) }
            }
        }
    }
}

/// One pricing plan. Deserializable so plans can live in site config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    pub currency: String,
    /// e.g. "/month"
    pub period: String,
    pub features: Vec<String>,
    pub cta_text: String,
    pub cta_link: String,
    pub highlighted: bool,
    /// Shown above the plan name when non-empty
    pub badge: String,
}

#[derive(Debug, Clone)]
pub struct PricingCard<'a> {
    pub tier: &'a PricingTier,
}

impl<'a> PricingCard<'a> {
    pub fn new(tier: &'a PricingTier) -> Self {
        Self { tier }
    }
}

impl Render for PricingCard<'_> {
    fn render(&self) -> Markup {
        let tier = self.tier;
        html! {
            div.ac-pricing-card.ac-pricing-card-highlighted[tier.highlighted] {
                @if let Some(badge) = non_empty(&tier.badge) {
                    span.ac-pricing-badge { (badge) }
                }
                h3.ac-pricing-name { (tier.name) }
                div.ac-pricing-price {
                    span.ac-pricing-currency { (tier.currency) }
                    span.ac-pricing-amount { (tier.price) }
                    span.ac-pricing-period { (tier.period) }
                }
                ul.ac-pricing-features {
                    @for feature in &tier.features {
                        li { (feature) }
                    }
                }
                a.ac-pricing-cta href=(tier.cta_link) { (tier.cta_text) }
            }
        }
    }
}

impl Render for PricingTier {
    fn render(&self) -> Markup {
        PricingCard::new(self).render()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestimonialCard {
    pub quote: String,
    pub author: String,
    pub role: String,
    /// Avatar image is omitted when empty
    pub avatar_url: String,
}

impl TestimonialCard {
    pub fn new(
        quote: impl Into<String>,
        author: impl Into<String>,
        role: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
            role: role.into(),
            avatar_url: avatar_url.into(),
        }
    }
}

impl Render for TestimonialCard {
    fn render(&self) -> Markup {
        html! {
            figure.ac-testimonial-card {
                blockquote.ac-testimonial-quote { (self.quote) }
                figcaption.ac-testimonial-author {
                    @if let Some(src) = non_empty(&self.avatar_url) {
                        img.ac-testimonial-avatar src=(src) alt=(self.author) loading="lazy";
                    }
                    div {
                        span.ac-testimonial-name { (self.author) }
                        span.ac-testimonial-role { (self.role) }
                    }
                }
            }
        }
    }
}
