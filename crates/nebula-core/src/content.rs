//! Static page content
//!
//! Literal copy and image references for every section. Rendered as-is; the
//! server also publishes it as JSON under `/api/content`.

use serde::Serialize;

use crate::anchor::Anchor;

/// Icon used by a technology feature card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureIcon {
    Zap,
    Shield,
    Gauge,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hero {
    pub headline: [&'static str; 2],
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarModel {
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct About {
    pub heading: &'static str,
    pub body: &'static str,
    pub points: [&'static str; 4],
    pub image: &'static str,
    pub image_alt: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactCopy {
    pub heading: &'static str,
    pub intro: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Footer {
    pub tagline: &'static str,
    pub links: [&'static str; 4],
    pub owner: &'static str,
    pub owner_url: &'static str,
}

/// Everything the page renders, section by section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    pub brand: &'static str,
    pub nav: [Anchor; 5],
    pub hero: Hero,
    pub models_heading: &'static str,
    pub models: [CarModel; 3],
    pub technology_heading: &'static str,
    pub features: [Feature; 3],
    pub about: About,
    pub testimonials_heading: &'static str,
    pub testimonials: [Testimonial; 3],
    pub contact: ContactCopy,
    pub footer: Footer,
}

/// The Nebula Motors page content
pub fn catalog() -> Catalog {
    Catalog {
        brand: "NEBULA MOTORS",
        nav: Anchor::ALL,
        hero: Hero {
            headline: ["Redefining Luxury", "in Motion"],
            subtitle: "Experience unparalleled elegance and innovation",
            cta: "Discover Elegance",
            image: "https://images.unsplash.com/photo-1503376780353-7e6692767b70?auto=format&fit=crop&w=1920&q=80",
            image_alt: "Luxurious Nebula car",
        },
        models_heading: "Our Stellar Fleet",
        models: [
            CarModel {
                name: "Nova",
                image: "https://images.unsplash.com/photo-1555215695-3004980ad54e?auto=format&fit=crop&w=800&q=80",
                description: "Urban elegance redefined",
            },
            CarModel {
                name: "Quantum",
                image: "https://images.unsplash.com/photo-1617788138017-80ad40651399?auto=format&fit=crop&w=800&q=80",
                description: "Power meets sophistication",
            },
            CarModel {
                name: "Celestial",
                image: "https://images.unsplash.com/photo-1552519507-da3b142c6e3d?auto=format&fit=crop&w=800&q=80",
                description: "Luxury without limits",
            },
        ],
        technology_heading: "Cutting-Edge Innovation",
        features: [
            Feature {
                icon: FeatureIcon::Zap,
                title: "Quantum Drive",
                description: "0-60 mph in a breathtaking 2.1 seconds",
            },
            Feature {
                icon: FeatureIcon::Shield,
                title: "Nebula Shield",
                description: "Advanced AI-powered protective cocoon",
            },
            Feature {
                icon: FeatureIcon::Gauge,
                title: "Infinite Range",
                description: "800+ miles on a single charge",
            },
        ],
        about: About {
            heading: "Our Legacy of Excellence",
            body: "At Nebula Motors, we are driven by a passion for innovation and a commitment to \
                   redefining luxury. Our journey began with a vision to create vehicles that not \
                   only push the boundaries of technology but also elevate the driving experience \
                   to new heights of sophistication and comfort.",
            points: [
                "Pioneering sustainable luxury",
                "Craftsmanship meets cutting-edge technology",
                "Uncompromising performance and elegance",
                "Setting new standards in automotive excellence",
            ],
            image: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?auto=format&fit=crop&w=1200&q=80",
            image_alt: "Nebula Motors Headquarters",
        },
        testimonials_heading: "What Our Clients Say",
        testimonials: [
            Testimonial {
                name: "Alexandra R.",
                role: "CEO, TechCorp",
                quote: "Nebula Motors has redefined luxury. The Quantum model is not just a car, it's an experience.",
            },
            Testimonial {
                name: "Marcus W.",
                role: "Formula 1 Driver",
                quote: "The performance of Nebula's vehicles is unmatched. It's like driving the future.",
            },
            Testimonial {
                name: "Sophia L.",
                role: "Environmental Scientist",
                quote: "Finally, a car that combines sustainability with uncompromising luxury. Nebula is leading the charge.",
            },
        ],
        contact: ContactCopy {
            heading: "Experience Nebula",
            intro: "Ready to elevate your driving experience? Contact us to schedule your private \
                    showcase or learn more about our stellar fleet.",
            image: "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?auto=format&fit=crop&w=800&q=80",
            image_alt: "Luxury car interior",
        },
        footer: Footer {
            tagline: "Elevating the art of mobility",
            links: ["Privacy Policy", "Terms of Service", "Careers", "Press"],
            owner: "Ahnaaf Rafee",
            owner_url: "https://ahnaafrafee.vercel.app",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let c = catalog();
        assert_eq!(c.brand, "NEBULA MOTORS");
        assert_eq!(
            c.models.iter().map(|m| m.name).collect::<Vec<_>>(),
            vec!["Nova", "Quantum", "Celestial"]
        );
        assert_eq!(c.features[1].icon, FeatureIcon::Shield);
        assert_eq!(c.testimonials[1].role, "Formula 1 Driver");
        assert_eq!(c.about.points.len(), 4);
        assert_eq!(c.nav, Anchor::ALL);
    }

    #[test]
    fn test_catalog_serializes() {
        let json = serde_json::to_value(catalog()).unwrap();
        assert_eq!(json["nav"][4], "contact");
        assert_eq!(json["features"][0]["icon"], "zap");
        assert_eq!(json["hero"]["headline"][1], "in Motion");
    }
}
