//! The Eco Vibe pitch deck: a fixed, non-empty sequence of slides.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideImage {
    /// Path relative to the assets directory.
    pub src: &'static str,
    pub alt: &'static str,
    pub credit: Option<&'static str>,
}

/// Three gradient stops (RGBA hex) used for the glow behind the image panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accent {
    pub from: u32,
    pub via: u32,
    pub to: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    pub id: usize,
    pub label: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub bullets: &'static [&'static str],
    pub paragraphs: &'static [&'static str],
    pub stats: &'static [Stat],
    pub image: SlideImage,
    pub accent: Accent,
    pub footer_note: Option<&'static str>,
}

/// Borrowed view over the slide array. Only built from the static deck,
/// which is never empty, so the index ring never degenerates.
#[derive(Debug, Clone, Copy)]
pub struct Deck {
    slides: &'static [Slide],
}

impl Deck {
    pub fn eco_vibe() -> Self {
        Self { slides: SLIDES }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn get(&self, index: usize) -> &'static Slide {
        &self.slides[index % self.slides.len()]
    }

    #[cfg(test)]
    pub fn slides(&self) -> &'static [Slide] {
        self.slides
    }

    /// Unique image sources in first-use order.
    pub fn image_sources(&self) -> Vec<&'static str> {
        let mut sources: Vec<&'static str> = Vec::new();
        for slide in self.slides {
            if !sources.contains(&slide.image.src) {
                sources.push(slide.image.src);
            }
        }
        sources
    }
}

static SLIDES: &[Slide] = &[
    Slide {
        id: 0,
        label: "Executive Pitch",
        title: "Eco Vibe Bottles",
        subtitle: Some("Smart, self-cleaning hydration inspired by LARQ—built for the conscious, on-the-go professional."),
        bullets: &[
            "UV-C LED technology neutralizes 99.99% of bio-contaminants in 60 seconds",
            "Modular filters and NFC-enabled hydration insights via the Eco Vibe app",
            "Carbon-neutral supply chain and upcycled aluminum construction",
        ],
        paragraphs: &[],
        stats: &[],
        image: SlideImage {
            src: "images/hero-bottle.jpg",
            alt: "Eco Vibe bottle hero photograph",
            credit: Some("Photo by Unsplash contributor"),
        },
        accent: Accent { from: 0x3b82f6cc, via: 0x34d399b3, to: 0x7dd3fce6 },
        footer_note: Some("Confidential pitch deck — Eco Vibe Labs, November 2024"),
    },
    Slide {
        id: 1,
        label: "Market Signal",
        title: "Why Hydration Needs a Reset",
        subtitle: Some("The premium reusable bottle category is projected to reach $3.1B by 2028, yet hygiene and taste remain top customer pain points."),
        bullets: &[
            "71% of premium bottle users worry about bacteria buildup after 48 hours of use.",
            "Urban professionals are buying an average of 3.4 reusable bottles per year in search of better UX.",
            "LARQ proved the appetite for UV purification; Eco Vibe layers in personalization and sustainability.",
        ],
        paragraphs: &[],
        stats: &[
            Stat { label: "TAM", value: "$3.1B" },
            Stat { label: "SAM", value: "$620M" },
            Stat { label: "Projected CAGR", value: "15.2%" },
        ],
        image: SlideImage {
            src: "images/market-insights.jpg",
            alt: "Market data visual charts",
            credit: Some("Photo by Pexels contributor"),
        },
        accent: Accent { from: 0xa855f7b3, via: 0x3b82f699, to: 0x22d3eeb3 },
        footer_note: Some("Source: Grand View Research, Eco Vibe consumer interviews (n=212)"),
    },
    Slide {
        id: 2,
        label: "Product Vision",
        title: "Designed for Modern Rituals",
        subtitle: Some("A sculpted 3D form factor with tactile soft-touch finish and customizable light halo celebrating every hydration milestone."),
        bullets: &[
            "Three finishes: Arctic Pearl, Obsidian, Aurora",
            "Integrated wireless charging base doubles as a minimalist nightstand accent",
            "Ambient 3D light ring pulses when the UV cycle completes",
        ],
        paragraphs: &[
            "Dual-wall vacuum insulation keeps beverages at optimal temperature for 24h cold / 12h hot while ActivePure™ UV-C cleans the interior.",
            "Magnetic top module swaps between sip straw, pour spout, and tumbler lid; embedded sensors sync with our mobile app.",
        ],
        stats: &[],
        image: SlideImage {
            src: "images/3d-bottle.jpg",
            alt: "3D render of a designer bottle",
            credit: Some("Photo by Pexels contributor"),
        },
        accent: Accent { from: 0x10b981b3, via: 0xa3e63599, to: 0xfcd34db3 },
        footer_note: None,
    },
    Slide {
        id: 3,
        label: "How It Works",
        title: "Inspired by LARQ, Elevated by Eco Vibe",
        subtitle: Some("Layered purification gives customers confidence in any setting—from the studio to remote trails."),
        bullets: &[
            "UV-C LED Core: Eliminates pathogens with a 278 nm wavelength pulse every four hours.",
            "PureFlow Filter Dock: Pressurized carbon + nano-silver filter for on-demand refills.",
            "Eco Vibe App: Adaptive algorithms nudge intake goals, track minerals, and reward reuse habits.",
        ],
        paragraphs: &[],
        stats: &[
            Stat { label: "Neutralization", value: "99.99%" },
            Stat { label: "Cycle Time", value: "60 sec" },
            Stat { label: "Battery Life", value: "30 days" },
        ],
        image: SlideImage {
            src: "images/uv-tech.jpg",
            alt: "UV technology visualization",
            credit: Some("Photo by Pexels contributor"),
        },
        accent: Accent { from: 0x14b8a6b3, via: 0x22d3eeb3, to: 0x3b82f699 },
        footer_note: None,
    },
    Slide {
        id: 4,
        label: "Business Model",
        title: "Premium Hardware + High-Margin Services",
        subtitle: Some("A hybrid model blends direct-to-consumer sales, smart accessories, and carbon credit partnerships."),
        bullets: &[
            "Hardware MSRP $149 with 58% blended gross margin at scale.",
            "Subscription modules: filter cartridges ($19/qtr) and app insights ($4.99/mo).",
            "B2B wellness bundles for co-working spaces, boutique gyms, and hospitality.",
        ],
        paragraphs: &[],
        stats: &[
            Stat { label: "Year 1 Revenue", value: "$4.6M" },
            Stat { label: "Year 2", value: "$12.8M" },
            Stat { label: "Year 3", value: "$28.4M" },
        ],
        image: SlideImage {
            src: "images/lifestyle.jpg",
            alt: "Professionals using smart bottles",
            credit: Some("Photo by Pexels contributor"),
        },
        accent: Accent { from: 0x1e293bcc, via: 0x3f3f4699, to: 0x10b98199 },
        footer_note: Some("Financial model assumes 32% attach rate on consumables by Year 3"),
    },
    Slide {
        id: 5,
        label: "Go-To-Market",
        title: "Momentum Engine",
        subtitle: Some("Launch anchors around urban wellness trendsetters, sustainability advocates, and strategic LARQ alumni advisors."),
        bullets: &[
            "Phase 1 (Q2-Q3 2025): Invite-only beta with 1,000 eco-conscious professionals; pop-up hydration labs.",
            "Phase 2: Retail collabs with REI flagship, Apple Store Today at Apple wellness experiences.",
            "Phase 3: Corporate wellness integrations (Salesforce, Patagonia HQ) leveraging ESG reporting APIs.",
        ],
        paragraphs: &[],
        stats: &[
            Stat { label: "Projected CAC", value: "$68" },
            Stat { label: "Payback", value: "2.1 months" },
            Stat { label: "Referral Rate", value: "31%" },
        ],
        image: SlideImage {
            src: "images/hero-bottle.jpg",
            alt: "Eco vibe bottle displayed in lifestyle setting",
            credit: None,
        },
        accent: Accent { from: 0x6366f1b3, via: 0xa855f799, to: 0xfb7185b3 },
        footer_note: None,
    },
    Slide {
        id: 6,
        label: "Sustainability Impact",
        title: "Measuring the Ripple Effect",
        subtitle: Some("Eco Vibe bottles are manufactured with 83% recycled aluminum and offset with regenerative ocean plastic removal."),
        bullets: &[
            "Each bottle displaces ~1,460 single-use plastics annually based on user beta data.",
            "Partnership with 4ocean funds removal of 1 lb of ocean waste per unit sold.",
            "Lifecycle assessment targets cradle-to-gate carbon neutrality by 2026.",
        ],
        paragraphs: &[],
        stats: &[
            Stat { label: "Waste Diverted", value: "2.1M lbs" },
            Stat { label: "CO₂ Offset", value: "18k tons" },
            Stat { label: "Recycled Content", value: "83%" },
        ],
        image: SlideImage {
            src: "images/market-insights.jpg",
            alt: "Ocean wave sustainability imagery",
            credit: None,
        },
        accent: Accent { from: 0x10b981b3, via: 0x14b8a699, to: 0x3b82f699 },
        footer_note: None,
    },
    Slide {
        id: 7,
        label: "Roadmap",
        title: "Build, Scale, Expand",
        subtitle: Some("A disciplined 24-month roadmap ensures reliable hardware, compelling software, and irresistible brand gravity."),
        bullets: &[
            "Q1 2025: Finalize tooling, UL certification, and LARQ alumni advisory council.",
            "Q3 2025: App v1.0 launch, hydration streak gamification, and Apple Health integration.",
            "2026: Expand to EU & APAC micro-factories with localized materials sourcing.",
        ],
        paragraphs: &[],
        stats: &[
            Stat { label: "Beta Users", value: "1k" },
            Stat { label: "Units Shipped", value: "85k" },
            Stat { label: "NPS Target", value: "70+" },
        ],
        image: SlideImage {
            src: "images/lifestyle.jpg",
            alt: "Team collaborating over product roadmap",
            credit: None,
        },
        accent: Accent { from: 0xf59e0bb3, via: 0xf9731699, to: 0xf43f5e99 },
        footer_note: None,
    },
    Slide {
        id: 8,
        label: "Closing",
        title: "Join the Eco Vibe Movement",
        subtitle: Some("Seeking $4.5M Seed to accelerate manufacturing, deepen software intelligence, and own the premium hydration category."),
        bullets: &[
            "Manufacturing scale-up with Fair Trade certified partners in Portugal and Taiwan.",
            "Expand Eco Vibe OS personalization and partnership API for wellness platforms.",
            "Deliver net-positive hydration experience that makes sustainability aspirational.",
        ],
        paragraphs: &[],
        stats: &[],
        image: SlideImage {
            src: "images/hero-bottle.jpg",
            alt: "Eco Vibe bottle hero closing visual",
            credit: None,
        },
        accent: Accent { from: 0x0ea5e9b3, via: 0x10b98199, to: 0x6366f199 },
        footer_note: Some("Contact: founders@ecovibelabs.com | Data Room: link available upon request"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_positions() {
        let deck = Deck::eco_vibe();
        assert_eq!(deck.len(), 9);
        for (i, slide) in deck.slides().iter().enumerate() {
            assert_eq!(slide.id, i);
        }
    }

    #[test]
    fn lookup_wraps_past_the_end() {
        let deck = Deck::eco_vibe();
        assert_eq!(deck.get(9).id, 0);
        assert_eq!(deck.get(13).title, "Premium Hardware + High-Margin Services");
    }

    #[test]
    fn image_sources_are_deduplicated_in_order() {
        let sources = Deck::eco_vibe().image_sources();
        assert_eq!(
            sources,
            vec![
                "images/hero-bottle.jpg",
                "images/market-insights.jpg",
                "images/3d-bottle.jpg",
                "images/uv-tech.jpg",
                "images/lifestyle.jpg",
            ]
        );
    }
}
