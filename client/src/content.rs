//! Site copy and brand constants rendered by the home page.
//!
//! DESIGN
//! ======
//! Everything the page says lives in `SiteContent` so the server can swap the
//! built-in copy for a content-provider document at startup. Every struct is
//! `#[serde(default)]`, which lets a partial document override only what it
//! names.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde::{Deserialize, Serialize};

/// In-page anchor targets, addressable as `#id` fragments.
pub mod anchors {
    pub const HOME: &str = "home";
    pub const PROGRAMS: &str = "programs";
    pub const ABOUT: &str = "about";
    pub const SPEAKING: &str = "speaking";
    pub const RESOURCES: &str = "resources";
    pub const TESTIMONIALS: &str = "testimonials";
    pub const CONTACT: &str = "contact";
}

/// Build an in-page fragment link for an anchor id.
pub fn fragment(id: &str) -> String {
    format!("#{id}")
}

// =============================================================================
// BRAND
// =============================================================================

/// Brand identity and outbound contact details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    pub slogan: String,
    pub phone: String,
    pub email: String,
    pub instagram_handle: String,
    pub instagram_url: String,
    pub hashtags: Vec<String>,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "Evolve Mindset Coaching".to_owned(),
            slogan: "Trust Your Wings".to_owned(),
            phone: "613-298-1522".to_owned(),
            email: "lucas@evolvemindsetcoaching.com".to_owned(),
            instagram_handle: "@evolvemindsetcoaching".to_owned(),
            instagram_url: "https://www.instagram.com/evolvemindsetcoaching/".to_owned(),
            hashtags: [
                "#evolvewithlucas",
                "#evolvemindsetcoaching",
                "#mindset",
                "#benicetoyourself",
                "#trustyourwings",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
        }
    }
}

impl Brand {
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn sms_href(&self) -> String {
        format!("sms:{}", self.phone)
    }

    pub fn logo_alt(&self) -> String {
        format!("{} logo", self.name)
    }
}

// =============================================================================
// LISTINGS
// =============================================================================

/// One entry in the header navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavItem {
    pub id: String,
    pub label: String,
}

/// A "what we'll build together" bullet in the hero card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub desc: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Program {
    pub title: String,
    pub subtitle: String,
    pub bullets: Vec<String>,
    pub cta: String,
}

/// A keynote or workshop offered under "Speaking".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Talk {
    pub title: String,
    pub desc: String,
}

/// A free downloadable resource.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource {
    pub title: String,
    pub desc: String,
    /// Download location. Empty until the file is published.
    pub href: String,
}

impl Resource {
    pub fn download_href(&self) -> Option<&str> {
        let href = self.href.trim();
        (!href.is_empty()).then_some(href)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: String,
}

impl Testimonial {
    /// Attribution line shown under the quote.
    pub fn attribution(&self) -> String {
        format!("— {}, {}", self.name, self.role)
    }
}

/// Copy for the biography overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bio {
    pub heading: String,
    pub teaser: String,
    pub paragraphs: Vec<String>,
}

// =============================================================================
// SITE CONTENT
// =============================================================================

/// Complete page copy. `Default` is the built-in brand content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: Vec<NavItem>,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub features: Vec<Feature>,
    pub programs: Vec<Program>,
    pub talks: Vec<Talk>,
    pub resources: Vec<Resource>,
    pub testimonials: Vec<Testimonial>,
    pub bio: Bio,
    /// Year shown in the footer; stamped by the server when it loads content.
    pub copyright_year: Option<i32>,
}

fn nav(id: &str, label: &str) -> NavItem {
    NavItem { id: id.to_owned(), label: label.to_owned() }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            brand: Brand::default(),
            nav: vec![
                nav(anchors::HOME, "Home"),
                nav(anchors::PROGRAMS, "Programs"),
                nav(anchors::ABOUT, "About"),
                nav(anchors::SPEAKING, "Speaking"),
                nav(anchors::RESOURCES, "Resources"),
                nav(anchors::TESTIMONIALS, "Praise"),
                nav(anchors::CONTACT, "Contact"),
            ],
            hero_title: "Become your own anchor in any storm".to_owned(),
            hero_subtitle: "I help entrepreneurs break through overwhelm and fear of change, so you can move with \
                            clarity, courage, and calm."
                .to_owned(),
            features: vec![
                Feature {
                    icon: "target".to_owned(),
                    title: "Goals with a spine".to_owned(),
                    desc: "Yearly goals broken into 4 steps you can actually do.".to_owned(),
                },
                Feature {
                    icon: "heart-handshake".to_owned(),
                    title: "Resilient mindset".to_owned(),
                    desc: "Reframe setbacks into opportunities that fuel momentum.".to_owned(),
                },
                Feature {
                    icon: "calendar".to_owned(),
                    title: "Weekly rhythm".to_owned(),
                    desc: "Anchored routines to keep you consistent, not perfect.".to_owned(),
                },
                Feature {
                    icon: "book-open".to_owned(),
                    title: "Practical tools".to_owned(),
                    desc: "Workbooks, video modules, and checklists you’ll reuse.".to_owned(),
                },
            ],
            programs: vec![
                Program {
                    title: "4-Week Goal-Setting Accelerator".to_owned(),
                    subtitle: "Trust Your Wings Framework".to_owned(),
                    bullets: strings(&[
                        "Week 1: Health + Personal Growth",
                        "Week 2: Environment + Relationships",
                        "Week 3: Adventure + Spiritual",
                        "Week 4: Career + Financial",
                    ]),
                    cta: "Get the Accelerator".to_owned(),
                },
                Program {
                    title: "From Setback to Strength".to_owned(),
                    subtitle: "Mastering the Art of Mindset Shifts".to_owned(),
                    bullets: strings(&[
                        "Reframing tools for real life",
                        "Calm-under-pressure practices",
                        "Bounce-back planning",
                        "Workbook + video modules",
                    ]),
                    cta: "Join the Course".to_owned(),
                },
                Program {
                    title: "1:1 Coaching for Entrepreneurs".to_owned(),
                    subtitle: "Break through overwhelm, lead with calm".to_owned(),
                    bullets: strings(&[
                        "Weekly or bi-weekly sessions",
                        "Accountability + action plans",
                        "Message support between sessions",
                        "Custom tools for your business",
                    ]),
                    cta: "Apply for Coaching".to_owned(),
                },
            ],
            talks: vec![
                Talk {
                    title: "Anchor Yourself in Any Storm".to_owned(),
                    desc: "Practical anchors for uncertainty and change.".to_owned(),
                },
                Talk {
                    title: "From Mask to Mastery".to_owned(),
                    desc: "Courage, vulnerability, and leadership without burnout.".to_owned(),
                },
                Talk {
                    title: "Trust Your Wings".to_owned(),
                    desc: "Build belief, set bold goals, take the first step.".to_owned(),
                },
            ],
            resources: vec![
                Resource {
                    title: "Morning Anchor Routine".to_owned(),
                    desc: "5-minute reset to meet the day with calm.".to_owned(),
                    href: String::new(),
                },
                Resource {
                    title: "Reframe Cheatsheet".to_owned(),
                    desc: "Turn common setbacks into traction in 3 steps.".to_owned(),
                    href: String::new(),
                },
                Resource {
                    title: "Quarterly Goal Map".to_owned(),
                    desc: "Break big goals into weekly moves.".to_owned(),
                    href: String::new(),
                },
            ],
            testimonials: vec![
                Testimonial {
                    quote: "I stopped spiraling and started shipping. My team noticed the calm right away.".to_owned(),
                    name: "A. Nguyen".to_owned(),
                    role: "Startup Founder".to_owned(),
                },
                Testimonial {
                    quote: "The 4-step goals changed how I plan my week. I actually finish what matters.".to_owned(),
                    name: "M. Singh".to_owned(),
                    role: "Realtor".to_owned(),
                },
                Testimonial {
                    quote: "Lucas helped me turn a painful setback into a defining win. Life-changing.".to_owned(),
                    name: "J. Garcia".to_owned(),
                    role: "Entrepreneur".to_owned(),
                },
            ],
            bio: Bio {
                heading: "My Story".to_owned(),
                teaser: "Coaching grew out of the storms I had to learn to stand in myself.".to_owned(),
                paragraphs: strings(&[
                    "I spent years running on overwhelm: building a business, saying yes to everything, and \
                     calling the exhaustion ambition.",
                    "A hard setback forced me to stop and rebuild from the inside out. The tools I leaned on were \
                     simple: clear yearly goals, a weekly rhythm, and the habit of being kind to myself when things \
                     went sideways.",
                    "Today I help entrepreneurs find that same anchor, so change stops feeling like a threat and \
                     starts feeling like a direction.",
                ]),
            },
            copyright_year: None,
        }
    }
}
