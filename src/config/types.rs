use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub profile: Profile,
    #[serde(default)]
    pub cadence: CadenceConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub about: AboutConfig,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub contact: ContactConfig,
}

/// Who the page is about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Short role line shown under the name.
    #[serde(default)]
    pub title: String,
    /// Phrases the hero tagline types and deletes, in order.
    pub phrases: Vec<String>,
    pub email: String,
    #[serde(default)]
    pub github: String,
}

/// Typewriter step delays, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CadenceConfig {
    /// Delay after typing one character.
    #[serde(default = "default_type_ms")]
    pub type_ms: u64,
    /// Delay after deleting one character.
    #[serde(default = "default_delete_ms")]
    pub delete_ms: u64,
    /// Pause once a phrase is fully typed.
    #[serde(default = "default_hold_full_ms")]
    pub hold_full_ms: u64,
    /// Pause once a phrase is fully deleted, before the next one.
    #[serde(default = "default_hold_empty_ms")]
    pub hold_empty_ms: u64,
}

/// Scroll-reveal trigger tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Fraction of a card's rows that must be visible for a fade-in.
    /// Deliberately low so fades start early, slightly ahead of the card.
    #[serde(default = "default_fade_threshold")]
    pub fade_threshold: f64,
    /// Rows shaved off the bottom of the viewport when testing fade targets.
    #[serde(default = "default_fade_bottom_inset")]
    pub fade_bottom_inset: u16,
    /// Fraction of a skill bar's rows that must be visible before it fills.
    /// Deliberately high so bars never animate off-screen.
    #[serde(default = "default_progress_threshold")]
    pub progress_threshold: f64,
    /// Per-card delay when several fades trigger in the same batch.
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AboutConfig {
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Filter category, e.g. "backend" or "tooling".
    #[serde(default)]
    pub category: String,
    /// Bar fill percentage, 0-100. Missing means the bar stays at 0.
    #[serde(default)]
    pub level: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub summary: String,
}

/// Email-delivery API settings for the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Where submitted messages end up.
    #[serde(default)]
    pub to_email: String,
    /// HTTP endpoint of the delivery service.
    #[serde(default = "default_contact_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
}

fn default_type_ms() -> u64 {
    100
}

fn default_delete_ms() -> u64 {
    50
}

fn default_hold_full_ms() -> u64 {
    2000
}

fn default_hold_empty_ms() -> u64 {
    500
}

fn default_fade_threshold() -> f64 {
    0.1
}

fn default_fade_bottom_inset() -> u16 {
    2
}

fn default_progress_threshold() -> f64 {
    0.5
}

fn default_stagger_ms() -> u64 {
    100
}

fn default_contact_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            type_ms: default_type_ms(),
            delete_ms: default_delete_ms(),
            hold_full_ms: default_hold_full_ms(),
            hold_empty_ms: default_hold_empty_ms(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            fade_threshold: default_fade_threshold(),
            fade_bottom_inset: default_fade_bottom_inset(),
            progress_threshold: default_progress_threshold(),
            stagger_ms: default_stagger_ms(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            to_email: String::new(),
            endpoint: default_contact_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
        }
    }
}

impl Config {
    /// Distinct skill categories in first-seen order, for the filter cycle.
    pub fn skill_categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for skill in &self.skills {
            if !skill.category.is_empty() && !seen.contains(&skill.category) {
                seen.push(skill.category.clone());
            }
        }
        seen
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Ada Example".to_string(),
                title: "Systems Engineer".to_string(),
                phrases: vec![
                    "Building robust backend services".to_string(),
                    "Shipping fast, reliable tooling".to_string(),
                    "Designing clean, typed APIs".to_string(),
                ],
                email: "ada@example.com".to_string(),
                github: "github.com/ada-example".to_string(),
            },
            cadence: CadenceConfig::default(),
            reveal: RevealConfig::default(),
            about: AboutConfig {
                paragraphs: vec![
                    "I build networked services and command-line tools, with a soft spot \
                     for anything that runs in a terminal."
                        .to_string(),
                ],
                highlights: vec![
                    Highlight {
                        title: "Open source".to_string(),
                        detail: "Maintainer of a handful of small crates".to_string(),
                    },
                    Highlight {
                        title: "Speaker".to_string(),
                        detail: "Occasional meetup talks on systems topics".to_string(),
                    },
                ],
                stats: vec![
                    Stat {
                        value: "8+".to_string(),
                        label: "years writing software".to_string(),
                    },
                    Stat {
                        value: "30+".to_string(),
                        label: "projects shipped".to_string(),
                    },
                ],
            },
            skills: vec![
                Skill {
                    name: "Rust".to_string(),
                    category: "backend".to_string(),
                    level: Some(90),
                },
                Skill {
                    name: "PostgreSQL".to_string(),
                    category: "backend".to_string(),
                    level: Some(75),
                },
                Skill {
                    name: "Terminal UIs".to_string(),
                    category: "tooling".to_string(),
                    level: Some(80),
                },
            ],
            projects: vec![Project {
                name: "folio".to_string(),
                summary: "This very page: a portfolio that lives in your terminal".to_string(),
                tech: vec!["rust".to_string(), "ratatui".to_string()],
                link: None,
            }],
            experience: vec![Experience {
                role: "Senior Engineer".to_string(),
                company: "Example Corp".to_string(),
                period: "2021 - now".to_string(),
                summary: "Backend services and internal developer tooling".to_string(),
            }],
            contact: ContactConfig::default(),
        }
    }
}
