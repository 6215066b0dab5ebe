//! The page document: sections, cards, and their row layout.
//!
//! [`compose`] turns the config into a flat list of [`PageRow`]s plus the
//! row spans of every section and reveal target. Rendering walks the rows;
//! the reveal engine walks the spans. Target identities come from the full
//! (unfiltered) [`Catalog`], so a card keeps its id, and its one-shot
//! revealed state, across filter changes and resizes.

mod wrap;

pub use wrap::wrap;

use crate::config::{Config, Skill};
use crate::engine::reveal::{RevealKind, RevealTarget, TargetId};
use crate::engine::viewport::RowSpan;

/// Fixed order of page sections, mirrored by the nav header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }
}

/// Current skills filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SkillFilter {
    #[default]
    All,
    Category(String),
}

impl SkillFilter {
    pub fn matches(&self, skill: &Skill) -> bool {
        match self {
            SkillFilter::All => true,
            SkillFilter::Category(category) => &skill.category == category,
        }
    }

    /// Advances through All, then each category in order, wrapping.
    pub fn next(&self, categories: &[String]) -> SkillFilter {
        match self {
            SkillFilter::All => match categories.first() {
                Some(first) => SkillFilter::Category(first.clone()),
                None => SkillFilter::All,
            },
            SkillFilter::Category(current) => {
                let pos = categories.iter().position(|c| c == current);
                match pos {
                    Some(i) if i + 1 < categories.len() => {
                        SkillFilter::Category(categories[i + 1].clone())
                    }
                    _ => SkillFilter::All,
                }
            }
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SkillFilter::All => "All",
            SkillFilter::Category(category) => category,
        }
    }
}

/// How a row should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    Blank,
    HeroName,
    HeroTitle,
    /// Text comes from the typewriter engine at draw time.
    Typewriter,
    Heading,
    Text,
    /// Hidden (drawn blank) until the target fades in.
    Card { target: TargetId },
    /// Skill bar. Hidden until `fade` reveals; fill tracked under `progress`.
    Bar { fade: TargetId, progress: TargetId },
    Filter,
    Hint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRow {
    pub kind: RowKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    pub id: SectionId,
    pub span: RowSpan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetLayout {
    pub target: RevealTarget,
    pub span: RowSpan,
}

/// A fully laid-out page at one width and filter.
#[derive(Debug, Clone)]
pub struct Page {
    pub rows: Vec<PageRow>,
    pub sections: Vec<SectionLayout>,
    pub targets: Vec<TargetLayout>,
}

impl Page {
    pub fn total_rows(&self) -> u16 {
        self.rows.len().min(u16::MAX as usize) as u16
    }

    /// Section under the activation line (a few rows below the top of the
    /// viewport, like the original's scroll offset allowance).
    pub fn active_section(&self, scroll: u16) -> SectionId {
        let probe = scroll.saturating_add(3);
        self.sections
            .iter()
            .rev()
            .find(|s| s.span.top <= probe)
            .map(|s| s.id)
            .unwrap_or(SectionId::Hero)
    }

    pub fn section_top(&self, id: SectionId) -> u16 {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.span.top)
            .unwrap_or(0)
    }

    /// Spans of currently laid-out targets, in document order.
    pub fn target_spans(&self) -> Vec<(TargetId, RowSpan)> {
        self.targets
            .iter()
            .map(|t| (t.target.id, t.span))
            .collect()
    }
}

/// Stable target-id assignment over the full config, independent of the
/// active filter. Fades and bars for the same skill get distinct ids.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    highlights: u32,
    stats: u32,
    skills: u32,
    projects: u32,
}

impl Catalog {
    pub fn new(config: &Config) -> Self {
        Self {
            highlights: config.about.highlights.len() as u32,
            stats: config.about.stats.len() as u32,
            skills: config.skills.len() as u32,
            projects: config.projects.len() as u32,
        }
    }

    pub fn highlight_id(&self, i: usize) -> TargetId {
        TargetId(i as u32)
    }

    pub fn stat_id(&self, i: usize) -> TargetId {
        TargetId(self.highlights + i as u32)
    }

    pub fn skill_fade_id(&self, i: usize) -> TargetId {
        TargetId(self.highlights + self.stats + i as u32)
    }

    pub fn skill_bar_id(&self, i: usize) -> TargetId {
        TargetId(self.highlights + self.stats + self.skills + i as u32)
    }

    pub fn project_id(&self, i: usize) -> TargetId {
        TargetId(self.highlights + self.stats + 2 * self.skills + i as u32)
    }

    pub fn experience_id(&self, i: usize) -> TargetId {
        TargetId(self.highlights + self.stats + 2 * self.skills + self.projects + i as u32)
    }

    /// Every fade target on the page, for initial observation.
    pub fn fade_targets(&self, config: &Config) -> Vec<RevealTarget> {
        let mut targets = Vec::new();
        for i in 0..config.about.highlights.len() {
            targets.push(RevealTarget {
                id: self.highlight_id(i),
                kind: RevealKind::Fade,
            });
        }
        for i in 0..config.about.stats.len() {
            targets.push(RevealTarget {
                id: self.stat_id(i),
                kind: RevealKind::Fade,
            });
        }
        for i in 0..config.skills.len() {
            targets.push(RevealTarget {
                id: self.skill_fade_id(i),
                kind: RevealKind::Fade,
            });
        }
        for i in 0..config.projects.len() {
            targets.push(RevealTarget {
                id: self.project_id(i),
                kind: RevealKind::Fade,
            });
        }
        for i in 0..config.experience.len() {
            targets.push(RevealTarget {
                id: self.experience_id(i),
                kind: RevealKind::Fade,
            });
        }
        targets
    }

    /// Every progress target on the page. A skill without a configured
    /// level gets a defined fill of 0 rather than anything undefined.
    pub fn progress_targets(&self, config: &Config) -> Vec<RevealTarget> {
        config
            .skills
            .iter()
            .enumerate()
            .map(|(i, skill)| RevealTarget {
                id: self.skill_bar_id(i),
                kind: RevealKind::Progress {
                    target: skill.level.unwrap_or(0).min(100),
                },
            })
            .collect()
    }
}

struct PageBuilder {
    rows: Vec<PageRow>,
    sections: Vec<SectionLayout>,
    targets: Vec<TargetLayout>,
    section_start: u16,
}

impl PageBuilder {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            sections: Vec::new(),
            targets: Vec::new(),
            section_start: 0,
        }
    }

    fn row(&mut self) -> u16 {
        self.rows.len().min(u16::MAX as usize) as u16
    }

    fn push(&mut self, kind: RowKind, text: impl Into<String>) {
        self.rows.push(PageRow {
            kind,
            text: text.into(),
        });
    }

    fn blank(&mut self) {
        self.push(RowKind::Blank, "");
    }

    fn heading(&mut self, title: &str) {
        self.push(RowKind::Heading, title);
        self.blank();
    }

    fn target(&mut self, target: RevealTarget, top: u16) {
        let height = self.row().saturating_sub(top);
        self.targets.push(TargetLayout {
            target,
            span: RowSpan::new(top, height),
        });
    }

    fn end_section(&mut self, id: SectionId) {
        let top = self.section_start;
        let height = self.row().saturating_sub(top);
        self.sections.push(SectionLayout {
            id,
            span: RowSpan::new(top, height),
        });
        self.section_start = self.row();
    }
}

/// Lays the page out at `width` columns under the given skills filter.
pub fn compose(config: &Config, filter: &SkillFilter, width: u16) -> Page {
    let catalog = Catalog::new(config);
    let text_width = usize::from(width.max(24)).saturating_sub(4);
    let mut b = PageBuilder::new();

    // Hero
    b.blank();
    b.push(RowKind::HeroName, config.profile.name.clone());
    b.push(RowKind::HeroTitle, config.profile.title.clone());
    b.blank();
    b.push(RowKind::Typewriter, "");
    b.blank();
    b.end_section(SectionId::Hero);

    // About
    b.heading("About");
    for paragraph in &config.about.paragraphs {
        for line in wrap(paragraph, text_width) {
            b.push(RowKind::Text, line);
        }
        b.blank();
    }
    for (i, highlight) in config.about.highlights.iter().enumerate() {
        let id = catalog.highlight_id(i);
        let top = b.row();
        b.push(
            RowKind::Card { target: id },
            format!("▸ {}", highlight.title),
        );
        b.push(RowKind::Card { target: id }, format!("  {}", highlight.detail));
        b.target(
            RevealTarget {
                id,
                kind: RevealKind::Fade,
            },
            top,
        );
        b.blank();
    }
    for (i, stat) in config.about.stats.iter().enumerate() {
        let id = catalog.stat_id(i);
        let top = b.row();
        b.push(
            RowKind::Card { target: id },
            format!("{:>4}  {}", stat.value, stat.label),
        );
        b.target(
            RevealTarget {
                id,
                kind: RevealKind::Fade,
            },
            top,
        );
    }
    if !config.about.stats.is_empty() {
        b.blank();
    }
    b.end_section(SectionId::About);

    // Skills
    b.heading("Skills");
    b.push(RowKind::Filter, filter.label().to_string());
    b.blank();
    for (i, skill) in config.skills.iter().enumerate() {
        if !filter.matches(skill) {
            continue;
        }
        let fade = catalog.skill_fade_id(i);
        let bar = catalog.skill_bar_id(i);
        let top = b.row();
        let label = if skill.category.is_empty() {
            skill.name.clone()
        } else {
            format!("{}  · {}", skill.name, skill.category)
        };
        b.push(RowKind::Card { target: fade }, label);
        b.push(
            RowKind::Bar {
                fade,
                progress: bar,
            },
            "",
        );
        b.target(
            RevealTarget {
                id: fade,
                kind: RevealKind::Fade,
            },
            top,
        );
        b.target(
            RevealTarget {
                id: bar,
                kind: RevealKind::Progress {
                    target: skill.level.unwrap_or(0).min(100),
                },
            },
            top,
        );
        b.blank();
    }
    b.end_section(SectionId::Skills);

    // Projects
    b.heading("Projects");
    for (i, project) in config.projects.iter().enumerate() {
        let id = catalog.project_id(i);
        let top = b.row();
        b.push(RowKind::Card { target: id }, project.name.clone());
        for line in wrap(&project.summary, text_width) {
            b.push(RowKind::Card { target: id }, format!("  {line}"));
        }
        let mut tech_line = project.tech.join(" · ");
        if let Some(link) = &project.link {
            if !tech_line.is_empty() {
                tech_line.push_str("  ");
            }
            tech_line.push_str(link);
        }
        if !tech_line.is_empty() {
            b.push(RowKind::Card { target: id }, format!("  {tech_line}"));
        }
        b.target(
            RevealTarget {
                id,
                kind: RevealKind::Fade,
            },
            top,
        );
        b.blank();
    }
    b.end_section(SectionId::Projects);

    // Experience
    b.heading("Experience");
    for (i, exp) in config.experience.iter().enumerate() {
        let id = catalog.experience_id(i);
        let top = b.row();
        b.push(
            RowKind::Card { target: id },
            format!("{} @ {}", exp.role, exp.company),
        );
        b.push(RowKind::Card { target: id }, format!("  {}", exp.period));
        if !exp.summary.is_empty() {
            for line in wrap(&exp.summary, text_width) {
                b.push(RowKind::Card { target: id }, format!("  {line}"));
            }
        }
        b.target(
            RevealTarget {
                id,
                kind: RevealKind::Fade,
            },
            top,
        );
        b.blank();
    }
    b.end_section(SectionId::Experience);

    // Contact
    b.heading("Contact");
    b.push(RowKind::Text, format!("Email   {}", config.profile.email));
    if !config.profile.github.is_empty() {
        b.push(RowKind::Text, format!("GitHub  {}", config.profile.github));
    }
    b.blank();
    b.push(RowKind::Hint, "c: send a message    y: copy email address");
    b.blank();
    b.end_section(SectionId::Contact);

    Page {
        rows: b.rows,
        sections: b.sections,
        targets: b.targets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_tile_the_document() {
        let config = Config::default();
        let page = compose(&config, &SkillFilter::All, 80);
        let mut expected_top = 0;
        for section in &page.sections {
            assert_eq!(section.span.top, expected_top);
            expected_top = section.span.bottom();
        }
        assert_eq!(expected_top, page.total_rows());
    }

    #[test]
    fn filter_hides_other_categories() {
        let config = Config::default();
        let all = compose(&config, &SkillFilter::All, 80);
        let backend = compose(
            &config,
            &SkillFilter::Category("backend".to_string()),
            80,
        );
        assert!(backend.total_rows() < all.total_rows());
    }

    #[test]
    fn target_ids_are_stable_across_filters() {
        let config = Config::default();
        let catalog = Catalog::new(&config);
        let all = compose(&config, &SkillFilter::All, 80);
        let tooling = compose(
            &config,
            &SkillFilter::Category("tooling".to_string()),
            80,
        );
        // "Terminal UIs" is the third configured skill.
        let id = catalog.skill_fade_id(2);
        assert!(all.targets.iter().any(|t| t.target.id == id));
        assert!(tooling.targets.iter().any(|t| t.target.id == id));
    }

    #[test]
    fn filter_cycle_wraps_back_to_all() {
        let categories = vec!["backend".to_string(), "tooling".to_string()];
        let mut filter = SkillFilter::All;
        filter = filter.next(&categories);
        assert_eq!(filter, SkillFilter::Category("backend".to_string()));
        filter = filter.next(&categories);
        assert_eq!(filter, SkillFilter::Category("tooling".to_string()));
        filter = filter.next(&categories);
        assert_eq!(filter, SkillFilter::All);
    }
}
