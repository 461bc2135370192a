//! Goal classification and the static task template table.
//!
//! Each [`Category`] carries a hand-authored [`Template`]: an ordered list
//! of baseline tasks with hour estimates, priorities, and a fixed
//! dependency table of earlier task indices. Classification is
//! case-insensitive substring matching over per-category keyword lists,
//! checked in declaration order with first match winning.

use serde::{Deserialize, Serialize};

use crate::models::Priority;

/// Goal categories recognized by the plan generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MobileApp,
    Learning,
    EventPlanning,
    BusinessStartup,
    ProductLaunch,
    /// Fallback for goals matching no keyword list.
    General,
}

const MOBILE_APP_KEYWORDS: &[&str] = &["app", "mobile", "ios", "android", "react native"];
const LEARNING_KEYWORDS: &[&str] = &["learn", "study", "course", "tutorial", "skill"];
const EVENT_PLANNING_KEYWORDS: &[&str] = &["event", "party", "conference", "meeting", "gathering"];
const BUSINESS_STARTUP_KEYWORDS: &[&str] = &["business", "startup", "company", "entrepreneur"];
const PRODUCT_LAUNCH_KEYWORDS: &[&str] = &["launch", "product", "release", "deploy"];

impl Category {
    /// Classify a goal (and optional context) into a category.
    ///
    /// Matching is case-insensitive substring search. The keyword lists are
    /// checked in a fixed order and the first list with a hit wins, so a
    /// goal mentioning both "app" and "business" classifies as a mobile app
    /// project. Unmatched text falls back to [`Category::General`].
    pub fn classify(goal: &str, context: Option<&str>) -> Self {
        let text = match context {
            Some(context) => format!("{goal} {context}").to_lowercase(),
            None => goal.to_lowercase(),
        };

        let checks: &[(&[&str], Category)] = &[
            (MOBILE_APP_KEYWORDS, Category::MobileApp),
            (LEARNING_KEYWORDS, Category::Learning),
            (EVENT_PLANNING_KEYWORDS, Category::EventPlanning),
            (BUSINESS_STARTUP_KEYWORDS, Category::BusinessStartup),
            (PRODUCT_LAUNCH_KEYWORDS, Category::ProductLaunch),
        ];

        for (keywords, category) in checks {
            if keywords.iter().any(|keyword| text.contains(keyword)) {
                return *category;
            }
        }

        Category::General
    }

    /// Human-readable name used in rationale text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::MobileApp => "mobile app",
            Category::Learning => "learning",
            Category::EventPlanning => "event planning",
            Category::BusinessStartup => "business startup",
            Category::ProductLaunch => "product launch",
            Category::General => "general",
        }
    }

    /// The fixed task template for this category.
    pub fn template(&self) -> &'static Template {
        match self {
            Category::MobileApp => &MOBILE_APP,
            Category::Learning => &LEARNING,
            Category::EventPlanning => &EVENT_PLANNING,
            Category::BusinessStartup => &BUSINESS_STARTUP,
            Category::ProductLaunch => &PRODUCT_LAUNCH,
            Category::General => &GENERAL,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A fixed, ordered task breakdown for one goal category.
#[derive(Debug)]
pub struct Template {
    /// Timeline the baseline hour estimates assume, in weeks.
    pub reference_weeks: u32,
    pub tasks: &'static [TemplateTask],
}

/// One baseline task within a template.
#[derive(Debug)]
pub struct TemplateTask {
    pub title: &'static str,
    /// Baseline effort assuming the template's reference timeline.
    pub hours: u32,
    pub priority: Priority,
    /// Indices of earlier template tasks this task depends on.
    pub depends_on: &'static [usize],
}

const fn task(
    title: &'static str,
    hours: u32,
    priority: Priority,
    depends_on: &'static [usize],
) -> TemplateTask {
    TemplateTask {
        title,
        hours,
        priority,
        depends_on,
    }
}

static PRODUCT_LAUNCH: Template = Template {
    reference_weeks: 8,
    tasks: &[
        task("Market Research and Analysis", 16, Priority::High, &[]),
        task("Define Product Requirements", 12, Priority::High, &[0]),
        task("Create Project Timeline", 4, Priority::High, &[1]),
        task("Set up Development Environment", 8, Priority::High, &[2]),
        task("Design User Interface", 20, Priority::Medium, &[3]),
        task("Implement Core Features", 40, Priority::High, &[4]),
        task("Write Unit Tests", 16, Priority::Medium, &[5]),
        task("Integration Testing", 12, Priority::Medium, &[3, 5, 6]),
        task("User Acceptance Testing", 8, Priority::Medium, &[3, 5, 7]),
        task("Deploy to Production", 8, Priority::High, &[6, 7, 8]),
        task("Create Documentation", 12, Priority::Low, &[9]),
        task("Marketing and Promotion", 16, Priority::Medium, &[10]),
    ],
};

static LEARNING: Template = Template {
    reference_weeks: 12,
    tasks: &[
        task("Research Learning Resources", 4, Priority::High, &[]),
        task("Set Learning Goals", 2, Priority::High, &[0]),
        task("Create Study Schedule", 2, Priority::High, &[1]),
        task("Complete Basic Tutorials", 16, Priority::High, &[2]),
        task("Practice with Small Projects", 24, Priority::Medium, &[3]),
        task("Join Learning Community", 4, Priority::Low, &[4]),
        task("Build Portfolio Project", 32, Priority::Medium, &[5]),
        task("Seek Feedback and Mentorship", 8, Priority::Medium, &[6]),
        task("Advanced Practice", 20, Priority::Medium, &[7]),
        task("Document Learning Journey", 4, Priority::Low, &[8]),
    ],
};

static EVENT_PLANNING: Template = Template {
    reference_weeks: 6,
    tasks: &[
        task("Define Event Objectives", 4, Priority::High, &[]),
        task("Set Budget and Timeline", 4, Priority::High, &[0]),
        task("Choose Venue and Date", 8, Priority::High, &[1]),
        task("Create Guest List", 4, Priority::Medium, &[2]),
        task("Send Invitations", 4, Priority::Medium, &[3]),
        task("Plan Activities and Agenda", 12, Priority::Medium, &[4]),
        task("Arrange Catering", 6, Priority::Medium, &[5]),
        task("Set up Equipment and Decorations", 8, Priority::Low, &[6]),
        task("Coordinate with Vendors", 6, Priority::Medium, &[7]),
        task("Final Preparations", 4, Priority::High, &[8]),
        task("Execute Event", 8, Priority::High, &[9]),
        task("Follow-up and Feedback", 4, Priority::Low, &[10]),
    ],
};

static BUSINESS_STARTUP: Template = Template {
    reference_weeks: 12,
    tasks: &[
        task("Market Research and Validation", 20, Priority::High, &[]),
        task("Create Business Plan", 16, Priority::High, &[0]),
        task("Register Business Entity", 4, Priority::High, &[1]),
        task("Set up Financial Systems", 8, Priority::High, &[2]),
        task("Develop Minimum Viable Product", 60, Priority::High, &[3]),
        task("Build Brand Identity", 12, Priority::Medium, &[4]),
        task("Create Marketing Strategy", 16, Priority::Medium, &[5]),
        task("Launch Website", 20, Priority::Medium, &[6]),
        task("Find First Customers", 24, Priority::High, &[7]),
        task("Gather Customer Feedback", 8, Priority::Medium, &[8]),
        task("Iterate and Improve", 20, Priority::Medium, &[9]),
        task("Scale Operations", 32, Priority::Low, &[10]),
    ],
};

static MOBILE_APP: Template = Template {
    reference_weeks: 10,
    tasks: &[
        task("Define App Requirements", 8, Priority::High, &[]),
        task("Create Wireframes and Mockups", 16, Priority::High, &[0]),
        task("Set up Development Environment", 6, Priority::High, &[1]),
        task("Implement User Authentication", 12, Priority::High, &[2]),
        task("Develop Core Features", 40, Priority::High, &[3]),
        task("Integrate APIs and Backend", 20, Priority::Medium, &[4]),
        task("Implement UI/UX Design", 24, Priority::Medium, &[5]),
        task("Testing and Bug Fixes", 16, Priority::Medium, &[2, 3, 4, 6]),
        task("Performance Optimization", 12, Priority::Medium, &[7]),
        task("Prepare for App Store", 8, Priority::High, &[8]),
        task("Submit for Review", 2, Priority::High, &[9]),
        task("Launch and Marketing", 16, Priority::Medium, &[10]),
    ],
};

static GENERAL: Template = Template {
    reference_weeks: 4,
    tasks: &[
        task("Clarify Objectives and Scope", 4, Priority::High, &[]),
        task("Research Background and Constraints", 8, Priority::High, &[0]),
        task("Draft an Action Plan", 4, Priority::High, &[1]),
        task("Gather Tools and Resources", 6, Priority::Medium, &[2]),
        task("Produce an Initial Version", 16, Priority::High, &[3]),
        task("Review and Refine", 8, Priority::Medium, &[4]),
        task("Complete the Remaining Work", 16, Priority::High, &[5]),
        task("Validate the Results", 8, Priority::Medium, &[6]),
        task("Finalize and Share", 4, Priority::High, &[7]),
        task("Capture Lessons Learned", 2, Priority::Low, &[8]),
    ],
};
