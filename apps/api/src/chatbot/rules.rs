//! Intent routing for the chatbot.
//!
//! Rules are tried top to bottom and the first one that answers wins. A rule answers when
//! its trigger fires and its reply function returns text; a reply may decline with `None`,
//! in which case evaluation moves on to the next rule. The last rule always answers.

use serde::Serialize;

use crate::chatbot::query::{
    branch_mentioned_in, branch_named_in, branches_referenced, first_two_distinct, Query,
};
use crate::chatbot::replies;
use crate::models::catalog::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Help,
    Placement,
    Salary,
    Future,
    Skill,
    Course,
    Project,
    Compare,
    BranchProfile,
    Fallback,
}

enum Trigger {
    /// Any listed keyword anywhere in the input.
    Substrings(&'static [&'static str]),
    /// Any branch name or code anywhere in the input.
    BranchMention,
    Always,
}

impl Trigger {
    fn fires(&self, query: &Query, catalog: &Catalog) -> bool {
        match self {
            Trigger::Substrings(needles) => query.contains_any(needles),
            Trigger::BranchMention => branch_mentioned_in(query, &catalog.branches).is_some(),
            Trigger::Always => true,
        }
    }
}

type ReplyFn = fn(&Query, &Catalog) -> Option<String>;

struct Rule {
    intent: Intent,
    trigger: Trigger,
    reply: ReplyFn,
}

// Compare sits ahead of the branch profile: any input naming two branches also names one.
const RULES: &[Rule] = &[
    Rule {
        intent: Intent::Greeting,
        trigger: Trigger::Substrings(&["hi", "hello", "hey", "greetings"]),
        reply: |_, _| Some(replies::GREETING.to_string()),
    },
    Rule {
        intent: Intent::Help,
        trigger: Trigger::Substrings(&["help"]),
        reply: |_, _| Some(replies::HELP.to_string()),
    },
    Rule {
        intent: Intent::Placement,
        trigger: Trigger::Substrings(&["placement"]),
        reply: |_, catalog| Some(replies::placement_rates(catalog)),
    },
    Rule {
        intent: Intent::Salary,
        trigger: Trigger::Substrings(&["salary", "package"]),
        reply: |_, catalog| Some(replies::salary_packages(catalog)),
    },
    Rule {
        intent: Intent::Future,
        trigger: Trigger::Substrings(&["future", "trend", "growing"]),
        reply: |_, catalog| Some(replies::future_trends(catalog)),
    },
    Rule {
        intent: Intent::Skill,
        trigger: Trigger::Substrings(&["skill"]),
        reply: |_, catalog| Some(replies::future_skills(catalog)),
    },
    Rule {
        intent: Intent::Course,
        trigger: Trigger::Substrings(&["course"]),
        reply: |query, catalog| {
            Some(match branch_named_in(query, &catalog.branches) {
                Some(branch) => replies::branch_courses(catalog, branch),
                None => replies::popular_courses(catalog),
            })
        },
    },
    Rule {
        intent: Intent::Project,
        trigger: Trigger::Substrings(&["project"]),
        reply: |query, catalog| {
            Some(match branch_named_in(query, &catalog.branches) {
                Some(branch) => replies::branch_projects(catalog, branch),
                None => replies::project_overview(catalog),
            })
        },
    },
    Rule {
        intent: Intent::Compare,
        trigger: Trigger::Substrings(&["compare"]),
        reply: |query, catalog| {
            let referenced = branches_referenced(query, &catalog.branches);
            let (first, second) = first_two_distinct(&referenced)?;
            Some(replies::comparison(first, second))
        },
    },
    Rule {
        intent: Intent::BranchProfile,
        trigger: Trigger::BranchMention,
        reply: |query, catalog| {
            branch_mentioned_in(query, &catalog.branches).map(replies::branch_profile)
        },
    },
    Rule {
        intent: Intent::Fallback,
        trigger: Trigger::Always,
        reply: |_, _| Some(replies::FALLBACK.to_string()),
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub intent: Intent,
    pub text: String,
}

/// Routes `raw_input` to the first rule that answers it.
pub fn route(catalog: &Catalog, raw_input: &str) -> Reply {
    let query = Query::parse(raw_input);
    RULES
        .iter()
        .filter(|rule| rule.trigger.fires(&query, catalog))
        .find_map(|rule| {
            (rule.reply)(&query, catalog).map(|text| Reply {
                intent: rule.intent,
                text,
            })
        })
        .unwrap_or_else(|| Reply {
            intent: Intent::Fallback,
            text: replies::FALLBACK.to_string(),
        })
}

/// Chatbot answer for `raw_input`. Never fails; unknown input gets the fallback text.
pub fn respond(catalog: &Catalog, raw_input: &str) -> String {
    route(catalog, raw_input).text
}
