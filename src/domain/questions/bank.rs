//! The static question bank, one section per assessment phase.
//!
//! Declaration order within the bank is the raw presentation order the
//! sequencer starts from; ties in computed priority fall back to it.

use once_cell::sync::Lazy;

use crate::domain::archetype::FounderArchetype;
use crate::domain::foundation::{AssessmentPhase, DeclaredPriority, QuestionId};

use super::question::{Question, QuestionOption};
use super::QuestionType;

/// Returns every question in the bank, in declaration order.
pub fn question_bank() -> &'static [Question] {
    &QUESTION_BANK
}

/// Returns the bank questions belonging to one phase, in declaration order.
pub fn questions_for_phase(phase: AssessmentPhase) -> Vec<&'static Question> {
    QUESTION_BANK.iter().filter(|q| q.phase == phase).collect()
}

/// Looks up a bank question by id.
pub fn find_question(id: &QuestionId) -> Option<&'static Question> {
    QUESTION_BANK.iter().find(|q| &q.id == id)
}

fn qid(id: &str) -> QuestionId {
    QuestionId::new(id).expect("bank question ids are non-empty")
}

static QUESTION_BANK: Lazy<Vec<Question>> = Lazy::new(|| {
    use AssessmentPhase::*;
    use FounderArchetype::*;

    vec![
        // --- Self discovery ---
        Question::new(
            qid("motivation"),
            SelfDiscovery,
            "What drives you to start a venture?",
            QuestionType::MultipleChoice,
        )
        .required()
        .with_priority(DeclaredPriority::Critical)
        .with_options(vec![
            QuestionOption::new("build_something_new", "Build something new")
                .with_implications([Builder]),
            QuestionOption::new("change_an_industry", "Change how an industry works")
                .with_implications([Visionary]),
            QuestionOption::new("financial_independence", "Reach financial independence")
                .with_implications([Operator]),
            QuestionOption::new("master_a_craft", "Go deep on a craft or domain")
                .with_implications([Analyst]),
        ]),
        Question::new(
            qid("risk_tolerance"),
            SelfDiscovery,
            "How comfortable are you with financial uncertainty? (1 = not at all, 10 = fully)",
            QuestionType::Scale,
        )
        .required()
        .with_priority(DeclaredPriority::High),
        Question::new(
            qid("work_experience"),
            SelfDiscovery,
            "Summarize your professional experience so far.",
            QuestionType::Textarea,
        ),
        Question::new(
            qid("industry_experience"),
            SelfDiscovery,
            "Which industry do you know best?",
            QuestionType::PrePopulated,
        )
        .with_priority(DeclaredPriority::High),
        Question::new(
            qid("skills_inventory"),
            SelfDiscovery,
            "Which working styles feel most natural to you?",
            QuestionType::Consolidated,
        )
        .with_dependencies([qid("work_experience")])
        .with_options(vec![
            QuestionOption::new("prototyping", "Prototyping and making")
                .with_implications([Builder]),
            QuestionOption::new("spreadsheet_modeling", "Modeling and analysis")
                .with_implications([Analyst]),
            QuestionOption::new("process_design", "Process and operations design")
                .with_implications([Operator]),
            QuestionOption::new("storytelling", "Storytelling and persuasion")
                .with_implications([Visionary]),
        ]),
        // --- Idea discovery ---
        Question::new(
            qid("business_idea_clarity"),
            IdeaDiscovery,
            "How well-formed is your business idea today?",
            QuestionType::MultipleChoice,
        )
        .required()
        .with_priority(DeclaredPriority::Critical)
        .with_options(vec![
            QuestionOption::new("clear_idea", "I have a clear, specific idea")
                .with_implications([Builder]),
            QuestionOption::new("rough_concept", "I have a rough concept")
                .with_implications([Visionary]),
            QuestionOption::new("exploring_options", "I'm exploring several directions")
                .with_implications([Analyst]),
            QuestionOption::new("no_idea", "I don't have an idea yet"),
        ]),
        Question::new(
            qid("idea_validation_experience"),
            IdeaDiscovery,
            "What have you done so far to validate the idea?",
            QuestionType::Textarea,
        )
        .with_dependencies([qid("business_idea_clarity")]),
        Question::new(
            qid("problem_space"),
            IdeaDiscovery,
            "What problem does your idea address, and for whom?",
            QuestionType::Textarea,
        )
        .with_priority(DeclaredPriority::High)
        .with_dependencies([qid("business_idea_clarity")]),
        Question::new(
            qid("unique_value_proposition"),
            IdeaDiscovery,
            "Why would customers pick your solution over the alternatives?",
            QuestionType::Textarea,
        )
        .with_dependencies([qid("business_idea_clarity"), qid("problem_space")]),
        // --- Market research ---
        Question::new(
            qid("target_market_definition"),
            MarketResearch,
            "Describe your target market as precisely as you can.",
            QuestionType::Textarea,
        )
        .required()
        .with_priority(DeclaredPriority::Critical),
        Question::new(
            qid("market_segment"),
            MarketResearch,
            "Which market segment are you entering?",
            QuestionType::PrePopulated,
        ),
        Question::new(
            qid("competitor_awareness"),
            MarketResearch,
            "Which competitors are you aware of?",
            QuestionType::Textarea,
        ),
        Question::new(
            qid("market_size_estimate"),
            MarketResearch,
            "Roughly how large is the market you're addressing?",
            QuestionType::Text,
        )
        .with_priority(DeclaredPriority::Low)
        .with_dependencies([qid("target_market_definition")]),
        // --- Business pillars ---
        Question::new(
            qid("revenue_model"),
            BusinessPillars,
            "How will the business earn money?",
            QuestionType::MultipleChoice,
        )
        .required()
        .with_priority(DeclaredPriority::Critical)
        .with_options(vec![
            QuestionOption::new("subscription", "Recurring subscriptions")
                .with_implications([Operator]),
            QuestionOption::new("one_time_sales", "One-time product sales")
                .with_implications([Builder]),
            QuestionOption::new("advertising", "Advertising and sponsorship")
                .with_implications([Visionary]),
            QuestionOption::new("licensing", "Licensing and royalties")
                .with_implications([Analyst]),
        ]),
        Question::new(
            qid("revenue_streams_existing"),
            BusinessPillars,
            "List any revenue streams you already have.",
            QuestionType::PrePopulated,
        ),
        Question::new(
            qid("funding_approach"),
            BusinessPillars,
            "How do you plan to fund the venture?",
            QuestionType::MultipleChoice,
        )
        .with_priority(DeclaredPriority::High)
        .with_options(vec![
            QuestionOption::new("bootstrap", "Bootstrap from revenue")
                .with_implications([Operator]),
            QuestionOption::new("angel_investment", "Angel investment")
                .with_implications([Builder]),
            QuestionOption::new("venture_capital", "Venture capital")
                .with_implications([Visionary]),
            QuestionOption::new("grants", "Grants and competitions")
                .with_implications([Analyst]),
        ]),
        Question::new(
            qid("team_status"),
            BusinessPillars,
            "Where does your founding team stand?",
            QuestionType::MultipleChoice,
        )
        .with_options(vec![
            QuestionOption::new("solo", "Solo founder"),
            QuestionOption::new("searching_cofounder", "Searching for a co-founder"),
            QuestionOption::new("team_formed", "Founding team in place"),
        ]),
        Question::new(
            qid("monthly_burn_rate"),
            BusinessPillars,
            "What is your current monthly spend, if any?",
            QuestionType::PrePopulated,
        )
        .with_priority(DeclaredPriority::Low),
        // --- Prototype testing ---
        Question::new(
            qid("prototype_status"),
            PrototypeTesting,
            "How far along is your prototype?",
            QuestionType::MultipleChoice,
        )
        .required()
        .with_priority(DeclaredPriority::Critical)
        .with_options(vec![
            QuestionOption::new("not_started", "Not started"),
            QuestionOption::new("wireframes", "Wireframes or mockups")
                .with_implications([Visionary]),
            QuestionOption::new("working_prototype", "Working prototype")
                .with_implications([Builder]),
            QuestionOption::new("live_product", "Live product with users")
                .with_implications([Operator]),
        ]),
        Question::new(
            qid("user_feedback_collected"),
            PrototypeTesting,
            "What feedback have you collected from real users?",
            QuestionType::Textarea,
        )
        .with_dependencies([qid("prototype_status")]),
        Question::new(
            qid("traffic_baseline"),
            PrototypeTesting,
            "What monthly traffic or usage does your product see today?",
            QuestionType::PrePopulated,
        )
        .with_priority(DeclaredPriority::Low),
        Question::new(
            qid("iteration_cadence"),
            PrototypeTesting,
            "How often do you ship changes based on what you learn?",
            QuestionType::MultipleChoice,
        )
        .with_priority(DeclaredPriority::Low)
        .with_dependencies([qid("prototype_status"), qid("user_feedback_collected")])
        .with_options(vec![
            QuestionOption::new("weekly", "Weekly or faster"),
            QuestionOption::new("monthly", "Monthly"),
            QuestionOption::new("rarely", "Rarely or not yet"),
        ]),
    ]
});
