//! Built-in agent kinds.

use ca_protocol::AgentCategory;

/// The closed set of agents shipped with the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    CurriculumDesign,
    Grading,
    LearningAnalytics,
    StudentTutor,
    ContentLibrary,
}

impl AgentKind {
    /// Every built-in kind, in default registration order.
    pub const ALL: [AgentKind; 5] = [
        AgentKind::CurriculumDesign,
        AgentKind::Grading,
        AgentKind::LearningAnalytics,
        AgentKind::StudentTutor,
        AgentKind::ContentLibrary,
    ];

    /// Registry id of the agent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ca_core::agents::AgentKind;
    ///
    /// assert_eq!(AgentKind::CurriculumDesign.id(), "curriculum-design");
    /// assert_eq!(AgentKind::from_id("grading-assistant"), Some(AgentKind::Grading));
    /// assert_eq!(AgentKind::from_id("unknown"), None);
    /// ```
    pub fn id(&self) -> &'static str {
        match self {
            Self::CurriculumDesign => "curriculum-design",
            Self::Grading => "grading-assistant",
            Self::LearningAnalytics => "learning-analytics",
            Self::StudentTutor => "student-tutor",
            Self::ContentLibrary => "content-library",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Human-readable name for the agent.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CurriculumDesign => "Curriculum Designer",
            Self::Grading => "Grading Assistant",
            Self::LearningAnalytics => "Learning Analytics",
            Self::StudentTutor => "Student Tutor",
            Self::ContentLibrary => "Content Library",
        }
    }

    pub fn category(&self) -> AgentCategory {
        match self {
            Self::CurriculumDesign => AgentCategory::Teacher,
            Self::Grading => AgentCategory::Assessment,
            Self::LearningAnalytics => AgentCategory::Analytics,
            Self::StudentTutor => AgentCategory::Student,
            Self::ContentLibrary => AgentCategory::Content,
        }
    }

    /// Tool names this kind exposes, in definition order.
    pub fn tool_names(&self) -> &'static [&'static str] {
        match self {
            Self::CurriculumDesign => &["create_lesson_plan", "suggest_activities", "align_standards"],
            Self::Grading => &["grade_submission", "generate_rubric"],
            Self::LearningAnalytics => &["class_summary", "student_progress"],
            Self::StudentTutor => &["explain_concept", "generate_practice"],
            Self::ContentLibrary => &["search_resources", "export_outline"],
        }
    }
}
