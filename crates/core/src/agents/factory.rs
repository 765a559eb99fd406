//! Agent factory for building the built-in and declared agents.

use crate::agents::agent_kind::AgentKind;
use crate::agents::base::Agent;
use crate::agents::mock::{mock_tool, MockLatency, MockOutput};
use crate::agents::tool::Tool;
use ca_protocol::DeclaredAgent;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Factory for creating agent instances.
///
/// Built-in agents are backed by mock tools: every call waits for the
/// configured latency and returns a deterministic function of the payload.
pub struct AgentFactory;

impl AgentFactory {
    /// Create a built-in agent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ca_core::agents::{AgentFactory, AgentKind, MockLatency};
    ///
    /// let agent = AgentFactory::create(AgentKind::Grading, MockLatency::none());
    /// assert_eq!(agent.id(), "grading-assistant");
    /// assert_eq!(agent.tool_names(), vec!["grade_submission", "generate_rubric"]);
    /// ```
    pub fn create(kind: AgentKind, latency: MockLatency) -> Arc<Agent> {
        Arc::new(Agent::new(
            kind.id(),
            kind.display_name(),
            kind.category(),
            move || define_tools(kind, latency),
        ))
    }

    /// Create every built-in agent, in [`AgentKind::ALL`] order.
    pub fn create_all(latency: MockLatency) -> Vec<Arc<Agent>> {
        AgentKind::ALL
            .into_iter()
            .map(|kind| Self::create(kind, latency))
            .collect()
    }

    /// Create an agent from a declaration file.
    ///
    /// Each declared tool returns its fixed `response`, or echoes the
    /// payload when no response is declared.
    pub fn create_declared(declared: &DeclaredAgent, latency: MockLatency) -> Arc<Agent> {
        let tools = declared.tools.clone();
        Arc::new(Agent::new(
            declared.id.as_str(),
            declared.name.as_str(),
            declared.category,
            move || {
                tools
                    .iter()
                    .map(|tool| {
                        let output = tool
                            .response
                            .clone()
                            .map_or(MockOutput::Echo, MockOutput::Fixed);
                        mock_tool(tool.name.as_str(), tool.description.as_str(), latency, output)
                    })
                    .collect()
            },
        ))
    }
}

fn define_tools(kind: AgentKind, latency: MockLatency) -> Vec<Tool> {
    match kind {
        AgentKind::CurriculumDesign => vec![
            mock_tool(
                "create_lesson_plan",
                "Draft a lesson plan from a title and objectives",
                latency,
                MockOutput::map(|payload| {
                    with_fields(
                        payload,
                        json!({
                            "status": "draft",
                            "sections": ["warm-up", "direct instruction", "guided practice", "reflection"],
                        }),
                    )
                }),
            ),
            mock_tool(
                "suggest_activities",
                "Suggest classroom activities for a topic",
                latency,
                MockOutput::map(|payload| {
                    with_fields(
                        payload,
                        json!({ "activities": ["think-pair-share", "gallery walk", "exit ticket"] }),
                    )
                }),
            ),
            mock_tool(
                "align_standards",
                "Map lesson objectives to curriculum standards",
                latency,
                MockOutput::map(|payload| with_fields(payload, json!({ "aligned": true, "standards": [] }))),
            ),
        ],
        AgentKind::Grading => vec![
            mock_tool(
                "grade_submission",
                "Score a student submission against a rubric",
                latency,
                MockOutput::map(|payload| {
                    with_fields(
                        payload,
                        json!({ "score": 85, "maxScore": 100, "feedback": "Clear reasoning; check units." }),
                    )
                }),
            ),
            mock_tool(
                "generate_rubric",
                "Generate a grading rubric for an assignment",
                latency,
                MockOutput::map(|payload| {
                    with_fields(
                        payload,
                        json!({ "criteria": ["accuracy", "clarity", "completeness"], "levels": 4 }),
                    )
                }),
            ),
        ],
        AgentKind::LearningAnalytics => vec![
            mock_tool(
                "class_summary",
                "Summarize class performance",
                latency,
                MockOutput::map(|payload| {
                    with_fields(payload, json!({ "averageScore": 78.5, "atRisk": 3, "trend": "improving" }))
                }),
            ),
            mock_tool(
                "student_progress",
                "Report progress for one student",
                latency,
                MockOutput::map(|payload| {
                    with_fields(payload, json!({ "mastery": 0.72, "completedLessons": 14 }))
                }),
            ),
        ],
        AgentKind::StudentTutor => vec![
            mock_tool(
                "explain_concept",
                "Explain a concept at the student's level",
                latency,
                MockOutput::map(|payload| {
                    with_fields(payload, json!({ "explanation": "Let's break this down step by step." }))
                }),
            ),
            mock_tool(
                "generate_practice",
                "Generate practice questions",
                latency,
                MockOutput::map(|payload| with_fields(payload, json!({ "questions": 5 }))),
            ),
        ],
        AgentKind::ContentLibrary => vec![
            mock_tool(
                "search_resources",
                "Search the shared resource library",
                latency,
                MockOutput::map(|payload| with_fields(payload, json!({ "results": [] }))),
            ),
            mock_tool(
                "export_outline",
                "Export a lesson outline",
                latency,
                MockOutput::Echo,
            ),
        ],
    }
}

/// Merge `fields` into an object built from `payload`. Payload keys win;
/// a non-object payload is kept under `input`.
fn with_fields(payload: Value, fields: Value) -> Value {
    let mut out = match payload {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            let mut map = Map::new();
            map.insert("input".to_string(), other);
            map
        }
    };
    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            out.entry(key).or_insert(value);
        }
    }
    Value::Object(out)
}
