use pipeform::form::{FormDraft, FormMode, PersistedConfig, StalePolicy};
use pipeform::schema::FieldPath;
use pipeform::templates::{bot_schema, pipeline_schema};
use serde_json::json;

fn path(raw: &str) -> FieldPath {
    FieldPath::parse(raw).expect("parse path")
}

fn dify_pipeline() -> PersistedConfig {
    PersistedConfig {
        name: "support-bot".to_string(),
        description: "answers tickets".to_string(),
        config: json!({
            "ai": {
                "runner": {"runner": "dify-service-api"},
                "dify-service-api": {
                    "base-url": "https://dify.internal",
                    "app-type": "chat",
                    "api-key": "secret",
                    "thinking-convert": "plain"
                }
            }
        })
        .as_object()
        .expect("config object")
        .clone(),
    }
}

#[test]
fn stale_values_survive_a_selector_round_trip() {
    let mut draft = FormDraft::open_edit(pipeline_schema(), &dify_pipeline());
    assert_eq!(draft.mode(), FormMode::Edit);

    draft.set_value(path("ai.runner.runner"), json!("local-agent"));
    let stages: Vec<&str> = draft
        .visible_stages("ai")
        .iter()
        .map(|stage| stage.name.as_str())
        .collect();
    assert_eq!(stages, vec!["runner", "local-agent"]);

    // the hidden dify values were kept, so flipping back restores them
    draft.set_value(path("ai.runner.runner"), json!("dify-service-api"));
    assert_eq!(
        draft.get_value(&path("ai.dify-service-api.base-url")),
        Some(&json!("https://dify.internal"))
    );
    let serialized = draft.serialize();
    assert_eq!(
        serialized.config["ai"]["dify-service-api"]["base-url"],
        json!("https://dify.internal")
    );
}

#[test]
fn retention_is_the_default_stale_policy() {
    let draft = FormDraft::open_edit(pipeline_schema(), &dify_pipeline());
    assert_eq!(draft.stale_policy(), StalePolicy::Retain);
}

#[test]
fn retained_values_stay_in_the_tree_after_submission() {
    let mut draft = FormDraft::open_edit(pipeline_schema(), &dify_pipeline());
    draft.set_value(path("ai.runner.runner"), json!("local-agent"));
    draft.set_value(path("ai.local-agent.model"), json!("claude-sonnet"));

    let persisted = draft.submit().expect("submit");
    assert!(persisted.config["ai"]
        .as_object()
        .expect("ai section")
        .get("dify-service-api")
        .is_none());
    assert_eq!(
        draft.get_value(&path("ai.dify-service-api.base-url")),
        Some(&json!("https://dify.internal"))
    );
}

#[test]
fn create_then_edit_is_a_two_phase_workflow() {
    let mut create = FormDraft::open_create(pipeline_schema());
    create.set_value(path("basic.name"), json!("support-bot"));
    create.set_value(path("basic.description"), json!("answers tickets"));

    let persisted = create.submit().expect("create submit");
    assert_eq!(persisted.name, "support-bot");
    assert!(persisted.config.is_empty());

    let edit = FormDraft::open_edit(pipeline_schema(), &persisted);
    assert_eq!(edit.mode(), FormMode::Edit);
    assert_eq!(
        edit.get_value(&path("ai.runner.runner")),
        Some(&json!("local-agent"))
    );
    let stages: Vec<&str> = edit
        .visible_stages("ai")
        .iter()
        .map(|stage| stage.name.as_str())
        .collect();
    assert_eq!(stages, vec!["runner", "local-agent"]);
}

#[test]
fn bot_draft_requires_an_adapter_choice_before_platform_stages_show() {
    let mut draft = FormDraft::open_create(bot_schema());
    let stages: Vec<&str> = draft
        .visible_stages("adapter")
        .iter()
        .map(|stage| stage.name.as_str())
        .collect();
    assert_eq!(stages, vec!["adapter"]);

    draft.set_value(path("adapter.adapter.adapter"), json!("discord"));
    let stages: Vec<&str> = draft
        .visible_stages("adapter")
        .iter()
        .map(|stage| stage.name.as_str())
        .collect();
    assert_eq!(stages, vec!["adapter", "discord"]);

    let fields: Vec<&str> = draft
        .visible_fields("adapter", "discord")
        .iter()
        .map(|field| field.name.as_str())
        .collect();
    assert_eq!(fields, vec!["client-id", "token"]);
}

#[test]
fn validate_tab_scopes_errors_to_one_tab() {
    let mut draft = FormDraft::open_edit(pipeline_schema(), &dify_pipeline());
    draft.set_value(path("ai.dify-service-api.base-url"), json!(""));

    let ai_result = draft.validate_tab("ai");
    assert_eq!(
        ai_result.error(&path("ai.dify-service-api.base-url")),
        Some("must not be empty")
    );
    assert!(draft.validate_tab("safety").is_valid());
    assert!(draft.validate_tab("unknown").is_valid());
}
