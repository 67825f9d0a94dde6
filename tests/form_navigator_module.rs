use pipeform::form::{StageNavigator, ValueTree};
use pipeform::schema::{FieldPath, TabName};
use pipeform::templates::pipeline_schema;
use serde_json::json;

fn path(raw: &str) -> FieldPath {
    FieldPath::parse(raw).expect("parse path")
}

fn ai_navigator() -> StageNavigator {
    StageNavigator::new(TabName::parse("ai").expect("tab name"))
}

#[test]
fn wizard_walks_only_visible_stages() {
    let schema = pipeline_schema();
    let tree = ValueTree::new().with_value(path("ai.runner.runner"), json!("local-agent"));
    let mut navigator = ai_navigator();

    assert_eq!(
        navigator.current(&schema, &tree).expect("first stage").name.as_str(),
        "runner"
    );
    assert_eq!(
        navigator.advance(&schema, &tree).expect("second stage").name.as_str(),
        "local-agent"
    );
    // dify-service-api and dashscope-app-api stay hidden, so the wizard ends here
    assert!(navigator.advance(&schema, &tree).is_none());
    assert_eq!(
        navigator.current(&schema, &tree).expect("unchanged").name.as_str(),
        "local-agent"
    );

    assert_eq!(
        navigator.retreat(&schema, &tree).expect("back to start").name.as_str(),
        "runner"
    );
    assert!(navigator.retreat(&schema, &tree).is_none());
}

#[test]
fn selector_change_mid_wizard_repositions_to_a_visible_stage() {
    let schema = pipeline_schema();
    let tree = ValueTree::new().with_value(path("ai.runner.runner"), json!("local-agent"));
    let mut navigator = ai_navigator();

    navigator.current(&schema, &tree);
    assert_eq!(
        navigator.advance(&schema, &tree).expect("gated stage").name.as_str(),
        "local-agent"
    );

    // switching the runner hides the stage the wizard is standing on
    let tree = tree.with_value(path("ai.runner.runner"), json!("dify-service-api"));
    assert_eq!(
        navigator.current(&schema, &tree).expect("repositioned").name.as_str(),
        "runner"
    );
    assert_eq!(
        navigator.advance(&schema, &tree).expect("new gated stage").name.as_str(),
        "dify-service-api"
    );
}

#[test]
fn unknown_tab_yields_no_stages() {
    let schema = pipeline_schema();
    let mut navigator = StageNavigator::new(TabName::parse("plugins").expect("tab name"));
    assert!(navigator.current(&schema, &ValueTree::new()).is_none());
    assert!(navigator.advance(&schema, &ValueTree::new()).is_none());
}

#[test]
fn navigator_recovers_when_the_gate_is_cleared_and_reset() {
    let schema = pipeline_schema();
    let mut navigator = ai_navigator();

    let tree = ValueTree::new().with_value(path("ai.runner.runner"), json!("dashscope-app-api"));
    navigator.current(&schema, &tree);
    navigator.advance(&schema, &tree);
    assert_eq!(
        navigator.current(&schema, &tree).expect("gated stage").name.as_str(),
        "dashscope-app-api"
    );

    // a gate holding a value that matches no option hides every gated stage
    let tree = tree.with_value(path("ai.runner.runner"), json!("unplugged"));
    assert_eq!(
        navigator.current(&schema, &tree).expect("fallback").name.as_str(),
        "runner"
    );
}
