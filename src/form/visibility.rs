use super::value_tree::ValueTree;
use crate::schema::{FieldSpec, StageSpec, TabSpec, VisibleWhen};

fn rule_allows(rule: Option<&VisibleWhen>, tree: &ValueTree) -> bool {
    match rule {
        None => true,
        Some(rule) => rule.matches(tree.get(&rule.depends_on)),
    }
}

pub fn stage_is_visible(stage: &StageSpec, tree: &ValueTree) -> bool {
    rule_allows(stage.visible_when.as_ref(), tree)
}

pub fn field_is_visible(field: &FieldSpec, tree: &ValueTree) -> bool {
    rule_allows(field.visible_when.as_ref(), tree)
}

pub fn visible_stages<'a>(tab: &'a TabSpec, tree: &ValueTree) -> Vec<&'a StageSpec> {
    tab.stages
        .iter()
        .filter(|stage| stage_is_visible(stage, tree))
        .collect()
}

pub fn visible_fields<'a>(stage: &'a StageSpec, tree: &ValueTree) -> Vec<&'a FieldSpec> {
    stage
        .fields
        .iter()
        .filter(|field| field_is_visible(field, tree))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Comparator, FieldPath, LocalizedText, StageName, VisibleWhen};
    use serde_json::json;

    fn gated_stage(comparator: Comparator, operand: serde_json::Value) -> StageSpec {
        StageSpec {
            name: StageName::parse("local-agent").expect("stage name"),
            label: LocalizedText::plain("Built-in Agent"),
            description: None,
            visible_when: Some(VisibleWhen {
                depends_on: FieldPath::parse("ai.runner.runner").expect("path"),
                comparator,
                operand,
            }),
            fields: Vec::new(),
        }
    }

    #[test]
    fn stage_without_rule_is_always_visible() {
        let stage = StageSpec {
            name: StageName::parse("runner").expect("stage name"),
            label: LocalizedText::plain("Runner"),
            description: None,
            visible_when: None,
            fields: Vec::new(),
        };
        assert!(stage_is_visible(&stage, &ValueTree::new()));
    }

    #[test]
    fn unset_gate_hides_dependents_for_every_comparator() {
        let tree = ValueTree::new();
        for stage in [
            gated_stage(Comparator::Equals, json!("local-agent")),
            gated_stage(Comparator::NotEquals, json!("dify-service-api")),
            gated_stage(Comparator::In, json!(["local-agent", "dify-service-api"])),
        ] {
            assert!(!stage_is_visible(&stage, &tree));
        }
    }

    #[test]
    fn comparators_match_against_the_gate_value() {
        let tree = ValueTree::new().with_value(
            FieldPath::parse("ai.runner.runner").expect("path"),
            json!("local-agent"),
        );

        assert!(stage_is_visible(
            &gated_stage(Comparator::Equals, json!("local-agent")),
            &tree
        ));
        assert!(!stage_is_visible(
            &gated_stage(Comparator::Equals, json!("dify-service-api")),
            &tree
        ));
        assert!(stage_is_visible(
            &gated_stage(Comparator::NotEquals, json!("dify-service-api")),
            &tree
        ));
        assert!(stage_is_visible(
            &gated_stage(Comparator::In, json!(["local-agent", "dify-service-api"])),
            &tree
        ));
        assert!(!stage_is_visible(
            &gated_stage(Comparator::In, json!(["dashscope-app-api"])),
            &tree
        ));
    }
}
