use super::value_tree::ValueTree;
use super::visibility::{stage_is_visible, visible_stages};
use crate::schema::{SchemaModel, StageName, StageSpec, TabName};

// Linear wizard over one tab's visible stages. The visible sequence is
// recomputed on every call, so a selector change mid-wizard can never leave
// the navigator on a hidden stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageNavigator {
    tab: TabName,
    current: Option<StageName>,
}

impl StageNavigator {
    pub fn new(tab: TabName) -> Self {
        Self { tab, current: None }
    }

    pub fn tab(&self) -> &TabName {
        &self.tab
    }

    pub fn current<'a>(
        &mut self,
        schema: &'a SchemaModel,
        tree: &ValueTree,
    ) -> Option<&'a StageSpec> {
        self.reposition(schema, tree)
    }

    pub fn advance<'a>(
        &mut self,
        schema: &'a SchemaModel,
        tree: &ValueTree,
    ) -> Option<&'a StageSpec> {
        let current = self.reposition(schema, tree)?;
        let tab = schema.tab(self.tab.as_str())?;
        let visible = visible_stages(tab, tree);
        let index = visible
            .iter()
            .position(|stage| stage.name == current.name)?;
        let next = visible.get(index + 1).copied()?;
        self.current = Some(next.name.clone());
        Some(next)
    }

    pub fn retreat<'a>(
        &mut self,
        schema: &'a SchemaModel,
        tree: &ValueTree,
    ) -> Option<&'a StageSpec> {
        let current = self.reposition(schema, tree)?;
        let tab = schema.tab(self.tab.as_str())?;
        let visible = visible_stages(tab, tree);
        let index = visible
            .iter()
            .position(|stage| stage.name == current.name)?;
        let previous = visible.get(index.checked_sub(1)?).copied()?;
        self.current = Some(previous.name.clone());
        Some(previous)
    }

    fn reposition<'a>(
        &mut self,
        schema: &'a SchemaModel,
        tree: &ValueTree,
    ) -> Option<&'a StageSpec> {
        let tab = schema.tab(self.tab.as_str())?;
        let visible = visible_stages(tab, tree);
        let Some(first_visible) = visible.first().copied() else {
            self.current = None;
            return None;
        };
        let chosen = match &self.current {
            None => first_visible,
            Some(name) => {
                if let Some(stage) = visible.iter().find(|stage| &stage.name == name).copied() {
                    stage
                } else {
                    // The remembered stage went hidden: fall back to the
                    // nearest still-visible predecessor in declaration order.
                    tab.stages
                        .iter()
                        .position(|stage| &stage.name == name)
                        .and_then(|index| {
                            tab.stages[..index]
                                .iter()
                                .rev()
                                .find(|stage| stage_is_visible(stage, tree))
                        })
                        .unwrap_or(first_visible)
                }
            }
        };
        self.current = Some(chosen.name.clone());
        Some(chosen)
    }
}
