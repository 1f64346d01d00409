use crate::mutation::{FieldPatch, update_fields};
use crate::node::{NodeRef, Selection};
use biz_service::entitys::nav_entity::NavConfig;

/// 选中节点的详情表单，预填该类型可编辑的字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub target: Selection,
    pub fields: FieldPatch,
}

impl EditForm {
    pub fn load(config: &NavConfig, target: &Selection) -> Option<Self> {
        let fields = match target {
            NodeRef::PrimaryLink { id } => {
                let link = config.link(id)?;
                FieldPatch {
                    label: Some(link.label.clone()),
                    href: Some(link.href.clone()),
                    icon: Some(link.icon.clone()),
                    is_visible: Some(link.is_visible),
                    ..Default::default()
                }
            }
            NodeRef::Menu { id } => {
                let menu = config.menu(id)?;
                FieldPatch { label: Some(menu.label.clone()), is_visible: Some(menu.is_visible), ..Default::default() }
            }
            NodeRef::Group { menu_id, id } => {
                let group = config.group(menu_id, id)?;
                FieldPatch { title: Some(group.title.clone()), is_visible: Some(group.is_visible), ..Default::default() }
            }
            NodeRef::Item { menu_id, group_id, id } => {
                let item = config.item(menu_id, group_id, id)?;
                FieldPatch {
                    title: Some(item.title.clone()),
                    description: Some(item.description.clone()),
                    href: Some(item.href.clone()),
                    item_icon: Some(item.icon),
                    tone: Some(item.tone),
                    is_visible: Some(item.is_visible),
                    ..Default::default()
                }
            }
        };
        Some(Self { target: target.clone(), fields })
    }
}

/// 正在编辑的节点，不持久化
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    form: Option<EditForm>,
}

impl SelectionState {
    pub fn selection(&self) -> Option<&Selection> {
        self.form.as_ref().map(|f| &f.target)
    }

    pub fn form(&self) -> Option<&EditForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut EditForm> {
        self.form.as_mut()
    }

    /// 选中不存在的节点会清空选中
    pub fn select(&mut self, config: &NavConfig, target: &Selection) -> bool {
        self.form = EditForm::load(config, target);
        self.form.is_some()
    }

    pub fn close(&mut self) {
        self.form = None;
    }

    /// 把表单应用到 `config`，保持选中并从新树重新加载表单
    pub fn submit(&mut self, config: &NavConfig) -> NavConfig {
        let Some(form) = &self.form else {
            return config.clone();
        };
        let next = update_fields(config, &form.target, &form.fields);
        let target = form.target.clone();
        self.form = EditForm::load(&next, &target);
        next
    }

    /// `removed` 是选中节点或其祖先时清空选中
    pub fn clear_if_within(&mut self, removed: &NodeRef) {
        if self.selection().is_some_and(|s| s.is_within(removed)) {
            self.form = None;
        }
    }

    /// 结构变化后保持选中同一节点：条目移到其他分组时跟随，其余消失的节点取消选中。
    /// 表单中未提交的修改保留。
    pub fn reconcile(&mut self, config: &NavConfig) {
        let Some(form) = &mut self.form else {
            return;
        };
        if form.target.exists_in(config) {
            return;
        }
        if let NodeRef::Item { id, .. } = &form.target {
            let found = config.mega_menus.iter().find_map(|menu| {
                menu.groups
                    .iter()
                    .find(|group| group.items.iter().any(|item| &item.id == id))
                    .map(|group| NodeRef::item(menu.id.clone(), group.id.clone(), id.clone()))
            });
            if let Some(target) = found {
                form.target = target;
                return;
            }
        }
        self.form = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation::{add_group, add_item, add_mega_menu, add_primary_link};

    const G1: &str = "11111111-1111-4111-8111-111111111111";
    const I1: &str = "22222222-2222-4222-8222-222222222222";

    fn tree() -> NavConfig {
        let config = add_primary_link(&NavConfig::empty(), "l1".into());
        let config = add_mega_menu(&config, "play".into());
        let config = add_group(&config, "play", G1.into());
        add_item(&config, "play", G1, I1.into())
    }

    #[test]
    fn select_loads_kind_specific_fields() {
        let config = tree();
        let mut state = SelectionState::default();
        assert!(state.select(&config, &NodeRef::group("play", G1)));
        let form = state.form().unwrap();
        assert_eq!(form.fields.title.as_deref(), Some("New group"));
        assert_eq!(form.fields.label, None);
        assert_eq!(form.fields.is_visible, Some(true));
    }

    #[test]
    fn select_missing_node_leaves_nothing_selected() {
        let mut state = SelectionState::default();
        assert!(!state.select(&tree(), &NodeRef::menu("nope")));
        assert!(state.selection().is_none());
    }

    #[test]
    fn submit_applies_and_keeps_selection() {
        let config = tree();
        let mut state = SelectionState::default();
        state.select(&config, &NodeRef::link("l1"));
        state.form_mut().unwrap().fields.label = Some("Home".into());
        let next = state.submit(&config);
        assert_eq!(next.link("l1").unwrap().label, "Home");
        assert_eq!(state.selection(), Some(&NodeRef::link("l1")));
        assert_eq!(state.form().unwrap().fields.label.as_deref(), Some("Home"));
    }

    #[test]
    fn close_clears_form() {
        let mut state = SelectionState::default();
        state.select(&tree(), &NodeRef::menu("play"));
        state.close();
        assert!(state.form().is_none());
    }

    #[test]
    fn deleting_an_ancestor_clears_selection() {
        let mut state = SelectionState::default();
        state.select(&tree(), &NodeRef::item("play", G1, I1));
        state.clear_if_within(&NodeRef::link("l1"));
        assert!(state.selection().is_some());
        state.clear_if_within(&NodeRef::menu("play"));
        assert!(state.selection().is_none());
    }
}
