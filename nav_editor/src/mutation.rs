//! 纯函数式的树编辑：复制输入、修改、重新编号受影响的同级列表。目标不存在时返回相同的副本。

use crate::node::{NodeKind, NodeRef};
use biz_service::entitys::nav_entity::{
    ItemIcon, ItemTone, MegaMenu, MenuGroup, MenuItem, NavConfig, PrimaryLink, position_of, renumber,
};

/// 字段更新：`None` 表示不改，不属于目标类型的字段忽略
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPatch {
    pub label: Option<String>,
    pub href: Option<String>,
    /// 主链接的图标，任意字符串
    pub icon: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub item_icon: Option<ItemIcon>,
    pub tone: Option<ItemTone>,
    pub is_visible: Option<bool>,
}

/// 删除该节点会连带删除子节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeWarning {
    pub kind: NodeKind,
    pub label: String,
    pub children: usize,
}

impl CascadeWarning {
    pub fn message(&self) -> String {
        let child = match self.kind {
            NodeKind::Menu => "group",
            _ => "item",
        };
        let plural = if self.children == 1 { "" } else { "s" };
        format!("Delete {} \"{}\" and its {} {}{}?", self.kind, self.label, self.children, child, plural)
    }
}

pub fn add_primary_link(config: &NavConfig, id: String) -> NavConfig {
    let mut next = config.clone();
    if position_of(&next.primary_links, &id).is_some() {
        return next;
    }
    next.primary_links.push(PrimaryLink {
        id,
        href: "/".to_string(),
        label: "New link".to_string(),
        icon: "link".to_string(),
        sort_order: 0,
        is_visible: true,
    });
    renumber(&mut next.primary_links);
    next
}

pub fn add_mega_menu(config: &NavConfig, id: String) -> NavConfig {
    let mut next = config.clone();
    if id.trim().is_empty() || position_of(&next.mega_menus, &id).is_some() {
        return next;
    }
    next.mega_menus.push(MegaMenu {
        id,
        label: "New menu".to_string(),
        sort_order: 0,
        is_visible: true,
        groups: Vec::new(),
    });
    renumber(&mut next.mega_menus);
    next
}

pub fn add_group(config: &NavConfig, menu_id: &str, id: String) -> NavConfig {
    let mut next = config.clone();
    let Some(menu) = next.menu_mut(menu_id) else {
        return next;
    };
    if position_of(&menu.groups, &id).is_some() {
        return next;
    }
    menu.groups.push(MenuGroup {
        id,
        title: "New group".to_string(),
        sort_order: 0,
        is_visible: true,
        items: Vec::new(),
    });
    renumber(&mut menu.groups);
    next
}

pub fn add_item(config: &NavConfig, menu_id: &str, group_id: &str, id: String) -> NavConfig {
    let mut next = config.clone();
    let Some(group) = next.group_mut(menu_id, group_id) else {
        return next;
    };
    if position_of(&group.items, &id).is_some() {
        return next;
    }
    group.items.push(MenuItem {
        id,
        href: "/".to_string(),
        title: "New item".to_string(),
        description: String::new(),
        icon: ItemIcon::default(),
        tone: ItemTone::default(),
        sort_order: 0,
        is_visible: true,
    });
    renumber(&mut group.items);
    next
}

fn merge<T: Clone>(slot: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *slot = v.clone();
    }
}

pub fn update_fields(config: &NavConfig, target: &NodeRef, patch: &FieldPatch) -> NavConfig {
    let mut next = config.clone();
    match target {
        NodeRef::PrimaryLink { id } => {
            if let Some(link) = next.primary_links.iter_mut().find(|l| &l.id == id) {
                merge(&mut link.label, &patch.label);
                merge(&mut link.href, &patch.href);
                merge(&mut link.icon, &patch.icon);
                merge(&mut link.is_visible, &patch.is_visible);
            }
        }
        NodeRef::Menu { id } => {
            if let Some(menu) = next.menu_mut(id) {
                merge(&mut menu.label, &patch.label);
                merge(&mut menu.is_visible, &patch.is_visible);
            }
        }
        NodeRef::Group { menu_id, id } => {
            if let Some(group) = next.group_mut(menu_id, id) {
                merge(&mut group.title, &patch.title);
                merge(&mut group.is_visible, &patch.is_visible);
            }
        }
        NodeRef::Item { menu_id, group_id, id } => {
            if let Some(item) = next.group_mut(menu_id, group_id).and_then(|g| g.items.iter_mut().find(|i| &i.id == id)) {
                merge(&mut item.title, &patch.title);
                merge(&mut item.description, &patch.description);
                merge(&mut item.href, &patch.href);
                merge(&mut item.icon, &patch.item_icon);
                merge(&mut item.tone, &patch.tone);
                merge(&mut item.is_visible, &patch.is_visible);
            }
        }
    }
    next
}

/// 有分组的菜单、有条目的分组，删除前需确认
pub fn cascade_warning(config: &NavConfig, target: &NodeRef) -> Option<CascadeWarning> {
    match target {
        NodeRef::Menu { id } => config.menu(id).filter(|m| !m.groups.is_empty()).map(|m| CascadeWarning {
            kind: NodeKind::Menu,
            label: m.label.clone(),
            children: m.groups.len(),
        }),
        NodeRef::Group { menu_id, id } => {
            config.group(menu_id, id).filter(|g| !g.items.is_empty()).map(|g| CascadeWarning {
                kind: NodeKind::Group,
                label: g.title.clone(),
                children: g.items.len(),
            })
        }
        _ => None,
    }
}

/// 删除节点及其子树，确认由调用方负责，见 [`cascade_warning`]
pub fn delete_node(config: &NavConfig, target: &NodeRef) -> NavConfig {
    let mut next = config.clone();
    match target {
        NodeRef::PrimaryLink { id } => {
            if let Some(index) = position_of(&next.primary_links, id) {
                next.primary_links.remove(index);
                renumber(&mut next.primary_links);
            }
        }
        NodeRef::Menu { id } => {
            if let Some(index) = position_of(&next.mega_menus, id) {
                next.mega_menus.remove(index);
                renumber(&mut next.mega_menus);
            }
        }
        NodeRef::Group { menu_id, id } => {
            if let Some(menu) = next.menu_mut(menu_id) {
                if let Some(index) = position_of(&menu.groups, id) {
                    menu.groups.remove(index);
                    renumber(&mut menu.groups);
                }
            }
        }
        NodeRef::Item { menu_id, group_id, id } => {
            if let Some(group) = next.group_mut(menu_id, group_id) {
                if let Some(index) = position_of(&group.items, id) {
                    group.items.remove(index);
                    renumber(&mut group.items);
                }
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use biz_service::nav::default_nav_config;

    const G1: &str = "11111111-1111-4111-8111-111111111111";
    const I1: &str = "22222222-2222-4222-8222-222222222222";

    fn menu_with_item() -> NavConfig {
        let config = add_mega_menu(&NavConfig::empty(), "play".into());
        let config = add_group(&config, "play", G1.into());
        add_item(&config, "play", G1, I1.into())
    }

    #[test]
    fn add_appends_with_dense_order() {
        let mut config = NavConfig::empty();
        for id in ["a", "b", "c"] {
            config = add_primary_link(&config, id.into());
        }
        let orders: Vec<i32> = config.primary_links.iter().map(|l| l.sort_order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
        assert!(config.primary_links.iter().all(|l| l.is_visible));
    }

    #[test]
    fn add_item_uses_default_icon_and_tone() {
        let config = menu_with_item();
        let item = config.item("play", G1, I1).unwrap();
        assert_eq!(item.icon, ItemIcon::Dice);
        assert_eq!(item.tone, ItemTone::Slate);
        assert_eq!(item.sort_order, 1);
    }

    #[test]
    fn add_under_missing_parent_is_a_no_op() {
        let config = default_nav_config();
        assert_eq!(add_group(&config, "nope", G1.into()), config);
        assert_eq!(add_item(&config, "play", "missing-group", I1.into()), config);
    }

    #[test]
    fn add_with_existing_id_is_a_no_op() {
        let config = add_primary_link(&NavConfig::empty(), "a".into());
        assert_eq!(add_primary_link(&config, "a".into()), config);
    }

    #[test]
    fn update_merges_only_relevant_fields() {
        let config = menu_with_item();
        let patch = FieldPatch {
            title: Some("Tonight".into()),
            label: Some("ignored for groups".into()),
            is_visible: Some(false),
            ..Default::default()
        };
        let next = update_fields(&config, &NodeRef::group("play", G1), &patch);
        let group = next.group("play", G1).unwrap();
        assert_eq!(group.title, "Tonight");
        assert!(!group.is_visible);
        assert_eq!(group.items, config.group("play", G1).unwrap().items);
        assert_eq!(next.menu("play").unwrap().label, "New menu");
    }

    #[test]
    fn update_item_fields() {
        let config = menu_with_item();
        let patch = FieldPatch {
            description: Some("Roll for it".into()),
            item_icon: Some(ItemIcon::Trophy),
            tone: Some(ItemTone::Amber),
            ..Default::default()
        };
        let next = update_fields(&config, &NodeRef::item("play", G1, I1), &patch);
        let item = next.item("play", G1, I1).unwrap();
        assert_eq!(item.description, "Roll for it");
        assert_eq!(item.icon, ItemIcon::Trophy);
        assert_eq!(item.tone, ItemTone::Amber);
        assert_eq!(item.title, "New item");
    }

    #[test]
    fn update_with_stale_target_is_a_no_op() {
        let config = default_nav_config();
        let patch = FieldPatch { label: Some("x".into()), ..Default::default() };
        assert_eq!(update_fields(&config, &NodeRef::link("gone"), &patch), config);
        assert_eq!(update_fields(&config, &NodeRef::item("play", G1, I1), &patch), config);
    }

    #[test]
    fn update_does_not_touch_the_input() {
        let config = menu_with_item();
        let before = config.clone();
        let _ = update_fields(&config, &NodeRef::menu("play"), &FieldPatch { label: Some("Play".into()), ..Default::default() });
        assert_eq!(config, before);
    }

    #[test]
    fn cascade_warning_only_for_non_empty_parents() {
        let config = menu_with_item();
        let warning = cascade_warning(&config, &NodeRef::menu("play")).unwrap();
        assert_eq!(warning.children, 1);
        assert_eq!(warning.message(), "Delete menu \"New menu\" and its 1 group?");
        assert!(cascade_warning(&config, &NodeRef::group("play", G1)).is_some());
        let emptied = delete_node(&config, &NodeRef::item("play", G1, I1));
        assert!(cascade_warning(&emptied, &NodeRef::group("play", G1)).is_none());
        assert!(cascade_warning(&config, &NodeRef::item("play", G1, I1)).is_none());
    }

    #[test]
    fn delete_renumbers_siblings() {
        let mut config = NavConfig::empty();
        for id in ["a", "b", "c"] {
            config = add_primary_link(&config, id.into());
        }
        let next = delete_node(&config, &NodeRef::link("a"));
        let view: Vec<(&str, i32)> = next.primary_links.iter().map(|l| (l.id.as_str(), l.sort_order)).collect();
        assert_eq!(view, vec![("b", 1), ("c", 2)]);
        assert_eq!(delete_node(&config, &NodeRef::link("zzz")), config);
    }
}
