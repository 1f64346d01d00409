//! 拖放结束后的树编辑
//!
//! 同一列表内的同类拖放为重排；条目拖到其他分组的条目或分组空白区时追加到该分组末尾。
//! 分组不能跨菜单移动，其余拖放不改变树。

use crate::node::NodeRef;
use biz_service::entitys::nav_entity::{NavConfig, Ordered, position_of, renumber};
use log::debug;

/// 拖放的落点
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Node(NodeRef),
    /// 分组条目下方的空白区
    GroupZone { menu_id: String, group_id: String },
}

impl DropTarget {
    pub fn group_zone(menu_id: impl Into<String>, group_id: impl Into<String>) -> Self {
        DropTarget::GroupZone { menu_id: menu_id.into(), group_id: group_id.into() }
    }
}

pub fn on_drop(config: &NavConfig, dragged: &NodeRef, target: &DropTarget) -> NavConfig {
    let mut next = config.clone();
    let applied = match (dragged, target) {
        (NodeRef::PrimaryLink { id }, DropTarget::Node(NodeRef::PrimaryLink { id: over })) => {
            move_within(&mut next.primary_links, id, over)
        }
        (NodeRef::Menu { id }, DropTarget::Node(NodeRef::Menu { id: over })) => move_within(&mut next.mega_menus, id, over),
        (NodeRef::Group { menu_id, id }, DropTarget::Node(NodeRef::Group { menu_id: over_menu, id: over })) => {
            if menu_id != over_menu {
                debug!("rejecting move of group {} from menu {} to menu {}", id, menu_id, over_menu);
                false
            } else {
                next.menu_mut(menu_id).is_some_and(|menu| move_within(&mut menu.groups, id, over))
            }
        }
        (
            NodeRef::Item { menu_id, group_id, id },
            DropTarget::Node(NodeRef::Item { menu_id: over_menu, group_id: over_group, id: over }),
        ) => {
            if menu_id == over_menu && group_id == over_group {
                next.group_mut(menu_id, group_id).is_some_and(|group| move_within(&mut group.items, id, over))
            } else {
                move_item_to_group(
                    &mut next,
                    (menu_id.as_str(), group_id.as_str(), id.as_str()),
                    (over_menu.as_str(), over_group.as_str()),
                )
            }
        }
        (NodeRef::Item { menu_id, group_id, id }, DropTarget::GroupZone { menu_id: to_menu, group_id: to_group }) => {
            move_item_to_group(
                &mut next,
                (menu_id.as_str(), group_id.as_str(), id.as_str()),
                (to_menu.as_str(), to_group.as_str()),
            )
        }
        _ => false,
    };
    if !applied {
        debug!("drop of {} {} ignored", dragged.kind(), dragged.id());
        return config.clone();
    }
    next
}

/// 从 `id` 的位置取出，插入到 `over` 的位置
fn move_within<T: Ordered>(list: &mut Vec<T>, id: &str, over: &str) -> bool {
    let (Some(from), Some(to)) = (position_of(list, id), position_of(list, over)) else {
        return false;
    };
    let node = list.remove(from);
    list.insert(to, node);
    renumber(list);
    true
}

/// 追加到目标分组末尾，先确认两个分组都存在再移除
fn move_item_to_group(config: &mut NavConfig, from: (&str, &str, &str), to: (&str, &str)) -> bool {
    let (from_menu, from_group, item_id) = from;
    let (to_menu, to_group) = to;
    if config.group(to_menu, to_group).is_none() {
        return false;
    }
    let Some(source) = config.group_mut(from_menu, from_group) else {
        return false;
    };
    let Some(index) = position_of(&source.items, item_id) else {
        return false;
    };
    let item = source.items.remove(index);
    renumber(&mut source.items);
    match config.group_mut(to_menu, to_group) {
        Some(dest) => {
            dest.items.push(item);
            renumber(&mut dest.items);
            true
        }
        None => false,
    }
}
