use biz_service::entitys::nav_entity::NavConfig;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    PrimaryLink,
    Menu,
    Group,
    Item,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::PrimaryLink => "primary",
            NodeKind::Menu => "menu",
            NodeKind::Group => "group",
            NodeKind::Item => "item",
        };
        f.write_str(name)
    }
}

/// 节点地址：类型加上定位其同级列表所需的父级 id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeRef {
    PrimaryLink { id: String },
    Menu { id: String },
    Group { menu_id: String, id: String },
    Item { menu_id: String, group_id: String, id: String },
}

/// 当前在详情表单中打开的节点
pub type Selection = NodeRef;

impl NodeRef {
    pub fn link(id: impl Into<String>) -> Self {
        NodeRef::PrimaryLink { id: id.into() }
    }

    pub fn menu(id: impl Into<String>) -> Self {
        NodeRef::Menu { id: id.into() }
    }

    pub fn group(menu_id: impl Into<String>, id: impl Into<String>) -> Self {
        NodeRef::Group { menu_id: menu_id.into(), id: id.into() }
    }

    pub fn item(menu_id: impl Into<String>, group_id: impl Into<String>, id: impl Into<String>) -> Self {
        NodeRef::Item { menu_id: menu_id.into(), group_id: group_id.into(), id: id.into() }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::PrimaryLink { .. } => NodeKind::PrimaryLink,
            NodeRef::Menu { .. } => NodeKind::Menu,
            NodeRef::Group { .. } => NodeKind::Group,
            NodeRef::Item { .. } => NodeKind::Item,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            NodeRef::PrimaryLink { id } | NodeRef::Menu { id } | NodeRef::Group { id, .. } | NodeRef::Item { id, .. } => id,
        }
    }

    pub fn exists_in(&self, config: &NavConfig) -> bool {
        match self {
            NodeRef::PrimaryLink { id } => config.link(id).is_some(),
            NodeRef::Menu { id } => config.menu(id).is_some(),
            NodeRef::Group { menu_id, id } => config.group(menu_id, id).is_some(),
            NodeRef::Item { menu_id, group_id, id } => config.item(menu_id, group_id, id).is_some(),
        }
    }

    /// `self` 就是 `ancestor` 或在其之下
    pub fn is_within(&self, ancestor: &NodeRef) -> bool {
        if self == ancestor {
            return true;
        }
        match (self, ancestor) {
            (NodeRef::Group { menu_id, .. }, NodeRef::Menu { id }) => menu_id == id,
            (NodeRef::Item { menu_id, .. }, NodeRef::Menu { id }) => menu_id == id,
            (NodeRef::Item { menu_id, group_id, .. }, NodeRef::Group { menu_id: m, id }) => menu_id == m && group_id == id,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descendants_are_within_their_ancestors() {
        let item = NodeRef::item("play", "g1", "i1");
        assert!(item.is_within(&NodeRef::menu("play")));
        assert!(item.is_within(&NodeRef::group("play", "g1")));
        assert!(!item.is_within(&NodeRef::group("play", "g2")));
        assert!(!item.is_within(&NodeRef::group("stats", "g1")));
        assert!(!NodeRef::menu("play").is_within(&item));
        assert!(NodeRef::link("l1").is_within(&NodeRef::link("l1")));
    }
}
