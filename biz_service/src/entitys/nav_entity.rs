use common::util::validate::{validate_not_blank, validate_uuid};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use utoipa::ToSchema;
use validator::Validate;

/// 导航配置根节点，整体作为一个文档持久化
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavConfig {
    #[validate(nested)]
    pub primary_links: Vec<PrimaryLink>,
    #[validate(nested)]
    pub mega_menus: Vec<MegaMenu>,
}

/// 顶层平铺链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryLink {
    #[validate(custom(function = "validate_uuid"))]
    pub id: String,
    pub href: String,
    pub label: String,
    pub icon: String,
    pub sort_order: i32,
    pub is_visible: bool,
}

/// 可展开的大菜单，id 不要求是 UUID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MegaMenu {
    #[validate(custom(function = "validate_not_blank"))]
    pub id: String,
    pub label: String,
    pub sort_order: i32,
    pub is_visible: bool,
    #[validate(nested)]
    pub groups: Vec<MenuGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuGroup {
    #[validate(custom(function = "validate_uuid"))]
    pub id: String,
    pub title: String,
    pub sort_order: i32,
    pub is_visible: bool,
    #[validate(nested)]
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[validate(custom(function = "validate_uuid"))]
    pub id: String,
    pub href: String,
    pub title: String,
    pub description: String,
    pub icon: ItemIcon,
    pub tone: ItemTone,
    pub sort_order: i32,
    pub is_visible: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[derive(EnumString, EnumIter, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ItemIcon {
    #[default]
    Dice,
    Trophy,
    Users,
    Tag,
    History,
    Chart,
    Shuffle,
    Calendar,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[derive(EnumString, EnumIter, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ItemTone {
    #[default]
    Slate,
    Emerald,
    Amber,
    Sky,
    Rose,
    Violet,
}

/// 同级列表中按 `sortOrder` 排列的节点
pub trait Ordered {
    fn node_id(&self) -> &str;
    fn sort_order(&self) -> i32;
    fn set_sort_order(&mut self, order: i32);
}

macro_rules! impl_ordered {
    ($($ty:ty),*) => {
        $(impl Ordered for $ty {
            fn node_id(&self) -> &str {
                &self.id
            }
            fn sort_order(&self) -> i32 {
                self.sort_order
            }
            fn set_sort_order(&mut self, order: i32) {
                self.sort_order = order;
            }
        })*
    };
}

impl_ordered!(PrimaryLink, MegaMenu, MenuGroup, MenuItem);

/// 按当前顺序重排为 1..N
pub fn renumber<T: Ordered>(list: &mut [T]) {
    for (index, node) in list.iter_mut().enumerate() {
        node.set_sort_order(index as i32 + 1);
    }
}

/// 稳定排序，相同排序号保持原有先后
pub fn sort_by_order<T: Ordered>(list: &mut [T]) {
    list.sort_by_key(|node| node.sort_order());
}

pub fn position_of<T: Ordered>(list: &[T], id: &str) -> Option<usize> {
    list.iter().position(|node| node.node_id() == id)
}

pub fn is_dense<T: Ordered>(list: &[T]) -> bool {
    list.iter().enumerate().all(|(index, node)| node.sort_order() == index as i32 + 1)
}

impl NavConfig {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn link(&self, id: &str) -> Option<&PrimaryLink> {
        self.primary_links.iter().find(|link| link.id == id)
    }

    pub fn menu(&self, id: &str) -> Option<&MegaMenu> {
        self.mega_menus.iter().find(|menu| menu.id == id)
    }

    pub fn menu_mut(&mut self, id: &str) -> Option<&mut MegaMenu> {
        self.mega_menus.iter_mut().find(|menu| menu.id == id)
    }

    pub fn group(&self, menu_id: &str, group_id: &str) -> Option<&MenuGroup> {
        self.menu(menu_id)?.groups.iter().find(|group| group.id == group_id)
    }

    pub fn group_mut(&mut self, menu_id: &str, group_id: &str) -> Option<&mut MenuGroup> {
        self.menu_mut(menu_id)?.groups.iter_mut().find(|group| group.id == group_id)
    }

    pub fn item(&self, menu_id: &str, group_id: &str, item_id: &str) -> Option<&MenuItem> {
        self.group(menu_id, group_id)?.items.iter().find(|item| item.id == item_id)
    }

    /// 所有同级列表重排为 1..N，重复调用结果不变
    pub fn renormalize(&mut self) {
        renumber(&mut self.primary_links);
        renumber(&mut self.mega_menus);
        for menu in &mut self.mega_menus {
            renumber(&mut menu.groups);
            for group in &mut menu.groups {
                renumber(&mut group.items);
            }
        }
    }

    /// 各层列表按排序号排列，不改写排序号
    pub fn sort_by_order(&mut self) {
        sort_by_order(&mut self.primary_links);
        sort_by_order(&mut self.mega_menus);
        for menu in &mut self.mega_menus {
            sort_by_order(&mut menu.groups);
            for group in &mut menu.groups {
                sort_by_order(&mut group.items);
            }
        }
    }

    pub fn is_normalized(&self) -> bool {
        is_dense(&self.primary_links)
            && is_dense(&self.mega_menus)
            && self.mega_menus.iter().all(|menu| {
                is_dense(&menu.groups) && menu.groups.iter().all(|group| is_dense(&group.items))
            })
    }
}
