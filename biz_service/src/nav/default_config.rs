use crate::entitys::nav_entity::{ItemIcon, ItemTone, MegaMenu, MenuGroup, MenuItem, NavConfig, PrimaryLink};

fn link(id: &str, href: &str, label: &str, icon: &str) -> PrimaryLink {
    PrimaryLink {
        id: id.to_string(),
        href: href.to_string(),
        label: label.to_string(),
        icon: icon.to_string(),
        sort_order: 0,
        is_visible: true,
    }
}

fn item(id: &str, href: &str, title: &str, description: &str, icon: ItemIcon, tone: ItemTone) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        href: href.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon,
        tone,
        sort_order: 0,
        is_visible: true,
    }
}

fn group(id: &str, title: &str, items: Vec<MenuItem>) -> MenuGroup {
    MenuGroup { id: id.to_string(), title: title.to_string(), sort_order: 0, is_visible: true, items }
}

fn menu(id: &str, label: &str, groups: Vec<MenuGroup>) -> MegaMenu {
    MegaMenu { id: id.to_string(), label: label.to_string(), sort_order: 0, is_visible: true, groups }
}

/// 远端没有配置或配置校验失败时使用的内置导航
pub fn default_nav_config() -> NavConfig {
    let mut config = NavConfig {
        primary_links: vec![
            link("a3f1c2d4-1b2e-4c3d-8e4f-5a6b7c8d9e01", "/", "Home", "home"),
            link("a3f1c2d4-1b2e-4c3d-8e4f-5a6b7c8d9e02", "/games", "Games", "dice"),
            link("a3f1c2d4-1b2e-4c3d-8e4f-5a6b7c8d9e03", "/players", "Players", "users"),
        ],
        mega_menus: vec![
            menu(
                "play",
                "Play",
                vec![
                    group(
                        "b4e2d3c5-2c3f-4d4e-9f50-6b7c8d9e0f11",
                        "Game night",
                        vec![
                            item(
                                "c5f3e4d6-3d40-4e5f-a061-7c8d9e0f1a21",
                                "/random",
                                "Random pick",
                                "Let the table decide what hits the board",
                                ItemIcon::Shuffle,
                                ItemTone::Emerald,
                            ),
                            item(
                                "c5f3e4d6-3d40-4e5f-a061-7c8d9e0f1a22",
                                "/tournaments",
                                "Tournaments",
                                "Brackets and the active tournament",
                                ItemIcon::Trophy,
                                ItemTone::Amber,
                            ),
                            item(
                                "c5f3e4d6-3d40-4e5f-a061-7c8d9e0f1a23",
                                "/history",
                                "Play history",
                                "Every session, newest first",
                                ItemIcon::History,
                                ItemTone::Slate,
                            ),
                        ],
                    ),
                    group(
                        "b4e2d3c5-2c3f-4d4e-9f50-6b7c8d9e0f12",
                        "Library",
                        vec![
                            item(
                                "c5f3e4d6-3d40-4e5f-a061-7c8d9e0f1a24",
                                "/games",
                                "Games",
                                "The shelf, with player counts and play time",
                                ItemIcon::Dice,
                                ItemTone::Sky,
                            ),
                            item(
                                "c5f3e4d6-3d40-4e5f-a061-7c8d9e0f1a25",
                                "/tags",
                                "Tags",
                                "Browse games by mechanic and mood",
                                ItemIcon::Tag,
                                ItemTone::Violet,
                            ),
                        ],
                    ),
                ],
            ),
            menu(
                "stats",
                "Stats",
                vec![group(
                    "b4e2d3c5-2c3f-4d4e-9f50-6b7c8d9e0f13",
                    "Leaderboards",
                    vec![
                        item(
                            "c5f3e4d6-3d40-4e5f-a061-7c8d9e0f1a26",
                            "/stats",
                            "Win stats",
                            "Who wins, at what, and how often",
                            ItemIcon::Chart,
                            ItemTone::Rose,
                        ),
                        item(
                            "c5f3e4d6-3d40-4e5f-a061-7c8d9e0f1a27",
                            "/calendar",
                            "Game nights",
                            "Upcoming and past game nights",
                            ItemIcon::Calendar,
                            ItemTone::Sky,
                        ),
                    ],
                )],
            ),
        ],
    };
    config.renormalize();
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::schema::validate_config;

    #[test]
    fn default_config_is_valid_and_normalized() {
        let config = default_nav_config();
        assert!(validate_config(&config).is_ok());
        assert!(config.is_normalized());
        assert_eq!(config.mega_menus.len(), 2);
        assert_eq!(config.mega_menus[0].groups[0].items.len(), 3);
    }
}
