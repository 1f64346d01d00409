//! 导航配置文档校验
//!
//! 文档要么整体通过，要么整体拒绝：serde 负责结构（必填字段、基本类型、
//! 图标与色调的取值范围），`validator` 负责字段规则（UUID、菜单 id 非空），
//! 最后检查同级 id 唯一。通过后各列表按 `sortOrder` 排序并重新编号为 1..N。

use crate::entitys::nav_entity::{NavConfig, Ordered};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("malformed navigation config: {0}")]
    Shape(String),
    #[error("invalid navigation config: {0}")]
    Rules(String),
    #[error("duplicate id `{id}` in {scope}")]
    DuplicateId { scope: String, id: String },
}

/// 校验任意 JSON，返回的各列表按 `sortOrder` 排序且编号连续
pub fn validate(raw: &Value) -> Result<NavConfig, SchemaError> {
    let mut config = NavConfig::deserialize(raw).map_err(|e| SchemaError::Shape(e.to_string()))?;
    validate_config(&config)?;
    config.sort_by_order();
    config.renormalize();
    Ok(config)
}

pub fn validate_str(raw: &str) -> Result<NavConfig, SchemaError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| SchemaError::Shape(e.to_string()))?;
    validate(&value)
}

/// 已反序列化的树：字段规则 + 同级 id 唯一
pub fn validate_config(config: &NavConfig) -> Result<(), SchemaError> {
    config.validate().map_err(|e| SchemaError::Rules(e.to_string()))?;

    unique_ids(&config.primary_links, "primaryLinks")?;
    unique_ids(&config.mega_menus, "megaMenus")?;
    for menu in &config.mega_menus {
        unique_ids(&menu.groups, &format!("megaMenus[{}].groups", menu.id))?;
        for group in &menu.groups {
            unique_ids(&group.items, &format!("megaMenus[{}].groups[{}].items", menu.id, group.id))?;
        }
    }
    Ok(())
}

fn unique_ids<T: Ordered>(list: &[T], scope: &str) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for node in list {
        if !seen.insert(node.node_id()) {
            return Err(SchemaError::DuplicateId { scope: scope.to_string(), id: node.node_id().to_string() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::default_config::default_nav_config;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "primaryLinks": [
                {"id": "6f1c0d2a-53f4-4c1e-9a77-0d5c2f3b4a11", "href": "/players", "label": "Players",
                 "icon": "users", "sortOrder": 2, "isVisible": true},
                {"id": "6f1c0d2a-53f4-4c1e-9a77-0d5c2f3b4a10", "href": "/", "label": "Home",
                 "icon": "home", "sortOrder": 1, "isVisible": false}
            ],
            "megaMenus": [
                {"id": "play", "label": "Play", "sortOrder": 1, "isVisible": true, "groups": [
                    {"id": "6f1c0d2a-53f4-4c1e-9a77-0d5c2f3b4a20", "title": "Tonight", "sortOrder": 1,
                     "isVisible": true, "items": [
                        {"id": "6f1c0d2a-53f4-4c1e-9a77-0d5c2f3b4a30", "href": "/random", "title": "Pick a game",
                         "description": "Let the dice decide", "icon": "shuffle", "tone": "emerald",
                         "sortOrder": 1, "isVisible": true}
                    ]}
                ]}
            ]
        })
    }

    #[test]
    fn accepts_well_formed_document_and_orders_lists() {
        let config = validate(&sample()).unwrap();
        assert_eq!(config.primary_links[0].label, "Home");
        assert_eq!(config.primary_links[1].label, "Players");
        assert_eq!(config.mega_menus[0].groups[0].items[0].title, "Pick a game");
    }

    #[test]
    fn rejects_unknown_icon() {
        let mut raw = sample();
        raw["megaMenus"][0]["groups"][0]["items"][0]["icon"] = json!("rocket");
        assert!(matches!(validate(&raw), Err(SchemaError::Shape(_))));
    }

    #[test]
    fn rejects_unknown_tone() {
        let mut raw = sample();
        raw["megaMenus"][0]["groups"][0]["items"][0]["tone"] = json!("neon");
        assert!(validate(&raw).is_err());
    }

    #[test]
    fn rejects_missing_field_and_wrong_types() {
        let mut missing = sample();
        missing["primaryLinks"][0].as_object_mut().unwrap().remove("href");
        assert!(validate(&missing).is_err());

        let mut wrong = sample();
        wrong["primaryLinks"][0]["isVisible"] = json!("yes");
        assert!(validate(&wrong).is_err());

        let mut fractional = sample();
        fractional["primaryLinks"][0]["sortOrder"] = json!(1.5);
        assert!(validate(&fractional).is_err());

        assert!(validate(&json!(null)).is_err());
        assert!(validate(&json!({"primaryLinks": []})).is_err());
    }

    #[test]
    fn rejects_non_uuid_ids_where_required() {
        let mut raw = sample();
        raw["megaMenus"][0]["groups"][0]["id"] = json!("tonight");
        assert!(matches!(validate(&raw), Err(SchemaError::Rules(_))));
    }

    #[test]
    fn menu_ids_need_not_be_uuids_but_must_be_present() {
        assert!(validate(&sample()).is_ok());
        let mut raw = sample();
        raw["megaMenus"][0]["id"] = json!("");
        assert!(matches!(validate(&raw), Err(SchemaError::Rules(_))));
    }

    #[test]
    fn rejects_duplicate_sibling_ids() {
        let mut raw = sample();
        raw["primaryLinks"][1]["id"] = raw["primaryLinks"][0]["id"].clone();
        assert!(matches!(validate(&raw), Err(SchemaError::DuplicateId { .. })));
    }

    #[test]
    fn serialized_default_round_trips() {
        let config = default_nav_config();
        let raw = serde_json::to_value(&config).unwrap();
        assert_eq!(validate(&raw).unwrap(), config);
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(validate_str(&text).unwrap(), config);
    }

    #[test]
    fn tied_and_gapped_orders_are_renumbered() {
        let mut raw = sample();
        raw["primaryLinks"][0]["sortOrder"] = json!(5);
        raw["primaryLinks"][1]["sortOrder"] = json!(5);
        raw["megaMenus"][0]["sortOrder"] = json!(7);
        raw["megaMenus"][0]["groups"][0]["items"][0]["sortOrder"] = json!(-3);
        let config = validate(&raw).unwrap();
        assert!(config.is_normalized());
        // 并列时保持文档中的先后顺序
        assert_eq!(config.primary_links[0].label, "Players");
        assert_eq!(config.primary_links[1].sort_order, 2);
        assert_eq!(config.mega_menus[0].sort_order, 1);
        assert_eq!(config.mega_menus[0].groups[0].items[0].sort_order, 1);
    }

    #[test]
    fn gapped_order_keeps_relative_position() {
        let mut raw = sample();
        raw["primaryLinks"][0]["sortOrder"] = json!(9);
        raw["primaryLinks"][1]["sortOrder"] = json!(3);
        let config = validate(&raw).unwrap();
        let orders: Vec<i32> = config.primary_links.iter().map(|l| l.sort_order).collect();
        assert_eq!(orders, vec![1, 2]);
        assert_eq!(config.primary_links[0].label, "Home");
    }

    #[test]
    fn empty_tree_is_valid() {
        let raw = json!({"primaryLinks": [], "megaMenus": []});
        assert_eq!(validate(&raw).unwrap(), NavConfig::empty());
    }
}
