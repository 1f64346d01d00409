use crate::util::date_util::now_millis;
use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::panic;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

static FALLBACK_SEQ: AtomicU64 = AtomicU64::new(0);

/// 生成带连字符的 v4 UUID，作为导航节点 id；系统随机源不可用时退回 [`build_fallback_id`]
pub fn build_id() -> String {
    match panic::catch_unwind(Uuid::new_v4) {
        Ok(id) => id.hyphenated().to_string(),
        Err(_) => {
            warn!("system random source unavailable, using time based id");
            build_fallback_id()
        }
    }
}

/// 毫秒时间戳 + 伪随机数，排成 8-4-4-4-12 的 UUID 形式
pub fn build_fallback_id() -> String {
    let millis = now_millis() as u64;
    let seq = FALLBACK_SEQ.fetch_add(1, Ordering::Relaxed);
    let mut rng = StdRng::seed_from_u64(millis ^ seq.rotate_left(32));
    let mut bytes = [0u8; 16];
    bytes[..6].copy_from_slice(&millis.to_be_bytes()[2..]);
    rng.fill(&mut bytes[6..]);
    bytes[6] = (bytes[6] & 0x0F) | 0x70;
    bytes[8] = (bytes[8] & 0x3F) | 0x80;
    Uuid::from_bytes(bytes).hyphenated().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::validate::validate_uuid;

    #[test]
    fn build_id_is_uuid_shaped() {
        let id = build_id();
        assert!(validate_uuid(&id).is_ok(), "{id}");
        assert_ne!(id, build_id());
    }

    #[test]
    fn fallback_ids_pass_uuid_check_and_differ() {
        let a = build_fallback_id();
        let b = build_fallback_id();
        assert!(validate_uuid(&a).is_ok(), "{a}");
        assert!(validate_uuid(&b).is_ok(), "{b}");
        assert_ne!(a, b);
    }

    #[test]
    fn fallback_id_starts_with_timestamp() {
        let before = now_millis() as u64;
        let id = build_fallback_id();
        let hex: String = id.replace('-', "")[..12].to_string();
        let millis = u64::from_str_radix(&hex, 16).unwrap();
        assert!(millis >= before);
    }
}
