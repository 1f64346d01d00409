pub fn now() -> i64 {
    chrono::Local::now().timestamp()
}

pub fn now_millis() -> i64 {
    chrono::Local::now().timestamp_millis()
}
