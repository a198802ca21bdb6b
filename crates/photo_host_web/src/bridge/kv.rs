pub(crate) async fn kv_get(key: &str) -> Result<Option<String>, String> {
    super::interop::kv_get(key).await
}

pub(crate) async fn kv_set(key: &str, value: &str) -> Result<(), String> {
    super::interop::kv_set(key, value).await
}

pub(crate) async fn kv_remove(key: &str) -> Result<(), String> {
    super::interop::kv_remove(key).await
}
