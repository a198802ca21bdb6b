use super::*;
use js_sys::Promise;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(inline_js = r#"
function fail(message) {
  throw new Error(message);
}

function capacitor() {
  const cap = globalThis.Capacitor;
  if (!cap) fail('Capacitor runtime unavailable');
  return cap;
}

function plugin(name) {
  const plugins = capacitor().Plugins || {};
  const found = plugins[name];
  if (!found) fail(`Capacitor plugin unavailable: ${name}`);
  return found;
}

function keyValuePlugin() {
  const plugins = capacitor().Plugins || {};
  const found = plugins.Preferences || plugins.Storage;
  if (!found) fail('Capacitor key-value plugin unavailable');
  return found;
}

function fsOptions(path, directory) {
  return directory ? { path, directory } : { path };
}

function blobToBase64(blob) {
  return new Promise((resolve, reject) => {
    const reader = new FileReader();
    reader.onerror = () => reject(reader.error || new Error('blob read failed'));
    reader.onload = () => {
      const text = String(reader.result || '');
      const comma = text.indexOf(',');
      resolve(comma >= 0 ? text.slice(comma + 1) : text);
    };
    reader.readAsDataURL(blob);
  });
}

export function jsIsNativePlatform() {
  const cap = globalThis.Capacitor;
  if (!cap) return false;
  if (typeof cap.isNativePlatform === 'function') return !!cap.isNativePlatform();
  return typeof cap.getPlatform === 'function' && cap.getPlatform() !== 'web';
}

export async function jsCameraGetPhoto(options) {
  const photo = await plugin('Camera').getPhoto(options);
  return { webPath: photo.webPath, path: photo.path ?? null, format: photo.format ?? 'jpeg' };
}

export async function jsFsWriteFile(path, data, directory) {
  await plugin('Filesystem').writeFile({ ...fsOptions(path, directory), data });
  return null;
}

export async function jsFsReadFile(path, directory) {
  const result = await plugin('Filesystem').readFile(fsOptions(path, directory));
  const data = result.data instanceof Blob ? await blobToBase64(result.data) : String(result.data ?? '');
  return { data };
}

export async function jsFsGetUri(path, directory) {
  const result = await plugin('Filesystem').getUri(fsOptions(path, directory));
  return { uri: result.uri };
}

export async function jsKvGet(key) {
  const result = await keyValuePlugin().get({ key });
  return result.value ?? null;
}

export async function jsKvSet(key, value) {
  await keyValuePlugin().set({ key, value });
  return null;
}

export async function jsKvRemove(key) {
  await keyValuePlugin().remove({ key });
  return null;
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsIsNativePlatform)]
    fn js_is_native_platform() -> bool;

    #[wasm_bindgen(js_name = jsCameraGetPhoto)]
    fn js_camera_get_photo(options: JsValue) -> Promise;

    #[wasm_bindgen(js_name = jsFsWriteFile)]
    fn js_fs_write_file(path: &str, data: &str, directory: Option<String>) -> Promise;
    #[wasm_bindgen(js_name = jsFsReadFile)]
    fn js_fs_read_file(path: &str, directory: Option<String>) -> Promise;
    #[wasm_bindgen(js_name = jsFsGetUri)]
    fn js_fs_get_uri(path: &str, directory: Option<String>) -> Promise;

    #[wasm_bindgen(js_name = jsKvGet)]
    fn js_kv_get(key: &str) -> Promise;
    #[wasm_bindgen(js_name = jsKvSet)]
    fn js_kv_set(key: &str, value: &str) -> Promise;
    #[wasm_bindgen(js_name = jsKvRemove)]
    fn js_kv_remove(key: &str) -> Promise;
}

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error_to_string)
}

pub(crate) fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

async fn promise_to_json<T: DeserializeOwned>(promise: Promise) -> Result<T, String> {
    let value = await_promise(promise).await?;
    from_value(value).map_err(|e| e.to_string())
}

fn directory_token(directory: Option<Directory>) -> Option<String> {
    directory.map(|directory| directory.as_str().to_string())
}

pub fn is_native_platform() -> bool {
    js_is_native_platform()
}

pub async fn camera_get_photo(options: CameraOptions) -> Result<CapturedPhoto, String> {
    let value = options
        .serialize(&Serializer::json_compatible())
        .map_err(|e| e.to_string())?;
    promise_to_json(js_camera_get_photo(value)).await
}

pub async fn fs_write_file(
    path: &str,
    data: &str,
    directory: Option<Directory>,
) -> Result<(), String> {
    await_promise(js_fs_write_file(path, data, directory_token(directory)))
        .await
        .map(|_| ())
}

pub async fn fs_read_file(
    path: &str,
    directory: Option<Directory>,
) -> Result<FileReadResult, String> {
    promise_to_json(js_fs_read_file(path, directory_token(directory))).await
}

pub async fn fs_get_uri(path: &str, directory: Option<Directory>) -> Result<FileUriResult, String> {
    promise_to_json(js_fs_get_uri(path, directory_token(directory))).await
}

pub async fn kv_get(key: &str) -> Result<Option<String>, String> {
    let value = await_promise(js_kv_get(key)).await?;
    Ok(value.as_string())
}

pub async fn kv_set(key: &str, value: &str) -> Result<(), String> {
    await_promise(js_kv_set(key, value)).await.map(|_| ())
}

pub async fn kv_remove(key: &str) -> Result<(), String> {
    await_promise(js_kv_remove(key)).await.map(|_| ())
}
