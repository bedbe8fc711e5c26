use crate::core::{parse_glb, DownloadProgress, ModelData};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

fn content_length(resp: &web::Response) -> Option<u64> {
    resp.headers()
        .get("content-length")
        .ok()
        .flatten()
        .and_then(|v| v.trim().parse().ok())
}

/// Drain a response body chunk by chunk, reporting progress as it goes.
async fn read_body(
    body: web::ReadableStream,
    progress: &mut DownloadProgress,
    on_progress: &mut impl FnMut(Option<u8>),
) -> anyhow::Result<Vec<u8>> {
    let reader: web::ReadableStreamDefaultReader = body.get_reader().dyn_into().map_err(js_err)?;
    let mut bytes = Vec::new();
    loop {
        let chunk = JsFuture::from(reader.read()).await.map_err(js_err)?;
        let done = js_sys::Reflect::get(&chunk, &JsValue::from_str("done"))
            .map_err(js_err)?
            .is_truthy();
        if done {
            break;
        }
        let value = js_sys::Reflect::get(&chunk, &JsValue::from_str("value")).map_err(js_err)?;
        let part: js_sys::Uint8Array = value.dyn_into().map_err(js_err)?;
        let start = bytes.len();
        bytes.resize(start + part.length() as usize, 0);
        part.copy_to(&mut bytes[start..]);
        if let Some(pct) = progress.advance(part.length() as u64) {
            on_progress(pct);
        }
    }
    Ok(bytes)
}

/// GET `url`, calling `on_progress` whenever the whole-percent value changes.
/// The percentage is `None` when the server sent no usable `Content-Length`.
pub async fn fetch_bytes(
    url: &str,
    mut on_progress: impl FnMut(Option<u8>),
) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::Cors);
    let request = web::Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    let resp: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("GET {} -> {} {}", url, resp.status(), resp.status_text());
    }

    let mut progress = DownloadProgress::new(content_length(&resp));
    if let Some(body) = resp.body() {
        return read_body(body, &mut progress, &mut on_progress).await;
    }
    // no stream support: one jump to done
    let buf = JsFuture::from(resp.array_buffer().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let bytes = js_sys::Uint8Array::new(&buf).to_vec();
    if let Some(pct) = progress.advance(bytes.len() as u64) {
        on_progress(pct);
    }
    Ok(bytes)
}

/// Fetch and decode the model, centred on the origin.
pub async fn load_model(
    url: &str,
    on_progress: impl FnMut(Option<u8>),
) -> anyhow::Result<ModelData> {
    let bytes = fetch_bytes(url, on_progress).await?;
    log::info!("[model] fetched {} ({} bytes)", url, bytes.len());
    let model = parse_glb(&bytes)?.recentered();
    log::info!(
        "[model] {} vertices, {} triangles ({} blended)",
        model.vertices.len(),
        model.triangle_count(),
        model.blend_indices().len() / 3
    );
    Ok(model)
}
