//! Best-effort camera media stream acquisition.
//!
//! ERROR HANDLING
//! ==============
//! Every failure path collapses to `None`: the camera screen falls back to
//! its static placeholder rather than surfacing an error. The stream is for
//! display only — nothing is captured or uploaded.

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast as _;

/// Request a video stream from the environment-facing camera.
#[cfg(feature = "csr")]
pub async fn open_camera_stream() -> Option<web_sys::MediaStream> {
    let navigator = web_sys::window()?.navigator();
    let devices = navigator.media_devices().ok()?;

    let constraints = web_sys::MediaStreamConstraints::new();
    constraints.set_video(&wasm_bindgen::JsValue::TRUE);

    let promise = devices.get_user_media_with_constraints(&constraints).ok()?;
    match wasm_bindgen_futures::JsFuture::from(promise).await {
        Ok(value) => value.dyn_into::<web_sys::MediaStream>().ok(),
        Err(_) => {
            log::warn!("camera access not available in this environment");
            None
        }
    }
}

/// Stop every track on the stream, releasing the camera.
#[cfg(feature = "csr")]
pub fn stop_stream(stream: &web_sys::MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
            track.stop();
        }
    }
}
