//! The page session exposed to JavaScript.
//!
//! [`JsSession`] wraps the core [`Session`] together with the object URLs
//! that back each preview. Intake reads files asynchronously, so the state
//! is shared through `Rc<RefCell<_>>`; it is only borrowed after every read
//! has resolved and is never held across an `.await`.
//!
//! ```typescript
//! const session = new JsSession({ defaultPercent: 30 });
//! await session.intake(input.files);
//! session.percent = 60;
//! session.compress();
//! for (const [i, p] of session.previews().entries()) {
//!   console.log(p.name, p.sizeLabel, p.url);
//!   session.download(i);
//! }
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use imgpress_core::{CompressPercent, PreviewItem, Session};
use js_sys::Promise;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::FileList;

use crate::browser;
use crate::types::{compress_error, parse_options, preview_views};

#[derive(Default)]
struct SessionState {
    session: Session,
    /// One object URL per preview, same order.
    urls: Vec<String>,
    /// Bumped by every intake; only the latest one may publish.
    intake_generation: u64,
}

impl SessionState {
    fn begin_intake(&mut self) -> u64 {
        self.intake_generation += 1;
        self.intake_generation
    }

    fn is_latest_intake(&self, generation: u64) -> bool {
        self.intake_generation == generation
    }

    /// Apply `update` and swap in URLs for the new previews.
    ///
    /// Previews and URLs change together or not at all: if `mint` fails the
    /// session is rolled back and the old URLs stay live.
    fn publish<T>(
        &mut self,
        update: impl FnOnce(&mut Session) -> Result<T, JsValue>,
        mint: impl FnOnce(&[PreviewItem]) -> Result<Vec<String>, JsValue>,
    ) -> Result<T, JsValue> {
        let previous = self.session.clone();
        let value = update(&mut self.session)?;

        let urls = match mint(self.session.previews()) {
            Ok(urls) => urls,
            Err(err) => {
                warn!(error = ?err, "object URLs unavailable, keeping previous previews");
                self.session = previous;
                return Err(err);
            }
        };

        browser::revoke_object_urls(std::mem::replace(&mut self.urls, urls));
        Ok(value)
    }
}

/// Session controller for the compressor page.
#[wasm_bindgen]
pub struct JsSession {
    state: Rc<RefCell<SessionState>>,
}

#[wasm_bindgen]
impl JsSession {
    /// Create a session. `options` may be omitted or `{ defaultPercent }`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<JsSession, JsValue> {
        let options = parse_options(options)?;
        Ok(Self {
            state: Rc::new(RefCell::new(SessionState {
                session: Session::new(options),
                ..SessionState::default()
            })),
        })
    }

    /// Load a selection from a file input or a drop event.
    ///
    /// Non-image files are ignored. Resolves with the number of previews
    /// once every image has been read; nothing changes before that. If a
    /// newer selection arrives first, this one is discarded.
    pub fn intake(&self, files: FileList) -> Promise {
        let state = Rc::clone(&self.state);
        let generation = self.state.borrow_mut().begin_intake();
        let selected = files.length();
        let files = browser::image_files(&files);
        debug!(generation, selected, images = files.len(), "reading selection");

        future_to_promise(async move {
            let read = browser::read_files(files).await;

            let mut state = state.borrow_mut();
            if !state.is_latest_intake(generation) {
                debug!(generation, "newer selection started, dropping this one");
                return Ok(JsValue::from(state.session.len() as u32));
            }

            let candidates = read.inspect_err(|err| {
                warn!(error = ?err, "file read failed, selection discarded");
            })?;
            let count = state.publish(|session| Ok(session.intake(candidates)), browser::object_urls)?;
            Ok(JsValue::from(count as u32))
        })
    }

    /// Re-encode every preview once. Throws if the batch was already
    /// compressed, is empty, or any image fails to decode or encode; the
    /// previews are unchanged in every one of those cases.
    pub fn compress(&self) -> Result<usize, JsValue> {
        let count = self.state.borrow_mut().publish(
            |session| session.compress().map(<[_]>::len).map_err(compress_error),
            browser::object_urls,
        )?;
        debug!(count, "published compressed previews");
        Ok(count)
    }

    /// Current previews as `{ name, url, size, sizeLabel, mediaType }[]`.
    pub fn previews(&self) -> Result<JsValue, JsValue> {
        let state = self.state.borrow();
        let views = preview_views(&state.session, &state.urls);
        serde_wasm_bindgen::to_value(&views).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Save one preview's current bytes under its original name.
    pub fn download(&self, index: usize) -> Result<(), JsValue> {
        let state = self.state.borrow();
        let item = state
            .session
            .previews()
            .get(index)
            .ok_or_else(|| JsValue::from_str(&format!("No preview at index {index}")))?;
        let url = state
            .urls
            .get(index)
            .ok_or_else(|| JsValue::from_str(&format!("No object URL for {}", item.name)))?;

        browser::trigger_download(url, &item.name)
    }

    #[wasm_bindgen(getter)]
    pub fn percent(&self) -> u8 {
        self.state.borrow().session.percent().get()
    }

    /// Any number is accepted; it is rounded and clamped to 1-100.
    #[wasm_bindgen(setter)]
    pub fn set_percent(&self, value: f64) {
        let percent = CompressPercent::from_f64(value);
        self.state.borrow_mut().session.set_percent(percent.get());
    }

    #[wasm_bindgen(getter = qualityFraction)]
    pub fn quality_fraction(&self) -> f64 {
        self.state.borrow().session.quality_fraction()
    }

    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.state.borrow().session.len()
    }

    #[wasm_bindgen(getter = isCompressed)]
    pub fn is_compressed(&self) -> bool {
        self.state.borrow().session.is_compressed()
    }

    #[wasm_bindgen(getter = canCompress)]
    pub fn can_compress(&self) -> bool {
        self.state.borrow().session.can_compress()
    }

    #[wasm_bindgen(getter = showDropZone)]
    pub fn show_drop_zone(&self) -> bool {
        self.state.borrow().session.show_drop_zone()
    }

    #[wasm_bindgen(getter = downloadAvailable)]
    pub fn download_available(&self) -> bool {
        self.state.borrow().session.download_available()
    }
}

impl Drop for JsSession {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.try_borrow_mut() {
            browser::revoke_object_urls(std::mem::take(&mut state.urls));
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::browser::fixtures::{file, file_list};
    use crate::encode::tests::tiny_png;
    use imgpress_core::CandidateFile;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn names(session: &JsSession) -> Vec<String> {
        let state = session.state.borrow();
        state.session.previews().iter().map(|p| p.name.clone()).collect()
    }

    #[wasm_bindgen_test]
    fn test_new_session_defaults() {
        let session = JsSession::new(JsValue::UNDEFINED).unwrap();

        assert_eq!(session.percent(), 30);
        assert!((session.quality_fraction() - 0.7).abs() < 1e-9);
        assert!(session.show_drop_zone());
        assert!(!session.can_compress());
        assert!(!session.download_available());
    }

    #[wasm_bindgen_test]
    fn test_options_object() {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"defaultPercent".into(), &JsValue::from(75)).unwrap();

        let session = JsSession::new(options.into()).unwrap();
        assert_eq!(session.percent(), 75);
    }

    #[wasm_bindgen_test]
    fn test_set_percent_clamps() {
        let session = JsSession::new(JsValue::NULL).unwrap();

        session.set_percent(300.0);
        assert_eq!(session.percent(), 100);

        session.set_percent(256.0);
        assert_eq!(session.percent(), 100);

        session.set_percent(0.0);
        assert_eq!(session.percent(), 1);
    }

    #[wasm_bindgen_test]
    async fn test_intake_publishes_images_once() {
        let session = JsSession::new(JsValue::NULL).unwrap();
        let files = file_list(&[
            file("a.png", "image/png", &tiny_png()),
            file("notes.txt", "text/plain", b"hello"),
            file("b.png", "image/png", &tiny_png()),
        ]);

        let pending = session.intake(files);
        // Nothing is visible until every read has resolved.
        assert!(session.show_drop_zone());

        let count = JsFuture::from(pending).await.unwrap();

        assert_eq!(count.as_f64(), Some(2.0));
        assert_eq!(names(&session), ["a.png", "b.png"]);
        assert_eq!(session.state.borrow().urls.len(), 2);
        assert!(session.can_compress());
    }

    #[wasm_bindgen_test]
    async fn test_stale_intake_is_ignored() {
        let session = JsSession::new(JsValue::NULL).unwrap();

        let older = session.intake(file_list(&[file("old.png", "image/png", &tiny_png())]));
        let newer = session.intake(file_list(&[]));

        JsFuture::from(newer).await.unwrap();
        JsFuture::from(older).await.unwrap();

        assert!(names(&session).is_empty());
        assert!(session.show_drop_zone());
    }

    #[wasm_bindgen_test]
    fn test_failed_urls_roll_back() {
        let session = JsSession::new(JsValue::NULL).unwrap();
        let mut state = session.state.borrow_mut();
        state
            .publish(
                |s| Ok(s.intake([CandidateFile::new("keep.png", "image/png", tiny_png())])),
                browser::object_urls,
            )
            .unwrap();
        let urls_before = state.urls.clone();

        let result = state.publish(
            |s| Ok(s.intake([CandidateFile::new("new.png", "image/png", tiny_png())])),
            |_| Err(JsValue::from_str("out of URLs")),
        );

        assert!(result.is_err());
        assert_eq!(state.session.previews()[0].name, "keep.png");
        assert_eq!(state.urls, urls_before);
    }

    #[wasm_bindgen_test]
    fn test_compress_empty_session_throws() {
        let session = JsSession::new(JsValue::NULL).unwrap();
        assert!(session.compress().is_err());
        assert!(!session.is_compressed());
    }

    #[wasm_bindgen_test]
    fn test_compress_publishes_new_urls() {
        let session = JsSession::new(JsValue::NULL).unwrap();
        session
            .state
            .borrow_mut()
            .publish(
                |s| Ok(s.intake([CandidateFile::new("dot.png", "image/png", tiny_png())])),
                browser::object_urls,
            )
            .unwrap();
        let before = session.state.borrow().urls.clone();

        assert_eq!(session.compress().unwrap(), 1);

        let after = session.state.borrow().urls.clone();
        assert_eq!(after.len(), 1);
        assert_ne!(before, after);
        assert!(session.download_available());
        assert!(session.compress().is_err());
    }
}
