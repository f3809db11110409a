use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tour_core::{MusicControl, MusicState, TourError};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// The page's one background music player. Created once in `init` and owned
/// by the app for the page lifetime.
pub struct BackgroundMusic {
    element: web::HtmlAudioElement,
    state: Rc<Cell<MusicState>>,
    on_revert: Rc<RefCell<Option<Box<dyn Fn()>>>>,
}

impl BackgroundMusic {
    pub fn new(src: &str) -> tour_core::Result<Self> {
        let element = web::HtmlAudioElement::new_with_src(src)
            .map_err(|e| TourError::Playback(format!("{:?}", e)))?;
        element.set_loop(true);
        element.set_preload("none");
        let state = MusicState::default();
        element.set_volume(state.volume as f64);
        log::info!("[music] source {}", src);
        Ok(Self {
            element,
            state: Rc::new(Cell::new(state)),
            on_revert: Rc::new(RefCell::new(None)),
        })
    }

    /// Called after a failed play has switched `playing` back off.
    pub fn set_on_revert(&self, callback: impl Fn() + 'static) {
        *self.on_revert.borrow_mut() = Some(Box::new(callback));
    }

    pub fn state(&self) -> MusicState {
        self.state.get()
    }

    fn apply_volume(&self) {
        self.element.set_volume(self.state.get().volume as f64);
    }

    fn apply(&self) {
        self.apply_volume();
        let state = self.state.get();
        if !state.playing {
            _ = self.element.pause();
            return;
        }
        let attempt = state.generation();
        match self.element.play() {
            Ok(promise) => {
                let shared = self.state.clone();
                let on_revert = self.on_revert.clone();
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        // autoplay policy, missing file, or cut short by pause()
                        log::warn!("[music] play rejected: {:?}", e);
                        let mut s = shared.get();
                        if s.play_rejected(attempt) {
                            shared.set(s);
                            if let Some(cb) = on_revert.borrow().as_ref() {
                                cb();
                            }
                        }
                    }
                });
            }
            Err(e) => {
                log::warn!("[music] play failed: {:?}", e);
                let mut s = state;
                if s.play_rejected(attempt) {
                    self.state.set(s);
                }
            }
        }
    }
}

impl MusicControl for BackgroundMusic {
    fn toggle(&mut self) {
        let mut s = self.state.get();
        s.toggle();
        self.state.set(s);
        log::info!("[music] playing={}", s.playing);
        self.apply();
    }

    fn adjust_volume(&mut self, delta: f32) {
        let mut s = self.state.get();
        s.adjust_volume(delta);
        self.state.set(s);
        self.apply_volume();
    }
}
