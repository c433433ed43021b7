//! Looped background-music playback bound to the timer's running flag.
//!
//! The `<audio>` element never enters the DOM; it lives here together with
//! the object URL of the currently selected file. Autoplay policies can
//! reject `play()` at any time, so the returned promise is awaited on a
//! spawned future and a rejection only reaches the console.

use log::{info, warn};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{File, HtmlAudioElement, Url};

pub struct MusicPlayer {
    audio: HtmlAudioElement,
    track_url: Option<String>,
}

impl MusicPlayer {
    pub fn new() -> Option<Self> {
        match HtmlAudioElement::new() {
            Ok(audio) => {
                audio.set_loop(true);
                Some(Self {
                    audio,
                    track_url: None,
                })
            }
            Err(err) => {
                warn!("audio element unavailable: {:?}", err);
                None
            }
        }
    }

    /// Swap in a newly picked file. The previous track's object URL is
    /// released before the new one is created.
    pub fn set_track(&mut self, file: &File) {
        self.release_track();
        match Url::create_object_url_with_blob(file) {
            Ok(url) => {
                info!("music track set to {}", file.name());
                self.audio.set_src(&url);
                self.track_url = Some(url);
            }
            Err(err) => {
                warn!("could not create object URL for {}: {:?}", file.name(), err);
            }
        }
    }

    /// Follow the engine's running flag. No-op until a track is selected.
    pub fn set_playing(&self, playing: bool) {
        if self.track_url.is_none() {
            return;
        }
        if playing {
            match self.audio.play() {
                Ok(promise) => spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        warn!("audio playback blocked: {:?}", err);
                    }
                }),
                Err(err) => warn!("audio play() failed: {:?}", err),
            }
        } else if let Err(err) = self.audio.pause() {
            warn!("audio pause() failed: {:?}", err);
        }
    }

    fn release_track(&mut self) {
        if let Some(url) = self.track_url.take() {
            let _ = self.audio.pause();
            if let Err(err) = Url::revoke_object_url(&url) {
                warn!("failed to revoke object URL: {:?}", err);
            }
        }
    }
}

impl Drop for MusicPlayer {
    fn drop(&mut self) {
        self.release_track();
    }
}
