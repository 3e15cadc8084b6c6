//! Recording stand-ins for the kira backend, used by board tests
use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::{PlaybackError, SoundLoader, SoundPlayer};

/// What a fake player has been asked to do, shared with the test
#[derive(Debug, Default)]
pub struct PlayerLog {
    pub plays: usize,
    pub stops: usize,
    pub playing: bool,
    pub volume: f32,
    pub looping: bool,
}

#[derive(Debug, Default)]
pub struct FakeLoader {
    /// Paths that fail to decode even if they exist
    pub broken: HashSet<PathBuf>,
    pub loaded: Vec<(PathBuf, Rc<RefCell<PlayerLog>>)>,
}

impl FakeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log of the most recent player created for `path`
    pub fn log_for(&self, path: &Path) -> Option<Rc<RefCell<PlayerLog>>> {
        self.loaded
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, log)| Rc::clone(log))
    }
}

impl SoundLoader for FakeLoader {
    fn load(&mut self, path: &Path) -> Result<Box<dyn SoundPlayer>, PlaybackError> {
        if !path.is_file() || self.broken.contains(path) {
            return Err(PlaybackError::Load {
                path: path.to_path_buf(),
                reason: "not decodable".to_owned(),
            });
        }
        let log = Rc::new(RefCell::new(PlayerLog {
            volume: 1.0,
            ..PlayerLog::default()
        }));
        self.loaded.push((path.to_path_buf(), Rc::clone(&log)));
        Ok(Box::new(FakePlayer { log }))
    }
}

#[derive(Debug)]
pub struct FakePlayer {
    log: Rc<RefCell<PlayerLog>>,
}

impl SoundPlayer for FakePlayer {
    fn play(&mut self) -> Result<(), PlaybackError> {
        let mut log = self.log.borrow_mut();
        if log.playing {
            log.stops += 1;
        }
        log.plays += 1;
        log.playing = true;
        Ok(())
    }

    fn stop(&mut self) {
        let mut log = self.log.borrow_mut();
        if log.playing {
            log.stops += 1;
            log.playing = false;
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.log.borrow_mut().volume = volume.clamp(0.0, 1.0);
    }

    fn set_looping(&mut self, looping: bool) {
        self.log.borrow_mut().looping = looping;
    }

    fn volume(&self) -> f32 {
        self.log.borrow().volume
    }

    fn looping(&self) -> bool {
        self.log.borrow().looping
    }

    fn is_playing(&self) -> bool {
        self.log.borrow().playing
    }
}
