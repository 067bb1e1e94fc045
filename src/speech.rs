use crate::error::SpeechError;
use crate::logger;
use crossbeam_channel::{Receiver, Sender, TryRecvError, TrySendError, bounded, unbounded};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

/// Programs tried, in order, when no speech command is configured.
pub const SPEECH_PROGRAMS: &[&str] = &["espeak-ng", "espeak", "say", "spd-say"];

pub trait Speaker: Send {
    fn speak(&self, text: &str) -> Result<(), SpeechError>;
}

/// Pronounces text by running an external program with the text as the last
/// argument.
#[derive(Debug, Clone)]
pub struct CommandSpeaker {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandSpeaker {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from a configured command line, or look for a known program on
    /// `PATH`.
    pub fn detect(command: Option<&[String]>) -> Option<Self> {
        if let Some((program, args)) = command.and_then(|c| c.split_first()) {
            return Some(Self::new(program, args.to_vec()));
        }

        let path = std::env::var_os("PATH")?;
        let dirs: Vec<PathBuf> = std::env::split_paths(&path).collect();
        find_program(SPEECH_PROGRAMS, &dirs).map(|program| Self::new(program, Vec::new()))
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| SpeechError::Failed(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(SpeechError::Failed(format!(
                "{} exited with {}",
                self.program.display(),
                status
            )))
        }
    }
}

pub fn find_program(candidates: &[&str], dirs: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find_map(|name| {
        dirs.iter()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

#[derive(Debug)]
pub enum SpeechRequest {
    Speak(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    Failed { text: String, error: SpeechError },
}

pub fn spawn_speech_worker(
    speaker: Box<dyn Speaker>,
    events: Sender<SpeechEvent>,
    requests: Receiver<SpeechRequest>,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("vocab-trainer::speech_worker".to_string())
        .spawn(move || {
            while let Ok(SpeechRequest::Speak(text)) = requests.recv() {
                logger::log(&format!("Speech worker pronouncing \"{}\"", text));
                if let Err(error) = speaker.speak(&text) {
                    logger::warn(&format!("Speech failed for \"{}\": {}", text, error));
                    let _ = events.send(SpeechEvent::Failed { text, error });
                }
            }
            logger::log("Speech worker channel disconnected, exiting");
        })
}

/// Pending requests kept while the worker is speaking. Further requests are
/// dropped so held keys do not pile up audio.
const SPEECH_QUEUE_CAPACITY: usize = 1;

/// Fire-and-forget front end to the speech worker. Without a speaker every
/// request reports [`SpeechError::Unavailable`] immediately.
pub struct SpeechHandle {
    requests: Option<Sender<SpeechRequest>>,
    events: Receiver<SpeechEvent>,
}

impl SpeechHandle {
    pub fn start(speaker: Option<Box<dyn Speaker>>) -> Self {
        let (event_tx, event_rx) = unbounded();
        let Some(speaker) = speaker else {
            return Self::unavailable_with(event_rx);
        };

        let (request_tx, request_rx) = bounded(SPEECH_QUEUE_CAPACITY);
        match spawn_speech_worker(speaker, event_tx, request_rx) {
            Ok(_) => Self {
                requests: Some(request_tx),
                events: event_rx,
            },
            Err(e) => {
                logger::warn(&format!("Failed to spawn speech worker: {}", e));
                Self::unavailable_with(event_rx)
            }
        }
    }

    pub fn unavailable() -> Self {
        let (_, event_rx) = unbounded();
        Self::unavailable_with(event_rx)
    }

    fn unavailable_with(events: Receiver<SpeechEvent>) -> Self {
        Self {
            requests: None,
            events,
        }
    }

    pub fn is_available(&self) -> bool {
        self.requests.is_some()
    }

    /// Queue `text` for pronunciation. A request made while the queue is
    /// full is dropped without error.
    pub fn speak(&self, text: &str) -> Result<(), SpeechError> {
        let requests = self.requests.as_ref().ok_or(SpeechError::Unavailable)?;
        match requests.try_send(SpeechRequest::Speak(text.to_string())) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                logger::log(&format!("Speech busy, dropping \"{}\"", text));
                Ok(())
            }
            Err(TrySendError::Disconnected(_)) => Err(SpeechError::Unavailable),
        }
    }

    /// Collect failures reported by the worker since the last call.
    pub fn drain_events(&self) -> Vec<SpeechEvent> {
        let mut drained = Vec::new();
        loop {
            match self.events.try_recv() {
                Ok(event) => drained.push(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        drained
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    struct RecordingSpeaker {
        spoken: Arc<Mutex<Vec<String>>>,
        done: Sender<()>,
    }

    impl Speaker for RecordingSpeaker {
        fn speak(&self, text: &str) -> Result<(), SpeechError> {
            self.spoken.lock().unwrap().push(text.to_string());
            let _ = self.done.send(());
            Ok(())
        }
    }

    /// Blocks inside `speak` until released, reporting when it starts.
    struct GatedSpeaker {
        spoken: Arc<Mutex<Vec<String>>>,
        started: Sender<()>,
        release: Receiver<()>,
    }

    impl Speaker for GatedSpeaker {
        fn speak(&self, text: &str) -> Result<(), SpeechError> {
            self.spoken.lock().unwrap().push(text.to_string());
            let _ = self.started.send(());
            let _ = self.release.recv();
            Ok(())
        }
    }

    struct BrokenSpeaker;

    impl Speaker for BrokenSpeaker {
        fn speak(&self, _text: &str) -> Result<(), SpeechError> {
            Err(SpeechError::Failed("no audio device".to_string()))
        }
    }

    #[test]
    fn test_unavailable_handle_reports_error() {
        let handle = SpeechHandle::unavailable();
        assert!(!handle.is_available());
        assert_eq!(handle.speak("abandon"), Err(SpeechError::Unavailable));
        assert!(handle.drain_events().is_empty());

        let handle = SpeechHandle::start(None);
        assert_eq!(handle.speak("abandon"), Err(SpeechError::Unavailable));
    }

    #[test]
    fn test_worker_speaks_requests() {
        let spoken = Arc::new(Mutex::new(Vec::new()));
        let (done_tx, done_rx) = unbounded();
        let handle = SpeechHandle::start(Some(Box::new(RecordingSpeaker {
            spoken: Arc::clone(&spoken),
            done: done_tx,
        })));

        assert!(handle.is_available());
        handle.speak("culture").unwrap();
        done_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        handle.speak("habit").unwrap();
        done_rx.recv_timeout(Duration::from_secs(5)).unwrap();

        assert_eq!(*spoken.lock().unwrap(), vec!["culture", "habit"]);
        assert!(handle.drain_events().is_empty());
    }

    #[test]
    fn test_requests_while_busy_are_dropped() {
        let spoken = Arc::new(Mutex::new(Vec::new()));
        let (started_tx, started_rx) = unbounded();
        let (release_tx, release_rx) = unbounded();
        let handle = SpeechHandle::start(Some(Box::new(GatedSpeaker {
            spoken: Arc::clone(&spoken),
            started: started_tx,
            release: release_rx,
        })));

        handle.speak("abandon").unwrap();
        started_rx.recv_timeout(Duration::from_secs(5)).unwrap();

        // One request waits while "abandon" plays; the rest are dropped.
        for word in ["ability", "able", "abroad", "absent"] {
            assert_eq!(handle.speak(word), Ok(()));
        }

        release_tx.send(()).unwrap();
        started_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        release_tx.send(()).unwrap();
        assert!(started_rx.recv_timeout(Duration::from_millis(200)).is_err());

        assert_eq!(*spoken.lock().unwrap(), vec!["abandon", "ability"]);
        assert!(handle.drain_events().is_empty());
    }

    #[test]
    fn test_worker_reports_failures() {
        let handle = SpeechHandle::start(Some(Box::new(BrokenSpeaker)));
        handle.speak("journey").unwrap();

        let mut events = Vec::new();
        for _ in 0..100 {
            events.extend(handle.drain_events());
            if !events.is_empty() {
                break;
            }
            thread::sleep(Duration::from_millis(20));
        }

        assert_eq!(
            events,
            vec![SpeechEvent::Failed {
                text: "journey".to_string(),
                error: SpeechError::Failed("no audio device".to_string()),
            }]
        );
    }

    #[test]
    fn test_detect_prefers_configured_command() {
        let command = vec!["my-tts".to_string(), "--fast".to_string()];
        let speaker = CommandSpeaker::detect(Some(&command)).unwrap();
        assert_eq!(speaker.program(), Path::new("my-tts"));
        assert_eq!(speaker.args, vec!["--fast"]);
    }

    #[test]
    fn test_find_program_in_dirs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("say"), "").unwrap();
        let dirs = vec![PathBuf::from("/definitely/missing"), dir.path().to_path_buf()];

        assert_eq!(
            find_program(SPEECH_PROGRAMS, &dirs),
            Some(dir.path().join("say"))
        );
        assert_eq!(find_program(&["espeak-ng"], &dirs), None);
    }

    #[test]
    fn test_command_speaker_missing_program_fails() {
        let speaker = CommandSpeaker::new("/definitely/missing/tts", Vec::new());
        assert!(matches!(speaker.speak("abandon"), Err(SpeechError::Failed(_))));
    }
}
