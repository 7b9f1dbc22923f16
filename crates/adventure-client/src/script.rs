use std::path::Path;

use serde::Deserialize;

use adventure_core::input::{InputState, Key};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyAction {
    Press,
    Release,
}

/// A key going down or up at the start of a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct KeyEvent {
    pub tick: u64,
    pub key: Key,
    pub action: KeyAction,
}

#[derive(Debug)]
pub enum ScriptError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read key script: {e}"),
            Self::Parse(e) => write!(f, "invalid key script: {e}"),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ScriptFile {
    #[serde(default)]
    events: Vec<KeyEvent>,
}

/// Timed key presses and releases replayed into an [`InputState`].
#[derive(Debug, Clone, Default)]
pub struct KeyScript {
    /// Sorted by tick; same-tick events keep file order.
    events: Vec<KeyEvent>,
}

impl KeyScript {
    pub fn new(mut events: Vec<KeyEvent>) -> Self {
        events.sort_by_key(|e| e.tick);
        Self { events }
    }

    /// Parse a script of `[[events]]` tables.
    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        let file: ScriptFile = toml::from_str(content).map_err(ScriptError::Parse)?;
        Ok(Self::new(file.events))
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path).map_err(ScriptError::Io)?;
        let script = Self::parse(&content)?;
        tracing::info!(
            events = script.events.len(),
            "Loaded key script from {}",
            path.display()
        );
        Ok(script)
    }

    /// Start the game, walk right hopping over the first ledge, then keep
    /// jumping towards the upper platforms.
    pub fn demo() -> Self {
        use KeyAction::{Press, Release};
        let ev = |tick, key, action| KeyEvent { tick, key, action };
        Self::new(vec![
            ev(0, Key::Space, Press),
            ev(1, Key::Space, Release),
            ev(10, Key::Right, Press),
            ev(14, Key::Up, Press),
            ev(16, Key::Up, Release),
            ev(60, Key::Up, Press),
            ev(62, Key::Up, Release),
            ev(110, Key::Right, Release),
            ev(110, Key::Left, Press),
            ev(130, Key::Up, Press),
            ev(132, Key::Up, Release),
            ev(170, Key::Left, Release),
            ev(170, Key::Right, Press),
            ev(200, Key::Up, Press),
            ev(202, Key::Up, Release),
            ev(300, Key::Right, Release),
        ])
    }

    pub fn events(&self) -> &[KeyEvent] {
        &self.events
    }

    /// Feed every event scheduled for `tick` into `input`. Returns how many
    /// were applied.
    pub fn apply(&self, tick: u64, input: &mut InputState) -> usize {
        let start = self.events.partition_point(|e| e.tick < tick);
        let due = self.events[start..]
            .iter()
            .take_while(|e| e.tick == tick);

        let mut applied = 0;
        for event in due {
            match event.action {
                KeyAction::Press => input.on_key_down(event.key),
                KeyAction::Release => input.on_key_up(event.key),
            }
            applied += 1;
        }
        applied
    }
}
