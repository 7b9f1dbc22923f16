mod renderer;
mod script;

use std::cell::Cell;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use adventure_core::input::InputState;
use adventure_core::time::{Clock, FramePacer, SystemClock};
use adventure_platformer::config::GameConfig;
use adventure_platformer::{GameEvent, GameSession, GameState, render};

use renderer::TextRenderer;
use script::KeyScript;

const VIEW_COLS: usize = 80;
const VIEW_ROWS: usize = 30;

#[derive(Debug, Clone, PartialEq)]
struct Args {
    ticks: u64,
    script: Option<PathBuf>,
    fast: bool,
    render_every: u64,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            ticks: 600,
            script: None,
            fast: false,
            render_every: 30,
        }
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Args {
    let mut parsed = Args::default();
    for arg in args {
        if let Some(v) = arg.strip_prefix("--ticks=") {
            match v.parse() {
                Ok(n) => parsed.ticks = n,
                Err(_) => tracing::warn!("Ignoring bad --ticks value {v:?}"),
            }
        } else if let Some(v) = arg.strip_prefix("--render-every=") {
            match v.parse::<u64>() {
                Ok(n) if n > 0 => parsed.render_every = n,
                _ => tracing::warn!("Ignoring bad --render-every value {v:?}"),
            }
        } else if let Some(v) = arg.strip_prefix("--script=") {
            parsed.script = Some(PathBuf::from(v));
        } else if arg == "--fast" {
            parsed.fast = true;
        } else {
            tracing::warn!("Unknown argument {arg:?}");
        }
    }
    parsed
}

/// Simulated time advancing by a fixed step per tick, for unpaced runs.
struct SteppedClock {
    now: Cell<u64>,
    step_ms: u64,
}

impl SteppedClock {
    fn new(step_ms: u64) -> Self {
        Self {
            now: Cell::new(0),
            step_ms,
        }
    }

    fn advance(&self) {
        self.now.set(self.now.get() + self.step_ms);
    }
}

impl Clock for SteppedClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = parse_args(std::env::args().skip(1));

    let config = GameConfig::load();
    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    let script = match &args.script {
        Some(path) => match KeyScript::load(path) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("{e}");
                std::process::exit(1);
            },
        },
        None => KeyScript::demo(),
    };

    let mut renderer = match TextRenderer::new(
        VIEW_COLS,
        VIEW_ROWS,
        config.screen_width,
        config.screen_height,
    ) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Cannot create renderer: {e}");
            std::process::exit(1);
        },
    };

    let mut pacer = FramePacer::new(config.tick_rate_hz);
    let stepped = SteppedClock::new(pacer.period().as_millis().max(1) as u64);
    let system = SystemClock::new();
    let clock: &dyn Clock = if args.fast { &stepped } else { &system };

    tracing::info!(
        ticks = args.ticks,
        fast = args.fast,
        render_every = args.render_every,
        "Platformer Adventure starting"
    );

    let mut session = GameSession::new(config);
    let mut input = InputState::new();

    for tick in 0..args.ticks {
        script.apply(tick, &mut input);
        let events = session.tick(&input, clock);
        input.end_frame();

        for event in &events {
            if let GameEvent::Finished { final_time_ms } = event {
                tracing::info!(final_time_ms, score = session.score(), "Run complete");
            }
        }

        if tick % args.render_every == 0 || session.state() != GameState::Playing {
            render::draw_session(&session, clock.now_ms(), &mut renderer);
            println!("{}", renderer.frame());
        }

        if args.fast {
            stepped.advance();
        } else {
            pacer.wait();
        }
    }

    tracing::info!(
        state = ?session.state(),
        score = session.score(),
        total_coins = session.total_coins(),
        "Stopped after tick budget"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Args {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_without_flags() {
        assert_eq!(args(&[]), Args::default());
    }

    #[test]
    fn parses_all_flags() {
        let parsed = args(&[
            "--ticks=120",
            "--script=keys.toml",
            "--fast",
            "--render-every=5",
        ]);
        assert_eq!(parsed.ticks, 120);
        assert_eq!(parsed.script, Some(PathBuf::from("keys.toml")));
        assert!(parsed.fast);
        assert_eq!(parsed.render_every, 5);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let parsed = args(&["--ticks=lots", "--render-every=0", "--bogus"]);
        assert_eq!(parsed.ticks, Args::default().ticks);
        assert_eq!(parsed.render_every, Args::default().render_every);
    }

    #[test]
    fn stepped_clock_advances_by_step() {
        let clock = SteppedClock::new(16);
        clock.advance();
        clock.advance();
        assert_eq!(clock.now_ms(), 32);
    }

    #[test]
    fn demo_script_starts_a_session() {
        let script = KeyScript::demo();
        let clock = SteppedClock::new(16);
        let mut session = GameSession::default();
        let mut input = InputState::new();
        for tick in 0..5 {
            script.apply(tick, &mut input);
            session.tick(&input, &clock);
            input.end_frame();
            clock.advance();
        }
        assert_eq!(session.state(), GameState::Playing);
    }

    #[test]
    fn session_frame_renders_to_text() {
        let mut session = GameSession::default();
        let mut input = InputState::new();
        KeyScript::demo().apply(0, &mut input);
        session.tick(&input, &SteppedClock::new(16));

        let mut renderer = TextRenderer::new(VIEW_COLS, VIEW_ROWS, 800.0, 600.0).unwrap();
        render::draw_session(&session, 0, &mut renderer);
        let frame = renderer.frame();
        assert!(frame.contains("Coins Collected: 0"));
        assert!(frame.contains('E'), "Enemies are drawn");
        assert_eq!(frame.lines().count(), VIEW_ROWS);
    }
}
