use adventure_core::color::Color;
use adventure_core::render::RenderSink;

use crate::entity::EntityRef;
use crate::scoring::format_elapsed;
use crate::{GameSession, GameState, SessionSnapshot};

/// Draw one frame of the session into `sink`.
pub fn draw_session(session: &GameSession, now_ms: u64, sink: &mut dyn RenderSink) {
    draw_snapshot(&session.snapshot(now_ms), sink);
}

/// Draw one frame from a snapshot: clear, per-state content, present.
pub fn draw_snapshot(snap: &SessionSnapshot, sink: &mut dyn RenderSink) {
    sink.clear(snap.background);

    let cx = snap.screen_width / 2.0;
    let cy = snap.screen_height / 2.0;

    match snap.state {
        GameState::Start => {
            sink.draw_text("Platformer Adventure", cx - 100.0, cy - 50.0, Color::WHITE);
            sink.draw_text("Press SPACE to Start", cx - 100.0, cy, Color::WHITE);
        },
        GameState::Playing => {
            draw_world(snap, sink);
            draw_hud(snap, sink);
        },
        GameState::GameOver => {
            sink.draw_text("Game Over", cx - 50.0, cy - 50.0, Color::RED);
            sink.draw_text(
                &format!("Final Coins: {}", snap.score),
                cx - 50.0,
                cy,
                Color::WHITE,
            );
            sink.draw_text("Press SPACE to Restart", cx - 100.0, cy + 50.0, Color::WHITE);
        },
        GameState::Finished => {
            sink.draw_text("You Win!", cx - 50.0, cy - 50.0, Color::WHITE);
            sink.draw_text(
                &format!("Final Coins: {}", snap.score),
                cx - 50.0,
                cy,
                Color::WHITE,
            );
            sink.draw_text(
                &format!("Time: {}", format_elapsed(snap.elapsed_ms)),
                cx - 50.0,
                cy + 25.0,
                Color::WHITE,
            );
            sink.draw_text("Press SPACE to Replay", cx - 100.0, cy + 50.0, Color::WHITE);
        },
    }

    sink.present();
}

/// Platforms, enemies, coins, power-ups, then the player on top.
fn draw_world(snap: &SessionSnapshot, sink: &mut dyn RenderSink) {
    let entities = snap
        .platforms
        .iter()
        .map(EntityRef::Platform)
        .chain(snap.enemies.iter().map(EntityRef::Enemy))
        .chain(snap.coins.iter().map(EntityRef::Coin))
        .chain(snap.powerups.iter().map(EntityRef::PowerUp))
        .chain(std::iter::once(EntityRef::Player(&snap.player)));

    for entity in entities.filter(EntityRef::is_visible) {
        let r = entity.rect();
        sink.draw_rect(r.x, r.y, r.width, r.height, entity.color());
    }
}

fn draw_hud(snap: &SessionSnapshot, sink: &mut dyn RenderSink) {
    sink.draw_text(
        &format!("Coins Collected: {}", snap.score),
        10.0,
        10.0,
        Color::WHITE,
    );
    sink.draw_text(
        &format!("Level {}", snap.level_index + 1),
        snap.screen_width - 100.0,
        10.0,
        Color::WHITE,
    );
    sink.draw_text(
        &format!("Time: {}", format_elapsed(snap.elapsed_ms)),
        10.0,
        35.0,
        Color::WHITE,
    );
    if let Some(remaining) = snap.powerup_remaining_ms {
        sink.draw_text(
            &format!("Boost: {}", format_elapsed(remaining)),
            10.0,
            60.0,
            Color::CYAN,
        );
    }
}
