use crate::entity::{Bounded, Coin, Enemy, Platform, Player, PowerUp, Rect};

/// Side of a platform a correction pushed the player out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Landed on the platform.
    Top,
    /// Bumped the platform from below.
    Bottom,
    /// Pushed back out of the platform's left face.
    Left,
    /// Pushed back out of the platform's right face.
    Right,
}

/// Penetration depths of `player` into `platform` along each face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Penetration {
    pub fn between(player: &Rect, platform: &Rect) -> Self {
        Self {
            left: player.right() - platform.left(),
            right: platform.right() - player.left(),
            top: player.bottom() - platform.top(),
            bottom: platform.bottom() - player.top(),
        }
    }

    pub fn min(&self) -> f32 {
        self.left.min(self.right).min(self.top).min(self.bottom)
    }
}

/// Pick the correction for one overlapping platform, or `None` if the player is
/// moving away from the minimum-penetration face.
///
/// Candidates are tried top, bottom, left, right; the first face that is both
/// minimal and consistent with the velocity wins, so equal depths resolve in
/// that order.
pub fn choose_side(pen: &Penetration, vx: f32, vy: f32) -> Option<Side> {
    let min = pen.min();
    if min == pen.top && vy > 0.0 {
        Some(Side::Top)
    } else if min == pen.bottom && vy < 0.0 {
        Some(Side::Bottom)
    } else if min == pen.left && vx > 0.0 {
        Some(Side::Left)
    } else if min == pen.right && vx < 0.0 {
        Some(Side::Right)
    } else {
        None
    }
}

/// Push the player out of every overlapping platform, in platform order.
///
/// Each correction is visible to the next platform check. A top resolution
/// sets the ground flag; nothing here clears it (only a jump does). Returns
/// true if a top resolution happened this pass.
pub fn resolve_platforms(player: &mut Player, platforms: &[Platform]) -> bool {
    let mut landed = false;

    for platform in platforms {
        let p = player.rect();
        let plat = platform.rect();
        if !p.overlaps(&plat) {
            continue;
        }

        let pen = Penetration::between(&p, &plat);
        match choose_side(&pen, player.vx, player.vy) {
            Some(Side::Top) => {
                player.y = plat.top() - player.height;
                player.vy = 0.0;
                player.is_on_ground = true;
                landed = true;
            },
            Some(Side::Bottom) => {
                player.y = plat.bottom();
                player.vy = 0.0;
            },
            Some(Side::Left) => {
                player.x = plat.left() - player.width;
                player.vx = 0.0;
            },
            Some(Side::Right) => {
                player.x = plat.right();
                player.vx = 0.0;
            },
            None => {},
        }
    }

    landed
}

/// Any overlap with an enemy is a hit, whatever the velocities.
pub fn hits_enemy(player: &Rect, enemies: &[Enemy]) -> bool {
    enemies.iter().any(|e| player.overlaps(&e.rect()))
}

/// Collect every uncollected coin the player overlaps and drop it from the
/// active set. Returns how many were collected.
pub fn collect_coins(player: &Rect, coins: &mut Vec<Coin>) -> u32 {
    let mut collected = 0;
    for coin in coins.iter_mut() {
        if !coin.collected && player.overlaps(&coin.rect()) {
            coin.collected = true;
            collected += 1;
        }
    }
    coins.retain(|c| !c.collected);
    collected
}

/// Same as [`collect_coins`] for power-ups.
pub fn collect_powerups(player: &Rect, powerups: &mut Vec<PowerUp>) -> u32 {
    let mut collected = 0;
    for pu in powerups.iter_mut() {
        if !pu.collected && player.overlaps(&pu.rect()) {
            pu.collected = true;
            collected += 1;
        }
    }
    powerups.retain(|p| !p.collected);
    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::powerups::PowerUpKind;

    fn player_at(x: f32, y: f32, vx: f32, vy: f32) -> Player {
        let mut p = Player::new(x, y, 40.0, 40.0);
        p.vx = vx;
        p.vy = vy;
        p
    }

    #[test]
    fn landing_snaps_to_platform_top() {
        let platform = Platform::new(200.0, 400.0, 200.0, 20.0);
        let mut player = player_at(250.0, 365.0, 0.0, 5.0);

        let landed = resolve_platforms(&mut player, &[platform]);

        assert!(landed);
        assert_eq!(player.y, 360.0);
        assert_eq!(player.vy, 0.0);
        assert!(player.is_on_ground);
    }

    #[test]
    fn rising_player_is_not_pulled_onto_top() {
        // Top is the shallowest face but the player is moving up through it.
        let platform = Platform::new(200.0, 400.0, 200.0, 20.0);
        let mut player = player_at(250.0, 365.0, 0.0, -3.0);

        resolve_platforms(&mut player, &[platform]);

        assert_eq!(player.y, 365.0, "No correction against velocity");
        assert!(!player.is_on_ground);
    }

    #[test]
    fn head_bump_stops_upward_motion() {
        let platform = Platform::new(200.0, 400.0, 200.0, 20.0);
        // Player top is 3 units inside the platform's bottom face.
        let mut player = player_at(250.0, 417.0, 0.0, -6.0);

        resolve_platforms(&mut player, &[platform]);

        assert_eq!(player.y, 420.0);
        assert_eq!(player.vy, 0.0);
        assert!(!player.is_on_ground);
    }

    #[test]
    fn walking_into_left_face_stops_vx() {
        let wall = Platform::new(300.0, 300.0, 20.0, 200.0);
        let mut player = player_at(262.0, 380.0, 5.0, 0.0);

        resolve_platforms(&mut player, &[wall]);

        assert_eq!(player.x, 260.0);
        assert_eq!(player.vx, 0.0);
    }

    #[test]
    fn walking_into_right_face_stops_vx() {
        let wall = Platform::new(300.0, 300.0, 20.0, 200.0);
        let mut player = player_at(317.0, 380.0, -5.0, 0.0);

        resolve_platforms(&mut player, &[wall]);

        assert_eq!(player.x, 320.0);
        assert_eq!(player.vx, 0.0);
    }

    #[test]
    fn equal_depths_prefer_top_over_left() {
        let pen = Penetration {
            left: 2.0,
            right: 50.0,
            top: 2.0,
            bottom: 50.0,
        };
        assert_eq!(choose_side(&pen, 5.0, 1.0), Some(Side::Top));
        // Not falling: top is skipped and the next matching face wins.
        assert_eq!(choose_side(&pen, 5.0, 0.0), Some(Side::Left));
        assert_eq!(choose_side(&pen, 0.0, 0.0), None);
    }

    #[test]
    fn second_platform_sees_corrected_position() {
        // Two stacked slabs: after landing on the first, the player no longer
        // overlaps the second one below it.
        let upper = Platform::new(200.0, 400.0, 200.0, 20.0);
        let lower = Platform::new(200.0, 405.0, 200.0, 20.0);
        let mut player = player_at(250.0, 368.0, 0.0, 8.0);

        resolve_platforms(&mut player, &[upper, lower]);

        assert_eq!(player.y, 360.0);
        assert!(player.is_on_ground);
    }

    #[test]
    fn ground_flag_survives_a_pass_without_contact() {
        let mut player = player_at(0.0, 0.0, 0.0, 1.0);
        player.is_on_ground = true;
        assert!(!resolve_platforms(&mut player, &[]), "No landing this pass");
        assert!(player.is_on_ground, "Only a jump clears the ground flag");
    }

    #[test]
    fn side_push_does_not_count_as_landing() {
        let wall = Platform::new(300.0, 300.0, 20.0, 200.0);
        let mut player = player_at(262.0, 380.0, 5.0, 0.0);
        assert!(!resolve_platforms(&mut player, &[wall]));
        assert!(!player.is_on_ground);
    }

    #[test]
    fn enemy_overlap_is_a_hit_regardless_of_velocity() {
        let platform = Platform::new(0.0, 400.0, 300.0, 20.0);
        let enemy = Enemy::on_platform(0, &platform, 100.0, 30.0, 30.0, 2.0);
        let touching = Rect::new(125.0, 360.0, 40.0, 40.0);
        let clear = Rect::new(200.0, 360.0, 40.0, 40.0);
        assert!(hits_enemy(&touching, std::slice::from_ref(&enemy)));
        assert!(!hits_enemy(&clear, &[enemy]));
    }

    #[test]
    fn coins_collected_once_and_removed() {
        let mut coins = vec![
            Coin::at(Rect::new(10.0, 10.0, 20.0, 20.0)),
            Coin::at(Rect::new(500.0, 10.0, 20.0, 20.0)),
        ];
        let player = Rect::new(0.0, 0.0, 40.0, 40.0);

        assert_eq!(collect_coins(&player, &mut coins), 1);
        assert_eq!(coins.len(), 1);
        assert_eq!(coins[0].x, 500.0);

        assert_eq!(
            collect_coins(&player, &mut coins),
            0,
            "A collected coin must never count twice"
        );
    }

    #[test]
    fn flagged_coin_is_skipped_and_pruned() {
        let mut coin = Coin::at(Rect::new(10.0, 10.0, 20.0, 20.0));
        coin.collected = true;
        let mut coins = vec![coin];
        assert_eq!(collect_coins(&Rect::new(0.0, 0.0, 40.0, 40.0), &mut coins), 0);
        assert!(coins.is_empty());
    }

    #[test]
    fn powerups_collected_and_removed() {
        let mut pus = vec![PowerUp::at(
            Rect::new(10.0, 10.0, 20.0, 20.0),
            PowerUpKind::JumpBoost,
        )];
        let player = Rect::new(0.0, 0.0, 40.0, 40.0);
        assert_eq!(collect_powerups(&player, &mut pus), 1);
        assert!(pus.is_empty());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn resolution_never_leaves_player_inside_from_above(
                x in 160.0f32..380.0,
                depth in 0.1f32..9.9,
                vy in 0.1f32..10.0,
            ) {
                // Player falling onto a wide slab with shallow penetration.
                let platform = Platform::new(0.0, 400.0, 800.0, 20.0);
                let mut player = player_at(x, 360.0 + depth, 0.0, vy);
                resolve_platforms(&mut player, &[platform]);
                prop_assert_eq!(player.y, 360.0);
                prop_assert!(player.is_on_ground);
                prop_assert!(!player.rect().overlaps(&platform.rect()));
            }

            #[test]
            fn coin_count_is_exactly_once(
                positions in proptest::collection::vec((0.0f32..200.0, 0.0f32..200.0), 1..20),
                sweeps in 1usize..5,
            ) {
                let mut coins: Vec<Coin> = positions
                    .iter()
                    .map(|&(x, y)| Coin::at(Rect::new(x, y, 20.0, 20.0)))
                    .collect();
                let initial = coins.len() as u32;
                let player = Rect::new(0.0, 0.0, 220.0, 220.0);

                let mut total = 0;
                for _ in 0..sweeps {
                    total += collect_coins(&player, &mut coins);
                }
                prop_assert_eq!(total, initial);
                prop_assert!(coins.is_empty());
            }
        }
    }
}
