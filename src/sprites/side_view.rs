//! Side-view catalog art: dark metal hulls with neon trim.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::render::{Axis, Canvas, Glow, Primitive};
use crate::types::{Colour, Palette};

use super::{
    centre, frame_of, idle_only, polar, unsupported_state, unsupported_style, Airframe,
    BuildingKind, CarModel, Depth, Icon, Projectile, RoadKind, RooftopKind, SkyKind,
    Sprite, State, Style, TankClass, Weapon, Weather, Widget,
};

palette_tones!(
    bg_dark,
    bg_mid,
    bg_light,
    neon_cyan,
    neon_pink,
    neon_purple,
    neon_green,
    neon_red,
    neon_yellow,
    metal_dark,
    metal_mid,
    metal_light,
    glass,
    black,
    white,
);

const ASPHALT: Colour = Colour::rgb(25, 25, 30);
const CROSSWALK: Colour = Colour::rgb(35, 35, 40);
const WHITE_HOT: Colour = Colour::rgb(255, 255, 200);
const FLAME_YELLOW: Colour = Colour::rgb(255, 200, 50);
const FLAME: Colour = Colour::rgb(255, 100, 50);
const EXHAUST_BLUE: Colour = Colour::rgb(0, 200, 255);
const TRAIL_BLUE: Colour = Colour::rgb(100, 200, 255);
const SMOKE: Colour = Colour::rgb(100, 100, 110);
const SMOG: Colour = Colour::new(80, 85, 100, 60);
const RAIN: Colour = Colour::new(150, 200, 255, 100);
const SLUM_WALL: Colour = Colour::rgb(40, 35, 30);
const SLUM_TRIM: Colour = Colour::rgb(60, 55, 50);
const BROKEN_GLASS: Colour = Colour::rgb(20, 20, 25);
const RUST: Colour = Colour::rgb(100, 60, 40);
const PANEL: Colour = Colour::new(20, 20, 25, 200);
const BUTTON_FACE: Colour = Colour::new(20, 25, 35, 220);
const RADAR_FACE: Colour = Colour::new(15, 20, 30, 200);
const SKYLINE_FAR: Colour = Colour::rgb(15, 18, 28);
const SKYLINE_MID: Colour = Colour::rgb(25, 30, 45);
const SKYLINE_NEAR: Colour = Colour::rgb(35, 42, 58);
const SKYLINE_NEAR_EDGE: Colour = Colour::rgb(50, 58, 75);

/// Seed for the skyline layers; each layer offsets it by its depth.
const SKYLINE_SEED: u64 = 42;
const RAIN_SEED: u64 = 7;

pub(super) fn build(
    sprite: Sprite,
    state: State,
    size: (u32, u32),
    palette: &Palette,
) -> Result<Canvas> {
    let t = Tones::resolve(palette)?;
    let mut canvas = Canvas::new(size.0, size.1);
    let c = &mut canvas;

    match sprite {
        Sprite::Helicopter(Airframe::Player) => match state {
            State::Idle | State::BankLeft | State::BankRight | State::Damaged => {
                player_helicopter(c, &t, state)
            }
            other => return Err(unsupported_state(sprite, other)),
        },
        Sprite::Helicopter(airframe) => {
            idle_only(sprite, state)?;
            enemy_helicopter(c, &t, airframe);
        }
        Sprite::EngineExhaust => engine_exhaust(c, &t, frame_of(sprite, state, 4)?),
        Sprite::Tank(class) => {
            idle_only(sprite, state)?;
            tank(c, &t, class);
        }
        Sprite::Turret => {
            idle_only(sprite, state)?;
            turret(c, &t);
        }
        Sprite::Drone => {
            idle_only(sprite, state)?;
            drone(c, &t);
        }
        Sprite::Boss => {
            idle_only(sprite, state)?;
            boss(c, &t);
        }
        Sprite::Building(BuildingKind::Slum) => {
            return Err(unsupported_style(sprite, Style::SideView))
        }
        Sprite::Building(kind) => {
            idle_only(sprite, state)?;
            building(c, &t, kind);
        }
        Sprite::Slum => {
            idle_only(sprite, state)?;
            slum(c);
        }
        Sprite::Road(kind) => {
            idle_only(sprite, state)?;
            road(c, &t, kind);
        }
        Sprite::Bridge => {
            idle_only(sprite, state)?;
            bridge(c, &t);
        }
        Sprite::Rooftop(kind) => {
            idle_only(sprite, state)?;
            rooftop(c, &t, kind);
        }
        Sprite::Explosion(_) => explosion(c, frame_of(sprite, state, 4)?),
        Sprite::MuzzleFlash(Weapon::MachineGun) => {
            machine_gun_flash(c, &t, frame_of(sprite, state, 3)?)
        }
        Sprite::MuzzleFlash(Weapon::Missile) => {
            idle_only(sprite, state)?;
            missile_flash(c, &t);
        }
        Sprite::Bullet(kind) => {
            idle_only(sprite, state)?;
            bullet(c, &t, kind);
        }
        Sprite::Trail => trail(c, frame_of(sprite, state, 4)?),
        Sprite::Shield => {
            idle_only(sprite, state)?;
            shield(c, &t);
        }
        Sprite::Weather(kind) => {
            idle_only(sprite, state)?;
            weather(c, kind);
        }
        Sprite::Parallax(depth) => {
            idle_only(sprite, state)?;
            parallax(c, &t, depth);
        }
        Sprite::Sky(kind) => {
            idle_only(sprite, state)?;
            sky(c, kind);
        }
        Sprite::FlyingCar(model) => {
            idle_only(sprite, state)?;
            flying_car(c, &t, model);
        }
        Sprite::SmogCloud => {
            idle_only(sprite, state)?;
            smog(c);
        }
        Sprite::Widget(Widget::Button) => match state {
            State::Idle | State::Hover => button(c, &t, state == State::Hover),
            other => return Err(unsupported_state(sprite, other)),
        },
        Sprite::Widget(widget) => {
            idle_only(sprite, state)?;
            widget_chrome(c, &t, widget);
        }
    }

    Ok(canvas)
}

fn player_helicopter(c: &mut Canvas, t: &Tones, state: State) {
    let (cx, cy) = centre(c.size());
    let hull = if state == State::Damaged {
        t.metal_dark.darken(35.0)
    } else {
        t.metal_dark
    };

    c.draw(
        Primitive::polygon(vec![
            (cx, cy - 20),
            (cx + 12, cy - 5),
            (cx + 10, cy + 15),
            (cx, cy + 10),
            (cx - 10, cy + 15),
            (cx - 12, cy - 5),
        ])
        .fill(hull)
        .outline(t.metal_mid),
    );
    c.draw(
        Primitive::polygon(vec![(cx, cy - 12), (cx + 6, cy - 2), (cx, cy + 5), (cx - 6, cy - 2)])
            .fill(t.glass),
    );

    // main rotor
    let rotor_y = cy - 22;
    c.draw(Primitive::line((cx - 28, rotor_y), (cx + 28, rotor_y), 3).fill(t.metal_light));
    c.draw(Primitive::line((cx, rotor_y - 8), (cx, rotor_y + 8), 2).fill(t.metal_light));
    c.draw(Primitive::circle((cx, rotor_y), 3).fill(t.neon_cyan));

    // tail rotor
    let tail_y = cy + 18;
    c.draw(Primitive::line((cx, tail_y - 8), (cx, tail_y + 8), 2).fill(t.metal_mid));
    c.draw(Primitive::line((cx - 4, tail_y), (cx + 4, tail_y), 2).fill(t.metal_mid));

    // rocket pods
    c.draw(
        Primitive::rect([cx - 18, cy + 2, cx - 14, cy + 12])
            .fill(t.metal_mid)
            .outline(t.neon_cyan),
    );
    c.draw(
        Primitive::rect([cx + 14, cy + 2, cx + 18, cy + 12])
            .fill(t.metal_mid)
            .outline(t.neon_cyan),
    );

    c.draw(Primitive::line((cx - 8, cy + 8), (cx - 8, cy + 12), 2).fill(t.neon_cyan));
    c.draw(Primitive::line((cx + 8, cy + 8), (cx + 8, cy + 12), 2).fill(t.neon_cyan));
    c.draw(Primitive::line((cx - 2, cy + 15), (cx + 2, cy + 15), 2).fill(t.neon_pink));

    Glow::ellipse([cx - 4, cy + 16, cx + 4, cy + 22], t.neon_cyan)
        .spread(3)
        .intensity(90)
        .draw(c);

    match state {
        State::BankLeft => c.draw(
            Primitive::polygon(vec![(cx - 15, cy - 5), (cx - 20, cy), (cx - 15, cy + 5)])
                .fill(t.neon_cyan),
        ),
        State::BankRight => c.draw(
            Primitive::polygon(vec![(cx + 15, cy - 5), (cx + 20, cy), (cx + 15, cy + 5)])
                .fill(t.neon_cyan),
        ),
        State::Damaged => {
            c.draw(Primitive::line((cx - 10, cy - 10), (cx - 5, cy - 5), 2).fill(t.neon_red));
            c.draw(Primitive::line((cx + 5, cy + 5), (cx + 10, cy + 10), 2).fill(t.neon_red));
            let scorch = t.neon_red.with_alpha(100);
            c.composite(|layer| {
                layer.draw(Primitive::ellipse([cx - 15, cy - 5, cx - 5, cy + 5]).fill(scorch))
            });
        }
        _ => {}
    }
}

fn engine_exhaust(c: &mut Canvas, t: &Tones, frame: u32) {
    let (cx, cy) = (c.width() as i32 / 2, 8);
    let i = frame as i32;
    let size = 6 + i * 2;
    let base = if frame % 2 == 0 { t.neon_cyan } else { EXHAUST_BLUE };
    let fade = 1.0 - frame as f32 * 0.15;

    for r in (1..=size).rev() {
        let alpha = (200.0 * (r as f32 / size as f32) * fade) as u8;
        c.draw(
            Primitive::ellipse([cx - r, cy + i * 3, cx + r, cy + i * 3 + r])
                .fill(base.with_alpha(alpha)),
        );
    }
}

fn enemy_helicopter(c: &mut Canvas, t: &Tones, airframe: Airframe) {
    let (cx, cy) = centre(c.size());

    if airframe == Airframe::Scout {
        c.draw(
            Primitive::polygon(vec![
                (cx, cy - 12),
                (cx + 8, cy),
                (cx + 6, cy + 10),
                (cx, cy + 8),
                (cx - 6, cy + 10),
                (cx - 8, cy),
            ])
            .fill(t.metal_dark)
            .outline(t.neon_red),
        );
        c.draw(Primitive::circle((cx, cy), 4).fill(t.neon_red));
        c.draw(Primitive::line((cx - 20, cy - 10), (cx + 20, cy - 10), 2).fill(t.metal_mid));
        return;
    }

    c.draw(
        Primitive::polygon(vec![
            (cx, cy - 18),
            (cx + 15, cy - 5),
            (cx + 12, cy + 18),
            (cx, cy + 12),
            (cx - 12, cy + 18),
            (cx - 15, cy - 5),
        ])
        .fill(t.metal_dark)
        .outline(t.neon_purple),
    );
    c.draw(
        Primitive::rect([cx - 20, cy + 5, cx - 12, cy + 15])
            .fill(t.metal_mid)
            .outline(t.neon_purple),
    );
    c.draw(
        Primitive::rect([cx + 12, cy + 5, cx + 20, cy + 15])
            .fill(t.metal_mid)
            .outline(t.neon_purple),
    );
    c.draw(Primitive::line((cx - 30, cy - 20), (cx + 30, cy - 20), 4).fill(t.metal_light));
    c.draw(Primitive::ellipse([cx - 5, cy - 23, cx + 5, cy - 17]).fill(t.neon_purple));
}

fn tank(c: &mut Canvas, t: &Tones, class: TankClass) {
    let cx = c.width() as i32 / 2;

    match class {
        TankClass::Basic => {
            let cy = c.height() as i32 / 2 + 4;
            c.draw(
                Primitive::rect([cx - 20, cy - 8, cx + 20, cy + 12])
                    .fill(t.metal_dark)
                    .outline(t.metal_mid),
            );
            c.draw(
                Primitive::rect([cx - 10, cy - 15, cx + 10, cy - 5])
                    .fill(t.metal_mid)
                    .outline(t.neon_red),
            );
            c.draw(Primitive::rect([cx - 3, cy - 28, cx + 3, cy - 15]).fill(t.metal_light));
            c.draw(Primitive::rect([cx - 22, cy + 5, cx - 18, cy + 15]).fill(t.black));
            c.draw(Primitive::rect([cx + 18, cy + 5, cx + 22, cy + 15]).fill(t.black));
            c.draw(Primitive::line((cx - 15, cy), (cx + 15, cy), 2).fill(t.neon_red));
        }
        TankClass::Heavy => {
            let cy = c.height() as i32 / 2 + 2;
            c.draw(
                Primitive::rect([cx - 24, cy - 10, cx + 24, cy + 14])
                    .fill(t.metal_dark)
                    .outline(t.neon_purple),
            );
            c.draw(
                Primitive::rect([cx - 12, cy - 18, cx + 12, cy - 6])
                    .fill(t.metal_mid)
                    .outline(t.neon_purple),
            );
            c.draw(Primitive::rect([cx - 4, cy - 32, cx + 4, cy - 18]).fill(t.metal_light));
            c.draw(Primitive::rect([cx - 8, cy - 30, cx - 2, cy - 18]).fill(t.metal_light));
            c.draw(Primitive::rect([cx + 2, cy - 30, cx + 8, cy - 18]).fill(t.metal_light));
        }
    }
}

fn turret(c: &mut Canvas, t: &Tones) {
    let (cx, cy) = (c.width() as i32 / 2, c.height() as i32 / 2 + 4);

    c.draw(
        Primitive::rect([cx - 16, cy - 4, cx + 16, cy + 12])
            .fill(t.metal_dark)
            .outline(t.metal_mid),
    );
    c.draw(
        Primitive::ellipse([cx - 10, cy - 14, cx + 10, cy + 6])
            .fill(t.metal_mid)
            .outline(t.neon_cyan),
    );
    for offset in [-6, -2, 2, 6] {
        c.draw(
            Primitive::rect([cx + offset - 1, cy - 24, cx + offset + 1, cy - 14])
                .fill(t.metal_light),
        );
    }
    c.draw(Primitive::ellipse([cx - 4, cy - 8, cx + 4, cy]).fill(t.neon_cyan));
}

fn drone(c: &mut Canvas, t: &Tones) {
    let (cx, cy) = centre(c.size());

    c.draw(Primitive::circle((cx, cy), 6).fill(t.metal_dark).outline(t.neon_pink));
    c.draw(Primitive::line((cx - 10, cy - 10), (cx + 10, cy + 10), 2).fill(t.metal_mid));
    c.draw(Primitive::line((cx + 10, cy - 10), (cx - 10, cy + 10), 2).fill(t.metal_mid));
    c.draw(Primitive::circle((cx, cy), 3).fill(t.neon_pink));
}

fn boss(c: &mut Canvas, t: &Tones) {
    let (cx, cy) = centre(c.size());

    c.draw(
        Primitive::polygon(vec![
            (cx, cy - 40),
            (cx + 30, cy - 20),
            (cx + 35, cy + 20),
            (cx + 20, cy + 40),
            (cx, cy + 35),
            (cx - 20, cy + 40),
            (cx - 35, cy + 20),
            (cx - 30, cy - 20),
        ])
        .fill(t.metal_dark)
        .outline(t.neon_purple),
    );
    c.draw(
        Primitive::polygon(vec![
            (cx, cy - 25),
            (cx + 18, cy - 10),
            (cx + 20, cy + 15),
            (cx, cy + 25),
            (cx - 20, cy + 15),
            (cx - 18, cy - 10),
        ])
        .fill(t.metal_mid)
        .outline(t.neon_pink),
    );

    // cannons
    c.draw(
        Primitive::rect([cx - 6, cy - 60, cx + 6, cy - 40])
            .fill(t.metal_light)
            .outline(t.neon_red),
    );
    c.draw(
        Primitive::rect([cx - 30, cy - 30, cx - 22, cy - 10])
            .fill(t.metal_light)
            .outline(t.neon_red),
    );
    c.draw(
        Primitive::rect([cx + 22, cy - 30, cx + 30, cy - 10])
            .fill(t.metal_light)
            .outline(t.neon_red),
    );

    c.draw(Primitive::line((cx - 60, cy - 42), (cx + 60, cy - 42), 6).fill(t.metal_light));
    c.draw(Primitive::line((cx, cy - 55), (cx, cy - 30), 4).fill(t.metal_light));
    Glow::ellipse([cx - 8, cy - 46, cx + 8, cy - 38], t.neon_purple)
        .spread(4)
        .intensity(110)
        .draw(c);

    c.draw(Primitive::line((cx - 35, cy + 45), (cx - 35, cy + 55), 3).fill(t.metal_mid));
    c.draw(Primitive::line((cx + 35, cy + 45), (cx + 35, cy + 55), 3).fill(t.metal_mid));

    c.draw(
        Primitive::rect([cx - 50, cy + 10, cx - 35, cy + 30])
            .fill(t.metal_dark)
            .outline(t.neon_cyan),
    );
    c.draw(
        Primitive::rect([cx + 35, cy + 10, cx + 50, cy + 30])
            .fill(t.metal_dark)
            .outline(t.neon_cyan),
    );
}

fn building(c: &mut Canvas, t: &Tones, kind: BuildingKind) {
    match kind {
        BuildingKind::Small => {
            c.draw(Primitive::rect([8, 16, 56, 88]).fill(t.bg_mid).outline(t.metal_dark));
            for y in (24..80).step_by(12) {
                for x in (16..48).step_by(12) {
                    let lit = if (x + y) % 24 == 0 { t.neon_cyan } else { t.bg_light };
                    c.draw(Primitive::rect([x, y, x + 6, y + 8]).fill(lit));
                }
            }
            c.draw(Primitive::rect([20, 8, 24, 16]).fill(t.metal_mid));
            c.draw(Primitive::rect([40, 10, 44, 16]).fill(t.metal_mid));
        }
        BuildingKind::Tall => {
            c.draw(Primitive::rect([10, 20, 70, 150]).fill(t.bg_dark).outline(t.metal_dark));
            Glow::rect([38, 20, 42, 150], t.neon_pink)
                .spread(2)
                .intensity(120)
                .draw(c);
            for y in (30..140).step_by(15) {
                let left = if y % 30 == 0 { t.neon_cyan } else { t.bg_light };
                let right = if y % 45 == 0 { t.neon_purple } else { t.bg_light };
                c.draw(Primitive::rect([18, y, 32, y + 10]).fill(left));
                c.draw(Primitive::rect([48, y, 62, y + 10]).fill(right));
            }
        }
        BuildingKind::Corp => {
            c.draw(Primitive::rect([20, 10, 76, 180]).fill(t.bg_dark).outline(t.neon_cyan));
            // holographic billboard
            let holo = t.neon_purple.with_alpha(100);
            let edge = t.neon_pink;
            c.composite(|layer| {
                layer.draw(Primitive::rect([24, 40, 72, 80]).fill(holo).outline(edge))
            });
            for y in (100..170).step_by(12) {
                for x in (28..68).step_by(10) {
                    c.draw(Primitive::rect([x, y, x + 6, y + 8]).fill(t.neon_cyan));
                }
            }
        }
        BuildingKind::Slum => {}
    }
}

fn slum(c: &mut Canvas) {
    c.draw(Primitive::rect([8, 16, 56, 56]).fill(SLUM_WALL).outline(SLUM_TRIM));
    for window in [[16, 24, 26, 32], [38, 28, 48, 36], [20, 40, 30, 48]] {
        c.draw(Primitive::rect(window).fill(BROKEN_GLASS));
    }
    c.draw(Primitive::line((10, 45), (20, 55), 3).fill(RUST));
}

fn road(c: &mut Canvas, t: &Tones, kind: RoadKind) {
    let (w, h) = (c.width() as i32, c.height() as i32);
    c.draw(Primitive::rect([0, 0, w - 1, h - 1]).fill(ASPHALT));

    match kind {
        RoadKind::Straight => {
            for y in (8..h).step_by(16) {
                c.draw(Primitive::rect([w / 2 - 2, y, w / 2 + 2, y + 8]).fill(t.neon_yellow));
            }
        }
        RoadKind::Intersection => {
            for i in 0..4 {
                c.draw(Primitive::rect([i * 16, 0, i * 16 + 8, h - 1]).fill(CROSSWALK));
                c.draw(Primitive::rect([0, i * 16, w - 1, i * 16 + 8]).fill(CROSSWALK));
            }
            Glow::circle((w / 2, h / 2), 8, t.neon_cyan)
                .spread(4)
                .intensity(100)
                .draw(c);
        }
    }
}

fn rooftop(c: &mut Canvas, t: &Tones, kind: RooftopKind) {
    match kind {
        RooftopKind::AcUnit => {
            c.draw(Primitive::rect([4, 8, 28, 24]).fill(t.metal_mid).outline(t.metal_light));
            for y in [12, 16, 20] {
                c.draw(Primitive::line((8, y), (24, y), 2).fill(t.metal_dark));
            }
        }
        RooftopKind::Antenna => {
            let cx = c.width() as i32 / 2;
            c.draw(Primitive::line((cx, 8), (cx, 40), 2).fill(t.metal_mid));
            Glow::circle((cx, 8), 4, t.neon_red).spread(3).intensity(120).draw(c);
        }
    }
}

fn bridge(c: &mut Canvas, t: &Tones) {
    let w = c.width() as i32;
    c.draw(Primitive::rect([0, 20, w - 1, 44]).fill(t.metal_dark).outline(t.metal_mid));
    for x in (0..=w).step_by(16) {
        c.draw(Primitive::line((x, 20), (x + 8, 0), 1).fill(t.metal_mid));
        c.draw(Primitive::line((x, 44), (x + 8, 64), 1).fill(t.metal_mid));
    }
    c.draw(Primitive::line((0, 22), (w, 22), 2).fill(t.neon_cyan));
    c.draw(Primitive::line((0, 42), (w, 42), 2).fill(t.neon_cyan));
}

fn explosion(c: &mut Canvas, frame: u32) {
    let (cx, cy) = centre(c.size());
    let max_r = c.width() as i32 / 2 - 4;
    let r = max_r - frame as i32 * 4;
    if r <= 0 {
        return;
    }

    let fade = 1.0 - frame as f32 * 0.2;
    for ring in (1..=r).rev().step_by(4) {
        let share = ring as f32 / r as f32;
        let alpha = (255.0 * share * fade) as u8;
        let base = if share > 0.6 {
            WHITE_HOT
        } else if share > 0.3 {
            FLAME_YELLOW
        } else {
            FLAME
        };
        c.draw(Primitive::circle((cx, cy), ring).fill(base.with_alpha(alpha)));
    }
}

fn machine_gun_flash(c: &mut Canvas, t: &Tones, frame: u32) {
    let origin = (8, c.height() as i32 / 2);
    let length = 12.0 + frame as f32 * 4.0;

    for angle in (0..360).step_by(45) {
        let tip = polar(origin, angle as f32, length);
        c.draw(Primitive::line(origin, tip, 2).fill(t.neon_yellow));
    }
    c.draw(Primitive::circle(origin, 4).fill(t.white));
}

fn missile_flash(c: &mut Canvas, t: &Tones) {
    let origin = (16, c.height() as i32 / 2);
    Glow::circle(origin, 8, FLAME)
        .spread(12)
        .intensity(200)
        .core(t.white)
        .draw(c);
}

fn trail(c: &mut Canvas, frame: u32) {
    let cx = c.width() as i32 / 2;
    let base = if frame % 2 == 0 { Colour::rgb(0, 255, 255) } else { TRAIL_BLUE };
    let fade = 1.0 - frame as f32 * 0.2;

    for y in (0..32).step_by(4) {
        let alpha = (200.0 * (1.0 - y as f32 / 32.0) * fade) as u8;
        let size = 4 - y / 8;
        c.draw(Primitive::ellipse([cx - size, y, cx + size, y + 4]).fill(base.with_alpha(alpha)));
    }
}

fn bullet(c: &mut Canvas, t: &Tones, kind: Projectile) {
    let (head, streak) = match kind {
        Projectile::Player => (t.neon_cyan, t.neon_cyan),
        Projectile::Enemy => (t.neon_red, t.neon_red),
        Projectile::Missile => {
            c.draw(Primitive::rect([8, 4, 20, 8]).fill(t.metal_mid).outline(t.metal_light));
            c.draw(Primitive::polygon(vec![(20, 4), (24, 6), (20, 8)]).fill(t.neon_red));
            for x in 0..8 {
                let alpha = (200.0 * (1.0 - x as f32 / 8.0)) as u8;
                c.draw(Primitive::ellipse([x, 5, x + 2, 7]).fill(FLAME.with_alpha(alpha)));
            }
            return;
        }
    };

    for x in 4..16 {
        let alpha = (255.0 * (x - 4) as f32 / 12.0) as u8;
        c.draw(Primitive::line((x, 4), (x + 2, 4), 2).fill(streak.with_alpha(alpha)));
    }
    c.draw(Primitive::ellipse([0, 2, 6, 6]).fill(head));
}

fn shield(c: &mut Canvas, t: &Tones) {
    let (cx, cy) = centre(c.size());

    for r in (22..=30).rev().step_by(2) {
        let alpha = (100 * (30 - r) / 10) as u8;
        let ring = t.neon_cyan.with_alpha(alpha);
        c.composite(|layer| layer.draw(Primitive::circle((cx, cy), r).outline(ring).width(2)));
    }

    let hex = t.neon_cyan.with_alpha(150);
    c.composite(|layer| {
        layer.draw(
            Primitive::polygon(vec![
                (cx, cy - 25),
                (cx + 22, cy - 12),
                (cx + 22, cy + 12),
                (cx, cy + 25),
                (cx - 22, cy + 12),
                (cx - 22, cy - 12),
            ])
            .outline(hex)
            .width(2),
        )
    });
}

fn weather(c: &mut Canvas, kind: Weather) {
    let (cx, cy) = centre(c.size());

    match kind {
        Weather::Rain => {
            let mut rng = StdRng::seed_from_u64(RAIN_SEED);
            let (w, h) = (c.width() as i32, c.height() as i32);
            for _ in 0..30 {
                let x = rng.gen_range(0..=w);
                let y = rng.gen_range(0..=h);
                let length = rng.gen_range(4..=8);
                c.draw(Primitive::line((x, y), (x - 2, y + length), 1).fill(RAIN));
            }
        }
        Weather::Smoke => {
            Glow::circle((cx, cy), 2, SMOKE)
                .spread(18)
                .intensity(150)
                .core(SMOKE.with_alpha(150))
                .draw(c);
        }
        Weather::Fire => {
            for r in (1..=12).rev().step_by(2) {
                let alpha = (200 * r / 12) as u8;
                let flame = Colour::new(255, (100 + r * 10) as u8, 50, alpha);
                c.draw(Primitive::circle((cx, cy), r).fill(flame));
            }
        }
    }
}

fn parallax(c: &mut Canvas, t: &Tones, depth: Depth) {
    let (w, h) = (c.width() as i32, c.height() as i32);
    let mut rng = StdRng::seed_from_u64(SKYLINE_SEED + depth as u64);

    let mut x = 0;
    while x < w {
        match depth {
            Depth::Far => {
                let width = rng.gen_range(20..=50);
                let height = rng.gen_range(40..=100);
                c.draw(Primitive::rect([x, h - height, x + width, h - 1]).fill(SKYLINE_FAR));
                x += width + rng.gen_range(5..=15);
            }
            Depth::Mid => {
                let width = rng.gen_range(30..=60);
                let height = rng.gen_range(60..=140);
                c.draw(Primitive::rect([x, h - height, x + width, h - 1]).fill(SKYLINE_MID));
                for wy in ((h - height + 10)..(h - 10)).step_by(15) {
                    for wx in ((x + 5)..(x + width - 5)).step_by(10) {
                        if rng.gen_bool(0.5) {
                            c.draw(Primitive::rect([wx, wy, wx + 4, wy + 8]).fill(t.neon_cyan));
                        }
                    }
                }
                x += width + rng.gen_range(10..=20);
            }
            Depth::Near => {
                let width = rng.gen_range(40..=80);
                let height = rng.gen_range(80..=180);
                c.draw(
                    Primitive::rect([x, h - height, x + width, h - 1])
                        .fill(SKYLINE_NEAR)
                        .outline(SKYLINE_NEAR_EDGE),
                );
                if rng.gen_bool(0.4) {
                    let signs = [t.neon_pink, t.neon_purple, t.neon_cyan];
                    let sign = signs[rng.gen_range(0..signs.len())];
                    let sign_y = h - height + 20;
                    Glow::rect([x + 10, sign_y, x + width - 10, sign_y + 15], sign)
                        .spread(2)
                        .intensity(70)
                        .draw(c);
                }
                x += width + rng.gen_range(5..=15);
            }
        }
    }
}

fn sky(c: &mut Canvas, kind: SkyKind) {
    let (top, bottom) = match kind {
        SkyKind::Night => (Colour::rgb(5, 8, 20), Colour::rgb(20, 28, 50)),
        SkyKind::Dusk => (Colour::rgb(40, 20, 60), Colour::rgb(100, 50, 100)),
        SkyKind::Storm => (Colour::rgb(15, 18, 25), Colour::rgb(40, 45, 60)),
    };
    let (w, h) = (c.width() as i32, c.height() as i32);
    c.gradient([0, 0, w - 1, h - 1], top, bottom, Axis::Vertical);
}

fn flying_car(c: &mut Canvas, t: &Tones, model: CarModel) {
    match model {
        CarModel::Sleek => {
            c.draw(Primitive::ellipse([0, 4, 31, 12]).fill(t.metal_dark).outline(t.metal_mid));
            c.draw(Primitive::ellipse([8, 2, 24, 8]).fill(t.glass));
            c.draw(Primitive::ellipse([28, 5, 31, 9]).fill(t.neon_red));
            c.draw(Primitive::ellipse([0, 5, 4, 9]).fill(t.neon_cyan));
        }
        CarModel::Boxy => {
            c.draw(Primitive::rect([4, 6, 36, 14]).fill(t.metal_dark).outline(t.metal_mid));
            c.draw(Primitive::rect([12, 4, 28, 10]).fill(t.glass));
            c.draw(Primitive::ellipse([36, 7, 39, 11]).fill(t.neon_pink));
            c.draw(Primitive::ellipse([0, 7, 4, 11]).fill(t.neon_purple));
        }
    }
}

fn smog(c: &mut Canvas) {
    for puff in 0..5u64 {
        let mut rng = StdRng::seed_from_u64(puff);
        let x = rng.gen_range(10..=100);
        let y = rng.gen_range(10..=50);
        let r = rng.gen_range(15..=30);
        c.composite(|layer| layer.draw(Primitive::circle((x, y), r).fill(SMOG)));
    }
}

fn button(c: &mut Canvas, t: &Tones, hover: bool) {
    let (w, h) = (c.width() as i32, c.height() as i32);

    let face = if hover { BUTTON_FACE.lighten(15.0) } else { BUTTON_FACE };
    c.draw(Primitive::rect([0, 0, w - 1, h - 1]).fill(face).outline(t.neon_cyan).width(2));
    for corner in [
        [(4, 12), (4, 4), (12, 4)],
        [(w - 12, 4), (w - 4, 4), (w - 4, 12)],
        [(4, h - 12), (4, h - 4), (12, h - 4)],
        [(w - 12, h - 4), (w - 4, h - 4), (w - 4, h - 12)],
    ] {
        c.draw(Primitive::polyline(corner.to_vec(), 2).fill(t.neon_purple));
    }

    if hover {
        c.draw(Primitive::rect([2, 2, w - 3, h - 3]).outline(t.neon_pink).width(2));
    }
}

fn widget_chrome(c: &mut Canvas, t: &Tones, widget: Widget) {
    let (w, h) = (c.width() as i32, c.height() as i32);

    match widget {
        Widget::HudCorner => {
            c.draw(Primitive::polyline(vec![(0, 16), (0, 0), (16, 0)], 3).fill(t.neon_cyan));
            c.draw(Primitive::polyline(vec![(4, 16), (4, 4), (16, 4)], 2).fill(t.neon_purple));
        }
        Widget::HealthbarBg => {
            c.draw(Primitive::rect([0, 0, w - 1, h - 1]).fill(PANEL).outline(t.metal_mid));
        }
        Widget::HealthbarFill => {
            c.gradient([0, 0, w - 1, h - 1], t.neon_green, t.neon_red, Axis::Horizontal);
        }
        Widget::MinimapFrame => {
            c.draw(
                Primitive::ellipse([0, 0, w - 1, h - 1])
                    .fill(RADAR_FACE)
                    .outline(t.neon_cyan)
                    .width(3),
            );
            let grid = t.neon_cyan.with_alpha(80);
            c.composite(|layer| {
                layer.draw(Primitive::line((w / 2, 8), (w / 2, h - 8), 1).fill(grid));
                layer.draw(Primitive::line((8, h / 2), (w - 8, h / 2), 1).fill(grid));
            });
        }
        Widget::MinimapPlayer => {
            c.draw(
                Primitive::polygon(vec![(w / 2, 0), (w - 1, h - 1), (w / 2, h * 3 / 4), (0, h - 1)])
                    .fill(t.neon_green),
            );
        }
        Widget::MinimapEnemy => {
            c.draw(Primitive::rect([0, 0, w - 1, h - 1]).fill(t.neon_red));
        }
        Widget::Icon(Icon::MachineGun) => {
            c.draw(Primitive::rect([8, 12, 24, 20]).fill(t.metal_mid).outline(t.neon_cyan));
            c.draw(Primitive::rect([20, 10, 26, 14]).fill(t.metal_light));
        }
        Widget::Icon(Icon::Missile) => {
            c.draw(Primitive::rect([10, 8, 18, 26]).fill(t.metal_mid).outline(t.neon_pink));
            c.draw(Primitive::polygon(vec![(14, 4), (18, 8), (10, 8)]).fill(t.neon_red));
        }
        Widget::Icon(Icon::Health) => {
            c.draw(Primitive::rect([12, 4, 20, 28]).fill(t.neon_green));
            c.draw(Primitive::rect([4, 12, 28, 20]).fill(t.neon_green));
        }
        Widget::Button => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprites::Magnitude;

    fn render(sprite: Sprite, state: State, size: (u32, u32)) -> Canvas {
        build(sprite, state, size, &Palette::cyberpunk()).unwrap()
    }

    #[test]
    fn test_player_states_differ() {
        let idle = render(Sprite::Helicopter(Airframe::Player), State::Idle, (64, 64));
        for state in [State::BankLeft, State::BankRight, State::Damaged] {
            let other = render(Sprite::Helicopter(Airframe::Player), state, (64, 64));
            assert_ne!(idle, other, "{state}");
        }
    }

    #[test]
    fn test_enemy_airframes_differ() {
        let scout = render(Sprite::Helicopter(Airframe::Scout), State::Idle, (64, 64));
        let gunship = render(Sprite::Helicopter(Airframe::Gunship), State::Idle, (64, 64));
        assert_ne!(scout, gunship);
        assert!(scout.pixels().iter().any(|c| !c.is_transparent()));
    }

    #[test]
    fn test_bank_marker_side() {
        let left = render(Sprite::Helicopter(Airframe::Player), State::BankLeft, (64, 64));
        let right = render(Sprite::Helicopter(Airframe::Player), State::BankRight, (64, 64));
        let cyan = Colour::rgb(0, 255, 255);
        assert_eq!(left.get(16, 32), Some(cyan));
        assert_eq!(right.get(48, 32), Some(cyan));
    }

    #[test]
    fn test_player_hover_rejected() {
        let result = build(
            Sprite::Helicopter(Airframe::Player),
            State::Hover,
            (64, 64),
            &Palette::cyberpunk(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_skyline_is_reproducible() {
        let a = render(Sprite::Parallax(Depth::Mid), State::Idle, (256, 160));
        let b = render(Sprite::Parallax(Depth::Mid), State::Idle, (256, 160));
        assert_eq!(a, b);
        // buildings stand on the bottom row
        assert!(!a.get(0, 159).unwrap().is_transparent());
    }

    #[test]
    fn test_sky_gradient_darkest_at_top() {
        let sky = render(Sprite::Sky(SkyKind::Night), State::Idle, (64, 256));
        let top = sky.get(0, 0).unwrap();
        let bottom = sky.get(0, 255).unwrap();
        assert_eq!(top, Colour::rgb(5, 8, 20));
        assert!(bottom.b > top.b);
        assert!(sky.pixels().iter().all(|c| c.is_opaque()));
    }

    #[test]
    fn test_later_explosion_frames_fade() {
        let first = render(Sprite::Explosion(Magnitude::Medium), State::Frame(0), (64, 64));
        let last = render(Sprite::Explosion(Magnitude::Medium), State::Frame(3), (64, 64));
        let alpha = |c: &Canvas| c.pixels().iter().map(|p| p.a as u32).sum::<u32>();
        assert!(alpha(&first) > alpha(&last));
    }

    #[test]
    fn test_button_hover_adds_pink_frame() {
        let normal = render(Sprite::Widget(Widget::Button), State::Idle, (128, 48));
        let hover = render(Sprite::Widget(Widget::Button), State::Hover, (128, 48));
        let pink = Colour::rgb(255, 0, 128);
        assert_ne!(normal.get(2, 24), Some(pink));
        assert_eq!(hover.get(2, 24), Some(pink));

        let (face, lit) = (normal.get(64, 24).unwrap(), hover.get(64, 24).unwrap());
        assert!(lit.r > face.r && lit.b > face.b);
        assert_eq!(lit.a, face.a);
    }

    #[test]
    fn test_building_slum_has_no_side_view() {
        let result = build(
            Sprite::Building(BuildingKind::Slum),
            State::Idle,
            (64, 64),
            &Palette::cyberpunk(),
        );
        assert!(result.is_err());
    }
}
